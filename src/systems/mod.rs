//! Time-driven systems advanced by the editor tick.

pub mod wave;
