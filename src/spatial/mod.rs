//! Spatial layer: the fixed cell grid and the flood region search over it.

pub mod grid;
pub mod flood;
