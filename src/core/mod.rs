//! Core plumbing shared by every module: console logging and the engine error type.

// Logging macros must be declared before the modules that use them.
#[macro_use]
#[path = "utils/console.rs"]
pub mod console;
pub mod error;

pub use error::{EngineError, Result};
