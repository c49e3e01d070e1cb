//! Pixel Wave Engine - pixel-art board with an animated flood fill, in WASM
//!
//! Architecture:
//! - core/     - console logging, errors
//! - domain/   - colors, palette, tools and hotkeys
//! - spatial/  - fixed 30×15 grid, flood region search
//! - systems/  - wave animation scheduler
//! - storage/  - key-value store seam, drawing snapshots
//! - export/   - PNG export
//! - editor/   - orchestration and the wasm API

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod storage;
pub mod export;
pub mod editor;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Pixel Wave engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::EngineError;
pub use domain::color::{Rgb, DEFAULT_BACKGROUND, EXPORT_SENTINEL};
pub use domain::tools::{Tool, ToolState};
pub use editor::{EditorConfig, EditorCore, Notification, PixelBoard};
pub use spatial::flood::{flood_search, plan_fill, DistanceMap};
pub use spatial::grid::{Grid, GRID_CELLS, GRID_COLS, GRID_ROWS};
pub use storage::{KeyValueStore, MemoryStore};
pub use systems::wave::{WaveEvent, WaveScheduler};
