//! Editor - the pixel board as the page sees it
//!
//! `EditorCore` owns the grid, the tool state, the wave scheduler and the
//! storage handle, and routes input into them. It only orchestrates:
//! - flood search lives in spatial/flood.rs
//! - animation timing lives in systems/wave
//! - snapshots live in storage/
//! - PNG encoding lives in export/
//!
//! Time never comes from inside the core; every time-dependent call takes
//! `now_ms`. The wasm facade reads the clock and forwards it.

use std::collections::VecDeque;

use crate::domain::tools::{Tool, ToolState};
use crate::export::ExportedImage;
use crate::spatial::grid::Grid;
use crate::storage::KeyValueStore;
use crate::systems::wave::{WaveEvent, WaveScheduler};

#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/paint.rs"]
mod paint;
#[path = "commands/fill.rs"]
mod fill;
#[path = "commands/persist.rs"]
mod persist;
#[path = "commands/export.rs"]
mod export;
#[path = "input/keys.rs"]
mod keys;
#[path = "step/tick.rs"]
mod tick;
#[path = "render/render_extract.rs"]
mod render_extract;
mod clock;
mod facade;

pub use config::EditorConfig;
pub use facade::{ExportedPng, PixelBoard};

/// Transient message for the page's toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notification {
    ImageSaved,
    SaveFailed,
}

impl Notification {
    pub fn message(self) -> &'static str {
        match self {
            Notification::ImageSaved => "Image saved!",
            Notification::SaveFailed => "Save failed!",
        }
    }
}

pub struct EditorCore {
    grid: Grid,
    tools: ToolState,
    waves: WaveScheduler,
    store: Box<dyn KeyValueStore>,
    config: EditorConfig,

    notifications: VecDeque<Notification>,
    last_export: Option<ExportedImage>,

    // Render buffers read by JS after each tick
    display_colors: Vec<u32>,
    display_scales: Vec<f32>,

    // State; `now_ms` is the latest host timestamp and stamps every save
    now_ms: f64,
    last_autosave_ms: Option<f64>,
    saves: u64,
}

impl EditorCore {
    /// Build the editor and restore any saved drawing from `store`.
    /// A malformed snapshot is logged and ignored.
    pub fn new(config: EditorConfig, store: Box<dyn KeyValueStore>) -> Self {
        init::create_editor_core(config, store)
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn tools(&self) -> &ToolState { &self.tools }

    pub fn waves(&self) -> &WaveScheduler { &self.waves }

    pub fn store(&self) -> &dyn KeyValueStore { self.store.as_ref() }

    pub fn config(&self) -> &EditorConfig { &self.config }

    /// Snapshot saves written so far (completions, paints, autosave).
    pub fn saves_performed(&self) -> u64 { self.saves }

    pub fn is_animating(&self) -> bool { !self.waves.is_idle() }

    // === SETTINGS ===

    pub fn set_per_hop_delay_ms(&mut self, ms: f64) {
        settings::set_per_hop_delay_ms(self, ms);
    }

    pub fn set_transition_ms(&mut self, ms: f64) {
        settings::set_transition_ms(self, ms);
    }

    pub fn set_autosave_interval_ms(&mut self, ms: f64) {
        settings::set_autosave_interval_ms(self, ms);
    }

    pub fn set_cell_size_px(&mut self, px: u32) {
        settings::set_cell_size_px(self, px);
    }

    // === TOOLS & INPUT ===

    /// Select a tool; `Tool::Save` also exports the drawing.
    pub fn select_tool(&mut self, tool: Tool, epoch_ms: i64) {
        if self.tools.select(tool) {
            export::export_image(self, epoch_ms);
        }
    }

    /// Handle a `keydown`. Returns the tool it selected, if any; the host should
    /// suppress the browser default when this is `Some`.
    pub fn key_down(&mut self, key: &str, ctrl_or_meta: bool, epoch_ms: i64) -> Option<Tool> {
        keys::key_down(self, key, ctrl_or_meta, epoch_ms)
    }

    pub fn click(&mut self, idx: usize, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        paint::click(self, idx)
    }

    pub fn pointer_down(&mut self, idx: usize, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        paint::pointer_down(self, idx, now_ms)
    }

    pub fn pointer_over(&mut self, idx: usize, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        paint::pointer_over(self, idx)
    }

    pub fn pointer_up(&mut self) {
        paint::pointer_up(self)
    }

    /// Start a flood-fill wave at `seed` with the current color.
    /// `false` when the seed already has that color (nothing scheduled).
    pub fn fill(&mut self, seed: usize, now_ms: f64) -> bool {
        fill::fill(self, seed, now_ms)
    }

    // === DRAWING ===

    /// Reset every cell, drop the stored snapshot, then save the empty board.
    pub fn clear_drawing(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        paint::clear_drawing(self)
    }

    /// Save the board, stamped with `now_ms` (epoch milliseconds).
    pub fn save_snapshot(&mut self, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        persist::save(self)
    }

    pub fn export_image(&mut self, epoch_ms: i64) -> bool {
        export::export_image(self, epoch_ms)
    }

    pub fn take_export(&mut self) -> Option<ExportedImage> {
        self.last_export.take()
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notifications.pop_front()
    }

    // === STEP ===

    /// Advance animations and autosave to `now_ms`, then refresh render buffers.
    pub fn tick(&mut self, now_ms: f64) -> Vec<WaveEvent> {
        tick::tick(self, now_ms)
    }

    // === RENDER ===

    pub fn display_colors(&self) -> &[u32] { &self.display_colors }

    pub fn display_scales(&self) -> &[f32] { &self.display_scales }

    /// Get pointer to display colors (ABGR per cell, for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 { self.display_colors.as_ptr() }

    /// Get pointer to display scales (one f32 per cell)
    pub fn scales_ptr(&self) -> *const f32 { self.display_scales.as_ptr() }

    fn refresh_display(&mut self) {
        render_extract::refresh_display(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
