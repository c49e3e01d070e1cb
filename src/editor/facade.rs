use wasm_bindgen::prelude::*;

use crate::domain::palette::PaletteColor;
use crate::domain::tools::Tool;
use crate::spatial::grid::{GRID_CELLS, GRID_COLS, GRID_ROWS};
#[cfg(target_arch = "wasm32")]
use crate::storage::LocalStorage;
use crate::storage::{last_saved_at, KeyValueStore, MemoryStore};

use super::{clock, EditorConfig, EditorCore};

/// PNG produced by the save tool, ready for a download link.
#[wasm_bindgen]
pub struct ExportedPng {
    file_name: String,
    bytes: Vec<u8>,
}

#[wasm_bindgen]
impl ExportedPng {
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String { self.file_name.clone() }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> { self.bytes.clone() }
}

#[wasm_bindgen]
pub struct PixelBoard {
    core: EditorCore,
}

fn open_store() -> Box<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        match LocalStorage::open() {
            Ok(storage) => return Box::new(storage),
            Err(e) => console_warn!("{}; the drawing will not survive a reload", e),
        }
    }
    Box::new(MemoryStore::new())
}

fn epoch_ms() -> i64 {
    clock::now_ms() as i64
}

#[wasm_bindgen]
impl PixelBoard {
    /// Create the board with default timings, restoring from localStorage
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: EditorCore::new(EditorConfig::default(), open_store()),
        }
    }

    /// Create the board from a JSON `EditorConfig` (missing fields use defaults)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: String) -> Result<PixelBoard, JsValue> {
        let config = EditorConfig::from_json(&json)?;
        Ok(Self {
            core: EditorCore::new(config, open_store()),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { GRID_COLS as u32 }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { GRID_ROWS as u32 }

    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> u32 { GRID_CELLS as u32 }

    pub fn get_config_json(&self) -> String {
        self.core.config().to_json()
    }

    pub fn set_per_hop_delay_ms(&mut self, ms: f64) {
        self.core.set_per_hop_delay_ms(ms);
    }

    pub fn set_transition_ms(&mut self, ms: f64) {
        self.core.set_transition_ms(ms);
    }

    pub fn set_autosave_interval_ms(&mut self, ms: f64) {
        self.core.set_autosave_interval_ms(ms);
    }

    pub fn set_cell_size_px(&mut self, px: u32) {
        self.core.set_cell_size_px(px);
    }

    // === INPUT ===

    pub fn pointer_down(&mut self, index: u32) -> bool {
        self.core.pointer_down(index as usize, clock::now_ms())
    }

    pub fn pointer_over(&mut self, index: u32) -> bool {
        self.core.pointer_over(index as usize, clock::now_ms())
    }

    pub fn pointer_up(&mut self) {
        self.core.pointer_up();
    }

    pub fn click(&mut self, index: u32) -> bool {
        self.core.click(index as usize, clock::now_ms())
    }

    /// Returns true when the key was a shortcut; the caller should `preventDefault()`
    pub fn key_down(&mut self, key: String, ctrl: bool, meta: bool) -> bool {
        self.core.key_down(&key, ctrl || meta, epoch_ms()).is_some()
    }

    /// Select a tool by its element name: a swatch class, `eraser`, `fill-tool` or `save-tool`
    pub fn select_tool(&mut self, name: String) -> bool {
        match Tool::from_name(&name) {
            Some(tool) => {
                self.core.select_tool(tool, epoch_ms());
                true
            }
            None => false,
        }
    }

    /// Select swatch 0..=4
    pub fn select_swatch(&mut self, slot: u32) -> bool {
        match PaletteColor::from_slot(slot as usize) {
            Some(color) => {
                self.core.select_tool(Tool::Swatch(color), epoch_ms());
                true
            }
            None => false,
        }
    }

    pub fn selected_tool(&self) -> String {
        self.core.tools().selected.name().to_string()
    }

    pub fn hotkey_label(&self, name: String) -> Option<String> {
        Tool::from_name(&name).map(Tool::hotkey_label)
    }

    #[wasm_bindgen(getter)]
    pub fn fill_mode(&self) -> bool { self.core.tools().fill_mode }

    pub fn current_color(&self) -> String {
        self.core.tools().current_color.to_css()
    }

    // === DRAWING ===

    pub fn clear_drawing(&mut self) {
        self.core.clear_drawing(clock::now_ms());
    }

    pub fn save_drawing(&mut self) -> bool {
        self.core.save_snapshot(clock::now_ms())
    }

    pub fn export_image(&mut self) -> bool {
        self.core.export_image(epoch_ms())
    }

    /// Take the PNG produced by the last export, if not yet taken
    pub fn take_export(&mut self) -> Option<ExportedPng> {
        self.core.take_export().map(|image| ExportedPng {
            file_name: image.file_name,
            bytes: image.png,
        })
    }

    /// Next toast message, oldest first
    pub fn take_notification(&mut self) -> Option<String> {
        self.core.take_notification().map(|n| n.message().to_string())
    }

    /// ISO-8601 time of the last stored snapshot
    pub fn last_saved_at(&self) -> Option<String> {
        last_saved_at(self.core.store()).map(|t| t.to_rfc3339())
    }

    // === STEP ===

    /// Advance animations and autosave; returns the number of cells finished this frame
    pub fn tick(&mut self) -> u32 {
        self.core
            .tick(clock::now_ms())
            .iter()
            .filter(|e| matches!(e, crate::systems::wave::WaveEvent::Completed { .. }))
            .count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn is_animating(&self) -> bool { self.core.is_animating() }

    // === RENDER ===

    /// Get pointer to display colors (ABGR u32 per cell)
    pub fn colors_ptr(&self) -> *const u32 { self.core.colors_ptr() }

    /// Get pointer to display scales (f32 per cell)
    pub fn scales_ptr(&self) -> *const f32 { self.core.scales_ptr() }

    pub fn cell_color(&self, index: u32) -> Option<String> {
        self.core.grid().color_at(index as usize).map(|c| c.to_css())
    }
}

impl Default for PixelBoard {
    fn default() -> Self {
        Self::new()
    }
}
