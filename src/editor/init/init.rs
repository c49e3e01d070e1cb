use std::collections::VecDeque;

use crate::spatial::grid::{Grid, GRID_CELLS};
use crate::storage::{load_snapshot, restore_snapshot, KeyValueStore};
use crate::systems::wave::WaveScheduler;
use crate::domain::tools::ToolState;

use super::{EditorConfig, EditorCore};

pub(super) fn create_editor_core(config: EditorConfig, store: Box<dyn KeyValueStore>) -> EditorCore {
    let mut core = EditorCore {
        grid: Grid::new(),
        tools: ToolState::default(),
        waves: WaveScheduler::new(config.wave_timing()),
        store,
        config,
        notifications: VecDeque::new(),
        last_export: None,
        display_colors: vec![0u32; GRID_CELLS],
        display_scales: vec![1.0f32; GRID_CELLS],
        now_ms: 0.0,
        last_autosave_ms: None,
        saves: 0,
    };

    restore_saved_drawing(&mut core);
    core.refresh_display();
    core
}

/// Fail soft: a broken snapshot leaves the default board.
fn restore_saved_drawing(core: &mut EditorCore) {
    match load_snapshot(core.store.as_ref()) {
        Ok(Some(colors)) => {
            let applied = restore_snapshot(&mut core.grid, &colors);
            console_log!("Restored drawing: {} of {} cells", applied, colors.len());
        }
        Ok(None) => {}
        Err(e) => {
            console_warn!("Error loading drawing, starting blank: {}", e);
        }
    }
}
