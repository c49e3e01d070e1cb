use crate::storage::clear_snapshot;

use super::{persist, EditorCore};

/// Paint one cell with the current color and save. Does nothing in fill mode.
fn paint_cell(core: &mut EditorCore, idx: usize) -> bool {
    if !core.tools.paints() {
        return false;
    }
    if !core.grid.set_color(idx, core.tools.current_color) {
        return false;
    }
    core.refresh_display();
    persist::save(core);
    true
}

pub(super) fn click(core: &mut EditorCore, idx: usize) -> bool {
    paint_cell(core, idx)
}

/// Press on a cell: starts a wave in fill mode, otherwise paints and begins a drag.
pub(super) fn pointer_down(core: &mut EditorCore, idx: usize, now_ms: f64) -> bool {
    core.tools.pointer_down = true;
    if core.tools.fill_mode {
        core.fill(idx, now_ms)
    } else {
        paint_cell(core, idx)
    }
}

/// Drag painting: only while the pointer is held.
pub(super) fn pointer_over(core: &mut EditorCore, idx: usize) -> bool {
    if !core.tools.pointer_down {
        return false;
    }
    paint_cell(core, idx)
}

pub(super) fn pointer_up(core: &mut EditorCore) {
    core.tools.pointer_down = false;
}

pub(super) fn clear_drawing(core: &mut EditorCore) {
    core.grid.reset();
    clear_snapshot(core.store.as_mut());
    core.refresh_display();
    persist::save(core);
}
