use crate::export::MAX_CELL_SIZE_PX;

use super::EditorCore;

pub(super) fn set_per_hop_delay_ms(core: &mut EditorCore, ms: f64) {
    core.config.per_hop_delay_ms = ms.max(0.0);
    core.waves.set_timing(core.config.wave_timing());
}

pub(super) fn set_transition_ms(core: &mut EditorCore, ms: f64) {
    core.config.transition_ms = ms.max(0.0);
    core.waves.set_timing(core.config.wave_timing());
}

pub(super) fn set_autosave_interval_ms(core: &mut EditorCore, ms: f64) {
    core.config.autosave_interval_ms = ms.max(0.0);
    core.last_autosave_ms = None;
}

pub(super) fn set_cell_size_px(core: &mut EditorCore, px: u32) {
    core.config.cell_size_px = px.clamp(1, MAX_CELL_SIZE_PX);
}
