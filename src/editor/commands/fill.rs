use crate::spatial::flood::plan_fill;

use super::EditorCore;

/// Flood search from `seed`, then hand the distance map to the wave scheduler.
/// Saves happen later, one per completed cell (see step/tick.rs).
pub(super) fn fill(core: &mut EditorCore, seed: usize, now_ms: f64) -> bool {
    let paint = core.tools.current_color;
    let Some(distances) = plan_fill(&core.grid, seed, paint) else {
        return false;
    };

    core.waves.schedule_wave(&distances, paint, now_ms);
    true
}
