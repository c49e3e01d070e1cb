use super::EditorCore;

/// Rebuild the per-cell display buffers: resolved grid colors at scale 1,
/// overlaid with whatever the wave scheduler is animating right now.
pub(super) fn refresh_display(core: &mut EditorCore) {
    for (i, cell) in core.grid.cells().iter().enumerate() {
        core.display_colors[i] = cell.resolve_color().to_abgr();
        core.display_scales[i] = 1.0;
    }

    for (idx, visual) in core.waves.visuals(core.now_ms) {
        if idx < core.display_colors.len() {
            core.display_colors[idx] = visual.color.to_abgr();
            core.display_scales[idx] = visual.scale;
        }
    }
}
