use crate::systems::wave::WaveEvent;

use super::{persist, EditorCore};

pub(super) fn tick(core: &mut EditorCore, now_ms: f64) -> Vec<WaveEvent> {
    core.now_ms = now_ms;

    let events = core.waves.tick(&mut core.grid, now_ms);

    // One full save per finished cell, not one per fill.
    for event in events.iter() {
        if let WaveEvent::Completed { .. } = event {
            persist::save(core);
        }
    }

    autosave(core, now_ms);
    core.refresh_display();
    events
}

/// Periodic save, independent of animation. The first tick only sets the baseline.
fn autosave(core: &mut EditorCore, now_ms: f64) {
    let interval = core.config.autosave_interval_ms;
    if interval <= 0.0 {
        return;
    }
    match core.last_autosave_ms {
        None => core.last_autosave_ms = Some(now_ms),
        Some(last) if now_ms - last >= interval => {
            persist::save(core);
            core.last_autosave_ms = Some(now_ms);
        }
        Some(_) => {}
    }
}
