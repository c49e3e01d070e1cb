use crate::domain::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TaskPhase {
    /// Waiting for `start_ms`.
    Pending,
    /// Transition in flight from the color the cell had at begin.
    Running { from: Rgb, began_ms: f64 },
    Done,
}

/// One cell's repaint within a wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTask {
    pub cell: usize,
    pub target: Rgb,
    /// Hop distance from the seed.
    pub distance: u32,
    /// Delay relative to scheduling time (`distance * per_hop_delay_ms`).
    pub delay_ms: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    /// Seed emphasis at begin.
    pub pulse: bool,
    pub phase: TaskPhase,
}

impl AnimationTask {
    #[inline]
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.phase == TaskPhase::Pending
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, TaskPhase::Running { .. })
    }

    /// Linear progress of the main transition at `now_ms`, clamped.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }
}
