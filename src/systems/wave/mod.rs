//! Wave Animation Scheduler
//!
//! Turns a flood `DistanceMap` into one timed repaint per cell. Cells start
//! `distance * per_hop_delay_ms` after the click, so the fill ripples outward
//! from the seed; cells at equal distance start together.
//!
//! Each task is a small state machine advanced by `tick`:
//!
//! ```text
//! Pending --(now >= start)--> Running { from } --(now >= start + duration)--> Done
//! ```
//!
//! The grid is only written on completion. Every transition reports back through
//! `WaveEvent`s; the editor decides what a completion means (a snapshot save).
//!
//! Overlapping waves are allowed. Whichever task completes last leaves its
//! color in the cell; while two tasks run on one cell, the most recently begun
//! one drives the visuals.

mod easing;
mod task;

pub use easing::{ease_in_out_sine, ease_out_sine, pulse_scale};
pub use task::{AnimationTask, TaskPhase};

use crate::domain::color::Rgb;
use crate::spatial::flood::DistanceMap;
use crate::spatial::grid::Grid;

/// Scale a cell jumps to when its transition begins, eased back to 1.
const BEGIN_SCALE: f32 = 0.9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveTiming {
    pub per_hop_delay_ms: f64,
    pub transition_ms: f64,
    pub pulse_ms: f64,
}

impl Default for WaveTiming {
    fn default() -> Self {
        Self {
            per_hop_delay_ms: 50.0,
            transition_ms: 300.0,
            pulse_ms: 300.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WaveEvent {
    Began { cell: usize, pulse: bool },
    Completed { cell: usize, color: Rgb },
}

/// What the renderer should show for an animating cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellVisual {
    pub color: Rgb,
    pub scale: f32,
}

#[derive(Default)]
pub struct WaveScheduler {
    timing: WaveTiming,
    /// Sorted by `start_ms`; stable for equal starts.
    tasks: Vec<AnimationTask>,
}

impl WaveScheduler {
    pub fn new(timing: WaveTiming) -> Self {
        Self {
            timing,
            tasks: Vec::new(),
        }
    }

    pub fn timing(&self) -> WaveTiming {
        self.timing
    }

    /// Applies to waves scheduled afterwards.
    pub fn set_timing(&mut self, timing: WaveTiming) {
        self.timing = timing;
    }

    /// Queue one task per mapped cell, ordered by ascending distance.
    pub fn schedule_wave(&mut self, distances: &DistanceMap, target: Rgb, now_ms: f64) {
        let timing = self.timing;
        self.tasks.reserve(distances.len());

        for (cell, distance) in distances.by_distance() {
            let delay_ms = distance as f64 * timing.per_hop_delay_ms;
            self.tasks.push(AnimationTask {
                cell,
                target,
                distance,
                delay_ms,
                start_ms: now_ms + delay_ms,
                duration_ms: timing.transition_ms,
                pulse: distance == 0,
                phase: TaskPhase::Pending,
            });
        }

        self.tasks.sort_by(|a, b| a.start_ms.total_cmp(&b.start_ms));
    }

    /// Advance every task to `now_ms`, writing finished colors into `grid`.
    pub fn tick(&mut self, grid: &mut Grid, now_ms: f64) -> Vec<WaveEvent> {
        let mut events = Vec::new();

        for task in self.tasks.iter_mut() {
            if task.is_pending() && now_ms >= task.start_ms {
                let from = grid.color_at(task.cell).unwrap_or(task.target);
                task.phase = TaskPhase::Running { from, began_ms: now_ms };
                events.push(WaveEvent::Began {
                    cell: task.cell,
                    pulse: task.pulse,
                });
            }

            if task.is_running() && now_ms >= task.end_ms() {
                grid.set_color(task.cell, task.target);
                task.phase = TaskPhase::Done;
                events.push(WaveEvent::Completed {
                    cell: task.cell,
                    color: task.target,
                });
            }
        }

        self.tasks.retain(|t| t.phase != TaskPhase::Done);
        events
    }

    /// Visual state of every running cell at `now_ms`. A cell may appear more
    /// than once; later entries win.
    pub fn visuals(&self, now_ms: f64) -> impl Iterator<Item = (usize, CellVisual)> + '_ {
        let pulse_ms = self.timing.pulse_ms;
        let mut running: Vec<&AnimationTask> = self.tasks.iter().filter(|t| t.is_running()).collect();
        running.sort_by(|a, b| began_ms(a).total_cmp(&began_ms(b)));

        running.into_iter().filter_map(move |task| {
            let TaskPhase::Running { from, began_ms } = task.phase else {
                return None;
            };
            let eased = ease_out_sine(task.progress(now_ms));
            let mut scale = BEGIN_SCALE + (1.0 - BEGIN_SCALE) * eased;

            let since_begin = now_ms - began_ms;
            if task.pulse && pulse_ms > 0.0 && since_begin < pulse_ms {
                scale = pulse_scale((since_begin / pulse_ms) as f32);
            }

            Some((
                task.cell,
                CellVisual {
                    color: from.lerp(task.target, eased),
                    scale,
                },
            ))
        })
    }

    /// Visual of a single cell, if it is mid-transition.
    pub fn visual_at(&self, cell: usize, now_ms: f64) -> Option<CellVisual> {
        self.visuals(now_ms)
            .filter(|(c, _)| *c == cell)
            .last()
            .map(|(_, v)| v)
    }

    pub fn tasks(&self) -> &[AnimationTask] {
        &self.tasks
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_pending()).count()
    }

    pub fn running_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_running()).count()
    }
}

fn began_ms(task: &AnimationTask) -> f64 {
    match task.phase {
        TaskPhase::Running { began_ms, .. } => began_ms,
        _ => f64::INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::DEFAULT_BACKGROUND;
    use crate::spatial::flood::flood_search;
    use crate::spatial::grid::GRID_CELLS;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn completed(events: &[WaveEvent]) -> Vec<usize> {
        events
            .iter()
            .filter_map(|e| match e {
                WaveEvent::Completed { cell, .. } => Some(*cell),
                _ => None,
            })
            .collect()
    }

    fn began(events: &[WaveEvent]) -> Vec<usize> {
        events
            .iter()
            .filter_map(|e| match e {
                WaveEvent::Began { cell, .. } => Some(*cell),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn delays_follow_distance_and_duration_is_fixed() {
        let grid = Grid::new();
        let map = flood_search(&grid, 0);
        let mut waves = WaveScheduler::default();
        waves.schedule_wave(&map, RED, 1000.0);

        assert_eq!(waves.tasks().len(), GRID_CELLS);
        for task in waves.tasks() {
            assert_eq!(task.delay_ms, task.distance as f64 * 50.0);
            assert_eq!(task.start_ms, 1000.0 + task.delay_ms);
            assert_eq!(task.duration_ms, 300.0);
            assert_eq!(task.pulse, task.cell == 0);
        }
        assert!(waves
            .tasks()
            .windows(2)
            .all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn seed_begins_first_and_ring_follows_one_hop_later() {
        let mut grid = Grid::new();
        let map = flood_search(&grid, 0);
        let mut waves = WaveScheduler::default();
        waves.schedule_wave(&map, RED, 0.0);

        assert_eq!(waves.pending_count(), GRID_CELLS);

        let events = waves.tick(&mut grid, 0.0);
        assert_eq!(events, vec![WaveEvent::Began { cell: 0, pulse: true }]);
        assert_eq!(waves.running_count(), 1);
        assert_eq!(waves.pending_count(), GRID_CELLS - 1);

        let mut ring = began(&waves.tick(&mut grid, 50.0));
        ring.sort_unstable();
        assert_eq!(ring, vec![1, 30]);
        assert_eq!(waves.running_count(), 3);
        assert_eq!(waves.pending_count(), GRID_CELLS - 3);
    }

    #[test]
    fn grid_changes_only_on_completion() {
        let mut grid = Grid::new();
        let map = flood_search(&grid, 0);
        let mut waves = WaveScheduler::default();
        waves.schedule_wave(&map, RED, 0.0);

        waves.tick(&mut grid, 0.0);
        waves.tick(&mut grid, 299.0);
        assert_eq!(grid.color_at(0), Some(DEFAULT_BACKGROUND));

        let events = waves.tick(&mut grid, 300.0);
        assert_eq!(completed(&events), vec![0]);
        assert_eq!(grid.color_at(0), Some(RED));
        assert_eq!(grid.color_at(1), Some(DEFAULT_BACKGROUND));
    }

    #[test]
    fn long_frame_begins_and_completes_in_one_tick() {
        let mut grid = Grid::new();
        grid.set_color(200, BLUE);
        let map = flood_search(&grid, 200);
        let mut waves = WaveScheduler::default();
        waves.schedule_wave(&map, RED, 0.0);

        let events = waves.tick(&mut grid, 10_000.0);
        assert_eq!(
            events,
            vec![
                WaveEvent::Began { cell: 200, pulse: true },
                WaveEvent::Completed { cell: 200, color: RED },
            ]
        );
        assert!(waves.is_idle());
    }

    #[test]
    fn whole_wave_drains_with_one_completion_per_cell() {
        let mut grid = Grid::new();
        let map = flood_search(&grid, 0);
        let mut waves = WaveScheduler::default();
        waves.schedule_wave(&map, RED, 0.0);

        let mut done = Vec::new();
        let mut now = 0.0;
        while !waves.is_idle() {
            done.extend(completed(&waves.tick(&mut grid, now)));
            now += 16.0;
        }

        done.sort_unstable();
        assert_eq!(done, (0..GRID_CELLS).collect::<Vec<_>>());
        assert!(grid.colors().iter().all(|&c| c == RED));
        // last ring starts at 43 * 50 and takes 300
        assert!(now >= 43.0 * 50.0 + 300.0);
    }

    #[test]
    fn visuals_ease_toward_target_and_pulse_only_the_seed() {
        let mut grid = Grid::new();
        let map = flood_search(&grid, 0);
        let mut waves = WaveScheduler::default();
        waves.schedule_wave(&map, RED, 0.0);

        waves.tick(&mut grid, 0.0);
        waves.tick(&mut grid, 50.0);

        let seed = waves.visual_at(0, 200.0).expect("seed running");
        let mid_pulse = pulse_scale(200.0 / 300.0);
        assert!((seed.scale - mid_pulse).abs() < 1e-5);

        let neighbor = waves.visual_at(1, 50.0).expect("ring running");
        assert_eq!(neighbor.color, DEFAULT_BACKGROUND);
        assert!((neighbor.scale - 0.9).abs() < 1e-5);

        let later = waves.visual_at(1, 200.0).unwrap();
        assert!(later.scale > 0.9 && later.scale < 1.0);
        assert_ne!(later.color, DEFAULT_BACKGROUND);

        // pending cells have no visual yet
        assert!(waves.visual_at(GRID_CELLS - 1, 200.0).is_none());
    }

    #[test]
    fn overlapping_waves_last_completion_wins() {
        let mut grid = Grid::new();
        grid.set_color(100, BLUE);
        let map = flood_search(&grid, 100);

        let mut waves = WaveScheduler::default();
        waves.schedule_wave(&map, RED, 0.0);
        waves.schedule_wave(&map, Rgb::new(0, 128, 0), 100.0);

        waves.tick(&mut grid, 0.0);
        waves.tick(&mut grid, 100.0);
        // both running; the newer one drives the visual
        assert_eq!(waves.running_count(), 2);
        assert_eq!(
            waves.visual_at(100, 100.0).map(|v| v.color),
            Some(BLUE)
        );

        waves.tick(&mut grid, 300.0);
        assert_eq!(grid.color_at(100), Some(RED));
        waves.tick(&mut grid, 400.0);
        assert_eq!(grid.color_at(100), Some(Rgb::new(0, 128, 0)));
    }

    #[test]
    fn direct_paint_is_overwritten_by_pending_transition() {
        let mut grid = Grid::new();
        let map = flood_search(&grid, 0);
        let mut waves = WaveScheduler::default();
        waves.schedule_wave(&map, RED, 0.0);

        grid.set_color(5, BLUE);
        let mut now = 0.0;
        while !waves.is_idle() {
            waves.tick(&mut grid, now);
            now += 25.0;
        }
        assert_eq!(grid.color_at(5), Some(RED));
    }

    #[test]
    fn custom_timing_applies_to_new_waves() {
        let grid = Grid::new();
        let map = flood_search(&grid, 0);
        let mut waves = WaveScheduler::new(WaveTiming {
            per_hop_delay_ms: 10.0,
            transition_ms: 40.0,
            pulse_ms: 40.0,
        });
        waves.schedule_wave(&map, RED, 0.0);
        let far = waves.tasks().last().unwrap();
        assert_eq!(far.start_ms, 430.0);
        assert_eq!(far.end_ms(), 470.0);
    }
}
