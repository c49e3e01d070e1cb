//! Flood region search
//!
//! Breadth-first walk over 4-connected cells that share the seed's resolved
//! color. The result maps every reached cell to its hop count from the seed;
//! the wave scheduler turns those hop counts into start delays.

use std::collections::{HashMap, VecDeque};

use crate::domain::color::Rgb;

use super::grid::Grid;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DistanceMap {
    distances: HashMap<usize, u32>,
}

impl DistanceMap {
    #[inline]
    pub fn get(&self, idx: usize) -> Option<u32> {
        self.distances.get(&idx).copied()
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.distances.contains_key(&idx)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn max_distance(&self) -> u32 {
        self.distances.values().copied().max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.distances.iter().map(|(&i, &d)| (i, d))
    }

    /// `(index, distance)` sorted by distance, ties by index.
    pub fn by_distance(&self) -> Vec<(usize, u32)> {
        let mut entries: Vec<(usize, u32)> = self.iter().collect();
        entries.sort_unstable_by_key(|&(idx, dist)| (dist, idx));
        entries
    }

    fn insert(&mut self, idx: usize, distance: u32) {
        self.distances.insert(idx, distance);
    }
}

/// BFS from `seed` across cells whose resolved color equals the seed's.
///
/// Returns an empty map for a seed off the grid.
pub fn flood_search(grid: &Grid, seed: usize) -> DistanceMap {
    let mut map = DistanceMap::default();
    let Some(region_color) = grid.color_at(seed) else {
        return map;
    };

    let mut visited = vec![false; grid.size()];
    let mut queue = VecDeque::with_capacity(grid.size());

    visited[seed] = true;
    map.insert(seed, 0);
    queue.push_back((seed, 0u32));

    while let Some((idx, dist)) = queue.pop_front() {
        for next in grid.neighbors(idx) {
            if visited[next] {
                continue;
            }
            if grid.color_at(next) != Some(region_color) {
                continue;
            }
            visited[next] = true;
            map.insert(next, dist + 1);
            queue.push_back((next, dist + 1));
        }
    }

    map
}

/// Guarded entry point for the fill tool: `None` when painting `paint` over the
/// seed would change nothing (or the seed is off the grid).
pub fn plan_fill(grid: &Grid, seed: usize, paint: Rgb) -> Option<DistanceMap> {
    let seed_color = grid.color_at(seed)?;
    if seed_color == paint {
        return None;
    }
    Some(flood_search(grid, seed))
}
