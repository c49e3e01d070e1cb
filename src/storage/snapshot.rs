//! Drawing snapshots
//!
//! Two keys, compatible with drawings saved by earlier versions of the page:
//! - `pixelArtDrawing`: JSON array of `"rgb(r, g, b)"`, one per cell in index order
//! - `pixelArtLastSave`: ISO-8601 UTC timestamp of the last save

use chrono::{DateTime, SecondsFormat, Utc};

use crate::core::{EngineError, Result};
use crate::domain::color::{Rgb, EXPORT_SENTINEL};
use crate::spatial::grid::Grid;

use super::KeyValueStore;

pub const DRAWING_KEY: &str = "pixelArtDrawing";
pub const LAST_SAVE_KEY: &str = "pixelArtLastSave";

/// Write every cell's resolved color plus the save time. Full overwrite, so
/// repeated saves are idempotent.
pub fn save_snapshot(
    store: &mut dyn KeyValueStore,
    grid: &Grid,
    saved_at: DateTime<Utc>,
) -> Result<()> {
    let json = serde_json::to_string(&grid.colors())
        .map_err(|e| EngineError::storage(e.to_string()))?;
    store.set(DRAWING_KEY, &json)?;
    store.set(
        LAST_SAVE_KEY,
        &saved_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    )?;
    Ok(())
}

/// `Ok(None)` when nothing was saved; `Err(MalformedState)` when the stored
/// value is not a JSON array of css colors.
pub fn load_snapshot(store: &dyn KeyValueStore) -> Result<Option<Vec<Rgb>>> {
    let Some(raw) = store.get(DRAWING_KEY) else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }
    let colors: Vec<Rgb> =
        serde_json::from_str(&raw).map_err(|e| EngineError::malformed(e.to_string()))?;
    Ok(Some(colors))
}

/// Paint loaded colors onto the grid, skipping export-sentinel entries.
/// Extra entries beyond the grid are ignored. Returns how many cells were set.
pub fn restore_snapshot(grid: &mut Grid, colors: &[Rgb]) -> usize {
    let mut applied = 0;
    for (idx, &color) in colors.iter().enumerate().take(grid.size()) {
        if color == EXPORT_SENTINEL {
            continue;
        }
        if grid.set_color(idx, color) {
            applied += 1;
        }
    }
    applied
}

pub fn clear_snapshot(store: &mut dyn KeyValueStore) {
    store.remove(DRAWING_KEY);
    store.remove(LAST_SAVE_KEY);
}

pub fn last_saved_at(store: &dyn KeyValueStore) -> Option<DateTime<Utc>> {
    let raw = store.get(LAST_SAVE_KEY)?;
    DateTime::parse_from_rfc3339(&raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::DEFAULT_BACKGROUND;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn save_then_load_returns_grid_colors() {
        let mut grid = Grid::new();
        grid.set_color(5, Rgb::new(0, 128, 0));
        let mut store = MemoryStore::new();

        save_snapshot(&mut store, &grid, fixed_time()).unwrap();
        let loaded = load_snapshot(&store).unwrap().expect("snapshot present");

        assert_eq!(loaded, grid.colors());
        assert_eq!(
            store.get(LAST_SAVE_KEY).as_deref(),
            Some("2024-05-01T12:30:00.000Z")
        );
        assert_eq!(last_saved_at(&store), Some(fixed_time()));
    }

    #[test]
    fn stored_format_is_css_strings() {
        let grid = Grid::new();
        let mut store = MemoryStore::new();
        save_snapshot(&mut store, &grid, fixed_time()).unwrap();

        let raw = store.get(DRAWING_KEY).unwrap();
        assert!(raw.starts_with(r#"["rgb(200, 200, 200)","#));
    }

    #[test]
    fn missing_snapshot_is_none() {
        let store = MemoryStore::new();
        assert!(load_snapshot(&store).unwrap().is_none());
    }

    #[test]
    fn garbage_is_malformed() {
        let mut store = MemoryStore::new();
        store.set(DRAWING_KEY, "{not json").unwrap();
        assert!(matches!(
            load_snapshot(&store),
            Err(EngineError::MalformedState(_))
        ));

        store.set(DRAWING_KEY, r#"["rgb(1, 2, 3)", "chartreuse"]"#).unwrap();
        assert!(matches!(
            load_snapshot(&store),
            Err(EngineError::MalformedState(_))
        ));
    }

    #[test]
    fn restore_skips_sentinel_and_extra_entries() {
        let mut grid = Grid::new();
        let mut colors = vec![Rgb::new(9, 9, 9); grid.size() + 10];
        colors[3] = EXPORT_SENTINEL;

        let applied = restore_snapshot(&mut grid, &colors);
        assert_eq!(applied, grid.size() - 1);
        assert_eq!(grid.color_at(3), Some(DEFAULT_BACKGROUND));
        assert_eq!(grid.color_at(4), Some(Rgb::new(9, 9, 9)));
    }

    #[test]
    fn short_snapshot_leaves_the_rest_alone() {
        let mut grid = Grid::new();
        let applied = restore_snapshot(&mut grid, &[Rgb::new(1, 1, 1)]);
        assert_eq!(applied, 1);
        assert_eq!(grid.color_at(1), Some(DEFAULT_BACKGROUND));
    }

    #[test]
    fn clear_removes_both_keys() {
        let grid = Grid::new();
        let mut store = MemoryStore::new();
        save_snapshot(&mut store, &grid, fixed_time()).unwrap();
        clear_snapshot(&mut store);
        assert!(store.is_empty());
        assert!(last_saved_at(&store).is_none());
    }
}
