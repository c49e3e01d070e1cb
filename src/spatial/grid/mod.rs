//! Grid - fixed 30×15 board of colorable cells
//!
//! Cells live in one row-major `Vec`, created once and never resized:
//! `index = row * GRID_COLS + col`.
//!
//! A cell either carries an explicitly painted color or falls back to its own
//! `default_color`; resolution never asks the renderer.

use crate::domain::color::{Rgb, DEFAULT_BACKGROUND};

pub const GRID_COLS: usize = 30;
pub const GRID_ROWS: usize = 15;
pub const GRID_CELLS: usize = GRID_COLS * GRID_ROWS;

mod indexing;
mod accessors;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub index: usize,
    /// Explicitly assigned color; `None` until painted.
    pub color: Option<Rgb>,
    pub default_color: Rgb,
}

impl Cell {
    pub fn new(index: usize, default_color: Rgb) -> Self {
        Self {
            index,
            color: None,
            default_color,
        }
    }

    /// Explicit color first, then the cell's default.
    #[inline]
    pub fn resolve_color(&self) -> Rgb {
        self.color.unwrap_or(self.default_color)
    }
}

/// Free-function form used where only a cell is at hand.
#[inline]
pub fn resolve_color(cell: &Cell) -> Rgb {
    cell.resolve_color()
}

pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new() -> Self {
        Self::with_default_color(DEFAULT_BACKGROUND)
    }

    pub fn with_default_color(default_color: Rgb) -> Self {
        let cells = (0..GRID_CELLS)
            .map(|i| Cell::new(i, default_color))
            .collect();
        Self {
            cols: GRID_COLS,
            rows: GRID_ROWS,
            cells,
        }
    }

    /// Every cell back to unpainted.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.color = None;
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_cells_have_two_neighbors() {
        let grid = Grid::new();
        let n: Vec<usize> = grid.neighbors(0).collect();
        assert_eq!(n, vec![30, 1]);

        let last = GRID_CELLS - 1;
        let n: Vec<usize> = grid.neighbors(last).collect();
        assert_eq!(n, vec![last - 30, last - 1]);
        assert_eq!(grid.neighbors(29).count(), 2);
        assert_eq!(grid.neighbors(420).count(), 2);
    }

    #[test]
    fn edge_cells_have_three_neighbors() {
        let grid = Grid::new();
        // top, bottom, left, right edges
        assert_eq!(grid.neighbors(5).count(), 3);
        assert_eq!(grid.neighbors(425).count(), 3);
        assert_eq!(grid.neighbors(60).count(), 3);
        assert_eq!(grid.neighbors(89).count(), 3);
    }

    #[test]
    fn interior_cells_have_four_neighbors_in_order() {
        let grid = Grid::new();
        let n: Vec<usize> = grid.neighbors(31).collect();
        assert_eq!(n, vec![1, 61, 30, 32]);
    }

    #[test]
    fn no_wraparound_between_rows() {
        let grid = Grid::new();
        // last column of row 0 must not reach first column of row 1
        assert!(!grid.neighbors(29).any(|i| i == 30));
        assert!(!grid.neighbors(30).any(|i| i == 29));
    }

    #[test]
    fn index_and_coords_agree() {
        let grid = Grid::new();
        for i in 0..GRID_CELLS {
            let (row, col) = grid.coords(i);
            assert!(row < GRID_ROWS && col < GRID_COLS);
            assert_eq!(grid.index(row, col), i);
        }
    }

    #[test]
    fn unpainted_cells_resolve_to_default() {
        let mut grid = Grid::new();
        assert_eq!(grid.color_at(7), Some(DEFAULT_BACKGROUND));

        let green = Rgb::new(0, 128, 0);
        assert!(grid.set_color(7, green));
        assert_eq!(grid.color_at(7), Some(green));

        grid.reset();
        assert_eq!(grid.color_at(7), Some(DEFAULT_BACKGROUND));
        assert_eq!(grid.cell(7).map(|c| c.color), Some(None));
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut grid = Grid::new();
        assert!(!grid.set_color(GRID_CELLS, Rgb::new(1, 2, 3)));
        assert_eq!(grid.color_at(GRID_CELLS), None);
    }
}
