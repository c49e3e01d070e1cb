use super::super::*;

impl Grid {
    #[inline]
    pub fn cell(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Resolved color of a cell, `None` when the index is off the grid.
    #[inline]
    pub fn color_at(&self, idx: usize) -> Option<Rgb> {
        self.cells.get(idx).map(Cell::resolve_color)
    }

    /// Assign an explicit color. Returns `false` for an index off the grid.
    #[inline]
    pub fn set_color(&mut self, idx: usize, color: Rgb) -> bool {
        match self.cells.get_mut(idx) {
            Some(cell) => {
                cell.color = Some(color);
                true
            }
            None => false,
        }
    }

    /// Resolved colors in index order.
    pub fn colors(&self) -> Vec<Rgb> {
        self.cells.iter().map(resolve_color).collect()
    }
}
