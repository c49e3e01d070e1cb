use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn cols(&self) -> usize { self.cols }

    #[inline]
    pub fn rows(&self) -> usize { self.rows }

    #[inline]
    pub fn size(&self) -> usize { self.cells.len() }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// `(row, col)` of a cell index.
    #[inline]
    pub fn coords(&self, idx: usize) -> (usize, usize) {
        (idx / self.cols, idx % self.cols)
    }

    // === Bounds checking ===
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        idx < self.cells.len()
    }

    /// 4-connected neighbors in up, down, left, right order.
    /// Cells on the border get fewer; nothing wraps.
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> {
        let (row, col) = self.coords(idx);
        let cols = self.cols;
        let valid = self.contains(idx);
        [
            (valid && row > 0).then(|| idx - cols),
            (valid && row + 1 < self.rows).then(|| idx + cols),
            (valid && col > 0).then(|| idx - 1),
            (valid && col + 1 < cols).then(|| idx + 1),
        ]
        .into_iter()
        .flatten()
    }
}
