//! An integer-cell occupancy grid.
//!
//! [`Cell`] is a newtype over `i32`: zero is open floor, anything else
//! blocks movement. [`Grid`] owns its cells in a flat row-major buffer, so a
//! grid can be shared by reference between threads while searches run.

use crate::error::GridError;
use crate::geom::{Point, Range};

/// A map cell value, wrapping an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub i32);

impl Cell {
    /// Open floor.
    pub const OPEN: Cell = Cell(0);
    /// The canonical wall value.
    pub const WALL: Cell = Cell(1);

    /// Create a new cell with the given value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the underlying integer value.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether the cell blocks movement (any nonzero value).
    pub const fn is_blocked(self) -> bool {
        self.0 != 0
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<Cell> for i32 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

/// A 2D grid of [`Cell`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a new grid with every cell open.
    ///
    /// # Panics
    ///
    /// If `rows * cols` does not fit in an `i32`. Use [`Grid::try_new`] for
    /// sizes that come from user input.
    pub fn new(rows: i32, cols: i32) -> Self {
        match Self::try_new(rows, cols) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a new grid with every cell open, or [`GridError::TooLarge`]
    /// when the cell count does not fit in an `i32`. Negative sizes are
    /// treated as zero.
    pub fn try_new(rows: i32, cols: i32) -> Result<Self, GridError> {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        Ok(Self {
            cells: vec![Cell::OPEN; len as usize],
            bounds: Range::new(0, 0, rows, cols),
        })
    }

    /// Build a grid from nested rows of raw cell values.
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(expected * rows.len());
        for (line, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != expected {
                return Err(GridError::InconsistentWidth {
                    line,
                    expected,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().copied().map(Cell));
        }
        let height = if expected == 0 { 0 } else { rows.len() };
        Ok(Self::from_cells(cells, height as i32, expected as i32))
    }

    /// Build a grid from a row-major buffer. `cells.len()` must equal
    /// `rows * cols`.
    pub(crate) fn from_cells(cells: Vec<Cell>, rows: i32, cols: i32) -> Self {
        debug_assert_eq!(cells.len(), rows.max(0) as usize * cols.max(0) as usize);
        Self {
            cells,
            bounds: Range::new(0, 0, rows, cols),
        }
    }

    /// Returns the bounding range of this grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (rows, cols).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Whether this grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    fn index(&self, p: Point) -> usize {
        (p.row * self.bounds.cols() + p.col) as usize
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Whether `p` is inside the grid and blocked.
    pub fn is_wall(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_blocked)
    }

    /// Whether `p` is inside the grid and open.
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| !c.is_blocked())
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if !self.bounds.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = cell;
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Set every cell on the outer ring to `cell`.
    pub fn fill_border(&mut self, cell: Cell) {
        for p in self.bounds.iter() {
            if self.bounds.on_border(p) {
                self.set(p, cell);
            }
        }
    }

    /// Count how many cells in the grid equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Point, Cell) -> bool) -> usize {
        self.iter().filter(|&(p, c)| f(p, c)).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Copy the grid out as nested rows of raw values.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        let cols = self.cols().max(1) as usize;
        self.cells
            .chunks(cols)
            .map(|row| row.iter().map(|c| c.0).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g = Grid::new(5, 10);
        assert_eq!(g.size(), Point::new(5, 10));
        assert_eq!(g.rows(), 5);
        assert_eq!(g.cols(), 10);
        assert_eq!(g.count(Cell::OPEN), 50);
    }

    #[test]
    fn oversized_grid_is_an_error() {
        assert_eq!(
            Grid::try_new(70_000, 70_000),
            Err(GridError::TooLarge {
                rows: 70_000,
                cols: 70_000
            })
        );
        assert_eq!(Grid::try_new(-3, 4).map(|g| g.size()), Ok(Point::new(0, 4)));
        assert_eq!(Grid::try_new(3, 4), Ok(Grid::new(3, 4)));
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn new_panics_on_oversized_grid() {
        let _ = Grid::new(70_000, 70_000);
    }

    #[test]
    fn test_set_and_at() {
        let mut g = Grid::new(4, 4);
        let p = Point::new(2, 3);
        g.set(p, Cell(42));
        assert_eq!(g.at(p), Some(Cell(42)));
        assert_eq!(g.at(Point::new(0, 0)), Some(Cell(0)));
        assert_eq!(g.at(Point::new(10, 10)), None);
        assert_eq!(g.at(Point::new(-1, 0)), None);
        g.set(Point::new(10, 10), Cell(1));
        assert_eq!(g.count(Cell(1)), 0);
    }

    #[test]
    fn test_from_rows() {
        let g = Grid::from_rows(&[[1, 1, 1], [1, 0, 1]]).unwrap();
        assert_eq!(g.size(), Point::new(2, 3));
        assert!(g.is_wall(Point::new(0, 0)));
        assert!(g.is_open(Point::new(1, 1)));
        assert!(!g.is_open(Point::new(2, 1)));
        assert!(!g.is_wall(Point::new(2, 1)));
        assert_eq!(g.to_rows(), vec![vec![1, 1, 1], vec![1, 0, 1]]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![0, 0, 0], vec![0, 0]];
        let err = Grid::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: Vec<Vec<i32>> = Vec::new();
        let g = Grid::from_rows(&rows).unwrap();
        assert!(g.bounds().is_empty());
    }

    #[test]
    fn test_any_nonzero_blocks() {
        let g = Grid::from_rows(&[[0, 2, -1]]).unwrap();
        assert!(g.is_open(Point::new(0, 0)));
        assert!(g.is_wall(Point::new(0, 1)));
        assert!(g.is_wall(Point::new(0, 2)));
    }

    #[test]
    fn test_fill_border() {
        let mut g = Grid::new(4, 5);
        g.fill_border(Cell::WALL);
        assert_eq!(g.count(Cell::WALL), 14);
        assert_eq!(g.count_fn(|p, c| !c.is_blocked() && g.bounds().on_border(p)), 0);
    }

    #[test]
    fn test_iter() {
        let mut g = Grid::new(2, 3);
        g.set(Point::new(0, 1), Cell(5));
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Point::new(0, 1), Cell(5)));
    }

    #[test]
    fn test_grid_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }
}
