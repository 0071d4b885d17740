//! Geometry primitives: [`Cell`] and [`Bounds`].
//!
//! Coordinates are `(row, col)`: rows grow downward, columns grow right.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid coordinate. Equality, ordering and hashing are structural.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Cell; 4] {
        [
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(1, 0),
            self.shift(0, -1),
        ]
    }

    /// All eight surrounding cells (orthogonal + diagonal).
    #[inline]
    pub fn neighbors_8(self) -> [Cell; 8] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
            self.shift(-1, -1),
            self.shift(-1, 1),
            self.shift(1, -1),
            self.shift(1, 1),
        ]
    }

    /// Whether `other` is exactly one orthogonal move away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The half-open rectangle `[0, rows) x [0, cols)` covered by a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create bounds; negative sizes are clamped to zero.
    #[inline]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the bounds cover no cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `c` lies inside.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Whether `c` lies inside and off the outer ring.
    #[inline]
    pub fn is_interior(self, c: Cell) -> bool {
        c.row > 0 && c.row < self.rows - 1 && c.col > 0 && c.col < self.cols - 1
    }

    /// Whether `c` lies on the outer ring.
    #[inline]
    pub fn is_border(self, c: Cell) -> bool {
        self.contains(c) && !self.is_interior(c)
    }

    /// Row-major flat index, or `None` when out of bounds.
    #[inline]
    pub fn index(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        let cols = self.cols.max(1) as usize;
        Cell::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

/// Row-major iterator over the cells of a [`Bounds`].
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let c = self.bounds.cell(self.next);
        self.next += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_order_is_up_right_down_left() {
        let c = Cell::new(2, 2);
        assert_eq!(
            c.neighbors_4(),
            [
                Cell::new(1, 2),
                Cell::new(2, 3),
                Cell::new(3, 2),
                Cell::new(2, 1)
            ]
        );
    }

    #[test]
    fn adjacency() {
        let c = Cell::new(1, 1);
        assert!(c.is_adjacent(Cell::new(1, 2)));
        assert!(c.is_adjacent(Cell::new(0, 1)));
        assert!(!c.is_adjacent(Cell::new(2, 2)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn bounds_contains_and_interior() {
        let b = Bounds::new(5, 4);
        assert!(b.contains(Cell::new(4, 3)));
        assert!(!b.contains(Cell::new(5, 0)));
        assert!(!b.contains(Cell::new(0, -1)));
        assert!(b.is_interior(Cell::new(1, 1)));
        assert!(b.is_border(Cell::new(0, 2)));
        assert!(b.is_border(Cell::new(3, 3)));
    }

    #[test]
    fn index_round_trip_and_iter() {
        let b = Bounds::new(3, 4);
        assert_eq!(b.len(), 12);
        for (i, c) in b.iter().enumerate() {
            assert_eq!(b.index(c), Some(i));
            assert_eq!(b.cell(i), c);
        }
        assert_eq!(b.index(Cell::new(3, 0)), None);
    }

    #[test]
    fn negative_bounds_are_empty() {
        let b = Bounds::new(-2, 3);
        assert!(b.is_empty());
        assert_eq!(b.iter().count(), 0);
    }
}
