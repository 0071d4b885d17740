//! A tile grid for maze representation.
//!
//! [`Grid`] stores one [`Tile`] per cell in row-major order.

use crate::geom::{Bounds, Cell};

/// A maze tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Floor,
    Wall,
}

impl Tile {
    /// Whether an agent may stand on this tile.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Tile::Floor)
    }

    /// The character used for this tile in text form.
    pub const fn glyph(self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Wall => '#',
        }
    }
}

/// A 2D grid of [`Tile`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    tiles: Vec<Tile>,
    bounds: Bounds,
}

impl Grid {
    /// Create a new grid filled with `fill`.
    pub fn new(rows: i32, cols: i32, fill: Tile) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            tiles: vec![fill; bounds.len()],
            bounds,
        }
    }

    /// The covered rectangle.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether the grid contains the given cell.
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// Get the tile at a cell, or `None` if out of bounds.
    pub fn at(&self, c: Cell) -> Option<Tile> {
        self.bounds.index(c).map(|i| self.tiles[i])
    }

    /// Set the tile at a cell. Returns the previous tile, or `None` (and
    /// does nothing) if out of bounds.
    pub fn set(&mut self, c: Cell, tile: Tile) -> Option<Tile> {
        let i = self.bounds.index(c)?;
        Some(std::mem::replace(&mut self.tiles[i], tile))
    }

    /// Fill the grid using a function of each cell.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Cell) -> Tile) {
        for (i, t) in self.tiles.iter_mut().enumerate() {
            *t = f(self.bounds.cell(i));
        }
    }

    /// Count how many cells hold the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Cells satisfying a predicate, in row-major order.
    pub fn cells_where(&self, mut f: impl FnMut(Cell, Tile) -> bool) -> Vec<Cell> {
        self.iter().filter(|&(c, t)| f(c, t)).map(|(c, _)| c).collect()
    }

    /// Iterate over `(Cell, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| (self.bounds.cell(i), t))
    }
}
