//! The concrete maze: a tile grid with a start and a goal.
//!
//! Mazes can be written as text, one character per cell:
//!
//! | Char | Meaning |
//! |---|---|
//! | `#` | wall |
//! | `.` | floor |
//! | `S` | start (floor) |
//! | `G` | goal (floor) |
//!
//! When no `S` or `G` is present the defaults `(1, 1)` and
//! `(rows - 2, cols - 2)` apply.

use std::fmt;

use crate::geom::{Bounds, Cell};
use crate::grid::{Grid, Tile};
use crate::terrain::Terrain;

/// A rectangular maze with a fixed start and a movable goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    grid: Grid,
    start: Cell,
    goal: Cell,
}

fn default_start(b: Bounds) -> Cell {
    Cell::new(1.min(b.rows - 1).max(0), 1.min(b.cols - 1).max(0))
}

fn default_goal(b: Bounds) -> Cell {
    Cell::new((b.rows - 2).max(0), (b.cols - 2).max(0))
}

impl Maze {
    /// An all-floor maze with the default start and goal.
    pub fn new(rows: i32, cols: i32) -> Self {
        let grid = Grid::new(rows, cols, Tile::Floor);
        let b = grid.bounds();
        Self {
            grid,
            start: default_start(b),
            goal: default_goal(b),
        }
    }

    /// A maze whose outer ring is wall and whose interior is floor.
    pub fn bordered(rows: i32, cols: i32) -> Self {
        let mut m = Self::new(rows, cols);
        let b = m.grid.bounds();
        m.grid.fill_fn(|c| {
            if b.is_border(c) {
                Tile::Wall
            } else {
                Tile::Floor
            }
        });
        m
    }

    /// Parse a maze from its text form.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(MazeError::Empty);
        };
        let cols = first.chars().count();
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(MazeError::InconsistentSize {
                    row,
                    expected: cols,
                    found,
                });
            }
        }

        let mut grid = Grid::new(lines.len() as i32, cols as i32, Tile::Floor);
        let mut start = None;
        let mut goal = None;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let c = Cell::new(row as i32, col as i32);
                let tile = match ch {
                    '#' => Tile::Wall,
                    '.' => Tile::Floor,
                    'S' | 'G' => {
                        let slot = if ch == 'S' { &mut start } else { &mut goal };
                        if let Some(first) = *slot {
                            return Err(MazeError::DuplicateMarker {
                                ch,
                                first,
                                second: c,
                            });
                        }
                        *slot = Some(c);
                        Tile::Floor
                    }
                    _ => return Err(MazeError::InvalidChar { ch, cell: c }),
                };
                grid.set(c, tile);
            }
        }
        let b = grid.bounds();
        Ok(Self {
            grid,
            start: start.unwrap_or_else(|| default_start(b)),
            goal: goal.unwrap_or_else(|| default_goal(b)),
        })
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The covered rectangle.
    pub fn bounds(&self) -> Bounds {
        self.grid.bounds()
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    /// The start cell.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Tile at `c`, or `None` out of bounds.
    pub fn tile(&self, c: Cell) -> Option<Tile> {
        self.grid.at(c)
    }

    /// Set the tile at `c`. Returns the previous tile, or `None` out of bounds.
    pub fn set_tile(&mut self, c: Cell, tile: Tile) -> Option<Tile> {
        self.grid.set(c, tile)
    }

    /// Move the goal. Rejected (returning `false`) unless `c` is passable.
    pub fn set_goal(&mut self, c: Cell) -> bool {
        if !self.is_passable(c) {
            return false;
        }
        self.goal = c;
        true
    }

    /// Count cells holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.grid.count(tile)
    }

    /// All floor cells in row-major order.
    pub fn floor_cells(&self) -> Vec<Cell> {
        self.grid.cells_where(|_, t| t.is_passable())
    }

    /// Interior wall cells (the outer ring excluded), in row-major order.
    pub fn interior_walls(&self) -> Vec<Cell> {
        let b = self.bounds();
        self.grid.cells_where(|c, t| t == Tile::Wall && b.is_interior(c))
    }

    /// Render the maze as text, letting `overlay` replace the character of
    /// any cell. `S` and `G` are drawn underneath the overlay.
    pub fn render_with(&self, overlay: impl Fn(Cell) -> Option<char>) -> String {
        let mut out = String::with_capacity(self.bounds().len() + self.rows() as usize);
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let c = Cell::new(row, col);
                let ch = overlay(c).unwrap_or_else(|| self.glyph(c));
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    fn glyph(&self, c: Cell) -> char {
        if c == self.start {
            'S'
        } else if c == self.goal {
            'G'
        } else {
            self.grid.at(c).map_or(' ', Tile::glyph)
        }
    }
}

impl Terrain for Maze {
    fn in_bounds(&self, c: Cell) -> bool {
        self.grid.contains(c)
    }

    fn is_passable(&self, c: Cell) -> bool {
        self.grid.at(c).is_some_and(Tile::is_passable)
    }

    fn goal(&self) -> Cell {
        self.goal
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|_| None))
    }
}

/// Errors that can occur when parsing a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The text contained no rows.
    Empty,
    /// A row differs in width from the first one.
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `#.SG` was found.
    InvalidChar { ch: char, cell: Cell },
    /// `S` or `G` appeared more than once.
    DuplicateMarker { ch: char, first: Cell, second: Cell },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: no rows"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidChar { ch, cell } => {
                write!(f, "maze contains invalid character \u{201c}{ch}\u{201d} at {cell}")
            }
            Self::DuplicateMarker { ch, first, second } => {
                write!(f, "maze: marker '{ch}' at {second} repeats the one at {first}")
            }
        }
    }
}

impl std::error::Error for MazeError {}
