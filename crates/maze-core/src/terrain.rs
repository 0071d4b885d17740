use std::fmt;

use crate::geom::Cell;

/// Coarse classification of the openness around a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Situation {
    /// Few free cells around: a corridor or dead end.
    Stuck,
    /// Many free cells around.
    Open,
    /// Mixed openness.
    Complex,
    /// No classification available.
    #[default]
    Unclassified,
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Situation::Stuck => "stuck",
            Situation::Open => "open",
            Situation::Complex => "complex",
            Situation::Unclassified => "default",
        })
    }
}

/// At most this many free surrounding cells classifies as [`Situation::Stuck`].
pub const STUCK_MAX_FREE: usize = 2;
/// At least this many free surrounding cells classifies as [`Situation::Open`].
pub const OPEN_MIN_FREE: usize = 6;

/// Read-only view of a maze, as consumed by search and the agent.
///
/// Implementors must not change between two calls made during one search;
/// mutation happens only between agent steps.
pub trait Terrain {
    /// Whether `c` lies inside the maze.
    fn in_bounds(&self, c: Cell) -> bool;

    /// Whether an agent may stand on `c`. Must be `false` outside bounds.
    fn is_passable(&self, c: Cell) -> bool;

    /// The current goal cell.
    fn goal(&self) -> Cell;

    /// Classify the surroundings of `c` by counting passable cells among
    /// its eight neighbours.
    fn classify_situation(&self, c: Cell) -> Situation {
        let free = c
            .neighbors_8()
            .into_iter()
            .filter(|&n| self.is_passable(n))
            .count();
        if free <= STUCK_MAX_FREE {
            Situation::Stuck
        } else if free >= OPEN_MIN_FREE {
            Situation::Open
        } else {
            Situation::Complex
        }
    }
}

impl<T: Terrain + ?Sized> Terrain for &T {
    fn in_bounds(&self, c: Cell) -> bool {
        (**self).in_bounds(c)
    }

    fn is_passable(&self, c: Cell) -> bool {
        (**self).is_passable(c)
    }

    fn goal(&self) -> Cell {
        (**self).goal()
    }

    fn classify_situation(&self, c: Cell) -> Situation {
        (**self).classify_situation(c)
    }
}
