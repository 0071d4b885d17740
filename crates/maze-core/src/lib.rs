//! **maze-core**: core types for grid mazes.
//!
//! This crate provides the types shared by the search engine and the agent
//! controller: cell geometry, a tile grid, the [`Terrain`] interface through
//! which search reads a maze, and the concrete [`Maze`].

pub mod geom;
pub mod grid;
pub mod maze;
pub mod terrain;

pub use geom::{Bounds, Cell};
pub use grid::{Grid, Tile};
pub use maze::{Maze, MazeError};
pub use terrain::{Situation, Terrain};
