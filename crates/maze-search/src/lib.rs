//! Graph search over grid mazes.
//!
//! Four interchangeable strategies share one contract: given a
//! [`Terrain`](maze_core::Terrain), a start and a goal, produce a
//! [`SearchResult`] holding the path (if any), the expansion trace and the
//! tree of generated nodes.
//!
//! - **BFS** ([`bfs()`]) shortest in moves
//! - **DFS** ([`dfs()`]) first path found by diving
//! - **A\*** ([`astar()`]) shortest in moves, Manhattan heuristic, FIFO tie-break
//! - **IDS** ([`ids()`]) shortest within a depth bound
//!
//! All expand neighbours in the fixed order up, right, down, left, so every
//! result is reproducible.

mod astar;
mod bfs;
mod dfs;
mod distance;
mod ids;
mod neighbors;
mod node;
mod reach;
mod result;
mod search;
mod strategy;

pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use distance::manhattan;
pub use ids::ids;
pub use neighbors::{Direction, exits, neighbors};
pub use node::{Lineage, NodeId, SearchNode, SearchTree};
pub use reach::{flood, reachable};
pub use result::SearchResult;
pub use search::{DEFAULT_IDS_MAX_DEPTH, SearchOptions, search, search_with};
pub use strategy::{ParseStrategyError, Strategy};


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use maze_core::{Maze, Terrain};

    #[test]
    fn result_round_trip() {
        let m = Maze::parse(testutil::OPEN_5X5).unwrap();
        let r = search(&m, m.start(), m.goal(), Strategy::AStar);
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn options_default_fill() {
        let opts: SearchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.ids_max_depth, DEFAULT_IDS_MAX_DEPTH);
    }
}
