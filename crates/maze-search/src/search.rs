use maze_core::{Cell, Terrain};

use crate::astar::astar;
use crate::bfs::bfs;
use crate::dfs::dfs;
use crate::ids::ids;
use crate::result::SearchResult;
use crate::strategy::Strategy;

/// Default depth bound for [`Strategy::Ids`].
pub const DEFAULT_IDS_MAX_DEPTH: usize = 7;

/// Tunables for a search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Deepest limit tried by iterative deepening.
    pub ids_max_depth: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            ids_max_depth: DEFAULT_IDS_MAX_DEPTH,
        }
    }
}

/// Run `strategy` from `start` to `goal` with default options.
pub fn search<T: Terrain + ?Sized>(
    terrain: &T,
    start: Cell,
    goal: Cell,
    strategy: Strategy,
) -> SearchResult {
    search_with(terrain, start, goal, strategy, &SearchOptions::default())
}

/// Run `strategy` from `start` to `goal`.
///
/// `start` and `goal` are expected to be passable; the engine does not check.
pub fn search_with<T: Terrain + ?Sized>(
    terrain: &T,
    start: Cell,
    goal: Cell,
    strategy: Strategy,
    opts: &SearchOptions,
) -> SearchResult {
    log::debug!("{strategy}: searching {start} -> {goal}");
    let result = match strategy {
        Strategy::Bfs => bfs(terrain, start, goal),
        Strategy::Dfs => dfs(terrain, start, goal),
        Strategy::AStar => astar(terrain, start, goal),
        Strategy::Ids => ids(terrain, start, goal, opts.ids_max_depth),
    };
    match result.moves() {
        Some(moves) => log::debug!(
            "{strategy}: found {moves} moves, {} expanded, {} generated",
            result.explored.len(),
            result.tree.len()
        ),
        None => log::debug!(
            "{strategy}: no path, {} expanded, {} generated",
            result.explored.len(),
            result.tree.len()
        ),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{OPEN_5X5, WALLED_GOAL, assert_valid_path};
    use maze_core::Maze;

    #[test]
    fn every_strategy_finds_a_valid_path() {
        let m = Maze::parse(
            "
            ##########
            #S.#.....#
            #..#.##..#
            #.....#..#
            ####.##.##
            #......G.#
            ##########",
        )
        .unwrap();
        let shortest = search(&m, m.start(), m.goal(), Strategy::Bfs).moves();
        for s in Strategy::ALL {
            let r = search(&m, m.start(), m.goal(), s);
            assert_eq!(r.strategy, s);
            if s == Strategy::Ids && shortest > Some(DEFAULT_IDS_MAX_DEPTH) {
                continue;
            }
            assert_valid_path(&m, &r, m.start(), m.goal());
            if s.is_optimal() {
                assert_eq!(r.moves(), shortest);
            }
        }
    }

    #[test]
    fn open_room_scenario() {
        let m = Maze::parse(OPEN_5X5).unwrap();
        let bfs = search(&m, m.start(), m.goal(), Strategy::Bfs);
        let astar = search(&m, m.start(), m.goal(), Strategy::AStar);
        let ids = search(&m, m.start(), m.goal(), Strategy::Ids);
        let dfs = search(&m, m.start(), m.goal(), Strategy::Dfs);
        assert_eq!(bfs.path.as_ref().map(Vec::len), Some(5));
        assert_eq!(astar.moves(), Some(4));
        assert_eq!(ids.path, bfs.path);
        assert_valid_path(&m, &dfs, m.start(), m.goal());
    }

    #[test]
    fn start_equals_goal_for_all() {
        let m = Maze::parse(OPEN_5X5).unwrap();
        let c = Cell::new(2, 2);
        for s in Strategy::ALL {
            let r = search(&m, c, c, s);
            assert_eq!(r.path, Some(vec![c]));
            assert_eq!(r.explored, vec![c]);
            assert_eq!(r.terminal_node().map(|n| n.cell), Some(c));
        }
    }

    #[test]
    fn walled_goal_fails_for_all() {
        let m = Maze::parse(WALLED_GOAL).unwrap();
        for s in Strategy::ALL {
            let r = search(&m, m.start(), m.goal(), s);
            assert!(r.path.is_none(), "{s} found a path");
            assert!(r.terminal.is_none());
            assert!(!r.explored.is_empty());
        }
    }

    #[test]
    fn ids_bound_comes_from_options() {
        let m = Maze::parse("##########\n#S......G#\n##########").unwrap();
        let opts = SearchOptions { ids_max_depth: 3 };
        assert!(search_with(&m, m.start(), m.goal(), Strategy::Ids, &opts).path.is_none());
        assert_eq!(search(&m, m.start(), m.goal(), Strategy::Ids).moves(), Some(7));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let m = Maze::bordered(8, 8);
        for s in Strategy::ALL {
            let a = search(&m, m.start(), m.goal(), s);
            let b = search(&m, m.start(), m.goal(), s);
            assert_eq!(a, b);
        }
    }
}
