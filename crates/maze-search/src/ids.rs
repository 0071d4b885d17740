use std::collections::HashSet;

use maze_core::{Cell, Terrain};

use crate::neighbors::neighbors;
use crate::node::{NodeId, SearchTree};
use crate::result::SearchResult;
use crate::strategy::Strategy;

/// Iterative-deepening search from `start` to `goal`.
///
/// Runs a depth-limited DFS for each limit in `1..=max_depth` and stops at
/// the first limit that reaches the goal, so the path is shortest whenever
/// the shortest path has at most `max_depth` moves. Goals farther than the
/// bound are reported as not found even when a route exists.
///
/// A branch never revisits a cell already on it. On failure the tree and
/// trace of the deepest iteration are returned.
pub fn ids<T: Terrain + ?Sized>(
    terrain: &T,
    start: Cell,
    goal: Cell,
    max_depth: usize,
) -> SearchResult {
    if start == goal {
        return SearchResult::trivial(Strategy::Ids, start);
    }

    let mut last = Iteration::default();
    for limit in 1..=max_depth {
        let mut it = Iteration::default();
        let root = it.tree.root(start);
        if let Some(hit) = it.depth_limited(terrain, root, goal, limit) {
            return SearchResult::found(Strategy::Ids, it.tree, hit, it.explored);
        }
        last = it;
    }

    SearchResult::exhausted(Strategy::Ids, last.tree, last.explored)
}

/// State of one depth-limited pass.
#[derive(Default)]
struct Iteration {
    tree: SearchTree,
    explored: Vec<Cell>,
    seen: HashSet<Cell>,
}

impl Iteration {
    fn depth_limited<T: Terrain + ?Sized>(
        &mut self,
        terrain: &T,
        id: NodeId,
        goal: Cell,
        limit: usize,
    ) -> Option<NodeId> {
        let cell = self.tree[id].cell;
        if self.seen.insert(cell) {
            self.explored.push(cell);
        }
        if cell == goal {
            return Some(id);
        }
        if limit == 0 {
            return None;
        }
        for (dir, next) in neighbors(terrain, cell) {
            if self.tree.on_branch(id, next) {
                continue;
            }
            let child = self.tree.child(id, dir, next);
            if let Some(hit) = self.depth_limited(terrain, child, goal, limit - 1) {
                return Some(hit);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs;
    use crate::testutil::{OPEN_5X5, WALLED_GOAL, assert_valid_path};
    use maze_core::Maze;

    #[test]
    fn same_path_as_bfs_within_bound() {
        let m = Maze::parse(OPEN_5X5).unwrap();
        let i = ids(&m, m.start(), m.goal(), 7);
        let b = bfs(&m, m.start(), m.goal());
        assert_valid_path(&m, &i, m.start(), m.goal());
        assert_eq!(i.path, b.path);
        assert_eq!(i.tree.max_depth(), 4);
    }

    #[test]
    fn bound_exactly_the_distance() {
        let m = Maze::parse(OPEN_5X5).unwrap();
        assert_eq!(ids(&m, m.start(), m.goal(), 4).moves(), Some(4));
        assert!(ids(&m, m.start(), m.goal(), 3).path.is_none());
    }

    #[test]
    fn goal_beyond_bound_is_not_found() {
        // Nine moves along the corridor; a route exists but exceeds the bound.
        let m = Maze::parse("############\n#S........G#\n############").unwrap();
        let r = ids(&m, m.start(), m.goal(), 7);
        assert!(r.path.is_none());
        assert!(bfs(&m, m.start(), m.goal()).is_found());
        assert_eq!(r.explored.len(), 8);
    }

    #[test]
    fn zero_bound_finds_nothing() {
        let m = Maze::parse(OPEN_5X5).unwrap();
        let r = ids(&m, m.start(), m.goal(), 0);
        assert!(r.path.is_none());
        assert!(r.tree.is_empty());
    }

    #[test]
    fn unreachable_goal() {
        let m = Maze::parse(WALLED_GOAL).unwrap();
        let r = ids(&m, m.start(), m.goal(), 7);
        assert!(r.path.is_none());
        assert!(!r.explored.is_empty());
    }
}
