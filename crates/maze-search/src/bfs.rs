use std::collections::{HashSet, VecDeque};

use maze_core::{Cell, Terrain};

use crate::neighbors::neighbors;
use crate::node::SearchTree;
use crate::result::SearchResult;
use crate::strategy::Strategy;

/// Breadth-first search from `start` to `goal`.
///
/// Each cell enters the FIFO frontier at most once. The goal is tested when
/// generated, so the first path returned is shortest in moves.
pub fn bfs<T: Terrain + ?Sized>(terrain: &T, start: Cell, goal: Cell) -> SearchResult {
    if start == goal {
        return SearchResult::trivial(Strategy::Bfs, start);
    }

    let mut tree = SearchTree::new();
    let root = tree.root(start);
    let mut frontier = VecDeque::from([root]);
    // Explored cells together with cells waiting in the frontier.
    let mut seen: HashSet<Cell> = HashSet::from([start]);
    let mut explored = Vec::new();

    while let Some(id) = frontier.pop_front() {
        let cell = tree[id].cell;
        explored.push(cell);

        for (dir, next) in neighbors(terrain, cell) {
            if !seen.insert(next) {
                continue;
            }
            let child = tree.child(id, dir, next);
            if next == goal {
                return SearchResult::found(Strategy::Bfs, tree, child, explored);
            }
            frontier.push_back(child);
        }
    }

    SearchResult::exhausted(Strategy::Bfs, tree, explored)
}
