use std::collections::HashSet;

use maze_core::{Cell, Terrain};

use crate::neighbors::neighbors;
use crate::node::SearchTree;
use crate::result::SearchResult;
use crate::strategy::Strategy;

/// Depth-first search from `start` to `goal`.
///
/// A cell may sit in the LIFO frontier several times; it is marked explored
/// on its first pop and later pops are skipped. The goal is tested on pop.
pub fn dfs<T: Terrain + ?Sized>(terrain: &T, start: Cell, goal: Cell) -> SearchResult {
    if start == goal {
        return SearchResult::trivial(Strategy::Dfs, start);
    }

    let mut tree = SearchTree::new();
    let root = tree.root(start);
    let mut frontier = vec![root];
    let mut closed: HashSet<Cell> = HashSet::new();
    let mut explored = Vec::new();

    while let Some(id) = frontier.pop() {
        let cell = tree[id].cell;
        if !closed.insert(cell) {
            continue;
        }
        explored.push(cell);

        if cell == goal {
            return SearchResult::found(Strategy::Dfs, tree, id, explored);
        }

        for (dir, next) in neighbors(terrain, cell) {
            if closed.contains(&next) {
                continue;
            }
            frontier.push(tree.child(id, dir, next));
        }
    }

    SearchResult::exhausted(Strategy::Dfs, tree, explored)
}
