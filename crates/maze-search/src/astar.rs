use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use maze_core::{Cell, Terrain};

use crate::distance::manhattan;
use crate::neighbors::neighbors;
use crate::node::{NodeId, SearchTree};
use crate::result::SearchResult;
use crate::strategy::Strategy;

/// Frontier entry ordered by `f`, then by insertion sequence.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    f: i32,
    seq: u64,
    node: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest insertion among equal f.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search from `start` to `goal` with the Manhattan heuristic.
///
/// A neighbour is (re)inserted only when its new cost beats the best cost
/// recorded for it. The goal is tested on pop, which yields an optimal path.
pub fn astar<T: Terrain + ?Sized>(terrain: &T, start: Cell, goal: Cell) -> SearchResult {
    if start == goal {
        return SearchResult::trivial(Strategy::AStar, start);
    }

    let mut tree = SearchTree::new();
    let root = tree.root(start);
    let mut seq: u64 = 0;
    let mut open = BinaryHeap::new();
    open.push(Entry {
        f: manhattan(start, goal),
        seq,
        node: root,
    });
    seq += 1;

    let mut best_g: HashMap<Cell, i32> = HashMap::from([(start, 0)]);
    let mut closed: HashSet<Cell> = HashSet::new();
    let mut explored = Vec::new();

    while let Some(Entry { node: id, .. }) = open.pop() {
        let cell = tree[id].cell;
        if cell == goal {
            return SearchResult::found(Strategy::AStar, tree, id, explored);
        }
        // Skip stale entries.
        if !closed.insert(cell) {
            continue;
        }
        explored.push(cell);

        let g = tree[id].cost + 1;
        for (dir, next) in neighbors(terrain, cell) {
            if best_g.get(&next).is_some_and(|&known| known <= g) {
                continue;
            }
            best_g.insert(next, g);
            let child = tree.child(id, dir, next);
            open.push(Entry {
                f: g + manhattan(next, goal),
                seq,
                node: child,
            });
            seq += 1;
        }
    }

    SearchResult::exhausted(Strategy::AStar, tree, explored)
}
