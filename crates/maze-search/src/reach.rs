//! Reachability checks.

use std::collections::{HashSet, VecDeque};

use maze_core::{Cell, Terrain};

use crate::neighbors::neighbors;

/// Flood-fill from `from` and return every passable cell connected to it,
/// `from` included. Returns an empty set when `from` is not passable.
pub fn flood<T: Terrain + ?Sized>(terrain: &T, from: Cell) -> HashSet<Cell> {
    let mut region = HashSet::new();
    if !terrain.is_passable(from) {
        return region;
    }
    let mut stack = vec![from];
    region.insert(from);
    while let Some(c) = stack.pop() {
        for (_, n) in neighbors(terrain, c) {
            if region.insert(n) {
                stack.push(n);
            }
        }
    }
    region
}

/// Whether `to` can be reached from `from` through passable cells.
///
/// Stops as soon as `to` is discovered.
pub fn reachable<T: Terrain + ?Sized>(terrain: &T, from: Cell, to: Cell) -> bool {
    if !terrain.is_passable(from) || !terrain.is_passable(to) {
        return false;
    }
    if from == to {
        return true;
    }
    let mut seen = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);
    while let Some(c) = queue.pop_front() {
        for (_, n) in neighbors(terrain, c) {
            if n == to {
                return true;
            }
            if seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    false
}
