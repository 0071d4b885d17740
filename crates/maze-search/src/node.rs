//! Search nodes and the per-search arena that owns them.
//!
//! Nodes point back to their parent by [`NodeId`]; children are never
//! referenced from the parent, so the structure is a tree by construction.

use std::ops::Index;

use maze_core::Cell;

use crate::neighbors::Direction;

/// Handle of a node inside one [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in creation order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One state reached during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub cell: Cell,
    pub parent: Option<NodeId>,
    /// Move taken from the parent; `None` for the root.
    pub action: Option<Direction>,
    /// Moves from the root.
    pub cost: i32,
}

/// Arena of every node generated by one search invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parentless node at `cell`.
    pub fn root(&mut self, cell: Cell) -> NodeId {
        self.push(SearchNode {
            cell,
            parent: None,
            action: None,
            cost: 0,
        })
    }

    /// Add a node reached from `parent` by `action`.
    pub fn child(&mut self, parent: NodeId, action: Direction, cell: Cell) -> NodeId {
        let cost = self[parent].cost + 1;
        self.push(SearchNode {
            cell,
            parent: Some(parent),
            action: Some(action),
            cost,
        })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Node by handle, or `None` for a handle from another tree.
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// Number of generated nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Walk from `id` up to the root, `id` first.
    pub fn lineage(&self, id: NodeId) -> Lineage<'_> {
        Lineage {
            tree: self,
            next: Some(id),
        }
    }

    /// Cells from the root down to `id`.
    pub fn path_to(&self, id: NodeId) -> Vec<Cell> {
        let mut path: Vec<Cell> = self.lineage(id).map(|n| n.cell).collect();
        path.reverse();
        path
    }

    /// Whether `cell` already appears on the branch ending at `id`.
    pub fn on_branch(&self, id: NodeId, cell: Cell) -> bool {
        self.lineage(id).any(|n| n.cell == cell)
    }

    /// `(parent cell, child cell)` for every non-root node, in creation order.
    pub fn edges(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.nodes
            .iter()
            .filter_map(|n| n.parent.map(|p| (self.nodes[p.0].cell, n.cell)))
    }

    /// Deepest cost among generated nodes.
    pub fn max_depth(&self) -> i32 {
        self.nodes.iter().map(|n| n.cost).max().unwrap_or(0)
    }
}

impl Index<NodeId> for SearchTree {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}

/// Iterator returned by [`SearchTree::lineage`].
pub struct Lineage<'a> {
    tree: &'a SearchTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Lineage<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<&'a SearchNode> {
        let node = self.tree.get(self.next?)?;
        self.next = node.parent;
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> (SearchTree, NodeId) {
        let mut t = SearchTree::new();
        let r = t.root(Cell::new(1, 1));
        let a = t.child(r, Direction::Right, Cell::new(1, 2));
        let b = t.child(a, Direction::Down, Cell::new(2, 2));
        t.child(r, Direction::Down, Cell::new(2, 1));
        (t, b)
    }

    #[test]
    fn path_and_costs() {
        let (t, leaf) = chain();
        assert_eq!(t.len(), 4);
        assert_eq!(t[leaf].cost, 2);
        assert_eq!(t[leaf].action, Some(Direction::Down));
        assert_eq!(
            t.path_to(leaf),
            vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(2, 2)]
        );
        assert_eq!(t.max_depth(), 2);
    }

    #[test]
    fn lineage_stops_at_root() {
        let (t, leaf) = chain();
        let cells: Vec<_> = t.lineage(leaf).map(|n| n.cell).collect();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2], Cell::new(1, 1));
        assert!(t.on_branch(leaf, Cell::new(1, 2)));
        assert!(!t.on_branch(leaf, Cell::new(2, 1)));
    }

    #[test]
    fn edges_skip_root() {
        let (t, _) = chain();
        let edges: Vec<_> = t.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], (Cell::new(1, 1), Cell::new(1, 2)));
        assert_eq!(edges[2], (Cell::new(1, 1), Cell::new(2, 1)));
    }
}
