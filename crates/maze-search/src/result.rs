use maze_core::Cell;

use crate::node::{NodeId, SearchNode, SearchTree};
use crate::strategy::Strategy;

/// Outcome of one search invocation.
///
/// `explored` lists cells in the order the strategy expanded them and is
/// meant for diagnostics only. The tree holds every generated node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub strategy: Strategy,
    pub path: Option<Vec<Cell>>,
    pub explored: Vec<Cell>,
    pub tree: SearchTree,
    pub terminal: Option<NodeId>,
}

impl SearchResult {
    /// `start == goal`: the one-cell path.
    pub(crate) fn trivial(strategy: Strategy, start: Cell) -> Self {
        let mut tree = SearchTree::new();
        let root = tree.root(start);
        Self {
            strategy,
            path: Some(vec![start]),
            explored: vec![start],
            tree,
            terminal: Some(root),
        }
    }

    /// The goal was reached at `terminal`.
    pub(crate) fn found(
        strategy: Strategy,
        tree: SearchTree,
        terminal: NodeId,
        explored: Vec<Cell>,
    ) -> Self {
        Self {
            strategy,
            path: Some(tree.path_to(terminal)),
            explored,
            tree,
            terminal: Some(terminal),
        }
    }

    /// The frontier ran dry, or the depth bound was exhausted.
    pub(crate) fn exhausted(strategy: Strategy, tree: SearchTree, explored: Vec<Cell>) -> Self {
        Self {
            strategy,
            path: None,
            explored,
            tree,
            terminal: None,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Path length in moves.
    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    /// The node that reached the goal.
    pub fn terminal_node(&self) -> Option<&SearchNode> {
        self.terminal.and_then(|id| self.tree.get(id))
    }
}
