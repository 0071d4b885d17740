//! Agent tunables.

use maze_search::{DEFAULT_IDS_MAX_DEPTH, SearchOptions};

/// When the controller retries the other strategies after a failed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FallbackPolicy {
    /// Only while the strategy is chosen automatically. A manually chosen
    /// strategy that fails ends the run in `NoSolution`.
    #[default]
    AutomaticOnly,
    /// Regardless of how the strategy was chosen. The manual choice is kept
    /// only if it succeeds.
    Always,
}

/// Controller configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Consecutive blocked moves that force a replan.
    pub replan_threshold: u32,
    /// A cell with at most this many exits counts as a dead end.
    pub stuck_exit_threshold: usize,
    /// Replans spent in a dead end before switching strategy.
    pub stuck_cycles_to_switch: u32,
    /// Depth bound handed to iterative deepening.
    pub ids_max_depth: usize,
    pub fallback: FallbackPolicy,
    /// Treat a cached path that no longer ends at the goal as exhausted.
    pub replan_on_goal_change: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            replan_threshold: 3,
            stuck_exit_threshold: 1,
            stuck_cycles_to_switch: 2,
            ids_max_depth: DEFAULT_IDS_MAX_DEPTH,
            fallback: FallbackPolicy::AutomaticOnly,
            replan_on_goal_change: true,
        }
    }
}

impl AgentConfig {
    /// Options for the search engine.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            ids_max_depth: self.ids_max_depth,
        }
    }
}
