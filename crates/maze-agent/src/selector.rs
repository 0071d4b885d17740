//! Strategy suggestions from a situation tag.

use maze_core::Situation;
use maze_search::Strategy;

/// Strategy used when nothing has been chosen yet.
pub const DEFAULT_STRATEGY: Strategy = Strategy::AStar;

/// Suggest a strategy for `situation`, given the one currently in use.
///
/// - stuck: dive deep (DFS, or IDS when already on DFS)
/// - open: A*
/// - complex: bounded memory while staying complete (IDS, or BFS when
///   already on IDS)
/// - otherwise: A*
pub fn suggest(current: Option<Strategy>, situation: Situation) -> Strategy {
    match situation {
        Situation::Stuck => match current {
            Some(Strategy::Dfs) => Strategy::Ids,
            _ => Strategy::Dfs,
        },
        Situation::Open => Strategy::AStar,
        Situation::Complex => match current {
            Some(Strategy::Ids) => Strategy::Bfs,
            _ => Strategy::Ids,
        },
        Situation::Unclassified => DEFAULT_STRATEGY,
    }
}
