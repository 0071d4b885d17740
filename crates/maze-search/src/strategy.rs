use std::fmt;
use std::str::FromStr;

/// The four search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first: complete, shortest in moves.
    Bfs,
    /// Depth-first: complete on finite grids, no length guarantee.
    Dfs,
    /// Best-first on `g + manhattan`: complete, shortest in moves.
    AStar,
    /// Iterative deepening, bounded by a maximum depth.
    Ids,
}

impl Strategy {
    /// Fallback order. The first strategy in this list that finds a path wins.
    pub const ALL: [Strategy; 4] = [Strategy::Bfs, Strategy::Dfs, Strategy::AStar, Strategy::Ids];

    /// Canonical display name.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::AStar => "A*",
            Strategy::Ids => "IDS",
        }
    }

    /// Whether a returned path is guaranteed minimal in moves.
    ///
    /// IDS is minimal only when the shortest path fits its depth bound.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Strategy::Bfs | Strategy::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BFS" => Ok(Strategy::Bfs),
            "DFS" => Ok(Strategy::Dfs),
            "A*" | "ASTAR" | "A-STAR" => Ok(Strategy::AStar),
            "IDS" => Ok(Strategy::Ids),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// An unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search strategy \u{201c}{}\u{201d} (expected BFS, DFS, A* or IDS)",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("bfs".parse::<Strategy>(), Ok(Strategy::Bfs));
        assert_eq!(" DFS ".parse::<Strategy>(), Ok(Strategy::Dfs));
        assert_eq!("A*".parse::<Strategy>(), Ok(Strategy::AStar));
        assert_eq!("astar".parse::<Strategy>(), Ok(Strategy::AStar));
        assert_eq!("Ids".parse::<Strategy>(), Ok(Strategy::Ids));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "dijkstra".parse::<Strategy>().unwrap_err();
        assert_eq!(err, ParseStrategyError("dijkstra".into()));
        assert!(err.to_string().contains("dijkstra"));
    }

    #[test]
    fn display_round_trips() {
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse::<Strategy>(), Ok(s));
        }
    }
}
