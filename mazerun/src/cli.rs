//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use maze_agent::{AgentConfig, FallbackPolicy};
use maze_search::{DEFAULT_IDS_MAX_DEPTH, Strategy};

/// How the maze changes while the agent walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DynamicArg {
    /// The maze stays fixed
    Off,
    /// Every few ticks: shuffle walls and move the goal at random
    Walls,
    /// Every few ticks: reshape around the agent and push a suggested strategy
    Algorithms,
}

#[derive(Parser, Debug)]
#[command(name = "mazerun")]
#[command(version, about = "Run an adaptive search agent through a maze")]
#[command(long_about = r#"
Builds a random maze (or loads one from a text file), then steps an agent
from S toward G until it arrives, gives up, or the tick budget runs out.

The agent picks BFS, DFS, A* or IDS from its surroundings unless a strategy
is forced with --strategy, and falls back to the others when a search fails.

Maze files use '#' for walls, '.' for floor, 'S' for the start and 'G' for
the goal.

Example:
  mazerun --rows 15 --cols 25 --density 0.35 --seed 7
  mazerun --strategy ids --dynamic algorithms -vv
  mazerun --maze level.txt --strategy "A*"
"#)]
pub struct Cli {
    /// Maze height, border included
    #[arg(long, default_value_t = 21, value_parser = clap::value_parser!(i32).range(3..))]
    pub rows: i32,

    /// Maze width, border included
    #[arg(long, default_value_t = 31, value_parser = clap::value_parser!(i32).range(3..))]
    pub cols: i32,

    /// Share of interior cells that start as walls (0.0 to 1.0)
    #[arg(short, long, default_value_t = 0.3, value_parser = parse_density)]
    pub density: f64,

    /// Seed for maze generation and mutation (random if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Load the maze from a text file instead of generating one
    #[arg(long, value_name = "PATH")]
    pub maze: Option<PathBuf>,

    /// Force a strategy: BFS, DFS, A* or IDS
    #[arg(short = 'a', long, value_name = "STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Fall back to other strategies even when one is forced
    #[arg(long)]
    pub always_fallback: bool,

    /// Depth bound for iterative deepening (1 to 12)
    #[arg(long, default_value_t = DEFAULT_IDS_MAX_DEPTH, value_parser = parse_ids_depth)]
    pub ids_max_depth: usize,

    /// Give up after this many ticks
    #[arg(long, default_value_t = 1000)]
    pub max_steps: usize,

    /// Change the maze while the agent walks
    #[arg(long, value_enum, default_value = "off")]
    pub dynamic: DynamicArg,

    /// Print the maze after every tick
    #[arg(long)]
    pub trace: bool,

    /// Print the last search tree: the goal branch, or every edge on failure
    #[arg(long)]
    pub tree: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_density(s: &str) -> Result<f64, String> {
    let d: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&d) {
        Ok(d)
    } else {
        Err(format!("{d} is not between 0.0 and 1.0"))
    }
}

/// Deepest bound accepted for iterative deepening. Every pass keeps its
/// whole tree, which grows about sevenfold per level on open ground.
pub const MAX_IDS_DEPTH: usize = 12;

fn parse_ids_depth(s: &str) -> Result<usize, String> {
    let d: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (1..=MAX_IDS_DEPTH).contains(&d) {
        Ok(d)
    } else {
        Err(format!("{d} is not between 1 and {MAX_IDS_DEPTH}"))
    }
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn agent_config(&self) -> AgentConfig {
        AgentConfig {
            ids_max_depth: self.ids_max_depth,
            fallback: if self.always_fallback {
                FallbackPolicy::Always
            } else {
                FallbackPolicy::AutomaticOnly
            },
            ..AgentConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["mazerun"]);
        assert_eq!((cli.rows, cli.cols), (21, 31));
        assert_eq!(cli.dynamic, DynamicArg::Off);
        assert_eq!(cli.strategy, None);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
        assert_eq!(cli.agent_config(), AgentConfig::default());
    }

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::parse_from([
            "mazerun",
            "-a",
            "a*",
            "--always-fallback",
            "--ids-max-depth",
            "12",
            "--dynamic",
            "algorithms",
            "-vv",
        ]);
        assert_eq!(cli.strategy, Some(Strategy::AStar));
        assert_eq!(cli.dynamic, DynamicArg::Algorithms);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
        let cfg = cli.agent_config();
        assert_eq!(cfg.fallback, FallbackPolicy::Always);
        assert_eq!(cfg.ids_max_depth, 12);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Cli::try_parse_from(["mazerun", "--density", "1.5"]).is_err());
        assert!(Cli::try_parse_from(["mazerun", "--rows", "2"]).is_err());
        assert!(Cli::try_parse_from(["mazerun", "-a", "dijkstra"]).is_err());
    }

    #[test]
    fn ids_depth_is_capped() {
        assert!(Cli::try_parse_from(["mazerun", "--ids-max-depth", "0"]).is_err());
        assert!(Cli::try_parse_from(["mazerun", "--ids-max-depth", "13"]).is_err());
        let cli = Cli::parse_from(["mazerun", "--ids-max-depth", "12", "--tree"]);
        assert_eq!(cli.ids_max_depth, MAX_IDS_DEPTH);
        assert!(cli.tree);
    }
}
