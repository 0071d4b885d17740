//! An adaptive agent that walks a maze toward its goal.
//!
//! The [`Agent`] plans with one of the four search strategies, follows the
//! plan one cell per [`Agent::step`], and replans when the plan runs out,
//! gets blocked, or the goal moves. While the strategy is chosen
//! automatically the agent consults [`suggest`] before each replan and falls
//! back to the remaining strategies when a search fails.
//!
//! ```
//! use maze_agent::{Agent, AgentState};
//! use maze_core::Maze;
//!
//! let maze = Maze::bordered(6, 6);
//! let mut agent = Agent::new(maze.start());
//! agent.start();
//! while agent.step(&maze) {}
//! assert_eq!(agent.state(), AgentState::GoalReached);
//! ```

mod agent;
mod config;
mod selector;

pub use agent::{Agent, AgentSnapshot, AgentState, AgentStats};
pub use config::{AgentConfig, FallbackPolicy};
pub use selector::{DEFAULT_STRATEGY, suggest};
