//! The agent controller.
//!
//! A state machine driven by [`Agent::step`]. Each step records the current
//! cell, stops at the goal, replans when the cached path is missing,
//! exhausted or repeatedly blocked, and then moves at most one cell.

use std::collections::HashSet;
use std::fmt;

use maze_core::{Cell, Situation, Terrain};
use maze_search::{SearchOptions, SearchResult, Strategy, exits, search_with};

use crate::config::{AgentConfig, FallbackPolicy};
use crate::selector::{DEFAULT_STRATEGY, suggest};

/// Lifecycle of an agent run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    #[default]
    Idle,
    Searching,
    FollowingPath,
    GoalReached,
    NoSolution,
}

impl AgentState {
    /// Whether [`Agent::step`] does anything in this state.
    pub const fn is_active(self) -> bool {
        matches!(self, AgentState::Searching | AgentState::FollowingPath)
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AgentState::Idle => "idle",
            AgentState::Searching => "searching",
            AgentState::FollowingPath => "following path",
            AgentState::GoalReached => "goal reached",
            AgentState::NoSolution => "no solution",
        })
    }
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStats {
    /// Search engine invocations, fallbacks included.
    pub searches: u32,
    /// Replans triggered.
    pub replans: u32,
    /// Fallback invocations after a failed primary search.
    pub fallbacks: u32,
    /// Cells moved.
    pub moves: u32,
    /// Times the current strategy changed.
    pub strategy_switches: u32,
    /// Cached paths dropped because their next cell became blocked.
    pub stale_paths: u32,
}

/// A read-only copy of the agent's observable state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub state: AgentState,
    pub position: Cell,
    pub strategy: Option<Strategy>,
    pub manual: bool,
    pub current_path: Option<Vec<Cell>>,
    pub optimal_path: Vec<Cell>,
    /// Sorted row-major.
    pub visited: Vec<Cell>,
    pub history: Vec<Cell>,
    pub stats: AgentStats,
}

/// A single agent walking a maze toward its goal.
#[derive(Debug, Clone)]
pub struct Agent {
    config: AgentConfig,
    position: Cell,
    state: AgentState,
    strategy: Option<Strategy>,
    manual: bool,
    path: Option<Vec<Cell>>,
    cursor: usize,
    steps_without_progress: u32,
    stuck_cycles: u32,
    visited: HashSet<Cell>,
    history: Vec<Cell>,
    optimal_path: Vec<Cell>,
    last_search: Option<SearchResult>,
    stats: AgentStats,
}

impl Agent {
    /// An idle agent at `start` with the default configuration.
    pub fn new(start: Cell) -> Self {
        Self::with_config(start, AgentConfig::default())
    }

    /// An idle agent at `start`.
    pub fn with_config(start: Cell, config: AgentConfig) -> Self {
        Self {
            config,
            position: start,
            state: AgentState::Idle,
            strategy: None,
            manual: false,
            path: None,
            cursor: 0,
            steps_without_progress: 0,
            stuck_cycles: 0,
            visited: HashSet::new(),
            history: vec![start],
            optimal_path: Vec::new(),
            last_search: None,
            stats: AgentStats::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Leave `Idle` and begin searching. Returns `false` in any other state.
    pub fn start(&mut self) -> bool {
        if self.state != AgentState::Idle {
            return false;
        }
        self.state = AgentState::Searching;
        true
    }

    /// Advance the agent by one tick against `terrain`.
    ///
    /// Returns `false` when the agent is not in an active state, or when the
    /// replan in this step found no path with any permitted strategy.
    pub fn step<T: Terrain + ?Sized>(&mut self, terrain: &T) -> bool {
        if !self.state.is_active() {
            return false;
        }
        self.visited.insert(self.position);

        let goal = terrain.goal();
        if self.position == goal {
            log::info!(
                "goal {goal} reached after {} moves, {} searches",
                self.stats.moves,
                self.stats.searches
            );
            self.state = AgentState::GoalReached;
            return true;
        }

        if self.needs_replan(goal) {
            if !self.manual {
                self.adapt_strategy(terrain);
            }
            if !self.replan(terrain, goal) {
                return false;
            }
        }

        self.advance(terrain);
        true
    }

    /// Choose the strategy by name and switch to manual mode.
    ///
    /// Unknown names are rejected with `false` and leave the agent untouched.
    pub fn set_strategy(&mut self, name: &str) -> bool {
        match name.parse::<Strategy>() {
            Ok(s) => {
                self.set_strategy_kind(s);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// Choose the strategy and switch to manual mode. The next step replans.
    pub fn set_strategy_kind(&mut self, strategy: Strategy) {
        log::info!("strategy set manually to {strategy}");
        if self.strategy != Some(strategy) {
            self.stats.strategy_switches += 1;
        }
        self.strategy = Some(strategy);
        self.manual = true;
        self.path = None;
        self.steps_without_progress = self.config.replan_threshold;
    }

    /// Return to automatic strategy selection, keeping the current strategy
    /// as the starting point.
    pub fn clear_manual(&mut self) {
        self.manual = false;
    }

    /// Drop the cached path after an external grid or goal change. A run that
    /// ended in `NoSolution` becomes active again.
    pub fn notify_grid_changed(&mut self) {
        self.path = None;
        if self.state == AgentState::NoSolution {
            self.state = AgentState::Searching;
        }
    }

    /// Put the agent back at `start` in `Idle`, clearing the run's path,
    /// counters and traces. The strategy and manual flag are kept.
    pub fn reset(&mut self, start: Cell) {
        self.position = start;
        self.state = AgentState::Idle;
        self.path = None;
        self.cursor = 0;
        self.steps_without_progress = 0;
        self.stuck_cycles = 0;
        self.visited.clear();
        self.history.clear();
        self.history.push(start);
        self.optimal_path.clear();
        self.last_search = None;
        self.stats = AgentStats::default();
    }

    /// Like [`reset`](Self::reset), but also forget the strategy and return
    /// to automatic selection.
    pub fn reset_automatic(&mut self, start: Cell) {
        self.reset(start);
        self.strategy = None;
        self.manual = false;
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    /// Whether the strategy was chosen manually.
    pub fn is_manual(&self) -> bool {
        self.manual
    }

    /// Every cell stood on or expanded by a primary search during this run.
    pub fn visited(&self) -> &HashSet<Cell> {
        &self.visited
    }

    /// The path being followed, if still valid.
    pub fn current_path(&self) -> Option<&[Cell]> {
        self.path.as_deref()
    }

    /// The most recently computed path, kept after invalidation.
    pub fn optimal_path(&self) -> &[Cell] {
        &self.optimal_path
    }

    /// Cells occupied so far, in order.
    pub fn history(&self) -> &[Cell] {
        &self.history
    }

    /// The search that produced the current plan, or the failed primary
    /// search when every strategy failed.
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }

    pub fn stats(&self) -> AgentStats {
        self.stats
    }

    pub fn snapshot(&self) -> AgentSnapshot {
        let mut visited: Vec<Cell> = self.visited.iter().copied().collect();
        visited.sort();
        AgentSnapshot {
            state: self.state,
            position: self.position,
            strategy: self.strategy,
            manual: self.manual,
            current_path: self.path.clone(),
            optimal_path: self.optimal_path.clone(),
            visited,
            history: self.history.clone(),
            stats: self.stats,
        }
    }

    // -----------------------------------------------------------------------
    // Step internals
    // -----------------------------------------------------------------------

    fn needs_replan(&self, goal: Cell) -> bool {
        let Some(path) = &self.path else {
            return true;
        };
        self.cursor >= path.len()
            || self.steps_without_progress >= self.config.replan_threshold
            || (self.config.replan_on_goal_change && path.last() != Some(&goal))
    }

    /// Automatic strategy choice before a replan.
    fn adapt_strategy<T: Terrain + ?Sized>(&mut self, terrain: &T) {
        if exits(terrain, self.position) <= self.config.stuck_exit_threshold {
            self.stuck_cycles += 1;
            if self.stuck_cycles >= self.config.stuck_cycles_to_switch {
                self.adopt(suggest(self.strategy, Situation::Stuck), Situation::Stuck);
                self.stuck_cycles = 0;
            }
        } else {
            self.stuck_cycles = 0;
            let situation = terrain.classify_situation(self.position);
            self.adopt(suggest(self.strategy, situation), situation);
        }
    }

    fn adopt(&mut self, strategy: Strategy, reason: impl fmt::Display) {
        if self.strategy == Some(strategy) {
            return;
        }
        match self.strategy {
            Some(old) => log::info!("switching {old} -> {strategy} ({reason}) at {}", self.position),
            None => log::info!("using {strategy} ({reason})"),
        }
        self.strategy = Some(strategy);
        self.stats.strategy_switches += 1;
    }

    fn fallback_allowed(&self) -> bool {
        match self.config.fallback {
            FallbackPolicy::AutomaticOnly => !self.manual,
            FallbackPolicy::Always => true,
        }
    }

    fn run_search<T: Terrain + ?Sized>(
        &mut self,
        terrain: &T,
        strategy: Strategy,
        goal: Cell,
        opts: &SearchOptions,
    ) -> SearchResult {
        self.stats.searches += 1;
        search_with(terrain, self.position, goal, strategy, opts)
    }

    /// Search from the current cell, falling back to the other strategies
    /// when permitted. Returns `false` and enters `NoSolution` on failure.
    fn replan<T: Terrain + ?Sized>(&mut self, terrain: &T, goal: Cell) -> bool {
        self.stats.replans += 1;
        let opts = self.config.search_options();
        let primary = match self.strategy {
            Some(s) => s,
            None => {
                self.adopt(DEFAULT_STRATEGY, Situation::Unclassified);
                DEFAULT_STRATEGY
            }
        };

        let mut result = self.run_search(terrain, primary, goal, &opts);
        self.visited.extend(result.explored.iter().copied());

        if !result.is_found() && self.fallback_allowed() {
            for alt in Strategy::ALL.into_iter().filter(|&s| s != primary) {
                log::info!("{primary} found no path from {}; trying {alt}", self.position);
                self.stats.fallbacks += 1;
                let r = self.run_search(terrain, alt, goal, &opts);
                if r.is_found() {
                    self.adopt(alt, "fallback");
                    result = r;
                    break;
                }
            }
        }

        let Some(path) = result.path.clone() else {
            log::warn!("no strategy found a path from {} to {goal}", self.position);
            self.path = None;
            self.state = AgentState::NoSolution;
            self.last_search = Some(result);
            return false;
        };

        log::debug!(
            "{} planned {} moves from {}",
            result.strategy,
            path.len() - 1,
            self.position
        );
        self.optimal_path.clone_from(&path);
        self.path = Some(path);
        self.cursor = 1;
        self.steps_without_progress = 0;
        self.state = AgentState::FollowingPath;
        self.last_search = Some(result);
        true
    }

    /// Move onto the next path cell, or drop the path if it is now blocked.
    fn advance<T: Terrain + ?Sized>(&mut self, terrain: &T) {
        if self.state != AgentState::FollowingPath {
            return;
        }
        let Some(&next) = self.path.as_ref().and_then(|p| p.get(self.cursor)) else {
            return;
        };
        if terrain.in_bounds(next) && terrain.is_passable(next) {
            self.position = next;
            self.history.push(next);
            self.cursor += 1;
            self.steps_without_progress = 0;
            self.stats.moves += 1;
        } else {
            log::debug!("path cell {next} is blocked; dropping path");
            self.steps_without_progress += 1;
            self.path = None;
            self.stats.stale_paths += 1;
        }
    }
}
