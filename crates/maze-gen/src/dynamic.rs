//! Periodic maze changes while an agent is walking.

use maze_core::{Cell, Situation, Terrain};
use maze_search::Strategy;
use rand::{Rng, RngExt};

use crate::mapgen::MazeGen;

/// Ticks between two dynamic updates.
pub const DYNAMIC_PERIOD: u32 = 5;

/// Wall changes per update when the agent is stuck.
pub const STUCK_WALL_CHANGES: usize = 8;

/// Wall changes per update otherwise.
pub const WALL_CHANGES: usize = 5;

/// A countdown that fires every [`DYNAMIC_PERIOD`] ticks while enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicMode {
    enabled: bool,
    countdown: u32,
}

impl Default for DynamicMode {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DynamicMode {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            countdown: DYNAMIC_PERIOD,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Ticks left before the next update.
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Flip the mode on or off and restart the countdown. Returns the new
    /// setting.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.countdown = DYNAMIC_PERIOD;
        self.enabled
    }

    /// Count one tick down. Returns `true` when an update is due, which also
    /// restarts the countdown. Always `false` while disabled.
    pub fn tick(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.countdown = DYNAMIC_PERIOD;
            return true;
        }
        false
    }
}

/// What a dynamic update changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicReport {
    pub goal_moved: bool,
    /// Cells toggled between wall and floor, before connectivity repair.
    pub walls_changed: usize,
    /// Strategy recommended for the agent's surroundings, if any.
    pub suggested: Option<Strategy>,
}

impl<R: Rng> MazeGen<R> {
    /// Reshape the maze around an agent standing on `agent` and suggest a
    /// strategy for it.
    ///
    /// The agent's surroundings are classified first. A stuck agent gets
    /// [`STUCK_WALL_CHANGES`] wall changes and always a new goal; otherwise
    /// [`WALL_CHANGES`] wall changes and a new goal half of the time. The
    /// goal is placed with [`randomize_goal_far`](Self::randomize_goal_far).
    /// The suggestion is DFS or IDS when stuck, A* in the open and BFS in
    /// between.
    pub fn dynamic_update(&mut self, agent: Cell) -> DynamicReport {
        let situation = self.maze.classify_situation(agent);
        let stuck = situation == Situation::Stuck;
        let rounds = if stuck { STUCK_WALL_CHANGES } else { WALL_CHANGES };
        let walls_changed = self.mutate_walls(rounds, &[agent]);

        let goal_moved =
            (stuck || self.rng.random_bool(0.5)) && self.randomize_goal_far(agent).is_some();
        if goal_moved {
            self.ensure_path();
        }

        let suggested = match situation {
            Situation::Stuck if self.rng.random_bool(0.5) => Strategy::Dfs,
            Situation::Stuck => Strategy::Ids,
            Situation::Open => Strategy::AStar,
            Situation::Complex | Situation::Unclassified => Strategy::Bfs,
        };
        log::info!(
            "dynamic update at {agent} ({situation}): {walls_changed} walls changed, goal {}, suggesting {suggested}",
            if goal_moved { "moved" } else { "kept" },
        );
        DynamicReport {
            goal_moved,
            walls_changed,
            suggested: Some(suggested),
        }
    }

    /// Reshape the maze without a suggestion: [`STUCK_WALL_CHANGES`] wall
    /// changes and a uniformly random new goal.
    pub fn shuffle(&mut self, agent: Cell) -> DynamicReport {
        let walls_changed = self.mutate_walls(STUCK_WALL_CHANGES, &[agent]);
        let goal_moved = self.randomize_goal(agent).is_some();
        if goal_moved {
            self.ensure_path();
        }
        DynamicReport {
            goal_moved,
            walls_changed,
            suggested: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Maze;
    use maze_search::reachable;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn gen_over(m: Maze, seed: u64) -> MazeGen<StdRng> {
        MazeGen::with_maze(m, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn countdown_fires_every_period() {
        let mut d = DynamicMode::default();
        assert!(!d.is_enabled());
        assert!((0..20).all(|_| !d.tick()));

        assert!(d.toggle());
        let fired: Vec<usize> = (1..=12).filter(|_| d.tick()).collect();
        assert_eq!(fired, vec![5, 10]);
        assert_eq!(d.countdown(), 3);

        assert!(!d.toggle());
        assert!(d.toggle());
        assert_eq!(d.countdown(), DYNAMIC_PERIOD);
    }

    #[test]
    fn stuck_agent_gets_new_goal_and_deep_strategy() {
        let m = Maze::parse(
            "
            #######
            #S....#
            ##....#
            #.....#
            #....G#
            #######",
        )
        .unwrap();
        for seed in 0..8 {
            let mut g = gen_over(m.clone(), seed);
            let agent = g.maze.start();
            assert_eq!(g.maze.classify_situation(agent), Situation::Stuck);
            let r = g.dynamic_update(agent);
            assert!(r.goal_moved);
            assert_ne!(g.maze.goal(), Cell::new(4, 5));
            assert!(r.walls_changed <= STUCK_WALL_CHANGES);
            assert!(matches!(r.suggested, Some(Strategy::Dfs | Strategy::Ids)));
            assert!(g.maze.is_passable(agent));
            assert!(reachable(&g.maze, g.maze.start(), g.maze.goal()));
        }
    }

    #[test]
    fn open_agent_is_steered_to_astar() {
        let mut g = gen_over(Maze::bordered(9, 9), 4);
        let r = g.dynamic_update(Cell::new(4, 4));
        assert_eq!(r.suggested, Some(Strategy::AStar));
        assert!(r.walls_changed <= WALL_CHANGES);
        assert!(g.maze.is_passable(Cell::new(4, 4)));
    }

    #[test]
    fn complex_surroundings_suggest_bfs() {
        let mut g = gen_over(Maze::bordered(9, 9), 4);
        let r = g.dynamic_update(Cell::new(1, 1));
        assert_eq!(r.suggested, Some(Strategy::Bfs));
    }

    #[test]
    fn shuffle_moves_goal_without_suggestion() {
        let mut g = gen_over(Maze::bordered(8, 8), 2);
        let old = g.maze.goal();
        let agent = Cell::new(3, 3);
        let r = g.shuffle(agent);
        assert!(r.goal_moved);
        assert_ne!(g.maze.goal(), old);
        assert_eq!(r.suggested, None);
        assert!(g.maze.is_passable(agent));
        assert!(reachable(&g.maze, g.maze.start(), g.maze.goal()));
    }
}
