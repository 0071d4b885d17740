//! The tick loop.

use maze_agent::{Agent, AgentState, AgentStats};
use maze_core::Maze;
use maze_gen::{DynamicMode, MazeGen};
use rand::Rng;

use crate::cli::DynamicArg;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub state: AgentState,
    pub ticks: usize,
    /// Dynamic updates applied to the maze.
    pub updates: usize,
    pub stats: AgentStats,
}

/// An agent walking a maze that may change between ticks.
pub struct Runner<R: Rng> {
    pub mazegen: MazeGen<R>,
    pub agent: Agent,
    kind: DynamicArg,
    dynamic: DynamicMode,
    ticks: usize,
    updates: usize,
}

impl<R: Rng> Runner<R> {
    /// Wrap a started agent.
    pub fn new(mazegen: MazeGen<R>, mut agent: Agent, kind: DynamicArg) -> Self {
        agent.start();
        Self {
            mazegen,
            agent,
            kind,
            dynamic: DynamicMode::new(kind != DynamicArg::Off),
            ticks: 0,
            updates: 0,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.mazegen.maze
    }

    /// Step the agent once, then apply a dynamic update if one is due.
    ///
    /// Returns `false` once there is nothing left to do: the goal was
    /// reached, or the agent gave up and the maze will not change.
    pub fn tick(&mut self) -> bool {
        if self.agent.state() == AgentState::GoalReached {
            return false;
        }
        let acted = self.agent.step(&self.mazegen.maze);
        self.ticks += 1;
        if self.agent.state() == AgentState::GoalReached {
            return false;
        }
        if self.dynamic.tick() {
            self.apply_update();
            return true;
        }
        acted || self.dynamic.is_enabled()
    }

    fn apply_update(&mut self) {
        let pos = self.agent.position();
        let report = match self.kind {
            DynamicArg::Off => return,
            DynamicArg::Walls => self.mazegen.shuffle(pos),
            DynamicArg::Algorithms => self.mazegen.dynamic_update(pos),
        };
        self.updates += 1;
        match report.suggested {
            Some(s) if self.agent.strategy() != Some(s) => self.agent.set_strategy_kind(s),
            _ => {}
        }
        self.agent.notify_grid_changed();
    }

    /// Tick until done or `max_steps` ticks have passed.
    pub fn run(&mut self, max_steps: usize, mut on_tick: impl FnMut(&Self)) -> Outcome {
        while self.ticks < max_steps {
            let more = self.tick();
            on_tick(&*self);
            if !more {
                break;
            }
        }
        Outcome {
            state: self.agent.state(),
            ticks: self.ticks,
            updates: self.updates,
            stats: self.agent.stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Terrain;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn runner(seed: u64, kind: DynamicArg) -> Runner<StdRng> {
        let mut g = MazeGen::new(15, 21, StdRng::seed_from_u64(seed));
        g.generate(0.3);
        let agent = Agent::new(g.maze.start());
        Runner::new(g, agent, kind)
    }

    #[test]
    fn static_maze_is_solved() {
        for seed in 0..5 {
            let mut r = runner(seed, DynamicArg::Off);
            let out = r.run(1000, |_| {});
            assert_eq!(out.state, AgentState::GoalReached, "seed {seed}");
            assert_eq!(r.agent.position(), r.maze().goal());
            assert_eq!(out.updates, 0);
            assert_eq!(out.stats.moves as usize + 1, r.agent.history().len());
        }
    }

    #[test]
    fn same_seed_same_run() {
        let mut a = runner(42, DynamicArg::Algorithms);
        let mut b = runner(42, DynamicArg::Algorithms);
        let oa = a.run(300, |_| {});
        let ob = b.run(300, |_| {});
        assert_eq!(oa, ob);
        assert_eq!(a.agent.history(), b.agent.history());
        assert_eq!(a.maze(), b.maze());
    }

    #[test]
    fn dynamic_runs_stay_within_budget() {
        for kind in [DynamicArg::Walls, DynamicArg::Algorithms] {
            let mut r = runner(9, kind);
            let mut seen = 0;
            let out = r.run(200, |_| seen += 1);
            assert!(out.ticks <= 200);
            assert_eq!(seen, out.ticks);
            if out.ticks > 5 {
                assert!(out.updates >= 1, "{kind:?}");
            }
        }
    }

    #[test]
    fn gives_up_on_sealed_goal() {
        let m = Maze::parse(
            "
            #######
            #S....#
            #..#..#
            #.#G#.#
            #..#..#
            #######",
        )
        .unwrap();
        let agent = Agent::new(m.start());
        let g = MazeGen::with_maze(m, StdRng::seed_from_u64(0));
        let mut r = Runner::new(g, agent, DynamicArg::Off);
        let out = r.run(50, |_| {});
        assert_eq!(out.state, AgentState::NoSolution);
        assert_eq!(out.ticks, 1);
    }
}
