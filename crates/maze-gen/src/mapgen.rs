//! Maze generation and mutation.
//!
//! [`MazeGen`] owns a [`Maze`] and a random number generator. Generation
//! scatters interior walls at a given density and then repairs connectivity
//! so the start can always reach the goal. The mutation operations are meant
//! to run between agent steps.

use maze_core::{Cell, Maze, Terrain, Tile};
use maze_search::{manhattan, reachable};
use rand::{Rng, RngExt};

/// Interior walls removed per round of connectivity repair.
pub const REPAIR_BATCH: usize = 20;

/// Probability that [`MazeGen::randomize_goal_far`] picks among distant cells
/// when any exist.
pub const FAR_GOAL_BIAS: f64 = 0.7;

/// Maze generator operating on a [`Maze`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub maze: Maze,
}

impl<R: Rng> MazeGen<R> {
    /// A generator over an empty bordered maze of the given size.
    pub fn new(rows: i32, cols: i32, rng: R) -> Self {
        Self::with_maze(Maze::bordered(rows, cols), rng)
    }

    /// A generator over an existing maze.
    pub fn with_maze(maze: Maze, rng: R) -> Self {
        Self { rng, maze }
    }

    fn pick(&mut self, cells: &[Cell]) -> Option<Cell> {
        if cells.is_empty() {
            return None;
        }
        Some(cells[self.rng.random_range(0..cells.len())])
    }

    /// Rebuild the maze: walls on the border, each interior cell a wall with
    /// probability `density`, start and goal always floor. Connectivity is
    /// repaired afterwards.
    ///
    /// Returns the number of interior walls placed before repair.
    pub fn generate(&mut self, density: f64) -> usize {
        let b = self.maze.bounds();
        let (start, goal) = (self.maze.start(), self.maze.goal());
        let mut walls = 0;
        for c in b.iter() {
            let tile = if c == start || c == goal {
                Tile::Floor
            } else if b.is_border(c) {
                Tile::Wall
            } else if self.rng.random::<f64>() < density {
                walls += 1;
                Tile::Wall
            } else {
                Tile::Floor
            };
            self.maze.set_tile(c, tile);
        }
        log::debug!(
            "generated {}x{} maze with {walls} interior walls (density {density})",
            b.rows,
            b.cols
        );
        self.ensure_path();
        walls
    }

    /// Remove random interior walls, [`REPAIR_BATCH`] at a time, until the
    /// start reaches the goal.
    ///
    /// Returns `false` if the interior runs out of walls first.
    pub fn ensure_path(&mut self) -> bool {
        let (start, goal) = (self.maze.start(), self.maze.goal());
        loop {
            if reachable(&self.maze, start, goal) {
                return true;
            }
            let removed = self.remove_random_walls(REPAIR_BATCH);
            log::debug!("{start} cannot reach {goal}; removed {removed} walls");
            if removed == 0 {
                log::warn!("no interior walls left to open between {start} and {goal}");
                return false;
            }
        }
    }

    /// Turn up to `n` distinct random interior walls into floor.
    ///
    /// Returns how many were removed.
    pub fn remove_random_walls(&mut self, n: usize) -> usize {
        let mut walls = self.maze.interior_walls();
        let n = n.min(walls.len());
        for i in 0..n {
            let j = self.rng.random_range(i..walls.len());
            walls.swap(i, j);
            self.maze.set_tile(walls[i], Tile::Floor);
        }
        n
    }

    /// Run `n` rounds that each either add a wall on a free interior cell or
    /// remove an interior wall, with equal odds. Start, goal and `protect`
    /// are never walled. Connectivity is repaired afterwards.
    ///
    /// Returns the number of cells that changed.
    pub fn mutate_walls(&mut self, n: usize, protect: &[Cell]) -> usize {
        let (start, goal) = (self.maze.start(), self.maze.goal());
        let b = self.maze.bounds();
        let mut changed = 0;
        for _ in 0..n {
            let add = self.rng.random_bool(0.5);
            let (candidates, tile) = if add {
                let free = self.maze.grid().cells_where(|c, t| {
                    t == Tile::Floor
                        && b.is_interior(c)
                        && c != start
                        && c != goal
                        && !protect.contains(&c)
                });
                (free, Tile::Wall)
            } else {
                (self.maze.interior_walls(), Tile::Floor)
            };
            if let Some(c) = self.pick(&candidates) {
                self.maze.set_tile(c, tile);
                changed += 1;
            }
        }
        self.ensure_path();
        changed
    }

    /// Floor cells that may become the goal: not the start, the current goal,
    /// or `agent`.
    fn goal_candidates(&self, agent: Cell) -> Vec<Cell> {
        let (start, goal) = (self.maze.start(), self.maze.goal());
        self.maze
            .floor_cells()
            .into_iter()
            .filter(|&c| c != start && c != goal && c != agent)
            .collect()
    }

    /// Move the goal to a random eligible floor cell.
    ///
    /// Returns the new goal, or `None` if no cell qualifies.
    pub fn randomize_goal(&mut self, agent: Cell) -> Option<Cell> {
        let candidates = self.goal_candidates(agent);
        let goal = self.pick(&candidates)?;
        self.maze.set_goal(goal);
        log::info!("goal moved to {goal}");
        Some(goal)
    }

    /// Like [`randomize_goal`](Self::randomize_goal), but with probability
    /// [`FAR_GOAL_BIAS`] restrict the choice to cells whose Manhattan distance
    /// from `agent` exceeds half of `rows + cols`.
    pub fn randomize_goal_far(&mut self, agent: Cell) -> Option<Cell> {
        let candidates = self.goal_candidates(agent);
        let span = self.maze.rows() + self.maze.cols();
        let far: Vec<Cell> = candidates
            .iter()
            .copied()
            .filter(|&c| 2 * manhattan(c, agent) > span)
            .collect();
        let pool = if self.rng.random_bool(FAR_GOAL_BIAS) && !far.is_empty() {
            &far
        } else {
            &candidates
        };
        let goal = self.pick(pool)?;
        self.maze.set_goal(goal);
        log::info!("goal moved to {goal} ({} from the agent)", manhattan(goal, agent));
        Some(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(rows: i32, cols: i32, seed: u64) -> MazeGen<StdRng> {
        MazeGen::new(rows, cols, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn generate_keeps_border_and_path() {
        for seed in 0..10 {
            let mut g = seeded(15, 20, seed);
            g.generate(0.4);
            let m = &g.maze;
            let b = m.bounds();
            for c in b.iter().filter(|&c| b.is_border(c)) {
                assert_eq!(m.tile(c), Some(Tile::Wall), "{c} on the border");
            }
            assert!(m.is_passable(m.start()));
            assert!(m.is_passable(m.goal()));
            assert!(reachable(m, m.start(), m.goal()), "seed {seed}");
        }
    }

    #[test]
    fn generate_density_extremes() {
        let mut g = seeded(8, 8, 1);
        assert_eq!(g.generate(0.0), 0);
        assert!(g.maze.interior_walls().is_empty());

        // Every interior cell but the endpoints starts as a wall.
        assert_eq!(g.generate(1.0), 34);
        assert!(reachable(&g.maze, g.maze.start(), g.maze.goal()));
        assert!(g.maze.interior_walls().len() < 34);
    }

    #[test]
    fn generation_is_reproducible() {
        let mut a = seeded(12, 12, 99);
        let mut b = seeded(12, 12, 99);
        a.generate(0.35);
        b.generate(0.35);
        assert_eq!(a.maze, b.maze);
    }

    #[test]
    fn remove_walls_is_bounded() {
        let mut g = seeded(6, 6, 3);
        for c in g.maze.bounds().iter() {
            if g.maze.bounds().is_interior(c) && c != g.maze.start() {
                g.maze.set_tile(c, Tile::Wall);
            }
        }
        let before = g.maze.interior_walls().len();
        assert_eq!(before, 15);
        assert_eq!(g.remove_random_walls(4), 4);
        assert_eq!(g.maze.interior_walls().len(), 11);
        assert_eq!(g.remove_random_walls(100), 11);
        assert!(g.maze.interior_walls().is_empty());
        assert_eq!(g.remove_random_walls(1), 0);
    }

    #[test]
    fn mutate_respects_protected_cells() {
        let mut g = seeded(10, 10, 7);
        g.generate(0.3);
        let agent = Cell::new(1, 2);
        g.maze.set_tile(agent, Tile::Floor);
        for _ in 0..20 {
            g.mutate_walls(8, &[agent]);
            let m = &g.maze;
            assert!(m.is_passable(agent));
            assert!(m.is_passable(m.start()));
            assert!(m.is_passable(m.goal()));
            assert!(reachable(m, m.start(), m.goal()));
        }
    }

    #[test]
    fn randomize_goal_picks_fresh_floor() {
        let mut g = seeded(9, 9, 11);
        g.generate(0.3);
        let agent = g.maze.start().shift(0, 1);
        for _ in 0..20 {
            let old = g.maze.goal();
            let new = g.randomize_goal(agent).unwrap();
            assert_eq!(g.maze.goal(), new);
            assert_ne!(new, old);
            assert_ne!(new, agent);
            assert_ne!(new, g.maze.start());
            assert!(g.maze.is_passable(new));
        }
    }

    #[test]
    fn randomize_goal_without_candidates() {
        let m = Maze::parse("####\n#SG#\n####").unwrap();
        let mut g = MazeGen::with_maze(m, StdRng::seed_from_u64(0));
        assert_eq!(g.randomize_goal(Cell::new(1, 1)), None);
        assert_eq!(g.randomize_goal_far(Cell::new(1, 1)), None);
        assert_eq!(g.maze.goal(), Cell::new(1, 2));
    }

    #[test]
    fn far_goal_is_biased_away_from_agent() {
        let mut g = seeded(12, 12, 5);
        let agent = Cell::new(1, 1);
        let far = (0..100)
            .filter_map(|_| g.randomize_goal_far(agent))
            .filter(|&c| 2 * manhattan(c, agent) > 24)
            .count();
        // About a fifth of the room is far; the bias lifts that to most picks.
        assert!(far > 50, "{far} far picks");
    }
}
