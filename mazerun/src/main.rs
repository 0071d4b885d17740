//! mazerun: watch an adaptive search agent work its way through a maze.

mod cli;
mod render;
mod run;

use std::fs;

use clap::Parser;
use maze_agent::Agent;
use maze_core::Maze;
use maze_gen::MazeGen;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use cli::Cli;
use run::Runner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    fast_log::init(
        fast_log::config::Config::new()
            .console()
            .level(cli.log_level()),
    )?;

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let rng = StdRng::seed_from_u64(seed);
    let mazegen = match &cli.maze {
        Some(path) => MazeGen::with_maze(Maze::parse(&fs::read_to_string(path)?)?, rng),
        None => {
            let mut g = MazeGen::new(cli.rows, cli.cols, rng);
            g.generate(cli.density);
            g
        }
    };
    log::info!(
        "{}x{} maze, seed {seed}",
        mazegen.maze.rows(),
        mazegen.maze.cols()
    );

    let mut agent = Agent::with_config(mazegen.maze.start(), cli.agent_config());
    if let Some(s) = cli.strategy {
        agent.set_strategy_kind(s);
    }
    let mut runner = Runner::new(mazegen, agent, cli.dynamic);

    println!("{}", runner.maze());
    let trace = cli.trace;
    let out = runner.run(cli.max_steps, |r| {
        if trace {
            println!("{}", render::render(r.maze(), &r.agent));
        }
    });

    println!("{}", render::render(runner.maze(), &runner.agent));
    print!("{}", render::summary(&out, &runner.agent, runner.maze()));
    if let Some(last) = runner.agent.last_search().filter(|_| cli.tree) {
        print!("{}", render::tree(last));
    }
    println!("seed:       {seed}");
    log::logger().flush();
    Ok(())
}
