//! Text rendering of a run.

use std::collections::HashSet;

use maze_agent::Agent;
use maze_core::{Cell, Maze};
use maze_search::{SearchResult, flood};

use crate::run::Outcome;

pub const AGENT: char = '@';
pub const PLAN: char = '*';
pub const TRAIL: char = '+';
pub const EXPLORED: char = ',';

/// Draw the maze with the agent, its remaining plan, its trail and the
/// cells its searches expanded. Start and goal stay visible under
/// everything but the agent.
pub fn render(maze: &Maze, agent: &Agent) -> String {
    let pos = agent.position();
    let plan: HashSet<Cell> = agent
        .current_path()
        .map(|p| p.iter().copied().skip_while(|&c| c != pos).skip(1).collect())
        .unwrap_or_default();
    let trail: HashSet<Cell> = agent.history().iter().copied().collect();
    let start = maze.start();
    let goal = maze_core::Terrain::goal(maze);
    maze.render_with(|c| {
        if c == pos {
            Some(AGENT)
        } else if c == start || c == goal {
            None
        } else if plan.contains(&c) {
            Some(PLAN)
        } else if trail.contains(&c) {
            Some(TRAIL)
        } else if agent.visited().contains(&c) {
            Some(EXPLORED)
        } else {
            None
        }
    })
}

/// Draw the tree of one search.
///
/// A successful search shows the branch from the root to the goal, one node
/// per line indented by depth. A failed one lists every parent/child edge
/// in creation order.
pub fn tree(result: &SearchResult) -> String {
    let header = format!(
        "{} search tree: {} nodes, depth {}\n",
        result.strategy,
        result.tree.len(),
        result.tree.max_depth()
    );
    let body: String = match result.terminal {
        Some(id) => {
            let mut branch: Vec<_> = result.tree.lineage(id).collect();
            branch.reverse();
            branch
                .iter()
                .map(|n| match n.action {
                    Some(dir) => format!("{}{} {dir}\n", "  ".repeat(n.cost as usize), n.cell),
                    None => format!("{}\n", n.cell),
                })
                .collect()
        }
        None => result
            .tree
            .edges()
            .map(|(from, to)| format!("{from} -> {to}\n"))
            .collect(),
    };
    header + &body
}

/// Summary of a finished run.
pub fn summary(out: &Outcome, agent: &Agent, maze: &Maze) -> String {
    let strategy = agent
        .strategy()
        .map_or_else(|| "none".to_string(), |s| s.to_string());
    let mode = if agent.is_manual() { "manual" } else { "automatic" };
    let last = agent.last_search().map_or_else(String::new, |r| {
        format!(
            "last search: {} expanded {} cells, tree of {} nodes, depth {}\n",
            r.strategy,
            r.explored.len(),
            r.tree.len(),
            r.tree.max_depth()
        )
    });
    format!(
        "state:      {}\n\
         strategy:   {strategy} ({mode})\n\
         ticks:      {}\n\
         moves:      {}\n\
         searches:   {} ({} replans, {} fallbacks)\n\
         switches:   {}\n\
         stale:      {}\n\
         updates:    {}\n\
         visited:    {}\n\
         reachable:  {} cells from the agent\n\
         {last}",
        out.state,
        out.ticks,
        out.stats.moves,
        out.stats.searches,
        out.stats.replans,
        out.stats.fallbacks,
        out.stats.strategy_switches,
        out.stats.stale_paths,
        out.updates,
        agent.visited().len(),
        flood(maze, agent.position()).len(),
    )
}
