//! Random maze generation and between-step mutation.
//!
//! Everything here edits the maze only while no search is running: the
//! driver calls it between two agent steps and then tells the agent with
//! `notify_grid_changed`.

mod dynamic;
mod mapgen;

pub use dynamic::{
    DYNAMIC_PERIOD, DynamicMode, DynamicReport, STUCK_WALL_CHANGES, WALL_CHANGES,
};
pub use mapgen::{FAR_GOAL_BIAS, MazeGen, REPAIR_BATCH};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use maze_search::Strategy;

    #[test]
    fn report_round_trip() {
        let r = DynamicReport {
            goal_moved: true,
            walls_changed: 5,
            suggested: Some(Strategy::Ids),
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: DynamicReport = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
