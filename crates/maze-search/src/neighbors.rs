use std::fmt;

use maze_core::{Cell, Terrain};

/// The move that generated a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Expansion order shared by every strategy.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(drow, dcol)` offset of one move.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// The cell reached by moving from `c`.
    #[inline]
    pub const fn apply(self, c: Cell) -> Cell {
        let (dr, dc) = self.delta();
        c.shift(dr, dc)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        })
    }
}

/// Orthogonal neighbours of `c` that are in bounds and passable, in
/// [`Direction::ALL`] order, paired with the move that reaches them.
pub fn neighbors<T: Terrain + ?Sized>(
    terrain: &T,
    c: Cell,
) -> impl Iterator<Item = (Direction, Cell)> + '_ {
    Direction::ALL
        .into_iter()
        .map(move |d| (d, d.apply(c)))
        .filter(move |&(_, n)| terrain.in_bounds(n) && terrain.is_passable(n))
}

/// Number of passable orthogonal neighbours of `c`.
pub fn exits<T: Terrain + ?Sized>(terrain: &T, c: Cell) -> usize {
    neighbors(terrain, c).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Maze;

    #[test]
    fn fixed_order_and_filtering() {
        let m = Maze::parse("#.#\n...\n###").unwrap();
        let got: Vec<_> = neighbors(&m, Cell::new(1, 1)).collect();
        assert_eq!(
            got,
            vec![
                (Direction::Up, Cell::new(0, 1)),
                (Direction::Right, Cell::new(1, 2)),
                (Direction::Left, Cell::new(1, 0)),
            ]
        );
        assert_eq!(exits(&m, Cell::new(1, 1)), 3);
    }

    #[test]
    fn edge_of_grid_is_not_a_neighbour() {
        let m = Maze::new(2, 2);
        let got: Vec<_> = neighbors(&m, Cell::new(0, 0)).map(|(_, c)| c).collect();
        assert_eq!(got, vec![Cell::new(0, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn apply_matches_cell_neighbors() {
        let c = Cell::new(4, 7);
        let via_dirs: Vec<_> = Direction::ALL.iter().map(|d| d.apply(c)).collect();
        assert_eq!(via_dirs, c.neighbors_4().to_vec());
    }
}
