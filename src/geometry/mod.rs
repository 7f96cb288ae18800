use num_traits::{Num, Signed};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}


/// Grid coordinate, row-major
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move `distance` cells towards `direction`
    /// Returns None when the result leaves a `size` x `size` grid
    pub fn step(&self, direction: Direction, distance: usize, size: usize) -> Option<Coord> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr * distance as isize)?;
        let col = self.col.checked_add_signed(dc * distance as isize)?;
        if row < size && col < size {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Manhattan distance to another coordinate
    pub fn manhattan(&self, other: &Coord) -> u32 {
        manhattan_distance(
            self.row as i64, self.col as i64,
            other.row as i64, other.col as i64,
        ) as u32
    }

    /// True if the two coordinates share an edge (4-connectivity)
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}


/// The four orthogonal directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Right,
    Up,
    Left,
}

impl Direction {

    /// Order used when searching; right, down, left, up
    pub const SEARCH_ORDER: [Direction; 4] = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

    /// Order used by the unshuffled carver
    pub const CARVE_ORDER: [Direction; 4] = [Direction::Down, Direction::Right, Direction::Up, Direction::Left];

    /// (row, col) delta of a single step
    pub const fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
        }
    }
}
