pub mod generator;

pub use generator::MazeGenerator;

use crate::collections::FxHashSet;
use crate::errors::MazeError;
use crate::geometry::{Coord, Direction};

use std::{collections::VecDeque, fmt, str::FromStr};


/// Kind of a single maze cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Wall,
    Path,
    Entrance,
    Exit,
}

impl Cell {

    /// Anything but a wall can be walked on
    pub fn is_open(&self) -> bool {
        !matches!(self, Cell::Wall)
    }

    fn symbol(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Path => '.',
            Cell::Entrance => 'S',
            Cell::Exit => 'E',
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = MazeError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '#' => Ok(Cell::Wall),
            '.' | ' ' => Ok(Cell::Path),
            'S' => Ok(Cell::Entrance),
            'E' => Ok(Cell::Exit),
            other => Err(MazeError::InvalidCell(other)),
        }
    }
}


/// Square maze grid
/// - side is odd and at least 3
/// - entrance is fixed at (0, 1), exit at (size - 1, size - 2)
/// - never mutated once built, solvers only read it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>, // row-major
}

impl Grid {

    /// Build a grid from externally supplied rows
    /// Entrance and exit cells are rewritten at their fixed positions
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        let size = rows.len();
        if size < 3 || size % 2 == 0 {
            return Err(MazeError::InvalidSize(size));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != size {
                return Err(MazeError::NotSquare { rows: size, row, len: line.len() });
            }
            // only the fixed points may hold an entrance or an exit
            cells.extend(line.into_iter().map(|c| match c {
                Cell::Entrance | Cell::Exit => Cell::Path,
                other => other,
            }));
        }

        let mut grid = Grid { size, cells };
        grid.place_endpoints();
        Ok(grid)
    }

    /// All-wall grid, used as the carving canvas
    pub(crate) fn walls(size: usize) -> Self {
        Grid { size, cells: vec![Cell::Wall; size * size] }
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        let idx = self.index(coord);
        self.cells[idx] = cell;
    }

    pub(crate) fn place_endpoints(&mut self) {
        let (entrance, exit) = (self.entrance(), self.exit());
        self.set(entrance, Cell::Entrance);
        self.set(exit, Cell::Exit);
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn entrance(&self) -> Coord {
        Coord::new(0, 1)
    }

    pub fn exit(&self) -> Coord {
        Coord::new(self.size - 1, self.size - 2)
    }

    /// Cell at `coord`, None when out of bounds
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if coord.row < self.size && coord.col < self.size {
            Some(self.cells[self.index(coord)])
        } else {
            None
        }
    }

    pub fn is_open(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(|c| c.is_open())
    }

    /// Open 4-connected neighbors of `coord`, in search order
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::SEARCH_ORDER
            .into_iter()
            .filter_map(move |d| coord.step(d, 1, self.size))
            .filter(move |c| self.is_open(*c))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Number of non-wall cells
    pub fn open_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Number of edges between open cells (4-connectivity)
    pub fn open_edges(&self) -> usize {
        let mut edges = 0;
        for row in 0..self.size {
            for col in 0..self.size {
                let c = Coord::new(row, col);
                if !self.is_open(c) {
                    continue;
                }
                // count each edge once, from its upper / left end
                edges += [Direction::Down, Direction::Right]
                    .into_iter()
                    .filter_map(|d| c.step(d, 1, self.size))
                    .filter(|n| self.is_open(*n))
                    .count();
            }
        }
        edges
    }

    /// Open cells reachable from the entrance
    pub fn reachable_from_entrance(&self) -> usize {
        let start = self.entrance();
        if !self.is_open(start) {
            return 0;
        }
        let mut seen: FxHashSet<Coord> = FxHashSet::default();
        let mut queue = VecDeque::from([start]);
        seen.insert(start);
        while let Some(c) = queue.pop_front() {
            for n in self.neighbors(c) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen.len()
    }

    /// Open cells form a spanning tree: connected and acyclic
    pub fn is_perfect(&self) -> bool {
        let open = self.open_cells();
        open > 0 && self.reachable_from_entrance() == open && self.open_edges() == open - 1
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(Cell::symbol).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = MazeError;

    /// Parse the text form: `#` wall, `.` or space path, `S` entrance, `E` exit
    /// Spaces are cells, so only line endings are stripped and only empty lines skipped
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().map(Cell::try_from).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(rows)
    }
}
