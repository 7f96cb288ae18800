pub mod a_star;
pub mod bfs;
pub mod dfs;
mod priority_queue;
mod shortest_path;

pub use a_star::AStar;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use priority_queue::PriorityQueue;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::errors::MazeError;
use crate::geometry::Coord;
use crate::maze::Grid;

use std::{fmt, str::FromStr};


/// Ordered coordinates from start to goal, both inclusive
pub type Path = Vec<Coord>;

/// Every coordinate discovered by a search
/// The tuple contains (parent_index, depth) where:
/// - parent_index is the index of the parent coordinate in the map, usize::MAX for the start
/// - depth is the number of steps from the start
pub(crate) type NodeMap = FxIndexMap<Coord, (usize, u32)>;


/// A search strategy over a maze grid
pub trait PathFinder {

    /// Find a path between two open cells of `grid`
    fn find_between(&self, grid: &Grid, start: Coord, goal: Coord) -> Result<Path, MazeError>;

    /// Find a path from the entrance to the exit
    fn find(&self, grid: &Grid) -> Result<Path, MazeError> {
        self.find_between(grid, grid.entrance(), grid.exit())
    }
}


/// Selectable search algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    AStar,
}

impl Algorithm {

    /// Fixed ordering used by race mode
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::AStar => "astar",
        }
    }

    /// Lenient lookup, unknown names fall back to breadth-first
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("unknown algorithm {name:?}, using bfs");
            Algorithm::Bfs
        })
    }

    pub fn finder(&self) -> &'static dyn PathFinder {
        match self {
            Algorithm::Bfs => &Bfs {},
            Algorithm::Dfs => &Dfs {},
            Algorithm::AStar => &AStar {},
        }
    }
}

impl FromStr for Algorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(MazeError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl From<&str> for Algorithm {
    fn from(name: &str) -> Self {
        Algorithm::from_name(name)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// Solve `grid` from entrance to exit with a single algorithm
pub fn solve(grid: &Grid, algorithm: Algorithm) -> Result<Path, MazeError> {
    let result = algorithm.finder().find(grid);
    match &result {
        Ok(path) => log::debug!("{algorithm} found a path of {} cells", path.len()),
        Err(e) => log::debug!("{algorithm}: {e}"),
    }
    result
}
