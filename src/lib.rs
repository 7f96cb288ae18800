//! Perfect maze generation and path finding.
//!
//! - [`generate_maze`] carves a perfect maze (a spanning tree over the odd lattice)
//! - [`solve`] runs one of breadth-first, depth-first or A* search from entrance to exit
//! - [`race`] runs all three concurrently on the same maze and compares them
//!
//! "No path" is an ordinary [`MazeError::NoPathFound`] value, never a panic.

mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod maze;
pub mod path_finders;
pub mod race;

pub use config::MazeConfig;
pub use errors::MazeError;
pub use geometry::{Coord, Direction};
pub use maze::{Cell, Grid, MazeGenerator};
pub use path_finders::{AStar, Algorithm, Bfs, Dfs, Path, PathFinder, PriorityQueue, solve};
pub use race::{RaceCoordinator, RaceResult};


/// Carve a new perfect maze
/// `size` is coerced to an odd value of at least 3
pub fn generate_maze(size: usize) -> Grid {
    MazeGenerator::new(size).generate()
}

/// Race BFS, DFS and A* on one maze, results in that order
pub fn race(grid: &Grid) -> [RaceResult; 3] {
    RaceCoordinator {}.run(grid)
}
