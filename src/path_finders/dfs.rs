use crate::errors::MazeError;
use crate::geometry::Coord;
use crate::maze::Grid;
use super::{NodeMap, Path, PathFinder, shortest_path};

use indexmap::map::Entry::Vacant;


/// Depth-first search
/// https://en.wikipedia.org/wiki/Depth-first_search
/// Returns the first path that reaches the goal, not necessarily the shortest.
/// The result only depends on the fixed neighbor order of the grid
pub struct Dfs {}

impl PathFinder for Dfs {

    fn find_between(&self, grid: &Grid, start: Coord, goal: Coord) -> Result<Path, MazeError> {
        let (node_map, goal_index) = build_dfs_tree(grid, start, goal)?;
        log::trace!("dfs discovered {} cells", node_map.len());

        match goal_index {
            Some(goal_index) => shortest_path(&node_map, goal_index),
            None => Err(MazeError::NoPathFound),
        }
    }
}


/// Explore the most recently discovered cell first
/// Cells are marked visited at push time, so no cell sits on the stack twice
fn build_dfs_tree(grid: &Grid, start: Coord, goal: Coord) -> Result<(NodeMap, Option<usize>), MazeError> {

    let mut node_map = NodeMap::default();
    if !grid.is_open(start) || !grid.is_open(goal) {
        return Ok((node_map, None));
    }

    // LIFO of indices into node_map
    let start_index = node_map.insert_full(start, (usize::MAX, 0)).0;
    let mut stack = vec![start_index];

    while let Some(index) = stack.pop() {
        let (&coord, &(_, depth)) = node_map.get_index(index).ok_or(MazeError::NoPathFound)?;

        if coord == goal {
            return Ok((node_map, Some(index)));
        }

        for neighbor in grid.neighbors(coord) {
            if let Vacant(e) = node_map.entry(neighbor) {
                stack.push(e.index());
                e.insert((index, depth + 1));
            }
        }
    }

    Ok((node_map, None))
}
