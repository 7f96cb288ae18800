use crate::errors::MazeError;
use crate::geometry::Coord;
use crate::maze::Grid;
use super::{NodeMap, Path, PathFinder, shortest_path};

use std::collections::VecDeque;
use indexmap::map::Entry::Vacant;


/// Breadth-first search
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// Level-order exploration, returns a shortest path in edge count
pub struct Bfs {}

impl PathFinder for Bfs {

    fn find_between(&self, grid: &Grid, start: Coord, goal: Coord) -> Result<Path, MazeError> {
        let (node_map, goal_index) = build_bfs_tree(grid, start, goal)?;
        log::trace!("bfs discovered {} cells", node_map.len());

        match goal_index {
            Some(goal_index) => shortest_path(&node_map, goal_index),
            None => Err(MazeError::NoPathFound),
        }
    }
}


/// Explore the grid level by level until the goal is dequeued
/// Cells are marked visited when enqueued, so none is expanded twice
fn build_bfs_tree(grid: &Grid, start: Coord, goal: Coord) -> Result<(NodeMap, Option<usize>), MazeError> {

    let mut node_map = NodeMap::default();
    if !grid.is_open(start) || !grid.is_open(goal) {
        return Ok((node_map, None));
    }

    // FIFO of indices into node_map, each one stands for the path its parent links spell out
    let start_index = node_map.insert_full(start, (usize::MAX, 0)).0;
    let mut queue = VecDeque::from([start_index]);

    while let Some(index) = queue.pop_front() {
        let (&coord, &(_, depth)) = node_map.get_index(index).ok_or(MazeError::NoPathFound)?;

        if coord == goal {
            return Ok((node_map, Some(index)));
        }

        for neighbor in grid.neighbors(coord) {
            if let Vacant(e) = node_map.entry(neighbor) {
                queue.push_back(e.index());
                e.insert((index, depth + 1));
            }
        }
    }

    Ok((node_map, None))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::MazeGenerator;
    use crate::path_finders::tests::assert_valid_path;

    #[test]
    fn test_bfs_unshuffled_five_by_five() {
        let grid = MazeGenerator::new(5).generate_unshuffled();
        let path = Bfs {}.find(&grid).unwrap();
        assert_eq!(path, vec![
            Coord::new(0, 1),
            Coord::new(1, 1),
            Coord::new(1, 2),
            Coord::new(1, 3),
            Coord::new(2, 3),
            Coord::new(3, 3),
            Coord::new(4, 3),
        ]);
    }

    #[test]
    fn test_bfs_shortest_in_open_room() {
        let grid: Grid = "\
#S#####
#.....#
#.....#
#.....#
#.....#
#.....#
#####E#".parse().unwrap();
        let path = Bfs {}.find(&grid).unwrap();
        assert_valid_path(&grid, &path);
        // manhattan distance (6 + 4) plus the start cell
        assert_eq!(path.len(), 11);
    }

    #[test]
    fn test_bfs_disconnected() {
        let grid: Grid = "\
#S###
#...#
#####
#...#
###E#".parse().unwrap();
        assert_eq!(Bfs {}.find(&grid), Err(MazeError::NoPathFound));
    }

    #[test]
    fn test_bfs_depths_are_levels() {
        let grid = MazeGenerator::new(9).generate_seeded(11);
        let (node_map, goal_index) = build_bfs_tree(&grid, grid.entrance(), grid.exit()).unwrap();
        let goal_index = goal_index.unwrap();
        let (_, &(_, depth)) = node_map.get_index(goal_index).unwrap();
        let path = shortest_path(&node_map, goal_index).unwrap();
        assert_eq!(path.len(), depth as usize + 1);
    }

    #[test]
    fn test_bfs_start_is_goal() {
        let grid = MazeGenerator::new(5).generate();
        let start = grid.entrance();
        assert_eq!(Bfs {}.find_between(&grid, start, start).unwrap(), vec![start]);
    }

    #[test]
    fn test_bfs_goal_on_wall() {
        let grid = MazeGenerator::new(5).generate();
        assert_eq!(Bfs {}.find_between(&grid, grid.entrance(), Coord::new(0, 0)), Err(MazeError::NoPathFound));
    }
}
