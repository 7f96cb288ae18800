use crate::errors::MazeError;
use crate::geometry::Coord;
use crate::maze::Grid;
use super::{NodeMap, Path, PathFinder, PriorityQueue, shortest_path};

use indexmap::map::Entry::{Occupied, Vacant};


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Every move costs 1 and the heuristic is the Manhattan distance to the goal.
/// On a 4-connected grid that heuristic is admissible and consistent,
/// so the returned path is as short as the one found by BFS
pub struct AStar {}

impl PathFinder for AStar {

    fn find_between(&self, grid: &Grid, start: Coord, goal: Coord) -> Result<Path, MazeError> {
        let (node_map, goal_index) = self.build_graph(grid, start, goal)?;
        log::trace!("astar discovered {} cells", node_map.len());

        match goal_index {
            Some(goal_index) => shortest_path(&node_map, goal_index),
            None => Err(MazeError::NoPathFound),
        }
    }
}

impl AStar {

    /// Traverses the grid using A*
    /// Returns every discovered cell with its best known cost, along with the index of the goal
    fn build_graph(&self, grid: &Grid, start: Coord, goal: Coord) -> Result<(NodeMap, Option<usize>), MazeError> {

        // came_from and g_score in one map: coord -> (parent_index, g)
        // for the start node, parent_index is set to usize::MAX to indicate it has no parent
        let mut node_map = NodeMap::default();
        if !grid.is_open(start) || !grid.is_open(goal) {
            return Ok((node_map, None));
        }

        // Open set ordered by f = g + h
        // Stale entries for an improved coordinate are left in the queue and skipped on dequeue
        let mut open_set: PriorityQueue<Coord, u32> = PriorityQueue::new();

        node_map.insert(start, (usize::MAX, 0));
        open_set.enqueue(start, start.manhattan(&goal));

        while let Some((current, f_score)) = open_set.pop() {

            let (index, _, &(_, g_score)) = node_map.get_full(&current).ok_or(MazeError::NoPathFound)?;

            // A better route to this coordinate was queued after this entry
            if f_score > g_score + current.manhattan(&goal) {
                continue;
            }

            if current == goal {
                return Ok((node_map, Some(index)));
            }

            for neighbor in grid.neighbors(current) {
                let tentative_g = g_score + 1;

                match node_map.entry(neighbor) {
                    Vacant(e) => {
                        e.insert((index, tentative_g));
                    }
                    Occupied(mut e) => {
                        if tentative_g < e.get().1 {
                            e.insert((index, tentative_g));
                        } else {
                            continue;
                        }
                    }
                }

                // Re-queue on every improvement, even if an older entry is still waiting:
                // the older entry carries a worse f and would delay this coordinate
                open_set.enqueue(neighbor, tentative_g + neighbor.manhattan(&goal));
            }
        }

        Ok((node_map, None))
    }
}
