use crate::errors::MazeError;
use super::{NodeMap, Path};


/// Walk parent links from the goal back to the start
/// Returns the ordered path from start to goal, both inclusive
/// node_map: NodeMap - every discovered coordinate with its parent index and depth
/// goal_index: usize - index of the goal coordinate in node_map
pub(crate) fn shortest_path(node_map: &NodeMap, goal_index: usize) -> Result<Path, MazeError> {

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != usize::MAX {
        if let Some((&coord, &(parent_index, _))) = node_map.get_index(current_index) {
            path.push(coord);
            current_index = parent_index;
        } else {
            return Err(MazeError::NoPathFound);
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return Err(MazeError::NoPathFound);
    }

    Ok(path)
}
