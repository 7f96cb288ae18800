use mazerace::{
    Algorithm, Cell, Coord, Grid, MazeConfig, MazeError, MazeGenerator, Path,
    generate_maze, race, solve,
};
use pretty_assertions::assert_eq;


fn assert_valid_path(grid: &Grid, path: &Path) {
    assert_eq!(path.first(), Some(&Coord::new(0, 1)));
    assert_eq!(path.last(), Some(&Coord::new(grid.size() - 1, grid.size() - 2)));
    assert!(path.iter().all(|c| grid.is_open(*c)));
    assert!(path.windows(2).all(|w| w[0].is_adjacent(&w[1])));
}

/// Interior rows open, with `walls` dropped in to make loops
fn room(size: usize, walls: &[(usize, usize)]) -> Grid {
    let mut rows = vec![vec![Cell::Wall; size]; size];
    for row in rows.iter_mut().take(size - 1).skip(1) {
        for cell in row.iter_mut().take(size - 1).skip(1) {
            *cell = Cell::Path;
        }
    }
    for &(r, c) in walls {
        rows[r][c] = Cell::Wall;
    }
    Grid::from_rows(rows).unwrap()
}


#[test]
fn generated_mazes_are_spanning_trees() {
    for seed in 0..20 {
        let grid = MazeConfig::new(3 + 2 * (seed as usize % 12)).with_seed(seed).generate();
        let open = grid.open_cells();
        assert_eq!(grid.reachable_from_entrance(), open);
        assert_eq!(grid.open_edges(), open - 1);
    }
}

#[test]
fn endpoints_are_fixed() {
    for size in [3, 4, 9, 10, 33] {
        let grid = generate_maze(size);
        let n = grid.size();
        assert_eq!(grid.get(Coord::new(0, 1)), Some(Cell::Entrance));
        assert_eq!(grid.get(Coord::new(n - 1, n - 2)), Some(Cell::Exit));
    }
}

#[test]
fn sizes_are_coerced_to_odd() {
    assert_eq!(generate_maze(7).size(), 7);
    assert_eq!(generate_maze(8).size(), 9);
    assert_eq!(generate_maze(1).size(), 3);
    assert!(generate_maze(100).size() % 2 == 1);
}

#[test]
fn all_algorithms_return_valid_paths() {
    let grid = MazeConfig::new(41).with_seed(2024).generate();
    for algorithm in Algorithm::ALL {
        let path = solve(&grid, algorithm).unwrap();
        assert_valid_path(&grid, &path);
    }
}

#[test]
fn bfs_is_optimal_on_grids_with_loops() {
    let grids = [
        room(9, &[]),
        room(9, &[(2, 2), (2, 3), (2, 4), (2, 5), (2, 6), (2, 7), (4, 1), (4, 2), (4, 3), (6, 5), (6, 6)]),
        room(11, &[(5, 1), (5, 2), (5, 3), (5, 4), (5, 6), (5, 7), (5, 8), (5, 9)]),
    ];
    for grid in &grids {
        let bfs = solve(grid, Algorithm::Bfs).unwrap();
        let dfs = solve(grid, Algorithm::Dfs).unwrap();
        let a_star = solve(grid, Algorithm::AStar).unwrap();
        for path in [&bfs, &dfs, &a_star] {
            assert_valid_path(grid, path);
        }
        assert!(bfs.len() <= dfs.len());
        assert_eq!(bfs.len(), a_star.len());
    }
}

#[test]
fn no_path_is_algorithm_independent() {
    let grid = room(7, &[(3, 1), (3, 2), (3, 3), (3, 4), (3, 5)]);
    for algorithm in Algorithm::ALL {
        assert_eq!(solve(&grid, algorithm), Err(MazeError::NoPathFound));
    }
}

#[test]
fn unknown_algorithm_defaults_to_bfs() {
    let grid = MazeGenerator::new(11).generate_seeded(1);
    assert_eq!(solve(&grid, "bogus".into()), solve(&grid, Algorithm::Bfs));
}

#[test]
fn unshuffled_five_by_five_scenario() {
    let grid = MazeGenerator::new(5).generate_unshuffled();
    assert_eq!(grid.to_string(), "#S###\n#...#\n#.#.#\n#.#.#\n###E#\n");

    // hand-counted: entrance, along the top row, down the right column, exit
    let path = solve(&grid, Algorithm::Bfs).unwrap();
    assert_eq!(path.len(), 7);
}

#[test]
fn race_reports_in_fixed_order_with_batch_timing() {
    let grid = MazeConfig::new(51).with_seed(77).generate();
    let results = race(&grid);

    let names: Vec<_> = results.iter().map(|r| r.algorithm.name()).collect();
    assert_eq!(names, vec!["bfs", "dfs", "astar"]);
    assert!(results.iter().all(|r| r.elapsed == results[0].elapsed));

    let bfs = solve(&grid, Algorithm::Bfs).unwrap();
    assert!(results.iter().all(|r| r.steps == bfs.len()));
}

#[test]
fn race_step_counts_can_differ() {
    let grid = room(9, &[]);
    let results = race(&grid);
    // own timings are measured separately from the shared batch span
    assert!(results.iter().all(|r| r.solve_time <= r.elapsed));
    assert_eq!(results[0].steps, results[2].steps);
    assert!(results[1].steps >= results[0].steps);
}
