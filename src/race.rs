use crate::errors::MazeError;
use crate::maze::Grid;
use crate::path_finders::{Algorithm, Path, solve};

use std::{fmt, time::{Duration, Instant}};


/// Outcome of one algorithm in a race
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceResult {
    pub algorithm: Algorithm,
    /// Wall-clock span of the whole concurrent batch, identical for every entry
    pub elapsed: Duration,
    /// Time spent by this algorithm alone
    pub solve_time: Duration,
    /// Path length in cells, 0 when no path was found
    pub steps: usize,
}

impl RaceResult {

    pub fn found(&self) -> bool {
        self.steps > 0
    }
}

impl fmt::Display for RaceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Time: {:.3}s, Steps: {}",
            self.algorithm.name().to_uppercase(),
            self.elapsed.as_secs_f64(),
            self.steps
        )
    }
}


/// Runs every algorithm against the same maze at once
/// The grid is shared read-only; each search owns its own frontier and maps
pub struct RaceCoordinator {}

impl RaceCoordinator {

    /// Race BFS, DFS and A* concurrently
    /// Results are in the fixed order of `Algorithm::ALL`
    pub fn run(&self, grid: &Grid) -> [RaceResult; 3] {
        let [first, second, third] = Algorithm::ALL;

        let started = Instant::now();
        let (a, (b, c)) = rayon::join(
            || timed_solve(grid, first),
            || rayon::join(|| timed_solve(grid, second), || timed_solve(grid, third)),
        );
        let elapsed = started.elapsed();

        let results = [(first, a), (second, b), (third, c)].map(|(algorithm, (path, solve_time))| {
            RaceResult {
                algorithm,
                elapsed,
                solve_time,
                steps: path.map(|p| p.len()).unwrap_or(0),
            }
        });

        for r in &results {
            log::info!("{r} (own time {:?})", r.solve_time);
        }
        results
    }

    /// Fewest steps among the algorithms that found a path
    /// Equal step counts are decided by each algorithm's own time
    pub fn winner(results: &[RaceResult]) -> Option<&RaceResult> {
        results
            .iter()
            .filter(|r| r.found())
            .min_by(|a, b| a.steps.cmp(&b.steps).then(a.solve_time.cmp(&b.solve_time)))
    }
}


fn timed_solve(grid: &Grid, algorithm: Algorithm) -> (Result<Path, MazeError>, Duration) {
    let started = Instant::now();
    let path = solve(grid, algorithm);
    (path, started.elapsed())
}
