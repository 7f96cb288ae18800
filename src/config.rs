use crate::maze::{Grid, MazeGenerator};
use crate::path_finders::Algorithm;


/// Default side length of a new maze
pub const DEFAULT_SIZE: usize = 51;


/// A "new maze" request
/// size: requested side, coerced to an odd value of at least 3 when the maze is built
/// seed: fixed seed for a reproducible maze, random when None
/// algorithm: search used outside race mode
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    pub size: usize,
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
            algorithm: Algorithm::Bfs,
        }
    }
}

impl MazeConfig {

    pub fn new(size: usize) -> Self {
        Self { size, ..Default::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn generator(&self) -> MazeGenerator {
        MazeGenerator::new(self.size)
    }

    /// Build the maze described by this request
    pub fn generate(&self) -> Grid {
        let generator = self.generator();
        match self.seed {
            Some(seed) => generator.generate_seeded(seed),
            None => generator.generate(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MazeConfig::default();
        assert_eq!(config.size, 51);
        assert_eq!(config.seed, None);
        assert_eq!(config.algorithm, Algorithm::Bfs);
        assert_eq!(config.generate().size(), 51);
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let config = MazeConfig::new(20).with_seed(1234).with_algorithm(Algorithm::AStar);
        let grid = config.generate();
        assert_eq!(grid.size(), 21);
        assert_eq!(grid, config.generate());
    }
}
