use super::{Cell, Grid};
use crate::geometry::{Coord, Direction};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};


/// Perfect maze generator
/// Iterative randomized depth-first carving ("recursive backtracker") over the odd lattice
/// https://en.wikipedia.org/wiki/Maze_generation_algorithm#Iterative_implementation_(with_stack)
pub struct MazeGenerator {
    size: usize,
}

impl MazeGenerator {

    /// Create a generator, coercing `size` to a valid odd side
    pub fn new(size: usize) -> Self {
        let coerced = Self::coerce_size(size);
        if coerced != size {
            log::warn!("maze size {size} is invalid, using {coerced}");
        }
        Self { size: coerced }
    }

    /// Sizes below 3 become 3, even sizes are bumped to the next odd number
    pub fn coerce_size(size: usize) -> usize {
        let size = size.max(3);
        if size % 2 == 0 { size + 1 } else { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Carve a maze using the thread-local rng
    pub fn generate(&self) -> Grid {
        self.generate_with_rng(&mut rand::rng())
    }

    /// Carve a reproducible maze from `seed`
    pub fn generate_seeded(&self, seed: u64) -> Grid {
        self.generate_with_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Carve with direction order shuffled by `rng` (Fisher-Yates)
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        self.carve(|directions| directions.shuffle(&mut *rng))
    }

    /// Carve without shuffling, always trying down, right, up, left
    pub fn generate_unshuffled(&self) -> Grid {
        self.carve(|_| {})
    }

    fn carve<F>(&self, mut order: F) -> Grid
    where
        F: FnMut(&mut [Direction; 4]),
    {
        let size = self.size;
        let mut grid = Grid::walls(size);

        let start = Coord::new(1, 1);
        grid.set(start, Cell::Path);
        let mut stack = vec![start];
        let mut carved = 1;

        while let Some(current) = stack.pop() {
            let mut directions = Direction::CARVE_ORDER;
            order(&mut directions);

            for direction in directions {
                // Lattice neighbor two cells away must stay off the outer boundary
                let Some(next) = current.step(direction, 2, size) else {
                    continue;
                };
                if next.row == 0 || next.col == 0 || next.row >= size - 1 || next.col >= size - 1 {
                    continue;
                }
                if grid.get(next) != Some(Cell::Wall) {
                    continue;
                }

                // both steps are in bounds since `next` is
                if let Some(between) = current.step(direction, 1, size) {
                    grid.set(between, Cell::Path);
                }
                grid.set(next, Cell::Path);
                carved += 1;
                stack.push(next);
            }
        }

        grid.place_endpoints();
        log::debug!("carved {carved} lattice cells in a {size}x{size} maze");
        grid
    }
}
