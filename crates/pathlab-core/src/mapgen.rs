//! Random maze generation on bordered grids.
//!
//! Two generators:
//! - **Random walk**: starts from a solid grid and carves open floor with a
//!   drunk walk confined to the interior.
//! - **Scatter**: starts from an open interior and drops walls at random
//!   with a fixed density.
//!
//! Both keep the outer ring of the grid walled, so the result always looks
//! like the hand-drawn sample mazes.

use rand::Rng;

use crate::error::GridError;
use crate::geom::Point;
use crate::grid::{Cell, Grid};

/// Trait for choosing a random neighbor during random-walk carving.
pub trait RandomWalker {
    /// Given a position `p`, return a random neighbor using `rng`.
    fn neighbor(&self, p: Point, rng: &mut impl Rng) -> Point;
}

/// A simple 4-directional random walker.
pub struct FourDirectionWalker;

impl RandomWalker for FourDirectionWalker {
    fn neighbor(&self, p: Point, rng: &mut impl Rng) -> Point {
        match rng.random_range(0..4u32) {
            0 => p.shift(0, 1),
            1 => p.shift(0, -1),
            2 => p.shift(1, 0),
            _ => p.shift(-1, 0),
        }
    }
}

const DEFAULT_DENSITY: f64 = 0.3;

/// Settings for [`MazeGen::scatter`].
#[derive(Debug, Clone)]
pub struct ScatterConfig {
    /// Probability (0.0–1.0) that an interior cell becomes a wall. Values
    /// outside the range are clamped; NaN and infinities fall back to the
    /// default density.
    pub density: f64,
    /// Cells that must stay open, typically the search endpoints.
    pub keep_open: Vec<Point>,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            keep_open: Vec::new(),
        }
    }
}

/// Maze generator operating on a [`Grid`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator for a fresh `rows` × `cols` grid.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`Grid::new`].
    pub fn new(rows: i32, cols: i32, rng: R) -> Self {
        Self::with_grid(Grid::new(rows, cols), rng)
    }

    /// Like [`MazeGen::new`], but reports an oversized grid as an error.
    pub fn try_new(rows: i32, cols: i32, rng: R) -> Result<Self, GridError> {
        Ok(Self::with_grid(Grid::try_new(rows, cols)?, rng))
    }

    /// Create a generator over an existing grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Carve a cave with random walks.
    ///
    /// The grid is first filled with walls. Each walk starts from the center
    /// of the interior and opens cells until `fill_pct` (0.0–1.0) of the
    /// interior is open or the walk budget runs out.
    ///
    /// Returns the number of cells carved.
    pub fn random_walk(&mut self, walker: &impl RandomWalker, fill_pct: f64, walks: usize) -> usize {
        self.grid.fill(Cell::WALL);
        let interior = self.grid.bounds().interior();
        if interior.is_empty() {
            return 0;
        }
        let total = interior.len();
        let target = ((total as f64 * fill_pct.clamp(0.0, 1.0)) as usize).max(1);
        let start = Point::new(
            interior.min.row + interior.rows() / 2,
            interior.min.col + interior.cols() / 2,
        );
        let mut carved = 0usize;

        for _ in 0..walks {
            let mut pos = start;
            // Safety limit per walk.
            let step_limit = total * 4;

            for _ in 0..step_limit {
                if carved >= target {
                    return carved;
                }
                if self.grid.is_wall(pos) {
                    self.grid.set(pos, Cell::OPEN);
                    carved += 1;
                }
                let next = walker.neighbor(pos, &mut self.rng);
                if interior.contains(next) {
                    pos = next;
                }
            }
        }

        carved
    }

    /// Scatter walls over an open interior.
    ///
    /// Returns the number of interior walls placed.
    pub fn scatter(&mut self, cfg: &ScatterConfig) -> usize {
        let bounds = self.grid.bounds();
        let density = if cfg.density.is_finite() {
            cfg.density.clamp(0.0, 1.0)
        } else {
            log::warn!(
                "scatter: density {} is not a number, using {DEFAULT_DENSITY}",
                cfg.density
            );
            DEFAULT_DENSITY
        };
        let mut walls = 0usize;
        for p in bounds.iter() {
            let cell = if bounds.on_border(p) {
                Cell::WALL
            } else if !cfg.keep_open.contains(&p) && self.rng.random_bool(density) {
                walls += 1;
                Cell::WALL
            } else {
                Cell::OPEN
            };
            self.grid.set(p, cell);
        }
        walls
    }

    /// Consume the generator and return the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_walk_carves_interior_only() {
        let mut mg = MazeGen::new(20, 20, StdRng::seed_from_u64(7));
        let carved = mg.random_walk(&FourDirectionWalker, 0.4, 10);
        assert!(carved > 0);
        let grid = mg.into_grid();
        assert_eq!(grid.count(Cell::OPEN), carved);
        let bounds = grid.bounds();
        assert_eq!(grid.count_fn(|p, c| bounds.on_border(p) && !c.is_blocked()), 0);
    }

    #[test]
    fn test_random_walk_tiny_grid() {
        let mut mg = MazeGen::new(2, 2, StdRng::seed_from_u64(1));
        assert_eq!(mg.random_walk(&FourDirectionWalker, 1.0, 3), 0);
    }

    #[test]
    fn test_scatter_keeps_border_and_endpoints() {
        let keep = vec![Point::new(1, 1), Point::new(10, 10)];
        let mut mg = MazeGen::new(12, 12, StdRng::seed_from_u64(99));
        let placed = mg.scatter(&ScatterConfig {
            density: 0.9,
            keep_open: keep.clone(),
        });
        let grid = mg.into_grid();
        assert_eq!(grid.count(Cell::WALL), placed + 44);
        for p in keep {
            assert!(grid.is_open(p));
        }
    }

    #[test]
    fn test_scatter_is_deterministic_per_seed() {
        let gen_grid = |seed| {
            let mut mg = MazeGen::new(12, 12, StdRng::seed_from_u64(seed));
            mg.scatter(&ScatterConfig::default());
            mg.into_grid()
        };
        assert_eq!(gen_grid(5), gen_grid(5));
    }

    #[test]
    fn test_scatter_non_finite_density_uses_default() {
        let scatter = |density| {
            let mut mg = MazeGen::new(12, 12, StdRng::seed_from_u64(3));
            let walls = mg.scatter(&ScatterConfig {
                density,
                keep_open: Vec::new(),
            });
            (walls, mg.into_grid())
        };
        let expected = scatter(DEFAULT_DENSITY);
        assert_eq!(scatter(f64::NAN), expected);
        assert_eq!(scatter(f64::INFINITY), expected);
        assert_eq!(scatter(f64::NEG_INFINITY), expected);
    }

    #[test]
    fn test_try_new_rejects_oversized_grid() {
        let mg = MazeGen::try_new(70_000, 70_000, StdRng::seed_from_u64(0));
        assert!(matches!(mg, Err(GridError::TooLarge { .. })));
        assert!(MazeGen::try_new(8, 8, StdRng::seed_from_u64(0)).is_ok());
    }
}
