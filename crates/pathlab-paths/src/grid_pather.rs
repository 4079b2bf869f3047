use pathlab_core::{Grid, Point};

use crate::distance::manhattan;
use crate::neighbors;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Cost of one orthogonal move.
pub const ORTHOGONAL_MOVE_COST: i32 = 10;

/// Move costs used by [`GridPather`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    /// Cost of a single up/down/left/right step. Must be > 0;
    /// [`search_with_costs`](crate::search_with_costs) rejects anything else.
    pub move_cost: i32,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            move_cost: ORTHOGONAL_MOVE_COST,
        }
    }
}

/// Orthogonal movement over the open cells of a [`Grid`].
///
/// Neighbor candidates are checked against the grid bounds before their
/// cell is read, so grids without a solid border are fine. The heuristic is
/// Manhattan distance times the move cost, which is admissible and
/// consistent when only orthogonal moves exist.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
    costs: CostModel,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self::with_costs(grid, CostModel::default())
    }

    pub fn with_costs(grid: &'a Grid, costs: CostModel) -> Self {
        Self { grid, costs }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn costs(&self) -> CostModel {
        self.costs
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(neighbors::orthogonal(p).filter(|&n| self.grid.is_open(n)));
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        self.costs.move_cost
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to).saturating_mul(self.costs.move_cost)
    }
}
