//! Grid search strategies: breadth-first, depth-first and A*.
//!
//! Every strategy runs the same loop over a shared node arena and differs
//! only in the [`Frontier`] it pulls from:
//!
//! | Strategy | Frontier | Guarantee |
//! |---|---|---|
//! | [`bfs()`] | [`FifoFrontier`] | fewest steps |
//! | [`dfs()`] | [`LifoFrontier`] | some path |
//! | [`astar()`] | [`MinCostFrontier`] | minimum total cost |
//!
//! The `bfs`/`dfs`/`astar` functions take a [`Grid`](pathlab_core::Grid) and
//! validate the endpoints. The `*_with` variants run over any type
//! implementing the pather traits.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS |
//! | [`WeightedPather`] : [`Pather`] | path costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod bfs;
mod dfs;
mod distance;
mod error;
mod frontier;
mod grid_pather;
pub mod neighbors;
mod node;
mod path;
mod strategy;
mod traits;
mod traversal;

pub use astar::astar_with;
pub use bfs::bfs_with;
pub use dfs::dfs_with;
pub use distance::manhattan;
pub use error::{Endpoint, ParseStrategyError, SearchError};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, MinCostFrontier};
pub use grid_pather::{CostModel, GridPather, ORTHOGONAL_MOVE_COST};
pub use node::{Ancestors, Cost, NodeArena, NodeId, SearchNode};
pub use path::Path;
pub use strategy::{Strategy, astar, bfs, dfs, search, search_with_costs};
pub use traits::{AstarPather, Pather, WeightedPather};
