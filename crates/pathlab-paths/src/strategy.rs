//! Checked entry points over a [`Grid`], and strategy selection.

use std::fmt;
use std::str::FromStr;

use pathlab_core::{Grid, Point};

use crate::astar::astar_with;
use crate::bfs::bfs_with;
use crate::dfs::dfs_with;
use crate::error::{Endpoint, ParseStrategyError, SearchError};
use crate::grid_pather::{CostModel, GridPather};
use crate::path::Path;
use crate::traits::AstarPather;

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Breadth-first: fewest steps.
    Bfs,
    /// Depth-first: some path, not necessarily short.
    Dfs,
    /// A*: minimum total cost.
    Astar,
}

impl Strategy {
    /// Every strategy, in display order.
    pub const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::Dfs, Strategy::Astar];

    /// Run this strategy over any pather. Endpoints are not validated.
    pub fn run<P: AstarPather>(self, pather: &P, start: Point, goal: Point) -> Option<Path> {
        match self {
            Strategy::Bfs => bfs_with(pather, start, goal),
            Strategy::Dfs => dfs_with(pather, start, goal),
            Strategy::Astar => astar_with(pather, start, goal),
        }
    }

    /// Short lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::Astar => "astar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::Bfs),
            "dfs" | "depth-first" => Ok(Strategy::Dfs),
            "astar" | "a*" | "a-star" => Ok(Strategy::Astar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

fn check_endpoint(grid: &Grid, endpoint: Endpoint, point: Point) -> Result<(), SearchError> {
    if !grid.contains(point) {
        return Err(SearchError::OutOfBounds {
            endpoint,
            point,
            bounds: grid.bounds(),
        });
    }
    if grid.is_wall(point) {
        return Err(SearchError::Blocked { endpoint, point });
    }
    Ok(())
}

/// Search `grid` from `start` to `goal` with the given move costs.
///
/// Fails fast when the move cost is not positive or an endpoint is outside
/// the grid or on a wall. An unreachable goal is `Ok(None)`.
pub fn search_with_costs(
    grid: &Grid,
    start: Point,
    goal: Point,
    strategy: Strategy,
    costs: CostModel,
) -> Result<Option<Path>, SearchError> {
    if costs.move_cost <= 0 {
        return Err(SearchError::InvalidMoveCost(costs.move_cost));
    }
    check_endpoint(grid, Endpoint::Start, start)?;
    check_endpoint(grid, Endpoint::Goal, goal)?;
    Ok(strategy.run(&GridPather::with_costs(grid, costs), start, goal))
}

/// Search `grid` from `start` to `goal` with the default move cost of 10.
pub fn search(
    grid: &Grid,
    start: Point,
    goal: Point,
    strategy: Strategy,
) -> Result<Option<Path>, SearchError> {
    search_with_costs(grid, start, goal, strategy, CostModel::default())
}

/// Breadth-first search over `grid`.
pub fn bfs(grid: &Grid, start: Point, goal: Point) -> Result<Option<Path>, SearchError> {
    search(grid, start, goal, Strategy::Bfs)
}

/// Depth-first search over `grid`.
pub fn dfs(grid: &Grid, start: Point, goal: Point) -> Result<Option<Path>, SearchError> {
    search(grid, start, goal, Strategy::Dfs)
}

/// A* search over `grid`.
pub fn astar(grid: &Grid, start: Point, goal: Point) -> Result<Option<Path>, SearchError> {
    search(grid, start, goal, Strategy::Astar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlab_core::{
        Cell, FourDirectionWalker, MazeGen, Range, SAMPLE_GOAL, SAMPLE_START, ScatterConfig,
        sample_mazes,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn walled_goal() -> Grid {
        "\
#######
#.....#
#.###.#
#.#.#.#
#.###.#
#######"
            .parse()
            .unwrap()
    }

    #[test]
    fn parse_strategy_names() {
        assert_eq!("bfs".parse::<Strategy>().unwrap(), Strategy::Bfs);
        assert_eq!("DFS".parse::<Strategy>().unwrap(), Strategy::Dfs);
        assert_eq!("a*".parse::<Strategy>().unwrap(), Strategy::Astar);
        assert_eq!(" astar ".parse::<Strategy>().unwrap(), Strategy::Astar);
        let err = "dijkstra".parse::<Strategy>().unwrap_err();
        assert_eq!(err, ParseStrategyError("dijkstra".into()));
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
        }
    }

    #[test]
    fn sample_maze_bfs_and_astar_agree() {
        let grid = &sample_mazes()[0];
        let b = bfs(grid, SAMPLE_START, SAMPLE_GOAL).unwrap().unwrap();
        let a = astar(grid, SAMPLE_START, SAMPLE_GOAL).unwrap().unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a.cost(&GridPather::new(grid)) / 10, b.steps() as i32);
        assert_eq!(b.steps(), 18);
    }

    #[test]
    fn start_equals_goal_for_every_strategy() {
        let grid = &sample_mazes()[2];
        for s in Strategy::ALL {
            let path = search(grid, SAMPLE_START, SAMPLE_START, s).unwrap().unwrap();
            assert_eq!(path.points(), &[SAMPLE_START]);
        }
    }

    #[test]
    fn enclosed_goal_has_no_path() {
        let grid = walled_goal();
        for s in Strategy::ALL {
            assert_eq!(search(&grid, Point::new(1, 1), Point::new(3, 3), s), Ok(None));
        }
    }

    #[test]
    fn out_of_bounds_endpoints_fail_fast() {
        let grid = walled_goal();
        let err = bfs(&grid, Point::new(-1, 0), Point::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            SearchError::OutOfBounds {
                endpoint: Endpoint::Start,
                point: Point::new(-1, 0),
                bounds: Range::new(0, 0, 6, 7),
            }
        );
        let err = dfs(&grid, Point::new(1, 1), Point::new(6, 1)).unwrap_err();
        assert!(matches!(
            err,
            SearchError::OutOfBounds {
                endpoint: Endpoint::Goal,
                ..
            }
        ));
        assert!(err.to_string().starts_with("goal (6, 1) is outside"));
    }

    #[test]
    fn wall_endpoints_fail_fast() {
        let grid = walled_goal();
        let err = astar(&grid, Point::new(0, 0), Point::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            SearchError::Blocked {
                endpoint: Endpoint::Start,
                point: Point::new(0, 0)
            }
        );
        let err = astar(&grid, Point::new(1, 1), Point::new(2, 2)).unwrap_err();
        assert_eq!(err.to_string(), "goal (2, 2) is on a wall");
    }

    #[test]
    fn borderless_grid_never_reads_out_of_bounds() {
        let grid: Grid = "\
...
.#.
..."
            .parse()
            .unwrap();
        for s in Strategy::ALL {
            let path = search(&grid, Point::new(0, 0), Point::new(2, 2), s)
                .unwrap()
                .unwrap();
            assert!(path.is_walkable_on(&grid));
        }
        let b = bfs(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap().unwrap();
        assert_eq!(b.steps(), 4);
    }

    #[test]
    fn repeated_calls_are_identical() {
        for grid in sample_mazes() {
            for s in Strategy::ALL {
                let first = search(&grid, SAMPLE_START, SAMPLE_GOAL, s).unwrap();
                let second = search(&grid, SAMPLE_START, SAMPLE_GOAL, s).unwrap();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn custom_move_cost_scales_astar() {
        let grid = Grid::new(4, 4);
        let costs = CostModel { move_cost: 3 };
        let path = search_with_costs(&grid, Point::new(0, 0), Point::new(3, 3), Strategy::Astar, costs)
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(&GridPather::with_costs(&grid, costs)), 18);
    }

    #[test]
    fn non_positive_move_cost_is_rejected() {
        let grid = Grid::new(4, 4);
        for move_cost in [0, -10] {
            for s in Strategy::ALL {
                let got = search_with_costs(
                    &grid,
                    Point::new(0, 0),
                    Point::new(3, 3),
                    s,
                    CostModel { move_cost },
                );
                assert_eq!(got, Err(SearchError::InvalidMoveCost(move_cost)));
            }
        }
    }

    #[test]
    fn huge_move_cost_saturates_instead_of_overflowing() {
        let grid = Grid::new(4, 4);
        let costs = CostModel {
            move_cost: i32::MAX / 2,
        };
        let pather = GridPather::with_costs(&grid, costs);
        assert_eq!(pather.estimate(Point::new(0, 0), Point::new(3, 3)), i32::MAX);

        let path = search_with_costs(&grid, Point::new(0, 0), Point::new(3, 3), Strategy::Astar, costs)
            .unwrap()
            .unwrap();
        assert!(path.is_walkable_on(&grid));
        assert_eq!(path.goal(), Point::new(3, 3));
        assert_eq!(path.cost(&pather), i32::MAX);
    }

    fn check_strategies_agree(grid: &Grid, start: Point, goal: Point) {
        let pather = GridPather::new(grid);
        let b = bfs(grid, start, goal).unwrap();
        let a = astar(grid, start, goal).unwrap();
        let d = dfs(grid, start, goal).unwrap();
        match (b, a, d) {
            (Some(b), Some(a), Some(d)) => {
                for p in [&b, &a, &d] {
                    assert!(p.is_walkable_on(grid));
                    assert_eq!(p.start(), start);
                    assert_eq!(p.goal(), goal);
                }
                assert_eq!(a.cost(&pather), b.steps() as i32 * 10);
                assert!(d.steps() >= b.steps());
            }
            (None, None, None) => {}
            other => panic!("strategies disagree on reachability: {other:?}"),
        }
    }

    #[test]
    fn random_scattered_mazes() {
        let start = Point::new(1, 1);
        let goal = Point::new(14, 18);
        for seed in 0..40 {
            let mut mg = MazeGen::new(16, 20, StdRng::seed_from_u64(seed));
            mg.scatter(&ScatterConfig {
                density: 0.3,
                keep_open: vec![start, goal],
            });
            check_strategies_agree(&mg.into_grid(), start, goal);
        }
    }

    #[test]
    fn random_walk_caves() {
        for seed in 0..20 {
            let mut mg = MazeGen::new(15, 15, StdRng::seed_from_u64(seed));
            mg.random_walk(&FourDirectionWalker, 0.5, 8);
            let grid = mg.into_grid();
            let open: Vec<Point> = grid
                .iter()
                .filter(|(_, c)| *c == Cell::OPEN)
                .map(|(p, _)| p)
                .collect();
            let (Some(&first), Some(&last)) = (open.first(), open.last()) else {
                continue;
            };
            check_strategies_agree(&grid, first, last);
        }
    }

    #[test]
    fn grid_is_shared_across_threads() {
        let grid = sample_mazes().remove(4);
        let expected = bfs(&grid, SAMPLE_START, SAMPLE_GOAL).unwrap();
        let shared = &grid;
        std::thread::scope(|scope| {
            let handles: Vec<_> = Strategy::ALL
                .into_iter()
                .map(|s| scope.spawn(move || search(shared, SAMPLE_START, SAMPLE_GOAL, s)))
                .collect();
            for h in handles {
                let path = h.join().unwrap().unwrap().unwrap();
                assert!(path.is_walkable_on(&grid));
            }
        });
        assert_eq!(expected.map(|p| p.steps()), Some(36));
    }
}
