use std::fmt;

use pathlab_core::{Grid, Point};

use crate::traits::WeightedPather;

/// An ordered sequence of coordinates from start to goal, both included.
///
/// A path always holds at least one point; searches only build it from a
/// traced node chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub(crate) fn new(points: Vec<Point>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    /// The coordinates in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// First coordinate.
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Last coordinate.
    pub fn goal(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Number of coordinates, endpoints included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of moves (edges).
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Sum of the move costs along the path, saturating at `i32::MAX`.
    pub fn cost<P: WeightedPather>(&self, pather: &P) -> i32 {
        self.points
            .windows(2)
            .fold(0i32, |acc, w| acc.saturating_add(pather.cost(w[0], w[1])))
    }

    /// Whether every coordinate is an open cell of `grid` and every move is
    /// a single orthogonal step.
    pub fn is_walkable_on(&self, grid: &Grid) -> bool {
        self.points.iter().all(|&p| grid.is_open(p))
            && self.points.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl From<Path> for Vec<Point> {
    fn from(path: Path) -> Self {
        path.points
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        f.write_str("]")
    }
}
