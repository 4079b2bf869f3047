use pathlab_core::Point;

/// Manhattan (L1) distance between two points: the minimum number of
/// orthogonal steps on an open grid.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
