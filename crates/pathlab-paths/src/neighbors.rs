use pathlab_core::Point;

/// Orthogonal candidates around `p`: up, left, right, down.
///
/// The 3×3 block centred on `p` is swept row by row and only cells sharing
/// a row or a column with `p` are kept, minus `p` itself. No bounds or wall
/// filtering happens here; callers must check every candidate before
/// touching grid storage.
pub fn orthogonal(p: Point) -> impl Iterator<Item = Point> {
    (-1..=1)
        .flat_map(move |dr| (-1..=1).map(move |dc| p.shift(dr, dc)))
        .filter(move |&n| (n.row == p.row || n.col == p.col) && n != p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_order_and_no_diagonals() {
        let p = Point::new(3, 3);
        let ns: Vec<_> = orthogonal(p).collect();
        assert_eq!(
            ns,
            vec![
                Point::new(2, 3),
                Point::new(3, 2),
                Point::new(3, 4),
                Point::new(4, 3),
            ]
        );
    }

    #[test]
    fn no_bounds_filtering() {
        let ns: Vec<_> = orthogonal(Point::ZERO).collect();
        assert!(ns.contains(&Point::new(-1, 0)));
        assert!(ns.contains(&Point::new(0, -1)));
    }
}
