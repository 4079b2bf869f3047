//! The seven 12×12 sample mazes used by the labyrinth driver and tests.
//!
//! Every maze has a solid border, with (1, 1) and (10, 10) open.

use crate::geom::Point;
use crate::grid::Grid;

/// Default start cell for the sample mazes.
pub const SAMPLE_START: Point = Point::new(1, 1);
/// Default goal cell for the sample mazes.
pub const SAMPLE_GOAL: Point = Point::new(10, 10);

/// Sample mazes as text.
pub const SAMPLE_MAZES: [&str; 7] = [
    "\
############
#..........#
#.######.###
#.#........#
#.#.######.#
#.#.#......#
#...##.###.#
#.#....#.###
#.##.#.....#
#.#..#####.#
#...##.....#
############",
    "\
############
#..........#
#..........#
#..........#
#..........#
#..........#
#..........#
#..........#
#..........#
#..........#
#..........#
############",
    "\
############
#.#...#....#
#.#.#.#.##.#
#.#.#.#.#..#
#.#.#.#.#.##
#.#.#.#.#..#
#.#.#.#.##.#
#.#.#.#.#..#
#.#.#.#.#.##
#.#.#.#.#..#
#...#...##.#
############",
    "\
############
#...#...#..#
#.#...#...##
#...#...#..#
#.#...#...##
#...#...#..#
#.#...#...##
#...#...#..#
#.#...#...##
#...#...#..#
#.#...#....#
############",
    "\
############
#....#.....#
#.##.#.###.#
#.##.#.#.#.#
#......###.#
######.#...#
#....###.###
#.##.......#
#.##.#####.#
#........###
#.#.#.##...#
############",
    "\
############
#..........#
###.####.###
#..........#
#.###.######
#..#.......#
##.######.##
#.....#....#
#####.#..#.#
#.....######
#.###......#
############",
    "\
############
#..........#
###.####.###
#..........#
#.###.######
#..#....#..#
##.######.##
#.....#....#
#####.#....#
#.....#.#.##
#.###...#..#
############",
];

/// Parse every sample maze. A maze that fails to parse is logged and
/// skipped.
pub fn sample_mazes() -> Vec<Grid> {
    parse_all(&SAMPLE_MAZES)
}

fn parse_all(texts: &[&str]) -> Vec<Grid> {
    texts
        .iter()
        .enumerate()
        .filter_map(|(i, text)| match text.parse() {
            Ok(grid) => Some(grid),
            Err(err) => {
                log::warn!("sample maze {i}: {err}");
                None
            }
        })
        .collect()
}
