use thiserror::Error;

use crate::geom::Point;

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row does not have the same width as the first row.
    #[error("grid: line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A maze text contains a character with no cell mapping.
    #[error("grid: invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    /// The requested size has more cells than an `i32` can count.
    #[error("grid: {rows}x{cols} cells does not fit in an i32")]
    TooLarge { rows: i32, cols: i32 },
}
