//! Mazes drawn as text.
//!
//! `#` and `1` are walls, `.` and `0` are open floor. Lines are separated
//! by `'\n'` and must all have the same width. Leading and trailing
//! whitespace is trimmed from the whole string but not from individual
//! lines.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::Point;
use crate::grid::{Cell, Grid};

/// Character used for walls when rendering.
pub const WALL_CHAR: char = '#';
/// Character used for open cells when rendering.
pub const OPEN_CHAR: char = '.';

fn cell_for(ch: char) -> Option<Cell> {
    match ch {
        '#' | '1' => Some(Cell::WALL),
        '.' | '0' => Some(Cell::OPEN),
        _ => None,
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut cells = Vec::with_capacity(s.len());
        let mut width: Option<usize> = None;
        let mut rows = 0;

        for (row, line) in s.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut found = 0;
            for (col, ch) in line.chars().enumerate() {
                let cell = cell_for(ch).ok_or(GridError::InvalidChar {
                    ch,
                    pos: Point::new(row as i32, col as i32),
                })?;
                cells.push(cell);
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::InconsistentWidth {
                        line: row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = width.unwrap_or(0);
        if cols == 0 {
            return Ok(Grid::new(0, 0));
        }
        Ok(Grid::from_cells(cells, rows, cols as i32))
    }
}

impl Grid {
    /// Render the grid line by line, choosing a character per cell.
    pub fn render_with(&self, mut f: impl FnMut(Point, Cell) -> char) -> String {
        let cols = self.cols();
        let mut out = String::with_capacity(self.bounds().len() + self.rows() as usize);
        for (p, cell) in self.iter() {
            out.push(f(p, cell));
            if p.col == cols - 1 && p.row < self.rows() - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render_with(|_, c| if c.is_blocked() { WALL_CHAR } else { OPEN_CHAR });
        f.write_str(&text)
    }
}
