//! **pathlab-core**: grid types shared by the pathlab search exercises.
//!
//! This crate provides geometry primitives, an occupancy [`Grid`] with text
//! parsing and rendering, random maze generation, and the sample mazes used
//! by the drivers.

pub mod error;
pub mod geom;
pub mod grid;
pub mod mapgen;
pub mod samples;
pub mod text;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Cell, Grid};
pub use mapgen::{FourDirectionWalker, MazeGen, RandomWalker, ScatterConfig};
pub use samples::{SAMPLE_GOAL, SAMPLE_MAZES, SAMPLE_START, sample_mazes};
