//! Shared pieces of the `labyrinth` and `transit` drivers: argument
//! parsing, maze selection and terminal rendering of found paths.

use std::io::{self, Write};

use clap::Parser;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use pathlab_core::{Grid, GridError, MazeGen, Point, SAMPLE_GOAL, SAMPLE_MAZES, SAMPLE_START, ScatterConfig};
use pathlab_paths::{Path, Strategy};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

const PATH_CHAR: char = '*';
const START_CHAR: char = 'S';
const GOAL_CHAR: char = 'G';

const COL_WALL: Color = Color::Rgb { r: 100, g: 100, b: 130 };
const COL_FLOOR: Color = Color::Rgb { r: 60, g: 55, b: 50 };
const COL_PATH: Color = Color::Rgb { r: 50, g: 180, b: 255 };
const COL_ENDPOINT: Color = Color::Rgb { r: 255, g: 220, b: 80 };

#[derive(Parser, Debug, Clone)]
#[command(name = "labyrinth")]
#[command(about = "Run grid search strategies over sample or generated mazes")]
pub struct LabyrinthArgs {
    /// Strategy to run: bfs, dfs or astar (all three when omitted)
    #[arg(short, long, value_name = "NAME")]
    pub strategy: Option<Strategy>,

    /// Only run the sample maze with this index
    #[arg(short, long, value_name = "INDEX", conflicts_with = "seed")]
    pub maze: Option<usize>,

    /// Generate a random maze from this seed instead of using the samples
    #[arg(long)]
    pub seed: Option<u64>,

    /// Side length of a generated maze
    #[arg(long, default_value = "12")]
    pub size: i32,

    /// Wall density of a generated maze (0.0-1.0)
    #[arg(long, default_value = "0.3")]
    pub density: f64,

    /// Draw each maze with the path highlighted
    #[arg(short, long)]
    pub render: bool,

    /// Draw without colors
    #[arg(long)]
    pub no_color: bool,
}

impl LabyrinthArgs {
    pub fn strategies(&self) -> Vec<Strategy> {
        match self.strategy {
            Some(s) => vec![s],
            None => Strategy::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("no sample maze {index}, there are {count}")]
    NoSuchMaze { index: usize, count: usize },
    #[error("a generated maze needs a side of at least 3, got {0}")]
    TooSmall(i32),
    #[error("wall density must be a number between 0 and 1, got {0}")]
    InvalidDensity(f64),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// A grid together with the endpoints to search between.
#[derive(Debug, Clone)]
pub struct Maze {
    pub name: String,
    pub grid: Grid,
    pub start: Point,
    pub goal: Point,
}

/// Pick the mazes requested on the command line.
pub fn select_mazes(args: &LabyrinthArgs) -> Result<Vec<Maze>, DemoError> {
    if let Some(seed) = args.seed {
        return generated_maze(seed, args.size, args.density).map(|m| vec![m]);
    }

    let samples: Vec<Maze> = SAMPLE_MAZES
        .iter()
        .enumerate()
        .filter_map(|(i, text)| match text.parse::<Grid>() {
            Ok(grid) => Some(Maze {
                name: format!("maze {i}"),
                grid,
                start: SAMPLE_START,
                goal: SAMPLE_GOAL,
            }),
            Err(err) => {
                log::warn!("skipping sample maze {i}: {err}");
                None
            }
        })
        .collect();

    match args.maze {
        None => Ok(samples),
        Some(index) => {
            let count = samples.len();
            samples
                .into_iter()
                .nth(index)
                .map(|m| vec![m])
                .ok_or(DemoError::NoSuchMaze { index, count })
        }
    }
}

/// A walled `size` × `size` maze with scattered interior walls. The
/// endpoints sit in opposite interior corners.
pub fn generated_maze(seed: u64, size: i32, density: f64) -> Result<Maze, DemoError> {
    if size < 3 {
        return Err(DemoError::TooSmall(size));
    }
    if !(0.0..=1.0).contains(&density) {
        return Err(DemoError::InvalidDensity(density));
    }
    let start = Point::new(1, 1);
    let goal = Point::new(size - 2, size - 2);
    let mut mapgen = MazeGen::try_new(size, size, StdRng::seed_from_u64(seed))?;
    let walls = mapgen.scatter(&ScatterConfig {
        density,
        keep_open: vec![start, goal],
    });
    log::info!("generated {size}x{size} maze from seed {seed} with {walls} interior walls");
    Ok(Maze {
        name: format!("seed {seed}"),
        grid: mapgen.into_grid(),
        start,
        goal,
    })
}

fn glyph(grid: &Grid, path: Option<&Path>, p: Point) -> char {
    match path {
        Some(path) if p == path.start() => START_CHAR,
        Some(path) if p == path.goal() => GOAL_CHAR,
        Some(path) if path.contains(p) => PATH_CHAR,
        _ if grid.is_wall(p) => '#',
        _ => '.',
    }
}

/// Plain-text drawing of `grid` with `path` overlaid.
pub fn overlay(grid: &Grid, path: Option<&Path>) -> String {
    grid.render_with(|p, _| glyph(grid, path, p))
}

/// Colored drawing of `grid` with `path` overlaid.
pub fn write_styled<W: Write>(out: &mut W, grid: &Grid, path: Option<&Path>) -> io::Result<()> {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let ch = glyph(grid, path, Point::new(row, col));
            let color = match ch {
                START_CHAR | GOAL_CHAR => COL_ENDPOINT,
                PATH_CHAR => COL_PATH,
                '#' => COL_WALL,
                _ => COL_FLOOR,
            };
            if color == COL_ENDPOINT {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, SetForegroundColor(color), Print(ch))?;
            if color == COL_ENDPOINT {
                queue!(out, SetAttribute(Attribute::Reset))?;
            }
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlab_paths::bfs;

    fn args(extra: &[&str]) -> LabyrinthArgs {
        let argv = std::iter::once("labyrinth").chain(extra.iter().copied());
        LabyrinthArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn default_args_run_everything() {
        let a = args(&[]);
        assert_eq!(a.strategies(), Strategy::ALL.to_vec());
        assert_eq!(select_mazes(&a).unwrap().len(), SAMPLE_MAZES.len());
        assert!(!a.render);
    }

    #[test]
    fn strategy_and_maze_flags() {
        let a = args(&["--strategy", "a*", "--maze", "2", "--render"]);
        assert_eq!(a.strategies(), vec![Strategy::Astar]);
        let mazes = select_mazes(&a).unwrap();
        assert_eq!(mazes.len(), 1);
        assert_eq!(mazes[0].name, "maze 2");
        assert!(a.render);

        assert!(LabyrinthArgs::try_parse_from(["labyrinth", "--strategy", "greedy"]).is_err());
        assert!(LabyrinthArgs::try_parse_from(["labyrinth", "--maze", "1", "--seed", "3"]).is_err());
    }

    #[test]
    fn missing_sample_is_an_error() {
        let err = select_mazes(&args(&["--maze", "7"])).unwrap_err();
        assert_eq!(err.to_string(), "no sample maze 7, there are 7");
    }

    #[test]
    fn generated_maze_is_deterministic() {
        let a = generated_maze(9, 16, 0.25).unwrap();
        let b = generated_maze(9, 16, 0.25).unwrap();
        assert_eq!(a.grid, b.grid);
        assert!(a.grid.is_open(a.start));
        assert!(a.grid.is_open(a.goal));
        assert_eq!(a.goal, Point::new(14, 14));
        assert!(matches!(generated_maze(1, 2, 0.3), Err(DemoError::TooSmall(2))));
    }

    #[test]
    fn generated_maze_rejects_bad_density_and_size() {
        for density in [f64::NAN, -0.1, 1.5, f64::INFINITY] {
            assert!(matches!(
                generated_maze(1, 12, density),
                Err(DemoError::InvalidDensity(_))
            ));
        }
        assert!(matches!(
            generated_maze(1, 70_000, 0.3),
            Err(DemoError::Grid(GridError::TooLarge { .. }))
        ));

        let a = args(&["--seed", "1", "--density", "NaN"]);
        assert!(select_mazes(&a).is_err());
    }

    #[test]
    fn overlay_marks_the_path() {
        let grid: Grid = "#####\n#...#\n#.#.#\n#####".parse().unwrap();
        let path = bfs(&grid, Point::new(1, 1), Point::new(2, 3)).unwrap().unwrap();
        assert_eq!(overlay(&grid, Some(&path)), "#####\n#S**#\n#.#G#\n#####");
        assert_eq!(overlay(&grid, None), grid.to_string());
    }

    #[test]
    fn styled_output_contains_every_glyph() {
        let grid: Grid = "###\n#.#\n###".parse().unwrap();
        let path = bfs(&grid, Point::new(1, 1), Point::new(1, 1)).unwrap().unwrap();
        let mut buf = Vec::new();
        write_styled(&mut buf, &grid, Some(&path)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches('#').count(), 8);
        assert_eq!(text.matches('S').count(), 1);
        assert_eq!(text.matches('\n').count(), 3);
    }
}
