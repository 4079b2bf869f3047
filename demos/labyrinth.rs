//! Run BFS, DFS and A* over the sample mazes (or a generated one) and
//! print the paths they find.
//!
//! ```text
//! cargo run --bin labyrinth -- --strategy astar --maze 2 --render
//! cargo run --bin labyrinth -- --seed 42 --size 20 --render
//! ```

use std::error::Error;
use std::io;

use clap::Parser;
use pathlab_demos::{LabyrinthArgs, overlay, select_mazes, write_styled};
use pathlab_paths::{GridPather, search};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = LabyrinthArgs::parse();
    let mut stdout = io::stdout();

    for maze in select_mazes(&args)? {
        for strategy in args.strategies() {
            let path = search(&maze.grid, maze.start, maze.goal, strategy)?;
            match &path {
                Some(path) => {
                    let cost = path.cost(&GridPather::new(&maze.grid));
                    println!(
                        "{}, {strategy}: {} steps, cost {cost}: {path}",
                        maze.name,
                        path.steps()
                    );
                }
                None => println!(
                    "{}, {strategy}: no path from {} to {}",
                    maze.name, maze.start, maze.goal
                ),
            }
            if args.render {
                if args.no_color {
                    println!("{}", overlay(&maze.grid, path.as_ref()));
                } else {
                    write_styled(&mut stdout, &maze.grid, path.as_ref())?;
                }
                println!();
            }
        }
    }
    Ok(())
}
