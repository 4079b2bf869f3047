//! Print every rideable route between two stops of the sample network.
//!
//! ```text
//! cargo run --bin transit -- J D
//! ```

use std::error::Error;

use clap::Parser;
use pathlab_transit::sample_network;

#[derive(Parser)]
#[command(name = "transit")]
#[command(about = "List bus routes between two stops of the sample network")]
struct Args {
    /// Departure stop
    #[arg(default_value = "J")]
    from: String,

    /// Destination stop
    #[arg(default_value = "D")]
    to: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let network = sample_network()?;
    let routes = network.build_routes_by_name(&args.from, &args.to)?;
    if routes.is_empty() {
        println!("no route from {} to {}", args.from, args.to);
        return Ok(());
    }
    for (i, route) in routes.iter().enumerate() {
        println!("{}. {}", i + 1, route.display(&network));
    }
    Ok(())
}
