//! colorcloud CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, plot one image and exit
//! with an appropriate status. For programmatic use, prefer the library API
//! (`colorcloud::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
