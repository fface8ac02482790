//! CLI entry point for the cube maze generator

use clap::Parser;
use cubemaze::io::cli::{Cli, MazeRunner};

fn main() -> cubemaze::Result<()> {
    let cli = Cli::parse();
    let mut runner = MazeRunner::new(cli);
    runner.run().map(|_| ())
}
