//! CLI entry point for vertex-model snapshot analysis

use clap::Parser;
use vertexstats::io::cli::{Cli, SnapshotProcessor};

fn main() -> vertexstats::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut processor = SnapshotProcessor::new(cli);
    processor.process()
}
