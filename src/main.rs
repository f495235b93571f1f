//! CLI entry point for the mask-guided pixel compositing tool

use clap::Parser;
use maskfill::io::cli::{Cli, FileProcessor};

fn main() -> maskfill::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
