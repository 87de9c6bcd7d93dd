//! CLI entry point for the pattern compositing tool

use clap::Parser;
use pixstudio::io::cli::{Cli, Outcome, StudioProcessor};

// The written path is the tool's output
#[allow(clippy::print_stdout)]
fn main() -> pixstudio::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let processor = StudioProcessor::new(cli);
    let outcome = processor.process()?;

    match outcome {
        Outcome::Exported(path) | Outcome::Ran(path) => println!("{}", path.display()),
    }

    Ok(())
}
