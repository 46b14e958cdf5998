use clap::Parser;

use landmapper::cli::{self, Args};
use landmapper::init_logging;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging()?;

    let stdout = std::io::stdout();
    cli::run(args, &mut stdout.lock())
}
