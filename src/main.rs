#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use redstone_console::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Initialize configuration
    let config = Config::from_args(&args)?;

    // Run the console front end
    let command = args.command.clone().unwrap_or_default();
    cli::execute_command(&config, &command)
}
