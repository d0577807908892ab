use anyhow::{Context, Result};
use clidemo::{cli, config::Config, setup_logging, utils::HostEnvironment};
use std::io::{self, Write};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Logging goes to stderr, filtered by CLIDEMO_LOG
    let config = Config::from_env();
    setup_logging(&config.log_filter)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Input errors and unknown commands still exit with status 0
    cli::run(&args.words(), &config, &HostEnvironment::new(), &mut out)?;
    out.flush().context("Failed to flush standard output")
}
