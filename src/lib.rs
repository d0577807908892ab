//! # CliDemo
//!
//! A small command-line demonstration utility. The first argument selects
//! a behavior and everything is printed to standard output.
//!
//! ## Commands
//!
//! - no arguments: a greeting plus a few facts about the host
//! - `--help`, `-h`, `-?`: usage text
//! - `--version`: `CliDemo 1.0`
//! - `greet <name>`, `sum <numbers...>`, `echo <text...>`
//!
//! ## Example
//!
//! ```
//! use clidemo::{cli, config::Config, utils::HostEnvironment};
//!
//! let args = vec!["sum".to_string(), "3".to_string(), "4.5".to_string()];
//! let mut out = Vec::new();
//! cli::run(&args, &Config::default(), &HostEnvironment::new(), &mut out)?;
//! assert_eq!(String::from_utf8(out)?, "7.5\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging on stderr so stdout carries only command output
pub fn setup_logging(filter: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(EnvFilter::new(filter))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
