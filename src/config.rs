//! Configuration for the demo CLI
//!
//! There are no configuration files. Everything comes from built-in defaults
//! and, for logging, the environment.

use std::env;

/// Environment variable holding the log filter directives
pub const LOG_ENV_VAR: &str = "CLIDEMO_LOG";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Display name used in the help banner and `--version`
    pub app_name: String,
    /// Version reported by `--version`
    pub version: String,
    /// How the program is invoked, as shown in usage lines and examples
    pub program: String,
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "CliDemo".to_string(),
            version: "1.0".to_string(),
            program: env!("CARGO_PKG_NAME").to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Build configuration from defaults and the process environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(filter) = env::var(LOG_ENV_VAR).ok().filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        config
    }

    /// The line printed for `--version`
    pub fn version_line(&self) -> String {
        format!("{} {}", self.app_name, self.version)
    }
}
