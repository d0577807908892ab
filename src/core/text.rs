//! Fixed text blocks: the no-argument greeting and the help screen

use crate::{config::Config, utils::EnvironmentInfo};

/// Output for a run without arguments
pub fn default_message(config: &Config, env: &dyn EnvironmentInfo) -> String {
    let program = &config.program;
    [
        "Hello from the CLI!".to_string(),
        "You ran the program without any arguments.".to_string(),
        "Try for example:".to_string(),
        format!("  {program} --help"),
        format!("  {program} greet Alice"),
        format!("  {program} sum 3 4.5 10"),
        format!("  {program} echo Hello there"),
        String::new(),
        format!("Working directory: {}", env.working_directory()),
        format!("Rust version: {}", env.runtime_version()),
        format!("Operating system: {}", env.os_name()),
    ]
    .join("\n")
}

/// Output for `--help`, `-h` and `-?`
pub fn help_text(config: &Config) -> String {
    let program = &config.program;
    [
        format!("{} - a simple command-line utility", config.app_name),
        String::new(),
        "Usage:".to_string(),
        format!("  {program} [command] [arguments]"),
        String::new(),
        "Commands:".to_string(),
        "  greet <name>         Prints a greeting to <name>".to_string(),
        "  sum <numbers...>     Sums numbers (integers/decimals)".to_string(),
        "  echo <text...>       Prints the given text as-is".to_string(),
        String::new(),
        "Flags:".to_string(),
        "  --help, -h, -?       Show this help".to_string(),
        "  --version            Show version".to_string(),
        String::new(),
        "Examples:".to_string(),
        format!("  {program}"),
        format!("  {program} --help"),
        format!("  {program} greet Alice"),
        format!("  {program} sum 3 4.5 10"),
        format!("  {program} echo \"Hello world\""),
    ]
    .join("\n")
}
