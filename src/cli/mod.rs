//! Command-line interface module
//!
//! Provides argument collection and command dispatch.

pub mod args;
pub mod commands;

pub use args::{Args, parse_args};
pub use commands::{CommandKind, Invocation, Outcome, execute_command, run};
