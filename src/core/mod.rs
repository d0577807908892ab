//! Core functionality for the demo commands
//!
//! Contains the command handlers, number handling for `sum`, and the fixed
//! text blocks.

pub mod handlers;
pub mod number;
pub mod text;

pub use handlers::{echo, greet, sum};
pub use text::{default_message, help_text};
