//! Utility modules for common functionality
//!
//! Provides access to the host environment.

pub mod env;

pub use env::{EnvironmentInfo, HostEnvironment, StaticEnvironment};
