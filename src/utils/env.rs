//! Host environment queries
//!
//! The default message reports a few facts about the machine it runs on.
//! They sit behind [`EnvironmentInfo`] so tests can pin them down.

use std::env;
use tracing::{debug, warn};

/// Shown when the working directory cannot be determined
const UNKNOWN: &str = "<unknown>";

/// Read-only facts about the host the program runs on
pub trait EnvironmentInfo {
    /// Current working directory of the process
    fn working_directory(&self) -> String;
    /// Version of the toolchain the binary was built with
    fn runtime_version(&self) -> String;
    /// Operating system name
    fn os_name(&self) -> String;
}

/// Queries the live process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct HostEnvironment;

impl HostEnvironment {
    /// Create a new host environment probe
    pub const fn new() -> Self {
        Self
    }
}

impl EnvironmentInfo for HostEnvironment {
    fn working_directory(&self) -> String {
        match env::current_dir() {
            Ok(dir) => dir.display().to_string(),
            Err(e) => {
                warn!("Failed to read working directory: {}", e);
                UNKNOWN.to_string()
            }
        }
    }

    fn runtime_version(&self) -> String {
        let version = option_env!("CLIDEMO_RUSTC_VERSION").unwrap_or(UNKNOWN);
        debug!("Runtime version: {}", version);
        version.to_string()
    }

    fn os_name(&self) -> String {
        os_display_name(env::consts::OS).to_string()
    }
}

/// Human-facing name for a `std::env::consts::OS` value
pub fn os_display_name(os: &str) -> &str {
    match os {
        "linux" => "Linux",
        "macos" => "macOS",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        "android" => "Android",
        "ios" => "iOS",
        other => other,
    }
}

/// Fixed environment facts, for tests and reproducible output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticEnvironment {
    pub working_directory: String,
    pub runtime_version: String,
    pub os_name: String,
}

impl EnvironmentInfo for StaticEnvironment {
    fn working_directory(&self) -> String {
        self.working_directory.clone()
    }

    fn runtime_version(&self) -> String {
        self.runtime_version.clone()
    }

    fn os_name(&self) -> String {
        self.os_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_working_directory_matches_process() {
        let expected = env::current_dir().unwrap().display().to_string();
        assert_eq!(HostEnvironment::new().working_directory(), expected);
    }

    #[test]
    fn test_host_values_are_not_empty() {
        let host = HostEnvironment::new();
        assert!(!host.runtime_version().is_empty());
        assert!(!host.os_name().is_empty());
    }

    #[test]
    fn test_os_display_name() {
        assert_eq!(os_display_name("linux"), "Linux");
        assert_eq!(os_display_name("macos"), "macOS");
        assert_eq!(os_display_name("haiku"), "haiku");
    }

    #[test]
    fn test_static_environment() {
        let env = StaticEnvironment {
            working_directory: "/work".to_string(),
            runtime_version: "1.85.0".to_string(),
            os_name: "Linux".to_string(),
        };
        assert_eq!(env.working_directory(), "/work");
        assert_eq!(env.runtime_version(), "1.85.0");
        assert_eq!(env.os_name(), "Linux");
    }
}
