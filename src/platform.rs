//! Platform detection utilities.
//!
//! Probes carry a platform gate, so the running OS is detected once and
//! threaded through the environment snapshot instead of queried ad hoc.

use std::env;

/// The operating system envprobe is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Macos,
    Windows,
    Linux,
    Other,
}

impl HostOs {
    /// Detect the OS of the current process.
    pub fn current() -> Self {
        Self::from_os_name(env::consts::OS)
    }

    /// Map a `std::env::consts::OS` style name to a known OS.
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "macos" => HostOs::Macos,
            "windows" => HostOs::Windows,
            "linux" => HostOs::Linux,
            _ => HostOs::Other,
        }
    }

    pub fn is_mac(self) -> bool {
        self == HostOs::Macos
    }

    pub fn is_windows(self) -> bool {
        self == HostOs::Windows
    }
}
