//! Probe definitions and results.
//!
//! A probe describes one environment check: what to look for, how to check
//! it, and where it is allowed to run. The registry of probes is the single
//! source of truth for what the report contains and in which order.

use crate::platform::HostOs;
use std::fmt;

pub mod extract;
pub mod registry;
pub mod runner;

pub use extract::ExtractionRule;
pub use registry::registry;
pub use runner::ProbeRunner;

/// Sentinel for a tool that was checked and is missing.
pub const NOT_INSTALLED: &str = "not installed";
/// Sentinel for output that did not match the probe's extraction rule.
pub const UNKNOWN_VERSION: &str = "unknown";
/// Sentinel for rows that have no meaningful version.
pub const NO_VERSION: &str = "-";

/// Report section a probe belongs to. `all()` is the rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    System,
    Runtime,
    HostCli,
    Android,
    Ios,
}

impl Section {
    pub fn all() -> [Section; 5] {
        [
            Section::System,
            Section::Runtime,
            Section::HostCli,
            Section::Android,
            Section::Ios,
        ]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::System => write!(f, "System"),
            Section::Runtime => write!(f, "JavaScript"),
            Section::HostCli => write!(f, "CLI"),
            Section::Android => write!(f, "Android"),
            Section::Ios => write!(f, "iOS"),
        }
    }
}

/// Platform applicability of a probe. A rejected probe is skipped outright
/// and produces no result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformGate {
    Always,
    MacOnly,
    WindowsOnly,
}

impl PlatformGate {
    pub fn accepts(self, os: HostOs) -> bool {
        match self {
            PlatformGate::Always => true,
            PlatformGate::MacOnly => os.is_mac(),
            PlatformGate::WindowsOnly => os.is_windows(),
        }
    }
}

/// A machine fact resolved from the environment snapshot, no subprocess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemFact {
    Platform,
    Arch,
    Cpu,
    WorkingDirectory,
    CliVersion,
    AndroidHome,
}

/// How to obtain a version string once a tool has been located.
#[derive(Debug, Clone, Copy)]
pub struct VersionQuery {
    pub args: &'static [&'static str],
    pub rule: ExtractionRule,
}

#[derive(Debug, Clone, Copy)]
pub enum ProbeKind {
    Fact(SystemFact),
    Tool {
        locator_name: &'static str,
        version: Option<VersionQuery>,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub name: &'static str,
    pub section: Section,
    pub gate: PlatformGate,
    pub kind: ProbeKind,
}

/// Outcome of one probe. Exactly one per probe whose gate accepts the
/// current OS; gated-out probes produce none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub name: &'static str,
    pub section: Section,
    pub located: bool,
    pub path: String,
    pub version: String,
    pub detail: String,
}
