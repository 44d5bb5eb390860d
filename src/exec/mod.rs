//! Subprocess and search-path access, kept behind traits so the probe
//! runner can be driven by fakes in tests.

pub mod executor;
pub mod locator;

pub use executor::{CommandExecutor, CommandOutput, SystemExecutor};
pub use locator::{Locator, SystemLocator};
