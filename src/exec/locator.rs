use log::trace;
use std::path::PathBuf;

pub trait Locator {
    /// Resolve an executable name against the search path. `None` means the
    /// tool is not installed, never an error.
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

/// Locator backed by the real PATH. The `which` crate handles the
/// platform conventions (PATHEXT and the `.exe` suffix on Windows).
pub struct SystemLocator;

impl Locator for SystemLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        match which::which(name) {
            Ok(path) => {
                trace!("Located {name} at {}", path.display());
                Some(path)
            }
            Err(_) => None,
        }
    }
}
