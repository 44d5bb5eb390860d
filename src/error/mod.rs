mod exit_codes;
mod format;

pub use exit_codes::get_exit_code;
pub use format::{ErrorContext, format_error_chain};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvProbeError {
    #[error("System error: {0}")]
    SystemError(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EnvProbeError>;
