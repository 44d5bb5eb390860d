use crate::error::EnvProbeError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a EnvProbeError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a EnvProbeError) -> Self {
        let (suggestion, details) = match error {
            EnvProbeError::SystemError(msg) => {
                let details = Some(format!("System introspection failed: {msg}"));
                (None, details)
            }
            EnvProbeError::Internal(msg) => {
                let suggestion = Some(
                    "This is a bug in envprobe. Please report it with the full output."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            EnvProbeError::Io(_) => (None, None),
        };

        Self {
            error,
            suggestion,
            details,
        }
    }
}

impl fmt::Display for ErrorContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n{details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

pub fn format_error_chain(error: &EnvProbeError) -> String {
    ErrorContext::new(error).to_string()
}
