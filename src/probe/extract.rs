//! Version extraction rules.
//!
//! Tools report their version in wildly different shapes, so each probe
//! picks one of a small closed set of rules instead of ad hoc string
//! surgery. A rule that does not match yields `None`, never a panic; the
//! runner maps that to a placeholder.

/// Strategy for pulling a version token out of raw command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionRule {
    /// Trim the output and drop a known leading prefix (e.g. node's "v").
    /// An empty prefix means plain trim.
    TrimStripPrefix { prefix: &'static str },
    /// Contents of the first double-quoted span, for tools like `java
    /// -version` that wrap the version in quotes on the error stream.
    QuotedSubstring,
    /// Fixed whitespace-separated token, for prose version lines like
    /// "Xcode 15.0 Build version 15A240d".
    WhitespaceToken { index: usize },
}

pub fn extract(raw: &str, rule: ExtractionRule) -> Option<String> {
    match rule {
        ExtractionRule::TrimStripPrefix { prefix } => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(trimmed.strip_prefix(prefix).unwrap_or(trimmed).to_string())
        }
        ExtractionRule::QuotedSubstring => {
            let start = raw.find('"')?;
            let rest = &raw[start + 1..];
            let end = rest.find('"')?;
            let token = &rest[..end];
            if token.is_empty() {
                None
            } else {
                Some(token.to_string())
            }
        }
        ExtractionRule::WhitespaceToken { index } => raw
            .split_whitespace()
            .nth(index)
            .map(|token| token.to_string()),
    }
}
