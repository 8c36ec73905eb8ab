//! Error types for markup operations

use thiserror::Error;

/// The only failure the markup core reports.
///
/// Rendering itself is total: malformed sigils degrade to literal text. An
/// error is raised only when the caller hands over something that is not
/// acceptable text in the first place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// Input rejected before rendering (not UTF-8, or over the length limit)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl MarkupError {
    pub(crate) fn input_too_long(length: usize, limit: usize) -> Self {
        MarkupError::InvalidArgument(format!(
            "input is {length} characters long, the limit is {limit}"
        ))
    }
}
