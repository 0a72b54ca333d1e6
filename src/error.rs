//! Error types for the sketch core.
//!
//! Per-event failures are local to the event that produced them: no handler
//! error may corrupt the session map or leave a half-created stroke attached
//! to the surface.

use thiserror::Error;

/// Errors that can occur while parsing path data or configuration.
#[derive(Error, Debug)]
pub enum SketchError {
    /// A path string could not be decoded back into coordinates.
    ///
    /// Raised instead of silently coercing bad tokens to NaN.
    #[error("malformed path data at {fragment:?}: {reason}")]
    MalformedPath {
        /// Why parsing failed
        reason: String,
        /// The offending command fragment
        fragment: String,
    },

    /// An eraser mode value outside of `object` / `pixel`.
    #[error("invalid eraser mode {0:?} (expected \"object\" or \"pixel\")")]
    InvalidEraserMode(String),
}

impl SketchError {
    pub(crate) fn malformed(reason: impl Into<String>, fragment: &str) -> Self {
        Self::MalformedPath {
            reason: reason.into(),
            fragment: fragment.to_string(),
        }
    }
}

/// Result type alias for sketch operations
pub type SketchResult<T> = Result<T, SketchError>;
