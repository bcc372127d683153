//! Privilege error types.

use thiserror::Error;

/// Errors raised while wiring or evaluating an authorization decision.
///
/// Every variant signals broken policy wiring rather than a negative
/// decision. An ordinary denial is reported through
/// [`Decision::Deny`](crate::Decision::Deny) instead.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The resource, subject or action is wired incorrectly.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A relation was resolved in a named context that was never registered.
    #[error("unknown context {0:?}")]
    UnknownContext(String),

    /// A relation matches neither its context nor the default vocabulary.
    #[error("unknown relation {relation:?} in context {context:?}")]
    UnknownRelation { relation: String, context: String },

    /// Failed to parse a registry configuration or an ordinal name.
    #[error("failed to parse: {0}")]
    Parse(String),

    /// An I/O error occurred while reading a registry configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for the errors produced by a decision whose wiring is
    /// broken (as opposed to loading failures).
    pub fn is_wiring_defect(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::UnknownContext(_) | Self::UnknownRelation { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_relation_display() {
        let err = Error::UnknownRelation {
            relation: "stranger".to_string(),
            context: "group".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("stranger"), "got: {msg}");
        assert!(msg.contains("group"), "got: {msg}");
        assert!(err.is_wiring_defect());
    }

    #[test]
    fn loading_errors_are_not_wiring_defects() {
        assert!(!Error::Parse("bad".to_string()).is_wiring_defect());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(!Error::from(io).is_wiring_defect());
    }
}
