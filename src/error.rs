//! Error types for building and writing SVG documents

use thiserror::Error;

use crate::geometry::Axis;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SvgError>;

/// Errors raised while constructing values or writing a document
#[derive(Debug, Error)]
pub enum SvgError {
    /// A value of the wrong kind was supplied
    #[error("expected {expected}, got {found}")]
    WrongKind {
        expected: &'static str,
        found: String,
    },

    /// Horizontal and vertical extents were combined
    #[error("can't mix axis types - expected {expected} got {found}")]
    AxisMismatch { expected: Axis, found: Axis },

    /// Lookup of an attribute that was never set
    #[error("attribute '{0}' is not set")]
    AttributeNotFound(String),

    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse write configuration TOML: {0}")]
    Config(#[from] toml::de::Error),
}

impl SvgError {
    /// Create a wrong-kind error
    pub fn wrong_kind(expected: &'static str, found: impl Into<String>) -> Self {
        Self::WrongKind {
            expected,
            found: found.into(),
        }
    }

    /// Create an attribute-not-found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::AttributeNotFound(name.into())
    }
}
