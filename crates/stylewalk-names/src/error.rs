//! Error types for dotted name validation.

use thiserror::Error;

/// Errors returned by the strict name constructor [`DottedName::parse`](crate::DottedName::parse).
///
/// The lenient conversions (`From<&str>`, `From<String>`) never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name has no characters at all.
    #[error("dotted name is empty")]
    Empty,

    /// A segment between two separators (or at either end) is empty.
    #[error("empty segment at position {position} in '{name}'")]
    EmptySegment { name: String, position: usize },

    /// The name contains whitespace or a control character.
    #[error("invalid character {character:?} in '{name}'")]
    InvalidCharacter { name: String, character: char },
}

/// Result type for name operations.
pub type Result<T> = std::result::Result<T, NameError>;
