//! Style-related error types.
//!
//! This module contains errors for both repository validation and stylesheet
//! parsing. The inheritance walk itself never fails; these errors only come
//! from loading and checking style data.

use std::path::PathBuf;

use stylewalk_names::NameError;

/// Error returned when style validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValidationError {
    /// An explicit parent references a style that doesn't exist
    UnresolvedParent { from: String, to: String },
    /// A cycle was detected while following explicit parents
    CycleDetected { path: Vec<String> },
}

impl std::fmt::Display for StyleValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValidationError::UnresolvedParent { from, to } => {
                write!(f, "style '{}' has non-existent parent '{}'", from, to)
            }
            StyleValidationError::CycleDetected { path } => {
                write!(f, "cycle detected in style parents: {}", path.join(" -> "))
            }
        }
    }
}

impl std::error::Error for StyleValidationError {}

/// Error type for stylesheet loading failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetError {
    /// YAML parse error.
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },

    /// A style key is not a well-formed dotted name.
    InvalidName {
        /// The offending key.
        style: String,
        /// Why the name was rejected.
        source: NameError,
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// Invalid style definition structure.
    InvalidDefinition {
        /// Style name where the error occurred.
        style: String,
        /// Description of what was wrong.
        message: String,
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// Parent validation error (dangling reference or cycle).
    ParentError {
        /// The underlying validation error.
        source: StyleValidationError,
    },

    /// File loading error.
    Load {
        /// Error message from the file loader.
        message: String,
    },

    /// Writing a registry back out as YAML failed.
    Serialize {
        /// Error message from the YAML emitter.
        message: String,
    },
}

impl StylesheetError {
    /// Attaches a source file path to errors that carry one.
    pub(crate) fn with_path(self, file: &std::path::Path) -> Self {
        let file = Some(file.to_path_buf());
        match self {
            StylesheetError::Parse { message, .. } => StylesheetError::Parse {
                path: file,
                message,
            },
            StylesheetError::InvalidName { style, source, .. } => StylesheetError::InvalidName {
                style,
                source,
                path: file,
            },
            StylesheetError::InvalidDefinition { style, message, .. } => {
                StylesheetError::InvalidDefinition {
                    style,
                    message,
                    path: file,
                }
            }
            other => other,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl std::fmt::Display for StylesheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StylesheetError::Parse { path, message } => {
                if let Some(p) = path {
                    write!(f, "Failed to parse stylesheet {}: {}", p.display(), message)
                } else {
                    write!(f, "Failed to parse stylesheet: {}", message)
                }
            }
            StylesheetError::InvalidName {
                style,
                source,
                path,
            } => {
                write!(
                    f,
                    "Invalid style name '{}'{}: {}",
                    style,
                    location(path),
                    source
                )
            }
            StylesheetError::InvalidDefinition {
                style,
                message,
                path,
            } => {
                write!(
                    f,
                    "Invalid definition for style '{}'{}: {}",
                    style,
                    location(path),
                    message
                )
            }
            StylesheetError::ParentError { source } => {
                write!(f, "Style parent error: {}", source)
            }
            StylesheetError::Load { message } => {
                write!(f, "Failed to load stylesheet: {}", message)
            }
            StylesheetError::Serialize { message } => {
                write!(f, "Failed to write stylesheet: {}", message)
            }
        }
    }
}

impl std::error::Error for StylesheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StylesheetError::ParentError { source } => Some(source),
            StylesheetError::InvalidName { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<StyleValidationError> for StylesheetError {
    fn from(source: StyleValidationError) -> Self {
        StylesheetError::ParentError { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unresolved_parent_error_display() {
        let err = StyleValidationError::UnresolvedParent {
            from: "AppTheme".to_string(),
            to: "Theme.Missing".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("AppTheme"));
        assert!(msg.contains("Theme.Missing"));
    }

    #[test]
    fn test_cycle_detected_error_display() {
        let err = StyleValidationError::CycleDetected {
            path: vec!["A".to_string(), "B".to_string(), "A".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("cycle"));
        assert!(msg.contains("A -> B -> A"));
    }

    #[test]
    fn test_invalid_definition_includes_path() {
        let err = StylesheetError::InvalidDefinition {
            style: "AppTheme".to_string(),
            message: "unknown key 'color'".to_string(),
            path: None,
        }
        .with_path(std::path::Path::new("themes/app.yaml"));
        let msg = err.to_string();
        assert!(msg.contains("themes/app.yaml"));
        assert!(msg.contains("unknown key 'color'"));
    }

    #[test]
    fn test_serialize_error_display() {
        let err = StylesheetError::Serialize {
            message: "emitter failed".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to write stylesheet: emitter failed");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parent_error_has_source() {
        let err: StylesheetError = StyleValidationError::CycleDetected {
            path: vec!["A".to_string(), "A".to_string()],
        }
        .into();
        assert!(err.source().is_some());
    }
}
