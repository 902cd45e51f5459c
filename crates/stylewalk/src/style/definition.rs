//! Style definitions and their YAML forms.
//!
//! A [`StyleDefinition`] carries the one attribute inheritance cares about:
//! an optional explicit parent. When no parent is declared, the parent is
//! implied by the style's name (`Theme.AppCompat.Light` → `Theme.AppCompat`).
//!
//! # YAML Formats
//!
//! ```yaml
//! # Root or convention-only style
//! Theme.AppCompat: ~
//!
//! # Shorthand - string value is the explicit parent
//! AppTheme: Theme.AppCompat.Light
//!
//! # Full definition
//! AppTheme.Dialog:
//!   parent: Theme.AppCompat.Dialog
//! ```

use serde::Serialize;
use stylewalk_names::DottedName;

use crate::error::StylesheetError;

/// The parent-related part of a style.
///
/// # Example
///
/// ```rust
/// use stylewalk::StyleDefinition;
///
/// let def = StyleDefinition::with_parent("Theme.AppCompat.Light");
/// assert_eq!(def.parent().map(|p| p.as_str()), Some("Theme.AppCompat.Light"));
///
/// // An empty parent means "no explicit parent"
/// assert!(StyleDefinition::with_parent("").parent().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct StyleDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<DottedName>,
}

impl StyleDefinition {
    /// A definition without an explicit parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// A definition with an explicit parent. An empty name clears it.
    pub fn with_parent(parent: impl Into<DottedName>) -> Self {
        let parent: DottedName = parent.into();
        Self {
            parent: (!parent.is_empty()).then_some(parent),
        }
    }

    /// The explicit parent, if one is declared.
    pub fn parent(&self) -> Option<&DottedName> {
        self.parent.as_ref()
    }

    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_ref().map(DottedName::as_str)
    }

    pub fn has_explicit_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Parses a YAML value into a definition.
    ///
    /// Accepts null, a string (the parent), or a mapping with an optional
    /// `parent` key.
    pub fn parse(value: &serde_yaml::Value, style_name: &str) -> Result<Self, StylesheetError> {
        match value {
            serde_yaml::Value::Null => Ok(Self::new()),
            serde_yaml::Value::String(s) => Self::parse_parent(s, style_name),
            serde_yaml::Value::Mapping(map) => Self::parse_mapping(map, style_name),
            _ => Err(StylesheetError::InvalidDefinition {
                style: style_name.to_string(),
                message: format!("Expected null, string or mapping, got {:?}", value),
                path: None,
            }),
        }
    }

    fn parse_parent(s: &str, style_name: &str) -> Result<Self, StylesheetError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::new());
        }
        let parent = DottedName::parse(s).map_err(|e| StylesheetError::InvalidDefinition {
            style: style_name.to_string(),
            message: format!("invalid parent '{}': {}", s, e),
            path: None,
        })?;
        Ok(Self::with_parent(parent))
    }

    fn parse_mapping(map: &serde_yaml::Mapping, style_name: &str) -> Result<Self, StylesheetError> {
        let mut definition = Self::new();

        for (key, value) in map {
            match key.as_str() {
                Some("parent") => {
                    definition = match value {
                        serde_yaml::Value::Null => Self::new(),
                        serde_yaml::Value::String(s) => Self::parse_parent(s, style_name)?,
                        other => {
                            return Err(StylesheetError::InvalidDefinition {
                                style: style_name.to_string(),
                                message: format!("'parent' must be a string, got {:?}", other),
                                path: None,
                            })
                        }
                    };
                }
                Some(other) => {
                    return Err(StylesheetError::InvalidDefinition {
                        style: style_name.to_string(),
                        message: format!("unknown key '{}'", other),
                        path: None,
                    })
                }
                None => {
                    return Err(StylesheetError::InvalidDefinition {
                        style: style_name.to_string(),
                        message: format!("keys must be strings, got {:?}", key),
                        path: None,
                    })
                }
            }
        }

        Ok(definition)
    }
}

impl From<&str> for StyleDefinition {
    fn from(parent: &str) -> Self {
        Self::with_parent(parent)
    }
}

impl From<String> for StyleDefinition {
    fn from(parent: String) -> Self {
        Self::with_parent(parent)
    }
}

impl From<DottedName> for StyleDefinition {
    fn from(parent: DottedName) -> Self {
        Self::with_parent(parent)
    }
}

impl From<Option<&str>> for StyleDefinition {
    fn from(parent: Option<&str>) -> Self {
        parent.map(Self::with_parent).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> serde_yaml::Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_null_has_no_parent() {
        let def = StyleDefinition::parse(&serde_yaml::Value::Null, "Theme").unwrap();
        assert!(!def.has_explicit_parent());
    }

    #[test]
    fn test_parse_string_is_parent() {
        let value = serde_yaml::Value::String("Theme.AppCompat.Light".into());
        let def = StyleDefinition::parse(&value, "AppTheme").unwrap();
        assert_eq!(def.parent_name(), Some("Theme.AppCompat.Light"));
    }

    #[test]
    fn test_parse_string_is_trimmed() {
        let value = serde_yaml::Value::String("  Theme.AppCompat  ".into());
        let def = StyleDefinition::parse(&value, "AppTheme").unwrap();
        assert_eq!(def.parent_name(), Some("Theme.AppCompat"));
    }

    #[test]
    fn test_parse_empty_string_has_no_parent() {
        let value = serde_yaml::Value::String("".into());
        let def = StyleDefinition::parse(&value, "AppTheme").unwrap();
        assert!(!def.has_explicit_parent());
    }

    #[test]
    fn test_parse_mapping_with_parent() {
        let def = StyleDefinition::parse(&yaml("parent: Theme.AppCompat.Dialog"), "Dialog").unwrap();
        assert_eq!(def.parent_name(), Some("Theme.AppCompat.Dialog"));
    }

    #[test]
    fn test_parse_empty_mapping() {
        let def = StyleDefinition::parse(&yaml("{}"), "Widget.Button").unwrap();
        assert!(!def.has_explicit_parent());
    }

    #[test]
    fn test_parse_mapping_null_parent() {
        let def = StyleDefinition::parse(&yaml("parent: ~"), "Theme").unwrap();
        assert!(!def.has_explicit_parent());
    }

    #[test]
    fn test_parse_unknown_key_fails() {
        let err = StyleDefinition::parse(&yaml("color: red"), "AppTheme").unwrap_err();
        assert!(matches!(
            err,
            StylesheetError::InvalidDefinition { ref message, .. } if message.contains("color")
        ));
    }

    #[test]
    fn test_parse_malformed_parent_fails() {
        let value = serde_yaml::Value::String("Theme..Light".into());
        let err = StyleDefinition::parse(&value, "AppTheme").unwrap_err();
        assert!(err.to_string().contains("AppTheme"));
    }

    #[test]
    fn test_parse_number_fails() {
        let err = StyleDefinition::parse(&yaml("42"), "AppTheme").unwrap_err();
        assert!(matches!(err, StylesheetError::InvalidDefinition { .. }));
    }

    #[test]
    fn test_from_option() {
        assert!(!StyleDefinition::from(None::<&str>).has_explicit_parent());
        assert!(StyleDefinition::from(Some("Theme")).has_explicit_parent());
    }
}
