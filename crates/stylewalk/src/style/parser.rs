//! YAML stylesheet parsing.
//!
//! A stylesheet is a mapping from style name to definition. Keys must be
//! well-formed dotted names; values follow the forms documented in
//! [`definition`](super::definition).

use stylewalk_names::DottedName;

use super::definition::StyleDefinition;
use super::registry::Styles;
use crate::error::StylesheetError;

/// Parses a YAML stylesheet into a [`Styles`] registry.
///
/// An empty document yields an empty registry.
///
/// # Errors
///
/// - [`StylesheetError::Parse`] for invalid YAML or a non-mapping document
/// - [`StylesheetError::InvalidName`] for malformed style names
/// - [`StylesheetError::InvalidDefinition`] for malformed values
pub fn parse_stylesheet(yaml: &str) -> Result<Styles, StylesheetError> {
    let root: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
            path: None,
            message: e.to_string(),
        })?;

    if root.is_null() {
        return Ok(Styles::new());
    }

    let mapping = root.as_mapping().ok_or_else(|| StylesheetError::Parse {
        path: None,
        message: "Stylesheet must be a YAML mapping".to_string(),
    })?;

    let mut styles = Styles::new();

    for (key, value) in mapping {
        let name = key.as_str().ok_or_else(|| StylesheetError::Parse {
            path: None,
            message: format!("Style name must be a string, got {:?}", key),
        })?;

        let name = DottedName::parse(name).map_err(|source| StylesheetError::InvalidName {
            style: name.to_string(),
            source,
            path: None,
        })?;

        let definition = StyleDefinition::parse(value, name.as_str())?;
        styles.insert(name.as_str(), definition);
    }

    Ok(styles)
}
