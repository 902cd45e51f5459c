//! In-memory style registry.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use stylewalk_names::DottedName;

use super::definition::StyleDefinition;
use super::parser::parse_stylesheet;
use super::repository::StyleRepository;
use crate::error::{StyleValidationError, StylesheetError};

/// A collection of named style definitions.
///
/// This is the default [`StyleRepository`]: styles are registered by name,
/// each with an optional explicit parent.
///
/// # Example
///
/// ```rust
/// use stylewalk::{resolves_to_family, Styles};
///
/// let styles = Styles::new()
///     .add_root("Theme.AppCompat")
///     .add("AppTheme", "Theme.AppCompat.Light")
///     .add("AppTheme.NoActionBar", "Theme.AppCompat.NoActionBar");
///
/// assert!(resolves_to_family("AppTheme", "Theme.AppCompat", &styles));
/// assert!(styles.validate().is_err()); // Theme.AppCompat.Light is not registered
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Styles {
    styles: HashMap<String, StyleDefinition>,
}

impl Styles {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style. Returns self for chaining.
    ///
    /// The value can be a full [`StyleDefinition`] or a `&str`/`String`
    /// naming the explicit parent.
    ///
    /// If a style with the same name exists, it is replaced.
    pub fn add<V: Into<StyleDefinition>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a style without an explicit parent.
    pub fn add_root(self, name: &str) -> Self {
        self.add(name, StyleDefinition::new())
    }

    /// Adds or replaces a named style in place.
    pub fn insert<V: Into<StyleDefinition>>(&mut self, name: &str, value: V) {
        self.styles.insert(name.to_string(), value.into());
    }

    /// Loads a registry from a YAML stylesheet.
    ///
    /// ```rust
    /// use stylewalk::Styles;
    ///
    /// let styles = Styles::from_yaml(r#"
    /// Theme.AppCompat: ~
    /// AppTheme: Theme.AppCompat.Light
    /// AppTheme.Dialog:
    ///   parent: Theme.AppCompat.Dialog
    /// "#).unwrap();
    ///
    /// assert_eq!(styles.len(), 3);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, StylesheetError> {
        parse_stylesheet(yaml)
    }

    /// Loads a registry from a YAML stylesheet file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| StylesheetError::Load {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        let styles = parse_stylesheet(&content).map_err(|e| e.with_path(path))?;
        tracing::debug!(
            path = %path.display(),
            styles = styles.len(),
            "loaded stylesheet"
        );
        Ok(styles)
    }

    pub fn get(&self, name: &str) -> Option<&StyleDefinition> {
        self.styles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Style names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Merges another registry into this one.
    ///
    /// Styles from `other` take precedence over styles in `self`.
    pub fn merge(mut self, other: Styles) -> Self {
        self.styles.extend(other.styles);
        self
    }

    /// Adds styles from `other` that are not already defined here.
    pub(crate) fn merge_missing(&mut self, other: Styles) {
        for (name, definition) in other.styles {
            self.styles.entry(name).or_insert(definition);
        }
    }

    /// Serializes the registry back to YAML, names sorted.
    ///
    /// Styles without an explicit parent are written as `{}`.
    ///
    /// Names are written as stored. Styles added in code skip the name checks
    /// that [`from_yaml`](Self::from_yaml) applies, so output containing a
    /// malformed name or parent (`Theme..Bad`) will not load back.
    pub fn to_yaml(&self) -> Result<String, StylesheetError> {
        let sorted: BTreeMap<&str, &StyleDefinition> =
            self.styles.iter().map(|(k, v)| (k.as_str(), v)).collect();
        serde_yaml::to_string(&sorted).map_err(|e| StylesheetError::Serialize {
            message: e.to_string(),
        })
    }

    /// Validates that every explicit parent exists and that explicit parents
    /// never form a cycle.
    ///
    /// Implied (name-derived) parents are not checked: a missing implied
    /// parent is ordinary. Names are checked in sorted order, so the first
    /// reported problem is deterministic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylewalk::{Styles, StyleValidationError};
    ///
    /// // Valid: explicit parent exists
    /// let valid = Styles::new()
    ///     .add_root("Theme.AppCompat")
    ///     .add("AppTheme", "Theme.AppCompat");
    /// assert!(valid.validate().is_ok());
    ///
    /// // Invalid: dangling parent
    /// let dangling = Styles::new().add("AppTheme", "Theme.Missing");
    /// assert!(matches!(
    ///     dangling.validate(),
    ///     Err(StyleValidationError::UnresolvedParent { .. })
    /// ));
    ///
    /// // Invalid: cycle
    /// let cycle = Styles::new().add("A", "B").add("B", "A");
    /// assert!(matches!(
    ///     cycle.validate(),
    ///     Err(StyleValidationError::CycleDetected { .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        for name in self.names() {
            if let Some(parent) = self.styles[name].parent() {
                self.validate_parent_chain(name, parent)?;
            }
        }
        Ok(())
    }

    /// Validates a single explicit-parent chain starting from `name` -> `parent`.
    fn validate_parent_chain(
        &self,
        name: &str,
        parent: &DottedName,
    ) -> Result<(), StyleValidationError> {
        let mut path = vec![name.to_string()];
        let mut seen: HashSet<&str> = HashSet::from([name]);
        let mut current = parent.as_str();

        loop {
            let definition =
                self.styles
                    .get(current)
                    .ok_or_else(|| StyleValidationError::UnresolvedParent {
                        from: path.last().cloned().unwrap_or_default(),
                        to: current.to_string(),
                    })?;

            path.push(current.to_string());

            if !seen.insert(current) {
                return Err(StyleValidationError::CycleDetected { path });
            }

            match definition.parent() {
                Some(next) => current = next.as_str(),
                None => return Ok(()),
            }
        }
    }
}

impl StyleRepository for Styles {
    fn lookup(&self, name: &str) -> Option<StyleDefinition> {
        self.styles.get(name).cloned()
    }
}

impl<K: AsRef<str>, V: Into<StyleDefinition>> FromIterator<(K, V)> for Styles {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut styles = Styles::new();
        for (name, value) in iter {
            styles.insert(name.as_ref(), value);
        }
        styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_new_is_empty() {
        let styles = Styles::new();
        assert!(styles.is_empty());
        assert_eq!(styles.len(), 0);
    }

    #[test]
    fn test_add_parent_shorthand() {
        let styles = Styles::new().add("AppTheme", "Theme.AppCompat");
        assert_eq!(
            styles.get("AppTheme").and_then(StyleDefinition::parent_name),
            Some("Theme.AppCompat")
        );
    }

    #[test]
    fn test_add_replaces_existing() {
        let styles = Styles::new().add("AppTheme", "Theme.A").add("AppTheme", "Theme.B");
        assert_eq!(styles.len(), 1);
        assert_eq!(
            styles.get("AppTheme").and_then(StyleDefinition::parent_name),
            Some("Theme.B")
        );
    }

    #[test]
    fn test_names_are_sorted() {
        let styles = Styles::new().add_root("b").add_root("a").add_root("c");
        assert_eq!(styles.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = Styles::new().add("AppTheme", "Theme.Holo");
        let user = Styles::new().add("AppTheme", "Theme.AppCompat");
        let merged = base.merge(user);
        assert_eq!(
            merged.get("AppTheme").and_then(StyleDefinition::parent_name),
            Some("Theme.AppCompat")
        );
    }

    #[test]
    fn test_merge_missing_keeps_existing() {
        let mut base = Styles::new().add("AppTheme", "Theme.Holo");
        base.merge_missing(Styles::new().add("AppTheme", "Theme.AppCompat").add_root("Theme"));
        assert_eq!(base.len(), 2);
        assert_eq!(
            base.get("AppTheme").and_then(StyleDefinition::parent_name),
            Some("Theme.Holo")
        );
    }

    #[test]
    fn test_from_iterator() {
        let styles: Styles = vec![("AppTheme", "Theme.AppCompat"), ("Dialog", "AppTheme")]
            .into_iter()
            .collect();
        assert_eq!(styles.len(), 2);
        assert!(styles.contains("Dialog"));
    }

    #[test]
    fn test_validate_ok_for_convention_only_styles() {
        // Implied parents may be missing
        let styles = Styles::new().add_root("Theme.AppCompat.Light");
        assert!(styles.validate().is_ok());
    }

    #[test]
    fn test_validate_unresolved_parent() {
        let styles = Styles::new().add("AppTheme", "Theme.Missing");
        assert_eq!(
            styles.validate(),
            Err(StyleValidationError::UnresolvedParent {
                from: "AppTheme".to_string(),
                to: "Theme.Missing".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_unresolved_deep_in_chain() {
        let styles = Styles::new().add("A", "B").add("B", "C");
        match styles.validate() {
            Err(StyleValidationError::UnresolvedParent { from, to }) => {
                assert_eq!(from, "B");
                assert_eq!(to, "C");
            }
            other => panic!("Expected UnresolvedParent, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_cycle_path() {
        let styles = Styles::new().add("A", "B").add("B", "A");
        match styles.validate() {
            Err(StyleValidationError::CycleDetected { path }) => {
                assert_eq!(path, vec!["A", "B", "A"]);
            }
            other => panic!("Expected CycleDetected, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_self_parent() {
        let styles = Styles::new().add("A", "A");
        assert!(matches!(
            styles.validate(),
            Err(StyleValidationError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_to_yaml_round_trip() {
        let styles = Styles::new()
            .add_root("Theme.AppCompat")
            .add("AppTheme", "Theme.AppCompat");
        let yaml = styles.to_yaml().unwrap();
        assert!(yaml.contains("AppTheme"));
        assert!(yaml.contains("parent: Theme.AppCompat"));
        assert_eq!(Styles::from_yaml(&yaml).unwrap(), styles);
    }

    #[test]
    fn test_to_yaml_keeps_malformed_names_that_do_not_reload() {
        let styles = Styles::new().add("X", "Theme..Bad");
        let yaml = styles.to_yaml().unwrap();
        assert!(yaml.contains("Theme..Bad"));
        assert!(matches!(
            Styles::from_yaml(&yaml),
            Err(StylesheetError::InvalidDefinition { ref style, .. }) if style == "X"
        ));
    }

    #[test]
    fn test_lookup_clones_definition() {
        let styles = Styles::new().add("AppTheme", "Theme");
        assert_eq!(styles.lookup("AppTheme"), Some(StyleDefinition::with_parent("Theme")));
        assert_eq!(styles.lookup("Theme"), None);
    }
}
