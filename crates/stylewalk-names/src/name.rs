//! The [`DottedName`] value type.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::{NameError, Result};
use crate::relative::{is_dotted_prefix, qualify, relativize};

/// Separator between the segments of a dotted name.
pub const SEPARATOR: char = '.';

/// An immutable, owned name made of `.`-separated segments.
///
/// Used both for style identifiers (`Theme.AppCompat.Light`) and for
/// package-like identifiers (`com.google.android`).
///
/// Conversions from `&str` and `String` accept anything, including the empty
/// string (the *empty name*) and malformed input such as `"a..b"`. Use
/// [`DottedName::parse`] when the input must be well formed.
///
/// # Example
///
/// ```rust
/// use stylewalk_names::DottedName;
///
/// let name = DottedName::from("Theme.AppCompat.Light");
/// assert_eq!(name.segment_count(), 3);
/// assert_eq!(name.last_segment(), Some("Light"));
/// assert_eq!(name.parent().unwrap().as_str(), "Theme.AppCompat");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DottedName(String);

impl DottedName {
    /// Creates a name from any string without validation.
    pub fn new(name: impl Into<String>) -> Self {
        DottedName(name.into())
    }

    /// The empty name.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a name, rejecting empty names, empty segments and whitespace.
    ///
    /// ```rust
    /// use stylewalk_names::{DottedName, NameError};
    ///
    /// assert!(DottedName::parse("com.google.android").is_ok());
    /// assert_eq!(DottedName::parse(""), Err(NameError::Empty));
    /// assert!(matches!(
    ///     DottedName::parse("com..google"),
    ///     Err(NameError::EmptySegment { position: 1, .. })
    /// ));
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        validate(name)?;
        Ok(DottedName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if [`DottedName::parse`] would accept this name.
    pub fn is_well_formed(&self) -> bool {
        validate(&self.0).is_ok()
    }

    /// Iterates over the segments. The empty name has no segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        let split = (!self.0.is_empty()).then(|| self.0.split(SEPARATOR));
        split.into_iter().flatten()
    }

    pub fn segment_count(&self) -> usize {
        if self.0.is_empty() {
            0
        } else {
            self.0.matches(SEPARATOR).count() + 1
        }
    }

    /// The last segment, or `None` for the empty name.
    pub fn last_segment(&self) -> Option<&str> {
        if self.0.is_empty() {
            return None;
        }
        Some(match self.0.rsplit_once(SEPARATOR) {
            Some((_, last)) => last,
            None => &self.0,
        })
    }

    /// The name with its last segment stripped.
    ///
    /// Returns `None` when the name contains no separator: a single-segment
    /// name has no implied parent.
    pub fn parent(&self) -> Option<DottedName> {
        self.0
            .rsplit_once(SEPARATOR)
            .map(|(parent, _)| DottedName(parent.to_string()))
    }

    /// Appends a segment (or a relative dotted name).
    pub fn child(&self, segment: &str) -> DottedName {
        qualify(&self.0, segment)
    }

    /// Returns true if `prefix` equals this name or is one of its
    /// dot-bounded leading parts.
    pub fn starts_with_name(&self, prefix: &str) -> bool {
        is_dotted_prefix(prefix, &self.0)
    }

    /// This name expressed relative to `prefix`. See [`relativize`].
    pub fn relative_to(&self, prefix: &str) -> DottedName {
        relativize(prefix, &self.0)
    }
}

fn validate(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if let Some(character) = name
        .chars()
        .find(|c| c.is_whitespace() || c.is_control())
    {
        return Err(NameError::InvalidCharacter {
            name: name.to_string(),
            character,
        });
    }
    if let Some(position) = name.split(SEPARATOR).position(str::is_empty) {
        return Err(NameError::EmptySegment {
            name: name.to_string(),
            position,
        });
    }
    Ok(())
}

impl fmt::Display for DottedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DottedName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&str> for DottedName {
    fn from(name: &str) -> Self {
        DottedName(name.to_string())
    }
}

impl From<String> for DottedName {
    fn from(name: String) -> Self {
        DottedName(name)
    }
}

impl From<DottedName> for String {
    fn from(name: DottedName) -> Self {
        name.0
    }
}

impl AsRef<str> for DottedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DottedName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DottedName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DottedName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
