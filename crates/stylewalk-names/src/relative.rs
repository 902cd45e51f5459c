//! Relative names: stripping and re-attaching dotted prefixes.
//!
//! A prefix only counts when it ends on a segment boundary. `com.goo` is a
//! textual prefix of `com.google` but not a dotted one, so
//! `relativize("com.goo", "com.google")` leaves the name alone.

use crate::name::{DottedName, SEPARATOR};

/// Expresses `full_name` relative to `prefix`.
///
/// Rules, in order:
///
/// 1. `full_name == prefix`: the empty name.
/// 2. `full_name` starts with `prefix` followed by `.`: everything after
///    that `.`.
/// 3. Otherwise `full_name` unchanged.
///
/// Comparison is exact, character by character. Every input has an answer.
///
/// # Example
///
/// ```rust
/// use stylewalk_names::relativize;
///
/// assert_eq!(relativize("com.google", "com.google.android"), "android");
/// assert_eq!(relativize("com.google.android", "com.google.android"), "");
/// assert_eq!(relativize("com.goo", "com.google"), "com.google");
/// ```
pub fn relativize(prefix: &str, full_name: &str) -> DottedName {
    if full_name == prefix {
        return DottedName::empty();
    }
    match full_name
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix(SEPARATOR))
    {
        Some(rest) => DottedName::from(rest),
        None => DottedName::from(full_name),
    }
}

/// Returns true if `name` is `prefix` itself or lives under it.
///
/// ```rust
/// use stylewalk_names::is_dotted_prefix;
///
/// assert!(is_dotted_prefix("com.google", "com.google"));
/// assert!(is_dotted_prefix("com.google", "com.google.android"));
/// assert!(!is_dotted_prefix("com.goo", "com.google"));
/// ```
pub fn is_dotted_prefix(prefix: &str, name: &str) -> bool {
    name == prefix
        || name
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with(SEPARATOR))
}

/// Joins a prefix and a relative name. Inverse of [`relativize`] for names
/// under the prefix.
///
/// Either side may be empty, in which case the other is returned as is.
pub fn qualify(prefix: &str, relative: &str) -> DottedName {
    match (prefix.is_empty(), relative.is_empty()) {
        (_, true) => DottedName::from(prefix),
        (true, false) => DottedName::from(relative),
        (false, false) => DottedName::new(format!("{}{}{}", prefix, SEPARATOR, relative)),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dotted() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-zA-Z][a-zA-Z0-9_]{0,6}", 1..5).prop_map(|s| s.join("."))
    }

    proptest! {
        #[test]
        fn relativize_self_is_empty(name in ".*") {
            prop_assert!(relativize(&name, &name).is_empty());
        }

        #[test]
        fn relativize_strips_prefix_and_separator(prefix in ".*", suffix in ".+") {
            let full = format!("{}.{}", prefix, suffix);
            prop_assert_eq!(relativize(&prefix, &full).into_string(), suffix);
        }

        #[test]
        fn relativize_leaves_unrelated_names(prefix in ".*", name in ".*") {
            prop_assume!(name != prefix);
            prop_assume!(!name.starts_with(&format!("{}.", prefix)));
            prop_assert_eq!(relativize(&prefix, &name).into_string(), name);
        }

        #[test]
        fn qualify_inverts_relativize(prefix in dotted(), name in dotted()) {
            let full = qualify(&prefix, &name);
            prop_assert!(is_dotted_prefix(&prefix, full.as_str()));
            prop_assert_eq!(qualify(&prefix, relativize(&prefix, full.as_str()).as_str()), full);
        }

        #[test]
        fn relativize_never_grows(prefix in ".*", name in ".*") {
            prop_assert!(relativize(&prefix, &name).as_str().len() <= name.len());
        }
    }
}
