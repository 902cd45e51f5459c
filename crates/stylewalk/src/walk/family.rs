//! Family checks: does a style derive from a given theme family?

use stylewalk_names::DottedName;

use super::walker::StyleWalker;
use crate::style::StyleRepository;

/// Name prefix shared by the AppCompat theme family.
pub const APP_COMPAT_FAMILY: &str = "Theme.AppCompat";

/// Returns true if `start`, or any style it inherits from, has
/// `family_prefix` as a literal string prefix.
///
/// Unknown names are walked by convention (`A.B.C` → `A.B` → `A`); explicit
/// parents from `repo` take precedence. Never fails: cycles and over-deep
/// chains end the walk, and the answer is `false` unless a match came first.
///
/// # Example
///
/// ```rust
/// use stylewalk::{resolves_to_family, EmptyRepository, Styles};
///
/// // Convention alone
/// assert!(resolves_to_family(
///     "Theme.AppCompat.Light.DarkActionBar",
///     "Theme.AppCompat.",
///     &EmptyRepository,
/// ));
///
/// // Explicit parents
/// let styles = Styles::new().add("AppTheme", "Theme.AppCompat.Light");
/// assert!(resolves_to_family("AppTheme", "Theme.AppCompat", &styles));
/// assert!(!resolves_to_family("AppTheme", "Theme.Material", &styles));
/// ```
pub fn resolves_to_family<R: StyleRepository + ?Sized>(
    start: &str,
    family_prefix: &str,
    repo: &R,
) -> bool {
    StyleWalker::new(repo).resolves_to_family(start, family_prefix)
}

/// The first style in the chain of `start` that belongs to the family.
pub fn ancestor_in_family<R: StyleRepository + ?Sized>(
    start: &str,
    family_prefix: &str,
    repo: &R,
) -> Option<DottedName> {
    StyleWalker::new(repo).ancestor_in_family(start, family_prefix)
}

/// Whether `start` is an AppCompat-based theme.
pub fn is_app_compat<R: StyleRepository + ?Sized>(start: &str, repo: &R) -> bool {
    resolves_to_family(start, APP_COMPAT_FAMILY, repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{from_fn, EmptyRepository, StyleDefinition, Styles};

    #[test]
    fn test_start_name_itself_matches() {
        assert!(resolves_to_family("Theme.AppCompat", "Theme.AppCompat", &EmptyRepository));
    }

    #[test]
    fn test_match_through_convention() {
        assert!(resolves_to_family(
            "Theme.AppCompat.Light.DarkActionBar",
            "Theme.AppCompat.",
            &EmptyRepository
        ));
    }

    #[test]
    fn test_no_match_through_convention() {
        assert!(!resolves_to_family("Theme.Holo.Light", "Theme.AppCompat", &EmptyRepository));
    }

    #[test]
    fn test_match_through_explicit_parent() {
        let styles = Styles::new()
            .add("AppTheme", "Base.AppTheme")
            .add("Base.AppTheme", "Theme.AppCompat.Light.NoActionBar");
        assert!(is_app_compat("AppTheme", &styles));
        assert_eq!(
            ancestor_in_family("AppTheme", APP_COMPAT_FAMILY, &styles),
            Some(DottedName::from("Theme.AppCompat.Light.NoActionBar"))
        );
    }

    #[test]
    fn test_explicit_parent_outside_family() {
        let styles = Styles::new()
            .add("AppTheme", "Theme.AppCompat.Custom")
            .add("Theme.AppCompat.Custom", "Theme.Material");
        assert!(is_app_compat("AppTheme", &styles));
        assert!(!resolves_to_family("Theme.AppCompat.Custom", "Theme.Material.", &styles));
        assert!(resolves_to_family("AppTheme", "Theme.Material", &styles));
    }

    #[test]
    fn test_cycle_returns_false() {
        let styles = Styles::new().add("A", "B").add("B", "A");
        assert!(!resolves_to_family("A", "Theme.AppCompat", &styles));
    }

    #[test]
    fn test_cycle_after_match_returns_true() {
        let styles = Styles::new()
            .add("AppTheme", "Theme.AppCompat.Loop")
            .add("Theme.AppCompat.Loop", "AppTheme");
        assert!(is_app_compat("AppTheme", &styles));
    }

    #[test]
    fn test_unknown_dotless_name() {
        assert!(!resolves_to_family("Unknown", "Theme.AppCompat", &EmptyRepository));
    }

    #[test]
    fn test_empty_start() {
        assert!(!resolves_to_family("", "Theme.AppCompat", &EmptyRepository));
    }

    #[test]
    fn test_prefix_is_literal() {
        // No segment boundary is required
        assert!(resolves_to_family("Theme.AppCompatible", "Theme.AppCompat", &EmptyRepository));
        // Case matters
        assert!(!resolves_to_family("theme.appcompat", "Theme.AppCompat", &EmptyRepository));
    }

    #[test]
    fn test_closure_repository() {
        let repo = from_fn(|name| match name {
            "AppTheme" => Some(StyleDefinition::with_parent("Theme.AppCompat.DayNight")),
            _ => None,
        });
        assert!(is_app_compat("AppTheme", &repo));
    }
}
