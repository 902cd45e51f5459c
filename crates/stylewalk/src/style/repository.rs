//! The lookup seam between the inheritance walk and whatever owns style data.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use super::definition::StyleDefinition;

/// Read-only lookup from style name to definition.
///
/// `None` means "not found", which is an ordinary answer: the walk carries on
/// using only the name. Implementations should be side-effect free; caching
/// or invalidation is up to the implementor.
///
/// Names passed to and returned from a repository are plain dotted names.
/// Reference prefixes like `@style/` must already be resolved.
///
/// Implemented for [`Styles`](crate::Styles), plain maps and smart pointers
/// to any repository. Closures become repositories through [`from_fn`].
///
/// # Example
///
/// ```rust
/// use stylewalk::{from_fn, resolves_to_family, StyleDefinition};
///
/// let repo = from_fn(|name| match name {
///     "AppTheme" => Some(StyleDefinition::with_parent("Theme.AppCompat.Light")),
///     _ => None,
/// });
///
/// assert!(resolves_to_family("AppTheme", "Theme.AppCompat", &repo));
/// ```
pub trait StyleRepository {
    /// Looks up the definition for `name`.
    fn lookup(&self, name: &str) -> Option<StyleDefinition>;
}

/// A repository that knows no styles.
///
/// Walks over it follow the naming convention only.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRepository;

impl StyleRepository for EmptyRepository {
    fn lookup(&self, _name: &str) -> Option<StyleDefinition> {
        None
    }
}

/// A repository backed by a closure. Created with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnRepository<F>(F);

/// Wraps a lookup closure as a [`StyleRepository`].
pub fn from_fn<F>(lookup: F) -> FnRepository<F>
where
    F: Fn(&str) -> Option<StyleDefinition>,
{
    FnRepository(lookup)
}

impl<F> StyleRepository for FnRepository<F>
where
    F: Fn(&str) -> Option<StyleDefinition>,
{
    fn lookup(&self, name: &str) -> Option<StyleDefinition> {
        (self.0)(name)
    }
}

impl<F> std::fmt::Debug for FnRepository<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnRepository")
    }
}

impl<S: std::hash::BuildHasher> StyleRepository for HashMap<String, StyleDefinition, S> {
    fn lookup(&self, name: &str) -> Option<StyleDefinition> {
        self.get(name).cloned()
    }
}

impl StyleRepository for BTreeMap<String, StyleDefinition> {
    fn lookup(&self, name: &str) -> Option<StyleDefinition> {
        self.get(name).cloned()
    }
}

impl<R: StyleRepository + ?Sized> StyleRepository for &R {
    fn lookup(&self, name: &str) -> Option<StyleDefinition> {
        (**self).lookup(name)
    }
}

impl<R: StyleRepository + ?Sized> StyleRepository for Box<R> {
    fn lookup(&self, name: &str) -> Option<StyleDefinition> {
        (**self).lookup(name)
    }
}

impl<R: StyleRepository + ?Sized> StyleRepository for Rc<R> {
    fn lookup(&self, name: &str) -> Option<StyleDefinition> {
        (**self).lookup(name)
    }
}

impl<R: StyleRepository + ?Sized> StyleRepository for Arc<R> {
    fn lookup(&self, name: &str) -> Option<StyleDefinition> {
        (**self).lookup(name)
    }
}
