//! The inheritance walk.

use std::collections::HashSet;

use stylewalk_names::DottedName;

use crate::style::{StyleDefinition, StyleRepository};

/// Upper bound on parent hops in one walk.
///
/// Chains in real style data are a handful of links deep; anything past this
/// is treated as broken data and the walk stops.
pub const MAX_STYLE_INDIRECTION: usize = 50;

/// How a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The walk has not finished yet.
    Pending,
    /// The last name had no parent, explicit or implied.
    Root,
    /// The next parent had already been visited.
    Cycle,
    /// The hop limit was reached with parents still left.
    DepthExceeded,
}

impl WalkOutcome {
    /// True when the walk reached a real root rather than being cut short.
    pub fn is_resolved(self) -> bool {
        self == WalkOutcome::Root
    }
}

/// Iterator over a style's inheritance chain, starting with the style itself.
///
/// Each step takes the explicit parent when the repository declares one,
/// otherwise the name with its last segment stripped. Names the repository
/// doesn't know are walked by name alone. The walk never yields a name twice
/// and never yields more than `max_depth + 1` names.
///
/// # Example
///
/// ```rust
/// use stylewalk::{StyleWalker, Styles, WalkOutcome};
///
/// let styles = Styles::new().add("AppTheme", "Theme.AppCompat.Light");
/// let walker = StyleWalker::new(&styles);
///
/// let mut walk = walker.walk("AppTheme");
/// let names: Vec<String> = walk.by_ref().map(|n| n.into_string()).collect();
/// assert_eq!(names, ["AppTheme", "Theme.AppCompat.Light", "Theme.AppCompat", "Theme"]);
/// assert_eq!(walk.outcome(), WalkOutcome::Root);
/// ```
#[derive(Debug)]
pub struct InheritanceWalk<'r, R: ?Sized> {
    repo: &'r R,
    next: Option<DottedName>,
    visited: HashSet<DottedName>,
    hops: usize,
    max_depth: usize,
    outcome: WalkOutcome,
}

impl<'r, R: StyleRepository + ?Sized> InheritanceWalk<'r, R> {
    /// Starts a walk at `start` with the default hop limit.
    pub fn new(start: &str, repo: &'r R) -> Self {
        Self::with_max_depth(start, repo, MAX_STYLE_INDIRECTION)
    }

    pub fn with_max_depth(start: &str, repo: &'r R, max_depth: usize) -> Self {
        Self {
            repo,
            next: Some(DottedName::from(start)),
            visited: HashSet::new(),
            hops: 0,
            max_depth,
            outcome: WalkOutcome::Pending,
        }
    }

    /// How the walk ended, or [`WalkOutcome::Pending`] while names remain.
    pub fn outcome(&self) -> WalkOutcome {
        self.outcome
    }

    /// Number of parent hops taken so far.
    pub fn hops(&self) -> usize {
        self.hops
    }

    fn parent_of(&self, name: &DottedName, definition: Option<&StyleDefinition>) -> Option<DottedName> {
        match definition.and_then(StyleDefinition::parent) {
            Some(explicit) => Some(explicit.clone()),
            None => name.parent(),
        }
    }
}

impl<R: StyleRepository + ?Sized> Iterator for InheritanceWalk<'_, R> {
    type Item = DottedName;

    fn next(&mut self) -> Option<DottedName> {
        let current = self.next.take()?;
        let definition = self.repo.lookup(current.as_str());
        let parent = self.parent_of(&current, definition.as_ref());

        tracing::trace!(
            style = %current,
            known = definition.is_some(),
            parent = ?parent.as_ref().map(DottedName::as_str),
            "walk step"
        );

        self.visited.insert(current.clone());

        match parent {
            None => self.outcome = WalkOutcome::Root,
            Some(parent) if self.visited.contains(&parent) => {
                tracing::warn!(style = %current, parent = %parent, "style inheritance cycle");
                self.outcome = WalkOutcome::Cycle;
            }
            Some(parent) if self.hops >= self.max_depth => {
                tracing::warn!(
                    style = %current,
                    parent = %parent,
                    max_depth = self.max_depth,
                    "style inheritance too deep"
                );
                self.outcome = WalkOutcome::DepthExceeded;
            }
            Some(parent) => {
                self.hops += 1;
                self.next = Some(parent);
            }
        }

        Some(current)
    }
}

impl<R: StyleRepository + ?Sized> std::iter::FusedIterator for InheritanceWalk<'_, R> {}

/// A configured walker over one repository.
///
/// The free functions ([`resolves_to_family`](crate::resolves_to_family),
/// [`inheritance_chain`], [`root_of`]) use a walker with the default hop
/// limit; build one directly to change it.
///
/// ```rust
/// use stylewalk::{EmptyRepository, StyleWalker};
///
/// let walker = StyleWalker::new(EmptyRepository).max_depth(1);
/// let chain = walker.chain("Theme.AppCompat.Light");
/// assert_eq!(chain.len(), 2);
/// assert_eq!(walker.root_of("Theme.AppCompat.Light"), None);
/// ```
#[derive(Debug, Clone)]
pub struct StyleWalker<R> {
    repo: R,
    max_depth: usize,
}

impl<R: StyleRepository> StyleWalker<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            max_depth: MAX_STYLE_INDIRECTION,
        }
    }

    /// Sets the maximum number of parent hops per walk.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Starts a walk at `start`.
    pub fn walk(&self, start: &str) -> InheritanceWalk<'_, R> {
        InheritanceWalk::with_max_depth(start, &self.repo, self.max_depth)
    }

    /// The full chain from `start` to wherever the walk stops.
    pub fn chain(&self, start: &str) -> Vec<DottedName> {
        self.walk(start).collect()
    }

    /// The terminal style of the chain, or `None` if the walk was cut short
    /// by a cycle or the hop limit.
    pub fn root_of(&self, start: &str) -> Option<DottedName> {
        let mut walk = self.walk(start);
        let last = walk.by_ref().last();
        if walk.outcome().is_resolved() {
            last
        } else {
            None
        }
    }

    /// The first name in the chain that starts with `family_prefix`.
    pub fn ancestor_in_family(&self, start: &str, family_prefix: &str) -> Option<DottedName> {
        self.walk(start)
            .find(|name| name.as_str().starts_with(family_prefix))
    }

    /// Whether `start` derives from the family identified by `family_prefix`.
    ///
    /// True as soon as any name in the chain, `start` included, has the
    /// prefix as a literal string prefix. Never fails: unknown names are
    /// walked by convention, and cycles or over-deep chains end the walk
    /// with `false` unless a match came first.
    pub fn resolves_to_family(&self, start: &str, family_prefix: &str) -> bool {
        let found = self.ancestor_in_family(start, family_prefix);
        tracing::debug!(
            style = start,
            family = family_prefix,
            via = ?found.as_ref().map(DottedName::as_str),
            "family check"
        );
        found.is_some()
    }
}

/// The inheritance chain of `start`, the start name first.
pub fn inheritance_chain<R: StyleRepository + ?Sized>(start: &str, repo: &R) -> Vec<DottedName> {
    StyleWalker::new(repo).chain(start)
}

/// The terminal ancestor of `start`, or `None` on a cycle or over-deep chain.
pub fn root_of<R: StyleRepository + ?Sized>(start: &str, repo: &R) -> Option<DottedName> {
    StyleWalker::new(repo).root_of(start)
}
