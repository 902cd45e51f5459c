//! # stylewalk - Style Inheritance Resolution
//!
//! `stylewalk` answers questions about dotted, hierarchical style names such
//! as `Theme.AppCompat.Light.DarkActionBar`:
//!
//! - Which styles does this style inherit from?
//! - Does it ultimately belong to a given theme family?
//!
//! Style data stays with its owner. The walk only consumes a read-only
//! [`StyleRepository`], so a live resource index, a YAML file or a closure
//! can all serve as the source.
//!
//! ## Core Concepts
//!
//! - [`StyleDefinition`]: a style's optional explicit parent
//! - [`StyleRepository`]: lookup from name to definition; misses are ordinary
//! - [`Styles`]: in-memory repository, buildable in code or from YAML
//! - [`InheritanceWalk`]: bounded iterator over a style's ancestors
//! - [`resolves_to_family`]: the family check
//! - [`relativize`]: dotted names relative to a prefix (from `stylewalk-names`)
//!
//! ## Quick Start
//!
//! ```rust
//! use stylewalk::{inheritance_chain, resolves_to_family, Styles};
//!
//! let styles = Styles::new()
//!     .add("AppTheme", "Theme.AppCompat.Light.DarkActionBar")
//!     .add_root("Theme.AppCompat");
//!
//! assert!(resolves_to_family("AppTheme", "Theme.AppCompat", &styles));
//!
//! let chain: Vec<String> = inheritance_chain("AppTheme", &styles)
//!     .into_iter()
//!     .map(|n| n.into_string())
//!     .collect();
//! assert_eq!(chain, [
//!     "AppTheme",
//!     "Theme.AppCompat.Light.DarkActionBar",
//!     "Theme.AppCompat.Light",
//!     "Theme.AppCompat",
//!     "Theme",
//! ]);
//! ```
//!
//! ## Inheritance Rules
//!
//! 1. An explicit parent from the repository always wins.
//! 2. Otherwise the parent is the name minus its last segment.
//! 3. A name without a dot and without an explicit parent is a root.
//!
//! Walks are bounded by a visited set and by [`MAX_STYLE_INDIRECTION`], so
//! cyclic repository data ends the walk instead of hanging it.
//!
//! Names are compared character for character. Resource-reference syntax
//! such as `@style/Theme.AppCompat` or `android:Theme.Holo` is not understood:
//! hosts strip it before the names reach a repository.
//!
//! ## YAML Stylesheets
//!
//! ```rust
//! use stylewalk::{is_app_compat, Styles};
//!
//! let styles = Styles::from_yaml(r#"
//! AppTheme: Base.AppTheme
//! Base.AppTheme:
//!   parent: Theme.AppCompat.Light.NoActionBar
//! "#).unwrap();
//!
//! assert!(is_app_compat("AppTheme", &styles));
//! ```

mod error;
pub mod prelude;
pub mod style;
pub mod walk;

// Error types
pub use error::{StyleValidationError, StylesheetError};

// Style module exports
pub use style::{
    from_fn, parse_stylesheet, EmptyRepository, FnRepository, StyleDefinition, StyleRepository,
    Styles, StylesheetRegistry, STYLESHEET_EXTENSIONS,
};

// Walk module exports
pub use walk::{
    ancestor_in_family, inheritance_chain, is_app_compat, resolves_to_family, root_of,
    InheritanceWalk, StyleWalker, WalkOutcome, APP_COMPAT_FAMILY, MAX_STYLE_INDIRECTION,
};

// Name exports
pub use stylewalk_names::{is_dotted_prefix, qualify, relativize, DottedName, NameError};
