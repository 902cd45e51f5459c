//! Dotted hierarchical names.
//!
//! Style identifiers (`Theme.AppCompat.Light`) and package identifiers
//! (`com.google.android`) share one shape: segments joined by `.`. This crate
//! provides the [`DottedName`] value type and the small set of operations the
//! rest of the workspace needs on such names:
//!
//! - [`relativize`]: express a name relative to a prefix
//! - [`qualify`]: the inverse join
//! - [`is_dotted_prefix`]: segment-aware prefix test
//! - [`DottedName::parent`]: the implied parent used by style inheritance
//!
//! # Quick Start
//!
//! ```rust
//! use stylewalk_names::{relativize, qualify, DottedName};
//!
//! let activity = DottedName::from("com.example.app.ui.MainActivity");
//! let relative = relativize("com.example.app", activity.as_str());
//! assert_eq!(relative, "ui.MainActivity");
//! assert_eq!(qualify("com.example.app", relative.as_str()), activity);
//! ```
//!
//! # Boundaries
//!
//! Prefixes are matched on segment boundaries only:
//!
//! ```rust
//! use stylewalk_names::relativize;
//!
//! // "com.goo" is a textual prefix of "com.google", not a dotted one
//! assert_eq!(relativize("com.goo", "com.google"), "com.google");
//! ```

mod error;
mod name;
mod relative;

pub use error::{NameError, Result};
pub use name::{DottedName, SEPARATOR};
pub use relative::{is_dotted_prefix, qualify, relativize};
