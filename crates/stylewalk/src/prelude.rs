//! Common imports for working with styles.
//!
//! ```rust
//! use stylewalk::prelude::*;
//!
//! let styles = Styles::new().add("AppTheme", "Theme.AppCompat.Light");
//! assert!(is_app_compat("AppTheme", &styles));
//! assert_eq!(relativize("com.example", "com.example.ui"), "ui");
//! ```

pub use crate::style::{StyleDefinition, StyleRepository, Styles};
pub use crate::walk::{inheritance_chain, is_app_compat, resolves_to_family, StyleWalker};
pub use stylewalk_names::{relativize, DottedName};
