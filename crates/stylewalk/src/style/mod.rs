//! Style data: definitions, repositories and stylesheet loading.
//!
//! The inheritance walk only ever asks one question of style data: "what is
//! the explicit parent of this name, if any?". This module provides the
//! answerers:
//!
//! - [`StyleRepository`]: the lookup trait the walk consumes
//! - [`Styles`]: in-memory registry, buildable in code or from YAML
//! - [`StylesheetRegistry`]: merges YAML files and inline sheets into [`Styles`]
//!
//! ## YAML Stylesheets
//!
//! ```rust
//! use stylewalk::Styles;
//!
//! let styles = Styles::from_yaml(r#"
//! Theme.AppCompat: ~
//! AppTheme: Theme.AppCompat.Light
//! "#).unwrap();
//! assert!(styles.contains("AppTheme"));
//! ```

mod definition;
mod file_registry;
mod parser;
mod registry;
mod repository;

pub use definition::StyleDefinition;
pub use file_registry::{
    extension_priority, strip_extension, StylesheetRegistry, STYLESHEET_EXTENSIONS,
};
pub use parser::parse_stylesheet;
pub use registry::Styles;
pub use repository::{from_fn, EmptyRepository, FnRepository, StyleRepository};
