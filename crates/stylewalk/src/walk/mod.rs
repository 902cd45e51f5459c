//! Style inheritance walking.
//!
//! A style's parent is its explicit parent when the repository declares one,
//! otherwise its name minus the last segment. Walking those links from a
//! start style yields its inheritance chain; [`resolves_to_family`] asks
//! whether any link in that chain belongs to a named family.
//!
//! Walks are bounded: a visited set stops cycles, and [`MAX_STYLE_INDIRECTION`]
//! caps the number of hops.

mod family;
mod walker;

pub use family::{ancestor_in_family, is_app_compat, resolves_to_family, APP_COMPAT_FAMILY};
pub use walker::{
    inheritance_chain, root_of, InheritanceWalk, StyleWalker, WalkOutcome, MAX_STYLE_INDIRECTION,
};
