//! Layer-name parsing: suffix vocabulary and classification.
//!
//! Layered-image exports arrive as a flat list of names like `owl_01`,
//! `owl_01_sh` or `back_bg`. This module classifies each name into its
//! structural role (environment, placeholder base, decoration, silhouette)
//! against a configurable [`SuffixTaxonomy`].
pub mod classify;
pub mod taxonomy;

pub use classify::{classify, Classification, DecorationRole};
pub use taxonomy::SuffixTaxonomy;
