#![forbid(unsafe_code)]
//! scene_weave: reconstruct structured scenes from flat layered-image exports
//! and build randomized hidden-object layouts from them.
//!
//! Modules:
//! - parse: suffix taxonomy and layer-name classification
//! - scene: scene model, assembly with quarantine, serializable descriptor
//! - place: occupancy grid, randomized item selection, spawn directives
//!
//! The pipeline: a flat list of named layers is classified per name,
//! assembled into items with alternative placeholders (invalid fragments land
//! in a quarantine set), optionally persisted as a JSON descriptor, and
//! finally turned into a playable layout by picking one non-overlapping
//! placeholder per item on a coarse occupancy grid.
pub mod error;
pub mod parse;
pub mod place;
pub mod scene;

/// Convenient re-exports for common types. Import with `use scene_weave::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::parse::{classify, Classification, DecorationRole, SuffixTaxonomy};
    pub use crate::place::{
        emit_scene, BuildConfig, BuildResult, OccupancyGrid, ParentKey, PlacedItem, SceneBuilder,
        SpawnDirective, SpawnSink, VecSink,
    };
    pub use crate::scene::{
        to_display_name, Assembly, ImageDescriptor, ImageRef, ItemDescriptor, ItemRecord,
        PlaceholderDescriptor, PlaceholderRecord, QuarantineReason, QuarantineSet,
        QuarantinedLayer, SceneAssembler, SceneDescriptor, Vec2Data, Vec3Data,
    };
}
