//! In-memory scene model: items, placeholders and their source images.
//!
//! The model is a plain tree of value types addressed by string keys,
//! independent of any engine scene graph. It is produced by
//! [`assembler::SceneAssembler`], persisted through
//! [`descriptor::SceneDescriptor`], and consumed by
//! [`crate::place::SceneBuilder`].
use glam::{Vec2, Vec3};

pub mod assembler;
pub mod descriptor;
pub mod quarantine;

pub use assembler::{Assembly, SceneAssembler};
pub use descriptor::{
    to_display_name, ImageDescriptor, ItemDescriptor, PlaceholderDescriptor, SceneDescriptor,
    Vec2Data, Vec3Data,
};
pub use quarantine::{QuarantineReason, QuarantineSet, QuarantinedLayer};

/// Reference to one source image from the layered export.
///
/// Immutable once created; position carries the z component used for layer
/// depth in the export.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    pub name: String,
    pub asset_path: String,
    pub position: Vec3,
    pub size: Vec2,
    pub sorting_order: i32,
}

impl ImageRef {
    /// Creates an image reference with zeroed placement data.
    pub fn new(name: impl Into<String>, asset_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asset_path: asset_path.into(),
            position: Vec3::ZERO,
            size: Vec2::ZERO,
            sorting_order: 0,
        }
    }

    /// Sets the world position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the footprint size.
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Sets the render sorting order.
    pub fn with_sorting_order(mut self, sorting_order: i32) -> Self {
        self.sorting_order = sorting_order;
        self
    }
}

/// One concrete visual alternative for an item.
///
/// A finalized placeholder always owns its base image; placeholders whose
/// base never arrived are dropped during assembly and their decorations
/// quarantined.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderRecord {
    /// Placeholder key, e.g. `owl_01`.
    pub key: String,
    /// Base image anchoring this placeholder.
    pub image: ImageRef,
    /// Shadow-role decorations, removed on pickup.
    pub shadows: Vec<ImageRef>,
    /// Patch-role decorations, purely cosmetic.
    pub patches: Vec<ImageRef>,
}

/// A logical pickable/placeable entity with alternative placements.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    /// Unique item name within one build, e.g. `owl`.
    pub name: String,
    /// Explicit display name; derived from `name` at descriptor-creation
    /// time when absent.
    pub display_name: Option<String>,
    /// Representative icon, independent of in-scene placeholders.
    pub silhouette: Option<ImageRef>,
    /// Alternative placements, in stable key order.
    pub placeholders: Vec<PlaceholderRecord>,
}
