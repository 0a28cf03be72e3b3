//! Serializable scene descriptor and converters to/from the scene model.
//!
//! The wire layout mirrors the JSON produced by the original editor pipeline:
//! camelCase field names, vectors as named-field `{x, y[, z]}` objects, and a
//! `placeHolders` array per item. Field names and nesting round-trip
//! losslessly through serialize → deserialize.
use std::fs;
use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scene::{ImageRef, ItemRecord, PlaceholderRecord};

/// 2D vector with named fields on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2Data {
    pub x: f32,
    pub y: f32,
}

/// 3D vector with named fields on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3Data {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec2> for Vec2Data {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vec2Data> for Vec2 {
    fn from(v: Vec2Data) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec3> for Vec3Data {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Vec3Data> for Vec3 {
    fn from(v: Vec3Data) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// Wire form of one source image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    pub name: String,
    #[serde(default)]
    pub asset_path: String,
    #[serde(default)]
    pub sorting_order: i32,
    #[serde(default)]
    pub position: Vec3Data,
    #[serde(default)]
    pub size: Vec2Data,
}

impl From<&ImageRef> for ImageDescriptor {
    fn from(image: &ImageRef) -> Self {
        Self {
            name: image.name.clone(),
            asset_path: image.asset_path.clone(),
            sorting_order: image.sorting_order,
            position: image.position.into(),
            size: image.size.into(),
        }
    }
}

impl From<ImageDescriptor> for ImageRef {
    fn from(descriptor: ImageDescriptor) -> Self {
        Self {
            name: descriptor.name,
            asset_path: descriptor.asset_path,
            position: descriptor.position.into(),
            size: descriptor.size.into(),
            sorting_order: descriptor.sorting_order,
        }
    }
}

/// Wire form of one placeholder: base image plus decorations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderDescriptor {
    pub image: ImageDescriptor,
    #[serde(default)]
    pub shadows: Vec<ImageDescriptor>,
    #[serde(default)]
    pub patches: Vec<ImageDescriptor>,
}

/// Wire form of one item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDescriptor {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_image: Option<ImageDescriptor>,
    #[serde(default)]
    pub place_holders: Vec<PlaceholderDescriptor>,
}

/// Persistable descriptor of a whole scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDescriptor {
    pub scene_name: String,
    #[serde(default)]
    pub scene_size: Vec2Data,
    #[serde(default)]
    pub images_environment: Vec<ImageDescriptor>,
    #[serde(default)]
    pub items: Vec<ItemDescriptor>,
}

impl SceneDescriptor {
    /// Converts an assembled model into its persistable form.
    ///
    /// Items without an explicit display name get one derived from their key
    /// via [`to_display_name`].
    pub fn from_model(
        items: &[ItemRecord],
        environment: &[ImageRef],
        scene_name: impl Into<String>,
        scene_size: Vec2,
    ) -> Self {
        Self {
            scene_name: scene_name.into(),
            scene_size: scene_size.into(),
            images_environment: environment.iter().map(ImageDescriptor::from).collect(),
            items: items.iter().map(item_to_descriptor).collect(),
        }
    }

    /// Converts the descriptor back into item records and environment images.
    pub fn into_model(self) -> (Vec<ItemRecord>, Vec<ImageRef>) {
        let environment = self
            .images_environment
            .into_iter()
            .map(ImageRef::from)
            .collect();
        let items = self.items.into_iter().map(item_from_descriptor).collect();
        (items, environment)
    }

    /// Parses a descriptor from its JSON encoding.
    pub fn from_json_str(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Encodes the descriptor as compact JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reads a descriptor from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Writes the descriptor to a JSON file, pretty-printed.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

fn item_to_descriptor(item: &ItemRecord) -> ItemDescriptor {
    let display_name = match item.display_name.as_deref().map(str::trim) {
        Some(explicit) if !explicit.is_empty() => explicit.to_owned(),
        _ => to_display_name(&item.name),
    };

    ItemDescriptor {
        name: item.name.clone(),
        display_name,
        display_image: item.silhouette.as_ref().map(ImageDescriptor::from),
        place_holders: item
            .placeholders
            .iter()
            .map(|ph| PlaceholderDescriptor {
                image: ImageDescriptor::from(&ph.image),
                shadows: ph.shadows.iter().map(ImageDescriptor::from).collect(),
                patches: ph.patches.iter().map(ImageDescriptor::from).collect(),
            })
            .collect(),
    }
}

fn item_from_descriptor(descriptor: ItemDescriptor) -> ItemRecord {
    let display_name = {
        let trimmed = descriptor.display_name.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    };

    ItemRecord {
        name: descriptor.name,
        display_name,
        silhouette: descriptor.display_image.map(ImageRef::from),
        placeholders: descriptor
            .place_holders
            .into_iter()
            .map(|ph| PlaceholderRecord {
                key: ph.image.name.clone(),
                image: ph.image.into(),
                shadows: ph.shadows.into_iter().map(ImageRef::from).collect(),
                patches: ph.patches.into_iter().map(ImageRef::from).collect(),
            })
            .collect(),
    }
}

/// Derives a human-readable display name from an item key.
///
/// Underscores become spaces, the result is trimmed and only the first
/// character is uppercased. Idempotent: a derived name passes through
/// unchanged.
pub fn to_display_name(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let trimmed = spaced.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
