//! Randomized selection of non-overlapping items for a playable scene.
use glam::Vec2;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::place::grid::{OccupancyGrid, DEFAULT_RESOLUTION};
use crate::place::shuffle;
use crate::scene::{to_display_name, ImageRef, ItemRecord, SceneDescriptor};

/// Constraints for one scene build.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildConfig {
    /// Maximum number of items placed into the scene.
    pub visible_item_count: usize,
    /// How many placed items take part in the pickup gameplay.
    pub pickable_item_count: usize,
    /// How many pickable items are offered to the player at once.
    pub available_item_max_count: usize,
    /// Occupancy grid resolution in columns.
    pub grid_cols: usize,
    /// Occupancy grid resolution in rows.
    pub grid_rows: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            visible_item_count: 24,
            pickable_item_count: 12,
            available_item_max_count: 5,
            grid_cols: DEFAULT_RESOLUTION,
            grid_rows: DEFAULT_RESOLUTION,
        }
    }
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the visible item budget.
    pub fn with_visible_item_count(mut self, count: usize) -> Self {
        self.visible_item_count = count;
        self
    }

    /// Sets the pickable item budget.
    pub fn with_pickable_item_count(mut self, count: usize) -> Self {
        self.pickable_item_count = count;
        self
    }

    /// Sets how many pickable items are available at once.
    pub fn with_available_item_max_count(mut self, count: usize) -> Self {
        self.available_item_max_count = count;
        self
    }

    /// Sets the occupancy grid resolution.
    pub fn with_grid_resolution(mut self, cols: usize, rows: usize) -> Self {
        self.grid_cols = cols;
        self.grid_rows = rows;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.grid_cols == 0 || self.grid_rows == 0 {
            return Err(Error::InvalidConfig(
                "grid resolution must be > 0 in both axes".into(),
            ));
        }

        Ok(())
    }
}

/// One item placed into the scene, flattened to its chosen placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    /// Item key, e.g. `owl`.
    pub item_name: String,
    /// Human-readable name shown to the player.
    pub display_name: String,
    /// Item icon, if the source scene had one.
    pub silhouette: Option<ImageRef>,
    /// Base image of the chosen placeholder.
    pub image: ImageRef,
    /// Shadow layers carried along with the chosen placeholder.
    pub shadows: Vec<ImageRef>,
    /// Patch layers carried along with the chosen placeholder.
    pub patches: Vec<ImageRef>,
}

/// Result of one scene build.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    /// Every placed item, in placement order.
    pub placed: Vec<PlacedItem>,
    /// Pickable items offered to the player right away.
    pub available: Vec<PlacedItem>,
    /// Pickable items queued behind the available set.
    pub queued: Vec<PlacedItem>,
}

/// Selects a randomized, non-overlapping subset of items for one scene.
///
/// Each build owns a fresh [`OccupancyGrid`]; nothing is shared across
/// builds, and a failed placeholder placement is a permanent skip within the
/// build, never retried.
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    config: BuildConfig,
}

impl SceneBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Creates a builder, failing fast on an invalid configuration.
    pub fn try_new(config: BuildConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Builds one randomized scene instance from the item library.
    ///
    /// Items are visited in shuffled order; for each, the placeholder
    /// alternatives are shuffled and the first whose base-image footprint
    /// reserves cleanly is accepted. Items whose placeholders all collide are
    /// skipped. Placement stops at the visible-item budget.
    ///
    /// # Errors
    ///
    /// Only configuration problems fail: an invalid [`BuildConfig`] or a
    /// zero-area `scene_size`.
    pub fn build(
        &self,
        items: &[ItemRecord],
        scene_size: Vec2,
        rng: &mut impl RngCore,
    ) -> Result<BuildResult> {
        self.config.validate()?;
        let mut grid = OccupancyGrid::new(scene_size, self.config.grid_cols, self.config.grid_rows)?;

        let mut order: Vec<usize> = (0..items.len()).collect();
        shuffle(&mut order, rng);

        let mut placed = Vec::new();
        for index in order {
            if placed.len() >= self.config.visible_item_count {
                break;
            }

            let item = &items[index];
            if item.placeholders.is_empty() {
                warn!(item = %item.name, "item has no placeholders; skipping");
                continue;
            }

            let mut alternatives: Vec<usize> = (0..item.placeholders.len()).collect();
            shuffle(&mut alternatives, rng);

            let chosen = alternatives.into_iter().map(|i| &item.placeholders[i]).find(
                |placeholder| {
                    grid.try_reserve(
                        placeholder.image.position.truncate(),
                        placeholder.image.size,
                    )
                },
            );

            let Some(placeholder) = chosen else {
                debug!(item = %item.name, "no placeholder fits; skipping");
                continue;
            };

            placed.push(PlacedItem {
                item_name: item.name.clone(),
                display_name: item
                    .display_name
                    .clone()
                    .unwrap_or_else(|| to_display_name(&item.name)),
                silhouette: item.silhouette.clone(),
                image: placeholder.image.clone(),
                shadows: placeholder.shadows.clone(),
                patches: placeholder.patches.clone(),
            });
        }

        let pickable_len = placed.len().min(self.config.pickable_item_count);
        let available_len = pickable_len.min(self.config.available_item_max_count);
        let available = placed[..available_len].to_vec();
        let queued = placed[available_len..pickable_len].to_vec();

        info!(
            placed = placed.len(),
            available = available.len(),
            queued = queued.len(),
            "scene build complete"
        );

        Ok(BuildResult {
            placed,
            available,
            queued,
        })
    }

    /// Builds directly from a persisted descriptor.
    pub fn build_from_descriptor(
        &self,
        descriptor: &SceneDescriptor,
        rng: &mut impl RngCore,
    ) -> Result<BuildResult> {
        let scene_size: Vec2 = descriptor.scene_size.into();
        let (items, _environment) = descriptor.clone().into_model();
        self.build(&items, scene_size, rng)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::scene::{PlaceholderRecord, SceneAssembler};

    const SCENE: Vec2 = Vec2::new(1366.0, 768.0);

    fn item_at(name: &str, positions: &[Vec2]) -> ItemRecord {
        let placeholders = positions
            .iter()
            .enumerate()
            .map(|(i, pos)| {
                let key = format!("{name}_{:02}", i + 1);
                PlaceholderRecord {
                    key: key.clone(),
                    image: ImageRef::new(key, "scene.psd")
                        .with_position(pos.extend(0.0))
                        .with_size(Vec2::new(120.0, 120.0)),
                    shadows: Vec::new(),
                    patches: Vec::new(),
                }
            })
            .collect();

        ItemRecord {
            name: name.to_owned(),
            display_name: None,
            silhouette: None,
            placeholders,
        }
    }

    fn spread_items(count: usize) -> Vec<ItemRecord> {
        // Distinct, non-overlapping spots on a coarse lattice.
        (0..count)
            .map(|i| {
                let col = (i % 5) as f32;
                let row = (i / 5) as f32;
                item_at(
                    &format!("item{i}"),
                    &[Vec2::new(col * 250.0 - 500.0, row * 180.0 - 270.0)],
                )
            })
            .collect()
    }

    #[test]
    fn zero_visible_budget_places_nothing() {
        let builder = SceneBuilder::new(BuildConfig::new().with_visible_item_count(0));
        let result = builder
            .build(&spread_items(12), SCENE, &mut StdRng::seed_from_u64(3))
            .unwrap();

        assert!(result.placed.is_empty());
        assert!(result.available.is_empty());
        assert!(result.queued.is_empty());
    }

    #[test]
    fn build_respects_the_visible_budget() {
        let builder = SceneBuilder::new(BuildConfig::new().with_visible_item_count(4));
        let result = builder
            .build(&spread_items(12), SCENE, &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(result.placed.len(), 4);
    }

    #[test]
    fn overlapping_items_are_placed_at_most_once() {
        // Every placeholder of every item sits on the same spot.
        let items: Vec<_> = (0..6)
            .map(|i| item_at(&format!("item{i}"), &[Vec2::ZERO, Vec2::ZERO]))
            .collect();

        let builder = SceneBuilder::new(BuildConfig::default());
        let result = builder
            .build(&items, SCENE, &mut StdRng::seed_from_u64(11))
            .unwrap();
        assert_eq!(result.placed.len(), 1);
    }

    #[test]
    fn items_without_placeholders_are_skipped_without_error() {
        let mut items = spread_items(3);
        items.push(ItemRecord {
            name: "ghost".to_owned(),
            display_name: None,
            silhouette: None,
            placeholders: Vec::new(),
        });

        let builder = SceneBuilder::new(BuildConfig::default());
        let result = builder
            .build(&items, SCENE, &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(result.placed.len(), 3);
        assert!(result.placed.iter().all(|p| p.item_name != "ghost"));
    }

    #[test]
    fn partition_preserves_placement_order() {
        let config = BuildConfig::new()
            .with_visible_item_count(10)
            .with_pickable_item_count(7)
            .with_available_item_max_count(3);
        let builder = SceneBuilder::new(config);
        let result = builder
            .build(&spread_items(10), SCENE, &mut StdRng::seed_from_u64(21))
            .unwrap();

        assert_eq!(result.placed.len(), 10);
        assert_eq!(result.available.len(), 3);
        assert_eq!(result.queued.len(), 4);

        let pickable: Vec<_> = result
            .available
            .iter()
            .chain(&result.queued)
            .map(|p| p.item_name.clone())
            .collect();
        let placed_prefix: Vec<_> = result.placed[..7].iter().map(|p| p.item_name.clone()).collect();
        assert_eq!(pickable, placed_prefix);
    }

    #[test]
    fn seeded_builds_are_reproducible() {
        let builder = SceneBuilder::new(BuildConfig::default());
        let items = spread_items(15);

        let first = builder
            .build(&items, SCENE, &mut StdRng::seed_from_u64(1234))
            .unwrap();
        let second = builder
            .build(&items, SCENE, &mut StdRng::seed_from_u64(1234))
            .unwrap();

        assert_eq!(first.placed, second.placed);
        assert_eq!(first.available, second.available);
        assert_eq!(first.queued, second.queued);
    }

    #[test]
    fn display_name_falls_back_to_derivation() {
        let items = vec![item_at("ancient_book", &[Vec2::ZERO])];
        let builder = SceneBuilder::new(BuildConfig::default());
        let result = builder
            .build(&items, SCENE, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(result.placed[0].display_name, "Ancient book");
    }

    #[test]
    fn zero_area_scene_fails_fast() {
        let builder = SceneBuilder::new(BuildConfig::default());
        let err = builder
            .build(&spread_items(3), Vec2::ZERO, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn invalid_grid_resolution_fails_fast() {
        let config = BuildConfig::new().with_grid_resolution(0, 64);
        assert!(SceneBuilder::try_new(config).is_err());
    }

    #[test]
    fn builds_from_a_round_tripped_descriptor() {
        let assembly = SceneAssembler::new().assemble(vec![
            ImageRef::new("hat_01", "scene.psd")
                .with_position(Vec3::new(-300.0, 0.0, 0.0))
                .with_size(Vec2::new(100.0, 100.0)),
            ImageRef::new("hat_01_sh", "scene.psd"),
            ImageRef::new("spider", "scene.psd")
                .with_position(Vec3::new(300.0, 0.0, 0.0))
                .with_size(Vec2::new(100.0, 100.0)),
        ]);

        let descriptor =
            SceneDescriptor::from_model(&assembly.items, &assembly.environment, "test", SCENE);
        let builder = SceneBuilder::new(BuildConfig::default());
        let result = builder
            .build_from_descriptor(&descriptor, &mut StdRng::seed_from_u64(8))
            .unwrap();

        assert_eq!(result.placed.len(), 2);
        let hat = result.placed.iter().find(|p| p.item_name == "hat").unwrap();
        assert_eq!(hat.shadows.len(), 1);
    }
}
