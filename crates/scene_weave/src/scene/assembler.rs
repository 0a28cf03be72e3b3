//! Folds a flat list of classified layers into the hierarchical scene model.
use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::parse::{classify, Classification, DecorationRole, SuffixTaxonomy};
use crate::scene::quarantine::{QuarantineReason, QuarantineSet};
use crate::scene::{ImageRef, ItemRecord, PlaceholderRecord};

/// Result of one assembly pass.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    /// Valid items, in stable name order.
    pub items: Vec<ItemRecord>,
    /// Environment layers, in input order.
    pub environment: Vec<ImageRef>,
    /// Everything that could not be attached.
    pub quarantine: QuarantineSet,
}

impl Assembly {
    /// Looks up an item by name.
    pub fn item(&self, name: &str) -> Option<&ItemRecord> {
        self.items.iter().find(|item| item.name == name)
    }
}

#[derive(Default)]
struct PendingPlaceholder {
    base: Option<ImageRef>,
    shadows: Vec<ImageRef>,
    patches: Vec<ImageRef>,
}

#[derive(Default)]
struct PendingItem {
    silhouette: Option<ImageRef>,
    placeholders: BTreeMap<String, PendingPlaceholder>,
}

/// Stateful folder that builds the scene model from raw layers.
///
/// One assembly pass is atomic and exclusively owns its working maps; callers
/// needing concurrent assemblies construct independent assemblers.
#[derive(Debug, Clone, Default)]
pub struct SceneAssembler {
    taxonomy: SuffixTaxonomy,
}

impl SceneAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a non-default suffix vocabulary.
    pub fn with_taxonomy(taxonomy: SuffixTaxonomy) -> Self {
        Self { taxonomy }
    }

    /// Consumes the layer list and builds items, environment and quarantine.
    ///
    /// Entry order does not affect the structural result beyond first-seen-
    /// wins tie-breaks on placeholder-base and silhouette collisions.
    /// Decorations may precede their base image in the input.
    pub fn assemble(&self, layers: Vec<ImageRef>) -> Assembly {
        let mut pending: BTreeMap<String, PendingItem> = BTreeMap::new();
        let mut environment = Vec::new();
        let mut quarantine = QuarantineSet::default();

        for layer in layers {
            match classify(&layer.name, &self.taxonomy) {
                Classification::Environment => environment.push(layer),
                Classification::Silhouette { item } => {
                    let entry = pending.entry(item).or_default();
                    if entry.silhouette.is_some() {
                        warn!(layer = %layer.name, "second silhouette for item; first wins");
                        quarantine.push(layer, QuarantineReason::DuplicateSilhouette);
                    } else {
                        entry.silhouette = Some(layer);
                    }
                }
                Classification::PlaceholderBase { item, placeholder } => {
                    let slot = pending
                        .entry(item)
                        .or_default()
                        .placeholders
                        .entry(placeholder)
                        .or_default();
                    if slot.base.is_some() {
                        warn!(layer = %layer.name, "placeholder base already claimed; first wins");
                        quarantine.push(layer, QuarantineReason::DuplicateBase);
                    } else {
                        slot.base = Some(layer);
                    }
                }
                Classification::Decoration {
                    item,
                    placeholder,
                    role,
                } => {
                    let slot = pending
                        .entry(item)
                        .or_default()
                        .placeholders
                        .entry(placeholder)
                        .or_default();
                    match role {
                        DecorationRole::Shadow => slot.shadows.push(layer),
                        DecorationRole::Patch => slot.patches.push(layer),
                    }
                }
                Classification::Unparseable => {
                    debug!(layer = %layer.name, "unparseable layer name");
                    quarantine.push(layer, QuarantineReason::UnparseableName);
                }
            }
        }

        let items = finalize(pending, &mut quarantine);
        Assembly {
            items,
            environment,
            quarantine,
        }
    }
}

/// Drops placeholders without a base image and items without a valid
/// placeholder, quarantining every layer that loses its anchor.
fn finalize(pending: BTreeMap<String, PendingItem>, quarantine: &mut QuarantineSet) -> Vec<ItemRecord> {
    let mut items = Vec::new();

    for (name, item) in pending {
        let mut placeholders = Vec::new();
        for (key, slot) in item.placeholders {
            match slot.base {
                Some(image) => placeholders.push(PlaceholderRecord {
                    key,
                    image,
                    shadows: slot.shadows,
                    patches: slot.patches,
                }),
                None => {
                    for orphan in slot.shadows.into_iter().chain(slot.patches) {
                        quarantine.push(orphan, QuarantineReason::OrphanedDecoration);
                    }
                }
            }
        }

        if placeholders.is_empty() {
            debug!(item = %name, "dropping item with no valid placeholders");
            if let Some(silhouette) = item.silhouette {
                quarantine.push(silhouette, QuarantineReason::OrphanedDecoration);
            }
            continue;
        }

        items.push(ItemRecord {
            name,
            display_name: None,
            silhouette: item.silhouette,
            placeholders,
        });
    }

    items
}
