//! Creation directives handed to the external rendering collaborator.
//!
//! The core never touches a render tree. After a build, [`emit_scene`] walks
//! the environment images and placed items and emits one [`SpawnDirective`]
//! per visual, into any [`SpawnSink`]. The collaborator owns actual node
//! creation.
use glam::Vec3;

use crate::place::builder::PlacedItem;
use crate::scene::ImageRef;

/// Where the spawned node attaches in the collaborator's scene graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentKey {
    /// Directly under the scene root. Decorations of placed items go here:
    /// they outlive the pickup of their item.
    SceneRoot,
    /// Under the environment/background group.
    Environment,
    /// Under the named item's node.
    Item(String),
}

/// One "instantiate a visual node" instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnDirective {
    /// Sprite identifier, the source layer name.
    pub sprite: String,
    /// Source asset the sprite is loaded from.
    pub asset_path: String,
    /// World position of the node.
    pub position: Vec3,
    /// Render sorting order.
    pub sorting_order: i32,
    /// Attachment point in the collaborator's hierarchy.
    pub parent: ParentKey,
}

/// Receiver for spawn directives.
pub trait SpawnSink {
    fn spawn(&mut self, directive: SpawnDirective);
}

impl<F: FnMut(SpawnDirective)> SpawnSink for F {
    fn spawn(&mut self, directive: SpawnDirective) {
        self(directive);
    }
}

/// Sink that collects directives into a vector.
#[derive(Debug, Default)]
pub struct VecSink {
    pub directives: Vec<SpawnDirective>,
}

impl SpawnSink for VecSink {
    fn spawn(&mut self, directive: SpawnDirective) {
        self.directives.push(directive);
    }
}

/// Emits directives for a built scene: environment first, then each placed
/// item's base image followed by its decorations.
pub fn emit_scene(environment: &[ImageRef], placed: &[PlacedItem], sink: &mut dyn SpawnSink) {
    for image in environment {
        sink.spawn(directive(image, ParentKey::Environment));
    }

    for item in placed {
        sink.spawn(directive(&item.image, ParentKey::Item(item.item_name.clone())));
        for layer in item.shadows.iter().chain(&item.patches) {
            sink.spawn(directive(layer, ParentKey::SceneRoot));
        }
    }
}

fn directive(image: &ImageRef, parent: ParentKey) -> SpawnDirective {
    SpawnDirective {
        sprite: image.name.clone(),
        asset_path: image.asset_path.clone(),
        position: image.position,
        sorting_order: image.sorting_order,
        parent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(name: &str, shadows: usize) -> PlacedItem {
        PlacedItem {
            item_name: name.to_owned(),
            display_name: name.to_owned(),
            silhouette: None,
            image: ImageRef::new(format!("{name}_01"), "scene.psd").with_sorting_order(3),
            shadows: (0..shadows)
                .map(|i| ImageRef::new(format!("{name}_01_sh{i}"), "scene.psd"))
                .collect(),
            patches: Vec::new(),
        }
    }

    #[test]
    fn environment_precedes_items() {
        let environment = vec![ImageRef::new("back_bg", "scene.psd")];
        let items = vec![placed("owl", 1)];

        let mut sink = VecSink::default();
        emit_scene(&environment, &items, &mut sink);

        let parents: Vec<_> = sink.directives.iter().map(|d| d.parent.clone()).collect();
        assert_eq!(
            parents,
            [
                ParentKey::Environment,
                ParentKey::Item("owl".to_owned()),
                ParentKey::SceneRoot,
            ]
        );
    }

    #[test]
    fn directives_carry_sprite_identity_and_order() {
        let items = vec![placed("owl", 0)];
        let mut sink = VecSink::default();
        emit_scene(&[], &items, &mut sink);

        let directive = &sink.directives[0];
        assert_eq!(directive.sprite, "owl_01");
        assert_eq!(directive.asset_path, "scene.psd");
        assert_eq!(directive.sorting_order, 3);
    }

    #[test]
    fn closures_are_valid_sinks() {
        let mut count = 0usize;
        let mut sink = |_directive: SpawnDirective| count += 1;
        emit_scene(&[], &[placed("owl", 2)], &mut sink);
        assert_eq!(count, 3);
    }
}
