//! Quarantine for layers that could not be structurally attached.
//!
//! Replaces the original pipeline's lazily-created "error folder" scene node
//! with a plain value returned from assembly; whether and how quarantined
//! layers are visualized is the caller's decision.
use crate::scene::ImageRef;

/// Why a layer landed in quarantine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarantineReason {
    /// The name matched no classification rule.
    UnparseableName,
    /// Decoration or silhouette addressed to a placeholder key with no
    /// accepted base image.
    OrphanedDecoration,
    /// Second base image claiming an existing placeholder key; the first
    /// claimant wins.
    DuplicateBase,
    /// Second silhouette for the same item; the first one wins.
    DuplicateSilhouette,
}

/// One quarantined layer together with the reason it was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct QuarantinedLayer {
    pub image: ImageRef,
    pub reason: QuarantineReason,
}

/// Accumulated set of layers that could not be attached to any valid
/// item/placeholder. Never silently dropped; always surfaced to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuarantineSet {
    entries: Vec<QuarantinedLayer>,
}

impl QuarantineSet {
    pub fn push(&mut self, image: ImageRef, reason: QuarantineReason) {
        self.entries.push(QuarantinedLayer { image, reason });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuarantinedLayer> {
        self.entries.iter()
    }

    /// Names of all quarantined layers, in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.image.name.as_str()).collect()
    }
}

impl IntoIterator for QuarantineSet {
    type Item = QuarantinedLayer;
    type IntoIter = std::vec::IntoIter<QuarantinedLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
