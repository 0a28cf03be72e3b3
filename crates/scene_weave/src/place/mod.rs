//! Randomized item placement over a coarse occupancy grid.
//!
//! A build is one atomic, single-threaded pass: shuffle items, pick one
//! non-colliding placeholder per item against a per-build [`OccupancyGrid`],
//! and partition the result for gameplay. Randomness enters only through the
//! caller-supplied [`rand::RngCore`], so seeded runs are reproducible.
use rand::RngCore;

pub mod builder;
pub mod grid;
pub mod spawn;

pub use builder::{BuildConfig, BuildResult, PlacedItem, SceneBuilder};
pub use grid::OccupancyGrid;
pub use spawn::{emit_scene, ParentKey, SpawnDirective, SpawnSink, VecSink};

/// Fisher-Yates shuffle driven by a raw [`RngCore`] source.
pub(crate) fn shuffle<T, R: RngCore + ?Sized>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        slice.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut values: Vec<u32> = (0..32).collect();
        shuffle(&mut values, &mut rng);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let mut a: Vec<u32> = (0..16).collect();
        let mut b: Vec<u32> = (0..16).collect();
        shuffle(&mut a, &mut StdRng::seed_from_u64(99));
        shuffle(&mut b, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_handles_trivial_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: [u32; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut single = [42];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, [42]);
    }
}
