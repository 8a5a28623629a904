mod kruskal;
mod union_find;

pub(crate) use kruskal::carve;

use rand::{SeedableRng, rngs::StdRng};

/// Get the generator driving maze construction. Seeded, so the same seed
/// reproduces the same maze.
pub(crate) fn get_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
