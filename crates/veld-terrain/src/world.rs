//! World generator: seed management and pipeline orchestration.

use tracing::{debug, info};
use veld_noise::seed_from_text;

use crate::ocean::{OceanConnectParams, connect_oceans};
use crate::sampler::{FieldParams, TerrainSampler};
use crate::window::TerrainWindow;

/// Owns the noise stack for one world and produces terrain windows from it.
///
/// The three gradient-noise instances live inside the sampler and are
/// read-only after construction. Reseeding builds a whole new sampler and
/// swaps it in; generation in flight against the old sampler (behind its
/// own reference) is unaffected.
pub struct WorldGenerator {
    sampler: TerrainSampler,
    ocean: OceanConnectParams,
    seed: Option<i32>,
}

impl WorldGenerator {
    /// Create a world with default parameters. `None` produces a
    /// non-deterministic world.
    pub fn new(seed: Option<i32>) -> Self {
        Self::with_params(seed, FieldParams::default(), OceanConnectParams::default())
    }

    /// Create a world with explicit field and ocean parameters.
    pub fn with_params(seed: Option<i32>, params: FieldParams, ocean: OceanConnectParams) -> Self {
        Self {
            sampler: TerrainSampler::new(seed, params),
            ocean,
            seed,
        }
    }

    /// The active seed, `None` when generation is non-deterministic.
    pub fn seed(&self) -> Option<i32> {
        self.seed
    }

    /// The sampler backing this world, for per-tile lookups outside a
    /// generated window (e.g. neighbor-tile movement costs).
    pub fn sampler(&self) -> &TerrainSampler {
        &self.sampler
    }

    /// Reseed from user-facing text. Empty text switches to
    /// non-deterministic generation; anything else is reduced to an i32
    /// via a rolling hash. Rebuilds all three noise instances.
    pub fn set_seed(&mut self, text: &str) {
        let seed = if text.is_empty() {
            None
        } else {
            Some(seed_from_text(text))
        };
        self.reseed(seed);
    }

    /// Replace the noise stack for the given seed.
    pub fn reseed(&mut self, seed: Option<i32>) {
        self.sampler = TerrainSampler::new(seed, self.sampler.params().clone());
        self.seed = seed;
        info!(?seed, "world reseeded");
    }

    /// Generate one terrain window: field synthesis, then the ocean
    /// connection pass when domain warping is on (the pass exists to repair
    /// warp-induced pinching, so it is skipped otherwise).
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero (caller precondition).
    pub fn generate(
        &self,
        tiles_x: u32,
        tiles_y: u32,
        origin_x: i32,
        origin_y: i32,
        use_warp: bool,
    ) -> TerrainWindow {
        let mut window = self
            .sampler
            .sample_window(tiles_x, tiles_y, origin_x, origin_y, use_warp);
        if use_warp {
            connect_oceans(&mut window, &self.ocean);
        }
        debug!(
            tiles_x,
            tiles_y, origin_x, origin_y, use_warp, "generated terrain window"
        );
        window
    }
}
