//! Deterministic 2-D world generation: seeded fBm terrain fields, domain
//! warping, ocean-bridge erosion, and biome classification.
//!
//! The pipeline is `WorldGenerator` → `TerrainSampler` (elevation,
//! temperature, moisture fields) → ocean connection pass → caller, who
//! applies `classify` per tile as needed. Everything is a pure function of
//! `(seed, world coordinates)`, so re-generating a window around a moving
//! camera produces seamless, drift-free terrain.

mod biome;
mod ocean;
mod sampler;
mod window;
mod world;

pub mod debug_viz;

pub use biome::{Biome, classify};
pub use ocean::{OceanConnectParams, connect_oceans};
pub use sampler::{FieldParams, TerrainSampler};
pub use window::{TerrainSample, TerrainWindow};
pub use world::WorldGenerator;

/// Elevation threshold separating water biomes from land biomes.
///
/// The elevation remap in [`TerrainSampler`] pins the midpoint of the noise
/// distribution to this value, which is what holds water coverage near 50%.
pub const WATER_LEVEL: f64 = 6.0;
