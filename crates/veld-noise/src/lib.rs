//! Seeded gradient noise primitives: LCG random sequence, permutation-table
//! Perlin noise, and fractal Brownian motion.

mod fbm;
mod perlin;
mod rng;

pub use fbm::fbm;
pub use perlin::Perlin;
pub use rng::{SeededRandom, seed_from_text};
