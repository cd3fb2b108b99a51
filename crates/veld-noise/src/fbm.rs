//! Fractal Brownian motion: multi-octave noise summation.

use crate::perlin::Perlin;

/// Sum `octaves` layers of noise at increasing frequency and decreasing
/// amplitude, normalized by the total amplitude so the result stays within
/// the underlying noise range regardless of octave count.
///
/// Frequency starts at 1 and is multiplied by `lacunarity` each octave;
/// amplitude starts at 1 and is multiplied by `persistence`. The same
/// routine drives both the primary terrain fields and the domain-warp
/// displacement fields.
pub fn fbm(
    noise: &Perlin,
    x: f64,
    y: f64,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
) -> f64 {
    let mut total = 0.0;
    let mut frequency = 1.0;
    let mut amplitude = 1.0;
    let mut max_value = 0.0;

    for _ in 0..octaves {
        total += noise.noise3(x * frequency, y * frequency, 0.0) * amplitude;
        max_value += amplitude;
        amplitude *= persistence;
        frequency *= lacunarity;
    }

    total / max_value
}
