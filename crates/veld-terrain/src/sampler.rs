//! Terrain field synthesis: fBm elevation/temperature/moisture sampling
//! with optional domain warping.

use veld_noise::{Perlin, fbm};

use crate::WATER_LEVEL;
use crate::window::{TerrainSample, TerrainWindow};

/// Seed offset decorrelating the temperature field from elevation.
pub const TEMPERATURE_SEED_OFFSET: i32 = 12_345;
/// Seed offset decorrelating the moisture field from elevation.
pub const MOISTURE_SEED_OFFSET: i32 = 54_321;

// Coordinate offsets pushing the climate fields away from the elevation
// field's sample region, so the three channels decorrelate even when driven
// by related seeds.
const TEMPERATURE_COORD_OFFSET: f64 = 1000.0;
const MOISTURE_COORD_OFFSET: f64 = 2000.0;

// Fixed offsets for the two elevation-warp auxiliary fields. Asymmetric so
// the x and y displacement fields do not correlate with each other or with
// the primary sample.
const ELEV_WARP_QX_OFFSET: (f64, f64) = (5.2, 1.3);
const ELEV_WARP_QY_OFFSET: (f64, f64) = (1.3, 2.8);

// The climate channels reuse the elevation noise for their warp fields; the
// second axis is shifted by a per-channel constant.
const TEMPERATURE_WARP_SHIFT: f64 = 10.0;
const MOISTURE_WARP_SHIFT: f64 = 20.0;

/// Tunable parameters for the three terrain fields.
///
/// These are art-direction constants, not protocol data: changing them
/// shifts the biome distribution silently, so the property tests pin the
/// defaults' observable behavior (water coverage, range bounds).
#[derive(Clone, Debug)]
pub struct FieldParams {
    /// Base spatial frequency of the elevation field. Low values produce
    /// large geological features. Default: 0.02.
    pub frequency: f64,
    /// Octave count for the elevation field. Default: 6.
    pub octaves: u32,
    /// Temperature frequency as a fraction of `frequency`. Default: 0.4.
    pub temperature_frequency_ratio: f64,
    /// Moisture frequency as a fraction of `frequency`. Default: 0.6.
    pub moisture_frequency_ratio: f64,
    /// Octave count for the climate fields. Default: 3.
    pub climate_octaves: u32,
    /// Amplitude multiplier per octave. Default: 0.5.
    pub persistence: f64,
    /// Frequency multiplier per octave. Default: 2.0.
    pub lacunarity: f64,
    /// Octave count for the domain-warp displacement fields. Default: 2.
    pub warp_octaves: u32,
    /// Displacement amplitude for the elevation warp, in noise-space units.
    /// Default: 0.8.
    pub elevation_warp: f64,
    /// Displacement amplitude for the climate warps. Default: 0.2.
    pub climate_warp: f64,
    /// Lower bound of the elevation range. Default: -10.
    pub min_elevation: f64,
    /// Upper bound of the elevation range. Default: 10.
    pub max_elevation: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            frequency: 0.02,
            octaves: 6,
            temperature_frequency_ratio: 0.4,
            moisture_frequency_ratio: 0.6,
            climate_octaves: 3,
            persistence: 0.5,
            lacunarity: 2.0,
            warp_octaves: 2,
            elevation_warp: 0.8,
            climate_warp: 0.2,
            min_elevation: -10.0,
            max_elevation: 10.0,
        }
    }
}

/// Samples the three terrain fields for arbitrary world tiles.
///
/// Owns three [`Perlin`] instances derived from one user-facing seed (the
/// primary seed plus [`TEMPERATURE_SEED_OFFSET`] / [`MOISTURE_SEED_OFFSET`]).
/// The tables are read-only after construction, so a sampler can be shared
/// freely; reseeding means building a new sampler, never mutating this one.
pub struct TerrainSampler {
    elevation_noise: Perlin,
    temperature_noise: Perlin,
    moisture_noise: Perlin,
    params: FieldParams,
}

impl TerrainSampler {
    /// Build a sampler for the given seed. `None` draws fresh entropy for
    /// each noise instance.
    pub fn new(seed: Option<i32>, params: FieldParams) -> Self {
        Self {
            elevation_noise: Perlin::new(seed),
            temperature_noise: Perlin::new(seed.map(|s| s.wrapping_add(TEMPERATURE_SEED_OFFSET))),
            moisture_noise: Perlin::new(seed.map(|s| s.wrapping_add(MOISTURE_SEED_OFFSET))),
            params,
        }
    }

    /// Current field parameters.
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Sample all three fields at one world tile.
    ///
    /// Depends only on the seed and the world coordinates, never on any
    /// window, which is what makes re-centered windows seamless.
    pub fn sample_tile(&self, world_x: i64, world_y: i64, use_warp: bool) -> TerrainSample {
        TerrainSample {
            elevation: self.sample_elevation(world_x, world_y, use_warp),
            temperature: self.sample_climate(
                &self.temperature_noise,
                world_x,
                world_y,
                self.params.temperature_frequency_ratio,
                TEMPERATURE_COORD_OFFSET,
                TEMPERATURE_WARP_SHIFT,
                use_warp,
            ),
            moisture: self.sample_climate(
                &self.moisture_noise,
                world_x,
                world_y,
                self.params.moisture_frequency_ratio,
                MOISTURE_COORD_OFFSET,
                MOISTURE_WARP_SHIFT,
                use_warp,
            ),
        }
    }

    /// Generate a full window of terrain fields (pass 1 of the pipeline;
    /// the ocean connection pass runs separately on the result).
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero (caller precondition).
    pub fn sample_window(
        &self,
        tiles_x: u32,
        tiles_y: u32,
        origin_x: i32,
        origin_y: i32,
        use_warp: bool,
    ) -> TerrainWindow {
        let mut window = TerrainWindow::new(tiles_x, tiles_y, origin_x, origin_y);
        for y in 0..tiles_y {
            for x in 0..tiles_x {
                let world_x = i64::from(origin_x) + i64::from(x);
                let world_y = i64::from(origin_y) + i64::from(y);
                let sample = self.sample_tile(world_x, world_y, use_warp);
                let i = window.index(x, y);
                window.elevation[i] = sample.elevation;
                window.temperature[i] = sample.temperature;
                window.moisture[i] = sample.moisture;
            }
        }
        window
    }

    fn sample_elevation(&self, world_x: i64, world_y: i64, use_warp: bool) -> f64 {
        let nx = world_x as f64 * self.params.frequency;
        let ny = world_y as f64 * self.params.frequency;

        let mut hx = nx;
        let mut hy = ny;
        if use_warp {
            let qx = self.warp_field(nx + ELEV_WARP_QX_OFFSET.0, ny + ELEV_WARP_QX_OFFSET.1);
            let qy = self.warp_field(nx + ELEV_WARP_QY_OFFSET.0, ny + ELEV_WARP_QY_OFFSET.1);
            hx += self.params.elevation_warp * qx;
            hy += self.params.elevation_warp * qy;
        }

        let raw = fbm(
            &self.elevation_noise,
            hx,
            hy,
            self.params.octaves,
            self.params.persistence,
            self.params.lacunarity,
        );
        let normalized = ((raw + 1.0) / 2.0).clamp(0.0, 1.0);

        // Piecewise remap: the lower noise half covers the full water depth
        // range and the upper half the land range, pinning the distribution
        // midpoint to the water line.
        if normalized < 0.5 {
            self.params.min_elevation + (normalized / 0.5) * (WATER_LEVEL - self.params.min_elevation)
        } else {
            WATER_LEVEL + ((normalized - 0.5) / 0.5) * (self.params.max_elevation - WATER_LEVEL)
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn sample_climate(
        &self,
        noise: &Perlin,
        world_x: i64,
        world_y: i64,
        frequency_ratio: f64,
        coord_offset: f64,
        warp_shift: f64,
        use_warp: bool,
    ) -> f64 {
        let frequency = self.params.frequency * frequency_ratio;
        let mut cx = world_x as f64 * frequency + coord_offset;
        let mut cy = world_y as f64 * frequency + coord_offset;

        if use_warp {
            let qx = self.warp_field(cx, cy);
            let qy = self.warp_field(cx + warp_shift, cy + warp_shift);
            cx += self.params.climate_warp * qx;
            cy += self.params.climate_warp * qy;
        }

        let raw = fbm(
            noise,
            cx,
            cy,
            self.params.climate_octaves,
            self.params.persistence,
            self.params.lacunarity,
        );
        ((raw + 1.0) / 2.0).clamp(0.0, 1.0)
    }

    /// Low-octave displacement field. All channels warp through the
    /// elevation noise so land shapes and climate bands distort together.
    fn warp_field(&self, x: f64, y: f64) -> f64 {
        fbm(
            &self.elevation_noise,
            x,
            y,
            self.params.warp_octaves,
            self.params.persistence,
            self.params.lacunarity,
        )
    }
}
