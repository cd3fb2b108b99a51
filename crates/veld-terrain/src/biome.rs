//! Biome classification and per-biome gameplay attributes.

use crate::WATER_LEVEL;

// Elevation bands. Everything at or below the water level is water; a
// narrow band just above it is coastline; the peaks sit above 8.5.
const DEEP_OCEAN_MAX: f64 = 2.5;
const COASTAL_MAX: f64 = 6.2;
const HIGHLAND_MIN: f64 = 8.5;

/// The fixed set of terrain categories.
///
/// Not stored in a [`crate::TerrainWindow`]: classification is recomputed
/// on demand from the sampled fields, keeping the decision rule the single
/// source of truth for rendering and gameplay alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    DeepOcean,
    Ocean,
    Beach,
    Snow,
    Tundra,
    Grass,
    Forest,
    Jungle,
    Savanna,
    Desert,
    Badlands,
    Mountain,
    SnowyMountain,
}

impl Biome {
    /// Every biome, in declaration order.
    pub const ALL: [Biome; 13] = [
        Biome::DeepOcean,
        Biome::Ocean,
        Biome::Beach,
        Biome::Snow,
        Biome::Tundra,
        Biome::Grass,
        Biome::Forest,
        Biome::Jungle,
        Biome::Savanna,
        Biome::Desert,
        Biome::Badlands,
        Biome::Mountain,
        Biome::SnowyMountain,
    ];

    /// Stable lowercase identifier for logs and config.
    pub fn name(self) -> &'static str {
        match self {
            Biome::DeepOcean => "deep_ocean",
            Biome::Ocean => "ocean",
            Biome::Beach => "beach",
            Biome::Snow => "snow",
            Biome::Tundra => "tundra",
            Biome::Grass => "grass",
            Biome::Forest => "forest",
            Biome::Jungle => "jungle",
            Biome::Savanna => "savanna",
            Biome::Desert => "desert",
            Biome::Badlands => "badlands",
            Biome::Mountain => "mountain",
            Biome::SnowyMountain => "snowy_mountain",
        }
    }

    /// Player movement speed multiplier on this biome.
    pub fn movement_speed(self) -> f64 {
        match self {
            Biome::DeepOcean => 0.15,
            Biome::Ocean => 0.3,
            Biome::Tundra | Biome::Snow | Biome::SnowyMountain => 0.45,
            Biome::Beach | Biome::Desert | Biome::Badlands => 0.5,
            Biome::Mountain => 0.8,
            Biome::Grass | Biome::Forest | Biome::Jungle | Biome::Savanna => 1.0,
        }
    }

    /// Whether entities float/sink here rather than walk.
    pub fn is_water(self) -> bool {
        matches!(self, Biome::DeepOcean | Biome::Ocean)
    }

    /// Whether entering this biome uses the climb animation.
    pub fn is_climbable(self) -> bool {
        matches!(
            self,
            Biome::Mountain | Biome::SnowyMountain | Biome::Badlands | Biome::Tundra
        )
    }
}

/// Map a sampled `(elevation, temperature, moisture)` triple to a biome.
///
/// Ordered decision tree, first match wins. Total over the contract ranges
/// (elevation `[-10, 10]`, temperature/moisture `[0, 1]`), deterministic,
/// and side-effect free; callers may invoke it on any triple, including
/// neighbor tiles outside the current window.
pub fn classify(elevation: f64, temperature: f64, moisture: f64) -> Biome {
    if elevation <= WATER_LEVEL {
        return if elevation <= DEEP_OCEAN_MAX {
            Biome::DeepOcean
        } else {
            Biome::Ocean
        };
    }

    if elevation > HIGHLAND_MIN {
        return if temperature < 0.4 {
            Biome::SnowyMountain
        } else {
            Biome::Mountain
        };
    }

    if elevation < COASTAL_MAX {
        if temperature < 0.2 {
            return Biome::Tundra;
        }
        if temperature > 0.8 && moisture < 0.3 {
            return Biome::Desert;
        }
        return Biome::Beach;
    }

    // Mid-altitude band: temperature first, then moisture.
    if temperature < 0.3 {
        return if moisture < 0.5 {
            Biome::Tundra
        } else {
            Biome::Snow
        };
    }
    if temperature < 0.6 {
        // Warm and dry stays grass all the way down the moisture range.
        return if moisture < 0.6 {
            Biome::Grass
        } else {
            Biome::Jungle
        };
    }
    if temperature < 0.8 {
        if moisture < 0.2 {
            return Biome::Desert;
        }
        if moisture < 0.5 {
            return Biome::Savanna;
        }
        return Biome::Forest;
    }

    if moisture < 0.2 {
        return Biome::Badlands;
    }
    if moisture < 0.4 {
        return Biome::Desert;
    }
    Biome::Savanna
}
