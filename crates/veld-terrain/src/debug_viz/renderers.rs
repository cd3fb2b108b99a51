//! Map renderers: biome classification and elevation bands as RGBA images.

use super::image::DebugImage;
use crate::biome::{Biome, classify};
use crate::window::TerrainWindow;
use crate::WATER_LEVEL;

/// Representative color for each biome.
pub fn biome_color(biome: Biome) -> (u8, u8, u8) {
    match biome {
        Biome::DeepOcean => (12, 40, 110),
        Biome::Ocean => (30, 80, 180),
        Biome::Beach => (230, 210, 140),
        Biome::Snow => (235, 240, 245),
        Biome::Tundra => (170, 185, 170),
        Biome::Grass => (100, 170, 70),
        Biome::Forest => (40, 110, 45),
        Biome::Jungle => (20, 85, 30),
        Biome::Savanna => (185, 170, 80),
        Biome::Desert => (220, 190, 100),
        Biome::Badlands => (175, 110, 70),
        Biome::Mountain => (130, 115, 100),
        Biome::SnowyMountain => (200, 205, 215),
    }
}

/// Map an elevation in `[-10, 10]` to a hypsometric color: depth-shaded
/// blues below the water line, greens through browns to white above it.
pub fn elevation_color(elevation: f64) -> (u8, u8, u8) {
    if elevation <= WATER_LEVEL {
        // Depth 0 at the water line, 1 at the bottom of the range.
        let depth = ((WATER_LEVEL - elevation) / 16.0).clamp(0.0, 1.0);
        (
            (40.0 - depth * 30.0) as u8,
            (110.0 - depth * 75.0) as u8,
            (200.0 - depth * 90.0) as u8,
        )
    } else {
        let rise = ((elevation - WATER_LEVEL) / 4.0).clamp(0.0, 1.0);
        if rise < 0.55 {
            let t = rise / 0.55;
            (
                (70.0 + t * 70.0) as u8,
                (150.0 - t * 30.0) as u8,
                (60.0 + t * 10.0) as u8,
            )
        } else if rise < 0.85 {
            let t = (rise - 0.55) / 0.3;
            (
                (140.0 - t * 20.0) as u8,
                (120.0 - t * 25.0) as u8,
                (70.0 + t * 15.0) as u8,
            )
        } else {
            let t = (rise - 0.85) / 0.15;
            let base = 170.0 + t * 85.0;
            (base as u8, base as u8, base as u8)
        }
    }
}

/// Render the classified biome of every tile, `scale` pixels per tile.
pub fn render_biome_map(window: &TerrainWindow, scale: u32) -> DebugImage {
    let scale = scale.max(1);
    let mut image = DebugImage::new(window.tiles_x * scale, window.tiles_y * scale);
    for y in 0..window.tiles_y {
        for x in 0..window.tiles_x {
            let sample = window.sample(x, y);
            let biome = classify(sample.elevation, sample.temperature, sample.moisture);
            image.fill_block(x * scale, y * scale, scale, scale, biome_color(biome));
        }
    }
    image
}

/// Render the raw elevation field, `scale` pixels per tile.
pub fn render_elevation_map(window: &TerrainWindow, scale: u32) -> DebugImage {
    let scale = scale.max(1);
    let mut image = DebugImage::new(window.tiles_x * scale, window.tiles_y * scale);
    for y in 0..window.tiles_y {
        for x in 0..window.tiles_x {
            let e = window.elevation[window.index(x, y)];
            image.fill_block(x * scale, y * scale, scale, scale, elevation_color(e));
        }
    }
    image
}
