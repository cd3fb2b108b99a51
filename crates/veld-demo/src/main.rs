//! Demo binary: generate one terrain window and write map PNGs.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p veld-demo` for the default window, or e.g.
//! `cargo run -p veld-demo -- --seed glacier --tiles-x 256 --tiles-y 256`.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;
use veld_config::{CliArgs, Config};
use veld_terrain::debug_viz::{DebugImage, render_biome_map, render_elevation_map};
use veld_terrain::{Biome, TerrainWindow, WATER_LEVEL, WorldGenerator, classify};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| {
        veld_config::default_config_dir().expect("failed to resolve config directory")
    });

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    veld_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let mut world = WorldGenerator::new(None);
    world.set_seed(&config.world.seed);
    info!(
        seed_text = %config.world.seed,
        seed = ?world.seed(),
        "generating terrain window"
    );

    let window = world.generate(
        config.world.tiles_x,
        config.world.tiles_y,
        config.world.origin_x,
        config.world.origin_y,
        config.world.domain_warp,
    );

    report_census(&window);

    let out_dir = PathBuf::from(&config.viz.output_dir);
    if let Err(e) = write_maps(&window, &out_dir, config.viz.tile_scale) {
        eprintln!("failed to write maps: {e}");
        std::process::exit(1);
    }
    info!(dir = %out_dir.display(), "maps written");
}

/// Log per-biome tile counts and the overall water fraction.
fn report_census(window: &TerrainWindow) {
    let mut counts = [0usize; Biome::ALL.len()];
    for y in 0..window.tiles_y {
        for x in 0..window.tiles_x {
            let s = window.sample(x, y);
            counts[classify(s.elevation, s.temperature, s.moisture) as usize] += 1;
        }
    }

    let water_tiles = window
        .elevation
        .iter()
        .filter(|&&e| e <= WATER_LEVEL)
        .count();
    info!(
        tiles = window.tile_count(),
        water_fraction = water_tiles as f64 / window.tile_count() as f64,
        "window census"
    );
    for biome in Biome::ALL {
        let count = counts[biome as usize];
        if count > 0 {
            info!(biome = biome.name(), count, "census");
        }
    }
}

fn write_maps(window: &TerrainWindow, out_dir: &Path, scale: u32) -> std::io::Result<()> {
    std::fs::create_dir_all(out_dir)?;
    write_png(&out_dir.join("biomes.png"), &render_biome_map(window, scale))?;
    write_png(
        &out_dir.join("elevation.png"),
        &render_elevation_map(window, scale),
    )?;
    Ok(())
}

fn write_png(path: &Path, image: &DebugImage) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.pixels)?;
    Ok(())
}
