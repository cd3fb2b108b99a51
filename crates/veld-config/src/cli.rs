//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Veld command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "veld", about = "Deterministic 2-D world generator")]
pub struct CliArgs {
    /// Seed text (empty for a non-deterministic world).
    #[arg(long)]
    pub seed: Option<String>,

    /// Window width in tiles.
    #[arg(long)]
    pub tiles_x: Option<u32>,

    /// Window height in tiles.
    #[arg(long)]
    pub tiles_y: Option<u32>,

    /// World-space x origin of the window.
    #[arg(long)]
    pub origin_x: Option<i32>,

    /// World-space y origin of the window.
    #[arg(long)]
    pub origin_y: Option<i32>,

    /// Enable or disable domain warping.
    #[arg(long)]
    pub warp: Option<bool>,

    /// Directory to write map PNGs into.
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Pixels per tile in the rendered maps.
    #[arg(long)]
    pub tile_scale: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref seed) = args.seed {
            self.world.seed = seed.clone();
        }
        if let Some(tiles_x) = args.tiles_x {
            self.world.tiles_x = tiles_x;
        }
        if let Some(tiles_y) = args.tiles_y {
            self.world.tiles_y = tiles_y;
        }
        if let Some(origin_x) = args.origin_x {
            self.world.origin_x = origin_x;
        }
        if let Some(origin_y) = args.origin_y {
            self.world.origin_y = origin_y;
        }
        if let Some(warp) = args.warp {
            self.world.domain_warp = warp;
        }
        if let Some(ref dir) = args.output_dir {
            self.viz.output_dir = dir.clone();
        }
        if let Some(scale) = args.tile_scale {
            self.viz.tile_scale = scale;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_args() -> CliArgs {
        CliArgs {
            seed: None,
            tiles_x: None,
            tiles_y: None,
            origin_x: None,
            origin_y: None,
            warp: None,
            output_dir: None,
            tile_scale: None,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            seed: Some("fjord".to_string()),
            origin_x: Some(-40),
            warp: Some(false),
            ..no_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.world.seed, "fjord");
        assert_eq!(config.world.origin_x, -40);
        assert!(!config.world.domain_warp);
        // Non-overridden fields retain defaults.
        assert_eq!(config.world.tiles_x, 96);
        assert_eq!(config.viz.tile_scale, 4);
    }

    #[test]
    fn cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&no_args());
        assert_eq!(config, original);
    }

    #[test]
    fn empty_seed_override_is_preserved() {
        // `--seed ""` explicitly requests a non-deterministic world and
        // must not be confused with "no override given".
        let mut config = Config::default();
        let args = CliArgs {
            seed: Some(String::new()),
            ..no_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.world.seed, "");
    }
}
