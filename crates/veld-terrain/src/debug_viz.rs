//! Debug visualization: RGBA map images of generated terrain windows.
//!
//! Used to eyeball generation changes without a renderer attached: one
//! image per field of interest (biome classification, elevation bands).
//! PNG encoding is left to the binary that writes the files.

mod image;
mod renderers;

pub use self::image::DebugImage;
pub use renderers::{biome_color, elevation_color, render_biome_map, render_elevation_map};
