//! Terrain window: one generated rectangle of the infinite world.

/// The values sampled for a single tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainSample {
    /// Elevation in `[-10, 10]`.
    pub elevation: f64,
    /// Temperature intensity in `[0, 1]`.
    pub temperature: f64,
    /// Moisture intensity in `[0, 1]`.
    pub moisture: f64,
}

/// Output of one `generate` call: three equal-length flat fields over a
/// `tiles_x × tiles_y` rectangle anchored at a world-space origin.
///
/// Fields are row-major (`index = y * tiles_x + x`). A window is created
/// fresh per call and treated as immutable once returned; the next call
/// supersedes it rather than mutating it.
#[derive(Clone, Debug)]
pub struct TerrainWindow {
    /// Window width in tiles.
    pub tiles_x: u32,
    /// Window height in tiles.
    pub tiles_y: u32,
    /// World-space x coordinate of the window's first column.
    pub origin_x: i32,
    /// World-space y coordinate of the window's first row.
    pub origin_y: i32,
    /// Elevation per tile, row-major.
    pub elevation: Vec<f64>,
    /// Temperature per tile, row-major.
    pub temperature: Vec<f64>,
    /// Moisture per tile, row-major.
    pub moisture: Vec<f64>,
}

impl TerrainWindow {
    /// Create a zero-filled window.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero; positive dimensions are a caller
    /// precondition, not a recoverable error.
    pub fn new(tiles_x: u32, tiles_y: u32, origin_x: i32, origin_y: i32) -> Self {
        assert!(
            tiles_x > 0 && tiles_y > 0,
            "window dimensions must be positive, got {tiles_x}x{tiles_y}"
        );
        let len = tiles_x as usize * tiles_y as usize;
        Self {
            tiles_x,
            tiles_y,
            origin_x,
            origin_y,
            elevation: vec![0.0; len],
            temperature: vec![0.0; len],
            moisture: vec![0.0; len],
        }
    }

    /// Number of tiles in the window.
    pub fn tile_count(&self) -> usize {
        self.tiles_x as usize * self.tiles_y as usize
    }

    /// Flat index for window-local tile coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x >= tiles_x` or `y >= tiles_y`.
    pub fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.tiles_x && y < self.tiles_y,
            "tile ({x}, {y}) outside {}x{} window",
            self.tiles_x,
            self.tiles_y
        );
        y as usize * self.tiles_x as usize + x as usize
    }

    /// All three fields for a window-local tile.
    pub fn sample(&self, x: u32, y: u32) -> TerrainSample {
        let i = self.index(x, y);
        TerrainSample {
            elevation: self.elevation[i],
            temperature: self.temperature[i],
            moisture: self.moisture[i],
        }
    }

    /// Translate world tile coordinates into this window, if covered.
    pub fn world_to_local(&self, world_x: i64, world_y: i64) -> Option<(u32, u32)> {
        let x = world_x - i64::from(self.origin_x);
        let y = world_y - i64::from(self.origin_y);
        if (0..i64::from(self.tiles_x)).contains(&x) && (0..i64::from(self.tiles_y)).contains(&y) {
            Some((x as u32, y as u32))
        } else {
            None
        }
    }

    /// Sample by world tile coordinates, if covered by this window.
    pub fn sample_world(&self, world_x: i64, world_y: i64) -> Option<TerrainSample> {
        self.world_to_local(world_x, world_y)
            .map(|(x, y)| self.sample(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let window = TerrainWindow::new(8, 4, 0, 0);
        assert_eq!(window.index(0, 0), 0);
        assert_eq!(window.index(7, 0), 7);
        assert_eq!(window.index(0, 1), 8);
        assert_eq!(window.index(3, 2), 19);
        assert_eq!(window.tile_count(), 32);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_bounds_index_panics() {
        let window = TerrainWindow::new(4, 4, 0, 0);
        window.index(4, 0);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn zero_dimension_panics() {
        TerrainWindow::new(0, 4, 0, 0);
    }

    #[test]
    fn world_to_local_handles_negative_origins() {
        let window = TerrainWindow::new(10, 10, -5, -5);
        assert_eq!(window.world_to_local(-5, -5), Some((0, 0)));
        assert_eq!(window.world_to_local(4, 4), Some((9, 9)));
        assert_eq!(window.world_to_local(5, 0), None);
        assert_eq!(window.world_to_local(0, -6), None);
    }

    #[test]
    fn sample_world_reads_the_right_tile() {
        let mut window = TerrainWindow::new(3, 3, 100, 200);
        let i = window.index(1, 2);
        window.elevation[i] = 7.5;
        window.temperature[i] = 0.25;
        window.moisture[i] = 0.75;

        let sample = window.sample_world(101, 202).unwrap();
        assert_eq!(sample.elevation, 7.5);
        assert_eq!(sample.temperature, 0.25);
        assert_eq!(sample.moisture, 0.75);
        assert!(window.sample_world(103, 202).is_none());
    }
}
