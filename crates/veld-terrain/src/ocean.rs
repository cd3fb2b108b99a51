//! Ocean connection pass: erode narrow land bridges so warped oceans stay
//! navigable.
//!
//! Domain warping tends to pinch oceans into chains of disconnected
//! puddles. This pass widens the pinch points: a land tile tightly
//! sandwiched between water on both sides of one axis is lowered to the
//! water line, turning one-tile straits into passable channels. It is a
//! bounded local heuristic, not simulated water flow.

use crate::window::TerrainWindow;

/// Distance recorded when no water is found within range. Large enough that
/// a truncated scan (window edge, or simply no water nearby) can never
/// satisfy the bridge test on its own.
const NO_WATER: u32 = 999;

/// Parameters for the ocean connection pass.
#[derive(Clone, Debug)]
pub struct OceanConnectParams {
    /// Elevation at or below which a tile counts as water. Bridged tiles
    /// are lowered to exactly this value. Default: 6.0.
    pub water_level: f64,
    /// How far to scan for water in each cardinal direction, in tiles.
    /// Also the maximum allowed sum of opposing distances. Default: 5.
    pub search_distance: u32,
}

impl Default for OceanConnectParams {
    fn default() -> Self {
        Self {
            water_level: crate::WATER_LEVEL,
            search_distance: 5,
        }
    }
}

/// Lower pinched land tiles to the water level.
///
/// For every land tile, the nearest water within `search_distance` is found
/// in each of the four cardinal directions. If the opposing distances on
/// either axis sum to at most `search_distance`, the tile becomes water.
/// All decisions read a snapshot of the pre-pass elevation field; writes go
/// to the live buffer, so in-progress edits never feed back into the same
/// pass. Elevation never increases.
pub fn connect_oceans(window: &mut TerrainWindow, params: &OceanConnectParams) {
    let source = window.elevation.clone();
    let tiles_x = window.tiles_x as usize;
    let tiles_y = window.tiles_y as usize;

    for y in 0..tiles_y {
        for x in 0..tiles_x {
            let i = y * tiles_x + x;
            if source[i] <= params.water_level {
                continue;
            }

            let left = water_distance(&source, tiles_x, tiles_y, x, y, -1, 0, params);
            let right = water_distance(&source, tiles_x, tiles_y, x, y, 1, 0, params);
            let up = water_distance(&source, tiles_x, tiles_y, x, y, 0, -1, params);
            let down = water_distance(&source, tiles_x, tiles_y, x, y, 0, 1, params);

            if left + right <= params.search_distance || up + down <= params.search_distance {
                window.elevation[i] = params.water_level;
            }
        }
    }
}

/// Distance in tiles to the nearest water along one cardinal direction, or
/// [`NO_WATER`] if none lies within range (or the window edge cuts the scan
/// short).
fn water_distance(
    source: &[f64],
    tiles_x: usize,
    tiles_y: usize,
    x: usize,
    y: usize,
    dx: isize,
    dy: isize,
    params: &OceanConnectParams,
) -> u32 {
    for d in 1..=params.search_distance {
        let sx = x as isize + dx * d as isize;
        let sy = y as isize + dy * d as isize;
        if sx < 0 || sy < 0 || sx >= tiles_x as isize || sy >= tiles_y as isize {
            break;
        }
        if source[sy as usize * tiles_x + sx as usize] <= params.water_level {
            return d;
        }
    }
    NO_WATER
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAND: f64 = 8.0;
    const WATER: f64 = 4.0;

    fn window_from_rows(rows: &[&[f64]]) -> TerrainWindow {
        let tiles_y = rows.len() as u32;
        let tiles_x = rows[0].len() as u32;
        let mut window = TerrainWindow::new(tiles_x, tiles_y, 0, 0);
        for (y, row) in rows.iter().enumerate() {
            for (x, &e) in row.iter().enumerate() {
                let i = window.index(x as u32, y as u32);
                window.elevation[i] = e;
            }
        }
        window
    }

    #[test]
    fn one_tile_isthmus_is_carved() {
        let mut window = window_from_rows(&[
            &[LAND, LAND, LAND, LAND, LAND],
            &[WATER, WATER, LAND, WATER, WATER],
            &[LAND, LAND, LAND, LAND, LAND],
        ]);
        connect_oceans(&mut window, &OceanConnectParams::default());
        // The middle tile sits one tile from water on both left and right.
        assert_eq!(window.elevation[window.index(2, 1)], 6.0);
    }

    #[test]
    fn vertical_pinch_is_carved() {
        let mut window = window_from_rows(&[
            &[LAND, WATER, LAND],
            &[LAND, LAND, LAND],
            &[LAND, WATER, LAND],
        ]);
        connect_oceans(&mut window, &OceanConnectParams::default());
        assert_eq!(window.elevation[window.index(1, 1)], 6.0);
        // Corner tiles have water on only one axis side; they stay land.
        assert_eq!(window.elevation[window.index(0, 0)], LAND);
    }

    #[test]
    fn wide_landmass_is_untouched() {
        let rows: Vec<Vec<f64>> = (0..16).map(|_| vec![LAND; 16]).collect();
        let refs: Vec<&[f64]> = rows.iter().map(|r| r.as_slice()).collect();
        let mut window = window_from_rows(&refs);
        let before = window.elevation.clone();
        connect_oceans(&mut window, &OceanConnectParams::default());
        assert_eq!(window.elevation, before);
    }

    #[test]
    fn water_on_one_side_only_is_not_bridged() {
        // Coastline: water to the left, deep land to the right. The right
        // scan returns the sentinel, so the sum test cannot pass.
        let rows: Vec<Vec<f64>> = (0..3)
            .map(|_| {
                let mut row = vec![WATER; 2];
                row.extend(vec![LAND; 14]);
                row
            })
            .collect();
        let refs: Vec<&[f64]> = rows.iter().map(|r| r.as_slice()).collect();
        let mut window = window_from_rows(&refs);
        let before = window.elevation.clone();
        connect_oceans(&mut window, &OceanConnectParams::default());
        assert_eq!(window.elevation, before);
    }

    #[test]
    fn erosion_never_raises_elevation() {
        // Pseudo-random landscape with plenty of coast.
        let mut window = TerrainWindow::new(32, 32, 0, 0);
        for i in 0..window.tile_count() {
            let wave = ((i * 7919 + 104729) % 97) as f64 / 97.0;
            window.elevation[i] = -10.0 + wave * 20.0;
        }
        let before = window.elevation.clone();
        connect_oceans(&mut window, &OceanConnectParams::default());
        for (i, (&pre, &post)) in before.iter().zip(&window.elevation).enumerate() {
            assert!(post <= pre, "tile {i} rose from {pre} to {post}");
            if post != pre {
                assert_eq!(post, 6.0, "carved tile {i} must land on the water level");
                assert!(pre > 6.0, "only land tiles may be carved");
            }
        }
    }

    #[test]
    fn decisions_read_the_pre_pass_snapshot() {
        // (1,1) is pinched vertically and gets carved. Against the live
        // buffer, that fresh water would put (2,1) within budget too
        // (left 1 + right 1); against the snapshot its left distance is 2,
        // so it must stay land.
        let mut window = window_from_rows(&[
            &[LAND, WATER, LAND, LAND, LAND],
            &[WATER, LAND, LAND, WATER, LAND],
            &[LAND, WATER, LAND, LAND, LAND],
        ]);
        let params = OceanConnectParams {
            water_level: 6.0,
            search_distance: 2,
        };
        connect_oceans(&mut window, &params);
        assert_eq!(window.elevation[window.index(1, 1)], 6.0);
        assert_eq!(window.elevation[window.index(2, 1)], LAND);
    }

    #[test]
    fn strait_within_budget_is_bridged_across_its_width() {
        let mut window = window_from_rows(&[
            &[WATER, LAND, LAND, WATER],
            &[WATER, LAND, LAND, WATER],
        ]);
        connect_oceans(&mut window, &OceanConnectParams::default());
        for y in 0..2 {
            for x in 1..3 {
                assert_eq!(
                    window.elevation[window.index(x, y)],
                    6.0,
                    "strait tile ({x}, {y}) should be water"
                );
            }
        }
    }
}
