//! Classic permutation-table Perlin noise.
//!
//! The table is a Fisher–Yates shuffle of the identity sequence `0..=255`,
//! duplicated to length 512 so corner hashing never needs a bounds wrap.
//! Seeded construction drives the shuffle with [`SeededRandom`]; unseeded
//! construction draws from the thread RNG and is intentionally
//! non-reproducible.

use rand::Rng;

use crate::rng::SeededRandom;

/// 3D gradient noise with a seedable permutation table.
///
/// The table is built once at construction and never mutated; `noise3` is a
/// pure function of its inputs and the table. Output is approximately
/// `[-1, 1]` and not strictly bounded at the extremes.
pub struct Perlin {
    perm: [u8; 512],
}

impl Perlin {
    /// Build a noise instance. `Some(seed)` fixes the permutation table
    /// forever; `None` shuffles from OS entropy.
    pub fn new(seed: Option<i32>) -> Self {
        let perm = match seed {
            Some(seed) => {
                let mut rng = SeededRandom::new(seed);
                build_table(|| rng.next())
            }
            None => {
                let mut rng = rand::rng();
                build_table(|| rng.random::<f64>())
            }
        };
        Self { perm }
    }

    /// Evaluate noise at a 3D point.
    pub fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        let xi = (x.floor() as i32 & 255) as usize;
        let yi = (y.floor() as i32 & 255) as usize;
        let zi = (z.floor() as i32 & 255) as usize;

        let x = x - x.floor();
        let y = y - y.floor();
        let z = z - z.floor();

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        let p = &self.perm;
        let a = p[xi] as usize + yi;
        let aa = p[a] as usize + zi;
        let ab = p[a + 1] as usize + zi;
        let b = p[xi + 1] as usize + yi;
        let ba = p[b] as usize + zi;
        let bb = p[b + 1] as usize + zi;

        lerp(
            w,
            lerp(
                v,
                lerp(u, grad(p[aa], x, y, z), grad(p[ba], x - 1.0, y, z)),
                lerp(
                    u,
                    grad(p[ab], x, y - 1.0, z),
                    grad(p[bb], x - 1.0, y - 1.0, z),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(p[aa + 1], x, y, z - 1.0),
                    grad(p[ba + 1], x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad(p[ab + 1], x, y - 1.0, z - 1.0),
                    grad(p[bb + 1], x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }

    #[cfg(test)]
    pub(crate) fn table(&self) -> &[u8; 512] {
        &self.perm
    }
}

fn build_table(mut rand01: impl FnMut() -> f64) -> [u8; 512] {
    let mut p: [u8; 256] = std::array::from_fn(|i| i as u8);
    for i in (1..256usize).rev() {
        let j = (rand01() * (i + 1) as f64).floor() as usize;
        p.swap(i, j);
    }
    let mut table = [0u8; 512];
    table[..256].copy_from_slice(&p);
    table[256..].copy_from_slice(&p);
    table
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Map the low 4 bits of the hash onto 12 gradient directions.
fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_a_duplicated_permutation() {
        let noise = Perlin::new(Some(7));
        let table = noise.table();

        let mut seen = [false; 256];
        for &value in &table[..256] {
            assert!(!seen[value as usize], "value {value} appears twice");
            seen[value as usize] = true;
        }
        assert_eq!(&table[..256], &table[256..]);
    }

    #[test]
    fn seeded_tables_are_reproducible() {
        let a = Perlin::new(Some(42));
        let b = Perlin::new(Some(42));
        assert_eq!(a.table(), b.table());
    }

    #[test]
    fn different_seeds_give_different_tables() {
        let a = Perlin::new(Some(42));
        let b = Perlin::new(Some(43));
        assert_ne!(a.table(), b.table());
    }

    #[test]
    fn noise_is_deterministic_per_seed() {
        let a = Perlin::new(Some(99));
        let b = Perlin::new(Some(99));
        for i in 0..500 {
            let x = i as f64 * 0.137;
            let y = i as f64 * 0.071;
            assert_eq!(a.noise3(x, y, 0.0), b.noise3(x, y, 0.0));
        }
    }

    #[test]
    fn noise_stays_near_unit_range() {
        let noise = Perlin::new(Some(42));
        for i in 0..5_000 {
            let x = i as f64 * 0.173 - 400.0;
            let y = i as f64 * 0.091 + 250.0;
            let v = noise.noise3(x, y, 0.5);
            assert!(v.abs() < 1.5, "noise3({x}, {y}) = {v} far outside [-1, 1]");
        }
    }

    #[test]
    fn noise_is_zero_on_integer_lattice() {
        // All gradients dot a zero offset vector at lattice points.
        let noise = Perlin::new(Some(42));
        for i in -10..10 {
            assert_eq!(noise.noise3(i as f64, (i * 3) as f64, 0.0), 0.0);
        }
    }

    #[test]
    fn noise_is_continuous() {
        let noise = Perlin::new(Some(42));
        let step = 0.001;
        for i in 0..10_000 {
            let x = i as f64 * step;
            let a = noise.noise3(x, 0.3, 0.0);
            let b = noise.noise3(x + step, 0.3, 0.0);
            assert!(
                (a - b).abs() < 0.05,
                "discontinuity at x={x}: {a} vs {b}"
            );
        }
    }

    #[test]
    fn negative_coordinates_are_valid() {
        let noise = Perlin::new(Some(5));
        let v = noise.noise3(-17.42, -3.99, 0.0);
        assert!(v.is_finite());
        assert!(v.abs() < 1.5);
    }
}
