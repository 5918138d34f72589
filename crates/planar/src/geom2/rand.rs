//! Seeded random point clouds (replayable by token).
//!
//! Purpose
//! - Deterministic hull inputs for benches, the CLI `sample` command, and
//!   randomized tests. The same `(seed, index)` always yields the same cloud.
//!
//! Model
//! - `Disk`: uniform in the disk of radius `radius` (sqrt-radius trick).
//! - `Square`: uniform in `[-radius, radius]²`.
//! - `Circle`: on the circle of radius `radius`; every point is a hull vertex
//!   (up to rounding), useful as a worst case for chain length.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::point::Point2;

/// Sampling region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    Disk,
    Square,
    Circle,
}

impl CloudShape {
    /// Lowercase name (`disk`, `square`, `circle`); None for anything else.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "disk" => Some(CloudShape::Disk),
            "square" => Some(CloudShape::Square),
            "circle" => Some(CloudShape::Circle),
            _ => None,
        }
    }
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    /// Disk/circle radius or square half-width. Negative values are treated as `|radius|`.
    pub radius: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            shape: CloudShape::Disk,
            radius: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points for `tok`.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let r = cfg.radius.abs();
    (0..cfg.count)
        .map(|_| match cfg.shape {
            CloudShape::Square => {
                let x: f64 = rng.gen_range(-1.0..=1.0);
                let y: f64 = rng.gen_range(-1.0..=1.0);
                Point2::new(x * r, y * r)
            }
            CloudShape::Disk => {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                let rho = rng.gen::<f64>().sqrt() * r;
                Point2::new(th.cos() * rho, th.sin() * rho)
            }
            CloudShape::Circle => {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Point2::new(th.cos() * r, th.sin() * r)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = CloudCfg {
            count: 64,
            ..CloudCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        assert_eq!(draw_cloud(cfg, tok), draw_cloud(cfg, tok));
        assert_ne!(draw_cloud(cfg, tok), draw_cloud(cfg, ReplayToken::new(42, 8)));
    }

    #[test]
    fn shapes_respect_radius() {
        let tok = ReplayToken::new(3, 0);
        for shape in [CloudShape::Disk, CloudShape::Square, CloudShape::Circle] {
            let cfg = CloudCfg {
                count: 200,
                shape,
                radius: 2.5,
            };
            let pts = draw_cloud(cfg, tok);
            assert_eq!(pts.len(), 200);
            let bound = match shape {
                CloudShape::Square => 2.5 * std::f64::consts::SQRT_2,
                _ => 2.5,
            };
            assert!(pts.iter().all(|p| p.length() <= bound + 1e-12));
        }
    }

    #[test]
    fn shape_names() {
        assert_eq!(CloudShape::parse("disk"), Some(CloudShape::Disk));
        assert_eq!(CloudShape::parse("square"), Some(CloudShape::Square));
        assert_eq!(CloudShape::parse("circle"), Some(CloudShape::Circle));
        assert_eq!(CloudShape::parse("Disk"), None);
        assert_eq!(CloudShape::parse("hexagon"), None);
    }

    #[test]
    fn empty_cloud() {
        let cfg = CloudCfg {
            count: 0,
            ..CloudCfg::default()
        };
        assert!(draw_cloud(cfg, ReplayToken::new(0, 0)).is_empty());
    }
}
