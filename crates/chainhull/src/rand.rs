//! Random integer point clouds (square or disk) with replay tokens.
//!
//! Purpose
//! - Reproducible inputs for benches, property checks, and the CLI `sample`
//!   command. A draw is fully determined by `(CloudCfg, ReplayToken)`.
//!
//! Model
//! - `Square`: coordinates uniform in `[-radius, radius]²`.
//! - `Disk`: rejection sampling from the square, keeping `x² + y² <= radius²`.
//!   Hulls of disk clouds have many vertices; square clouds only a few.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::{Point, COORD_LIMIT};

/// Region the points are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    Square,
    Disk,
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    /// Half side length (square) or radius (disk). Clamped to `[0, COORD_LIMIT - 1]`.
    pub radius: i64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            shape: CloudShape::Square,
            radius: 1_000_000,
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
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
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

/// Draw `cfg.count` points.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let r = cfg.radius.clamp(0, COORD_LIMIT - 1);
    let mut out = Vec::with_capacity(cfg.count);
    while out.len() < cfg.count {
        let p = Point::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r));
        if cfg.shape == CloudShape::Disk && !in_disk(p, r) {
            continue;
        }
        out.push(p);
    }
    out
}

#[inline]
fn in_disk(p: Point, r: i64) -> bool {
    let (x, y, r) = (p.x as i128, p.y as i128, r as i128);
    x * x + y * y <= r * r
}
