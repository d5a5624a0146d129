//! Random point clouds (deterministic, replayable).
//!
//! A replay token `(seed, index)` is mixed into a single RNG, so draws are
//! reproducible and indexable from tests, benches, and the CLI without
//! threading rng state around.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
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

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    /// Axis-aligned sampling box `[0, width] × [0, height]`.
    pub width: f64,
    pub height: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 32,
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Draw `cfg.count` points uniformly from the sampling box.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| Point::new(rng.gen::<f64>() * cfg.width, rng.gen::<f64>() * cfg.height))
        .collect()
}
