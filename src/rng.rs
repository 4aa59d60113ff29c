//! Seeded, domain-forked random streams
//!
//! Every random decision in the pipeline is drawn from a stream identified
//! by `(seed, domain path)`. Forking derives a child stream purely from the
//! path, so drawing from a parent never shifts a child and regenerating one
//! glyph never disturbs another.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Name of the top-level domain
pub const ROOT_DOMAIN: &str = "root";

/// 64-bit FNV-1a; stable across platforms and releases
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// A reproducible random stream bound to one domain path
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    domain: String,
    rng: StdRng,
}

impl SeededRng {
    pub fn new(seed: u64, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        let key = format!("{seed}:{domain}");
        Self {
            seed,
            rng: StdRng::seed_from_u64(fnv1a(key.as_bytes())),
            domain,
        }
    }

    /// Stream for the root domain of `seed`
    pub fn root(seed: u64) -> Self {
        Self::new(seed, ROOT_DOMAIN)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Independent child stream for `"{domain}/{sub}"`.
    ///
    /// Does not consume anything from `self`.
    pub fn fork(&self, sub: &str) -> SeededRng {
        SeededRng::new(self.seed, format!("{}/{}", self.domain, sub))
    }

    /// Uniform float in `[0, 1)`
    pub fn random(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform float in `[lo, hi)`
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.random()
    }

    /// Normal sample via Box-Muller.
    ///
    /// Written out rather than taken from `rand_distr::Normal`, whose
    /// sampling algorithm may change between releases and would shift every
    /// seeded alphabet with it.
    pub fn gauss(&mut self, mu: f64, sigma: f64) -> f64 {
        let u1 = self.random();
        let u2 = self.random();
        if sigma == 0.0 {
            return mu;
        }
        // 1 - u1 lies in (0, 1], keeping ln finite
        let radius = (-2.0 * (1.0 - u1).ln()).sqrt();
        mu + sigma * radius * (TAU * u2).cos()
    }

    /// Integer in `[lo, hi]`, both ends inclusive
    pub fn randint(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// True with probability `p`; values outside `[0, 1]` saturate
    pub fn coin(&mut self, p: f64) -> bool {
        self.random() < p
    }

    /// Uniformly chosen element, `None` for an empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..items.len());
        items.get(idx)
    }

    /// In-place Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
