//! Noise processes: white, pink, and brown.
//!
//! Pink and brown noise are stateful recurrences over fresh white samples;
//! their state lives for exactly one render and is never shared.

use rand_pcg::Pcg32;

use crate::math;
use crate::rng;

/// One uniform white-noise sample in `[-1, 1]`.
pub fn white(rng: &mut Pcg32) -> f64 {
    rng::uniform(rng, -1.0, 1.0)
}

/// Pink-noise generator using Paul Kellet's pk3 filter bank.
///
/// Six exponentially-weighted one-pole filters plus a direct white term,
/// summed and divided by 7; a seventh tap carries part of the white sample
/// into the next step. The coefficients are fixed; changing them changes the
/// spectrum the tool is known for.
#[derive(Debug, Clone, Default)]
pub struct PinkNoise {
    b: [f64; 7],
}

impl PinkNoise {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the next pink sample from a fresh white sample.
    pub fn next(&mut self, rng: &mut Pcg32) -> f64 {
        let white = white(rng);
        let b = &mut self.b;
        b[0] = 0.99886 * b[0] + white * 0.0555179;
        b[1] = 0.99332 * b[1] + white * 0.0750759;
        b[2] = 0.96900 * b[2] + white * 0.1538520;
        b[3] = 0.86650 * b[3] + white * 0.3104856;
        b[4] = 0.55000 * b[4] + white * 0.5329522;
        b[5] = -0.7616 * b[5] + white * 0.0168980;
        let sample = (b[0] + b[1] + b[2] + b[3] + b[4] + b[5] + b[6] + white * 0.5362) / 7.0;
        b[6] = white * 0.115926;
        sample
    }
}

/// Brown-noise generator: a random walk clamped to `[-1, 1]`.
///
/// The clamped value is what persists, so the walk re-enters from the bound
/// rather than drifting beyond it.
#[derive(Debug, Clone, Default)]
pub struct BrownNoise {
    prev: f64,
}

impl BrownNoise {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the next step of the walk.
    pub fn next(&mut self, rng: &mut Pcg32) -> f64 {
        let white = white(rng);
        let sample = math::clamp(-1.0, 1.0, self.prev + 0.1 * white);
        self.prev = sample;
        sample
    }
}
