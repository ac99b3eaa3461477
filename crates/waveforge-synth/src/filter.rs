//! One-pole filters with per-sample cutoff sweeps.
//!
//! Both filters recompute their coefficient every sample from a linearly
//! swept cutoff, clamped to `[0, sampleRate/2]`. The recurrences and the
//! alpha derivations below define the tool's filter character and are kept
//! exactly as-is, including the low-pass alpha's inverted convention.

use waveforge_spec::SoundParams;

use crate::math;

/// Swept one-pole low-pass: `y[n] = α·x[n] + (1−α)·y[n−1]`.
#[derive(Debug, Clone)]
pub struct LowPassFilter {
    sample_rate: f64,
    cutoff: f64,
    cutoff_sweep: f64,
    prev: f64,
}

impl LowPassFilter {
    pub fn from_params(params: &SoundParams) -> Self {
        Self {
            sample_rate: params.sample_rate,
            cutoff: params.low_pass_cutoff,
            cutoff_sweep: params.low_pass_cutoff_sweep,
            prev: 0.0,
        }
    }

    /// Filters one sample; `fraction` is the position in the whole sound.
    pub fn process(&mut self, sample: f64, fraction: f64) -> f64 {
        let cutoff = math::clamp(
            0.0,
            self.sample_rate / 2.0,
            self.cutoff + fraction * self.cutoff_sweep,
        );
        let wc = cutoff / self.sample_rate * std::f64::consts::PI;
        let cos_wc = wc.cos();
        let alpha = if cos_wc <= 0.0 {
            // At or past the band edge the filter passes everything.
            1.0
        } else {
            // Solve cos wc = 2a/(1+a²) for a, then invert the convention.
            let a = 1.0 / cos_wc - (1.0 / (cos_wc * cos_wc) - 1.0).sqrt();
            1.0 - a
        };
        let out = alpha * sample + (1.0 - alpha) * self.prev;
        self.prev = out;
        out
    }
}

/// Swept one-pole high-pass: `y[n] = α·(y[n−1] − x[n−1] + x[n])`.
#[derive(Debug, Clone)]
pub struct HighPassFilter {
    sample_rate: f64,
    cutoff: f64,
    cutoff_sweep: f64,
    prev_in: f64,
    prev_out: f64,
}

impl HighPassFilter {
    pub fn from_params(params: &SoundParams) -> Self {
        Self {
            sample_rate: params.sample_rate,
            cutoff: params.high_pass_cutoff,
            cutoff_sweep: params.high_pass_cutoff_sweep,
            prev_in: 0.0,
            prev_out: 0.0,
        }
    }

    /// Filters one sample; `fraction` is the position in the whole sound.
    pub fn process(&mut self, sample: f64, fraction: f64) -> f64 {
        let cutoff = math::clamp(
            0.0,
            self.sample_rate / 2.0,
            self.cutoff + fraction * self.cutoff_sweep,
        );
        let wc = cutoff / self.sample_rate * std::f64::consts::PI;
        let alpha = (1.0 - wc.sin()) / wc.cos();
        let out = alpha * (self.prev_out - self.prev_in + sample);
        self.prev_in = sample;
        self.prev_out = out;
        out
    }
}
