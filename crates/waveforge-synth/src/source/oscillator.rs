//! Harmonic oscillator shapes.
//!
//! A raw oscillator sample is the weighted sum, over harmonic index
//! `0..=harmonics`, of a shape function evaluated at
//! `frac(phase * (index + 1))`. Per-harmonic amplitudes form a geometric
//! series in the falloff ratio, scaled so they sum to exactly one before
//! shaping — headroom does not depend on the harmonic count.

use std::f64::consts::PI;

use waveforge_spec::Waveform;

use crate::math::{self, TWO_PI};

/// Amplitude of the fundamental such that the falloff series sums to one.
///
/// Computed by the same accumulation the summing loop uses, so the two stay
/// in exact floating-point agreement.
pub fn first_harmonic_amp(harmonics: u32, falloff: f64) -> f64 {
    let mut amp = 1.0;
    let mut total_amp = 0.0;
    for _ in 0..=harmonics {
        total_amp += amp;
        amp *= falloff;
    }
    1.0 / total_amp
}

/// Sums the harmonic series for one sample at the given oscillator phase.
///
/// `duty` is the instantaneous square duty cycle in `[0, 1]`; other shapes
/// ignore it.
pub fn harmonic_sample(
    waveform: Waveform,
    phase: f64,
    harmonics: u32,
    falloff: f64,
    first_harmonic_amp: f64,
    duty: f64,
) -> f64 {
    let mut amp = first_harmonic_amp;
    let mut sample = 0.0;
    for harmonic_index in 0..=harmonics {
        let harmonic_phase = math::frac(phase * (harmonic_index + 1) as f64);
        sample += amp * shape(waveform, harmonic_phase, duty);
        amp *= falloff;
    }
    sample
}

/// One period of a shape, evaluated at `phase` in `[0, 1)`.
fn shape(waveform: Waveform, phase: f64, duty: f64) -> f64 {
    match waveform {
        Waveform::Sine => (TWO_PI * phase).sin(),
        Waveform::Triangle => {
            if phase < 0.25 {
                4.0 * phase
            } else if phase < 0.75 {
                2.0 - 4.0 * phase
            } else {
                -4.0 + 4.0 * phase
            }
        }
        Waveform::Sawtooth => {
            if phase < 0.5 {
                2.0 * phase
            } else {
                -2.0 + 2.0 * phase
            }
        }
        Waveform::Square => {
            if phase < duty {
                1.0
            } else {
                -1.0
            }
        }
        // The clamp bounds the asymptotes so normalization stays usable.
        Waveform::Tangent => math::clamp(-2.0, 2.0, 0.3 * (PI * phase).tan()),
        Waveform::Whistle => {
            0.75 * (TWO_PI * phase).sin() + 0.25 * (40.0 * PI * phase).sin()
        }
        Waveform::Breaker => {
            // Shift the parabola so the period starts at a zero crossing.
            let mut p = phase + 0.75_f64.sqrt();
            if p >= 1.0 {
                p -= 1.0;
            }
            -1.0 + 2.0 * (1.0 - 2.0 * p * p).abs()
        }
        Waveform::Whitenoise | Waveform::Pinknoise | Waveform::Brownnoise => {
            unreachable!("noise waveforms are generated by the noise module")
        }
    }
}
