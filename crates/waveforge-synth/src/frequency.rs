//! Frequency control: sweeps, jumps, vibrato, and phase accumulation.
//!
//! The instantaneous frequency is recomputed for every sample from the
//! position inside the current repetition cycle; the oscillator phase then
//! advances by `frequency / sample_rate` and wraps into `[0, 1)`. Phase is
//! never reset between repetitions, so repeated sweeps stay phase-continuous.

use waveforge_spec::SoundParams;

use crate::math::{self, TWO_PI};

/// The per-sample frequency law of one sound.
///
/// Pure: all mutation lives in [`PhaseAccumulator`].
#[derive(Debug, Clone, Copy)]
pub struct FrequencyShape {
    base: f64,
    sweep: f64,
    delta_sweep: f64,
    jump1_onset: f64,
    jump1_amount: f64,
    jump2_onset: f64,
    jump2_amount: f64,
    vibrato_depth: f64,
    vibrato_frequency: f64,
}

impl FrequencyShape {
    pub fn from_params(params: &SoundParams) -> Self {
        Self {
            base: params.frequency,
            sweep: params.frequency_sweep,
            delta_sweep: params.frequency_delta_sweep,
            jump1_onset: params.frequency_jump1_onset,
            jump1_amount: params.frequency_jump1_amount,
            jump2_onset: params.frequency_jump2_onset,
            jump2_amount: params.frequency_jump2_amount,
            vibrato_depth: params.vibrato_depth,
            vibrato_frequency: params.vibrato_frequency,
        }
    }

    /// Instantaneous frequency at `time`, given the position in the current
    /// repetition cycle (`fraction_in_repetition` in `[0, 1)`).
    ///
    /// Sweeps are linear/quadratic in the repetition fraction; the two jumps
    /// are independent multiplicative steps. Vibrato ADDS an offset
    /// oscillating around +1 Hz rather than scaling the frequency; existing
    /// presets depend on the resulting slight detune, so the composition
    /// must stay additive.
    pub fn at(&self, time: f64, fraction_in_repetition: f64) -> f64 {
        let mut frequency = self.base
            + fraction_in_repetition * self.sweep
            + fraction_in_repetition * fraction_in_repetition * self.delta_sweep;
        if fraction_in_repetition > self.jump1_onset / 100.0 {
            frequency *= 1.0 + self.jump1_amount / 100.0;
        }
        if fraction_in_repetition > self.jump2_onset / 100.0 {
            frequency *= 1.0 + self.jump2_amount / 100.0;
        }
        frequency
            + 1.0
            - self.vibrato_depth
                * (0.5 - 0.5 * (TWO_PI * time * self.vibrato_frequency).sin())
    }
}

/// Oscillator phase, wrapped into `[0, 1)`.
#[derive(Debug, Clone)]
pub struct PhaseAccumulator {
    phase: f64,
    sample_rate: f64,
}

impl PhaseAccumulator {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            sample_rate,
        }
    }

    /// Current phase, before any pending advance.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advances by one sample at the given instantaneous frequency.
    pub fn advance(&mut self, frequency: f64) {
        self.phase = math::frac(self.phase + frequency / self.sample_rate);
    }
}
