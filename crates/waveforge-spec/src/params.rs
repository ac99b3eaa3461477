//! The full parameter set describing one sound.

use serde::{Deserialize, Serialize};

use crate::error::SpecResult;
use crate::validation;
use crate::waveform::Waveform;

/// Parameters for one sound-effect render.
///
/// This is the complete description the sound-design tool edits: envelope
/// timings, oscillator and noise configuration, modulation, filtering, and
/// post-processing gain. All fields are required on the wire; the JSON keys
/// are camelCase, matching the documents the tool saves.
///
/// Construction does not validate; call [`SoundParams::validate`] before
/// rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SoundParams {
    /// Sample rate in Hz. Must be positive.
    pub sample_rate: f64,
    /// Attack time in seconds.
    pub attack: f64,
    /// Sustain time in seconds.
    pub sustain: f64,
    /// Decay time in seconds.
    pub decay: f64,

    /// Tremolo depth in percent (0–100).
    pub tremolo_depth: f64,
    /// Tremolo frequency in Hz.
    pub tremolo_frequency: f64,
    /// Vibrato depth (0–1).
    pub vibrato_depth: f64,
    /// Vibrato frequency in Hz.
    pub vibrato_frequency: f64,

    /// Base oscillator frequency in Hz.
    pub frequency: f64,
    /// Linear frequency sweep over one repetition, in Hz.
    pub frequency_sweep: f64,
    /// Quadratic frequency sweep over one repetition, in Hz.
    pub frequency_delta_sweep: f64,
    /// Repetition frequency in Hz; re-triggers the sweep/jump cycle.
    pub repeat_frequency: f64,
    /// Position of the first frequency jump within a repetition, in percent.
    pub frequency_jump1_onset: f64,
    /// Multiplicative amount of the first frequency jump, in percent.
    pub frequency_jump1_amount: f64,
    /// Position of the second frequency jump within a repetition, in percent.
    pub frequency_jump2_onset: f64,
    /// Multiplicative amount of the second frequency jump, in percent.
    pub frequency_jump2_amount: f64,

    /// Number of harmonics above the fundamental (oscillator shapes only).
    pub harmonics: u32,
    /// Geometric decay ratio applied to each successive harmonic's amplitude.
    pub harmonics_falloff: f64,
    /// Signal shape.
    pub waveform: Waveform,
    /// Square duty cycle in percent (square waveform only).
    pub square_duty: f64,
    /// Square duty sweep over the whole sound, in percent.
    pub square_duty_sweep: f64,

    /// Low-pass cutoff in Hz.
    pub low_pass_cutoff: f64,
    /// Low-pass cutoff sweep over the whole sound, in Hz.
    pub low_pass_cutoff_sweep: f64,
    /// High-pass cutoff in Hz.
    pub high_pass_cutoff: f64,
    /// High-pass cutoff sweep over the whole sound, in Hz.
    pub high_pass_cutoff_sweep: f64,

    /// Power-law compression exponent. Must be positive; 1 is a no-op.
    pub compression: f64,
    /// Scale the buffer so its peak hits the amplification level.
    pub normalization: bool,
    /// Output gain in percent.
    pub amplification: f64,
}

impl SoundParams {
    /// Parses a camelCase JSON parameter document.
    pub fn from_json(text: &str) -> SpecResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes back to the camelCase JSON wire format.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).expect("SoundParams serialization cannot fail")
    }

    /// Checks every field against its domain.
    ///
    /// Runs before generation; a failure means no buffer is produced.
    pub fn validate(&self) -> SpecResult<()> {
        validation::validate(self)
    }
}

impl Default for SoundParams {
    /// The tool's "reset" sound: a short plain sine blip.
    fn default() -> Self {
        Self {
            sample_rate: 44100.0,
            attack: 0.0,
            sustain: 0.05,
            decay: 0.1,
            tremolo_depth: 0.0,
            tremolo_frequency: 10.0,
            vibrato_depth: 0.0,
            vibrato_frequency: 10.0,
            frequency: 500.0,
            frequency_sweep: 0.0,
            frequency_delta_sweep: 0.0,
            repeat_frequency: 0.0,
            frequency_jump1_onset: 33.0,
            frequency_jump1_amount: 0.0,
            frequency_jump2_onset: 66.0,
            frequency_jump2_amount: 0.0,
            harmonics: 0,
            harmonics_falloff: 0.5,
            waveform: Waveform::Sine,
            square_duty: 50.0,
            square_duty_sweep: 0.0,
            low_pass_cutoff: 22050.0,
            low_pass_cutoff_sweep: 0.0,
            high_pass_cutoff: 0.0,
            high_pass_cutoff_sweep: 0.0,
            compression: 1.0,
            normalization: true,
            amplification: 100.0,
        }
    }
}
