//! Domain validation for sound parameters.
//!
//! Deserialization only guarantees shape; this module checks values. A sound
//! either validates completely and renders, or is rejected here with the
//! first offending field named — generation never starts on bad input.

use crate::error::{SpecError, SpecResult};
use crate::params::SoundParams;

/// Validates every field of `params` against its domain.
pub fn validate(params: &SoundParams) -> SpecResult<()> {
    // Every numeric field must be finite before any range check means much.
    for (name, value) in numeric_fields(params) {
        if !value.is_finite() {
            return Err(SpecError::invalid_param(name, "must be a finite number"));
        }
    }

    if params.sample_rate <= 0.0 {
        return Err(SpecError::invalid_param(
            "sampleRate",
            format!("must be positive, got {}", params.sample_rate),
        ));
    }

    for (name, value) in [
        ("attack", params.attack),
        ("sustain", params.sustain),
        ("decay", params.decay),
    ] {
        if value < 0.0 {
            return Err(SpecError::invalid_param(
                name,
                format!("must not be negative, got {value}"),
            ));
        }
    }

    check_percent("tremoloDepth", params.tremolo_depth)?;
    check_percent("frequencyJump1Onset", params.frequency_jump1_onset)?;
    check_percent("frequencyJump2Onset", params.frequency_jump2_onset)?;

    if !(0.0..=1.0).contains(&params.vibrato_depth) {
        return Err(SpecError::invalid_param(
            "vibratoDepth",
            format!("must be between 0 and 1, got {}", params.vibrato_depth),
        ));
    }

    // Outside [0, 1] the geometric amplitude series can sum to zero and
    // poison the whole buffer through the 1/total normalization.
    if !(0.0..=1.0).contains(&params.harmonics_falloff) {
        return Err(SpecError::invalid_param(
            "harmonicsFalloff",
            format!("must be between 0 and 1, got {}", params.harmonics_falloff),
        ));
    }

    if params.compression <= 0.0 {
        return Err(SpecError::invalid_param(
            "compression",
            format!("must be positive, got {}", params.compression),
        ));
    }

    if params.amplification < 0.0 {
        return Err(SpecError::invalid_param(
            "amplification",
            format!("must not be negative, got {}", params.amplification),
        ));
    }

    Ok(())
}

fn check_percent(name: &str, value: f64) -> SpecResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(SpecError::invalid_param(
            name,
            format!("must be between 0 and 100, got {value}"),
        ));
    }
    Ok(())
}

/// All f64 fields paired with their wire names, for the finiteness sweep.
fn numeric_fields(p: &SoundParams) -> [(&'static str, f64); 25] {
    [
        ("sampleRate", p.sample_rate),
        ("attack", p.attack),
        ("sustain", p.sustain),
        ("decay", p.decay),
        ("tremoloDepth", p.tremolo_depth),
        ("tremoloFrequency", p.tremolo_frequency),
        ("vibratoDepth", p.vibrato_depth),
        ("vibratoFrequency", p.vibrato_frequency),
        ("frequency", p.frequency),
        ("frequencySweep", p.frequency_sweep),
        ("frequencyDeltaSweep", p.frequency_delta_sweep),
        ("repeatFrequency", p.repeat_frequency),
        ("frequencyJump1Onset", p.frequency_jump1_onset),
        ("frequencyJump1Amount", p.frequency_jump1_amount),
        ("frequencyJump2Onset", p.frequency_jump2_onset),
        ("frequencyJump2Amount", p.frequency_jump2_amount),
        ("harmonicsFalloff", p.harmonics_falloff),
        ("squareDuty", p.square_duty),
        ("squareDutySweep", p.square_duty_sweep),
        ("lowPassCutoff", p.low_pass_cutoff),
        ("lowPassCutoffSweep", p.low_pass_cutoff_sweep),
        ("highPassCutoff", p.high_pass_cutoff),
        ("highPassCutoffSweep", p.high_pass_cutoff_sweep),
        ("compression", p.compression),
        ("amplification", p.amplification),
    ]
}
