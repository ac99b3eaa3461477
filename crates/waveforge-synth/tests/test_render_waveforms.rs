//! Full-pipeline coverage across every waveform variant.

use waveforge_spec::{SoundParams, Waveform};
use waveforge_synth::{render, render_with_seed};

const ALL_WAVEFORMS: [Waveform; 10] = [
    Waveform::Sine,
    Waveform::Triangle,
    Waveform::Sawtooth,
    Waveform::Square,
    Waveform::Tangent,
    Waveform::Whistle,
    Waveform::Breaker,
    Waveform::Whitenoise,
    Waveform::Pinknoise,
    Waveform::Brownnoise,
];

fn rich_params(waveform: Waveform) -> SoundParams {
    SoundParams {
        waveform,
        attack: 0.01,
        sustain: 0.05,
        decay: 0.04,
        frequency: 660.0,
        frequency_sweep: -300.0,
        frequency_delta_sweep: 100.0,
        repeat_frequency: 20.0,
        frequency_jump1_onset: 30.0,
        frequency_jump1_amount: 20.0,
        frequency_jump2_onset: 70.0,
        frequency_jump2_amount: -10.0,
        vibrato_depth: 0.5,
        vibrato_frequency: 8.0,
        tremolo_depth: 30.0,
        tremolo_frequency: 12.0,
        harmonics: 3,
        harmonics_falloff: 0.6,
        square_duty: 40.0,
        square_duty_sweep: 30.0,
        low_pass_cutoff: 8000.0,
        low_pass_cutoff_sweep: -4000.0,
        high_pass_cutoff: 100.0,
        high_pass_cutoff_sweep: 200.0,
        compression: 0.8,
        normalization: true,
        amplification: 100.0,
        ..SoundParams::default()
    }
}

#[test]
fn test_every_waveform_renders_finite_buffer() {
    for waveform in ALL_WAVEFORMS {
        let params = rich_params(waveform);
        let rendered = render(&params).unwrap_or_else(|e| panic!("{waveform}: {e}"));

        let expected_len = (params.sample_rate * (params.attack + params.sustain + params.decay))
            .ceil() as usize;
        assert_eq!(rendered.num_samples(), expected_len, "{waveform}");
        assert!(
            rendered.samples.iter().all(|s| s.is_finite()),
            "{waveform} produced non-finite samples"
        );
    }
}

#[test]
fn test_every_waveform_is_deterministic() {
    for waveform in ALL_WAVEFORMS {
        let params = rich_params(waveform);
        let a = render(&params).unwrap();
        let b = render(&params).unwrap();
        assert_eq!(a.samples, b.samples, "{waveform}");
    }
}

#[test]
fn test_every_waveform_is_audible() {
    for waveform in ALL_WAVEFORMS {
        let rendered = render(&rich_params(waveform)).unwrap();
        assert!(rendered.peak() > 0.0, "{waveform} rendered silence");
    }
}

#[test]
fn test_noise_varies_with_seed_oscillators_do_not() {
    for waveform in ALL_WAVEFORMS {
        let params = rich_params(waveform);
        let a = render_with_seed(&params, 1).unwrap();
        let b = render_with_seed(&params, 2).unwrap();
        if waveform.is_noise() {
            assert_ne!(a.samples, b.samples, "{waveform}");
        } else {
            assert_eq!(a.samples, b.samples, "{waveform}");
        }
    }
}

#[test]
fn test_noise_colors_differ_from_each_other() {
    let white = render(&rich_params(Waveform::Whitenoise)).unwrap();
    let pink = render(&rich_params(Waveform::Pinknoise)).unwrap();
    let brown = render(&rich_params(Waveform::Brownnoise)).unwrap();

    assert_ne!(white.samples, pink.samples);
    assert_ne!(white.samples, brown.samples);
    assert_ne!(pink.samples, brown.samples);
}

#[test]
fn test_square_duty_sweep_changes_output() {
    let swept = render(&rich_params(Waveform::Square)).unwrap();
    let unswept = render(&SoundParams {
        square_duty_sweep: 0.0,
        ..rich_params(Waveform::Square)
    })
    .unwrap();
    assert_ne!(swept.samples, unswept.samples);
}

#[test]
fn test_duty_fields_do_not_affect_non_square_shapes() {
    let base = rich_params(Waveform::Sawtooth);
    let a = render(&base).unwrap();
    let b = render(&SoundParams {
        square_duty: 10.0,
        square_duty_sweep: 0.0,
        ..base
    })
    .unwrap();
    assert_eq!(a.samples, b.samples);
}

#[test]
fn test_harmonics_enrich_oscillators() {
    let base = rich_params(Waveform::Sine);
    let plain = render(&SoundParams {
        harmonics: 0,
        ..base.clone()
    })
    .unwrap();
    let rich = render(&SoundParams {
        harmonics: 5,
        ..base
    })
    .unwrap();
    assert_ne!(plain.samples, rich.samples);
}

#[test]
fn test_harmonics_ignored_by_noise() {
    let base = rich_params(Waveform::Pinknoise);
    let a = render(&SoundParams {
        harmonics: 0,
        ..base.clone()
    })
    .unwrap();
    let b = render(&SoundParams {
        harmonics: 7,
        harmonics_falloff: 0.2,
        ..base
    })
    .unwrap();
    assert_eq!(a.samples, b.samples);
}

#[test]
fn test_frequency_jumps_change_oscillator_output() {
    let base = rich_params(Waveform::Triangle);
    let without = render(&SoundParams {
        frequency_jump1_amount: 0.0,
        frequency_jump2_amount: 0.0,
        ..base.clone()
    })
    .unwrap();
    let with = render(&base).unwrap();
    assert_ne!(without.samples, with.samples);
}

#[test]
fn test_tremolo_changes_output() {
    let base = rich_params(Waveform::Breaker);
    let without = render(&SoundParams {
        tremolo_depth: 0.0,
        ..base.clone()
    })
    .unwrap();
    let with = render(&base).unwrap();
    assert_ne!(without.samples, with.samples);
}

#[test]
fn test_filters_change_output() {
    let base = rich_params(Waveform::Whitenoise);
    let open = render(&SoundParams {
        low_pass_cutoff: 44100.0,
        low_pass_cutoff_sweep: 0.0,
        high_pass_cutoff: 0.0,
        high_pass_cutoff_sweep: 0.0,
        ..base.clone()
    })
    .unwrap();
    let filtered = render(&base).unwrap();
    assert_ne!(open.samples, filtered.samples);
}
