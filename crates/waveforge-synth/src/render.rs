//! Render orchestration: the per-sample pipeline and the scaling pass.
//!
//! Pass 1 walks the sample index once, threading all mutable synthesis
//! state (noise recurrences, oscillator phase, filter memories) through an
//! explicit [`SynthState`] value — every sample depends on the state left by
//! the previous one, so this pass is strictly sequential. Pass 2 scales the
//! finished buffer by the amplification (and the measured peak, when
//! normalization is on).

use std::time::Instant;

use rand_pcg::Pcg32;
use waveforge_spec::{SoundParams, Waveform};

use crate::envelope::Envelope;
use crate::error::SynthResult;
use crate::filter::{HighPassFilter, LowPassFilter};
use crate::frequency::{FrequencyShape, PhaseAccumulator};
use crate::math::{self, TWO_PI};
use crate::rng;
use crate::source::{noise, oscillator};

/// One rendered sound.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// The sample buffer, mono, fixed length.
    pub samples: Vec<f32>,
    /// Sample rate in Hz, echoed from the parameters.
    pub sample_rate: f64,
    /// Wall time the render took. Diagnostic only.
    pub render_time_ms: u64,
}

impl Rendered {
    /// Buffer length in samples.
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Buffer length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0_f32, |acc, s| acc.max(s.abs()))
    }
}

/// All mutable state of one render pass.
///
/// Created fresh per call and dropped with it; concurrent renders never
/// share state.
struct SynthState {
    pink: noise::PinkNoise,
    brown: noise::BrownNoise,
    phase: PhaseAccumulator,
    low_pass: LowPassFilter,
    high_pass: HighPassFilter,
}

impl SynthState {
    fn new(params: &SoundParams) -> Self {
        Self {
            pink: noise::PinkNoise::new(),
            brown: noise::BrownNoise::new(),
            phase: PhaseAccumulator::new(params.sample_rate),
            low_pass: LowPassFilter::from_params(params),
            high_pass: HighPassFilter::from_params(params),
        }
    }
}

/// Renders a sound with the fixed default seed.
///
/// This is the call the interactive tool makes: identical parameters always
/// produce an identical buffer.
pub fn render(params: &SoundParams) -> SynthResult<Rendered> {
    render_with_seed(params, rng::DEFAULT_SEED)
}

/// Renders a sound with an explicit noise seed.
///
/// Oscillator waveforms are seed-independent; noise waveforms produce a
/// different realization per seed, which is how variations are generated.
pub fn render_with_seed(params: &SoundParams, seed: u32) -> SynthResult<Rendered> {
    params.validate()?;

    let start = Instant::now();

    let sample_rate = params.sample_rate;
    let num_samples = (sample_rate * (params.attack + params.sustain + params.decay))
        .ceil()
        .max(1.0) as usize;
    let duration = num_samples as f64 / sample_rate;

    // At least one full repetition cycle must fit in the rendered duration,
    // or the sweep/jump logic would never reach its later stages.
    let repeat_frequency = params.repeat_frequency.max(1.0 / duration);

    let mut rng = rng::create_rng(seed);
    let mut state = SynthState::new(params);

    let frequency_shape = FrequencyShape::from_params(params);
    let envelope = Envelope::new(params.attack, params.sustain, params.decay);
    let first_harmonic_amp =
        oscillator::first_harmonic_amp(params.harmonics, params.harmonics_falloff);

    let mut samples = vec![0.0_f32; num_samples];
    let mut max_sample = 0.0_f64;

    for (i, out) in samples.iter_mut().enumerate() {
        let time = i as f64 / sample_rate;
        let fraction = i as f64 / num_samples as f64;
        let fraction_in_repetition = math::frac(time * repeat_frequency);

        let mut sample = raw_sample(params, &mut state, &mut rng, fraction, first_harmonic_amp);

        // The source sample above used the pre-advance phase; move to the
        // next one now that the instantaneous frequency is known.
        let frequency = frequency_shape.at(time, fraction_in_repetition);
        state.phase.advance(frequency);

        // Tremolo
        sample *= 1.0
            - (params.tremolo_depth / 100.0)
                * (0.5 + 0.5 * (TWO_PI * time * params.tremolo_frequency).cos());

        sample = state.low_pass.process(sample, fraction);
        sample = state.high_pass.process(sample, fraction);

        sample *= envelope.gain_at(time);
        sample = compress(sample, params.compression);

        *out = sample as f32;
        max_sample = max_sample.max(sample.abs());
    }

    let mut factor = params.amplification / 100.0;
    if params.normalization && max_sample > 0.0 {
        factor /= max_sample;
    }
    for sample in &mut samples {
        *sample = (*sample as f64 * factor) as f32;
    }

    Ok(Rendered {
        samples,
        sample_rate,
        render_time_ms: start.elapsed().as_millis() as u64,
    })
}

/// Produces the raw, pre-filter signal value for the current sample.
fn raw_sample(
    params: &SoundParams,
    state: &mut SynthState,
    rng: &mut Pcg32,
    fraction: f64,
    first_harmonic_amp: f64,
) -> f64 {
    match params.waveform {
        Waveform::Whitenoise => noise::white(rng),
        Waveform::Pinknoise => state.pink.next(rng),
        Waveform::Brownnoise => state.brown.next(rng),
        shape => {
            let duty = (params.square_duty + fraction * params.square_duty_sweep) / 100.0;
            oscillator::harmonic_sample(
                shape,
                state.phase.phase(),
                params.harmonics,
                params.harmonics_falloff,
                first_harmonic_amp,
                duty,
            )
        }
    }
}

/// Sign-preserving power-law compression.
///
/// The sign branch is explicit: `f64::signum` maps 0 to 1, which would turn
/// silence into full scale for exponents near zero.
fn compress(sample: f64, exponent: f64) -> f64 {
    if sample >= 0.0 {
        sample.powf(exponent)
    } else {
        -(-sample).powf(exponent)
    }
}
