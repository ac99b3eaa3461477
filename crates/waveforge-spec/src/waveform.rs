//! Waveform variants.

use serde::{Deserialize, Serialize};

/// The shape of the raw signal, before modulation and filtering.
///
/// The first seven variants are harmonic-oscillator shapes evaluated at the
/// shared oscillator phase; the last three are noise processes and ignore
/// `harmonics`, `harmonicsFalloff`, and the square duty fields entirely.
///
/// The set is closed: a parameter document carrying any other tag is
/// rejected at deserialization rather than falling through to silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    /// Pure sine.
    Sine,
    /// Piecewise-linear triangle.
    Triangle,
    /// Rising sawtooth, wrapped at phase 0.5.
    Sawtooth,
    /// Pulse wave with configurable, sweepable duty cycle.
    Square,
    /// Clipped tangent, a buzzy near-square.
    Tangent,
    /// Sine with a strong 20th-partial overtone.
    Whistle,
    /// Phase-shifted parabola starting at a zero crossing.
    Breaker,
    /// Uniform white noise.
    Whitenoise,
    /// Pink noise (Kellet pk3 filter bank over white noise).
    Pinknoise,
    /// Brown noise (bounded random walk over white noise).
    Brownnoise,
}

impl Waveform {
    /// Returns true for the noise processes (white, pink, brown).
    pub fn is_noise(self) -> bool {
        matches!(self, Self::Whitenoise | Self::Pinknoise | Self::Brownnoise)
    }

    /// The lowercase tag used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Triangle => "triangle",
            Self::Sawtooth => "sawtooth",
            Self::Square => "square",
            Self::Tangent => "tangent",
            Self::Whistle => "whistle",
            Self::Breaker => "breaker",
            Self::Whitenoise => "whitenoise",
            Self::Pinknoise => "pinknoise",
            Self::Brownnoise => "brownnoise",
        }
    }
}

impl std::fmt::Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
