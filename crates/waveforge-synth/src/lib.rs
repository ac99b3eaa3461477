//! Waveforge synthesis core.
//!
//! This crate turns a [`waveforge_spec::SoundParams`] into a fixed-length
//! mono sample buffer. The pipeline runs once per sample index, in order:
//! sample source (noise process or harmonic oscillator), frequency control
//! and phase advance, tremolo, one-pole low-pass and high-pass filters,
//! envelope, and power-law compression. A second pass applies normalization
//! and amplification once the peak is known.
//!
//! # Determinism
//!
//! Rendering is fully deterministic. All randomness flows through a PCG32
//! generator seeded with a fixed constant, so re-rendering identical
//! parameters produces a bit-identical buffer — the interactive tool relies
//! on this for reproducible previews. [`render_with_seed`] exposes the seed
//! for variation generation.
//!
//! # Example
//!
//! ```ignore
//! use waveforge_spec::SoundParams;
//! use waveforge_synth::{render, wav::WavResult};
//!
//! let params = SoundParams::from_json(json_text)?;
//! let rendered = render(&params)?;
//! let wav = WavResult::from_rendered(&rendered);
//! std::fs::write("blip.wav", &wav.wav_data)?;
//! ```
//!
//! # Crate structure
//!
//! - [`render()`] / [`render_with_seed()`] - entry points
//! - [`source`] - noise processes and harmonic oscillator shapes
//! - [`frequency`] - instantaneous frequency and phase accumulation
//! - [`filter`] - time-varying one-pole low-/high-pass pair
//! - [`envelope`] - attack/sustain/decay gain
//! - [`rng`] - deterministic RNG
//! - [`wav`] - deterministic mono WAV writer with PCM hashing

pub mod envelope;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod math;
pub mod render;
pub mod rng;
pub mod source;
pub mod wav;

// Re-export main types at crate root
pub use error::{SynthError, SynthResult};
pub use render::{render, render_with_seed, Rendered};
pub use wav::WavResult;
