//! Sample sources: the raw, pre-filter signal.
//!
//! Two families, split by [`waveforge_spec::Waveform::is_noise`]:
//!
//! - [`noise`] - white, pink, and brown noise processes driven by the
//!   deterministic RNG, with per-render filter/walk state
//! - [`oscillator`] - the seven harmonic shapes, summed over a
//!   falloff-weighted harmonic series at the shared oscillator phase

pub mod noise;
pub mod oscillator;
