//! Waveforge sound parameter model.
//!
//! This crate defines the input side of the Waveforge synthesizer: the
//! [`SoundParams`] struct (the full set of knobs a sound is described by),
//! the closed [`Waveform`] enum, and domain validation that runs before any
//! sample is generated.
//!
//! # Wire format
//!
//! Parameters travel as JSON with camelCase keys, matching the documents the
//! interactive sound-design tool saves:
//!
//! ```ignore
//! let params = waveforge_spec::SoundParams::from_json(json_text)?;
//! params.validate()?;
//! ```
//!
//! Deserialization failures (missing fields, unknown keys, unknown waveform
//! tags) surface as [`SpecError::MalformedInput`]; values that parse but lie
//! outside their domain surface as [`SpecError::InvalidParameter`] from
//! [`SoundParams::validate`].

pub mod error;
pub mod params;
pub mod validation;
pub mod waveform;

pub use error::{SpecError, SpecResult};
pub use params::SoundParams;
pub use waveform::Waveform;
