//! Error types for the synthesis core.

use thiserror::Error;
use waveforge_spec::SpecError;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while rendering a sound.
///
/// Rendering is a pure computation; once parameters pass validation no error
/// path remains, so everything here is a pre-generation rejection.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Parameter parsing or validation failure.
    #[error(transparent)]
    Spec(#[from] SpecError),
}
