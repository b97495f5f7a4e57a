//! Capability ports for the external speech tools.
//!
//! Both tools are opaque collaborators with a single operation each:
//! [`SpeechSynthesizer::synthesize`] turns text into raw audio bytes and
//! [`AudioConverter::convert`] rewrites an audio file into the normalized
//! target format. The pipeline in [`crate::dispatch`] operates on trait
//! objects so the real adapters (in `voxline-engine`) can be swapped for
//! in-memory fakes in tests without touching the pipeline logic.

mod converter;
mod synthesizer;

pub use converter::{AudioConverter, ConversionError};
pub use synthesizer::{
    DEFAULT_VOICE, NO_PITCH_ADJUSTMENT, NO_RATE_ADJUSTMENT, SpeechSynthesizer, SynthesisError,
    VoiceParams,
};
