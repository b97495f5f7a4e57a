//! Speech synthesis port.

use async_trait::async_trait;

/// Voice used when neither an explicit identifier nor a preset is given.
pub const DEFAULT_VOICE: &str = "en-GB-RyanNeural";

/// Pitch value meaning "no adjustment".
pub const NO_PITCH_ADJUSTMENT: &str = "+0Hz";

/// Rate value meaning "no adjustment".
pub const NO_RATE_ADJUSTMENT: &str = "+0%";

/// Voice selection and prosody adjustments for one synthesis run.
///
/// Pitch and rate are signed adjustment strings in the synthesizer's own
/// notation (`+20Hz`, `-5%`), passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceParams {
    /// Voice identifier (e.g. `en-GB-RyanNeural`).
    pub voice: String,

    /// Pitch adjustment (e.g. `+20Hz`, `-10Hz`).
    pub pitch: String,

    /// Rate adjustment (e.g. `+15%`, `-5%`).
    pub rate: String,
}

impl Default for VoiceParams {
    fn default() -> Self {
        Self {
            voice: DEFAULT_VOICE.to_owned(),
            pitch: NO_PITCH_ADJUSTMENT.to_owned(),
            rate: NO_RATE_ADJUSTMENT.to_owned(),
        }
    }
}

/// Errors from the synthesis port.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// The synthesis program could not be invoked at all.
    #[error("Speech synthesizer not available: {0}")]
    Unavailable(String),

    /// The synthesis program ran but did not produce usable audio.
    #[error("Speech synthesis failed: {0}")]
    Failed(String),

    /// IO error around the synthesized audio (scratch files, output dirs).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Backend-agnostic text-to-speech engine.
///
/// Implementations must be `Send + Sync` so the dispatcher can share them
/// across concurrently settling jobs behind an `Arc`.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` into raw audio bytes.
    ///
    /// The bytes are in the synthesizer's native container format; callers
    /// name files for them with [`Self::raw_extension`].
    async fn synthesize(
        &self,
        text: &str,
        params: &VoiceParams,
    ) -> Result<Vec<u8>, SynthesisError>;

    /// File extension of the raw audio this synthesizer produces (no dot).
    fn raw_extension(&self) -> &'static str;
}
