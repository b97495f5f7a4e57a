//! edge-tts adapter: speech synthesis via the `edge-tts` CLI.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use voxline_core::ports::{SpeechSynthesizer, SynthesisError, VoiceParams};

/// Program name looked up on `PATH`.
pub const EDGE_TTS_PROGRAM: &str = "edge-tts";

/// Synthesizes speech by spawning the `edge-tts` command-line tool and
/// reading back the media file it writes.
///
/// The tool emits MP3; normalization to WAV is the converter's concern.
#[derive(Debug, Clone)]
pub struct EdgeTtsSynthesizer {
    program: PathBuf,
}

impl EdgeTtsSynthesizer {
    /// Adapter using `edge-tts` from `PATH`.
    pub fn new() -> Self {
        Self::with_program(EDGE_TTS_PROGRAM)
    }

    /// Adapter using an explicit program path (tests, nonstandard installs).
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Whether the program can be found on `PATH`.
    ///
    /// Advisory only: synthesis does not pre-check this, and a missing
    /// program surfaces per job as [`SynthesisError::Unavailable`].
    pub fn is_available() -> bool {
        which::which(EDGE_TTS_PROGRAM).is_ok()
    }
}

impl Default for EdgeTtsSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Argument list for one synthesis invocation.
///
/// Pitch and rate use the `--flag=value` form: their values start with `+`
/// or `-`, and the space-separated form would be parsed as a new flag.
fn build_args(text: &str, params: &VoiceParams, media: &Path) -> Vec<String> {
    vec![
        "--text".to_owned(),
        text.to_owned(),
        "--voice".to_owned(),
        params.voice.clone(),
        format!("--pitch={}", params.pitch),
        format!("--rate={}", params.rate),
        "--write-media".to_owned(),
        media.display().to_string(),
    ]
}

#[async_trait]
impl SpeechSynthesizer for EdgeTtsSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        params: &VoiceParams,
    ) -> Result<Vec<u8>, SynthesisError> {
        let scratch = tempfile::Builder::new()
            .prefix("voxline-")
            .suffix(".mp3")
            .tempfile()?;
        let media = scratch.path().to_path_buf();

        debug!(program = %self.program.display(), voice = %params.voice, "spawning edge-tts");
        let output = Command::new(&self.program)
            .args(build_args(text, params, &media))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|err| {
                SynthesisError::Unavailable(format!("{}: {err}", self.program.display()))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SynthesisError::Failed(format!(
                "{} exited with {}: {}",
                EDGE_TTS_PROGRAM,
                output.status,
                stderr.trim()
            )));
        }

        let audio = tokio::fs::read(&media).await?;
        if audio.is_empty() {
            // edge-tts can exit 0 without writing audio (e.g. text that
            // reduces to nothing speakable).
            return Err(SynthesisError::Failed("no audio produced".to_owned()));
        }
        Ok(audio)
    }

    fn raw_extension(&self) -> &'static str {
        "mp3"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_use_equals_form_for_signed_values() {
        let params = VoiceParams {
            voice: "en-AU-WilliamNeural".to_owned(),
            pitch: "-10Hz".to_owned(),
            rate: "-5%".to_owned(),
        };
        let args = build_args("Done.", &params, Path::new("/tmp/out.mp3"));
        assert!(args.contains(&"--pitch=-10Hz".to_owned()));
        assert!(args.contains(&"--rate=-5%".to_owned()));
        assert_eq!(args[0..2], ["--text".to_owned(), "Done.".to_owned()]);
        assert_eq!(args[3], "en-AU-WilliamNeural");
        assert_eq!(args[args.len() - 2], "--write-media");
    }

    #[tokio::test]
    async fn missing_program_reports_unavailable() {
        let synth = EdgeTtsSynthesizer::with_program("/nonexistent/voxline-edge-tts");
        let err = synth
            .synthesize("Done.", &VoiceParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SynthesisError::Unavailable(_)), "got {err:?}");
    }

    #[test]
    fn raw_format_is_mp3() {
        assert_eq!(EdgeTtsSynthesizer::new().raw_extension(), "mp3");
    }
}
