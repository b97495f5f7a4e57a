//! ffmpeg adapter: normalizes synthesized audio to 44.1 kHz mono.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use voxline_core::ports::{AudioConverter, ConversionError};

/// Program name looked up on `PATH`.
pub const FFMPEG_PROGRAM: &str = "ffmpeg";

const SAMPLE_RATE: &str = "44100";
const CHANNELS: &str = "1";

/// Converts audio files by spawning `ffmpeg`.
///
/// Absence of the program is reported like any other conversion failure;
/// the dispatcher's raw-audio fallback handles both the same way.
#[derive(Debug, Clone)]
pub struct FfmpegConverter {
    program: PathBuf,
}

impl FfmpegConverter {
    /// Adapter using `ffmpeg` from `PATH`.
    pub fn new() -> Self {
        Self::with_program(FFMPEG_PROGRAM)
    }

    /// Adapter using an explicit program path (tests, nonstandard installs).
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Whether the program can be found on `PATH`.
    ///
    /// Advisory only, for up-front user hints; conversion attempts are made
    /// regardless and fall back per job.
    pub fn is_available() -> bool {
        which::which(FFMPEG_PROGRAM).is_ok()
    }
}

impl Default for FfmpegConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioConverter for FfmpegConverter {
    async fn convert(&self, source: &Path, dest: &Path) -> Result<(), ConversionError> {
        debug!(program = %self.program.display(), source = %source.display(), "spawning ffmpeg");
        let output = Command::new(&self.program)
            .arg("-y")
            .arg("-i")
            .arg(source)
            .args(["-ar", SAMPLE_RATE, "-ac", CHANNELS])
            .arg(dest)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|err| {
                ConversionError::Unavailable(format!("{}: {err}", self.program.display()))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConversionError::Failed(format!(
                "{} exited with {}: {}",
                FFMPEG_PROGRAM,
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_program_reports_unavailable() {
        let converter = FfmpegConverter::with_program("/nonexistent/voxline-ffmpeg");
        let err = converter
            .convert(Path::new("/tmp/in.mp3"), Path::new("/tmp/out.wav"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConversionError::Unavailable(_)), "got {err:?}");
    }
}
