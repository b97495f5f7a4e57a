//! Concurrent synthesis dispatch.
//!
//! All jobs are launched together on the cooperative runtime and settle
//! independently; one job's failure never aborts or delays its siblings.
//! Suspension happens only at the port boundaries (synthesis, conversion,
//! file IO); planning and report formatting never block.
//!
//! There is deliberately no timeout or cancellation around the external
//! calls: if a synthesis or conversion program hangs, the dispatch stays
//! pending. Callers should not paper over that with retries.

use std::path::PathBuf;
use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::plan::SynthesisJob;
use crate::ports::{AudioConverter, SpeechSynthesizer, SynthesisError};

/// Terminal state of one synthesis job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Final artifact on disk: the converted file, or the raw synthesized
    /// audio when conversion was unavailable. The path's extension matches
    /// the format actually written.
    Written(PathBuf),

    /// Synthesis failed; nothing was produced for this job. The reason is
    /// never empty.
    Failed(String),
}

/// Settled result of one job.
///
/// Carries the job's event, ordinal and text so outcomes re-associate with
/// their jobs by identity, not by completion position.
#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub event: String,
    pub ordinal: usize,
    pub text: String,
    pub status: OutcomeStatus,
}

impl JobOutcome {
    /// True when a final artifact was written (including raw fallback).
    pub fn is_written(&self) -> bool {
        matches!(self.status, OutcomeStatus::Written(_))
    }
}

/// Fans planned jobs out against the speech ports and settles them all.
pub struct Dispatcher {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    converter: Arc<dyn AudioConverter>,
}

impl Dispatcher {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, converter: Arc<dyn AudioConverter>) -> Self {
        Self {
            synthesizer,
            converter,
        }
    }

    /// Run every job concurrently and return one outcome per job.
    ///
    /// Completion order between jobs is unobservable; the returned vector is
    /// in job order only because each future is paired with its own slot.
    pub async fn dispatch(&self, jobs: Vec<SynthesisJob>) -> Vec<JobOutcome> {
        join_all(jobs.into_iter().map(|job| self.settle(job))).await
    }

    async fn settle(&self, job: SynthesisJob) -> JobOutcome {
        let status = match self.produce(&job).await {
            Ok(path) => OutcomeStatus::Written(path),
            Err(err) => {
                warn!(event = %job.event, ordinal = job.ordinal, %err, "synthesis job failed");
                OutcomeStatus::Failed(err.to_string())
            }
        };
        JobOutcome {
            event: job.event,
            ordinal: job.ordinal,
            text: job.text,
            status,
        }
    }

    /// Synthesize, then convert with raw-format fallback.
    ///
    /// Returns the path of whichever artifact ended up on disk.
    async fn produce(&self, job: &SynthesisJob) -> Result<PathBuf, SynthesisError> {
        if let Some(dir) = job.dest.parent() {
            // Idempotent, and safe when sibling jobs race on the same event
            // directory.
            tokio::fs::create_dir_all(dir).await?;
        }

        debug!(event = %job.event, ordinal = job.ordinal, "synthesizing voice line");
        let audio = self.synthesizer.synthesize(&job.text, &job.params).await?;

        let raw_path = job.dest.with_extension(self.synthesizer.raw_extension());
        tokio::fs::write(&raw_path, &audio).await?;
        if raw_path == job.dest {
            // Synthesizer already emits the target format.
            return Ok(raw_path);
        }

        match self.converter.convert(&raw_path, &job.dest).await {
            Ok(()) => {
                if let Err(err) = tokio::fs::remove_file(&raw_path).await {
                    warn!(path = %raw_path.display(), %err, "leaving intermediate audio behind");
                }
                Ok(job.dest.clone())
            }
            Err(err) => {
                // Best-effort normalization only: keep the raw audio as the
                // final artifact, extension and all.
                debug!(event = %job.event, %err, "conversion unavailable, keeping raw audio");
                Ok(raw_path)
            }
        }
    }
}
