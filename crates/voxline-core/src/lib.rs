//! Core pipeline for generating event voice lines.
//!
//! The pipeline runs Catalog → Planner → Dispatcher → Report:
//!
//! 1. [`catalog`] resolves a personality tone (or an external override file)
//!    to a set of candidate lines per event.
//! 2. [`plan`] samples lines per requested event and turns them into
//!    [`plan::SynthesisJob`]s.
//! 3. [`dispatch`] fans all jobs out concurrently against the
//!    [`ports::SpeechSynthesizer`] and [`ports::AudioConverter`] capability
//!    ports and settles every job independently.
//! 4. [`report`] renders the settled outcomes into a run summary.
//!
//! No component here spawns processes or parses arguments; the external
//! speech tools live behind the [`ports`] traits (implemented in
//! `voxline-engine`) and the invocation surface lives in `voxline-cli`.

pub mod catalog;
pub mod dispatch;
pub mod plan;
pub mod ports;
pub mod presets;
pub mod report;

// Re-export key types for convenience
pub use catalog::{CatalogError, EventLineSet, LineCatalog, ToneSelection};
pub use dispatch::{Dispatcher, JobOutcome, OutcomeStatus};
pub use plan::{Plan, SkipNotice, SynthesisJob};
pub use ports::{
    AudioConverter, ConversionError, SpeechSynthesizer, SynthesisError, VoiceParams,
};
pub use presets::VoicePreset;
