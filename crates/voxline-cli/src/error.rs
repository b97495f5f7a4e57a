//! CLI error type and exit-code mapping.

use thiserror::Error;

use voxline_core::catalog::CatalogError;

/// Errors that abort a CLI run.
///
/// Per-job synthesis failures are not errors here; they surface in the run
/// report and only escalate to [`CliError::NothingProduced`] when every
/// planned job failed.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or invalid invocation input.
    #[error("Invalid arguments: {0}")]
    Usage(String),

    /// The custom line file could not be used. Fatal before any synthesis
    /// work; a partial catalog is never used.
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// IO error (resolving the output root, writing artifacts).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Jobs were planned but not a single artifact was written.
    #[error("no voice lines were produced; every synthesis job failed")]
    NothingProduced,
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: general error (total synthesis failure)
    /// - 2: misuse of the command line (invalid arguments)
    /// - 64-78: sysexits.h categories
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,            // EX_USAGE
            Self::Catalog(_) => 65,         // EX_DATAERR
            Self::Io(_) => 74,              // EX_IOERR
            Self::NothingProduced => 1,
        }
    }
}
