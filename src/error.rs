//! Error types, one enum per concern.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading a graph description.
///
/// Loading either fully succeeds with a graph of exactly the declared
/// vertex count, or fails with one of these; there is no partially-built
/// graph. Invalid edge targets are not represented here: they are
/// non-fatal per-token events, dropped and logged by the loader.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be opened.
    #[error("cannot open graph source {path}: {source}")]
    NotFound {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The first line carries no parseable non-negative vertex count.
    #[error("malformed header: expected a vertex count, found {found:?}")]
    MalformedHeader {
        /// The offending header line.
        found: String,
    },
}

/// Failure while building a word report.
#[derive(Debug, Error)]
pub enum WordsError {
    /// The source file could not be opened or read.
    #[error("cannot open word source {path}: {source}")]
    NotFound {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
