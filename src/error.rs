use std::path::PathBuf;

use thiserror::Error;

/// Failures while acquiring input for an analysis
///
/// The numeric core never fails; only file reading and format parsing do.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no input documents given")]
    NoDocuments,

    #[error("lemma dictionary is not valid JSON: {0}")]
    InvalidLemmaJson(#[source] serde_json::Error),

    #[error("invalid config {path}: {source}")]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
