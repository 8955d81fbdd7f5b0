//! Error types for the extraction pipeline.
//!
//! The CLI layer wraps these in `anyhow`; library callers can match on the variants.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The scan mode is neither `php` nor `template`.
    #[error("Invalid value for walk mode: {0}")]
    InvalidMode(String),

    /// The catalog file could not be opened, written or flushed.
    #[error(
        "Failed to open translation file {}. Please be sure that this file is writable",
        path.display()
    )]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read translation catalog {}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed entry in translation catalog {}:{line}", path.display())]
    CatalogParse { path: PathBuf, line: usize },
}
