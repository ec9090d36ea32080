//! Whole-file input loading.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::fault::{fault, FaultKind};

/// Error type for [`load`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads the whole file at `path` into memory that lives for the rest of the process.
///
/// The buffer is never released; consumers are short-lived programs that load a
/// handful of inputs and exit.
pub fn load(path: impl AsRef<Path>) -> Result<&'static [u8], LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), len = bytes.len(), "loaded input");

    Ok(Box::leak(bytes.into_boxed_slice()))
}

/// Like [`load`], but a failure is a [`FaultKind::Load`] fault.
#[track_caller]
pub fn load_or_fault(path: impl AsRef<Path>) -> &'static [u8] {
    match load(path) {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!(%error, "input unavailable");
            fault(FaultKind::Load, "load")
        }
    }
}
