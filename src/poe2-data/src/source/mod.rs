//! Table Sources
//!
//! Core abstraction for reading archive-internal files from an
//! installation. Decoding of the GGPK container and the `.dat64` tables
//! is delegated to an external backend; none is linked into this build,
//! so opening a raw archive reports the backend as unavailable and the
//! caller is expected to fall back to community data.

mod dir;

pub use dir::DirSource;

use std::path::Path;

use crate::rows::Row;

/// Error type for source operations
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("File not found in source: {0}")]
    NotFound(String),

    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("No archive backend is linked to read {0}; use an extracted data directory or community data")]
    BackendUnavailable(String),

    #[error("Not a usable data source: {0}")]
    BadSource(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Trait for reading game data from an installation (extracted tree,
/// archive backend, mock)
pub trait TableSource {
    /// Human-readable origin of this source, for log lines
    fn origin(&self) -> String;

    /// Read the raw bytes of one archive-internal file
    fn read_raw(&self, path: &str) -> SourceResult<Vec<u8>>;

    /// Read one table as decoded, normalized rows
    fn read_table(&self, path: &str) -> SourceResult<Vec<Row>>;
}

/// Open the appropriate source for an installation path.
///
/// A directory opens as an extracted data tree. A `Content.ggpk` archive
/// needs the delegated decoding backend, which is not linked; reading it
/// reports `BackendUnavailable` so callers can route to the fallback.
pub fn open_source(path: &Path) -> SourceResult<DirSource> {
    if path.is_dir() {
        return DirSource::open(path);
    }

    if path.is_file() {
        return Err(SourceError::BackendUnavailable(path.display().to_string()));
    }

    Err(SourceError::BadSource(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_open_source_rejects_missing_path() {
        let err = open_source(Path::new("/nonexistent/poe2")).unwrap_err();
        assert!(matches!(err, SourceError::BadSource(_)));
    }

    #[test]
    fn test_open_source_reports_archive_backend_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let ggpk = dir.path().join("Content.ggpk");
        fs::write(&ggpk, b"GGPK").unwrap();

        let err = open_source(&ggpk).unwrap_err();
        assert!(matches!(err, SourceError::BackendUnavailable(_)));
        assert!(err.to_string().contains("Content.ggpk"));
    }

    #[test]
    fn test_open_source_accepts_extracted_tree() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Data")).unwrap();

        assert!(open_source(dir.path()).is_ok());
    }
}
