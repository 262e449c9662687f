//! Extracted data tree source
//!
//! Reads archive-internal paths from a directory on disk. Extraction
//! tools write these trees with inconsistent casing (`Data/` vs `data/`),
//! so lookups go through a case-insensitive index built at open time.
//!
//! Tables are read from the pre-decoded JSON row dumps that exporters
//! write beside (or instead of) the `.dat64` binaries: `Data/Mods.dat64`
//! is served from `Data/Mods.json`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{SourceError, SourceResult, TableSource};
use crate::rows::{normalize_rows, Row};

/// Source backed by an extracted data tree on disk
#[derive(Debug)]
pub struct DirSource {
    root: PathBuf,
    index: HashMap<String, PathBuf>,
}

impl DirSource {
    /// Open an extracted data tree, indexing every file under it
    pub fn open<P: AsRef<Path>>(root: P) -> SourceResult<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(SourceError::BadSource(root.display().to_string()));
        }

        let mut index = HashMap::new();
        for entry in WalkDir::new(&root).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&root) else {
                continue;
            };
            let key = index_key(&rel.to_string_lossy());
            index.insert(key, entry.path().to_path_buf());
        }

        Ok(Self { root, index })
    }

    /// Number of files indexed under the tree
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when the tree contains no files
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn resolve(&self, path: &str) -> Option<&Path> {
        self.index.get(&index_key(path)).map(PathBuf::as_path)
    }

    /// On-disk dump path for a table: final extension replaced with .json
    fn dump_path(path: &str) -> String {
        match path.rsplit_once('.') {
            Some((stem, _)) => format!("{}.json", stem),
            None => format!("{}.json", path),
        }
    }
}

fn index_key(path: &str) -> String {
    path.replace('\\', "/").to_ascii_lowercase()
}

impl TableSource for DirSource {
    fn origin(&self) -> String {
        self.root.display().to_string()
    }

    fn read_raw(&self, path: &str) -> SourceResult<Vec<u8>> {
        let file = self
            .resolve(path)
            .ok_or_else(|| SourceError::NotFound(path.to_string()))?;
        Ok(fs::read(file)?)
    }

    fn read_table(&self, path: &str) -> SourceResult<Vec<Row>> {
        let dump = Self::dump_path(path);
        let Some(file) = self.resolve(&dump) else {
            if self.resolve(path).is_some() {
                return Err(SourceError::Decode {
                    path: path.to_string(),
                    reason: format!("no decoded row dump at {}", dump),
                });
            }
            return Err(SourceError::NotFound(path.to_string()));
        };

        let data = fs::read(file)?;
        let values: Vec<serde_json::Value> =
            serde_json::from_slice(&data).map_err(|e| SourceError::Decode {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        normalize_rows(values).map_err(|e| SourceError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}
