//! Read JSON datasets from the data root. A missing required file is fatal;
//! a missing per-entity detail file means "entity not found" and is handled
//! by the caller.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// Explicit root of the static data directory. Passed in at startup so no
/// path resolution depends on the process working directory.
#[derive(Debug, Clone)]
pub struct DataRoot {
    root: PathBuf,
}

#[derive(Debug)]
pub enum DataError {
    Missing { path: PathBuf },
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path } => {
                write!(f, "required dataset missing: {}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "unable to read {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid JSON in {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Missing { .. } => None,
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

impl DataRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DataRoot { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Read and parse a dataset the caller cannot proceed without.
    pub fn read_required<T: DeserializeOwned>(&self, relative: &str) -> Result<T, DataError> {
        let path = self.join(relative);
        let raw = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                DataError::Missing { path: path.clone() }
            } else {
                DataError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        serde_json::from_str(&raw).map_err(|source| DataError::Parse { path, source })
    }

    /// Read a dataset that may legitimately be absent. Malformed content is
    /// still an error so bad upstream data fails fast instead of producing
    /// silently wrong numbers downstream.
    pub fn read_optional<T: DeserializeOwned>(
        &self,
        relative: &str,
    ) -> Result<Option<T>, DataError> {
        match self.read_required(relative) {
            Ok(value) => Ok(Some(value)),
            Err(DataError::Missing { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Slugs arrive from URL paths; only plain kebab/snake identifiers may touch
/// the filesystem.
pub fn valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
