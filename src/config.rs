//! Site configuration: data root, bind address, and default top-N size.
//! Read from docket.yaml when present, then overridden by DOCKET_* env vars.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "docket.yaml";
pub const DEFAULT_DATA_ROOT: &str = "data";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_TOP_N: usize = 20;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub data_root: PathBuf,
    pub bind: String,
    pub top_n: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            data_root: PathBuf::from(DEFAULT_DATA_ROOT),
            bind: DEFAULT_BIND.to_string(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_yaml::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "unable to read config {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SiteConfig {
    /// Load docket.yaml from the working directory when present, then apply
    /// env overrides. A missing file is not an error; a malformed one is.
    pub fn load() -> Result<SiteConfig, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    pub fn load_from(path: &Path) -> Result<SiteConfig, ConfigError> {
        let mut config = match fs::read_to_string(path) {
            Ok(raw) => serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => SiteConfig::default(),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        if let Ok(root) = env::var("DOCKET_DATA_ROOT") {
            config.data_root = PathBuf::from(root);
        }
        if let Ok(bind) = env::var("DOCKET_BIND") {
            config.bind = bind;
        }

        Ok(config)
    }
}
