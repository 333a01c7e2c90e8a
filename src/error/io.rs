use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("asset '{name}' not found in {root} (available: {available:?})")]
    AssetNotFound {
        name: String,
        root: PathBuf,
        available: Vec<String>,
    },

    #[error("asset directory not found: {path}")]
    AssetDirNotFound { path: PathBuf },

    #[error("failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IoError {
    pub fn asset_not_found(
        name: impl Into<String>,
        root: impl Into<PathBuf>,
        available: Vec<String>,
    ) -> Self {
        Self::AssetNotFound {
            name: name.into(),
            root: root.into(),
            available,
        }
    }

    pub fn asset_dir_not_found(path: impl Into<PathBuf>) -> Self {
        Self::AssetDirNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }
}
