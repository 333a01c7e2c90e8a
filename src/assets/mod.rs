//! Locating bundled asset files by symbolic name.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::IoError;

/// Asset holding the testspec shipped with the binary.
pub const DEFAULT_TESTSPEC_ASSET: &str = "testspec";

const ASSET_DIR_NAME: &str = "assets";

/// Maps a symbolic asset name to a readable file.
pub trait AssetLocator {
    fn locate(&self, name: &str) -> Result<PathBuf, IoError>;
}

/// Assets stored as plain files under one root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Find the asset root for the running binary.
    pub fn discover() -> Self {
        let exe_path = std::env::current_exe().unwrap_or_default();
        let exe_dir = exe_path.parent().unwrap_or(Path::new("."));

        // Installed layout: assets next to the executable
        let installed = exe_dir.join(ASSET_DIR_NAME);
        if installed.is_dir() {
            return Self::new(installed);
        }

        // cargo run from target/debug
        let source_tree = exe_dir
            .parent()
            .and_then(|p| p.parent())
            .map(|p| p.join(ASSET_DIR_NAME));
        if let Some(path) = source_tree {
            if path.is_dir() {
                return Self::new(path);
            }
        }

        Self::new(ASSET_DIR_NAME)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of the files directly under the root, sorted.
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<String> = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .collect();
        names.sort();
        names
    }
}

impl AssetLocator for AssetDir {
    fn locate(&self, name: &str) -> Result<PathBuf, IoError> {
        if !self.root.is_dir() {
            return Err(IoError::asset_dir_not_found(&self.root));
        }

        let path = self.root.join(name);
        if !path.is_file() {
            return Err(IoError::asset_not_found(name, &self.root, self.available()));
        }

        debug!(asset = name, path = %path.display(), "located asset");
        Ok(path)
    }
}
