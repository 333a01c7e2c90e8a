use std::path::PathBuf;

use tempfile::TempDir;

/// Path to the assets bundled with the crate.
pub fn bundled_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

/// Temp asset root holding a single testspec with `contents`.
pub fn write_testspec(name: &str, contents: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(name), contents).unwrap();
    temp_dir
}
