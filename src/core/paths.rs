//! Path layout utilities
//!
//! Tables live under `<root>/data`, the dashboard under `<root>/outputs`.
//! Paths shown to the operator are normalized to '/' and relative to root.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the flow edge table
pub const FLOW_TABLE: &str = "supply_chain_flow.csv";

/// File name of the sales summary table
pub const SUMMARY_TABLE: &str = "sales_by_channel.csv";

/// Default file name of the rendered dashboard
pub const DASHBOARD_FILE: &str = "golden_image.html";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Display form of a path: relative to root when possible
pub fn display_path(path: &Path, root: &Path) -> String {
    make_relative(path, root).unwrap_or_else(|| normalize_path(path))
}

/// Directory holding the exported tables
pub fn data_dir(root: &Path) -> PathBuf {
    root.join("data")
}

/// Directory holding the rendered dashboard
pub fn outputs_dir(root: &Path) -> PathBuf {
    root.join("outputs")
}

pub fn flow_table_path(root: &Path) -> PathBuf {
    data_dir(root).join(FLOW_TABLE)
}

pub fn summary_table_path(root: &Path) -> PathBuf {
    data_dir(root).join(SUMMARY_TABLE)
}

/// Create a directory (and parents) if it does not exist yet
pub fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {:?}", dir))?;
    }
    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("data/supply_chain_flow.csv");
        assert_eq!(normalize_path(path), "data/supply_chain_flow.csv");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/project");
        let path = Path::new("/project/data/sales_by_channel.csv");
        assert_eq!(
            make_relative(path, root),
            Some("data/sales_by_channel.csv".to_string())
        );
    }

    #[test]
    fn test_display_path_outside_root() {
        let root = Path::new("/project");
        let path = Path::new("/other/golden_image.html");
        assert_eq!(display_path(path, root), "/other/golden_image.html");
    }

    #[test]
    fn test_table_paths() {
        let root = Path::new("/project");
        assert_eq!(
            flow_table_path(root),
            PathBuf::from("/project/data/supply_chain_flow.csv")
        );
        assert_eq!(
            summary_table_path(root),
            PathBuf::from("/project/data/sales_by_channel.csv")
        );
        assert_eq!(outputs_dir(root), PathBuf::from("/project/outputs"));
    }

    #[test]
    fn test_ensure_dir_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("data");

        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();

        assert!(dir.is_dir());
    }
}
