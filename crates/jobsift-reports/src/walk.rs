//! Filesystem discovery for the report pipelines.
//!
//! All helpers return sorted paths so runs are deterministic regardless of
//! directory-entry order.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Recursively collect files named `meta.json` under `root`.
pub fn collect_meta_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    collect_files(root, |path| path.file_name() == Some(OsStr::new("meta.json")))
}

/// Recursively collect `.csv` files whose parent directory name starts with
/// `dir_prefix`.
pub fn collect_prefixed_csv_files(root: &Path, dir_prefix: &str) -> anyhow::Result<Vec<PathBuf>> {
    collect_files(root, |path| {
        path.extension() == Some(OsStr::new("csv"))
            && path
                .parent()
                .and_then(|dir| dir.file_name())
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(dir_prefix))
    })
}

/// List `<prefix>*<suffix>` files directly inside `dir` (non-recursive).
pub fn list_log_files(dir: &Path, prefix: &str, suffix: &str) -> anyhow::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {}", dir.display(), e))?;
    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.starts_with(prefix) && name.ends_with(suffix) {
            matches.push(entry.path());
        }
    }
    matches.sort();
    Ok(matches)
}

fn collect_files(root: &Path, keep: impl Fn(&Path) -> bool) -> anyhow::Result<Vec<PathBuf>> {
    let mut matches = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", dir.display(), e))?;
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                stack.push(path);
                continue;
            }
            if file_type.is_file() && keep(&path) {
                matches.push(path);
            }
        }
    }

    matches.sort();
    Ok(matches)
}
