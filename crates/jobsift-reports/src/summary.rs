//! Summary pipeline: every `meta.json` under a directory becomes one row of
//! one CSV table.
//!
//! Per-document failures (unreadable file, malformed JSON) are logged with
//! the offending path and skipped; one bad archive never aborts the run.

use anyhow::Context;
use jobsift_core::{normalize, JobMeta, MetricRow};
use std::path::Path;
use tracing::{debug, warn};

/// Outcome of one summary run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryStats {
    /// `meta.json` files discovered under the parent directory.
    pub discovered: usize,
    /// Rows written to the output table.
    pub written: usize,
    /// Documents skipped because they could not be read or parsed.
    pub skipped: usize,
}

/// Walk `parent` for `meta.json` files, normalize each document, and write
/// the collected rows to `output`. Nothing is written when no row could be
/// produced, so an empty run leaves no file behind.
pub fn run(parent: &Path, output: &Path) -> anyhow::Result<SummaryStats> {
    let files = crate::walk::collect_meta_files(parent)?;
    debug!(count = files.len(), "discovered meta.json files");

    let mut rows: Vec<MetricRow> = Vec::new();
    let mut skipped = 0usize;
    for file in &files {
        match load_document(file) {
            Ok(meta) => rows.push(normalize(&meta)),
            Err(err) => {
                warn!(file = %file.display(), error = %err, "skipping document");
                skipped += 1;
            }
        }
    }

    let stats = SummaryStats {
        discovered: files.len(),
        written: rows.len(),
        skipped,
    };
    if rows.is_empty() {
        return Ok(stats);
    }

    write_rows(&rows, output)?;
    Ok(stats)
}

fn load_document(path: &Path) -> anyhow::Result<JobMeta> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn write_rows(rows: &[MetricRow], output: &Path) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("creating {}", output.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
