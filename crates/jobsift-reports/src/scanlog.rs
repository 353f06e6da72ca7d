//! Slurm stdout scan: batch-size and gradient-accumulation hints per job.
//!
//! Training frameworks print their effective configuration many times across
//! a run (restarts, per-rank banners), so each metric reports the *mode* of
//! all captured values, ties broken by first occurrence.

use anyhow::Context;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

const NA: &str = "N/A";

fn batch_size_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Instantaneous batch size per device\s*=\s*(?P<n>\d+)")
            .expect("valid batch size pattern")
    })
}

fn grad_accum_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Gradient Accumulation steps\s*=\s*(?P<n>\d+)")
            .expect("valid grad accum pattern")
    })
}

/// One row of the scan output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanRow {
    #[serde(rename = "Job ID")]
    pub job_id: String,
    #[serde(rename = "Batch Size per Device")]
    pub batch_size: String,
    #[serde(rename = "Gradient Accumulation Steps")]
    pub grad_accum: String,
}

/// Outcome of one scan run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub discovered: usize,
    pub written: usize,
    pub skipped: usize,
}

/// Scan `log_dir` for `<prefix><jobid>…<suffix>` files and write one row per
/// readable log to `output`. Nothing is written when no row was produced.
pub fn run(
    log_dir: &Path,
    output: &Path,
    file_prefix: &str,
    file_suffix: &str,
) -> anyhow::Result<ScanStats> {
    let files = crate::walk::list_log_files(log_dir, file_prefix, file_suffix)?;

    let mut rows: Vec<ScanRow> = Vec::new();
    let mut skipped = 0usize;
    for file in &files {
        match scan_file(file, file_prefix) {
            Ok(row) => rows.push(row),
            Err(err) => {
                warn!(file = %file.display(), error = %err, "skipping log file");
                skipped += 1;
            }
        }
    }

    let stats = ScanStats {
        discovered: files.len(),
        written: rows.len(),
        skipped,
    };
    if rows.is_empty() {
        return Ok(stats);
    }

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("creating {}", output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(stats)
}

fn scan_file(path: &Path, file_prefix: &str) -> anyhow::Result<ScanRow> {
    let job_id = job_id_from_name(path, file_prefix)
        .with_context(|| format!("no job id in file name {}", path.display()))?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    Ok(ScanRow {
        job_id,
        batch_size: mode_of_captures(batch_size_re(), &content),
        grad_accum: mode_of_captures(grad_accum_re(), &content),
    })
}

/// The leading digit run right after the filename prefix, e.g.
/// `slurm-463795.out` → `463795`.
fn job_id_from_name(path: &Path, file_prefix: &str) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let rest = name.strip_prefix(file_prefix)?;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    (!digits.is_empty()).then_some(digits)
}

fn mode_of_captures(re: &Regex, content: &str) -> String {
    let values: Vec<&str> = re
        .captures_iter(content)
        .filter_map(|caps| caps.name("n").map(|m| m.as_str()))
        .collect();
    mode(&values).unwrap_or(NA).to_string()
}

/// Most frequent value; ties broken by first occurrence.
fn mode<'a>(values: &[&'a str]) -> Option<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut best: Option<(&'a str, usize)> = None;
    for &value in values {
        let count = counts[value];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}
