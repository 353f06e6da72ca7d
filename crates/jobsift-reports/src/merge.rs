//! Left-join two metric tables on the `Job ID` column.
//!
//! Header names are whitespace-trimmed before matching, since at least one
//! upstream exporter pads its column names. The left table's delimiter is
//! configurable; the right table is always comma-separated.

use anyhow::Context;
use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// The join key both inputs must carry.
pub const JOB_ID_COLUMN: &str = "Job ID";

/// Structural merge failures.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("'Job ID' column not found in {0}")]
    MissingJobId(String),
}

/// Outcome of one merge run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Rows written (always equals the left table's row count).
    pub written: usize,
    /// Left rows that found a right-side match.
    pub matched: usize,
}

/// Left-join `left` and `right` on [`JOB_ID_COLUMN`] and write the result to
/// `output`. Unmatched left rows get empty right-side cells; duplicate keys
/// on the right resolve to the first occurrence.
pub fn run(
    left: &Path,
    right: &Path,
    left_delimiter: u8,
    output: &Path,
) -> anyhow::Result<MergeStats> {
    let (left_header, left_records) = read_trimmed(left, left_delimiter)?;
    let (right_header, right_records) = read_trimmed(right, b',')?;

    let left_key = column_index(&left_header, JOB_ID_COLUMN)
        .ok_or_else(|| MergeError::MissingJobId(left.display().to_string()))?;
    let right_key = column_index(&right_header, JOB_ID_COLUMN)
        .ok_or_else(|| MergeError::MissingJobId(right.display().to_string()))?;

    let mut lookup: HashMap<&str, &StringRecord> = HashMap::new();
    for record in &right_records {
        if let Some(key) = record.get(right_key) {
            lookup.entry(key).or_insert(record);
        }
    }

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("creating {}", output.display()))?;
    let mut header: Vec<&str> = left_header.iter().map(String::as_str).collect();
    for (i, column) in right_header.iter().enumerate() {
        if i != right_key {
            header.push(column);
        }
    }
    writer.write_record(&header)?;

    let right_width = right_header.len();
    let mut matched = 0usize;
    for record in &left_records {
        let mut out: Vec<&str> = record.iter().collect();
        match record.get(left_key).and_then(|key| lookup.get(key)) {
            Some(right_record) => {
                matched += 1;
                for i in 0..right_width {
                    if i != right_key {
                        out.push(right_record.get(i).unwrap_or(""));
                    }
                }
            }
            None => {
                for i in 0..right_width {
                    if i != right_key {
                        out.push("");
                    }
                }
            }
        }
        writer.write_record(&out)?;
    }
    writer.flush()?;

    Ok(MergeStats {
        written: left_records.len(),
        matched,
    })
}

fn column_index(header: &[String], name: &str) -> Option<usize> {
    header.iter().position(|column| column == name)
}

fn read_trimmed(path: &Path, delimiter: u8) -> anyhow::Result<(Vec<String>, Vec<StringRecord>)> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let header: Vec<String> = reader
        .headers()
        .with_context(|| format!("reading header of {}", path.display()))?
        .iter()
        .map(|column| column.trim().to_string())
        .collect();
    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record.with_context(|| format!("reading {}", path.display()))?);
    }
    Ok((header, records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        std::fs::write(&path, "Job ID ; Loss \n1;0.5\n").unwrap();
        let (header, records) = read_trimmed(&path, b';').unwrap();
        assert_eq!(header, vec!["Job ID", "Loss"]);
        assert_eq!(records.len(), 1);
        assert_eq!(column_index(&header, JOB_ID_COLUMN), Some(0));
    }
}
