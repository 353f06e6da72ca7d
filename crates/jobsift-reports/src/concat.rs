//! Concatenate per-job GPU metric tables into one.
//!
//! Inputs do not all share a schema: columns are aligned by header name, the
//! combined header is the union of all input headers in first-seen order,
//! and cells a given input lacks are written empty. A trailing `Job Name`
//! column records which folder each row came from.

use anyhow::Context;
use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Outcome of one concat run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcatStats {
    /// CSV files discovered under matching folders.
    pub discovered: usize,
    /// Input tables read successfully.
    pub tables: usize,
    /// Data rows written.
    pub written: usize,
    /// Inputs skipped as unreadable.
    pub skipped: usize,
}

const JOB_NAME_COLUMN: &str = "Job Name";

/// Walk `root` for `.csv` files inside `<dir_prefix>*` folders and write the
/// combined table to `output`. Nothing is written when no input was readable.
pub fn run(root: &Path, dir_prefix: &str, output: &Path) -> anyhow::Result<ConcatStats> {
    let files = crate::walk::collect_prefixed_csv_files(root, dir_prefix)?;

    let mut columns: Vec<String> = Vec::new();
    let mut tables: Vec<Table> = Vec::new();
    let mut skipped = 0usize;
    for file in &files {
        match read_table(file) {
            Ok(table) => {
                for column in table.header.iter() {
                    if !columns.iter().any(|c| c == column) {
                        columns.push(column.to_string());
                    }
                }
                tables.push(table);
            }
            Err(err) => {
                warn!(file = %file.display(), error = %err, "skipping input table");
                skipped += 1;
            }
        }
    }

    let mut stats = ConcatStats {
        discovered: files.len(),
        tables: tables.len(),
        written: 0,
        skipped,
    };
    if tables.is_empty() {
        return Ok(stats);
    }

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("creating {}", output.display()))?;
    let mut out_header: Vec<&str> = columns.iter().map(String::as_str).collect();
    out_header.push(JOB_NAME_COLUMN);
    writer.write_record(&out_header)?;

    for table in &tables {
        let index: HashMap<&str, usize> = table
            .header
            .iter()
            .enumerate()
            .map(|(i, column)| (column, i))
            .collect();
        for record in &table.records {
            let mut out: Vec<&str> = Vec::with_capacity(out_header.len());
            for column in &columns {
                out.push(
                    index
                        .get(column.as_str())
                        .and_then(|&i| record.get(i))
                        .unwrap_or(""),
                );
            }
            out.push(&table.job_name);
            writer.write_record(&out)?;
            stats.written += 1;
        }
    }
    writer.flush()?;
    Ok(stats)
}

struct Table {
    /// The parent folder's name, e.g. `GPU_run1`.
    job_name: String,
    header: StringRecord,
    records: Vec<StringRecord>,
}

fn read_table(path: &Path) -> anyhow::Result<Table> {
    let job_name = path
        .parent()
        .and_then(|dir| dir.file_name())
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let header = reader
        .headers()
        .with_context(|| format!("reading header of {}", path.display()))?
        .clone();
    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record.with_context(|| format!("reading {}", path.display()))?);
    }
    Ok(Table {
        job_name,
        header,
        records,
    })
}
