//! CSV-level assertion helpers shared by the harnesses.
//!
//! These panic with context-rich messages that name the column and the
//! available header, so a failing harness points straight at the divergence.

use std::path::Path;

/// Read a CSV file into `(header, rows)` of owned strings.
pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    read_csv_delimited(path, b',')
}

/// Like [`read_csv`] with an explicit field delimiter.
pub fn read_csv_delimited(path: &Path, delimiter: u8) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .unwrap_or_else(|e| panic!("failed to open {}: {e}", path.display()));
    let header: Vec<String> = reader
        .headers()
        .expect("output must have a header row")
        .iter()
        .map(str::to_string)
        .collect();
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|record| {
            record
                .expect("output rows must parse")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect();
    (header, rows)
}

/// Look up a cell by column name; panics with the available columns on a
/// miss so typos surface immediately.
pub fn cell<'a>(header: &[String], row: &'a [String], column: &str) -> &'a str {
    let index = header
        .iter()
        .position(|h| h == column)
        .unwrap_or_else(|| panic!("column {column:?} not found; available: {header:?}"));
    row.get(index)
        .unwrap_or_else(|| panic!("row has {} cells, column {column:?} is #{index}", row.len()))
}

/// Assert that every row has exactly as many cells as the header has columns.
pub fn assert_uniform_shape(header: &[String], rows: &[Vec<String>]) {
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(
            row.len(),
            header.len(),
            "row {i} has {} cells but the header has {} columns",
            row.len(),
            header.len()
        );
    }
}
