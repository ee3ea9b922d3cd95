use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// One data row, keyed by header name. A column the row doesn't have reads
/// as the empty string.
#[derive(Debug, Clone)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Record {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Read a delimited table with a header row into one `Record` per data row,
/// in file order.
///
/// Returns `Ok(None)` when the path does not exist so the caller can skip
/// that source and keep going. A file that exists but cannot be read is a
/// hard error.
pub fn read_records(path: &Path) -> Result<Option<Vec<Record>>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut rows = parse_rows(&text).into_iter();
    let Some(header) = rows.next() else {
        return Ok(Some(Vec::new()));
    };

    // Rows shorter than the header just lack those columns; extra cells
    // beyond the header are dropped.
    let records = rows
        .map(|cells| Record {
            fields: header.iter().cloned().zip(cells).collect(),
        })
        .collect();
    Ok(Some(records))
}

/// Split delimited text into rows of cells: comma separators, `"`-quoted
/// cells with `""` escapes, quoted cells may span lines. CRLF and trailing
/// newlines are tolerated; fully blank lines are skipped.
fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                cell.push(c);
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut cell)),
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut cell));
                if row.len() > 1 || !row[0].is_empty() {
                    rows.push(std::mem::take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => cell.push(c),
        }
    }
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }
    rows
}
