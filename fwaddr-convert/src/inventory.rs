//! Host inventory CSV reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::ConvertError;
use crate::settings::ColumnNames;

/// One inventory record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub hostname: String,
    pub ip_address: String,
    pub subnet_mask: String,
    /// Trimmed comment; `None` when the column is absent or blank.
    pub comment: Option<String>,
}

impl InputRow {
    pub fn new(hostname: &str, ip_address: &str, subnet_mask: &str, comment: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            ip_address: ip_address.to_string(),
            subnet_mask: subnet_mask.to_string(),
            comment: normalize_comment(comment),
        }
    }
}

/// Header positions resolved once per file.
struct ColumnIndex {
    hostname: usize,
    ip: usize,
    mask: usize,
    comment: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, columns: &ColumnNames) -> Result<Self, ConvertError> {
        Ok(Self {
            hostname: require(headers, &columns.hostname)?,
            ip: require(headers, &columns.ip)?,
            mask: require(headers, &columns.mask)?,
            comment: position(headers, &columns.comment),
        })
    }

    fn row(&self, record: &StringRecord) -> InputRow {
        let field = |idx: usize| record.get(idx).unwrap_or("");
        InputRow::new(
            field(self.hostname),
            field(self.ip),
            field(self.mask),
            self.comment.map(field).unwrap_or(""),
        )
    }
}

/// Read all rows from a CSV file on disk.
pub fn read_inventory_file(path: &Path, columns: &ColumnNames) -> Result<Vec<InputRow>, ConvertError> {
    let file = File::open(path)?;
    read_inventory(file, columns)
}

/// Read all rows from CSV data with a header line.
///
/// Fails when any of the hostname, IP or mask columns is missing. The comment
/// column is optional. Short records read their missing fields as empty.
pub fn read_inventory<R: Read>(input: R, columns: &ColumnNames) -> Result<Vec<InputRow>, ConvertError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let index = ColumnIndex::resolve(reader.headers()?, columns)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(index.row(&record?));
    }
    tracing::debug!(rows = rows.len(), "read inventory");
    Ok(rows)
}

fn position(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn require(headers: &StringRecord, name: &str) -> Result<usize, ConvertError> {
    position(headers, name).ok_or_else(|| ConvertError::MissingColumn {
        column: name.to_string(),
    })
}

fn normalize_comment(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
