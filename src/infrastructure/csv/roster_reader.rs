// ============================================================
// ROSTER READER
// ============================================================
// Read the headerless roster CSV into positional raw records

use std::path::Path;

use csv::ReaderBuilder;

use crate::domain::error::{AppError, Result};
use crate::domain::roster::RawRecord;

/// CSV reader for the fixed-schema roster file.
///
/// The file has no header row; each row is zipped positionally onto the
/// roster field list. Whitespace is left intact here — trimming belongs to
/// normalization.
pub struct RosterReader {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for RosterReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl RosterReader {
    /// Create a new roster reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read a roster file and return its rows in file order.
    ///
    /// Any structural failure (unreadable row, wrong field count) aborts
    /// the whole parse: a mismatched row means the positional mapping of
    /// every following row is suspect.
    pub fn read_file(&self, path: &Path) -> Result<Vec<RawRecord>> {
        let content = self.read_with_encoding_fallback(path)?;
        self.read_content(&content)
    }

    /// Parse roster content from an in-memory string.
    pub fn read_content(&self, content: &str) -> Result<Vec<RawRecord>> {
        // flexible() so the field-count check below owns the error message
        // instead of the csv crate's UnequalLengths.
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::FormatError(format!("row {}: unreadable CSV record: {}", index + 1, e))
            })?;

            let values: Vec<&str> = record.iter().collect();
            records.push(RawRecord::from_row(index, &values)?);
        }

        Ok(records)
    }

    /// Read file bytes as UTF-8, decoding as Windows-1252 when the bytes
    /// are not valid UTF-8. Rosters exported from spreadsheets routinely
    /// carry Latin-1 accents.
    fn read_with_encoding_fallback(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).map_err(|e| {
            AppError::IoError(format!(
                "Failed to open roster file {}: {}",
                path.display(),
                e
            ))
        })?;

        match String::from_utf8(bytes) {
            Ok(content) => Ok(content),
            Err(err) => {
                let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(err.as_bytes());
                Ok(decoded.into_owned())
            }
        }
    }
}
