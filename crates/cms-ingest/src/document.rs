use std::collections::BTreeMap;
use std::io::Read;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::IngestError;

/// An in-memory CSV file with one fixed header set.
///
/// The header line is read exactly once and every row is addressed through
/// it. Rows shorter than the header are padded with empty cells; fully empty
/// lines are dropped. Duplicate headers resolve to the first occurrence.
#[derive(Debug, Clone)]
pub struct CsvDocument {
    headers: Vec<String>,
    index: BTreeMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl CsvDocument {
    /// Reads a whole CSV document from a byte stream.
    ///
    /// Fails with [`IngestError::EmptyFile`] when the stream holds no header
    /// line. A file with a header and zero data rows is a valid, empty
    /// document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, IngestError> {
        let mut csv = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv.headers()?.iter().map(normalize_header).collect();
        if headers.iter().all(|header| header.is_empty()) {
            return Err(IngestError::EmptyFile);
        }

        let mut index = BTreeMap::new();
        for (position, header) in headers.iter().enumerate() {
            index.entry(header.clone()).or_insert(position);
        }

        let mut rows = Vec::new();
        for record in csv.records() {
            let record = record?;
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            let mut row = Vec::with_capacity(headers.len());
            for position in 0..headers.len() {
                row.push(normalize_cell(record.get(position).unwrap_or("")));
            }
            rows.push(row);
        }

        debug!(
            header_count = headers.len(),
            row_count = rows.len(),
            "csv document loaded"
        );
        Ok(Self {
            headers,
            index,
            rows,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IngestError> {
        Self::from_reader(bytes)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Data rows in file order.
    pub fn rows(&self) -> impl Iterator<Item = RawRow<'_>> {
        (0..self.rows.len()).map(move |index| RawRow {
            document: self,
            index,
        })
    }
}

/// One CSV data line, addressed by header name.
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    document: &'a CsvDocument,
    index: usize,
}

impl<'a> RawRow<'a> {
    /// Zero-based data-row index in file order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The cell under a header, or `None` when the header is unknown.
    pub fn get(&self, header: &str) -> Option<&'a str> {
        let position = *self.document.index.get(header)?;
        self.document.rows[self.index]
            .get(position)
            .map(String::as_str)
    }

    /// Like [`RawRow::get`] but treats empty cells as absent.
    pub fn value(&self, header: &str) -> Option<&'a str> {
        self.get(header).filter(|cell| !cell.is_empty())
    }
}

/// Reads only the header line of a CSV stream.
///
/// Used by mapping UIs to list bindable columns without loading the file.
pub fn read_headers<R: Read>(reader: R) -> Result<Vec<String>, IngestError> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = csv.headers()?.iter().map(normalize_header).collect();
    if headers.iter().all(|header| header.is_empty()) {
        return Err(IngestError::EmptyFile);
    }
    Ok(headers)
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_headers_and_pads_short_rows() {
        let input = "\u{feff} Name , Color\nAda,#ff0000\nBo\n";
        let doc = CsvDocument::from_bytes(input.as_bytes()).unwrap();
        assert_eq!(doc.headers(), ["Name", "Color"]);
        assert_eq!(doc.row_count(), 2);
        let rows: Vec<RawRow<'_>> = doc.rows().collect();
        assert_eq!(rows[0].get("Color"), Some("#ff0000"));
        assert_eq!(rows[1].get("Color"), Some(""));
        assert_eq!(rows[1].value("Color"), None);
    }

    #[test]
    fn drops_fully_empty_lines() {
        let doc = CsvDocument::from_bytes(b"Name,Color\n,,\nAda,red\n").unwrap();
        assert_eq!(doc.row_count(), 1);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            CsvDocument::from_bytes(b""),
            Err(IngestError::EmptyFile)
        ));
    }

    #[test]
    fn header_listing_reads_only_the_first_line() {
        let headers = read_headers(&b"Name,Color\nAda,red\n"[..]).unwrap();
        assert_eq!(headers, ["Name", "Color"]);
    }

    #[test]
    fn duplicate_headers_resolve_to_first_column() {
        let doc = CsvDocument::from_bytes(b"Name,Name\nfirst,second\n").unwrap();
        let row = doc.rows().next().unwrap();
        assert_eq!(row.get("Name"), Some("first"));
    }
}
