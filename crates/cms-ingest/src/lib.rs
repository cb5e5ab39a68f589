pub mod document;
pub mod error;

pub use document::{CsvDocument, RawRow, read_headers};
pub use error::IngestError;
