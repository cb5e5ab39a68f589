use thiserror::Error;

use cms_format::FormatError;
use cms_ingest::IngestError;
use cms_model::MappingError;
use cms_schema::SchemaError;

/// Whole-run failures; any of these aborts the import before or during
/// setup. Per-row problems never surface here.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("content type {0} not found")]
    ContentTypeNotFound(i64),
    #[error(transparent)]
    Schema(SchemaError),
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl From<SchemaError> for ImportError {
    fn from(error: SchemaError) -> Self {
        match error {
            SchemaError::NotFound { id, .. } => ImportError::ContentTypeNotFound(id),
            other => ImportError::Schema(other),
        }
    }
}

/// Per-row failures, captured into a `Failed` outcome; the run continues.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("row mapping failed: {0}")]
    Mapping(#[from] FormatError),
    #[error("repository write failed: {0}")]
    Repository(#[source] anyhow::Error),
}
