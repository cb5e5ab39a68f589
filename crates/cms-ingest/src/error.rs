use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The source had no header line; nothing can be mapped.
    #[error("csv input has no header row")]
    EmptyFile,
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
