use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    /// The raw value matched none of the accepted boolean spellings.
    #[error("invalid boolean value: '{0}'")]
    InvalidBoolean(String),
}
