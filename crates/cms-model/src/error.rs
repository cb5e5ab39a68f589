use thiserror::Error;

/// Errors from building a column mapping out of request bindings.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("binding for header '{header}' has an empty alias")]
    EmptyAlias { header: String },
    #[error("duplicate binding for alias '{alias}'")]
    DuplicateBinding { alias: String },
}
