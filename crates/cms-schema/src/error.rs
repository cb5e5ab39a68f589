use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// The content type id did not resolve in the repository.
    #[error("schema for content type {id} not found")]
    NotFound {
        id: i64,
        #[source]
        source: anyhow::Error,
    },
    #[error("localization provider failed")]
    Languages(#[source] anyhow::Error),
    /// Every CMS instance must carry exactly one default language.
    #[error("no default language is configured")]
    NoDefaultLanguage,
}
