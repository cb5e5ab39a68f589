use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::{ContentTypeSchema, Language};
use crate::value::FieldValue;

/// Opaque handle to a content record created during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHandle(pub i64);

/// Key/value configuration of a data type, as stored by the CMS.
///
/// Only the reference-picker keys (`Multiple`, `MaxNumber`) are consulted
/// by this pipeline; the rest passes through untouched.
pub type EditorConfig = BTreeMap<String, serde_json::Value>;

/// Narrow interface onto the CMS content repository.
///
/// The importer never sees repository internals; every write is a blocking
/// call and the repository's own atomicity guarantees apply. No rollback is
/// issued for partially written records.
pub trait ContentRepository {
    fn get_content_type(&self, id: i64) -> anyhow::Result<ContentTypeSchema>;

    fn create_content(
        &mut self,
        title: &str,
        parent_id: i64,
        content_type_alias: &str,
    ) -> anyhow::Result<ContentHandle>;

    /// Sets the localized record name for one culture.
    fn set_culture_name(
        &mut self,
        handle: ContentHandle,
        name: &str,
        locale: &str,
    ) -> anyhow::Result<()>;

    /// Writes one field value; `locale` is `None` for invariant fields.
    fn set_value(
        &mut self,
        handle: ContentHandle,
        alias: &str,
        value: FieldValue,
        locale: Option<&str>,
    ) -> anyhow::Result<()>;

    /// Publishes the record; `locale` is `None` to publish all cultures.
    fn save_and_publish(
        &mut self,
        handle: ContentHandle,
        locale: Option<&str>,
    ) -> anyhow::Result<()>;

    /// Administrative bulk delete; returns the number of removed records.
    fn delete_all_of_type(&mut self, id: i64) -> anyhow::Result<usize>;
}

/// Source of the configured languages, flagged default or not.
pub trait LocalizationProvider {
    fn all_languages(&self) -> anyhow::Result<Vec<Language>>;
}

/// Source of per-data-type editor configuration.
pub trait EditorConfigProvider {
    /// Returns `None` when the data type has no stored configuration; the
    /// caller falls back to editor defaults.
    fn editor_config(&self, data_type_id: i64) -> Option<EditorConfig>;
}
