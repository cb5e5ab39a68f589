//! In-memory content backend.
//!
//! Stands in for a live CMS during tests and CLI preview runs. The content
//! model (types, languages, data-type configs) loads from JSON; created
//! records accumulate in memory and can be dumped back out as JSON.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};

use cms_model::{
    ContentHandle, ContentRepository, ContentTypeSchema, EditorConfig, EditorConfigProvider,
    FieldValue, Language, LocalizationProvider,
};

/// One value as the backend stored it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredValue {
    pub alias: String,
    pub locale: Option<String>,
    pub value: FieldValue,
}

/// One created content record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: i64,
    pub parent_id: i64,
    pub content_type_alias: String,
    pub title: String,
    pub culture_names: BTreeMap<String, String>,
    pub values: Vec<StoredValue>,
    pub published: bool,
    pub published_locales: BTreeSet<String>,
}

impl ContentRecord {
    /// The stored value under (alias, locale), if any.
    pub fn value_of(&self, alias: &str, locale: Option<&str>) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|stored| stored.alias == alias && stored.locale.as_deref() == locale)
            .map(|stored| &stored.value)
    }
}

/// Content backend holding everything in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryRepository {
    pub content_types: Vec<ContentTypeSchema>,
    pub languages: Vec<Language>,
    pub editor_configs: BTreeMap<i64, EditorConfig>,
    #[serde(skip)]
    records: Vec<ContentRecord>,
    #[serde(skip)]
    next_id: i64,
}

impl MemoryRepository {
    /// Loads the content model (types, languages, configs) from JSON.
    pub fn from_json<R: Read>(reader: R) -> anyhow::Result<Self> {
        serde_json::from_reader(reader).context("parse content model json")
    }

    pub fn with_content_type(mut self, schema: ContentTypeSchema) -> Self {
        self.content_types.push(schema);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.languages.push(language);
        self
    }

    pub fn with_editor_config(mut self, data_type_id: i64, config: EditorConfig) -> Self {
        self.editor_configs.insert(data_type_id, config);
        self
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn record(&self, id: i64) -> Option<&ContentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    fn record_mut(&mut self, handle: ContentHandle) -> anyhow::Result<&mut ContentRecord> {
        self.records
            .iter_mut()
            .find(|record| record.id == handle.0)
            .ok_or_else(|| anyhow!("no content record with id {}", handle.0))
    }
}

impl ContentRepository for MemoryRepository {
    fn get_content_type(&self, id: i64) -> anyhow::Result<ContentTypeSchema> {
        self.content_types
            .iter()
            .find(|schema| schema.id == id)
            .cloned()
            .ok_or_else(|| anyhow!("no content type with id {id}"))
    }

    fn create_content(
        &mut self,
        title: &str,
        parent_id: i64,
        content_type_alias: &str,
    ) -> anyhow::Result<ContentHandle> {
        self.next_id += 1;
        let id = self.next_id;
        self.records.push(ContentRecord {
            id,
            parent_id,
            content_type_alias: content_type_alias.to_string(),
            title: title.to_string(),
            culture_names: BTreeMap::new(),
            values: Vec::new(),
            published: false,
            published_locales: BTreeSet::new(),
        });
        Ok(ContentHandle(id))
    }

    fn set_culture_name(
        &mut self,
        handle: ContentHandle,
        name: &str,
        locale: &str,
    ) -> anyhow::Result<()> {
        let record = self.record_mut(handle)?;
        record
            .culture_names
            .insert(locale.to_string(), name.to_string());
        Ok(())
    }

    fn set_value(
        &mut self,
        handle: ContentHandle,
        alias: &str,
        value: FieldValue,
        locale: Option<&str>,
    ) -> anyhow::Result<()> {
        let record = self.record_mut(handle)?;
        let existing = record
            .values
            .iter_mut()
            .find(|stored| stored.alias == alias && stored.locale.as_deref() == locale);
        match existing {
            Some(stored) => stored.value = value,
            None => record.values.push(StoredValue {
                alias: alias.to_string(),
                locale: locale.map(str::to_string),
                value,
            }),
        }
        Ok(())
    }

    fn save_and_publish(
        &mut self,
        handle: ContentHandle,
        locale: Option<&str>,
    ) -> anyhow::Result<()> {
        let record = self.record_mut(handle)?;
        record.published = true;
        if let Some(locale) = locale {
            record.published_locales.insert(locale.to_string());
        }
        Ok(())
    }

    fn delete_all_of_type(&mut self, id: i64) -> anyhow::Result<usize> {
        let alias = self.get_content_type(id)?.alias;
        let before = self.records.len();
        self.records
            .retain(|record| record.content_type_alias != alias);
        Ok(before - self.records.len())
    }
}

impl LocalizationProvider for MemoryRepository {
    fn all_languages(&self) -> anyhow::Result<Vec<Language>> {
        Ok(self.languages.clone())
    }
}

impl EditorConfigProvider for MemoryRepository {
    fn editor_config(&self, data_type_id: i64) -> Option<EditorConfig> {
        self.editor_configs.get(&data_type_id).cloned()
    }
}
