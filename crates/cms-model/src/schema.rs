use serde::{Deserialize, Serialize};

/// Raw shape of a content type as the repository reports it.
///
/// Groups come from the type's composition; same-named groups across
/// composed types are merged by the schema inspector, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeSchema {
    pub id: i64,
    pub alias: String,
    pub name: String,
    /// True when records of this type carry one value set per locale.
    pub varies_by_culture: bool,
    #[serde(default)]
    pub groups: Vec<PropertyGroupSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyGroupSchema {
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub properties: Vec<PropertySchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    pub alias: String,
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub varies_by_culture: bool,
    /// Editor alias as configured in the CMS, e.g. `cms.color-picker`.
    pub editor_alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type_id: Option<i64>,
}

/// One configured language of the CMS instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Locale tag, e.g. `en-US`.
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
}
