use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MappingError;

/// Reserved binding alias selecting the column used as the record title.
pub const TITLE_ALIAS: &str = "__name";

/// One user-supplied binding from a field's binding key to a CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldBinding {
    pub alias: String,
    pub header: String,
}

/// Wire shape of an import request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub parent_id: i64,
    pub content_type_id: i64,
    pub fields: Vec<FieldBinding>,
}

/// Validated association from binding keys to CSV header names.
///
/// Keys are unique per request; building from bindings with a repeated alias
/// fails rather than silently letting the last entry win.
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    bindings: BTreeMap<String, String>,
}

impl ColumnMapping {
    pub fn from_bindings(fields: &[FieldBinding]) -> Result<Self, MappingError> {
        let mut bindings = BTreeMap::new();
        for field in fields {
            if field.alias.trim().is_empty() {
                return Err(MappingError::EmptyAlias {
                    header: field.header.clone(),
                });
            }
            if bindings
                .insert(field.alias.clone(), field.header.clone())
                .is_some()
            {
                return Err(MappingError::DuplicateBinding {
                    alias: field.alias.clone(),
                });
            }
        }
        Ok(Self { bindings })
    }

    /// The CSV header bound to a binding key, if any.
    pub fn header_for(&self, binding_key: &str) -> Option<&str> {
        self.bindings.get(binding_key).map(String::as_str)
    }

    /// The header carrying the record title, if the request bound one.
    pub fn title_header(&self) -> Option<&str> {
        self.header_for(TITLE_ALIAS)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
