//! Content-type inspection.
//!
//! Turns the repository's raw content-type shape into the importable-field
//! view the mapping pipeline works with: one [`LocaleVariant`] per locale,
//! fields grouped by section, editor-specific expansions applied.

use tracing::debug;

use cms_model::{
    ContentRepository, EditorKind, FieldDescriptor, GeoComponent, LocaleVariant,
    LocalizationProvider, PropertyGroup, PropertyGroupSchema, PropertySchema,
};

use crate::error::SchemaError;
use crate::registry::EditorRegistry;

/// Inspection result: the content-type identity plus its locale variants.
///
/// Discarded after the response; holds no repository state.
#[derive(Debug, Clone)]
pub struct ContentTypeDescription {
    pub id: i64,
    pub alias: String,
    pub name: String,
    pub varies_by_culture: bool,
    pub variants: Vec<LocaleVariant>,
}

impl ContentTypeDescription {
    pub fn default_variant(&self) -> Option<&LocaleVariant> {
        self.variants.iter().find(|variant| variant.is_default)
    }

    pub fn default_locale(&self) -> Option<&str> {
        self.default_variant()
            .map(|variant| variant.locale_tag.as_str())
    }
}

/// Describes the importable fields of a content type per locale variant.
///
/// Read-only and idempotent; the repository is consulted once per call.
pub fn describe_content_type<B>(
    backend: &B,
    registry: &EditorRegistry,
    content_type_id: i64,
) -> Result<Vec<LocaleVariant>, SchemaError>
where
    B: ContentRepository + LocalizationProvider + ?Sized,
{
    inspect_content_type(backend, registry, content_type_id)
        .map(|description| description.variants)
}

/// Like [`describe_content_type`] but keeps the content-type identity,
/// which the import orchestrator needs for create and publish calls.
pub fn inspect_content_type<B>(
    backend: &B,
    registry: &EditorRegistry,
    content_type_id: i64,
) -> Result<ContentTypeDescription, SchemaError>
where
    B: ContentRepository + LocalizationProvider + ?Sized,
{
    let schema = backend
        .get_content_type(content_type_id)
        .map_err(|source| SchemaError::NotFound {
            id: content_type_id,
            source,
        })?;

    let mut languages = backend.all_languages().map_err(SchemaError::Languages)?;
    if !schema.varies_by_culture {
        languages.retain(|language| language.is_default);
    }
    if !languages.iter().any(|language| language.is_default) {
        return Err(SchemaError::NoDefaultLanguage);
    }

    let merged = merge_groups(&schema.groups);

    let mut variants = Vec::with_capacity(languages.len());
    for language in &languages {
        let mut groups = Vec::new();
        for (name, properties) in &merged {
            let mut fields = Vec::new();
            for property in properties {
                // Non-varying fields stay single-valued: only the default
                // locale ever carries them.
                if !language.is_default && !property.varies_by_culture {
                    continue;
                }
                expand_property(property, registry, &mut fields);
            }
            if !fields.is_empty() {
                groups.push(PropertyGroup {
                    name: name.clone(),
                    fields,
                });
            }
        }
        variants.push(LocaleVariant {
            locale_tag: language.tag.clone(),
            is_default: language.is_default,
            groups,
        });
    }

    debug!(
        content_type_id,
        content_type_alias = %schema.alias,
        varies_by_culture = schema.varies_by_culture,
        variant_count = variants.len(),
        "content type inspected"
    );

    Ok(ContentTypeDescription {
        id: schema.id,
        alias: schema.alias,
        name: schema.name,
        varies_by_culture: schema.varies_by_culture,
        variants,
    })
}

/// Applies editor-specific expansion for one property.
///
/// Separators are dropped. A geo editor decomposes into two synthetic
/// descriptors (latitude, longitude) sharing the property's alias and
/// variation flag; neither is fetched from storage.
fn expand_property(
    property: &PropertySchema,
    registry: &EditorRegistry,
    fields: &mut Vec<FieldDescriptor>,
) {
    let kind = registry.classify(&property.editor_alias);
    match kind {
        EditorKind::Separator => {}
        EditorKind::GeoPoint => {
            for component in [GeoComponent::Latitude, GeoComponent::Longitude] {
                fields.push(FieldDescriptor {
                    alias: property.alias.clone(),
                    display_name: format!("{} ({})", property.name, component.display_suffix()),
                    varies_by_locale: property.varies_by_culture,
                    editor: EditorKind::GeoPoint,
                    data_type_id: property.data_type_id,
                    component: Some(component),
                });
            }
        }
        _ => {
            fields.push(FieldDescriptor {
                alias: property.alias.clone(),
                display_name: property.name.clone(),
                varies_by_locale: property.varies_by_culture,
                editor: kind,
                data_type_id: property.data_type_id,
                component: None,
            });
        }
    }
}

/// Orders groups by declared sort order and merges same-named groups from
/// composed types into one, fields ordered by property sort order.
fn merge_groups(groups: &[PropertyGroupSchema]) -> Vec<(String, Vec<PropertySchema>)> {
    let mut ordered: Vec<&PropertyGroupSchema> = groups.iter().collect();
    ordered.sort_by_key(|group| group.sort_order);

    let mut merged: Vec<(String, Vec<PropertySchema>)> = Vec::new();
    for group in ordered {
        match merged.iter_mut().find(|(name, _)| name == &group.name) {
            Some((_, properties)) => properties.extend(group.properties.iter().cloned()),
            None => merged.push((group.name.clone(), group.properties.clone())),
        }
    }
    for (_, properties) in &mut merged {
        properties.sort_by_key(|property| property.sort_order);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(alias: &str, sort_order: i32) -> PropertySchema {
        PropertySchema {
            alias: alias.to_string(),
            name: alias.to_string(),
            sort_order,
            varies_by_culture: false,
            editor_alias: "vendor.textbox".to_string(),
            data_type_id: None,
        }
    }

    #[test]
    fn merges_same_named_groups_in_sort_order() {
        let groups = vec![
            PropertyGroupSchema {
                name: "Content".to_string(),
                sort_order: 2,
                properties: vec![property("b", 2)],
            },
            PropertyGroupSchema {
                name: "Settings".to_string(),
                sort_order: 1,
                properties: vec![property("c", 1)],
            },
            PropertyGroupSchema {
                name: "Content".to_string(),
                sort_order: 3,
                properties: vec![property("a", 1)],
            },
        ];
        let merged = merge_groups(&groups);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].0, "Settings");
        assert_eq!(merged[1].0, "Content");
        let content_aliases: Vec<&str> =
            merged[1].1.iter().map(|p| p.alias.as_str()).collect();
        assert_eq!(content_aliases, ["a", "b"]);
    }
}
