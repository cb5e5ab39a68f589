use serde::{Deserialize, Serialize};
use std::fmt;

/// The semantic type of a content field, derived from its editor alias.
///
/// The editor kind decides how a raw CSV cell is transformed before it is
/// written to the repository. Aliases that the registry does not recognize
/// classify as [`EditorKind::PassThrough`] and are stored verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditorKind {
    /// Checkbox lists and multi-value dropdowns; stores a JSON string array.
    MultiSelect,
    /// Color picker; stores the hex value without a leading `#`.
    Color,
    /// Content/media/member/tree pickers; stores comma-joined reference ids.
    ReferencePicker,
    /// Toggle editors; stores 1 or 0.
    Boolean,
    /// Map editor backed by latitude + longitude; stores one JSON blob.
    GeoPoint,
    /// UI-only separators and labels; never importable.
    Separator,
    /// Everything else; the raw value is stored unchanged.
    PassThrough,
}

impl EditorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorKind::MultiSelect => "multi-select",
            EditorKind::Color => "color",
            EditorKind::ReferencePicker => "reference-picker",
            EditorKind::Boolean => "boolean",
            EditorKind::GeoPoint => "geo-point",
            EditorKind::Separator => "separator",
            EditorKind::PassThrough => "pass-through",
        }
    }

    /// UI-only editors carry no data and are dropped during inspection.
    pub fn is_importable(&self) -> bool {
        !matches!(self, EditorKind::Separator)
    }
}

impl fmt::Display for EditorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which half of a decomposed geo field a synthetic descriptor stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoComponent {
    Latitude,
    Longitude,
}

impl GeoComponent {
    /// Suffix appended to the storage alias to form the binding key.
    pub fn binding_suffix(&self) -> &'static str {
        match self {
            GeoComponent::Latitude => "lat",
            GeoComponent::Longitude => "lng",
        }
    }

    pub fn display_suffix(&self) -> &'static str {
        match self {
            GeoComponent::Latitude => "Latitude",
            GeoComponent::Longitude => "Longitude",
        }
    }
}

/// One importable field of a content type, as seen by the mapping pipeline.
///
/// Descriptors are built fresh per schema inspection and never mutated. The
/// two synthetic halves of a geo field share `alias` and `varies_by_locale`
/// but carry distinct [`GeoComponent`] markers, so their binding keys stay
/// unique while the repository write targets a single property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Repository storage alias; never empty.
    pub alias: String,
    /// Human-readable name shown when listing importable fields.
    pub display_name: String,
    /// True when the field stores one value per locale.
    pub varies_by_locale: bool,
    /// Editor classification driving value formatting.
    pub editor: EditorKind,
    /// Data-type configuration id, consulted for picker limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type_id: Option<i64>,
    /// Set only on the synthetic halves of a decomposed geo field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<GeoComponent>,
}

impl FieldDescriptor {
    /// The key a column mapping binds a CSV header to.
    ///
    /// Ordinary fields bind by alias; geo halves bind by `alias:lat` and
    /// `alias:lng` so both halves of one property can map to separate
    /// columns.
    pub fn binding_key(&self) -> String {
        match self.component {
            None => self.alias.clone(),
            Some(component) => format!("{}:{}", self.alias, component.binding_suffix()),
        }
    }
}

/// A named, ordered section of fields within a content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyGroup {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

/// One localized rendering of a content type's importable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleVariant {
    /// Locale identifier, e.g. `en-US`.
    pub locale_tag: String,
    pub is_default: bool,
    pub groups: Vec<PropertyGroup>,
}

impl LocaleVariant {
    /// All descriptors of this variant in group order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.groups.iter().flat_map(|group| group.fields.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(alias: &str, component: Option<GeoComponent>) -> FieldDescriptor {
        FieldDescriptor {
            alias: alias.to_string(),
            display_name: alias.to_string(),
            varies_by_locale: false,
            editor: if component.is_some() {
                EditorKind::GeoPoint
            } else {
                EditorKind::PassThrough
            },
            data_type_id: None,
            component,
        }
    }

    #[test]
    fn binding_key_for_plain_field_is_alias() {
        assert_eq!(descriptor("intro", None).binding_key(), "intro");
    }

    #[test]
    fn binding_keys_for_geo_halves_are_distinct() {
        let lat = descriptor("location", Some(GeoComponent::Latitude));
        let lng = descriptor("location", Some(GeoComponent::Longitude));
        assert_eq!(lat.binding_key(), "location:lat");
        assert_eq!(lng.binding_key(), "location:lng");
        assert_eq!(lat.alias, lng.alias);
    }
}
