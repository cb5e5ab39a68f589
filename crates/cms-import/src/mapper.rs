//! Row mapping: one CSV data line into localized field assignments.

use cms_format::{PickerLimit, format_geo_point, format_value};
use cms_ingest::RawRow;
use cms_model::{
    Assignment, ColumnMapping, EditorConfigProvider, EditorKind, FieldDescriptor, GeoComponent,
    LocaleVariant,
};

use crate::error::RowError;

/// What one row asks the orchestrator to do.
///
/// `title` is `None` when no title column is bound or the cell is empty;
/// generating a replacement identifier is the orchestrator's job, never the
/// mapper's.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPlan {
    pub title: Option<String>,
    pub assignments: Vec<Assignment>,
}

/// Maps one CSV row across every locale variant.
///
/// Fields without a bound header are skipped silently; bound fields with
/// empty cells are skipped per the formatter contract. Assignment order is
/// locale, then group, then field order - stable for deterministic testing.
pub fn map_row<C>(
    row: &RawRow<'_>,
    mapping: &ColumnMapping,
    variants: &[LocaleVariant],
    configs: &C,
) -> Result<RowPlan, RowError>
where
    C: EditorConfigProvider + ?Sized,
{
    let title = mapping
        .title_header()
        .and_then(|header| row.value(header))
        .map(str::to_string);

    let mut assignments = Vec::new();
    for variant in variants {
        for group in &variant.groups {
            map_group_fields(row, mapping, &group.fields, variant, configs, &mut assignments)?;
        }
    }

    Ok(RowPlan { title, assignments })
}

fn map_group_fields<C>(
    row: &RawRow<'_>,
    mapping: &ColumnMapping,
    fields: &[FieldDescriptor],
    variant: &LocaleVariant,
    configs: &C,
    assignments: &mut Vec<Assignment>,
) -> Result<(), RowError>
where
    C: EditorConfigProvider + ?Sized,
{
    let mut position = 0;
    while position < fields.len() {
        let field = &fields[position];
        position += 1;

        if field.editor == EditorKind::GeoPoint {
            // The inspector emits the latitude half directly before its
            // longitude twin; consume both and write one assignment under
            // the shared alias.
            let twin = fields.get(position).filter(|candidate| {
                candidate.alias == field.alias
                    && candidate.editor == EditorKind::GeoPoint
                    && candidate.component != field.component
            });
            if twin.is_some() {
                position += 1;
            }
            let (lat_field, lng_field) = match field.component {
                Some(GeoComponent::Longitude) => (twin, Some(field)),
                _ => (Some(field), twin),
            };
            let lat_raw = lat_field.and_then(|descriptor| bound_value(row, mapping, descriptor));
            let lng_raw = lng_field.and_then(|descriptor| bound_value(row, mapping, descriptor));
            if let Some(value) = format_geo_point(lat_raw, lng_raw) {
                assignments.push(Assignment {
                    alias: field.alias.clone(),
                    locale: locale_for(field, variant),
                    value,
                });
            }
            continue;
        }

        let Some(raw) = bound_value(row, mapping, field) else {
            continue;
        };
        let limit = picker_limit(field, configs);
        if let Some(value) = format_value(field.editor, raw, limit)? {
            assignments.push(Assignment {
                alias: field.alias.clone(),
                locale: locale_for(field, variant),
                value,
            });
        }
    }
    Ok(())
}

/// Raw cell text for a field, or `None` when the field has no bound header
/// or the cell is empty/missing.
fn bound_value<'a>(
    row: &RawRow<'a>,
    mapping: &ColumnMapping,
    field: &FieldDescriptor,
) -> Option<&'a str> {
    let header = mapping.header_for(&field.binding_key())?;
    row.value(header)
}

fn locale_for(field: &FieldDescriptor, variant: &LocaleVariant) -> Option<String> {
    if field.varies_by_locale {
        Some(variant.locale_tag.clone())
    } else {
        None
    }
}

fn picker_limit<C>(field: &FieldDescriptor, configs: &C) -> PickerLimit
where
    C: EditorConfigProvider + ?Sized,
{
    if field.editor != EditorKind::ReferencePicker {
        return PickerLimit::SINGLE;
    }
    field
        .data_type_id
        .and_then(|id| configs.editor_config(id))
        .map(|config| PickerLimit::from_editor_config(&config))
        .unwrap_or(PickerLimit::SINGLE)
}
