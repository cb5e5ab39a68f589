//! Editor-specific value formatting.
//!
//! Pure functions mapping a raw CSV cell plus the field's editor kind to the
//! value representation the repository stores. No I/O happens here; picker
//! limits arrive pre-resolved from the data-type configuration.

pub mod error;
pub mod geo;
pub mod reference;

use tracing::debug;

use cms_model::{EditorKind, FieldValue};

pub use error::FormatError;
pub use geo::format_geo_point;
pub use reference::{PickerLimit, ReferenceId, ReferenceList, format_reference};

/// Formats one raw cell for a scalar editor.
///
/// Returns `Ok(None)` when the cell is empty or whitespace, signaling "do
/// not write this field". Geo fields are composite and go through
/// [`format_geo_point`] with both halves instead; a stray single geo value
/// reaching this function passes through unchanged, like any unrecognized
/// editor.
pub fn format_value(
    kind: EditorKind,
    raw: &str,
    picker_limit: PickerLimit,
) -> Result<Option<FieldValue>, FormatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = match kind {
        EditorKind::MultiSelect => FieldValue::Text(format_multi_select(trimmed)),
        EditorKind::Color => FieldValue::Text(format_color(trimmed)),
        EditorKind::ReferencePicker => {
            let references = format_reference(trimmed, picker_limit);
            if references.dropped > 0 {
                debug!(
                    dropped = references.dropped,
                    "reference tokens dropped during formatting"
                );
            }
            FieldValue::Text(references.value)
        }
        EditorKind::Boolean => FieldValue::Integer(format_boolean(trimmed)?),
        EditorKind::GeoPoint | EditorKind::Separator | EditorKind::PassThrough => {
            FieldValue::Text(raw.to_string())
        }
    };
    Ok(Some(value))
}

/// Splits on commas, trims each token, and serializes the ordered sequence
/// as a JSON array of strings.
pub fn format_multi_select(raw: &str) -> String {
    let tokens: Vec<&str> = raw.split(',').map(str::trim).collect();
    serde_json::Value::from(tokens).to_string()
}

/// Strips a single leading `#`; anything else passes through unchanged.
pub fn format_color(raw: &str) -> String {
    raw.strip_prefix('#').unwrap_or(raw).to_string()
}

/// Parses a boolean-ish cell into the stored 1/0 form.
///
/// Accepts `true`/`false` and `yes`/`no` case-insensitively, then any
/// integer literal. Everything else is an [`FormatError::InvalidBoolean`].
pub fn format_boolean(raw: &str) -> Result<i64, FormatError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("yes") {
        return Ok(1);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("no") {
        return Ok(0);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| FormatError::InvalidBoolean(trimmed.to_string()))
}
