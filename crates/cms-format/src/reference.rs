//! Reference-picker value formatting.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use cms_model::EditorConfig;

/// A stable global identifier linking one record to another.
///
/// Parses either a bare UUID or the URI form `cms://<kind>/<uuid>`; renders
/// as the canonical hyphenated UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceId(Uuid);

impl FromStr for ReferenceId {
    type Err = uuid::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut candidate = raw.trim();
        if let Some(rest) = candidate.strip_prefix("cms://") {
            candidate = rest.split_once('/').map_or(rest, |(_, id)| id);
        }
        Uuid::parse_str(candidate).map(ReferenceId)
    }
}

impl fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Item limit for a reference picker, derived from its data-type config.
///
/// `Multiple = true` lifts the limit entirely; otherwise `MaxNumber` caps
/// the list (0 meaning unlimited), and pickers with no configuration accept
/// a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerLimit {
    max_items: Option<usize>,
}

impl PickerLimit {
    pub const SINGLE: Self = Self {
        max_items: Some(1),
    };

    pub const UNLIMITED: Self = Self { max_items: None };

    pub fn from_editor_config(config: &EditorConfig) -> Self {
        if let Some(multiple) = config.get("Multiple").and_then(serde_json::Value::as_bool) {
            return if multiple { Self::UNLIMITED } else { Self::SINGLE };
        }
        if let Some(max) = config.get("MaxNumber").and_then(serde_json::Value::as_u64) {
            return if max == 0 {
                Self::UNLIMITED
            } else {
                Self {
                    max_items: Some(max as usize),
                }
            };
        }
        Self::SINGLE
    }

    fn apply(self, ids: &mut Vec<ReferenceId>) {
        if let Some(max) = self.max_items {
            ids.truncate(max);
        }
    }
}

/// Result of formatting a reference list.
///
/// `dropped` counts non-empty tokens that failed to parse; dropping them is
/// deliberate leniency, surfaced to callers that want the telemetry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceList {
    pub value: String,
    pub dropped: usize,
}

/// Splits a raw cell on commas, parses each token as a [`ReferenceId`], and
/// joins the survivors up to the picker's limit.
///
/// Unparsable tokens are dropped, never errors. Zero surviving tokens yield
/// an empty string, which is still written to the field.
pub fn format_reference(raw: &str, limit: PickerLimit) -> ReferenceList {
    let mut ids = Vec::new();
    let mut dropped = 0usize;
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<ReferenceId>() {
            Ok(id) => ids.push(id),
            Err(_) => dropped += 1,
        }
    }
    limit.apply(&mut ids);
    let value = ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    ReferenceList { value, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: &str = "a1111111-1111-1111-1111-111111111111";
    const SECOND: &str = "b2222222-2222-2222-2222-222222222222";

    #[test]
    fn parses_bare_and_uri_forms() {
        let bare: ReferenceId = FIRST.parse().expect("bare uuid");
        let uri: ReferenceId = format!("cms://node/{FIRST}").parse().expect("uri form");
        assert_eq!(bare, uri);
        assert_eq!(bare.to_string(), FIRST);
    }

    #[test]
    fn single_limit_keeps_first_identifier() {
        let result = format_reference(&format!("{FIRST},{SECOND}"), PickerLimit::SINGLE);
        assert_eq!(result.value, FIRST);
        assert_eq!(result.dropped, 0);
    }

    #[test]
    fn unparsable_tokens_are_dropped_and_counted() {
        let result = format_reference(
            &format!("not-a-ref,{FIRST},also bad"),
            PickerLimit::UNLIMITED,
        );
        assert_eq!(result.value, FIRST);
        assert_eq!(result.dropped, 2);
    }

    #[test]
    fn zero_surviving_tokens_yield_empty_string() {
        let result = format_reference("bogus", PickerLimit::SINGLE);
        assert_eq!(result.value, "");
        assert_eq!(result.dropped, 1);
    }

    #[test]
    fn limits_derive_from_editor_config() {
        let mut config = EditorConfig::new();
        config.insert("Multiple".to_string(), serde_json::Value::Bool(true));
        assert_eq!(
            PickerLimit::from_editor_config(&config),
            PickerLimit::UNLIMITED
        );

        let mut config = EditorConfig::new();
        config.insert("MaxNumber".to_string(), serde_json::json!(2));
        let limit = PickerLimit::from_editor_config(&config);
        let result = format_reference(&format!("{FIRST},{SECOND},{FIRST}"), limit);
        assert_eq!(result.value, format!("{FIRST},{SECOND}"));

        assert_eq!(
            PickerLimit::from_editor_config(&EditorConfig::new()),
            PickerLimit::SINGLE
        );
    }
}
