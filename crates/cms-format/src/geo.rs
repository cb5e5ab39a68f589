//! Composite geo-point formatting.
//!
//! A map editor stores latitude + longitude + zoom as one JSON blob. The
//! formatter consumes the two raw halves and produces a single value for
//! the shared property alias.

use serde_json::json;

use cms_model::FieldValue;

/// Zoom level used when both coordinates are present.
const ZOOM_FOCUSED: u8 = 13;
/// Zoomed-out fallback when a coordinate is missing.
const ZOOM_WORLD: u8 = 2;

/// Formats a geo point from its raw latitude/longitude cells.
///
/// Returns `None` when both halves are absent or empty: the field is
/// skipped entirely rather than written as a zoomed-out placeholder.
/// A half that is present but does not parse as a number is treated as
/// absent and serializes as `null`.
pub fn format_geo_point(lat: Option<&str>, lng: Option<&str>) -> Option<FieldValue> {
    let lat_raw = lat.map(str::trim).filter(|value| !value.is_empty());
    let lng_raw = lng.map(str::trim).filter(|value| !value.is_empty());
    if lat_raw.is_none() && lng_raw.is_none() {
        return None;
    }

    let lat_value = lat_raw.and_then(|value| value.parse::<f64>().ok());
    let lng_value = lng_raw.and_then(|value| value.parse::<f64>().ok());
    let zoom = if lat_value.is_some() && lng_value.is_some() {
        ZOOM_FOCUSED
    } else {
        ZOOM_WORLD
    };

    let blob = json!({
        "latLng": [lat_value, lng_value],
        "zoom": zoom,
    });
    Some(FieldValue::Text(blob.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_coordinates_present() {
        let value = format_geo_point(Some("10.5"), Some("20.25")).expect("value");
        assert_eq!(
            value.as_text().expect("text"),
            r#"{"latLng":[10.5,20.25],"zoom":13}"#
        );
    }

    #[test]
    fn missing_longitude_zooms_out() {
        let value = format_geo_point(Some("10.5"), None).expect("value");
        assert_eq!(
            value.as_text().expect("text"),
            r#"{"latLng":[10.5,null],"zoom":2}"#
        );
    }

    #[test]
    fn both_absent_skips_the_field() {
        assert_eq!(format_geo_point(None, None), None);
        assert_eq!(format_geo_point(Some("  "), Some("")), None);
    }

    #[test]
    fn unparsable_coordinate_is_treated_as_absent() {
        let value = format_geo_point(Some("north-ish"), Some("20.25")).expect("value");
        assert_eq!(
            value.as_text().expect("text"),
            r#"{"latLng":[null,20.25],"zoom":2}"#
        );
    }
}
