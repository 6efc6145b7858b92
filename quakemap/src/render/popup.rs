//! Earthquake popup content.

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::feature::PointFeature;

/// Title used when the feed has no place description.
pub const UNKNOWN_PLACE: &str = "Unknown location";

/// Timestamp shown when the origin time is missing or out of range.
pub const INVALID_DATE: &str = "Invalid Date";

const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S UTC";

/// Popup text bound to an earthquake marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub timestamp: String,
}

impl Popup {
    pub fn for_quake(feature: &PointFeature) -> Self {
        Self {
            title: feature
                .place
                .clone()
                .unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
            timestamp: feature
                .time_ms
                .map_or_else(|| INVALID_DATE.to_string(), format_timestamp),
        }
    }

    /// Place heading, a horizontal rule, then the event time.
    pub fn to_html(&self) -> String {
        format!(
            "<h3>{}</h3><hr><p>{}</p>",
            escape_html(&self.title),
            escape_html(&self.timestamp)
        )
    }
}

impl Serialize for Popup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Popup", 3)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("timestamp", &self.timestamp)?;
        state.serialize_field("html", &self.to_html())?;
        state.end()
    }
}

/// Formats epoch milliseconds as a UTC date string.
pub fn format_timestamp(time_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(time_ms) {
        Some(time) => time.format(TIMESTAMP_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Escapes text for inclusion in HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::LatLng;

    #[test]
    fn test_epoch_zero() {
        assert_eq!(format_timestamp(0), "Thu Jan 01 1970 00:00:00 UTC");
    }

    #[test]
    fn test_recent_timestamp() {
        // 2023-11-14T22:13:20Z
        assert_eq!(
            format_timestamp(1_700_000_000_000),
            "Tue Nov 14 2023 22:13:20 UTC"
        );
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert_eq!(format_timestamp(i64::MAX), INVALID_DATE);
    }

    #[test]
    fn test_popup_html_escapes_place() {
        let popup = Popup {
            title: "<b>Ridge & Trench</b>".to_string(),
            timestamp: "now".to_string(),
        };
        assert_eq!(
            popup.to_html(),
            "<h3>&lt;b&gt;Ridge &amp; Trench&lt;/b&gt;</h3><hr><p>now</p>"
        );
    }

    #[test]
    fn test_missing_place_title() {
        let quake = PointFeature {
            position: LatLng::new(0.0, 0.0),
            magnitude: Some(1.0),
            place: None,
            time_ms: Some(0),
        };
        assert_eq!(Popup::for_quake(&quake).title, UNKNOWN_PLACE);
    }

    #[test]
    fn test_missing_time_renders_invalid_date() {
        let quake = PointFeature {
            position: LatLng::new(0.0, 0.0),
            magnitude: Some(1.0),
            place: Some("Test".to_string()),
            time_ms: None,
        };
        let popup = Popup::for_quake(&quake);
        assert_eq!(popup.title, "Test");
        assert_eq!(popup.timestamp, "Invalid Date");
        assert_eq!(popup.to_html(), "<h3>Test</h3><hr><p>Invalid Date</p>");
    }

    #[test]
    fn test_serialized_popup_carries_html() {
        let popup = Popup {
            title: "Test".to_string(),
            timestamp: format_timestamp(0),
        };
        let json = serde_json::to_value(&popup).unwrap();
        assert_eq!(json["title"], "Test");
        assert_eq!(
            json["html"],
            "<h3>Test</h3><hr><p>Thu Jan 01 1970 00:00:00 UTC</p>"
        );
    }
}
