//! HTML page output.
//!
//! A composed [`MapView`] is serialized to JSON and embedded in a
//! self-contained page that loads Leaflet and rebuilds the layers in the
//! browser. When startup fails an error page is written instead so the user
//! sees what went wrong rather than a blank map.

mod template;

use thiserror::Error;

use crate::compose::MapView;
use crate::render::escape_html;
use template::{ERROR_PAGE_HTML, MAP_PAGE_HTML};

/// Document title for generated pages.
pub const PAGE_TITLE: &str = "Earthquakes and Fault Lines";

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Failed to serialize map view: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Renders the interactive map page.
pub fn render_map_page(view: &MapView) -> Result<String, PageError> {
    let json = serde_json::to_string(view)?;

    Ok(MAP_PAGE_HTML
        .replace("{{TITLE}}", PAGE_TITLE)
        .replace("{{VIEW_JSON}}", &escape_script_json(&json)))
}

/// Renders a page describing a startup failure.
pub fn render_error_page(message: &str) -> String {
    ERROR_PAGE_HTML
        .replace("{{TITLE}}", PAGE_TITLE)
        .replace("{{MESSAGE}}", &escape_html(message))
}

/// Makes JSON safe to place inside a `<script>` element.
///
/// `<` only occurs inside JSON strings, where the `\u003c` escape decodes
/// back to the same character.
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{compose_view, MapOptions};
    use crate::feature::RawFeature;
    use crate::layers::{build_earthquake_layer_group, LayerGroup, FAULT_LINES};
    use serde_json::json;

    fn view_with_place(place: &str) -> MapView {
        let raw: RawFeature = serde_json::from_value(json!({
            "geometry": { "type": "Point", "coordinates": [-118.24, 34.05] },
            "properties": { "mag": 3.0, "place": place, "time": 0 }
        }))
        .unwrap();
        compose_view(
            build_earthquake_layer_group(&[raw]).unwrap(),
            LayerGroup::new(FAULT_LINES),
            &MapOptions::new("pk.test"),
        )
    }

    fn embedded_json(page: &str) -> serde_json::Value {
        let start = page.find("application/json\">").unwrap() + "application/json\">".len();
        let end = start + page[start..].find("</script>").unwrap();
        serde_json::from_str(&page[start..end]).unwrap()
    }

    #[test]
    fn test_map_page_embeds_view() {
        let page = render_map_page(&view_with_place("Test")).unwrap();

        assert!(page.contains("<title>Earthquakes and Fault Lines</title>"));
        assert!(page.contains("leaflet.js"));

        let data = embedded_json(&page);
        assert_eq!(data["activeBase"], "Satellite Map");
        assert_eq!(data["zoom"], 4);
        assert_eq!(data["legend"]["position"], "bottomright");
        assert_eq!(data["layerControl"]["collapsed"], false);
        assert_eq!(
            data["overlays"][0]["group"]["layers"][0]["style"]["color"],
            "#FF5733"
        );
    }

    #[test]
    fn test_script_breakout_is_escaped() {
        let page = render_map_page(&view_with_place("</script><script>alert(1)</script>")).unwrap();

        assert_eq!(page.matches("</script>").count(), 3);
        let data = embedded_json(&page);
        assert_eq!(
            data["overlays"][0]["group"]["layers"][0]["popup"]["title"],
            "</script><script>alert(1)</script>"
        );
    }

    #[test]
    fn test_error_page() {
        let page = render_error_page("earthquake feed unavailable: <timeout>");

        assert!(page.contains("earthquake feed unavailable: &lt;timeout&gt;"));
        assert!(!page.contains("{{MESSAGE}}"));
    }
}
