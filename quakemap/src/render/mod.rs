//! Feature rendering.
//!
//! Turns validated features into [`StyledLayer`] values: circle markers for
//! earthquakes, polylines for fault boundaries. Layers are plain data; the
//! page module hands them to the browser-side map library.

mod popup;

pub use popup::{escape_html, format_timestamp, Popup, INVALID_DATE, UNKNOWN_PLACE};

use serde::Serialize;

use crate::classify::{color_for_optional_magnitude, radius_for_optional_magnitude, Color};
use crate::feature::{LatLng, LineFeature, PointFeature};

/// Stroke and fill options for a vector layer.
///
/// Unset fields fall back to the map library's defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Style shared by every fault line.
pub const FAULT_LINE_STYLE: PathStyle = PathStyle {
    color: Some(Color::new("orange")),
    fill_color: None,
    fill_opacity: None,
    weight: Some(2.0),
};

/// A renderable map object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StyledLayer {
    CircleMarker {
        center: LatLng,
        radius: f64,
        style: PathStyle,
        #[serde(skip_serializing_if = "Option::is_none")]
        popup: Option<Popup>,
    },
    Polyline {
        paths: Vec<Vec<LatLng>>,
        style: PathStyle,
        #[serde(skip_serializing_if = "Option::is_none")]
        popup: Option<Popup>,
    },
}

impl StyledLayer {
    pub fn style(&self) -> &PathStyle {
        match self {
            StyledLayer::CircleMarker { style, .. } | StyledLayer::Polyline { style, .. } => style,
        }
    }

    pub fn popup(&self) -> Option<&Popup> {
        match self {
            StyledLayer::CircleMarker { popup, .. } | StyledLayer::Polyline { popup, .. } => {
                popup.as_ref()
            }
        }
    }

    /// Binds popup content, replacing any previous popup.
    pub fn bind_popup(&mut self, content: Popup) {
        match self {
            StyledLayer::CircleMarker { popup, .. } | StyledLayer::Polyline { popup, .. } => {
                *popup = Some(content)
            }
        }
    }
}

/// Renders an earthquake as a filled circle sized and colored by magnitude.
pub fn render_quake_point(feature: &PointFeature) -> StyledLayer {
    let color = color_for_optional_magnitude(feature.magnitude);

    StyledLayer::CircleMarker {
        center: feature.position,
        radius: radius_for_optional_magnitude(feature.magnitude),
        style: PathStyle {
            color: Some(color),
            fill_color: Some(color),
            fill_opacity: Some(1.0),
            weight: None,
        },
        popup: None,
    }
}

/// Binds the place/time popup for an earthquake to its layer.
pub fn attach_quake_popup(feature: &PointFeature, layer: &mut StyledLayer) {
    layer.bind_popup(Popup::for_quake(feature));
}

/// Renders a fault boundary. Feature properties do not affect the style.
pub fn render_fault_line(feature: &LineFeature) -> StyledLayer {
    StyledLayer::Polyline {
        paths: feature.paths.clone(),
        style: FAULT_LINE_STYLE,
        popup: None,
    }
}
