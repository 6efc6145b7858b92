//! Magnitude legend control.

use serde::Serialize;

use crate::classify::{color_for_magnitude, Color, BANDS};
use crate::layers::LayerGroup;
use crate::render::escape_html;

/// Legend heading.
pub const LEGEND_TITLE: &str = "Earthquake Magnitude";

/// Screen corner a control is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One colored legend row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: Color,
}

/// A static legend mapping magnitude bands to colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub position: ControlPosition,
    pub title: &'static str,
    pub entries: Vec<LegendEntry>,
    pub html: String,
}

impl Legend {
    /// Inner HTML of the legend container.
    pub fn to_html(&self) -> String {
        let mut html = format!("<h3>{}</h3>", escape_html(self.title));
        for entry in &self.entries {
            html.push_str(&format!(
                "<li style=\"background-color:{}\">{}</li>",
                entry.color,
                escape_html(entry.label)
            ));
        }
        html
    }
}

/// Builds the legend.
///
/// Content depends only on the band table. The earthquake group is accepted
/// but not consulted, so every dataset gets the same six rows.
pub fn build_legend(_earthquakes: &LayerGroup) -> Legend {
    let entries = BANDS
        .iter()
        .enumerate()
        .map(|(lower, band)| LegendEntry {
            label: band.label,
            color: color_for_magnitude(lower as f64 + 1.0),
        })
        .collect();

    let mut legend = Legend {
        position: ControlPosition::BottomRight,
        title: LEGEND_TITLE,
        entries,
        html: String::new(),
    };
    legend.html = legend.to_html();
    legend
}
