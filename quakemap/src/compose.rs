//! Map composition.
//!
//! Assembles the base-layer choices, the two data overlays, the layer
//! switcher, and the legend into a [`MapView`]. After composition the view
//! only changes through user interaction with the switcher, modeled here by
//! [`MapView::select_base_layer`] and the overlay toggles.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::feature::LatLng;
use crate::layers::LayerGroup;
use crate::legend::{build_legend, Legend};
use crate::provider::{MapboxTiles, TileLayer};

/// Initial map center (Los Angeles).
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 34.05,
    lng: -118.24,
};

/// Initial zoom level.
pub const DEFAULT_ZOOM: u8 = 4;

/// Settings passed to [`compose_view`].
#[derive(Clone, PartialEq)]
pub struct MapOptions {
    /// MapBox access token for the base layers.
    pub access_token: String,
    pub center: LatLng,
    pub zoom: u8,
}

impl MapOptions {
    /// Creates options with the default center and zoom.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }

    pub fn with_center(mut self, center: LatLng) -> Self {
        self.center = center;
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }
}

impl std::fmt::Debug for MapOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapOptions")
            .field("access_token", &"<redacted>")
            .field("center", &self.center)
            .field("zoom", &self.zoom)
            .finish()
    }
}

/// A toggleable layer group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub visible: bool,
    pub group: LayerGroup,
}

impl Overlay {
    pub fn name(&self) -> &str {
        &self.group.name
    }
}

/// The base-layer and overlay switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerControl {
    /// Collapsed controls only expand on hover. Ours is always open.
    pub collapsed: bool,
    /// Single-select choices.
    pub base_layers: Vec<String>,
    /// Independent toggles.
    pub overlays: Vec<String>,
}

/// Errors from interacting with a composed view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unknown base layer '{0}'")]
    UnknownBaseLayer(String),

    #[error("unknown overlay '{0}'")]
    UnknownOverlay(String),
}

/// The composed interactive map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub base_layers: Vec<TileLayer>,
    pub active_base: String,
    pub overlays: Vec<Overlay>,
    pub layer_control: LayerControl,
    pub legend: Legend,
}

impl MapView {
    /// The currently shown base layer.
    pub fn active_base_layer(&self) -> Option<&TileLayer> {
        self.base_layers.iter().find(|l| l.name == self.active_base)
    }

    pub fn overlay(&self, name: &str) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.name() == name)
    }

    /// Names of the active base layer followed by every visible overlay.
    pub fn active_layers(&self) -> Vec<&str> {
        std::iter::once(self.active_base.as_str())
            .chain(
                self.overlays
                    .iter()
                    .filter(|o| o.visible)
                    .map(Overlay::name),
            )
            .collect()
    }

    /// Switches the base layer. Exactly one is active at a time.
    pub fn select_base_layer(&mut self, name: &str) -> Result<(), ViewError> {
        if !self.base_layers.iter().any(|l| l.name == name) {
            return Err(ViewError::UnknownBaseLayer(name.to_string()));
        }
        self.active_base = name.to_string();
        Ok(())
    }

    /// Shows or hides an overlay. Other overlays and the base layer are untouched.
    pub fn set_overlay_visible(&mut self, name: &str, visible: bool) -> Result<(), ViewError> {
        let overlay = self.overlay_mut(name)?;
        overlay.visible = visible;
        Ok(())
    }

    /// Flips an overlay and returns its new visibility.
    pub fn toggle_overlay(&mut self, name: &str) -> Result<bool, ViewError> {
        let overlay = self.overlay_mut(name)?;
        overlay.visible = !overlay.visible;
        Ok(overlay.visible)
    }

    fn overlay_mut(&mut self, name: &str) -> Result<&mut Overlay, ViewError> {
        self.overlays
            .iter_mut()
            .find(|o| o.group.name == name)
            .ok_or_else(|| ViewError::UnknownOverlay(name.to_string()))
    }
}

/// Composes the map view.
///
/// Satellite is the initial base layer and both overlays start visible.
pub fn compose_view(
    earthquakes: LayerGroup,
    fault_lines: LayerGroup,
    options: &MapOptions,
) -> MapView {
    let base_layers = MapboxTiles::new(options.access_token.clone()).base_layers();
    let legend = build_legend(&earthquakes);

    let overlays = vec![
        Overlay {
            visible: true,
            group: earthquakes,
        },
        Overlay {
            visible: true,
            group: fault_lines,
        },
    ];

    let layer_control = LayerControl {
        collapsed: false,
        base_layers: base_layers.iter().map(|l| l.name.clone()).collect(),
        overlays: overlays.iter().map(|o| o.name().to_string()).collect(),
    };

    let active_base = base_layers
        .first()
        .map(|l| l.name.clone())
        .unwrap_or_default();

    info!(
        base = %active_base,
        earthquakes = overlays[0].group.len(),
        fault_lines = overlays[1].group.len(),
        zoom = options.zoom,
        "Composed map view"
    );

    MapView {
        center: options.center,
        zoom: options.zoom,
        base_layers,
        active_base,
        overlays,
        layer_control,
        legend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{EARTHQUAKES, FAULT_LINES};

    fn empty_view() -> MapView {
        compose_view(
            LayerGroup::new(EARTHQUAKES),
            LayerGroup::new(FAULT_LINES),
            &MapOptions::new("pk.test"),
        )
    }

    #[test]
    fn test_initial_state() {
        let view = empty_view();

        assert_eq!(view.center, LatLng::new(34.05, -118.24));
        assert_eq!(view.zoom, 4);
        assert_eq!(view.active_base, "Satellite Map");
        assert_eq!(
            view.active_layers(),
            ["Satellite Map", EARTHQUAKES, FAULT_LINES]
        );
        assert_eq!(view.legend.entries.len(), 6);
    }

    #[test]
    fn test_layer_control() {
        let view = empty_view();

        assert!(!view.layer_control.collapsed);
        assert_eq!(
            view.layer_control.base_layers,
            ["Satellite Map", "Grayscale", "Outdoors"]
        );
        assert_eq!(view.layer_control.overlays, [EARTHQUAKES, FAULT_LINES]);
    }

    #[test]
    fn test_credential_reaches_base_layers() {
        let view = empty_view();
        assert!(view.base_layers.iter().all(|l| l.access_token == "pk.test"));
    }

    #[test]
    fn test_base_layers_are_exclusive() {
        let mut view = empty_view();

        view.select_base_layer("Outdoors").unwrap();
        assert_eq!(view.active_base_layer().unwrap().id, "mapbox.outdoors");
        assert_eq!(view.active_layers()[0], "Outdoors");
        assert_eq!(view.active_layers().len(), 3);

        assert_eq!(
            view.select_base_layer("Terrain"),
            Err(ViewError::UnknownBaseLayer("Terrain".to_string()))
        );
        assert_eq!(view.active_base, "Outdoors");
    }

    #[test]
    fn test_overlays_toggle_independently() {
        let mut view = empty_view();

        assert_eq!(view.toggle_overlay(EARTHQUAKES), Ok(false));
        assert!(view.overlay(FAULT_LINES).unwrap().visible);
        assert_eq!(view.active_layers(), ["Satellite Map", FAULT_LINES]);

        view.set_overlay_visible(FAULT_LINES, false).unwrap();
        assert_eq!(view.active_layers(), ["Satellite Map"]);

        view.select_base_layer("Grayscale").unwrap();
        assert!(!view.overlay(EARTHQUAKES).unwrap().visible);

        assert!(view.toggle_overlay("Volcanoes").is_err());
    }

    #[test]
    fn test_custom_options() {
        let options = MapOptions::new("pk.test")
            .with_center(LatLng::new(0.0, 0.0))
            .with_zoom(2);
        let view = compose_view(
            LayerGroup::new(EARTHQUAKES),
            LayerGroup::new(FAULT_LINES),
            &options,
        );

        assert_eq!(view.center, LatLng::new(0.0, 0.0));
        assert_eq!(view.zoom, 2);
        assert!(!format!("{:?}", options).contains("pk.test"));
    }
}
