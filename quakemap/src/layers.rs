//! Layer groups for the two data feeds.
//!
//! Each builder validates the raw records of one feed, renders them in input
//! order, and collects the result into a named [`LayerGroup`]. The first
//! malformed record aborts the whole group.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::feature::{FeatureError, LineFeature, PointFeature, RawFeature};
use crate::render::{
    attach_quake_popup, render_fault_line, render_quake_point, PathStyle, StyledLayer,
    FAULT_LINE_STYLE,
};

/// Overlay name for the earthquake group.
pub const EARTHQUAKES: &str = "Earthquakes";

/// Overlay name for the fault-line group.
pub const FAULT_LINES: &str = "Fault Lines";

/// A named collection of layers toggled as one overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerGroup {
    pub name: String,
    /// Group-level style applied to every member when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<PathStyle>,
    pub layers: Vec<StyledLayer>,
}

impl LayerGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: None,
            layers: Vec::new(),
        }
    }

    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// A feed record that could not be turned into a layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayerError {
    #[error("{group}: feature #{index} is invalid: {source}")]
    InvalidFeature {
        group: &'static str,
        index: usize,
        #[source]
        source: FeatureError,
    },
}

/// Builds the earthquake overlay: one circle marker with a popup per record.
pub fn build_earthquake_layer_group(features: &[RawFeature]) -> Result<LayerGroup, LayerError> {
    let mut group = LayerGroup::new(EARTHQUAKES);
    group.layers.reserve(features.len());

    for (index, raw) in features.iter().enumerate() {
        let quake = PointFeature::try_from(raw).map_err(|source| LayerError::InvalidFeature {
            group: EARTHQUAKES,
            index,
            source,
        })?;

        let mut layer = render_quake_point(&quake);
        attach_quake_popup(&quake, &mut layer);
        group.layers.push(layer);
    }

    debug!(layers = group.len(), "Built earthquake layer group");
    Ok(group)
}

/// Builds the fault-line overlay with a uniform group style.
pub fn build_fault_layer_group(features: &[RawFeature]) -> Result<LayerGroup, LayerError> {
    let mut group = LayerGroup::new(FAULT_LINES).with_style(FAULT_LINE_STYLE);
    group.layers.reserve(features.len());

    for (index, raw) in features.iter().enumerate() {
        let line = LineFeature::try_from(raw).map_err(|source| LayerError::InvalidFeature {
            group: FAULT_LINES,
            index,
            source,
        })?;
        group.layers.push(render_fault_line(&line));
    }

    debug!(layers = group.len(), "Built fault line layer group");
    Ok(group)
}
