//! Board-facing record types
//!
//! These mirror the records the host board editor hands over: placed
//! components and their pads. Pad coordinates are global board coordinates
//! in mil and already include the parent component's placement rotation,
//! per the host's convention.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Host layer id for the top copper layer
pub const LAYER_TOP: u8 = 1;
/// Host layer id for the bottom copper layer
pub const LAYER_BOTTOM: u8 = 2;

/// A placed component as reported by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub designator: String,
    pub primitive_id: String,
    pub layer: u8,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl ComponentRecord {
    pub fn layer_name(&self) -> String {
        match self.layer {
            LAYER_TOP => "TOP".to_string(),
            LAYER_BOTTOM => "BOTTOM".to_string(),
            other => format!("Layer {}", other),
        }
    }
}

/// Pad shape as reported by the host, one variant per shape family.
///
/// `Unsupported` captures any shape tag the engine does not recognize so
/// the calculator can reject it by name instead of guessing a size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PadShapeDescriptor {
    Rect { width: f64, height: f64 },
    Ellipse { width: f64, height: f64 },
    Oval { width: f64, height: f64 },
    Ngon { width: f64, height: f64 },
    Polygon { vertices: Vec<Point> },
    Unsupported { tag: String },
}

/// A single pad of a placed component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PadRecord {
    pub pad_number: String,
    pub primitive_id: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub shape: PadShapeDescriptor,
}

/// Layer filter accepted by the query surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerFilter {
    Top,
    Bottom,
    #[default]
    All,
}

impl LayerFilter {
    pub fn matches(self, layer: u8) -> bool {
        match self {
            LayerFilter::Top => layer == LAYER_TOP,
            LayerFilter::Bottom => layer == LAYER_BOTTOM,
            LayerFilter::All => true,
        }
    }
}
