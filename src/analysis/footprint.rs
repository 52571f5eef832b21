//! Footprint bounding-box reconstruction from pad geometry
//!
//! A component's occupied footprint is rebuilt from its pads: each pad's
//! rotated extents become an AABB, the pad boxes merge into the raw box,
//! and reversing the placement rotation about the component origin recovers
//! the footprint's natural size. Pad validation is strict: an unrecognized
//! shape or a malformed dimension fails the calculation naming the pad,
//! because a guessed footprint is worse than an explicit error.

use std::time::Instant;

use serde::Serialize;

use crate::board::{BoardAccessor, ComponentRecord, PadRecord, PadShapeDescriptor};
use crate::error::{Result, SpatialError};
use crate::geometry::{rotate_point, rotate_point_about, BoundingBox, MIL_TO_MM};

use super::types::{
    BoundingBoxDimensions, BoundingBoxParams, BoxDimensions, CalculationDetails,
    ComponentBoundingBox,
};

/// Default isotropic safety margin in mil
pub const DEFAULT_SAFETY_MARGIN_MIL: f64 = 50.0;

/// Shape family of a validated pad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PadShape {
    Rect,
    Circle,
    Oval,
    Polygon,
}

/// A pad in the engine's validated working form.
///
/// `x`/`y` are global board coordinates (the host bakes the component's
/// placement into them); `width`/`height` are the pad's local extents
/// before the pad's own rotation.
#[derive(Debug, Clone, Serialize)]
pub struct PadGeometry {
    pub pad_number: String,
    pub primitive_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub shape: PadShape,
}

fn require_extent(pad_number: &str, label: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SpatialError::InvalidGeometry {
            pad_number: pad_number.to_string(),
            reason: format!("invalid {} {}", label, value),
        });
    }
    Ok(value)
}

/// Validate one host pad record into the engine's working form
pub fn validate_pad(record: &PadRecord) -> Result<PadGeometry> {
    let pad_number = record.pad_number.as_str();

    let (width, height, shape) = match &record.shape {
        PadShapeDescriptor::Rect { width, height } => (
            require_extent(pad_number, "width", *width)?,
            require_extent(pad_number, "height", *height)?,
            PadShape::Rect,
        ),
        PadShapeDescriptor::Ellipse { width, height } => (
            require_extent(pad_number, "width", *width)?,
            require_extent(pad_number, "height", *height)?,
            PadShape::Circle,
        ),
        PadShapeDescriptor::Oval { width, height } => (
            require_extent(pad_number, "width", *width)?,
            require_extent(pad_number, "height", *height)?,
            PadShape::Oval,
        ),
        PadShapeDescriptor::Ngon { width, height } => (
            require_extent(pad_number, "width", *width)?,
            require_extent(pad_number, "height", *height)?,
            PadShape::Polygon,
        ),
        PadShapeDescriptor::Polygon { vertices } => {
            if vertices.len() < 3 {
                return Err(SpatialError::InvalidGeometry {
                    pad_number: pad_number.to_string(),
                    reason: format!("polygon with {} vertices", vertices.len()),
                });
            }
            let bounds = BoundingBox::from_points(vertices.iter().map(|p| (p.x, p.y)))
                .ok_or_else(|| SpatialError::InvalidGeometry {
                    pad_number: pad_number.to_string(),
                    reason: "empty polygon".to_string(),
                })?;
            (
                require_extent(pad_number, "width", bounds.width)?,
                require_extent(pad_number, "height", bounds.height)?,
                PadShape::Polygon,
            )
        }
        PadShapeDescriptor::Unsupported { tag } => {
            return Err(SpatialError::InvalidGeometry {
                pad_number: pad_number.to_string(),
                reason: format!("unsupported pad shape type: {}", tag),
            });
        }
    };

    Ok(PadGeometry {
        pad_number: record.pad_number.clone(),
        primitive_id: record.primitive_id.clone(),
        x: record.x,
        y: record.y,
        width,
        height,
        rotation: record.rotation,
        shape,
    })
}

/// Global AABB of one pad: rotate the four local corners by the pad's own
/// rotation, then translate by its global position.
pub fn pad_bounding_box(pad: &PadGeometry) -> BoundingBox {
    let half_w = pad.width / 2.0;
    let half_h = pad.height / 2.0;

    let corners = [
        (-half_w, -half_h),
        (half_w, -half_h),
        (half_w, half_h),
        (-half_w, half_h),
    ];

    let rotated = corners
        .iter()
        .map(|&(x, y)| {
            let p = rotate_point(x, y, pad.rotation);
            (p.x + pad.x, p.y + pad.y)
        });

    // Four corners, never empty
    BoundingBox::from_points(rotated).expect("pad corners")
}

/// Recover the footprint's pre-placement-rotation extent: reverse-rotate the
/// raw box's corners about the component origin and rebound them.
fn unrotate_box(raw: &BoundingBox, component: &ComponentRecord) -> BoundingBox {
    let reversed = raw.corners().into_iter().map(|(x, y)| {
        let p = rotate_point_about(x, y, component.x, component.y, -component.rotation);
        (p.x, p.y)
    });

    BoundingBox::from_points(reversed).expect("box corners")
}

/// Calculate the unrotated/raw/actual footprint boxes of one component.
///
/// Fails with `NotFound` for an unknown designator, `NoGeometry` when the
/// component has no pads, and `InvalidGeometry` for malformed pad data.
pub fn calculate_component_bounding_box(
    board: &dyn BoardAccessor,
    params: &BoundingBoxParams,
) -> Result<ComponentBoundingBox> {
    let start = Instant::now();
    let safety_margin = params.safety_margin.unwrap_or(DEFAULT_SAFETY_MARGIN_MIL);

    let component = board
        .component_by_designator(&params.designator)?
        .ok_or_else(|| SpatialError::NotFound {
            designator: params.designator.clone(),
        })?;

    let pads = board.component_pads(&component.primitive_id)?;
    if pads.is_empty() {
        return Err(SpatialError::NoGeometry {
            designator: params.designator.clone(),
        });
    }

    let pad_geometries = pads
        .iter()
        .map(validate_pad)
        .collect::<Result<Vec<PadGeometry>>>()?;

    let pad_boxes: Vec<BoundingBox> = pad_geometries.iter().map(pad_bounding_box).collect();

    // Pad positions already embed the placement rotation, so the merged box
    // is the footprint as rotated on the board; no further rotation here.
    let raw = BoundingBox::merged(&pad_boxes).expect("non-empty pad boxes");

    let unrotated = unrotate_box(&raw, &component);
    let actual = raw.expanded(safety_margin);

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    eprintln!(
        "[BBox] {}: {} pads, raw {:.1}x{:.1} mil, margin {:.0} mil in {:.2}ms",
        component.designator,
        pad_geometries.len(),
        raw.width,
        raw.height,
        safety_margin,
        elapsed_ms
    );

    Ok(ComponentBoundingBox {
        dimensions: BoundingBoxDimensions {
            unrotated: BoxDimensions::from_box(&unrotated),
            raw: BoxDimensions::from_box(&raw),
            actual: BoxDimensions::from_box(&actual),
        },
        unrotated,
        raw,
        actual,
        component,
        calculation_details: CalculationDetails {
            pad_count: pad_geometries.len(),
            safety_margin_mil: safety_margin,
            safety_margin_mm: safety_margin * MIL_TO_MM,
            execution_time_ms: elapsed_ms,
            warnings: None,
        },
    })
}
