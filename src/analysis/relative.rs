//! Relative position between two named components
//!
//! One iteration of the proximity math without pool filtering: the vector
//! from component A to component B in every unit, its compass bearing, and
//! whether the two share a layer.

use crate::board::BoardAccessor;
use crate::error::{Result, SpatialError};
use crate::geometry::{cardinal_direction, detailed_direction, normalize_angle};

use super::types::{DistanceTriple, RelativePosition, RelativePositionParams, RelativeVector};

/// Compute the distance, bearing, and layer relation between two components
pub fn calculate_relative_position(
    board: &dyn BoardAccessor,
    params: &RelativePositionParams,
) -> Result<RelativePosition> {
    let component_a = board
        .component_by_designator(&params.designator_a)?
        .ok_or_else(|| SpatialError::NotFound {
            designator: params.designator_a.clone(),
        })?;
    let component_b = board
        .component_by_designator(&params.designator_b)?
        .ok_or_else(|| SpatialError::NotFound {
            designator: params.designator_b.clone(),
        })?;

    let dx = component_b.x - component_a.x;
    let dy = component_b.y - component_a.y;
    let distance_mil = (dx * dx + dy * dy).sqrt();

    let angle_degrees = normalize_angle(dy.atan2(dx).to_degrees());
    let angle_radians = angle_degrees.to_radians();

    let same_layer = component_a.layer == component_b.layer;
    let direction = cardinal_direction(angle_degrees);

    eprintln!(
        "[Relative] {} -> {}: {:.2} mil at {:.1} deg ({})",
        component_a.designator,
        component_b.designator,
        distance_mil,
        angle_degrees,
        direction.as_str()
    );

    Ok(RelativePosition {
        relative: RelativeVector {
            distance: DistanceTriple::from_mil(distance_mil),
            angle_degrees,
            angle_radians,
            direction,
            detailed_direction: detailed_direction(angle_degrees),
        },
        component_a,
        component_b,
        same_layer,
    })
}
