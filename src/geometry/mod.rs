//! Geometry primitives for board spatial analysis
//!
//! # Submodules
//! - `types` - Core primitives (Point)
//! - `units` - mil/mm/inch conversion
//! - `rotation` - 2D rotation about origin and pivot
//! - `aabb` - Axis-aligned bounding boxes and their relations
//! - `compass` - 8/16-way angular sector classification

mod aabb;
mod compass;
mod rotation;
mod types;
mod units;

pub use aabb::BoundingBox;
pub use compass::{
    cardinal_direction, detailed_direction, normalize_angle, CardinalDirection, DetailedDirection,
};
pub use rotation::{rotate_point, rotate_point_about};
pub use types::Point;
pub use units::{Unit, INCH_TO_MIL, MIL_TO_INCH, MIL_TO_MM, MM_TO_MIL};
