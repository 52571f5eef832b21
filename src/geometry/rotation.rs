//! 2D rotation math
//!
//! Rotations are about the origin, counter-clockwise positive, angles in
//! degrees (the host application's placement-rotation convention).

use super::types::Point;

/// Rotate a point about the origin by a signed angle in degrees
pub fn rotate_point(x: f64, y: f64, angle_degrees: f64) -> Point {
    let angle_radians = angle_degrees.to_radians();
    let cos = angle_radians.cos();
    let sin = angle_radians.sin();

    Point {
        x: x * cos - y * sin,
        y: x * sin + y * cos,
    }
}

/// Rotate a point about an arbitrary pivot by a signed angle in degrees
pub fn rotate_point_about(x: f64, y: f64, pivot_x: f64, pivot_y: f64, angle_degrees: f64) -> Point {
    let rotated = rotate_point(x - pivot_x, y - pivot_y, angle_degrees);
    Point {
        x: rotated.x + pivot_x,
        y: rotated.y + pivot_y,
    }
}
