//! Axis-aligned bounding box math
//!
//! Pad boxes are merged into component footprint boxes, and every spacing
//! and overlap rule in the engine is evaluated on the merged boxes. The
//! overlap test is the separating-axis check; touching edges count as
//! overlapping.

use serde::Serialize;

/// Axis-aligned bounding box with derived dimensions.
///
/// Invariant: `min_x <= max_x` and `min_y <= max_y`. The derived fields are
/// computed at construction and kept alongside the corners so result records
/// can be serialized without recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl BoundingBox {
    pub fn from_corners(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        debug_assert!(min_x <= max_x && min_y <= max_y);
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
            center_x: (min_x + max_x) / 2.0,
            center_y: (min_y + max_y) / 2.0,
        }
    }

    /// Smallest box enclosing a set of points. None for an empty set.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        let mut any = false;

        for (x, y) in points {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
            any = true;
        }

        any.then(|| Self::from_corners(min_x, min_y, max_x, max_y))
    }

    /// Union of a set of boxes. None for an empty set.
    pub fn merged(boxes: &[BoundingBox]) -> Option<Self> {
        let first = boxes.first()?;
        let mut min_x = first.min_x;
        let mut min_y = first.min_y;
        let mut max_x = first.max_x;
        let mut max_y = first.max_y;

        for b in &boxes[1..] {
            min_x = min_x.min(b.min_x);
            min_y = min_y.min(b.min_y);
            max_x = max_x.max(b.max_x);
            max_y = max_y.max(b.max_y);
        }

        Some(Self::from_corners(min_x, min_y, max_x, max_y))
    }

    /// Box grown by `margin` on all four sides
    pub fn expanded(&self, margin: f64) -> Self {
        Self::from_corners(
            self.min_x - margin,
            self.min_y - margin,
            self.max_x + margin,
            self.max_y + margin,
        )
    }

    /// The four corners, counter-clockwise from (min_x, min_y)
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.min_x, self.min_y),
            (self.max_x, self.min_y),
            (self.max_x, self.max_y),
            (self.min_x, self.max_y),
        ]
    }

    /// Separating-axis overlap test. Touching edges count as overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        let separated = self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y;

        !separated
    }

    /// Intersection area in square mil; 0 when the boxes do not overlap
    pub fn overlap_area(&self, other: &BoundingBox) -> f64 {
        if !self.overlaps(other) {
            return 0.0;
        }

        let overlap_w = self.max_x.min(other.max_x) - self.min_x.max(other.min_x);
        let overlap_h = self.max_y.min(other.max_y) - self.min_y.max(other.min_y);

        overlap_w * overlap_h
    }

    /// Shortest edge-to-edge distance between two boxes; 0 when they overlap.
    ///
    /// This is the distance spacing rules are checked against. Center-to-center
    /// distance is misleading for large footprints, so each axis contributes
    /// its separation (clamped at 0) and the two are combined Pythagorean.
    pub fn edge_gap(&self, other: &BoundingBox) -> f64 {
        if self.overlaps(other) {
            return 0.0;
        }

        let gap_x = (self.min_x - other.max_x).max(other.min_x - self.max_x).max(0.0);
        let gap_y = (self.min_y - other.max_y).max(other.min_y - self.max_y).max(0.0);

        (gap_x * gap_x + gap_y * gap_y).sqrt()
    }
}
