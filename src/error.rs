//! Error taxonomy for the spatial engine
//!
//! Every variant is terminal for the single operation that raised it and is
//! never retried internally; callers may retry the whole call. Degraded
//! per-candidate data (a bounding box that could not be computed) is not an
//! error: the candidate stays in the result set with a warning attached.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpatialError>;

#[derive(Debug, Error)]
pub enum SpatialError {
    /// No component matches the requested designator
    #[error("component not found: {designator}")]
    NotFound { designator: String },

    /// The component has no pads to reconstruct a footprint from
    #[error("component {designator} has no pad geometry")]
    NoGeometry { designator: String },

    /// A pad's shape data is unrecognized or malformed. Wrong footprint
    /// geometry is worse than an explicit failure, so nothing is estimated.
    #[error("pad {pad_number}: {reason}")]
    InvalidGeometry { pad_number: String, reason: String },

    /// A required parameter is missing or inconsistent with the requested mode
    #[error("invalid parameters: {0}")]
    Validation(String),

    /// The board accessor failed
    #[error("board accessor error: {0}")]
    Host(#[from] anyhow::Error),
}
