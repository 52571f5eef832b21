//! PCB component spatial analysis engine
//!
//! Reconstructs component footprints from pad geometry and answers
//! proximity, relative-position, and design-rule spacing/overlap queries
//! over an in-memory snapshot of a board. The board editor is an external
//! collaborator behind the `BoardAccessor` trait; the engine holds no
//! state between calls and is safe to invoke concurrently for different
//! reference components.
//!
//! # Modules
//! - `geometry` - Units, rotation, AABBs, compass sectors
//! - `board` - Accessor boundary and snapshot records
//! - `analysis` - The public operations and their records
//! - `error` - Error taxonomy

pub mod analysis;
pub mod board;
pub mod error;
pub mod geometry;

pub use analysis::{
    calculate_component_bounding_box, calculate_relative_position, check_component_collision,
    find_nearby_components, BoundingBoxParams, BoxKind, CheckMode, CollisionCheckParams,
    CollisionCheckResult, ComponentBoundingBox, NearbySearchParams, NearbySearchResult,
    RelativePosition, RelativePositionParams, SearchMode, SortKey,
};
pub use board::{
    BoardAccessor, BoardSnapshot, ComponentRecord, LayerFilter, PadRecord, PadShapeDescriptor,
};
pub use error::{Result, SpatialError};
pub use geometry::{BoundingBox, CardinalDirection, DetailedDirection, Point, Unit};
