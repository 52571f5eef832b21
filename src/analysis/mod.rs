//! Spatial analysis operations over a board accessor
//!
//! # Submodules
//! - `types` - Parameter and result records
//! - `footprint` - Footprint bounding-box reconstruction
//! - `proximity` - Nearby-component search
//! - `collision` - Spacing/overlap design-rule checking
//! - `relative` - Relative position between two components

mod collision;
mod footprint;
mod proximity;
mod relative;
mod types;

pub use collision::{check_component_collision, DEFAULT_MAX_RESULTS};
pub use footprint::{
    calculate_component_bounding_box, pad_bounding_box, validate_pad, PadGeometry, PadShape,
    DEFAULT_SAFETY_MARGIN_MIL,
};
pub use proximity::{find_nearby_components, DEFAULT_KNN_K};
pub use relative::calculate_relative_position;

pub use types::{
    AnalysisWarning, BoundingBoxDimensions, BoundingBoxParams, BoxDimensions, BoxKind,
    CalculationDetails, CheckMode, CollisionCheckParams, CollisionCheckResult, CollisionReference,
    CollisionStatistics, CollisionViolation, ComponentBoundingBox, DistanceTriple,
    NearbyComponent, NearbySearchParams, NearbySearchResult, OverlapViolation, ReferenceSummary,
    RelativePosition, RelativePositionParams, RelativeVector, SearchMode, SearchStatistics,
    Severity, SortKey, SpacingViolation, ViolationKind, WarningKind,
};
