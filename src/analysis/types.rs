//! Parameter and result records for the analysis operations
//!
//! All inputs and outputs are plain structured records; hosts deserialize
//! parameters from their transport layer and serialize results back out.

use serde::{Deserialize, Serialize};

use crate::board::ComponentRecord;
use crate::board::LayerFilter;
use crate::geometry::{BoundingBox, CardinalDirection, DetailedDirection, Point, Unit};
use crate::geometry::{MIL_TO_INCH, MIL_TO_MM};

/// Which derived footprint box an operation should measure against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxKind {
    /// Footprint as placed and rotated, no margin
    #[default]
    Raw,
    /// Raw box expanded by the safety margin
    Actual,
}

/// Proximity search mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// K nearest candidates by center distance
    Knn,
    /// All candidates within `max_distance`
    Radius,
    /// Candidates inside an 8-way sector and within `max_distance`
    Direction,
    /// Legacy spacing screen: candidates closer than `min_distance`
    Collision,
}

/// Secondary sort applied to proximity results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Distance,
    Angle,
    Designator,
}

/// Collision checker mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    Spacing,
    Overlap,
    Both,
}

impl CheckMode {
    pub fn includes_spacing(self) -> bool {
        matches!(self, CheckMode::Spacing | CheckMode::Both)
    }

    pub fn includes_overlap(self) -> bool {
        matches!(self, CheckMode::Overlap | CheckMode::Both)
    }
}

/// How a candidate violated the design rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationKind {
    Spacing,
    Overlap,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    Spacing,
    Overlap,
    BoundingBox,
    Calculation,
}

/// A non-fatal finding attached to an operation's result
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisWarning {
    pub kind: WarningKind,
    pub message: String,
    pub severity: Severity,
}

/// A distance reported in all three supported units
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DistanceTriple {
    pub mil: f64,
    pub mm: f64,
    pub inch: f64,
}

impl DistanceTriple {
    pub fn from_mil(mil: f64) -> Self {
        Self {
            mil,
            mm: mil * MIL_TO_MM,
            inch: mil * MIL_TO_INCH,
        }
    }
}

/// Identity and position of the reference component in a result
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceSummary {
    pub designator: String,
    pub position: Point,
    pub layer: u8,
}

impl ReferenceSummary {
    pub(crate) fn from_record(record: &ComponentRecord) -> Self {
        Self {
            designator: record.designator.clone(),
            position: Point::new(record.x, record.y),
            layer: record.layer,
        }
    }
}

// ---------------------------------------------------------------------------
// Footprint bounding-box calculation
// ---------------------------------------------------------------------------

/// Parameters for `calculate_component_bounding_box`
#[derive(Debug, Clone, Deserialize)]
pub struct BoundingBoxParams {
    pub designator: String,
    /// Safety margin in mil; defaults to 50
    #[serde(default)]
    pub safety_margin: Option<f64>,
}

impl BoundingBoxParams {
    pub fn new(designator: &str) -> Self {
        Self {
            designator: designator.to_string(),
            safety_margin: None,
        }
    }
}

/// Width/height of one box in every unit
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BoxDimensions {
    pub width_mil: f64,
    pub width_mm: f64,
    pub width_inch: f64,
    pub height_mil: f64,
    pub height_mm: f64,
    pub height_inch: f64,
}

impl BoxDimensions {
    pub(crate) fn from_box(b: &BoundingBox) -> Self {
        Self {
            width_mil: b.width,
            width_mm: b.width * MIL_TO_MM,
            width_inch: b.width * MIL_TO_INCH,
            height_mil: b.height,
            height_mm: b.height * MIL_TO_MM,
            height_inch: b.height * MIL_TO_INCH,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoundingBoxDimensions {
    pub unrotated: BoxDimensions,
    pub raw: BoxDimensions,
    pub actual: BoxDimensions,
}

/// Metadata about one bounding-box calculation
#[derive(Debug, Clone, Serialize)]
pub struct CalculationDetails {
    pub pad_count: usize,
    pub safety_margin_mil: f64,
    pub safety_margin_mm: f64,
    pub execution_time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// The three derived footprint boxes of one component
#[derive(Debug, Clone, Serialize)]
pub struct ComponentBoundingBox {
    /// Footprint with the placement rotation reversed
    pub unrotated: BoundingBox,
    /// Footprint as placed and rotated, no margin
    pub raw: BoundingBox,
    /// Raw box expanded by the safety margin
    pub actual: BoundingBox,
    pub dimensions: BoundingBoxDimensions,
    pub component: ComponentRecord,
    pub calculation_details: CalculationDetails,
}

impl ComponentBoundingBox {
    pub fn select(&self, kind: BoxKind) -> &BoundingBox {
        match kind {
            BoxKind::Raw => &self.raw,
            BoxKind::Actual => &self.actual,
        }
    }
}

// ---------------------------------------------------------------------------
// Proximity search
// ---------------------------------------------------------------------------

/// Parameters for `find_nearby_components`
#[derive(Debug, Clone, Deserialize)]
pub struct NearbySearchParams {
    pub reference_designator: String,
    pub search_mode: SearchMode,
    /// knn mode: number of neighbors to keep (default 5)
    #[serde(default)]
    pub k: Option<usize>,
    /// radius/direction modes: cutoff distance in `unit`
    #[serde(default)]
    pub max_distance: Option<f64>,
    /// legacy collision mode: spacing screen threshold in `unit`
    #[serde(default)]
    pub min_distance: Option<f64>,
    #[serde(default)]
    pub unit: Unit,
    /// direction mode: the 8-way sector to search
    #[serde(default)]
    pub direction: Option<CardinalDirection>,
    #[serde(default)]
    pub layer: LayerFilter,
    /// Keep the reference component itself in the candidate pool
    #[serde(default)]
    pub include_reference: bool,
    #[serde(default)]
    pub exclude_designators: Vec<String>,
    #[serde(default)]
    pub sort_by: SortKey,
    /// Annotate each result with a bounding-box overlap test (default true)
    #[serde(default = "default_true")]
    pub use_bounding_box_overlap: bool,
    #[serde(default)]
    pub bounding_box_kind: BoxKind,
}

fn default_true() -> bool {
    true
}

impl NearbySearchParams {
    pub fn new(reference_designator: &str, search_mode: SearchMode) -> Self {
        Self {
            reference_designator: reference_designator.to_string(),
            search_mode,
            k: None,
            max_distance: None,
            min_distance: None,
            unit: Unit::Mil,
            direction: None,
            layer: LayerFilter::All,
            include_reference: false,
            exclude_designators: Vec::new(),
            sort_by: SortKey::Distance,
            use_bounding_box_overlap: true,
            bounding_box_kind: BoxKind::Raw,
        }
    }
}

/// One surviving candidate of a proximity search
#[derive(Debug, Clone, Serialize)]
pub struct NearbyComponent {
    pub designator: String,
    pub position: Point,
    pub layer: u8,
    pub rotation: f64,
    pub distance: DistanceTriple,
    /// Angle from reference to candidate in degrees, [0, 360)
    pub angle: f64,
    pub direction: CardinalDirection,
    pub detailed_direction: DetailedDirection,
    /// Only meaningful when bounding-box overlap was requested
    pub overlapping: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchStatistics {
    pub total_found: usize,
    /// Candidate pool size after layer/exclusion filters
    pub searched: usize,
    pub execution_time_ms: f64,
    /// radius mode only: results per square mil of search disc
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NearbySearchResult {
    pub reference: ReferenceSummary,
    pub nearby_components: Vec<NearbyComponent>,
    /// Which footprint box variant the overlap annotation used
    pub bounding_box_kind: BoxKind,
    pub statistics: SearchStatistics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<AnalysisWarning>,
}

// ---------------------------------------------------------------------------
// Collision check
// ---------------------------------------------------------------------------

/// Parameters for `check_component_collision`
#[derive(Debug, Clone, Deserialize)]
pub struct CollisionCheckParams {
    pub reference_designator: String,
    pub check_mode: CheckMode,
    /// Required when `check_mode` includes spacing; expressed in `unit`
    #[serde(default)]
    pub min_spacing: Option<f64>,
    #[serde(default)]
    pub bounding_box_kind: BoxKind,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub layer: LayerFilter,
    #[serde(default)]
    pub exclude_designators: Vec<String>,
    /// Candidate pool cap (default 100); applied before checking
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl CollisionCheckParams {
    pub fn new(reference_designator: &str, check_mode: CheckMode) -> Self {
        Self {
            reference_designator: reference_designator.to_string(),
            check_mode,
            min_spacing: None,
            bounding_box_kind: BoxKind::Raw,
            unit: Unit::Mil,
            layer: LayerFilter::All,
            exclude_designators: Vec::new(),
            max_results: None,
        }
    }
}

/// Spacing shortfall detail, reported in the caller's unit
#[derive(Debug, Clone, Serialize)]
pub struct SpacingViolation {
    pub actual: f64,
    pub required: f64,
    pub deficit: f64,
    pub unit: Unit,
}

/// Overlap detail in mil
#[derive(Debug, Clone, Serialize)]
pub struct OverlapViolation {
    /// Intersection area in square mil
    pub area: f64,
    /// The candidate's footprint box
    pub bounding_box: BoundingBox,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollisionViolation {
    pub designator: String,
    pub position: Point,
    pub layer: u8,
    pub violation_kind: ViolationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingViolation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap: Option<OverlapViolation>,
    /// Edge gap between footprint boxes (center distance if degraded)
    pub distance: DistanceTriple,
    pub angle: f64,
    pub direction: CardinalDirection,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollisionReference {
    pub designator: String,
    pub position: Point,
    pub layer: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    pub bounding_box_kind: BoxKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollisionStatistics {
    pub total_checked: usize,
    pub violations_found: usize,
    pub spacing_violations: usize,
    pub overlap_violations: usize,
    pub execution_time_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollisionCheckResult {
    pub reference: CollisionReference,
    pub violations: Vec<CollisionViolation>,
    pub statistics: CollisionStatistics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<AnalysisWarning>,
}

// ---------------------------------------------------------------------------
// Relative position
// ---------------------------------------------------------------------------

/// Parameters for `calculate_relative_position`
#[derive(Debug, Clone, Deserialize)]
pub struct RelativePositionParams {
    pub designator_a: String,
    pub designator_b: String,
}

impl RelativePositionParams {
    pub fn new(designator_a: &str, designator_b: &str) -> Self {
        Self {
            designator_a: designator_a.to_string(),
            designator_b: designator_b.to_string(),
        }
    }
}

/// Vector from component A to component B
#[derive(Debug, Clone, Serialize)]
pub struct RelativeVector {
    pub distance: DistanceTriple,
    pub angle_degrees: f64,
    pub angle_radians: f64,
    pub direction: CardinalDirection,
    pub detailed_direction: DetailedDirection,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelativePosition {
    pub component_a: ComponentRecord,
    pub component_b: ComponentRecord,
    pub relative: RelativeVector,
    pub same_layer: bool,
}
