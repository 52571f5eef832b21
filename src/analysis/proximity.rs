//! Proximity search over placed components
//!
//! One pass computes center distance, angle, and compass direction for every
//! candidate, then the search mode filters the pool: k-nearest, radius,
//! directional sector, or the legacy collision screen. Bounding-box overlap
//! annotation is optional and fans out per-candidate box computation across
//! worker threads.

use std::collections::HashSet;
use std::f64::consts::PI;
use std::time::Instant;

use rayon::prelude::*;

use crate::board::{BoardAccessor, ComponentRecord};
use crate::error::{Result, SpatialError};
use crate::geometry::{
    cardinal_direction, detailed_direction, normalize_angle, BoundingBox, CardinalDirection,
    DetailedDirection, Point, MIL_TO_MM,
};

use super::footprint::calculate_component_bounding_box;
use super::types::{
    AnalysisWarning, BoundingBoxParams, BoxKind, DistanceTriple, NearbyComponent,
    NearbySearchParams, NearbySearchResult, ReferenceSummary, SearchMode, SearchStatistics,
    Severity, SortKey, WarningKind,
};

/// Default neighbor count for knn searches
pub const DEFAULT_KNN_K: usize = 5;

struct Candidate {
    record: ComponentRecord,
    distance_mil: f64,
    angle: f64,
    direction: CardinalDirection,
    detailed_direction: DetailedDirection,
}

/// Compute the reference-to-candidate polar metrics for one record
fn measure(reference: &ComponentRecord, record: ComponentRecord) -> Candidate {
    let dx = record.x - reference.x;
    let dy = record.y - reference.y;
    let distance_mil = (dx * dx + dy * dy).sqrt();
    let angle = normalize_angle(dy.atan2(dx).to_degrees());

    Candidate {
        distance_mil,
        angle,
        direction: cardinal_direction(angle),
        detailed_direction: detailed_direction(angle),
        record,
    }
}

fn sort_by_distance(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| a.distance_mil.total_cmp(&b.distance_mil));
}

/// Compute one candidate's footprint box for overlap annotation.
/// Margin 0: the overlap test measures the footprint itself.
fn candidate_box(
    board: &dyn BoardAccessor,
    designator: &str,
    kind: BoxKind,
) -> std::result::Result<BoundingBox, String> {
    let params = BoundingBoxParams {
        designator: designator.to_string(),
        safety_margin: Some(0.0),
    };
    match calculate_component_bounding_box(board, &params) {
        Ok(result) => Ok(*result.select(kind)),
        Err(err) => Err(err.to_string()),
    }
}

/// Find components near a reference component.
///
/// Fails with `NotFound` for an unresolvable reference and `Validation`
/// when the mode's required threshold is missing. A candidate whose
/// bounding box cannot be computed is never dropped: it stays in the
/// results with `overlapping = false` and a warning.
pub fn find_nearby_components(
    board: &dyn BoardAccessor,
    params: &NearbySearchParams,
) -> Result<NearbySearchResult> {
    let start = Instant::now();

    let reference = board
        .component_by_designator(&params.reference_designator)?
        .ok_or_else(|| SpatialError::NotFound {
            designator: params.reference_designator.clone(),
        })?;

    let mut pool = board.components(params.layer)?;
    if !params.include_reference {
        pool.retain(|c| c.primitive_id != reference.primitive_id);
    }
    if !params.exclude_designators.is_empty() {
        let excluded: HashSet<&str> = params
            .exclude_designators
            .iter()
            .map(String::as_str)
            .collect();
        pool.retain(|c| !excluded.contains(c.designator.as_str()));
    }
    let searched = pool.len();

    let mut candidates: Vec<Candidate> = pool
        .into_iter()
        .map(|record| measure(&reference, record))
        .collect();

    let mut warnings: Vec<AnalysisWarning> = Vec::new();
    let to_mil = params.unit.to_mil_factor();

    match params.search_mode {
        SearchMode::Knn => {
            let k = params.k.unwrap_or(DEFAULT_KNN_K);
            sort_by_distance(&mut candidates);
            candidates.truncate(k);
        }
        SearchMode::Radius => {
            let max_distance = params.max_distance.ok_or_else(|| {
                SpatialError::Validation("radius search requires max_distance".to_string())
            })?;
            let max_mil = max_distance * to_mil;
            candidates.retain(|c| c.distance_mil <= max_mil);
            sort_by_distance(&mut candidates);
        }
        SearchMode::Direction => {
            let sector = params.direction.ok_or_else(|| {
                SpatialError::Validation("direction search requires direction".to_string())
            })?;
            let max_distance = params.max_distance.ok_or_else(|| {
                SpatialError::Validation("direction search requires max_distance".to_string())
            })?;
            let max_mil = max_distance * to_mil;
            candidates.retain(|c| sector.contains(c.angle) && c.distance_mil <= max_mil);
            sort_by_distance(&mut candidates);
        }
        SearchMode::Collision => {
            let min_distance = params.min_distance.ok_or_else(|| {
                SpatialError::Validation("collision search requires min_distance".to_string())
            })?;
            let min_mil = min_distance * to_mil;
            candidates.retain(|c| c.distance_mil < min_mil);
            for c in &candidates {
                warnings.push(AnalysisWarning {
                    kind: WarningKind::Spacing,
                    severity: Severity::Warning,
                    message: format!(
                        "{} is only {:.2}mm from {}, below the minimum spacing of {}{}",
                        c.record.designator,
                        c.distance_mil * MIL_TO_MM,
                        reference.designator,
                        min_distance,
                        params.unit.as_str()
                    ),
                });
            }
            sort_by_distance(&mut candidates);
        }
    }

    // Secondary sort. The knn pre-sort above is a truncation step; the
    // requested key decides the final order.
    match params.sort_by {
        SortKey::Distance => sort_by_distance(&mut candidates),
        SortKey::Angle => candidates.sort_by(|a, b| a.angle.total_cmp(&b.angle)),
        SortKey::Designator => {
            candidates.sort_by(|a, b| a.record.designator.cmp(&b.record.designator));
        }
    }

    // Overlap annotation: reference box once, candidate boxes fanned out
    let mut reference_box: Option<BoundingBox> = None;
    if params.use_bounding_box_overlap {
        match candidate_box(board, &reference.designator, params.bounding_box_kind) {
            Ok(b) => reference_box = Some(b),
            Err(message) => {
                eprintln!(
                    "[Proximity] reference bounding box unavailable, skipping overlap checks: {}",
                    message
                );
                warnings.push(AnalysisWarning {
                    kind: WarningKind::BoundingBox,
                    severity: Severity::Warning,
                    message: format!(
                        "reference bounding box unavailable for {}: {}",
                        reference.designator, message
                    ),
                });
            }
        }
    }

    let candidate_boxes: Vec<std::result::Result<BoundingBox, String>> =
        if reference_box.is_some() {
            candidates
                .par_iter()
                .map(|c| candidate_box(board, &c.record.designator, params.bounding_box_kind))
                .collect()
        } else {
            Vec::new()
        };

    let mut nearby_components = Vec::with_capacity(candidates.len());
    for (index, c) in candidates.iter().enumerate() {
        let (overlapping, bounding_box) = match (&reference_box, candidate_boxes.get(index)) {
            (Some(ref_box), Some(Ok(cand_box))) => (ref_box.overlaps(cand_box), Some(*cand_box)),
            (Some(_), Some(Err(message))) => {
                eprintln!(
                    "[Proximity] bounding box unavailable for {}: {}",
                    c.record.designator, message
                );
                warnings.push(AnalysisWarning {
                    kind: WarningKind::BoundingBox,
                    severity: Severity::Warning,
                    message: format!(
                        "bounding box unavailable for {}: {}",
                        c.record.designator, message
                    ),
                });
                (false, None)
            }
            _ => (false, None),
        };

        nearby_components.push(NearbyComponent {
            designator: c.record.designator.clone(),
            position: Point::new(c.record.x, c.record.y),
            layer: c.record.layer,
            rotation: c.record.rotation,
            distance: DistanceTriple::from_mil(c.distance_mil),
            angle: c.angle,
            direction: c.direction,
            detailed_direction: c.detailed_direction,
            overlapping,
            bounding_box,
        });
    }

    let density = match (params.search_mode, params.max_distance) {
        (SearchMode::Radius, Some(max_distance)) => {
            let radius_mil = max_distance * to_mil;
            Some(nearby_components.len() as f64 / (PI * radius_mil * radius_mil))
        }
        _ => None,
    };

    let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;
    eprintln!(
        "[Proximity] {} candidates searched, {} kept in {:.2}ms",
        searched,
        nearby_components.len(),
        execution_time_ms
    );

    Ok(NearbySearchResult {
        reference: ReferenceSummary::from_record(&reference),
        statistics: SearchStatistics {
            total_found: nearby_components.len(),
            searched,
            execution_time_ms,
            density,
        },
        nearby_components,
        bounding_box_kind: params.bounding_box_kind,
        warnings,
    })
}
