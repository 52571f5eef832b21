//! Design-rule collision checking between component footprints
//!
//! One reference component is compared against a capped candidate pool for
//! spacing and/or overlap violations. Candidate bounding boxes are computed
//! once, concurrently, into a per-call cache; distances are edge gaps
//! between footprint boxes, falling back to center distance (with a
//! warning) when a box is unavailable. A bad candidate never aborts the
//! batch.

use std::collections::HashSet;
use std::time::Instant;

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::board::BoardAccessor;
use crate::error::{Result, SpatialError};
use crate::geometry::{cardinal_direction, normalize_angle, BoundingBox, Point};

use super::footprint::{calculate_component_bounding_box, DEFAULT_SAFETY_MARGIN_MIL};
use super::types::{
    AnalysisWarning, BoundingBoxParams, BoxKind, CollisionCheckParams, CollisionCheckResult,
    CollisionReference, CollisionStatistics, CollisionViolation, DistanceTriple, OverlapViolation,
    Severity, SpacingViolation, ViolationKind, WarningKind,
};

/// Default candidate pool cap
pub const DEFAULT_MAX_RESULTS: usize = 100;

fn footprint_box(
    board: &dyn BoardAccessor,
    designator: &str,
    margin: f64,
    kind: BoxKind,
) -> Option<BoundingBox> {
    let params = BoundingBoxParams {
        designator: designator.to_string(),
        safety_margin: Some(margin),
    };
    match calculate_component_bounding_box(board, &params) {
        Ok(result) => Some(*result.select(kind)),
        Err(err) => {
            eprintln!("[Collision] bounding box failed for {}: {}", designator, err);
            None
        }
    }
}

/// Check one reference component against the board for spacing/overlap
/// violations.
///
/// Fails with `Validation` when a spacing mode is requested without
/// `min_spacing`, and `NotFound` for an unresolvable reference.
pub fn check_component_collision(
    board: &dyn BoardAccessor,
    params: &CollisionCheckParams,
) -> Result<CollisionCheckResult> {
    let start = Instant::now();

    let min_spacing = match (params.check_mode.includes_spacing(), params.min_spacing) {
        (true, None) => {
            return Err(SpatialError::Validation(
                "spacing check mode requires min_spacing".to_string(),
            ));
        }
        (_, spacing) => spacing,
    };

    let reference = board
        .component_by_designator(&params.reference_designator)?
        .ok_or_else(|| SpatialError::NotFound {
            designator: params.reference_designator.clone(),
        })?;

    // The actual box carries the standard margin; the raw box none
    let margin = match params.bounding_box_kind {
        BoxKind::Actual => DEFAULT_SAFETY_MARGIN_MIL,
        BoxKind::Raw => 0.0,
    };

    let mut warnings: Vec<AnalysisWarning> = Vec::new();
    let reference_box = footprint_box(board, &reference.designator, margin, params.bounding_box_kind);
    if reference_box.is_none() {
        warnings.push(AnalysisWarning {
            kind: WarningKind::BoundingBox,
            severity: Severity::Warning,
            message: format!(
                "reference bounding box unavailable for {}; distances degrade to center-to-center",
                reference.designator
            ),
        });
    }

    let excluded: HashSet<&str> = params
        .exclude_designators
        .iter()
        .map(String::as_str)
        .collect();
    let mut candidates = board.components(params.layer)?;
    candidates.retain(|c| {
        c.designator != params.reference_designator && !excluded.contains(c.designator.as_str())
    });

    // Cap the pool before checking: this bounds the work, so candidates
    // beyond the cap are not inspected at all on dense boards.
    let max_results = params.max_results.unwrap_or(DEFAULT_MAX_RESULTS);
    candidates.truncate(max_results);

    eprintln!(
        "[Collision] {} vs {} candidates, mode {:?}",
        reference.designator,
        candidates.len(),
        params.check_mode
    );

    // Pre-compute every candidate's box once; spacing and overlap share it
    let box_cache: IndexMap<String, Option<BoundingBox>> = candidates
        .par_iter()
        .map(|c| {
            (
                c.designator.clone(),
                footprint_box(board, &c.designator, margin, params.bounding_box_kind),
            )
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect();

    let unit = params.unit;
    let to_mil = unit.to_mil_factor();
    let from_mil = unit.from_mil_factor();

    let mut violations: Vec<CollisionViolation> = Vec::new();
    let mut spacing_violation_count = 0usize;
    let mut overlap_violation_count = 0usize;

    for candidate in &candidates {
        let dx = candidate.x - reference.x;
        let dy = candidate.y - reference.y;
        let angle = normalize_angle(dy.atan2(dx).to_degrees());
        let direction = cardinal_direction(angle);

        let candidate_box = box_cache.get(&candidate.designator).copied().flatten();

        let distance_mil = match (&reference_box, &candidate_box) {
            (Some(ref_box), Some(cand_box)) => ref_box.edge_gap(cand_box),
            _ => {
                warnings.push(AnalysisWarning {
                    kind: WarningKind::BoundingBox,
                    severity: Severity::Warning,
                    message: format!(
                        "bounding box unavailable for {}; using center distance",
                        candidate.designator
                    ),
                });
                (dx * dx + dy * dy).sqrt()
            }
        };

        let mut spacing: Option<SpacingViolation> = None;
        if let (true, Some(required)) = (params.check_mode.includes_spacing(), min_spacing) {
            let required_mil = required * to_mil;
            if distance_mil < required_mil {
                spacing = Some(SpacingViolation {
                    actual: distance_mil * from_mil,
                    required,
                    deficit: (required_mil - distance_mil) * from_mil,
                    unit,
                });
                spacing_violation_count += 1;
            }
        }

        let mut overlap: Option<OverlapViolation> = None;
        if params.check_mode.includes_overlap() {
            if let (Some(ref_box), Some(cand_box)) = (&reference_box, &candidate_box) {
                if ref_box.overlaps(cand_box) {
                    let area = ref_box.overlap_area(cand_box);
                    overlap = Some(OverlapViolation {
                        area,
                        bounding_box: *cand_box,
                    });
                    overlap_violation_count += 1;
                    warnings.push(AnalysisWarning {
                        kind: WarningKind::Overlap,
                        severity: Severity::Error,
                        message: format!(
                            "{} and {} bounding boxes overlap (area: {:.0} sq mil)",
                            candidate.designator, reference.designator, area
                        ),
                    });
                }
            }
        }

        let violation_kind = match (&spacing, &overlap) {
            (Some(_), Some(_)) => Some(ViolationKind::Both),
            (Some(_), None) => Some(ViolationKind::Spacing),
            (None, Some(_)) => Some(ViolationKind::Overlap),
            (None, None) => None,
        };

        if let Some(kind) = violation_kind {
            if let Some(s) = &spacing {
                warnings.push(AnalysisWarning {
                    kind: WarningKind::Spacing,
                    severity: Severity::Warning,
                    message: format!(
                        "{} is only {:.2}{} from {}, below the minimum spacing of {}{}",
                        candidate.designator,
                        s.actual,
                        s.unit.as_str(),
                        reference.designator,
                        s.required,
                        s.unit.as_str()
                    ),
                });
            }

            violations.push(CollisionViolation {
                designator: candidate.designator.clone(),
                position: Point::new(candidate.x, candidate.y),
                layer: candidate.layer,
                violation_kind: kind,
                spacing,
                overlap,
                distance: DistanceTriple::from_mil(distance_mil),
                angle,
                direction,
            });
        }
    }

    let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;
    eprintln!(
        "[Collision] {} violations found in {:.2}ms",
        violations.len(),
        execution_time_ms
    );

    Ok(CollisionCheckResult {
        reference: CollisionReference {
            designator: reference.designator.clone(),
            position: Point::new(reference.x, reference.y),
            layer: reference.layer,
            bounding_box: reference_box,
            bounding_box_kind: params.bounding_box_kind,
        },
        statistics: CollisionStatistics {
            total_checked: candidates.len(),
            violations_found: violations.len(),
            spacing_violations: spacing_violation_count,
            overlap_violations: overlap_violation_count,
            execution_time_ms,
        },
        violations,
        warnings,
    })
}
