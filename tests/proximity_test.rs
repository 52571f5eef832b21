// Proximity search over snapshot fixtures
use pcb_spatial::analysis::{find_nearby_components, NearbySearchParams, SearchMode, SortKey};
use pcb_spatial::board::{BoardSnapshot, ComponentRecord, LayerFilter, PadRecord, PadShapeDescriptor};
use pcb_spatial::error::SpatialError;
use pcb_spatial::geometry::{CardinalDirection, Unit};

fn component(designator: &str, x: f64, y: f64, layer: u8) -> ComponentRecord {
    ComponentRecord {
        designator: designator.to_string(),
        primitive_id: format!("id-{}", designator),
        layer,
        x,
        y,
        rotation: 0.0,
    }
}

fn square_pad(number: &str, x: f64, y: f64, size: f64) -> PadRecord {
    PadRecord {
        pad_number: number.to_string(),
        primitive_id: format!("pad-{}", number),
        x,
        y,
        rotation: 0.0,
        shape: PadShapeDescriptor::Rect {
            width: size,
            height: size,
        },
    }
}

/// Add a component with one square pad at its center so its footprint box
/// is computable.
fn add_padded(snapshot: &mut BoardSnapshot, designator: &str, x: f64, y: f64, layer: u8, size: f64) {
    snapshot.add_component(component(designator, x, y, layer));
    snapshot.add_pads(
        &format!("id-{}", designator),
        vec![square_pad(&format!("{}-1", designator), x, y, size)],
    );
}

/// Reference R1 at the origin with neighbors at known bearings
fn ring_board() -> BoardSnapshot {
    let mut snapshot = BoardSnapshot::new();
    add_padded(&mut snapshot, "R1", 0.0, 0.0, 1, 50.0);
    add_padded(&mut snapshot, "E1", 100.0, 0.0, 1, 50.0); // east, 100 mil
    add_padded(&mut snapshot, "N1", 0.0, 200.0, 1, 50.0); // north, 200 mil
    add_padded(&mut snapshot, "W1", -300.0, 0.0, 1, 50.0); // west, 300 mil
    add_padded(&mut snapshot, "S1", 0.0, -400.0, 2, 50.0); // south, bottom layer
    add_padded(&mut snapshot, "NE1", 400.0, 400.0, 1, 50.0); // north-east
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knn_returns_k_ascending() {
        let board = ring_board();
        let mut params = NearbySearchParams::new("R1", SearchMode::Knn);
        params.k = Some(3);
        let result = find_nearby_components(&board, &params).unwrap();

        assert_eq!(result.nearby_components.len(), 3);
        let distances: Vec<f64> = result
            .nearby_components
            .iter()
            .map(|c| c.distance.mil)
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(result.nearby_components[0].designator, "E1");
        assert_eq!(result.statistics.searched, 5);
        assert_eq!(result.statistics.total_found, 3);
    }

    #[test]
    fn test_knn_default_k_is_five() {
        let board = ring_board();
        let params = NearbySearchParams::new("R1", SearchMode::Knn);
        let result = find_nearby_components(&board, &params).unwrap();
        assert_eq!(result.nearby_components.len(), 5);
    }

    #[test]
    fn test_knn_with_designator_sort() {
        let board = ring_board();
        let mut params = NearbySearchParams::new("R1", SearchMode::Knn);
        params.k = Some(3);
        params.sort_by = SortKey::Designator;
        let result = find_nearby_components(&board, &params).unwrap();

        // Still the 3 nearest, but ordered lexically
        let designators: Vec<&str> = result
            .nearby_components
            .iter()
            .map(|c| c.designator.as_str())
            .collect();
        assert_eq!(designators, vec!["E1", "N1", "W1"]);
    }

    #[test]
    fn test_radius_mode_with_unit_conversion() {
        let board = ring_board();
        let mut params = NearbySearchParams::new("R1", SearchMode::Radius);
        // 250 mil expressed in mm
        params.max_distance = Some(250.0 * 0.0254);
        params.unit = Unit::Mm;
        let result = find_nearby_components(&board, &params).unwrap();

        let designators: Vec<&str> = result
            .nearby_components
            .iter()
            .map(|c| c.designator.as_str())
            .collect();
        assert_eq!(designators, vec!["E1", "N1"]);

        // density = count / (pi * r^2) in mil
        let expected = 2.0 / (std::f64::consts::PI * 250.0 * 250.0);
        let density = result.statistics.density.unwrap();
        assert!((density - expected).abs() < 1e-12);
    }

    #[test]
    fn test_direction_mode_sector_filter() {
        let board = ring_board();
        let mut params = NearbySearchParams::new("R1", SearchMode::Direction);
        params.direction = Some(CardinalDirection::E);
        params.max_distance = Some(1000.0);
        let result = find_nearby_components(&board, &params).unwrap();

        let designators: Vec<&str> = result
            .nearby_components
            .iter()
            .map(|c| c.designator.as_str())
            .collect();
        // NE1 is at 45 degrees, outside the eastern 45-degree sector
        assert_eq!(designators, vec!["E1"]);
        assert_eq!(result.nearby_components[0].direction, CardinalDirection::E);
    }

    #[test]
    fn test_legacy_collision_mode_emits_spacing_warnings() {
        let board = ring_board();
        let mut params = NearbySearchParams::new("R1", SearchMode::Collision);
        params.min_distance = Some(250.0);
        params.use_bounding_box_overlap = false;
        let result = find_nearby_components(&board, &params).unwrap();

        assert_eq!(result.nearby_components.len(), 2); // E1 and N1
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].message.contains("minimum spacing"));
    }

    #[test]
    fn test_layer_and_exclusion_filters() {
        let board = ring_board();
        let mut params = NearbySearchParams::new("R1", SearchMode::Knn);
        params.k = Some(10);
        params.layer = LayerFilter::Top;
        params.exclude_designators = vec!["W1".to_string()];
        let result = find_nearby_components(&board, &params).unwrap();

        let designators: Vec<&str> = result
            .nearby_components
            .iter()
            .map(|c| c.designator.as_str())
            .collect();
        assert!(!designators.contains(&"S1")); // bottom layer
        assert!(!designators.contains(&"W1")); // excluded
        assert!(!designators.contains(&"R1")); // reference removed
        assert_eq!(result.statistics.searched, 3);
    }

    #[test]
    fn test_include_reference() {
        let board = ring_board();
        let mut params = NearbySearchParams::new("R1", SearchMode::Knn);
        params.include_reference = true;
        params.k = Some(1);
        params.use_bounding_box_overlap = false;
        let result = find_nearby_components(&board, &params).unwrap();

        assert_eq!(result.nearby_components[0].designator, "R1");
        assert_eq!(result.nearby_components[0].distance.mil, 0.0);
    }

    #[test]
    fn test_overlap_annotation() {
        let mut board = BoardSnapshot::new();
        add_padded(&mut board, "U1", 0.0, 0.0, 1, 100.0);
        add_padded(&mut board, "U2", 60.0, 0.0, 1, 100.0); // boxes overlap
        add_padded(&mut board, "U3", 500.0, 0.0, 1, 100.0); // clear

        let mut params = NearbySearchParams::new("U1", SearchMode::Knn);
        params.k = Some(10);
        let result = find_nearby_components(&board, &params).unwrap();

        let u2 = result
            .nearby_components
            .iter()
            .find(|c| c.designator == "U2")
            .unwrap();
        let u3 = result
            .nearby_components
            .iter()
            .find(|c| c.designator == "U3")
            .unwrap();
        assert!(u2.overlapping);
        assert!(!u3.overlapping);
        assert!(u2.bounding_box.is_some());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_candidate_without_pads_is_kept_with_warning() {
        let mut board = BoardSnapshot::new();
        add_padded(&mut board, "U1", 0.0, 0.0, 1, 100.0);
        // No pads: bounding box computation fails for this candidate
        board.add_component(component("X1", 150.0, 0.0, 1));

        let params = NearbySearchParams::new("U1", SearchMode::Knn);
        let result = find_nearby_components(&board, &params).unwrap();

        let x1 = result
            .nearby_components
            .iter()
            .find(|c| c.designator == "X1")
            .unwrap();
        assert!(!x1.overlapping);
        assert!(x1.bounding_box.is_none());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("X1"));
    }

    #[test]
    fn test_angles_and_directions() {
        let board = ring_board();
        let mut params = NearbySearchParams::new("R1", SearchMode::Knn);
        params.k = Some(10);
        params.use_bounding_box_overlap = false;
        let result = find_nearby_components(&board, &params).unwrap();

        let by_name = |name: &str| {
            result
                .nearby_components
                .iter()
                .find(|c| c.designator == name)
                .unwrap()
        };
        assert!((by_name("E1").angle - 0.0).abs() < 1e-9);
        assert!((by_name("N1").angle - 90.0).abs() < 1e-9);
        assert!((by_name("W1").angle - 180.0).abs() < 1e-9);
        assert_eq!(by_name("NE1").direction, CardinalDirection::NE);
        assert!((by_name("N1").distance.mm - 200.0 * 0.0254).abs() < 1e-9);
    }

    #[test]
    fn test_validation_and_not_found() {
        let board = ring_board();

        let err =
            find_nearby_components(&board, &NearbySearchParams::new("ZZ9", SearchMode::Knn))
                .unwrap_err();
        assert!(matches!(err, SpatialError::NotFound { .. }));

        let params = NearbySearchParams::new("R1", SearchMode::Radius);
        let err = find_nearby_components(&board, &params).unwrap_err();
        assert!(matches!(err, SpatialError::Validation(_)));

        let params = NearbySearchParams::new("R1", SearchMode::Collision);
        let err = find_nearby_components(&board, &params).unwrap_err();
        assert!(matches!(err, SpatialError::Validation(_)));
    }

    #[test]
    fn test_params_deserialization_defaults() {
        let params: NearbySearchParams = serde_json::from_str(
            r#"{"reference_designator": "R1", "search_mode": "knn"}"#,
        )
        .unwrap();
        assert!(params.use_bounding_box_overlap);
        assert!(params.k.is_none());
        assert_eq!(params.sort_by, SortKey::Distance);
        assert_eq!(params.unit, Unit::Mil);
    }

    #[test]
    fn test_result_serialization() {
        let board = ring_board();
        let mut params = NearbySearchParams::new("R1", SearchMode::Knn);
        params.k = Some(2);
        let result = find_nearby_components(&board, &params).unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["reference"]["designator"], "R1");
        assert_eq!(json["bounding_box_kind"], "raw");
        assert_eq!(json["nearby_components"][0]["direction"], "E");
        assert!(json["nearby_components"][0]["distance"]["mm"].is_number());
        // No warnings: the list is omitted
        assert!(json.get("warnings").is_none());
    }
}
