//! In-memory board snapshot
//!
//! `BoardSnapshot` is the owned form of one query's view of the board:
//! hosts that deliver a snapshot per request build one of these, and every
//! test fixture is one. It implements `BoardAccessor` over plain vectors,
//! preserving the host's enumeration order.

use indexmap::IndexMap;
use serde::Serialize;

use super::{BoardAccessor, ComponentRecord, LayerFilter, PadRecord};
use super::types::{LAYER_BOTTOM, LAYER_TOP};

/// Component tallies per layer
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LayerCounts {
    pub total: usize,
    pub top: usize,
    pub bottom: usize,
}

/// An owned snapshot of components and pads for a single query
#[derive(Debug, Default)]
pub struct BoardSnapshot {
    components: Vec<ComponentRecord>,
    pads: IndexMap<String, Vec<PadRecord>>,
}

impl BoardSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_component(&mut self, component: ComponentRecord) {
        self.components.push(component);
    }

    /// Attach pads to the component with the given primitive id
    pub fn add_pads(&mut self, primitive_id: &str, pads: Vec<PadRecord>) {
        self.pads
            .entry(primitive_id.to_string())
            .or_default()
            .extend(pads);
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Per-layer component tallies for board summaries
    pub fn layer_counts(&self) -> LayerCounts {
        let top = self
            .components
            .iter()
            .filter(|c| c.layer == LAYER_TOP)
            .count();
        let bottom = self
            .components
            .iter()
            .filter(|c| c.layer == LAYER_BOTTOM)
            .count();
        LayerCounts {
            total: self.components.len(),
            top,
            bottom,
        }
    }
}

impl BoardAccessor for BoardSnapshot {
    fn components(&self, layer: LayerFilter) -> anyhow::Result<Vec<ComponentRecord>> {
        Ok(self
            .components
            .iter()
            .filter(|c| layer.matches(c.layer))
            .cloned()
            .collect())
    }

    fn component_by_designator(&self, designator: &str) -> anyhow::Result<Option<ComponentRecord>> {
        // First match in enumeration order; duplicate designators resolve
        // to the earliest record.
        Ok(self
            .components
            .iter()
            .find(|c| c.designator == designator)
            .cloned())
    }

    fn component_pads(&self, primitive_id: &str) -> anyhow::Result<Vec<PadRecord>> {
        Ok(self.pads.get(primitive_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(designator: &str, layer: u8) -> ComponentRecord {
        ComponentRecord {
            designator: designator.to_string(),
            primitive_id: format!("id-{}", designator),
            layer,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
        }
    }

    #[test]
    fn test_layer_filtering() {
        let mut snapshot = BoardSnapshot::new();
        snapshot.add_component(component("R1", LAYER_TOP));
        snapshot.add_component(component("R2", LAYER_BOTTOM));
        snapshot.add_component(component("R3", LAYER_TOP));

        assert_eq!(snapshot.components(LayerFilter::Top).unwrap().len(), 2);
        assert_eq!(snapshot.components(LayerFilter::Bottom).unwrap().len(), 1);
        assert_eq!(snapshot.components(LayerFilter::All).unwrap().len(), 3);

        let counts = snapshot.layer_counts();
        assert_eq!(counts.total, 3);
        assert_eq!(counts.top, 2);
        assert_eq!(counts.bottom, 1);
    }

    #[test]
    fn test_duplicate_designator_resolves_to_first() {
        let mut snapshot = BoardSnapshot::new();
        let mut first = component("R1", LAYER_TOP);
        first.x = 100.0;
        let mut second = component("R1", LAYER_TOP);
        second.primitive_id = "id-R1-dup".to_string();
        second.x = 999.0;
        snapshot.add_component(first);
        snapshot.add_component(second);

        let resolved = snapshot.component_by_designator("R1").unwrap().unwrap();
        assert_eq!(resolved.x, 100.0);
        assert_eq!(resolved.primitive_id, "id-R1");
    }

    #[test]
    fn test_missing_component_and_pads() {
        let snapshot = BoardSnapshot::new();
        assert!(snapshot.component_by_designator("U9").unwrap().is_none());
        assert!(snapshot.component_pads("nope").unwrap().is_empty());
    }
}
