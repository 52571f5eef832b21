//! Board accessor boundary
//!
//! The engine never talks to the board editor directly; it consumes a
//! `BoardAccessor` that enumerates components and pads. Entities are
//! query-scoped: the engine holds no board state between calls.
//!
//! # Submodules
//! - `types` - Component/pad records and the pad shape descriptor
//! - `snapshot` - In-memory accessor over an owned snapshot

mod snapshot;
mod types;

pub use snapshot::{BoardSnapshot, LayerCounts};
pub use types::{
    ComponentRecord, LayerFilter, PadRecord, PadShapeDescriptor, LAYER_BOTTOM, LAYER_TOP,
};

/// Read-only view of the host's board state.
///
/// `Sync` is a supertrait so batch bounding-box computation can fan out
/// across worker threads against a shared accessor reference.
pub trait BoardAccessor: Sync {
    /// Enumerate placed components, optionally filtered by layer
    fn components(&self, layer: LayerFilter) -> anyhow::Result<Vec<ComponentRecord>>;

    /// Resolve one component by designator; first match in enumeration order
    fn component_by_designator(&self, designator: &str) -> anyhow::Result<Option<ComponentRecord>>;

    /// Enumerate all pads of a component
    fn component_pads(&self, primitive_id: &str) -> anyhow::Result<Vec<PadRecord>>;
}
