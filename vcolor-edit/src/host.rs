//! Trait boundary to the host's mesh storage.
//!
//! The editing operations never own mesh data. They see exactly what they
//! need through [`CornerMesh`]: corner iteration in native order, the
//! selected-vertex predicate, color-layer access with get-or-create, and a
//! change notification. The actual storage is injected by the host.

use vcolor_mesh::{CornerId, EditMesh, Rgba, VertexId};

/// Mesh access surface required by the editing operations.
///
/// Corner enumeration order must be stable for a given mesh (faces in their
/// native order, then each face's corners in face order); the Get operation
/// depends on it.
pub trait CornerMesh {
    /// All corner ids in native enumeration order.
    fn corners(&self) -> impl Iterator<Item = CornerId> + '_;

    /// The vertex a corner refers to.
    fn corner_vertex(&self, corner: CornerId) -> VertexId;

    /// Whether a vertex is selected.
    fn vertex_selected(&self, vertex: VertexId) -> bool;

    /// Whether any vertex is selected.
    fn any_selected(&self) -> bool;

    /// Whether an active corner color layer exists.
    fn has_color_layer(&self) -> bool;

    /// Create the active color layer if it does not exist. Idempotent.
    fn ensure_color_layer(&mut self);

    /// Color stored for a corner, or `None` if no layer exists.
    fn corner_color(&self, corner: CornerId) -> Option<Rgba>;

    /// Store a color for a corner in the active layer.
    fn set_corner_color(&mut self, corner: CornerId, color: Rgba);

    /// Flag the geometry as changed so the host re-displays it.
    fn mark_changed(&mut self);
}

impl CornerMesh for EditMesh {
    fn corners(&self) -> impl Iterator<Item = CornerId> + '_ {
        self.corner_ids()
    }

    fn corner_vertex(&self, corner: CornerId) -> VertexId {
        EditMesh::corner_vertex(self, corner)
    }

    fn vertex_selected(&self, vertex: VertexId) -> bool {
        self.is_selected(vertex)
    }

    fn any_selected(&self) -> bool {
        EditMesh::any_selected(self)
    }

    fn has_color_layer(&self) -> bool {
        EditMesh::has_color_layer(self)
    }

    fn ensure_color_layer(&mut self) {
        self.color_layer_or_create();
    }

    fn corner_color(&self, corner: CornerId) -> Option<Rgba> {
        EditMesh::corner_color(self, corner)
    }

    fn set_corner_color(&mut self, corner: CornerId, color: Rgba) {
        EditMesh::set_corner_color(self, corner, color);
    }

    fn mark_changed(&mut self) {
        EditMesh::mark_changed(self);
    }
}
