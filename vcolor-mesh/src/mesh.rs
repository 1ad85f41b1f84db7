//! Editable mesh with faces, corners, selection flags, and color layers.

use crate::color::Rgba;
use crate::layer::{CornerColorLayer, DEFAULT_COLOR_LAYER};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Index of a vertex in a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u32);

/// Index of a face in a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceId(pub u32);

/// Index of a face corner in a mesh's flat corner list.
///
/// A corner is one face's reference to one of its vertices. Corner indices
/// run in native enumeration order: faces in insertion order, then each
/// face's corners in the order they were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CornerId(pub u32);

impl VertexId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl CornerId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Errors from mesh construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("vertex index {0} out of range")]
    VertexOutOfRange(u32),

    #[error("face needs at least 3 corners, got {0}")]
    FaceTooSmall(usize),
}

#[derive(Debug, Clone)]
struct Vertex {
    position: Vec3,
    selected: bool,
}

#[derive(Debug, Clone)]
struct Face {
    corner_start: u32,
    corner_count: u32,
}

/// An editable mesh: vertices, faces, per-face corners, and color layers.
///
/// This is the stand-in for the host document's mesh. The editing operations
/// in vcolor-edit never create or destroy a mesh, only mutate attribute data
/// on one.
#[derive(Debug, Clone, Default)]
pub struct EditMesh {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    corners: Vec<VertexId>,
    layers: Vec<CornerColorLayer>,
    active_layer: Option<usize>,
    changed: bool,
}

impl EditMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex at the given position, initially unselected.
    pub fn add_vertex(&mut self, position: Vec3) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex {
            position,
            selected: false,
        });
        id
    }

    /// Add a face from an ordered list of vertices.
    ///
    /// One corner is created per vertex, in the given order. Existing color
    /// layers grow to cover the new corners, filled with white.
    pub fn add_face(&mut self, vertices: &[VertexId]) -> Result<FaceId, MeshError> {
        if vertices.len() < 3 {
            return Err(MeshError::FaceTooSmall(vertices.len()));
        }
        for &v in vertices {
            if v.index() >= self.vertices.len() {
                return Err(MeshError::VertexOutOfRange(v.0));
            }
        }

        let id = FaceId(self.faces.len() as u32);
        self.faces.push(Face {
            corner_start: self.corners.len() as u32,
            corner_count: vertices.len() as u32,
        });
        self.corners.extend_from_slice(vertices);

        let corner_count = self.corners.len();
        for layer in &mut self.layers {
            layer.grow_to(corner_count);
        }
        Ok(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    /// All corner ids in native enumeration order.
    pub fn corner_ids(&self) -> impl Iterator<Item = CornerId> + '_ {
        (0..self.corners.len() as u32).map(CornerId)
    }

    /// Corner ids belonging to one face, in face order.
    pub fn face_corner_ids(&self, face: FaceId) -> impl Iterator<Item = CornerId> + '_ {
        let (start, count) = self
            .faces
            .get(face.0 as usize)
            .map(|f| (f.corner_start, f.corner_count))
            .unwrap_or((0, 0));
        (start..start + count).map(CornerId)
    }

    /// The vertex a corner refers to.
    pub fn corner_vertex(&self, corner: CornerId) -> VertexId {
        self.corners[corner.index()]
    }

    /// Position of a vertex.
    pub fn position(&self, vertex: VertexId) -> Option<Vec3> {
        self.vertices.get(vertex.index()).map(|v| v.position)
    }

    /// Set a vertex's selection flag. Out-of-range ids are ignored.
    pub fn select(&mut self, vertex: VertexId, selected: bool) {
        if let Some(v) = self.vertices.get_mut(vertex.index()) {
            v.selected = selected;
        }
    }

    /// Whether a vertex is selected. Out-of-range ids read as unselected.
    pub fn is_selected(&self, vertex: VertexId) -> bool {
        self.vertices
            .get(vertex.index())
            .is_some_and(|v| v.selected)
    }

    /// Whether any vertex is selected.
    pub fn any_selected(&self) -> bool {
        self.vertices.iter().any(|v| v.selected)
    }

    /// Ids of all selected vertices.
    pub fn selected_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.selected)
            .map(|(i, _)| VertexId(i as u32))
    }

    /// Deselect every vertex.
    pub fn clear_selection(&mut self) {
        for v in &mut self.vertices {
            v.selected = false;
        }
    }

    /// Whether the mesh has an active color layer.
    pub fn has_color_layer(&self) -> bool {
        self.active_layer.is_some()
    }

    /// The active color layer, creating a default one if none exists.
    ///
    /// Idempotent: a second call returns the layer created by the first.
    pub fn color_layer_or_create(&mut self) -> &mut CornerColorLayer {
        if self.active_layer.is_none() {
            debug!(name = DEFAULT_COLOR_LAYER, "creating corner color layer");
            self.layers
                .push(CornerColorLayer::new(DEFAULT_COLOR_LAYER, self.corners.len()));
            self.active_layer = Some(self.layers.len() - 1);
        }
        let index = self.active_layer.unwrap_or(0);
        &mut self.layers[index]
    }

    /// The active color layer, if any.
    pub fn active_color_layer(&self) -> Option<&CornerColorLayer> {
        self.active_layer.map(|i| &self.layers[i])
    }

    /// Color stored for a corner in the active layer.
    pub fn corner_color(&self, corner: CornerId) -> Option<Rgba> {
        self.active_color_layer()?.get(corner.index())
    }

    /// Store a color for a corner in the active layer.
    ///
    /// Does nothing if no layer exists; callers that need the layer call
    /// [`EditMesh::color_layer_or_create`] first.
    pub fn set_corner_color(&mut self, corner: CornerId, color: Rgba) {
        if let Some(index) = self.active_layer {
            self.layers[index].set(corner.index(), color);
        }
    }

    /// Flag the mesh geometry as changed so the host re-displays it.
    pub fn mark_changed(&mut self) {
        self.changed = true;
    }

    /// Read and reset the changed flag.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> EditMesh {
        let mut mesh = EditMesh::new();
        let v0 = mesh.add_vertex(Vec3::ZERO);
        let v1 = mesh.add_vertex(Vec3::X);
        let v2 = mesh.add_vertex(Vec3::new(1.0, 1.0, 0.0));
        let v3 = mesh.add_vertex(Vec3::Y);
        mesh.add_face(&[v0, v1, v2, v3]).unwrap();
        mesh
    }

    #[test]
    fn test_corner_order_follows_face_order() {
        let mut mesh = EditMesh::new();
        let v0 = mesh.add_vertex(Vec3::ZERO);
        let v1 = mesh.add_vertex(Vec3::X);
        let v2 = mesh.add_vertex(Vec3::Y);
        let v3 = mesh.add_vertex(Vec3::Z);
        mesh.add_face(&[v0, v1, v2]).unwrap();
        mesh.add_face(&[v2, v1, v3]).unwrap();

        let order: Vec<VertexId> = mesh
            .corner_ids()
            .map(|c| mesh.corner_vertex(c))
            .collect();
        assert_eq!(order, vec![v0, v1, v2, v2, v1, v3]);
    }

    #[test]
    fn test_add_face_validation() {
        let mut mesh = EditMesh::new();
        let v0 = mesh.add_vertex(Vec3::ZERO);
        let v1 = mesh.add_vertex(Vec3::X);
        assert_eq!(mesh.add_face(&[v0, v1]), Err(MeshError::FaceTooSmall(2)));
        assert_eq!(
            mesh.add_face(&[v0, v1, VertexId(9)]),
            Err(MeshError::VertexOutOfRange(9))
        );
        assert_eq!(mesh.corner_count(), 0);
    }

    #[test]
    fn test_color_layer_or_create_is_idempotent() {
        let mut mesh = quad();
        assert!(!mesh.has_color_layer());
        mesh.color_layer_or_create();
        assert!(mesh.has_color_layer());
        assert_eq!(mesh.active_color_layer().unwrap().len(), 4);

        mesh.color_layer_or_create();
        assert_eq!(mesh.layers.len(), 1);
        assert_eq!(
            mesh.active_color_layer().unwrap().name(),
            DEFAULT_COLOR_LAYER
        );
    }

    #[test]
    fn test_layer_grows_with_new_faces() {
        let mut mesh = quad();
        mesh.color_layer_or_create();
        let v4 = mesh.add_vertex(Vec3::Z);
        let v0 = VertexId(0);
        let v1 = VertexId(1);
        mesh.add_face(&[v0, v1, v4]).unwrap();
        assert_eq!(mesh.active_color_layer().unwrap().len(), 7);
        assert_eq!(mesh.corner_color(CornerId(6)), Some(Rgba::WHITE));
    }

    #[test]
    fn test_selection_flags() {
        let mut mesh = quad();
        assert!(!mesh.any_selected());
        mesh.select(VertexId(2), true);
        assert!(mesh.is_selected(VertexId(2)));
        assert!(mesh.any_selected());
        assert_eq!(mesh.selected_vertices().collect::<Vec<_>>(), vec![VertexId(2)]);
        mesh.clear_selection();
        assert!(!mesh.any_selected());
        // Out-of-range ids are ignored
        mesh.select(VertexId(99), true);
        assert!(!mesh.is_selected(VertexId(99)));
    }

    #[test]
    fn test_corner_color_without_layer() {
        let mut mesh = quad();
        assert_eq!(mesh.corner_color(CornerId(0)), None);
        mesh.set_corner_color(CornerId(0), Rgba::new(0.0, 0.0, 0.0, 1.0));
        assert!(!mesh.has_color_layer());
    }

    #[test]
    fn test_take_changed_resets() {
        let mut mesh = quad();
        assert!(!mesh.take_changed());
        mesh.mark_changed();
        assert!(mesh.take_changed());
        assert!(!mesh.take_changed());
    }
}
