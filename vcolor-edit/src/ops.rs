//! The Get and Apply operations.

use crate::error::EditError;
use crate::host::CornerMesh;
use std::collections::HashSet;
use tracing::debug;
use vcolor_mesh::{CornerId, Rgba};

/// Read the color of the first corner belonging to a selected vertex.
///
/// Corners are scanned in the mesh's native enumeration order and the scan
/// short-circuits on the first match. If selected vertices carry divergent
/// corner colors, only the first-encountered one is returned; the result is
/// order-dependent on the mesh's internal face/corner ordering. Accepted
/// limitation, kept from the original behavior.
pub fn pick_color<M: CornerMesh>(mesh: &M) -> Result<Rgba, EditError> {
    if !mesh.has_color_layer() {
        return Err(EditError::NoColorData);
    }
    for corner in mesh.corners() {
        if mesh.vertex_selected(mesh.corner_vertex(corner)) {
            let color = mesh.corner_color(corner).ok_or(EditError::NoColorData)?;
            debug!(?corner, ?color, "picked corner color");
            return Ok(color);
        }
    }
    Err(EditError::NoSelection)
}

/// Write `color` to every corner of every selected vertex.
///
/// All corners of a selected vertex receive the same value, across all
/// faces. The color layer is created on demand, but only after the
/// selection check: with nothing selected the mesh is left untouched.
/// Returns the number of distinct vertices touched (not corners).
pub fn apply_color<M: CornerMesh>(mesh: &mut M, color: Rgba) -> Result<usize, EditError> {
    if !mesh.any_selected() {
        return Err(EditError::NoSelection);
    }
    mesh.ensure_color_layer();

    let corners: Vec<CornerId> = mesh.corners().collect();
    let mut touched = HashSet::new();
    for corner in corners {
        let vertex = mesh.corner_vertex(corner);
        if mesh.vertex_selected(vertex) {
            mesh.set_corner_color(corner, color);
            touched.insert(vertex);
        }
    }
    mesh.mark_changed();
    debug!(vertices = touched.len(), ?color, "applied corner color");
    Ok(touched.len())
}
