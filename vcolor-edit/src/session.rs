//! Per-document editing session state.

use crate::error::EditError;
use crate::host::CornerMesh;
use crate::ops;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use vcolor_mesh::Rgba;

/// Editing mode of the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorMode {
    /// Object-level mode; vertex color actions are unavailable.
    Object,
    /// Mesh edit mode with per-vertex selection.
    EditMesh,
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Object => write!(f, "Object"),
            EditorMode::EditMesh => write!(f, "Edit Mesh"),
        }
    }
}

/// The UI-held color state for one document.
///
/// This is the only session state kept outside the mesh: the current RGBA
/// value and the auto-pick flag. It lives with the document's scene state
/// and is never persisted independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSession {
    /// Current color value, each channel in the 0-1 range.
    pub color: Rgba,
    /// Whether selection changes trigger an automatic pick.
    pub auto_pick: bool,
}

impl Default for ColorSession {
    fn default() -> Self {
        Self {
            color: Rgba::WHITE,
            auto_pick: false,
        }
    }
}

impl ColorSession {
    /// Pick the color of the first selected corner and store it as the
    /// current color. On failure the current color is left untouched.
    pub fn pick_from<M: CornerMesh>(&mut self, mesh: &M) -> Result<Rgba, EditError> {
        let color = ops::pick_color(mesh)?;
        self.color = color;
        debug!(?color, "session color picked from mesh");
        Ok(color)
    }

    /// Apply the current color to every selected vertex's corners.
    /// Returns the number of vertices touched.
    pub fn apply_to<M: CornerMesh>(&self, mesh: &mut M) -> Result<usize, EditError> {
        ops::apply_color(mesh, self.color)
    }

    /// Set the current color, clamping channels to the 0-1 range.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color.clamped();
    }
}

/// Everything the editing actions see of the host: the mode, the active
/// mesh (if any), and the session state.
#[derive(Debug)]
pub struct EditorContext<M> {
    pub mode: EditorMode,
    pub active: Option<M>,
    pub session: ColorSession,
}

impl<M> EditorContext<M> {
    /// Context in edit-mesh mode with an active mesh and default session.
    pub fn edit(mesh: M) -> Self {
        Self {
            mode: EditorMode::EditMesh,
            active: Some(mesh),
            session: ColorSession::default(),
        }
    }

    /// Whether vertex color actions are available: edit-mesh mode with an
    /// active mesh.
    pub fn actions_available(&self) -> bool {
        self.mode == EditorMode::EditMesh && self.active.is_some()
    }
}
