//! Vcolor Mesh Crate
//!
//! In-memory editable mesh representation for vertex color editing.
//! A mesh holds vertices (with selection flags), faces as ordered lists of
//! corners, and named per-corner RGBA color layers. Editing logic lives in
//! vcolor-edit; this crate is the data model it operates on.

pub mod color;
pub mod layer;
pub mod mesh;

pub use color::Rgba;
pub use layer::{CornerColorLayer, DEFAULT_COLOR_LAYER};
pub use mesh::{CornerId, EditMesh, FaceId, MeshError, VertexId};
