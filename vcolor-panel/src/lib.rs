//! Vcolor Panel Crate
//!
//! The egui-facing surface of the vertex color editor: the side panel, the
//! context-menu contribution, and the action dispatcher that turns editing
//! results into user-visible status messages.

pub mod actions;
pub mod panel;
pub mod status;

pub use actions::{PanelAction, run_action};
pub use panel::VertexColorPanel;
pub use status::{Severity, StatusMessage};
