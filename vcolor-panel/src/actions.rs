//! The two invocable actions and their status reporting.

use crate::status::StatusMessage;
use tracing::info;
use vcolor_edit::{ColorSession, CornerMesh, EditError};

/// Actions the panel and context menu can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// Read the color of the first selected corner into the session.
    Pick,
    /// Write the session color to every selected vertex's corners.
    Apply,
}

/// Run an action against the session and mesh, producing a status message.
///
/// Failures are reported as warnings local to the action; nothing
/// propagates.
pub fn run_action<M: CornerMesh>(
    action: PanelAction,
    session: &mut ColorSession,
    mesh: &mut M,
) -> StatusMessage {
    match action {
        PanelAction::Pick => match session.pick_from(mesh) {
            Ok(color) => {
                let text = format!(
                    "Picked color RGBA({:.3}, {:.3}, {:.3}, {:.3})",
                    color.r, color.g, color.b, color.a
                );
                info!("{text}");
                StatusMessage::info(text)
            }
            Err(err) => StatusMessage::warning(describe_error(err)),
        },
        PanelAction::Apply => match session.apply_to(mesh) {
            Ok(count) => {
                let noun = if count == 1 { "vertex" } else { "vertices" };
                let text = format!("Applied color to {count} {noun}");
                info!("{text}");
                StatusMessage::info(text)
            }
            Err(err) => StatusMessage::warning(describe_error(err)),
        },
    }
}

fn describe_error(err: EditError) -> &'static str {
    match err {
        EditError::NoColorData => "Mesh has no color layer",
        EditError::NoSelection => "No vertices selected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Severity;
    use glam::Vec3;
    use vcolor_mesh::{EditMesh, Rgba};

    fn triangle() -> EditMesh {
        let mut mesh = EditMesh::new();
        let v0 = mesh.add_vertex(Vec3::ZERO);
        let v1 = mesh.add_vertex(Vec3::X);
        let v2 = mesh.add_vertex(Vec3::Y);
        mesh.add_face(&[v0, v1, v2]).unwrap();
        mesh
    }

    #[test]
    fn test_apply_reports_vertex_count() {
        let mut mesh = triangle();
        mesh.select(vcolor_mesh::VertexId(0), true);
        let mut session = ColorSession::default();
        session.set_color(Rgba::new(0.2, 0.4, 0.6, 1.0));

        let msg = run_action(PanelAction::Apply, &mut session, &mut mesh);
        assert_eq!(msg.severity, Severity::Info);
        assert_eq!(msg.text, "Applied color to 1 vertex");
    }

    #[test]
    fn test_pick_reports_three_decimal_channels() {
        let mut mesh = triangle();
        mesh.select(vcolor_mesh::VertexId(0), true);
        let mut session = ColorSession::default();
        session.set_color(Rgba::new(0.2, 0.4, 0.6, 1.0));
        run_action(PanelAction::Apply, &mut session, &mut mesh);

        let msg = run_action(PanelAction::Pick, &mut session, &mut mesh);
        assert_eq!(msg.severity, Severity::Info);
        assert_eq!(msg.text, "Picked color RGBA(0.200, 0.400, 0.600, 1.000)");
    }

    #[test]
    fn test_warnings_on_failures() {
        let mut mesh = triangle();
        let mut session = ColorSession::default();

        let msg = run_action(PanelAction::Apply, &mut session, &mut mesh);
        assert_eq!(msg.severity, Severity::Warning);
        assert_eq!(msg.text, "No vertices selected");

        mesh.select(vcolor_mesh::VertexId(1), true);
        mesh.clear_selection();
        let msg = run_action(PanelAction::Pick, &mut session, &mut mesh);
        assert_eq!(msg.severity, Severity::Warning);
        assert_eq!(msg.text, "Mesh has no color layer");
    }
}
