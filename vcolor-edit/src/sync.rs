//! Live sync between selection changes and the session color.
//!
//! [`auto_pick`] runs on every geometry/selection change notification from
//! the host. It must never raise an error on that path: anything that goes
//! wrong is reported only as a [`SyncOutcome`] for logging and tests.

use crate::host::CornerMesh;
use crate::ops;
use crate::session::{EditorContext, EditorMode};
use tracing::trace;

/// Per-channel threshold below which a picked color counts as unchanged.
///
/// The guard only overwrites the session color when some channel differs by
/// more than this. Without the threshold, every write to the session color
/// re-triggers a change notification, which re-runs the guard, which writes
/// the color again, without end.
pub const COLOR_EPSILON: f32 = 0.001;

/// What the guard did on one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Auto-pick is turned off.
    Disabled,
    /// The document is not in edit-mesh mode.
    WrongMode,
    /// No mesh is active.
    NoMesh,
    /// Picking failed (no color layer or no selection); swallowed.
    Unavailable,
    /// The picked color matches the session color within the threshold.
    Unchanged,
    /// The session color was overwritten with the picked color.
    Updated,
}

/// Run the auto-pick guard against the current context.
///
/// No-op unless the auto-pick flag is set, the document is in edit-mesh
/// mode, and a mesh is active. Never returns an error.
pub fn auto_pick<M: CornerMesh>(ctx: &mut EditorContext<M>) -> SyncOutcome {
    if !ctx.session.auto_pick {
        return SyncOutcome::Disabled;
    }
    if ctx.mode != EditorMode::EditMesh {
        return SyncOutcome::WrongMode;
    }
    let Some(mesh) = ctx.active.as_ref() else {
        return SyncOutcome::NoMesh;
    };

    match ops::pick_color(mesh) {
        Ok(color) => {
            if color.max_channel_delta(ctx.session.color) > COLOR_EPSILON {
                ctx.session.color = color;
                trace!(?color, "auto-pick updated session color");
                SyncOutcome::Updated
            } else {
                SyncOutcome::Unchanged
            }
        }
        Err(err) => {
            trace!(%err, "auto-pick unavailable");
            SyncOutcome::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use vcolor_mesh::{EditMesh, Rgba};

    fn selected_triangle() -> EditMesh {
        let mut mesh = EditMesh::new();
        let v0 = mesh.add_vertex(Vec3::ZERO);
        let v1 = mesh.add_vertex(Vec3::X);
        let v2 = mesh.add_vertex(Vec3::Y);
        mesh.add_face(&[v0, v1, v2]).unwrap();
        mesh.select(v0, true);
        mesh
    }

    fn colored_context() -> EditorContext<EditMesh> {
        let mut mesh = selected_triangle();
        mesh.color_layer_or_create();
        mesh.set_corner_color(vcolor_mesh::CornerId(0), Rgba::new(0.2, 0.4, 0.6, 1.0));
        let mut ctx = EditorContext::edit(mesh);
        ctx.session.auto_pick = true;
        ctx
    }

    #[test]
    fn test_disabled_flag_skips() {
        let mut ctx = colored_context();
        ctx.session.auto_pick = false;
        let before = ctx.session.color;
        assert_eq!(auto_pick(&mut ctx), SyncOutcome::Disabled);
        assert_eq!(ctx.session.color, before);
    }

    #[test]
    fn test_updates_once_then_settles() {
        let mut ctx = colored_context();
        assert_eq!(auto_pick(&mut ctx), SyncOutcome::Updated);
        assert_eq!(ctx.session.color, Rgba::new(0.2, 0.4, 0.6, 1.0));

        // Re-running with unchanged selection and colors must not mutate
        // again; this is what breaks the notification feedback loop.
        for _ in 0..5 {
            assert_eq!(auto_pick(&mut ctx), SyncOutcome::Unchanged);
            assert_eq!(ctx.session.color, Rgba::new(0.2, 0.4, 0.6, 1.0));
        }
    }

    #[test]
    fn test_sub_threshold_difference_is_unchanged() {
        let mut ctx = colored_context();
        ctx.session.color = Rgba::new(0.2005, 0.4, 0.6, 1.0);
        assert_eq!(auto_pick(&mut ctx), SyncOutcome::Unchanged);
        assert_eq!(ctx.session.color, Rgba::new(0.2005, 0.4, 0.6, 1.0));
    }

    #[test]
    fn test_alpha_difference_triggers_update() {
        let mut ctx = colored_context();
        ctx.session.color = Rgba::new(0.2, 0.4, 0.6, 0.5);
        assert_eq!(auto_pick(&mut ctx), SyncOutcome::Updated);
        assert_eq!(ctx.session.color.a, 1.0);
    }

    #[test]
    fn test_silent_without_color_layer() {
        let mut ctx = EditorContext::edit(selected_triangle());
        ctx.session.auto_pick = true;
        let before = ctx.session.color;
        assert_eq!(auto_pick(&mut ctx), SyncOutcome::Unavailable);
        assert_eq!(ctx.session.color, before);
    }

    #[test]
    fn test_silent_without_selection() {
        let mut mesh = selected_triangle();
        mesh.clear_selection();
        mesh.color_layer_or_create();
        let mut ctx = EditorContext::edit(mesh);
        ctx.session.auto_pick = true;
        assert_eq!(auto_pick(&mut ctx), SyncOutcome::Unavailable);
    }

    #[test]
    fn test_silent_in_wrong_mode() {
        let mut ctx = colored_context();
        ctx.mode = EditorMode::Object;
        let before = ctx.session.color;
        assert_eq!(auto_pick(&mut ctx), SyncOutcome::WrongMode);
        assert_eq!(ctx.session.color, before);
    }

    #[test]
    fn test_silent_without_mesh() {
        let mut ctx: EditorContext<EditMesh> = EditorContext {
            mode: EditorMode::EditMesh,
            active: None,
            session: Default::default(),
        };
        ctx.session.auto_pick = true;
        assert_eq!(auto_pick(&mut ctx), SyncOutcome::NoMesh);
    }
}
