//! Application state and eframe run loop.

use glam::Vec3;
use std::error::Error;
use tracing::info;
use vcolor_edit::{EditorContext, EditorMode, UpdateHandlers, register_auto_pick};
use vcolor_mesh::{EditMesh, VertexId};
use vcolor_panel::VertexColorPanel;

/// The demo host: editor context, handler registry, and the panel.
pub struct VertexColorApp {
    editor: EditorContext<EditMesh>,
    handlers: UpdateHandlers<EditMesh>,
    panel: VertexColorPanel,
}

impl VertexColorApp {
    pub fn new() -> Self {
        let mut handlers = UpdateHandlers::new();
        register_auto_pick(&mut handlers);

        Self {
            editor: EditorContext::edit(demo_mesh()),
            handlers,
            panel: VertexColorPanel::new(),
        }
    }

    /// Dispatch a change notification if the active mesh was edited since
    /// the last frame. This mirrors the host emitting a geometry-changed
    /// notification after each edit.
    fn dispatch_changes(&mut self) {
        let changed = self
            .editor
            .active
            .as_mut()
            .map(|mesh| mesh.take_changed())
            .unwrap_or(false);
        if changed {
            self.handlers.notify(&mut self.editor);
        }
    }
}

impl Default for VertexColorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for VertexColorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("selection").show(ctx, |ui| {
            ui.heading("Selection");
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.editor.mode, EditorMode::Object, "Object");
                ui.selectable_value(&mut self.editor.mode, EditorMode::EditMesh, "Edit Mesh");
            });
            ui.separator();

            if let Some(mesh) = self.editor.active.as_mut() {
                if self.editor.mode == EditorMode::EditMesh {
                    for i in 0..mesh.vertex_count() {
                        let id = VertexId(i as u32);
                        let label = match mesh.position(id) {
                            Some(p) => format!("v{i} ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z),
                            None => format!("v{i}"),
                        };
                        let mut selected = mesh.is_selected(id);
                        if ui.checkbox(&mut selected, label).changed() {
                            mesh.select(id, selected);
                            mesh.mark_changed();
                        }
                    }
                } else {
                    ui.label("Enter Edit Mesh mode to select vertices");
                }
            }
        });

        egui::SidePanel::right("vertex_color").show(ctx, |ui| {
            ui.heading("Vertex Color");
            self.panel.ui(ui, &mut self.editor);
        });

        let response = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(mesh) = self.editor.active.as_ref() {
                    ui.label(format!(
                        "{} vertices, {} faces, {} corners",
                        mesh.vertex_count(),
                        mesh.face_count(),
                        mesh.corner_count()
                    ));
                    ui.label("Right-click for vertex color actions");
                }
            })
            .response;
        response.context_menu(|ui| self.panel.menu_items(ui, &mut self.editor));

        self.dispatch_changes();
    }
}

/// Two quads sharing an edge, so the shared vertices own corners on both
/// faces.
fn demo_mesh() -> EditMesh {
    let mut mesh = EditMesh::new();
    let v0 = mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0));
    let v1 = mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0));
    let v2 = mesh.add_vertex(Vec3::new(2.0, 0.0, 0.0));
    let v3 = mesh.add_vertex(Vec3::new(0.0, 1.0, 0.0));
    let v4 = mesh.add_vertex(Vec3::new(1.0, 1.0, 0.0));
    let v5 = mesh.add_vertex(Vec3::new(2.0, 1.0, 0.0));
    // Construction of a static demo mesh cannot fail
    let _ = mesh.add_face(&[v0, v1, v4, v3]);
    let _ = mesh.add_face(&[v1, v2, v5, v4]);
    mesh
}

/// Open the window and run until closed.
pub fn run() -> Result<(), Box<dyn Error>> {
    info!("starting vertex color editor");
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Vertex Color Editor",
        native_options,
        Box::new(|_cc| Ok(Box::new(VertexColorApp::new()))),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcolor_edit::AUTO_PICK_HANDLER;
    use vcolor_mesh::Rgba;

    #[test]
    fn test_app_registers_guard_once() {
        let app = VertexColorApp::new();
        assert!(app.handlers.is_subscribed(AUTO_PICK_HANDLER));
        assert_eq!(app.handlers.len(), 1);
    }

    #[test]
    fn test_demo_mesh_shares_corners() {
        let mesh = demo_mesh();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.corner_count(), 8);
        // v1 and v4 sit on the shared edge
        let shared: Vec<_> = mesh
            .corner_ids()
            .filter(|&c| mesh.corner_vertex(c) == VertexId(1))
            .collect();
        assert_eq!(shared.len(), 2);
    }

    #[test]
    fn test_selection_edit_triggers_auto_pick() {
        let mut app = VertexColorApp::new();
        app.editor.session.auto_pick = true;

        let mesh = app.editor.active.as_mut().unwrap();
        mesh.color_layer_or_create();
        mesh.set_corner_color(vcolor_mesh::CornerId(0), Rgba::new(0.2, 0.4, 0.6, 1.0));
        mesh.select(VertexId(0), true);
        mesh.mark_changed();

        app.dispatch_changes();
        assert_eq!(app.editor.session.color, Rgba::new(0.2, 0.4, 0.6, 1.0));

        // A second dispatch with nothing changed is a no-op
        app.dispatch_changes();
        assert_eq!(app.editor.session.color, Rgba::new(0.2, 0.4, 0.6, 1.0));
    }
}
