//! The vertex color side panel and context-menu contribution.

use crate::actions::{PanelAction, run_action};
use crate::status::{Severity, StatusMessage};
use egui::{Color32, Grid, RichText, Ui};
use vcolor_edit::{CornerMesh, EditorContext};

/// Side panel for viewing and editing the color of selected vertices.
///
/// Holds only presentation state (the last status message); the color value
/// and auto-pick flag live in the session.
#[derive(Default)]
pub struct VertexColorPanel {
    status: Option<StatusMessage>,
}

impl VertexColorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The status message from the most recent action, if any.
    pub fn last_status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Draw the panel body.
    ///
    /// Draws nothing unless the context is in edit-mesh mode with an active
    /// mesh, matching the availability gate on the actions themselves.
    pub fn ui<M: CornerMesh>(&mut self, ui: &mut Ui, ctx: &mut EditorContext<M>) {
        if !ctx.actions_available() {
            return;
        }

        ui.checkbox(&mut ctx.session.auto_pick, "Auto Pick Color");
        ui.separator();

        let mut rgba = ctx.session.color.to_array();
        if ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed() {
            ctx.session.set_color(vcolor_mesh::Rgba::from_array(rgba));
        }
        ui.separator();

        let color = ctx.session.color;
        ui.group(|ui| {
            Grid::new("rgba_readout").num_columns(4).show(ui, |ui| {
                ui.label(format!("R: {:.3}", color.r));
                ui.label(format!("G: {:.3}", color.g));
                ui.label(format!("B: {:.3}", color.b));
                ui.label(format!("A: {:.3}", color.a));
                ui.end_row();
            });
        });
        ui.separator();

        let mut action = None;
        ui.horizontal(|ui| {
            if ui.button("Get").clicked() {
                action = Some(PanelAction::Pick);
            }
            if ui.button("Apply").clicked() {
                action = Some(PanelAction::Apply);
            }
        });
        self.dispatch(action, ctx);

        if let Some(status) = &self.status {
            ui.separator();
            let text = match status.severity {
                Severity::Info => RichText::new(&status.text),
                Severity::Warning => {
                    RichText::new(&status.text).color(Color32::from_rgb(230, 180, 60))
                }
            };
            ui.label(text);
        }
    }

    /// Context-menu entries for the edit-mesh right-click menu.
    pub fn menu_items<M: CornerMesh>(&mut self, ui: &mut Ui, ctx: &mut EditorContext<M>) {
        if !ctx.actions_available() {
            return;
        }
        ui.separator();
        let mut action = None;
        if ui.button("Pick Vertex Color").clicked() {
            action = Some(PanelAction::Pick);
            ui.close();
        }
        if ui.button("Apply Vertex Color").clicked() {
            action = Some(PanelAction::Apply);
            ui.close();
        }
        self.dispatch(action, ctx);
    }

    fn dispatch<M: CornerMesh>(
        &mut self,
        action: Option<PanelAction>,
        ctx: &mut EditorContext<M>,
    ) {
        let Some(action) = action else { return };
        let Some(mesh) = ctx.active.as_mut() else {
            return;
        };
        self.status = Some(run_action(action, &mut ctx.session, mesh));
    }
}
