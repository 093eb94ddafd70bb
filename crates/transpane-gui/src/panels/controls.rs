use transpane_core::consts::{MAX_OPACITY_PERCENT, MIN_OPACITY_PERCENT};
use transpane_core::scene::Opacity;

use crate::app::TranspaneApp;

/// Toolbar above the panes: zoom stepper and overlay opacity.
pub fn show(ctx: &egui::Context, app: &mut TranspaneApp) {
    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let has_image = app.viewer.session().dims().is_some();

            ui.add_enabled_ui(has_image, |ui| {
                if ui.button("\u{2212}").on_hover_text("Zoom out").clicked() {
                    app.viewer.zoom_out();
                }
                ui.label(format!("{:.0}%", app.viewer.transform().scale * 100.0));
                if ui.button("+").on_hover_text("Zoom in").clicked() {
                    app.viewer.zoom_in();
                }
                if ui.button("Reset").on_hover_text("Reset pan and zoom").clicked() {
                    app.viewer.reset_view();
                }
            });

            ui.separator();

            ui.label("Overlay opacity");
            let slider = egui::Slider::new(
                &mut app.ui_state.opacity_percent,
                MIN_OPACITY_PERCENT..=MAX_OPACITY_PERCENT,
            )
            .suffix("%");
            if ui.add(slider).changed() {
                app.viewer
                    .set_opacity(Opacity::from_percent(app.ui_state.opacity_percent));
            }
        });
    });
}
