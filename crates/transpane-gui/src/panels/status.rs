use crate::app::TranspaneApp;

pub fn show(ctx: &egui::Context, app: &mut TranspaneApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(dims) = app.viewer.session().dims() {
                ui.label(dims.to_string());
                ui.separator();
            }
            let t = app.viewer.transform();
            ui.label(format!("Zoom: {:.0}%", t.scale * 100.0));
            ui.separator();
            ui.label(format!("Pan: {:.0}, {:.0}", t.pan_x, t.pan_y));
            ui.separator();
            ui.label(format!("Opacity: {}", app.viewer.opacity()));
            ui.separator();
            ui.label(format!("Regions: {}", app.viewer.regions().len()));
            if let Some(ref path) = app.ui_state.regions_path {
                ui.label(
                    egui::RichText::new(path.display().to_string()).weak(),
                );
            }
        });

        ui.add_space(2.0);
    });
}
