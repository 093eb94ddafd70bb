use crate::app::{read_config, TranspaneApp};
use crate::messages::{WorkerCommand, WorkerResult};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "gif", "tif", "tiff"];

pub fn show(ctx: &egui::Context, app: &mut TranspaneApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let regions_shortcut = egui::KeyboardShortcut::new(
        egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
        egui::Key::O,
    );
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
    let zoom_in_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Plus);
    let zoom_out_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Minus);
    let reset_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Num0);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_image(app);
                }

                let has_image = app.viewer.session().current_source().is_some();
                if ui
                    .add_enabled(
                        has_image,
                        egui::Button::new("Open Regions...")
                            .shortcut_text(ctx.format_shortcut(&regions_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_regions(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.add(egui::Button::new("Zoom In").shortcut_text(ctx.format_shortcut(&zoom_in_shortcut))).clicked() {
                    ui.close();
                    app.viewer.zoom_in();
                }
                if ui.add(egui::Button::new("Zoom Out").shortcut_text(ctx.format_shortcut(&zoom_out_shortcut))).clicked() {
                    ui.close();
                    app.viewer.zoom_out();
                }
                if ui.add(egui::Button::new("Reset View").shortcut_text(ctx.format_shortcut(&reset_shortcut))).clicked() {
                    ui.close();
                    app.viewer.reset_view();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus). The shift variant
        // goes first so Ctrl+Shift+O does not also match Ctrl+O.
        if ctx.input_mut(|i| i.consume_shortcut(&regions_shortcut))
            && app.viewer.session().current_source().is_some()
        {
            open_regions(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
            open_image(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&zoom_in_shortcut)) {
            app.viewer.zoom_in();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&zoom_out_shortcut)) {
            app.viewer.zoom_out();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&reset_shortcut)) {
            app.viewer.reset_view();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// The pick is reported back to the UI thread, which owns load identities.
fn open_image(app: &mut TranspaneApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = result_tx.send(WorkerResult::ImagePicked { path });
        }
    });
}

/// Regions are tagged with the image open when the dialog was shown, so a
/// pick that outlives that image is dropped on arrival.
fn open_regions(app: &mut TranspaneApp) {
    let Some(source) = app.viewer.session().current_source() else {
        return;
    };
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Region JSON", &["json"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadRegions { source, path });
        }
    });
}

fn import_config(app: &mut TranspaneApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let result = match read_config(&path) {
            Ok(config) => WorkerResult::ConfigImported { config },
            Err(e) => WorkerResult::Error {
                message: format!("{e:#}"),
            },
        };
        let _ = result_tx.send(result);
    });
}

fn export_config(app: &mut TranspaneApp) {
    let config = app.viewer.config().clone();
    let result_tx = app.result_tx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("transpane.toml")
            .save_file()
        {
            let written = toml::to_string_pretty(&config)
                .map_err(|e| e.to_string())
                .and_then(|content| std::fs::write(&path, content).map_err(|e| e.to_string()));
            let result = match written {
                Ok(()) => WorkerResult::Log {
                    message: format!("Config saved: {}", path.display()),
                },
                Err(message) => WorkerResult::Error {
                    message: format!("Failed to save config: {message}"),
                },
            };
            let _ = result_tx.send(result);
        }
    });
}
