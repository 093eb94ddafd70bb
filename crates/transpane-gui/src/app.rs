use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::Context;
use tracing::warn;
use transpane_core::config::ViewerConfig;
use transpane_core::scene::Opacity;
use transpane_core::viewer::Viewer;

use crate::fonts::install_fallback_font;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::workers;
use crate::Args;

pub struct TranspaneApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub viewer: Viewer,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl TranspaneApp {
    pub fn new(ctx: &egui::Context, args: Args) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone());

        let mut startup_log = Vec::new();
        let config = match args.config.as_deref().map(read_config).transpose() {
            Ok(config) => config.unwrap_or_default(),
            Err(e) => {
                warn!("{e:#}");
                startup_log.push(format!("ERROR: {e:#}"));
                ViewerConfig::default()
            }
        };

        let viewer = Viewer::new(config);
        let mut app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::new(viewer.opacity()),
            viewer,
            viewport: ViewportState::default(),
            show_about: false,
        };
        for line in startup_log {
            app.ui_state.add_log(line);
        }

        app.apply_font(ctx);
        if let Some(path) = args.image {
            app.open_image(path);
        }
        if let Some(path) = args.regions {
            app.load_regions(path);
        }
        app
    }

    /// Start loading `path`. Anything still in flight becomes stale.
    pub fn open_image(&mut self, path: PathBuf) {
        let source = self.viewer.open_image();
        self.viewport.texture = None;
        self.ui_state.image_path = Some(path.clone());
        self.ui_state.regions_path = None;
        self.ui_state.add_log(format!("Loading {} ({source})", path.display()));
        self.send_command(WorkerCommand::LoadImage { source, path });
    }

    /// Load regions for the image currently open. Ignored with no image.
    pub fn load_regions(&mut self, path: PathBuf) {
        let Some(source) = self.viewer.session().current_source() else {
            self.ui_state
                .add_log(format!("Open an image before loading {}", path.display()));
            return;
        };
        self.send_command(WorkerCommand::LoadRegions { source, path });
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImagePicked { path } => {
                    self.open_image(path);
                }
                WorkerResult::ImageLoaded {
                    source,
                    path,
                    dims,
                    image,
                } => {
                    if !self.viewer.image_loaded(source, dims) {
                        continue;
                    }
                    let texture = ctx.load_texture("image", image, egui::TextureOptions::LINEAR);
                    self.viewport.texture = Some(texture);
                    self.ui_state
                        .add_log(format!("Opened: {} ({dims})", path.display()));
                }
                WorkerResult::ImageFailed { source, message } => {
                    if self.viewer.image_failed(source, message.clone()) {
                        self.ui_state.add_log(format!("ERROR: {message}"));
                    }
                }
                WorkerResult::RegionsLoaded {
                    source,
                    path,
                    regions,
                } => {
                    let count = regions.len();
                    if !self.viewer.set_regions_for(source, regions) {
                        continue;
                    }
                    self.ui_state
                        .add_log(format!("Loaded {count} regions from {}", path.display()));
                    self.ui_state.regions_path = Some(path);
                }
                WorkerResult::ConfigImported { config } => {
                    if let Err(e) = config.validate() {
                        self.ui_state.add_log(format!("ERROR: {e}"));
                        continue;
                    }
                    self.viewer.set_config(config);
                    let opacity = Opacity::new(self.viewer.config().overlay.default_opacity);
                    self.viewer.set_opacity(opacity);
                    self.ui_state.opacity_percent = self.viewer.opacity().percent();
                    self.apply_font(ctx);
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn apply_font(&mut self, ctx: &egui::Context) {
        let Some(path) = self.viewer.config().overlay.font_path.clone() else {
            return;
        };
        if let Err(e) = install_fallback_font(ctx, &path) {
            warn!("{e:#}");
            self.ui_state.add_log(format!("ERROR: {e:#}"));
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for TranspaneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        let dt = ctx.input(|i| i.stable_dt);
        self.viewer.tick(dt);

        panels::menu_bar::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::status::show(ctx, self);
        panels::dual_pane::show(ctx, self);

        let revision = self.viewer.revision();
        if self.viewer.is_animating() || self.viewport.painted_revision != Some(revision) {
            self.viewport.painted_revision = Some(revision);
            ctx.request_repaint();
        }

        // About dialog
        if self.show_about {
            egui::Window::new("About Transpane")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Transpane");
                        ui.label("Original and translated image, side by side");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

pub(crate) fn read_config(path: &Path) -> anyhow::Result<ViewerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: ViewerConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
