use transpane_core::scene::{split_panes, PaneFrame, PaneKind};
use transpane_core::session::ImageState;

use crate::app::TranspaneApp;
use crate::convert::{from_egui_rect, to_egui_rect};
use crate::panels::{input, overlay};

const PANE_GAP: f32 = 6.0;

pub fn show(ctx: &egui::Context, app: &mut TranspaneApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let area = ui.available_rect_before_wrap();
        let response = ui.allocate_rect(area, egui::Sense::click_and_drag());

        let (_, left, right) = split_panes(from_egui_rect(area), PANE_GAP);
        input::handle(ui, &response, area, app);

        for pane in [left, right] {
            paint_background(ui, to_egui_rect(pane));
        }

        let texture_id = app.viewport.texture.as_ref().map(|t| t.id());
        match (app.viewer.frame((left, right)), texture_id) {
            (Some(frame), Some(texture_id)) => {
                for pane in frame.panes() {
                    draw_pane(ui, pane, texture_id, app);
                }
            }
            _ => {
                for pane in [left, right] {
                    draw_placeholder(ui, to_egui_rect(pane), placeholder_text(app));
                }
            }
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn draw_pane(ui: &egui::Ui, pane: &PaneFrame, texture_id: egui::TextureId, app: &TranspaneApp) {
    let viewport = to_egui_rect(pane.viewport);
    let painter = ui.painter_at(viewport);

    painter.image(
        texture_id,
        to_egui_rect(pane.image_rect),
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );

    if pane.kind == PaneKind::Translated {
        let style = &app.viewer.config().overlay;
        for o in &pane.overlays {
            overlay::draw(&painter, o, style.fill_color, style.text_color);
        }
    }

    draw_pane_label(&painter, viewport, pane.kind);
}

fn draw_pane_label(painter: &egui::Painter, rect: egui::Rect, kind: PaneKind) {
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    painter.text(
        label_pos,
        egui::Align2::LEFT_TOP,
        kind.to_string(),
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn placeholder_text(app: &TranspaneApp) -> &'static str {
    match app.viewer.session().state() {
        ImageState::Empty => "Open an image to begin",
        ImageState::Pending { .. } => "Loading...",
        ImageState::Failed { .. } => "Image failed to load",
        // Ready but the texture upload has not landed yet.
        ImageState::Ready { .. } => "Loading...",
    }
}

fn draw_placeholder(ui: &egui::Ui, rect: egui::Rect, text: &str) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}
