//! Bridges egui pointer input to the viewer's unified pointer events.

use transpane_core::viewport::{PointerEvent, PointerPhase};

use crate::app::TranspaneApp;
use crate::convert::from_egui_pos;

fn emit(app: &mut TranspaneApp, phase: PointerPhase, pos: egui::Pos2) {
    app.viewer.handle_pointer(PointerEvent {
        phase,
        pos: from_egui_pos(pos),
    });
}

/// Feed drag, wheel and pinch input over the dual-pane `area` to the viewer.
/// Both panes share one response, so a drag in either pans both.
pub fn handle(ui: &egui::Ui, response: &egui::Response, area: egui::Rect, app: &mut TranspaneApp) {
    let (latest, focused) = ui.input(|i| (i.pointer.latest_pos(), i.focused));

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            emit(app, PointerPhase::Down, pos);
        }
    }

    if app.viewer.controller().is_dragging() {
        match latest {
            _ if !focused => emit(app, PointerPhase::Cancel, latest.unwrap_or(area.center())),
            Some(pos) if !area.contains(pos) => emit(app, PointerPhase::Leave, pos),
            Some(pos) if response.drag_stopped() => emit(app, PointerPhase::Up, pos),
            Some(pos) if response.dragged() => emit(app, PointerPhase::Move, pos),
            None => emit(app, PointerPhase::Leave, area.center()),
            _ => {}
        }
    }

    if response.double_clicked() {
        app.viewer.reset_view();
    }

    if !response.hovered() {
        return;
    }

    // egui reports upward scrolling as positive; the viewer expects
    // positive for scrolling down.
    let scroll = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll != 0.0 {
        app.viewer.wheel(-scroll);
    }

    let pinch = ui.input(|i| i.zoom_delta());
    if pinch != 1.0 {
        app.viewer.pinch(pinch);
    }
}
