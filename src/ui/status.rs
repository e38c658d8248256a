//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::location::LocationState;

/// Rendert die Status-Bar.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Marker: {}", state.store.len()));

            ui.separator();

            match state.session.selected_category() {
                Some(category) => ui.label(format!("Erfassung: {category}")),
                None => ui.label("Erfassung: inaktiv"),
            };

            ui.separator();

            ui.label(format!(
                "Zentrum: {} | Zoom: {}",
                state.view.center, state.view.zoom
            ));

            ui.separator();

            match &state.location {
                LocationState::Pending => ui.label("GPS: …"),
                LocationState::Resolved(_) => ui.label("GPS: ok"),
                LocationState::Failed(error) => ui.label(format!("GPS: Fehler {}", error.code)),
            };
        });
    });
}
