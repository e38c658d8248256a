//! Seitenpanel: Erfassung, Standort, Fotos und Issue-Zusammenfassung.

use std::path::PathBuf;

use crate::app::{AppIntent, AppState};
use crate::core::{IssueCategory, IssueSummary};
use crate::location::LocationState;

/// Rendert das Seitenpanel und gibt erzeugte Events zurück.
pub fn render_side_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("issue_panel")
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.heading("Issue Map");
            ui.separator();

            render_creation_section(ui, state, &mut events);
            ui.separator();

            render_location_section(ui, state, &mut events);
            ui.separator();

            render_photo_section(ui, state, &mut events);
            ui.separator();

            render_summary_section(ui, state);
        });

    events
}

/// Kategorie-Auswahl, Beschreibung und Abbrechen.
fn render_creation_section(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label("Neue Meldung");

    let selected = state.session.selected_category();
    egui::ComboBox::from_label("Kategorie")
        .selected_text(selected.map(IssueCategory::label).unwrap_or("—"))
        .show_ui(ui, |ui| {
            if ui.selectable_label(selected.is_none(), "—").clicked() {
                events.push(AppIntent::CategorySelected { category: None });
            }
            for category in IssueCategory::SELECTABLE {
                if ui
                    .selectable_label(selected == Some(category), category.label())
                    .clicked()
                {
                    events.push(AppIntent::CategorySelected {
                        category: Some(category),
                    });
                }
            }
        });

    let mut draft = state.session.description_draft().to_owned();
    if ui
        .add(egui::TextEdit::singleline(&mut draft).hint_text("Beschreibung des Problems"))
        .changed()
    {
        events.push(AppIntent::DescriptionEdited { text: draft });
    }

    if state.session.is_idle() {
        ui.small("Kategorie wählen, dann auf die Karte klicken");
    } else if ui.button("Erfassung abbrechen").clicked() {
        events.push(AppIntent::CreationCancelled);
    }
}

/// Standort-Status und "an meiner Position"-Aktion.
fn render_location_section(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    match &state.location {
        LocationState::Pending => {
            ui.label("Standort: wird ermittelt …");
        }
        LocationState::Resolved(position) => {
            ui.label(format!("Standort: {position}"));
        }
        LocationState::Failed(error) => {
            ui.label(format!("Standort nicht verfügbar: {}", error.message));
        }
    }

    let can_add = state.location.position().is_some() && !state.session.is_idle();
    if ui
        .add_enabled(can_add, egui::Button::new("Marker an meiner Position"))
        .clicked()
    {
        events.push(AppIntent::AddAtCurrentLocationRequested);
    }
}

/// Foto-Auswahl mit Vorschau-Liste und Upload.
fn render_photo_section(ui: &mut egui::Ui, state: &mut AppState, events: &mut Vec<AppIntent>) {
    ui.label("Fotos");

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.photos.path_input)
                .hint_text("Pfad zur Bilddatei"),
        );
        if ui.button("Hinzufügen").clicked() && !state.photos.path_input.trim().is_empty() {
            let mut paths = state.photos.files.clone();
            paths.push(PathBuf::from(state.photos.path_input.trim()));
            state.photos.path_input.clear();
            events.push(AppIntent::PhotoFilesSelected { paths });
        }
    });

    for path in &state.photos.files {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unbenannt");
        ui.small(format!("• {name}"));
    }

    ui.horizontal(|ui| {
        if ui
            .add_enabled(
                !state.photos.files.is_empty(),
                egui::Button::new("Fotos hochladen"),
            )
            .clicked()
        {
            events.push(AppIntent::UploadPhotosRequested);
        }
        if !state.photos.files.is_empty() && ui.button("Auswahl leeren").clicked() {
            events.push(AppIntent::PhotoFilesSelected { paths: Vec::new() });
        }
    });

    if let Some(result) = &state.photos.last_result {
        ui.small(result);
    }
}

/// Read-only-Zusammenfassung: Anzahl und Beschreibungen je Kategorie.
fn render_summary_section(ui: &mut egui::Ui, state: &AppState) {
    ui.label("Gemeldete Issues");

    let summary = IssueSummary::from_store(&state.store);
    if summary.is_empty() {
        ui.small("Noch keine Meldungen");
        return;
    }

    for (&category, &count) in summary.counts() {
        ui.label(format!("{category}: {count} Meldung(en)"));
        ui.indent(("summary", category.label()), |ui| {
            for description in summary.descriptions_for(category) {
                if description.is_empty() {
                    ui.small("(ohne Beschreibung)");
                } else {
                    ui.small(description);
                }
            }
        });
    }
}
