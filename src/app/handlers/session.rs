//! Handler für die Marker-Erfassung (Kategorie, Beschreibung, Commit).

use crate::app::AppState;
use crate::core::{GeoPoint, IssueCategory};

/// Setzt die Kategorie der laufenden Erfassung.
pub fn select_category(state: &mut AppState, category: Option<IssueCategory>) {
    state.session.select_category(category);
    // Jede Session-Änderung löst eine Layer-Resynchronisation aus
    state.scene_dirty = true;
    match category {
        Some(category) => log::info!("Kategorie gewählt: {category}"),
        None => log::info!("Kategorie-Auswahl zurückgesetzt"),
    }
}

/// Aktualisiert den Beschreibungsentwurf.
pub fn edit_description(state: &mut AppState, text: String) {
    state.session.edit_description(text);
    state.scene_dirty = true;
}

/// Schreibt die laufende Erfassung an `position` fest.
///
/// Der Commit-Guard sitzt in der Session: ohne gewählte Kategorie
/// passiert nichts, der Store bleibt unverändert.
pub fn commit_marker(state: &mut AppState, position: GeoPoint) {
    let Some(pending) = state.session.take_commit(position) else {
        return;
    };

    if !pending.position.is_in_bounds() {
        log::warn!(
            "Commit mit Koordinaten außerhalb der Kartengrenzen: {}",
            pending.position
        );
    }

    let marker = state
        .store
        .append(pending.position, pending.category, pending.description);
    log::info!(
        "Marker #{} angelegt: {} bei {}",
        marker.id,
        marker.category,
        marker.position
    );
    state.scene_dirty = true;
}

/// Bricht die laufende Erfassung ab.
pub fn cancel(state: &mut AppState) {
    state.session.cancel();
    state.scene_dirty = true;
    log::info!("Marker-Erfassung abgebrochen");
}
