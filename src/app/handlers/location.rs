//! Handler für das Ergebnis der Geolocation-Abfrage.

use crate::app::AppState;
use crate::core::GeoPoint;
use crate::location::{GeoLocationError, LocationState};

/// Übernimmt die aufgelöste Geräteposition.
///
/// Die Karte wird genau einmal auf die Position zentriert; spätere
/// Sicht-Änderungen des Nutzers bleiben unangetastet.
pub fn set_location(state: &mut AppState, position: GeoPoint) {
    state.location = LocationState::Resolved(position);
    log::info!("Geräteposition aufgelöst: {position}");

    if !state.view.centered_on_device {
        state.view.center = position;
        state.view.centered_on_device = true;
        state.view_dirty = true;
    }
}

/// Übernimmt einen Positionsfehler.
///
/// Konsumenten degradieren kontrolliert: die Karte behält das
/// konfigurierte Start-Zentrum, "an meiner Position" bleibt inaktiv.
pub fn set_location_error(state: &mut AppState, error: GeoLocationError) {
    log::warn!("Geolocation fehlgeschlagen: {error}");
    state.location = LocationState::Failed(error);
}
