//! Handler für Foto-Auswahl und -Upload.
//!
//! Der Upload ist ein unabhängiges Teilsystem ohne Kopplung an den
//! Marker-Store; Erfolg und Misserfolg werden nur geloggt und in der
//! Status-Zeile angezeigt.

use std::path::PathBuf;

use crate::app::AppState;
use crate::upload::PhotoUploader;

/// Übernimmt die ausgewählten Fotodateien.
pub fn set_photo_files(state: &mut AppState, paths: Vec<PathBuf>) {
    log::info!("{} Fotodatei(en) ausgewählt", paths.len());
    state.photos.files = paths;
    state.photos.last_result = None;
}

/// Lädt die ausgewählten Fotos zum konfigurierten Endpunkt hoch.
///
/// Fehler werden an dieser Grenze abgefangen und nie weitergereicht;
/// der Marker-Zustand bleibt in jedem Fall unberührt.
pub fn upload_photos(state: &mut AppState) {
    if state.photos.files.is_empty() {
        log::error!("Foto-Upload ohne ausgewählte Dateien angefordert");
        state.photos.last_result = Some("Keine Dateien ausgewählt".to_string());
        return;
    }

    let uploader = PhotoUploader::new(state.options.upload_endpoint.clone());
    match uploader.upload(&state.photos.files) {
        Ok(message) => {
            log::info!("Foto-Upload erfolgreich: {message}");
            state.photos.last_result = Some(format!(
                "{} Datei(en) hochgeladen",
                state.photos.files.len()
            ));
        }
        Err(error) => {
            log::error!("Foto-Upload fehlgeschlagen: {error:#}");
            state.photos.last_result = Some("Upload fehlgeschlagen".to_string());
        }
    }
}
