//! Application State — zentrale Datenhaltung.

use std::path::PathBuf;

use super::command_log::CommandLog;
use super::session::MarkerCreationSession;
use crate::core::{GeoPoint, MarkerStore};
use crate::location::LocationState;
use crate::shared::MapOptions;

/// Karten-bezogener Sichtzustand.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Aktuelles Kartenzentrum
    pub center: GeoPoint,
    /// Aktuelle Zoomstufe
    pub zoom: u8,
    /// Karte wurde bereits einmalig auf die Geräteposition zentriert
    pub centered_on_device: bool,
}

impl ViewState {
    /// Sichtzustand aus den Startoptionen.
    pub fn from_options(options: &MapOptions) -> Self {
        Self {
            center: options.initial_center,
            zoom: options.initial_zoom,
            centered_on_device: false,
        }
    }
}

/// Zustand der Foto-Auswahl und des Uploads.
#[derive(Debug, Clone, Default)]
pub struct PhotoState {
    /// Aktuell ausgewählte Bilddateien (Vorschau-Liste)
    pub files: Vec<PathBuf>,
    /// Eingabefeld für einen hinzuzufügenden Pfad
    pub path_input: String,
    /// Letzte Upload-Meldung für die Status-Zeile
    pub last_result: Option<String>,
}

/// Gesamtzustand der Anwendung.
///
/// Exklusiv von der aktiven View besessen; alle Mutationen laufen als
/// diskrete Command-Ausführungen über den Controller.
pub struct AppState {
    /// Festgeschriebene Marker
    pub store: MarkerStore,
    /// Laufende Marker-Erfassung
    pub session: MarkerCreationSession,
    /// Zustand der Geräteposition
    pub location: LocationState,
    /// Karten-Sicht
    pub view: ViewState,
    /// Foto-Auswahl und Upload
    pub photos: PhotoState,
    /// Laufzeit-Optionen
    pub options: MapOptions,
    /// Log der ausgeführten Commands
    pub command_log: CommandLog,
    /// Marker-Layer müssen neu synchronisiert werden
    pub scene_dirty: bool,
    /// Kartensicht muss neu gesetzt werden
    pub view_dirty: bool,
    /// Anwendung beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Startzustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(MapOptions::default())
    }

    /// Erstellt den Startzustand mit den übergebenen Optionen.
    pub fn with_options(options: MapOptions) -> Self {
        Self {
            store: MarkerStore::new(),
            session: MarkerCreationSession::new(),
            location: LocationState::Pending,
            view: ViewState::from_options(&options),
            photos: PhotoState::default(),
            options,
            command_log: CommandLog::new(),
            scene_dirty: true,
            view_dirty: true,
            should_exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
