//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use std::path::PathBuf;

use crate::core::{GeoPoint, IssueCategory};
use crate::location::GeoLocationError;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Kategorie im Auswahlfeld gewählt (`None` = Platzhalter-Option)
    CategorySelected { category: Option<IssueCategory> },
    /// Beschreibungstext geändert
    DescriptionEdited { text: String },
    /// Klick auf freie Kartenfläche
    MapClicked { position: GeoPoint },
    /// Klick auf ein bestehendes Marker-Icon
    MarkerIconClicked { marker_id: u64 },
    /// Marker an der aktuellen Geräteposition anlegen
    AddAtCurrentLocationRequested,
    /// Laufende Erfassung abbrechen
    CreationCancelled,
    /// Geräteposition wurde aufgelöst
    LocationResolved { position: GeoPoint },
    /// Positionsabfrage ist fehlgeschlagen
    LocationFailed { error: GeoLocationError },
    /// Fotodateien wurden ausgewählt
    PhotoFilesSelected { paths: Vec<PathBuf> },
    /// Upload der ausgewählten Fotos angefordert
    UploadPhotosRequested,
    /// Anwendung beenden
    ExitRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Kategorie der Erfassung setzen (`None` = zurück nach Idle)
    SelectCategory { category: Option<IssueCategory> },
    /// Beschreibungsentwurf aktualisieren
    EditDescription { text: String },
    /// Erfassung an einer Position festschreiben (Guard im Handler)
    CommitMarker { position: GeoPoint },
    /// Erfassung abbrechen
    CancelCreation,
    /// Aufgelöste Geräteposition übernehmen
    SetLocation { position: GeoPoint },
    /// Positionsfehler übernehmen
    SetLocationError { error: GeoLocationError },
    /// Foto-Auswahl übernehmen
    SetPhotoFiles { paths: Vec<PathBuf> },
    /// Ausgewählte Fotos hochladen
    UploadPhotos,
    /// Anwendung beenden
    RequestExit,
}
