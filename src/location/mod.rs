//! Geräteposition: einmalige, asynchrone Abfrage über eine Quellen-Schnittstelle.
//!
//! Die eigentliche Positionsbestimmung liegt bei der externen
//! Geolocation-Quelle; dieses Modul transportiert genau ein Ergebnis
//! (Position oder typisierter Fehler) über einen Kanal in die
//! Ereignisschleife. Kein Retry, keine Stornierung — pro Mount wird
//! genau eine Anfrage gestellt und deren Ausgang beobachtet.

use std::sync::mpsc;
use std::time::Duration;

use crate::core::GeoPoint;

/// Fehlerart analog zu den Codes der Browser-Geolocation-API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorKind {
    /// Code 0: Geolocation wird nicht unterstützt
    NotSupported,
    /// Code 1: Berechtigung verweigert
    PermissionDenied,
    /// Code 2: Position nicht bestimmbar
    PositionUnavailable,
    /// Code 3: Zeitüberschreitung
    Timeout,
}

impl GeoErrorKind {
    /// Ordnet einen numerischen Fehlercode ein.
    /// Unbekannte Codes werden wie "nicht unterstützt" behandelt.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeoErrorKind::PermissionDenied,
            2 => GeoErrorKind::PositionUnavailable,
            3 => GeoErrorKind::Timeout,
            _ => GeoErrorKind::NotSupported,
        }
    }

    /// Numerischer Code der Fehlerart.
    pub fn code(self) -> u16 {
        match self {
            GeoErrorKind::NotSupported => 0,
            GeoErrorKind::PermissionDenied => 1,
            GeoErrorKind::PositionUnavailable => 2,
            GeoErrorKind::Timeout => 3,
        }
    }
}

/// Typisierter Geolocation-Fehler mit Code und Meldungstext.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Geolocation fehlgeschlagen (Code {code}): {message}")]
pub struct GeoLocationError {
    /// Eingeordnete Fehlerart
    pub kind: GeoErrorKind,
    /// Numerischer Fehlercode der Quelle
    pub code: u16,
    /// Meldungstext der Quelle
    pub message: String,
}

impl GeoLocationError {
    /// Erstellt einen Fehler aus Code und Meldung.
    pub fn from_code(code: u16, message: impl Into<String>) -> Self {
        Self {
            kind: GeoErrorKind::from_code(code),
            code,
            message: message.into(),
        }
    }

    /// Fehler für fehlende Geolocation-Fähigkeit.
    pub fn not_supported() -> Self {
        Self::from_code(0, "Geolocation not supported")
    }
}

/// Ergebnis einer Positionsabfrage.
pub type LocationResult = Result<GeoPoint, GeoLocationError>;

/// Zustand der Geräteposition aus Konsumenten-Sicht.
///
/// `Pending` bedeutet "noch nicht nutzbar": es wird keine
/// Ersatzkoordinate eingesetzt, die Karte zentriert erst nach Auflösung.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationState {
    /// Anfrage läuft noch
    #[default]
    Pending,
    /// Position wurde aufgelöst
    Resolved(GeoPoint),
    /// Anfrage ist fehlgeschlagen
    Failed(GeoLocationError),
}

impl LocationState {
    /// Aufgelöste Position, falls vorhanden.
    pub fn position(&self) -> Option<GeoPoint> {
        match self {
            LocationState::Resolved(position) => Some(*position),
            _ => None,
        }
    }

    /// Gibt `true` zurück, solange die Anfrage läuft.
    pub fn is_pending(&self) -> bool {
        matches!(self, LocationState::Pending)
    }

    /// Fehler, falls die Anfrage fehlgeschlagen ist.
    pub fn error(&self) -> Option<&GeoLocationError> {
        match self {
            LocationState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Einmalige Positionsquelle (Analogon zu `getCurrentPosition`).
///
/// Die Quelle darf beliebig lange brauchen; das Ergebnis kommt über den
/// übergebenen Sender. Die Ereignisschleife bleibt währenddessen
/// bedienbar und pollt den Empfänger pro Frame.
pub trait GeoLocationSource {
    /// Fordert die Position an und liefert das Ergebnis über `reply`.
    fn request(&self, reply: mpsc::Sender<LocationResult>);
}

/// Quelle mit fester, simulierter Position (verzögert geliefert).
pub struct StaticLocationSource {
    position: GeoPoint,
    delay: Duration,
}

impl StaticLocationSource {
    /// Quelle, die `position` nach kurzer Verzögerung liefert.
    pub fn new(position: GeoPoint) -> Self {
        Self {
            position,
            delay: Duration::from_millis(300),
        }
    }

    /// Quelle mit konfigurierbarer Verzögerung.
    pub fn with_delay(position: GeoPoint, delay: Duration) -> Self {
        Self { position, delay }
    }
}

impl GeoLocationSource for StaticLocationSource {
    fn request(&self, reply: mpsc::Sender<LocationResult>) {
        let position = self.position;
        let delay = self.delay;
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            // Empfänger kann bereits abgebaut sein (View unmounted)
            let _ = reply.send(Ok(position));
        });
    }
}

/// Quelle ohne Geolocation-Fähigkeit (liefert sofort Code 0).
pub struct UnsupportedLocationSource;

impl GeoLocationSource for UnsupportedLocationSource {
    fn request(&self, reply: mpsc::Sender<LocationResult>) {
        let _ = reply.send(Err(GeoLocationError::not_supported()));
    }
}

/// Hält die laufende Anfrage und liefert deren Ergebnis genau einmal.
pub struct LocationProvider {
    receiver: mpsc::Receiver<LocationResult>,
    delivered: bool,
}

impl LocationProvider {
    /// Startet eine Anfrage bei der übergebenen Quelle.
    pub fn request<S: GeoLocationSource>(source: &S) -> Self {
        let (sender, receiver) = mpsc::channel();
        source.request(sender);
        Self {
            receiver,
            delivered: false,
        }
    }

    /// Pollt das ausstehende Ergebnis (nicht blockierend).
    ///
    /// Liefert das Ergebnis genau einmal; danach immer `None`. Bricht die
    /// Quelle ab, ohne zu antworten, wird das als "Position nicht
    /// bestimmbar" gemeldet.
    pub fn poll(&mut self) -> Option<LocationResult> {
        if self.delivered {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.delivered = true;
                Some(result)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.delivered = true;
                Some(Err(GeoLocationError::from_code(
                    2,
                    "Geolocation-Quelle beendet ohne Antwort",
                )))
            }
        }
    }
}
