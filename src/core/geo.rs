//! Geografische Koordinaten (WGS84, Grad).

use serde::{Deserialize, Serialize};

/// Breiten-/Längengrad-Paar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad in Grad (-90..90)
    pub lat: f64,
    /// Längengrad in Grad (-180..180)
    pub lng: f64,
}

impl GeoPoint {
    /// Erstellt einen Punkt aus Breiten- und Längengrad.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Prüft, ob der Punkt innerhalb der gültigen geografischen Grenzen liegt.
    ///
    /// Der Store akzeptiert auch Punkte außerhalb; die Validierung liegt
    /// bei den Koordinaten-Lieferanten (Karten-Klick, Geolocation).
    pub fn is_in_bounds(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lng)
    }
}
