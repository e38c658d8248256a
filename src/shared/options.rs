//! Zentrale Konfiguration der Issue-Map.
//!
//! `MapOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::GeoPoint;

// ── Karte ───────────────────────────────────────────────────────────

/// Start-Zentrum, falls keine Geräteposition verfügbar ist (Aachen).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint::new(50.775, 6.083);
/// Start-Zoomstufe.
pub const DEFAULT_ZOOM: u8 = 10;
/// Minimale Zoomstufe.
pub const ZOOM_MIN: u8 = 2;
/// Maximale Zoomstufe.
pub const ZOOM_MAX: u8 = 19;
/// Tile-URL-Template des Standard-Hintergrunds.
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Attributionstext des Standard-Hintergrunds.
pub const DEFAULT_TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

// ── Upload ──────────────────────────────────────────────────────────

/// Fester Endpunkt des Foto-Uploads.
pub const DEFAULT_UPLOAD_ENDPOINT: &str = "http://localhost:3001/upload";

// ── Marker-Rendering ───────────────────────────────────────────────

/// Icon-Radius in Bildschirm-Pixeln.
pub const MARKER_RADIUS_PX: f32 = 6.0;
/// Treffer-Radius für Icon-Klicks in Bildschirm-Pixeln.
pub const MARKER_HIT_RADIUS_PX: f32 = 9.0;

/// Zur Laufzeit änderbare Optionen, als TOML neben der Binary abgelegt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// Start-Zentrum der Karte
    pub initial_center: GeoPoint,
    /// Start-Zoomstufe
    pub initial_zoom: u8,
    /// Tile-URL-Template des Hintergrunds
    pub tile_url: String,
    /// Attributionstext des Hintergrunds
    pub tile_attribution: String,
    /// Endpunkt des Foto-Uploads
    pub upload_endpoint: String,
    /// Simulierte Geräteposition (Desktop ohne Geolocation-Dienst);
    /// `None` meldet "Geolocation not supported"
    pub simulated_position: Option<GeoPoint>,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            initial_center: DEFAULT_CENTER,
            initial_zoom: DEFAULT_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            upload_endpoint: DEFAULT_UPLOAD_ENDPOINT.to_string(),
            simulated_position: None,
        }
    }
}

impl MapOptions {
    /// Lädt Optionen aus einer TOML-Datei; bei Fehlern Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("issue-map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("issue_map.toml")
    }
}
