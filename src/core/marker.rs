//! Festgeschriebene Issue-Marker.

use super::category::IssueCategory;
use super::geo::GeoPoint;

/// Ein festgeschriebener, geogetaggter Issue-Report.
///
/// Entsteht ausschließlich über [`MarkerStore::append`] und ist danach
/// unveränderlich. Ein Einzel-Löschen existiert nicht; Marker leben bis
/// zum Abbau des Stores.
///
/// [`MarkerStore::append`]: super::marker_store::MarkerStore::append
#[derive(Debug, Clone, PartialEq)]
pub struct IssueMarker {
    /// Eindeutige ID, 1-basiert, monoton in Commit-Reihenfolge vergeben
    pub id: u64,
    /// Position des Reports
    pub position: GeoPoint,
    /// Kategorie
    pub category: IssueCategory,
    /// Freitext-Beschreibung (darf leer sein)
    pub description: String,
}

impl IssueMarker {
    /// Erstellt einen Marker. Nur vom Store aufzurufen.
    pub(crate) fn new(
        id: u64,
        position: GeoPoint,
        category: IssueCategory,
        description: String,
    ) -> Self {
        Self {
            id,
            position,
            category,
            description,
        }
    }

    /// Popup-Inhalt für die Karten-Anzeige.
    pub fn popup_html(&self) -> String {
        format!("<h1>Issue {}</h1><p>{}</p>", self.id, self.description)
    }
}
