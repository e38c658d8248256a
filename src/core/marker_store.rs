//! Geordneter Container aller festgeschriebenen Marker.

use super::category::IssueCategory;
use super::geo::GeoPoint;
use super::marker::IssueMarker;

/// Besitzt die geordnete Folge aller Marker und vergibt deren IDs.
///
/// Einfüge-Reihenfolge bleibt erhalten; die ID des N-ten Commits ist N
/// (1-basiert). Bei vorbefülltem Store wird ab dem Maximum der Seed-IDs
/// weitergezählt. IDs werden nie wiederverwendet.
#[derive(Debug, Clone)]
pub struct MarkerStore {
    markers: Vec<IssueMarker>,
    next_id: u64,
}

impl Default for MarkerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            next_id: 1,
        }
    }

    /// Erstellt einen Store mit vorhandenen Markern.
    /// Neue IDs setzen oberhalb des Seed-Maximums fort.
    pub fn with_markers(markers: Vec<IssueMarker>) -> Self {
        let next_id = markers.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self { markers, next_id }
    }

    /// Fügt einen neuen Marker an und gibt ihn zurück.
    ///
    /// Schlägt für wohlgeformte Eingaben nie fehl; Koordinaten außerhalb
    /// der geografischen Grenzen werden unverändert übernommen.
    pub fn append(
        &mut self,
        position: GeoPoint,
        category: IssueCategory,
        description: String,
    ) -> &IssueMarker {
        let marker = IssueMarker::new(self.next_id, position, category, description);
        self.next_id += 1;
        self.markers.push(marker);
        // push oben garantiert ein letztes Element
        &self.markers[self.markers.len() - 1]
    }

    /// Alle Marker in Einfüge-Reihenfolge.
    pub fn all(&self) -> &[IssueMarker] {
        &self.markers
    }

    /// Alle Marker einer Kategorie, in Einfüge-Reihenfolge.
    /// Wird bei jedem Aufruf aus `all()` abgeleitet (keine gecachte Partition).
    pub fn by_category(&self, category: IssueCategory) -> Vec<&IssueMarker> {
        self.markers
            .iter()
            .filter(|m| m.category == category)
            .collect()
    }

    /// Sucht einen Marker über seine ID.
    pub fn get(&self, id: u64) -> Option<&IssueMarker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Anzahl der Marker.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn der Store leer ist.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
