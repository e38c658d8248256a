//! Read-only-Zusammenfassung der gemeldeten Issues.

use indexmap::IndexMap;

use super::category::IssueCategory;
use super::marker_store::MarkerStore;

/// Aggregation des Marker-Stores: Anzahl und Beschreibungen je Kategorie.
///
/// Reine Projektion ohne eigenen Zustand; wird bei jeder Store-Änderung
/// vollständig neu berechnet. Kategorien erscheinen in der Reihenfolge
/// ihres ersten Auftretens im Store.
#[derive(Debug, Clone, Default)]
pub struct IssueSummary {
    counts: IndexMap<IssueCategory, usize>,
    descriptions: IndexMap<IssueCategory, Vec<String>>,
}

impl IssueSummary {
    /// Berechnet die Zusammenfassung aus dem aktuellen Store-Inhalt.
    pub fn from_store(store: &MarkerStore) -> Self {
        let mut counts: IndexMap<IssueCategory, usize> = IndexMap::new();
        let mut descriptions: IndexMap<IssueCategory, Vec<String>> = IndexMap::new();

        for marker in store.all() {
            *counts.entry(marker.category).or_insert(0) += 1;
            descriptions
                .entry(marker.category)
                .or_default()
                .push(marker.description.clone());
        }

        Self {
            counts,
            descriptions,
        }
    }

    /// Anzahl der Meldungen je Kategorie, in Erst-Auftritts-Reihenfolge.
    pub fn counts(&self) -> &IndexMap<IssueCategory, usize> {
        &self.counts
    }

    /// Beschreibungen einer Kategorie, in Commit-Reihenfolge.
    pub fn descriptions_for(&self, category: IssueCategory) -> &[String] {
        self.descriptions
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Gesamtzahl aller Meldungen.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Gibt `true` zurück, wenn keine Meldungen vorliegen.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::GeoPoint;

    #[test]
    fn test_summary_groups_counts_and_descriptions() {
        let mut store = MarkerStore::new();
        store.append(GeoPoint::new(1.0, 1.0), IssueCategory::Light, "broken lamp".into());
        store.append(GeoPoint::new(2.0, 2.0), IssueCategory::Road, "pothole".into());
        store.append(GeoPoint::new(3.0, 3.0), IssueCategory::Light, "flickering".into());

        let summary = IssueSummary::from_store(&store);
        assert_eq!(summary.counts().get(&IssueCategory::Light), Some(&2));
        assert_eq!(summary.counts().get(&IssueCategory::Road), Some(&1));
        assert_eq!(
            summary.descriptions_for(IssueCategory::Light),
            ["broken lamp".to_string(), "flickering".to_string()]
        );
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let mut store = MarkerStore::new();
        store.append(GeoPoint::new(1.0, 1.0), IssueCategory::Maintenance, String::new());
        store.append(GeoPoint::new(2.0, 2.0), IssueCategory::Road, String::new());
        store.append(GeoPoint::new(3.0, 3.0), IssueCategory::Maintenance, String::new());

        let summary = IssueSummary::from_store(&store);
        let order: Vec<IssueCategory> = summary.counts().keys().copied().collect();
        assert_eq!(order, [IssueCategory::Maintenance, IssueCategory::Road]);
    }

    #[test]
    fn test_empty_store_yields_empty_summary() {
        let summary = IssueSummary::from_store(&MarkerStore::new());
        assert!(summary.is_empty());
        assert_eq!(summary.total(), 0);
        assert!(summary.descriptions_for(IssueCategory::Road).is_empty());
    }
}
