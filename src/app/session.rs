//! Zustandsmaschine der laufenden Marker-Erfassung.

use crate::core::{GeoPoint, IssueCategory};

/// Zum Commit freigegebene Erfassungsdaten.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCommit {
    /// Position des neuen Markers
    pub position: GeoPoint,
    /// Gewählte Kategorie
    pub category: IssueCategory,
    /// Beschreibungstext (darf leer sein)
    pub description: String,
}

/// Transienter Zustand vor dem Festschreiben eines Markers.
///
/// Zwei Zustände: `Idle` (keine Kategorie gewählt) und
/// `CategorySelected`. Erst ein erfolgreicher Commit oder ein Abbruch
/// führt zurück nach `Idle`; der Beschreibungsentwurf wird dabei geleert.
/// Der Store wird von der Session nie direkt angefasst — `take_commit`
/// liefert nur die Daten, das Anfügen übernimmt der Commit-Handler.
#[derive(Debug, Clone, Default)]
pub struct MarkerCreationSession {
    selected_category: Option<IssueCategory>,
    description_draft: String,
}

impl MarkerCreationSession {
    /// Erstellt eine Session im `Idle`-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wählt eine Kategorie; `None` (Platzhalter-Option) führt nach `Idle`.
    pub fn select_category(&mut self, category: Option<IssueCategory>) {
        self.selected_category = category;
    }

    /// Aktualisiert den Beschreibungsentwurf, ohne den Kategorie-Zustand
    /// zu verändern.
    pub fn edit_description(&mut self, text: impl Into<String>) {
        self.description_draft = text.into();
    }

    /// Gewählte Kategorie, falls vorhanden.
    pub fn selected_category(&self) -> Option<IssueCategory> {
        self.selected_category
    }

    /// Aktueller Beschreibungsentwurf.
    pub fn description_draft(&self) -> &str {
        &self.description_draft
    }

    /// Gibt `true` zurück, wenn keine Kategorie gewählt ist.
    pub fn is_idle(&self) -> bool {
        self.selected_category.is_none()
    }

    /// Commit-Guard: liefert die Erfassungsdaten nur, wenn eine Kategorie
    /// gewählt ist, und setzt die Session dabei auf `Idle` zurück.
    ///
    /// Ohne gewählte Kategorie bleibt die Session unverändert und es wird
    /// `None` geliefert — ein Karten-Klick ohne Kategorie erzeugt nie
    /// einen Marker.
    pub fn take_commit(&mut self, position: GeoPoint) -> Option<PendingCommit> {
        let category = self.selected_category.take()?;
        let description = std::mem::take(&mut self.description_draft);
        Some(PendingCommit {
            position,
            category,
            description,
        })
    }

    /// Bricht die Erfassung ab: zurück nach `Idle`, Entwurf geleert.
    pub fn cancel(&mut self) {
        self.selected_category = None;
        self.description_draft.clear();
    }
}
