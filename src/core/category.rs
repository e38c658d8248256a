//! Issue-Kategorien und deren Anzeigefarben.
//!
//! Die Farbzuordnung ist total: jeder Eingabe-String liefert eine
//! definierte Farbe, unbekannte Kategorien fallen auf Schwarz zurück.
//! Der Renderer kann dadurch nie an einer Kategorie scheitern.

/// Anzeigefarbe als RGB-Tripel (0-255).
pub type CategoryColor = [u8; 3];

/// Farbe für Straßenschäden (Rot).
pub const COLOR_ROAD: CategoryColor = [200, 40, 40];
/// Farbe für defekte Beleuchtung (Gelb).
pub const COLOR_LIGHT: CategoryColor = [230, 190, 0];
/// Farbe für Überflutung (Blau).
pub const COLOR_FLOAT: CategoryColor = [40, 90, 200];
/// Farbe für Wartungsbedarf (Grün).
pub const COLOR_MAINTENANCE: CategoryColor = [40, 160, 70];
/// Standardfarbe für unbekannte Kategorien (Schwarz).
pub const COLOR_DEFAULT: CategoryColor = [0, 0, 0];

/// Feste Menge der meldbaren Problem-Kategorien.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IssueCategory {
    /// Straßenschaden (Schlagloch, Riss, Absenkung)
    Road,
    /// Defekte Straßenbeleuchtung
    Light,
    /// Überflutung / stehendes Wasser
    Float,
    /// Allgemeiner Wartungsbedarf
    Maintenance,
    /// Keine erkannte Kategorie
    #[default]
    Unspecified,
}

impl IssueCategory {
    /// Alle Kategorien, in Layer-Reihenfolge.
    pub const ALL: [IssueCategory; 5] = [
        IssueCategory::Road,
        IssueCategory::Light,
        IssueCategory::Float,
        IssueCategory::Maintenance,
        IssueCategory::Unspecified,
    ];

    /// Die im Auswahlfeld anbietbaren Kategorien (ohne `Unspecified`).
    pub const SELECTABLE: [IssueCategory; 4] = [
        IssueCategory::Road,
        IssueCategory::Light,
        IssueCategory::Float,
        IssueCategory::Maintenance,
    ];

    /// Anzeigename der Kategorie.
    pub fn label(self) -> &'static str {
        match self {
            IssueCategory::Road => "Road",
            IssueCategory::Light => "Light",
            IssueCategory::Float => "Float",
            IssueCategory::Maintenance => "Maintenance",
            IssueCategory::Unspecified => "Unspecified",
        }
    }

    /// Ordnet einem Kategorie-String eine Kategorie zu.
    /// Total: unbekannte Strings (auch der leere) ergeben `Unspecified`.
    pub fn parse(label: &str) -> IssueCategory {
        match label {
            "Road" => IssueCategory::Road,
            "Light" => IssueCategory::Light,
            "Float" => IssueCategory::Float,
            "Maintenance" => IssueCategory::Maintenance,
            _ => IssueCategory::Unspecified,
        }
    }

    /// Anzeigefarbe der Kategorie.
    pub fn color(self) -> CategoryColor {
        match self {
            IssueCategory::Road => COLOR_ROAD,
            IssueCategory::Light => COLOR_LIGHT,
            IssueCategory::Float => COLOR_FLOAT,
            IssueCategory::Maintenance => COLOR_MAINTENANCE,
            IssueCategory::Unspecified => COLOR_DEFAULT,
        }
    }
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Liefert die Anzeigefarbe für einen beliebigen Kategorie-String.
/// Keine Fehlerpfade: unbekannte Strings ergeben die Standardfarbe.
pub fn color_for(label: &str) -> CategoryColor {
    IssueCategory::parse(label).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_is_total() {
        for category in IssueCategory::ALL {
            assert_eq!(color_for(category.label()), category.color());
        }
        assert_eq!(color_for(""), COLOR_DEFAULT);
        assert_eq!(color_for("Kanaldeckel"), COLOR_DEFAULT);
        assert_eq!(color_for("road"), COLOR_DEFAULT);
    }

    #[test]
    fn test_parse_roundtrip_for_known_labels() {
        for category in IssueCategory::SELECTABLE {
            assert_eq!(IssueCategory::parse(category.label()), category);
        }
        assert_eq!(IssueCategory::parse(""), IssueCategory::Unspecified);
    }
}
