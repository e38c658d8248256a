//! Schnittstelle zur externen Karten-Renderfläche.

use crate::core::{CategoryColor, GeoPoint};

/// Handle auf eine Layer-Gruppe der Renderfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub u32);

/// Eingabe-Ereignisse der Renderfläche.
///
/// Statt Callback-Registrierung (wie im Browser) werden Ereignisse pro
/// Frame gesammelt und über [`MapSurface::take_events`] abgeholt; das
/// passt zum kooperativen, single-threaded Ereignismodell.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// Klick auf freie Kartenfläche
    Clicked {
        /// Geografische Position des Klicks
        position: GeoPoint,
    },
    /// Klick auf ein gezeichnetes Marker-Icon
    MarkerClicked {
        /// ID des angeklickten Markers
        marker_id: u64,
    },
}

/// Externe Karten-Renderfläche (Tile-Engine, Projektion, Layer-Control).
///
/// Pan/Zoom, Tile-Beschaffung und die native Sichtbarkeitssteuerung der
/// Layer gehören der Implementierung; dieser Trait beschreibt nur die
/// Operationen, die der Issue-Layer benötigt. Die Instanz ist eine
/// gescopte Ressource: `destroy` gibt alle Layer und Handler frei und
/// muss vor einer Neuerstellung aufgerufen worden sein.
pub trait MapSurface {
    /// Setzt Zentrum und Zoomstufe der Karte.
    fn set_view(&mut self, center: GeoPoint, zoom: u8);

    /// Fügt den Tile-Hintergrund mit Attributionstext hinzu.
    fn add_tile_background(&mut self, url_template: &str, attribution: &str);

    /// Erstellt eine leere, noch nicht angehängte Layer-Gruppe.
    fn create_layer(&mut self, name: &str) -> LayerId;

    /// Hängt eine Layer-Gruppe an die Karte.
    /// Wirkungslos, wenn die Gruppe bereits angehängt ist.
    fn attach_layer(&mut self, layer: LayerId);

    /// Entfernt eine Layer-Gruppe von der Karte.
    fn remove_layer(&mut self, layer: LayerId);

    /// Leert eine Layer-Gruppe.
    /// Wirkungslos, wenn die Gruppe bereits leer ist.
    fn clear_layer(&mut self, layer: LayerId);

    /// Zeichnet ein Marker-Icon in eine Layer-Gruppe.
    ///
    /// `popup_html` wird beim Anklicken des Icons angezeigt; Klicks auf
    /// das Icon werden als [`SurfaceEvent::MarkerClicked`] mit
    /// `marker_id` gemeldet.
    fn add_marker_icon(
        &mut self,
        layer: LayerId,
        position: GeoPoint,
        color: CategoryColor,
        popup_html: &str,
        marker_id: u64,
    );

    /// Holt die seit dem letzten Aufruf aufgelaufenen Ereignisse ab.
    fn take_events(&mut self) -> Vec<SurfaceEvent>;

    /// Gibt die Karteninstanz mit allen Layern und Handlern frei.
    fn destroy(&mut self);
}
