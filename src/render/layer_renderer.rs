//! Kategorie-partitionierte Marker-Layer auf der Karten-Renderfläche.

use super::surface::{LayerId, MapSurface, SurfaceEvent};
use crate::core::{IssueCategory, MarkerStore};

/// Hält je Kategorie eine eigene Layer-Gruppe und synchronisiert deren
/// Inhalt nach jeder Store-Änderung.
///
/// Besitzt die Renderfläche exklusiv (gescopte Ressource): beim Drop wird
/// die Karteninstanz freigegeben, damit bei einem Re-Mount nie zwei
/// lebende Instanzen existieren.
pub struct LayeredMapRenderer<S: MapSurface> {
    surface: S,
    layers: Vec<(IssueCategory, LayerId)>,
}

impl<S: MapSurface> LayeredMapRenderer<S> {
    /// Initialisiert Sicht, Tile-Hintergrund und die Kategorie-Layer.
    pub fn new(
        mut surface: S,
        center: crate::core::GeoPoint,
        zoom: u8,
        tile_url: &str,
        attribution: &str,
    ) -> Self {
        surface.set_view(center, zoom);
        surface.add_tile_background(tile_url, attribution);

        let layers = IssueCategory::ALL
            .iter()
            .map(|&category| (category, surface.create_layer(category.label())))
            .collect();

        Self { surface, layers }
    }

    /// Setzt Zentrum und Zoomstufe der Karte neu.
    pub fn set_view(&mut self, center: crate::core::GeoPoint, zoom: u8) {
        self.surface.set_view(center, zoom);
    }

    /// Baut alle Kategorie-Layer aus dem Store neu auf (Clear-and-Rebuild).
    ///
    /// Protokoll: erst alle Layer leeren, dann je Marker in
    /// Store-Reihenfolge ein Icon in den Layer seiner Kategorie zeichnen,
    /// zuletzt alle Layer anhängen. Zweimaliges Synchronisieren ohne
    /// Store-Änderung erzeugt denselben Icon-Bestand.
    pub fn sync(&mut self, store: &MarkerStore) {
        for &(_, layer) in &self.layers {
            self.surface.clear_layer(layer);
        }

        for marker in store.all() {
            let Some(layer) = self.layer_for(marker.category) else {
                continue;
            };
            self.surface.add_marker_icon(
                layer,
                marker.position,
                marker.category.color(),
                &marker.popup_html(),
                marker.id,
            );
        }

        for &(_, layer) in &self.layers {
            self.surface.attach_layer(layer);
        }
    }

    /// Holt aufgelaufene Eingabe-Ereignisse der Renderfläche ab.
    pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
        self.surface.take_events()
    }

    /// Read-only-Zugriff auf die Renderfläche.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutabler Zugriff auf die Renderfläche (für das UI-Hosting).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Layer-Gruppe einer Kategorie.
    pub fn layer_for(&self, category: IssueCategory) -> Option<LayerId> {
        self.layers
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, layer)| *layer)
    }
}

impl<S: MapSurface> Drop for LayeredMapRenderer<S> {
    fn drop(&mut self) {
        self.surface.destroy();
    }
}
