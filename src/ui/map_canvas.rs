//! Egui-gezeichnete Karten-Renderfläche.
//!
//! Stand-in für eine echte Tile-Engine: flacher Hintergrund mit
//! Attribution, Marker-Icons als farbige Kreise, Klick-Popups und eine
//! Layer-Sichtbarkeitssteuerung als Checkbox-Leiste. Die Projektion ist
//! bewusst eine einfache Grad-zu-Pixel-Abbildung um das Kartenzentrum;
//! exakte Kartenprojektion liegt außerhalb dieses Teilsystems.

use crate::core::{CategoryColor, GeoPoint};
use crate::render::{LayerId, MapSurface, SurfaceEvent};
use crate::shared::options::{MARKER_HIT_RADIUS_PX, MARKER_RADIUS_PX, ZOOM_MAX, ZOOM_MIN};

/// Ein in eine Layer-Gruppe gezeichnetes Icon.
#[derive(Debug, Clone)]
struct IconInstance {
    position: GeoPoint,
    color: CategoryColor,
    popup_html: String,
    marker_id: u64,
}

/// Eine Layer-Gruppe der Leinwand.
#[derive(Debug, Clone)]
struct CanvasLayer {
    id: LayerId,
    name: String,
    icons: Vec<IconInstance>,
    attached: bool,
    /// Sichtbarkeit über die Layer-Control (angehängt, aber ausgeblendet)
    visible: bool,
}

/// Egui-Implementierung der [`MapSurface`].
pub struct MapCanvas {
    center: GeoPoint,
    zoom: f64,
    tile_attribution: Option<String>,
    layers: Vec<CanvasLayer>,
    next_layer_id: u32,
    pending_events: Vec<SurfaceEvent>,
    open_popup: Option<u64>,
    destroyed: bool,
}

impl MapCanvas {
    /// Erstellt eine leere Leinwand (Sicht wird vom Renderer gesetzt).
    pub fn new() -> Self {
        Self {
            center: GeoPoint::new(0.0, 0.0),
            zoom: 10.0,
            tile_attribution: None,
            layers: Vec::new(),
            next_layer_id: 0,
            pending_events: Vec::new(),
            open_popup: None,
            destroyed: false,
        }
    }

    /// Pixel pro Grad bei der aktuellen Zoomstufe.
    fn pixels_per_degree(&self) -> f64 {
        256.0 * self.zoom.exp2() / 360.0
    }

    fn to_screen(&self, rect: egui::Rect, position: GeoPoint) -> egui::Pos2 {
        let ppd = self.pixels_per_degree();
        let center = rect.center();
        egui::pos2(
            center.x + ((position.lng - self.center.lng) * ppd) as f32,
            center.y - ((position.lat - self.center.lat) * ppd) as f32,
        )
    }

    fn to_geo(&self, rect: egui::Rect, pos: egui::Pos2) -> GeoPoint {
        let ppd = self.pixels_per_degree();
        let center = rect.center();
        GeoPoint::new(
            self.center.lat - f64::from(pos.y - center.y) / ppd,
            self.center.lng + f64::from(pos.x - center.x) / ppd,
        )
    }

    /// Sucht das oberste sichtbare Icon unter `pos`.
    fn icon_at(&self, rect: egui::Rect, pos: egui::Pos2) -> Option<&IconInstance> {
        self.layers
            .iter()
            .filter(|layer| layer.attached && layer.visible)
            .flat_map(|layer| layer.icons.iter())
            .filter(|icon| self.to_screen(rect, icon.position).distance(pos) <= MARKER_HIT_RADIUS_PX)
            .last()
    }

    fn layer_mut(&mut self, id: LayerId) -> Option<&mut CanvasLayer> {
        self.layers.iter_mut().find(|layer| layer.id == id)
    }

    /// Rendert die Checkbox-Leiste der Layer-Sichtbarkeit.
    pub fn layer_control_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Layer:");
            for layer in &mut self.layers {
                if layer.attached {
                    ui.checkbox(&mut layer.visible, layer.name.as_str());
                }
            }
        });
    }

    /// Zeichnet die Kartenfläche und sammelt Klick-Ereignisse ein.
    ///
    /// Klicks werden hier konsumiert und nur als [`SurfaceEvent`]
    /// gemeldet; sie lösen kein Kartenscrollen oder andere
    /// Standard-Reaktionen aus.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        if self.destroyed {
            return;
        }

        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;

        // Hintergrund (Tile-Fläche)
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(224, 222, 212));
        if let Some(attribution) = &self.tile_attribution {
            painter.text(
                rect.left_bottom() + egui::vec2(4.0, -4.0),
                egui::Align2::LEFT_BOTTOM,
                attribution,
                egui::FontId::proportional(10.0),
                egui::Color32::DARK_GRAY,
            );
        }

        // Pan per Drag, Zoom per Mausrad
        if response.dragged() {
            let ppd = self.pixels_per_degree();
            let delta = response.drag_delta();
            self.center.lng -= f64::from(delta.x) / ppd;
            self.center.lat += f64::from(delta.y) / ppd;
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let step = if scroll > 0.0 { 0.25 } else { -0.25 };
                self.zoom = (self.zoom + step).clamp(f64::from(ZOOM_MIN), f64::from(ZOOM_MAX));
            }
        }

        // Icons der angehängten, sichtbaren Layer in Layer-Reihenfolge
        for layer in &self.layers {
            if !(layer.attached && layer.visible) {
                continue;
            }
            for icon in &layer.icons {
                let pos = self.to_screen(rect, icon.position);
                if !rect.contains(pos) {
                    continue;
                }
                let color = egui::Color32::from_rgb(icon.color[0], icon.color[1], icon.color[2]);
                painter.circle_filled(pos, MARKER_RADIUS_PX, color);
                painter.circle_stroke(
                    pos,
                    MARKER_RADIUS_PX,
                    egui::Stroke::new(1.0, egui::Color32::BLACK),
                );
            }
        }

        // Klick: Icon-Treffer vor freier Fläche
        if response.clicked() {
            if let Some(click_pos) = response.interact_pointer_pos() {
                let hit = self.icon_at(rect, click_pos).map(|icon| icon.marker_id);
                match hit {
                    Some(marker_id) => {
                        self.open_popup = Some(marker_id);
                        self.pending_events
                            .push(SurfaceEvent::MarkerClicked { marker_id });
                    }
                    None => {
                        self.open_popup = None;
                        self.pending_events.push(SurfaceEvent::Clicked {
                            position: self.to_geo(rect, click_pos),
                        });
                    }
                }
            }
        }

        self.draw_popup(&painter, rect);
    }

    /// Zeichnet das Popup des zuletzt angeklickten Icons.
    fn draw_popup(&self, painter: &egui::Painter, rect: egui::Rect) {
        let Some(marker_id) = self.open_popup else {
            return;
        };
        let Some(icon) = self
            .layers
            .iter()
            .flat_map(|layer| layer.icons.iter())
            .find(|icon| icon.marker_id == marker_id)
        else {
            return;
        };

        let anchor = self.to_screen(rect, icon.position) + egui::vec2(10.0, -10.0);
        let galley = painter.layout_no_wrap(
            popup_text(&icon.popup_html),
            egui::FontId::proportional(12.0),
            egui::Color32::BLACK,
        );
        let popup_rect =
            egui::Rect::from_min_size(anchor, galley.size() + egui::vec2(12.0, 8.0));
        painter.rect_filled(popup_rect, 4.0, egui::Color32::WHITE);
        painter.rect_stroke(
            popup_rect,
            4.0,
            egui::Stroke::new(1.0, egui::Color32::GRAY),
            egui::StrokeKind::Outside,
        );
        painter.galley(anchor + egui::vec2(6.0, 4.0), galley, egui::Color32::BLACK);
    }
}

impl Default for MapCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl MapSurface for MapCanvas {
    fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        self.center = center;
        self.zoom = f64::from(zoom.clamp(ZOOM_MIN, ZOOM_MAX));
    }

    fn add_tile_background(&mut self, _url_template: &str, attribution: &str) {
        // Die Leinwand holt keine Tiles; sie zeigt Fläche und Attribution.
        self.tile_attribution = Some(attribution.to_string());
    }

    fn create_layer(&mut self, name: &str) -> LayerId {
        let id = LayerId(self.next_layer_id);
        self.next_layer_id += 1;
        self.layers.push(CanvasLayer {
            id,
            name: name.to_string(),
            icons: Vec::new(),
            attached: false,
            visible: true,
        });
        id
    }

    fn attach_layer(&mut self, layer: LayerId) {
        if let Some(layer) = self.layer_mut(layer) {
            layer.attached = true;
        }
    }

    fn remove_layer(&mut self, layer: LayerId) {
        if let Some(layer) = self.layer_mut(layer) {
            layer.attached = false;
        }
    }

    fn clear_layer(&mut self, layer: LayerId) {
        if let Some(layer) = self.layer_mut(layer) {
            layer.icons.clear();
        }
    }

    fn add_marker_icon(
        &mut self,
        layer: LayerId,
        position: GeoPoint,
        color: CategoryColor,
        popup_html: &str,
        marker_id: u64,
    ) {
        if let Some(layer) = self.layer_mut(layer) {
            layer.icons.push(IconInstance {
                position,
                color,
                popup_html: popup_html.to_string(),
                marker_id,
            });
        }
    }

    fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn destroy(&mut self) {
        self.layers.clear();
        self.pending_events.clear();
        self.open_popup = None;
        self.destroyed = true;
    }
}

/// Reduziert den Popup-HTML-Inhalt auf anzeigbaren Text.
fn popup_text(html: &str) -> String {
    html.replace("</h1>", "\n")
        .replace("</p>", "\n")
        .replace("<h1>", "")
        .replace("<p>", "")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_text_strips_markup() {
        assert_eq!(popup_text("<h1>Issue 3</h1><p>pothole</p>"), "Issue 3\npothole");
        assert_eq!(popup_text("<h1>Issue 1</h1><p></p>"), "Issue 1");
    }

    #[test]
    fn test_attach_and_clear_are_idempotent() {
        let mut canvas = MapCanvas::new();
        let layer = canvas.create_layer("Road");

        canvas.attach_layer(layer);
        canvas.attach_layer(layer);
        canvas.clear_layer(layer);
        canvas.clear_layer(layer);

        canvas.add_marker_icon(layer, GeoPoint::new(1.0, 2.0), [1, 2, 3], "<p>x</p>", 1);
        canvas.clear_layer(layer);
        canvas.add_marker_icon(layer, GeoPoint::new(1.0, 2.0), [1, 2, 3], "<p>x</p>", 1);
        assert_eq!(canvas.layers[0].icons.len(), 1);
    }

    #[test]
    fn test_destroy_releases_layers_and_events() {
        let mut canvas = MapCanvas::new();
        let layer = canvas.create_layer("Light");
        canvas.attach_layer(layer);
        canvas.destroy();

        assert!(canvas.layers.is_empty());
        assert!(canvas.take_events().is_empty());
    }
}
