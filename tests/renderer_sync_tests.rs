//! Tests des Layer-Resynchronisationsprotokolls gegen eine
//! aufzeichnende Renderflächen-Attrappe.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use issue_map::{
    CategoryColor, GeoPoint, IssueCategory, LayerId, LayeredMapRenderer, MapSurface, MarkerStore,
    SurfaceEvent,
};

/// Aufgezeichnetes Icon.
#[derive(Debug, Clone, PartialEq)]
struct RecordedIcon {
    marker_id: u64,
    position: GeoPoint,
    color: CategoryColor,
    popup_html: String,
}

/// Beobachtbarer Zustand der Attrappe, überlebt den Renderer-Drop.
#[derive(Default)]
struct SurfaceLog {
    view: Option<(GeoPoint, u8)>,
    tile_backgrounds: Vec<(String, String)>,
    layer_names: BTreeMap<u32, String>,
    icons: BTreeMap<u32, Vec<RecordedIcon>>,
    attached: BTreeMap<u32, bool>,
    destroy_calls: u32,
}

#[derive(Default)]
struct RecordingSurface {
    log: Rc<RefCell<SurfaceLog>>,
    next_layer: u32,
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    fn new() -> (Self, Rc<RefCell<SurfaceLog>>) {
        let surface = Self::default();
        let log = surface.log.clone();
        (surface, log)
    }
}

impl MapSurface for RecordingSurface {
    fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        self.log.borrow_mut().view = Some((center, zoom));
    }

    fn add_tile_background(&mut self, url_template: &str, attribution: &str) {
        self.log
            .borrow_mut()
            .tile_backgrounds
            .push((url_template.to_string(), attribution.to_string()));
    }

    fn create_layer(&mut self, name: &str) -> LayerId {
        let id = self.next_layer;
        self.next_layer += 1;
        let mut log = self.log.borrow_mut();
        log.layer_names.insert(id, name.to_string());
        log.icons.insert(id, Vec::new());
        log.attached.insert(id, false);
        LayerId(id)
    }

    fn attach_layer(&mut self, layer: LayerId) {
        self.log.borrow_mut().attached.insert(layer.0, true);
    }

    fn remove_layer(&mut self, layer: LayerId) {
        self.log.borrow_mut().attached.insert(layer.0, false);
    }

    fn clear_layer(&mut self, layer: LayerId) {
        if let Some(icons) = self.log.borrow_mut().icons.get_mut(&layer.0) {
            icons.clear();
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
        if let Some(icons) = self.log.borrow_mut().icons.get_mut(&layer.0) {
            icons.push(RecordedIcon {
                marker_id,
                position,
                color,
                popup_html: popup_html.to_string(),
            });
        }
    }

    fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    fn destroy(&mut self) {
        self.log.borrow_mut().destroy_calls += 1;
    }
}

fn new_renderer() -> (LayeredMapRenderer<RecordingSurface>, Rc<RefCell<SurfaceLog>>) {
    let (surface, log) = RecordingSurface::new();
    let renderer = LayeredMapRenderer::new(
        surface,
        GeoPoint::new(50.775, 6.083),
        10,
        "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        "© OpenStreetMap contributors",
    );
    (renderer, log)
}

#[test]
fn test_construction_sets_view_tiles_and_category_layers() {
    let (renderer, log) = new_renderer();
    let log = log.borrow();

    assert_eq!(log.view, Some((GeoPoint::new(50.775, 6.083), 10)));
    assert_eq!(log.tile_backgrounds.len(), 1);
    assert_eq!(log.layer_names.len(), IssueCategory::ALL.len());

    for category in IssueCategory::ALL {
        let layer = renderer
            .layer_for(category)
            .expect("Jede Kategorie braucht einen Layer");
        assert_eq!(log.layer_names.get(&layer.0), Some(&category.label().to_string()));
    }
}

#[test]
fn test_sync_partitions_markers_by_category() {
    let (mut renderer, log) = new_renderer();

    let mut store = MarkerStore::new();
    store.append(GeoPoint::new(1.0, 1.0), IssueCategory::Road, "pothole".into());
    store.append(GeoPoint::new(2.0, 2.0), IssueCategory::Light, "dark".into());
    store.append(GeoPoint::new(3.0, 3.0), IssueCategory::Road, "crack".into());

    renderer.sync(&store);

    let road_layer = renderer.layer_for(IssueCategory::Road).unwrap();
    let light_layer = renderer.layer_for(IssueCategory::Light).unwrap();
    let float_layer = renderer.layer_for(IssueCategory::Float).unwrap();

    let log = log.borrow();
    let road_ids: Vec<u64> = log.icons[&road_layer.0].iter().map(|i| i.marker_id).collect();
    assert_eq!(road_ids, [1, 3]);
    let light_ids: Vec<u64> = log.icons[&light_layer.0].iter().map(|i| i.marker_id).collect();
    assert_eq!(light_ids, [2]);
    assert!(log.icons[&float_layer.0].is_empty());

    // Icon trägt Registry-Farbe und Popup mit ID und Beschreibung
    let first = &log.icons[&road_layer.0][0];
    assert_eq!(first.color, IssueCategory::Road.color());
    assert_eq!(first.popup_html, "<h1>Issue 1</h1><p>pothole</p>");

    // Alle Layer sind nach dem Sync angehängt
    assert!(log.attached.values().all(|&attached| attached));
}

#[test]
fn test_sync_twice_without_change_is_idempotent() {
    let (mut renderer, log) = new_renderer();

    let mut store = MarkerStore::new();
    store.append(GeoPoint::new(1.0, 1.0), IssueCategory::Maintenance, "Bank".into());
    store.append(GeoPoint::new(2.0, 2.0), IssueCategory::Float, "Pfütze".into());

    renderer.sync(&store);
    let first_pass = log.borrow().icons.clone();

    renderer.sync(&store);
    let second_pass = log.borrow().icons.clone();

    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_sync_reflects_store_growth() {
    let (mut renderer, log) = new_renderer();
    let mut store = MarkerStore::new();

    renderer.sync(&store);
    assert!(log.borrow().icons.values().all(|icons| icons.is_empty()));

    store.append(GeoPoint::new(1.0, 1.0), IssueCategory::Road, String::new());
    renderer.sync(&store);

    let total: usize = log.borrow().icons.values().map(|icons| icons.len()).sum();
    assert_eq!(total, 1);
}

#[test]
fn test_drop_destroys_surface_exactly_once() {
    let (renderer, log) = new_renderer();
    assert_eq!(log.borrow().destroy_calls, 0);

    drop(renderer);
    assert_eq!(log.borrow().destroy_calls, 1);
}
