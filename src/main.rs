//! Issue Map.
//!
//! Karten-gestützte Erfassung von Infrastruktur-Problemen: Kategorie
//! wählen, Beschreibung eingeben, Punkt per Karten-Klick oder an der
//! Geräteposition festschreiben.

use eframe::egui;
use issue_map::{
    ui, AppController, AppIntent, AppState, LayeredMapRenderer, LocationProvider, MapOptions,
    StaticLocationSource, SurfaceEvent, UnsupportedLocationSource,
};

fn main() -> Result<(), eframe::Error> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Issue Map v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("Issue Map"),
        ..Default::default()
    };

    eframe::run_native(
        "Issue Map",
        options,
        Box::new(|_cc| Ok(Box::new(IssueMapApp::new()))),
    )
}

/// Haupt-Anwendungsstruktur.
struct IssueMapApp {
    state: AppState,
    controller: AppController,
    /// Gescopte Karten-Ressource: Drop gibt die Leinwand-Instanz frei
    renderer: LayeredMapRenderer<ui::MapCanvas>,
    location: LocationProvider,
}

impl IssueMapApp {
    fn new() -> Self {
        let map_options = MapOptions::load_from_file(&MapOptions::config_path());
        let state = AppState::with_options(map_options.clone());

        let renderer = LayeredMapRenderer::new(
            ui::MapCanvas::new(),
            map_options.initial_center,
            map_options.initial_zoom,
            &map_options.tile_url,
            &map_options.tile_attribution,
        );

        // Eine Positionsanfrage pro Mount, kein Retry
        let location = match map_options.simulated_position {
            Some(position) => LocationProvider::request(&StaticLocationSource::new(position)),
            None => LocationProvider::request(&UnsupportedLocationSource),
        };

        Self {
            state,
            controller: AppController::new(),
            renderer,
            location,
        }
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

impl eframe::App for IssueMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = Vec::new();

        // Einmaliges Geolocation-Ergebnis einsammeln
        if let Some(result) = self.location.poll() {
            events.push(match result {
                Ok(position) => AppIntent::LocationResolved { position },
                Err(error) => AppIntent::LocationFailed { error },
            });
        }

        events.extend(ui::render_side_panel(ctx, &mut self.state));
        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default().show(ctx, |ui| {
            let canvas = self.renderer.surface_mut();
            canvas.layer_control_ui(ui);
            canvas.ui(ui);
        });

        // Leinwand-Klicks in Intents übersetzen
        for event in self.renderer.take_events() {
            events.push(match event {
                SurfaceEvent::Clicked { position } => AppIntent::MapClicked { position },
                SurfaceEvent::MarkerClicked { marker_id } => {
                    AppIntent::MarkerIconClicked { marker_id }
                }
            });
        }

        self.process_events(events);

        if self.state.view_dirty {
            self.renderer
                .set_view(self.state.view.center, self.state.view.zoom);
            self.state.view_dirty = false;
        }
        if self.state.scene_dirty {
            self.renderer.sync(&self.state.store);
            self.state.scene_dirty = false;
        }

        // Solange die Positionsanfrage läuft, weiter pollen
        if self.state.location.is_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
