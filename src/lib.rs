//! Issue Map Library.
//! Kern-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod location;
pub mod render;
pub mod shared;
pub mod ui;
pub mod upload;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandLog, MarkerCreationSession,
    PendingCommit, PhotoState, ViewState,
};
pub use core::{
    color_for, CategoryColor, GeoPoint, IssueCategory, IssueMarker, IssueSummary, MarkerStore,
};
pub use location::{
    GeoErrorKind, GeoLocationError, GeoLocationSource, LocationProvider, LocationResult,
    LocationState, StaticLocationSource, UnsupportedLocationSource,
};
pub use render::{LayerId, LayeredMapRenderer, MapSurface, SurfaceEvent};
pub use shared::MapOptions;
pub use upload::PhotoUploader;
