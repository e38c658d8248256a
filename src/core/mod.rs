//! Core-Domänentypen: Kategorien, Koordinaten, Marker, Store, Summary.

pub mod category;
pub mod geo;
pub mod marker;
pub mod marker_store;
pub mod summary;

pub use category::{color_for, CategoryColor, IssueCategory};
pub use geo::GeoPoint;
pub use marker::IssueMarker;
pub use marker_store::MarkerStore;
pub use summary::IssueSummary;
