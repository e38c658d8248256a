//! Rendering-Schicht: Karten-Schnittstelle und Layer-Synchronisation.

pub mod layer_renderer;
pub mod surface;

pub use layer_renderer::LayeredMapRenderer;
pub use surface::{LayerId, MapSurface, SurfaceEvent};
