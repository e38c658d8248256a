//! UI-Schicht: Seitenpanel, Status-Bar und Karten-Leinwand.

pub mod map_canvas;
pub mod panel;
pub mod status;

pub use map_canvas::MapCanvas;
pub use panel::render_side_panel;
pub use status::render_status_bar;
