//! Geteilte Konfiguration und Konstanten.

pub mod options;

pub use options::MapOptions;
