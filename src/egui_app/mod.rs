//! Egui-based presentation layer (feature = "egui").
//!
//! Thin wrapper around the core: [`EditorApp`] feeds egui pointer events into
//! the interaction controller and repaints from read-only model state each
//! frame. No diagram logic lives here.

#![cfg(feature = "egui")]

mod app;
mod render;

pub use app::EditorApp;
