//! Interactive node-link diagram editor.
//!
//! Users place movable rectangles on a bounded field by double-clicking,
//! each rectangle exposing four connection ports, and draw directional links
//! between free ports by dragging. This crate contains the GUI-free core:
//! geometry predicates, the diagram model, and the pointer-driven
//! interaction state machine.
//!
//! The `boxlink` binary provides an egui-based editor on top of the core.

pub mod color;
pub mod config;
pub mod diagram;
pub mod editor;
pub mod geometry;

// The egui presentation layer lives behind the `egui` feature flag; the core
// has no GUI dependency without it.
#[cfg(feature = "egui")]
pub mod egui_app;
