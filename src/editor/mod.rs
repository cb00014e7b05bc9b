//! The interaction controller.
//!
//! Translates pointer events from the presentation layer into diagram model
//! operations. Rendering reads the model directly; nothing here draws.

mod state;

pub use state::EditorState;
