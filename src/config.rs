//! Editor configuration.
//!
//! [`EditorConfig`] collects every constant the diagram core depends on:
//! field limits, rectangle dimensions, port radius, link width and the color
//! palette. It is built once at startup (optionally adjusted from the CLI)
//! and injected into [`DiagramModel`](crate::diagram::DiagramModel); nothing
//! in the core mutates it.

/// Color names for newly placed rectangles. Resolved to RGB only at render
/// time, see [`crate::color::parse_color`].
pub const RECTANGLE_PALETTE: &[&str] = &[
    "cyan",
    "darkCyan",
    "darkRed",
    "magenta",
    "darkMagenta",
    "darkGreen",
    "yellow",
    "darkBlue",
    "gray",
];

/// Immutable configuration for the diagram editor.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Initial window X position on screen.
    pub window_x: i32,
    /// Initial window Y position on screen.
    pub window_y: i32,
    /// Maximum (and initial) field width in pixels.
    pub field_max_width: i32,
    /// Maximum (and initial) field height in pixels.
    pub field_max_height: i32,
    /// Absolute floor for the minimum field width.
    pub field_min_width: i32,
    /// Absolute floor for the minimum field height.
    pub field_min_height: i32,
    /// Width of newly placed rectangles.
    pub rectangle_width: i32,
    /// Height of newly placed rectangles.
    pub rectangle_height: i32,
    /// Port circle radius; also the delete-button radius at link midpoints.
    pub port_radius: i32,
    /// Stroke width of links; also the half-thickness of their hit zone.
    pub link_width: i32,
    /// Palette that rectangle fill colors are drawn from.
    pub palette: Vec<String>,
    /// Color of unlinked ports.
    pub port_color: String,
    /// Color of committed links.
    pub link_color: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_x: 200,
            window_y: 200,
            field_max_width: 1024,
            field_max_height: 768,
            field_min_width: 200,
            field_min_height: 200,
            rectangle_width: 100,
            rectangle_height: 50,
            port_radius: 10,
            link_width: 4,
            palette: RECTANGLE_PALETTE.iter().map(|s| s.to_string()).collect(),
            port_color: "white".to_string(),
            link_color: "white".to_string(),
        }
    }
}

impl EditorConfig {
    /// Squared port radius, used by the inclusive point-in-circle hit test.
    pub fn port_radius_squared(&self) -> i32 {
        self.port_radius * self.port_radius
    }
}
