//! Movable rectangles, the nodes of the diagram.

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::geometry::Bounds;

use super::port::{Port, PortId, PortSlot};

/// Unique id of a [`MoveableRectangle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RectangleId(pub u64);

/// A draggable node on the field.
///
/// Owns exactly four ports (top, right, bottom, left edge midpoints) whose
/// positions track the rectangle. Width and height are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveableRectangle {
    /// Unique id of this rectangle.
    pub id: RectangleId,
    /// Top-left corner X.
    pub x: i32,
    /// Top-left corner Y.
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Fill color name, picked from the configured palette at construction.
    pub color: String,
    /// The four ports, in [`PortSlot::ALL`] order.
    pub ports: Vec<Port>,
}

impl MoveableRectangle {
    /// Create a rectangle centered at `(center_x, center_y)` with its four
    /// ports. `port_ids` are consumed in [`PortSlot::ALL`] order.
    pub fn new(
        id: RectangleId,
        port_ids: [PortId; 4],
        center_x: i32,
        center_y: i32,
        width: i32,
        height: i32,
        config: &EditorConfig,
    ) -> Self {
        let x = center_x - width / 2;
        let y = center_y - height / 2;

        let color = config
            .palette
            .choose(&mut rand::rng())
            .cloned()
            .unwrap_or_else(|| "gray".to_string());

        let ports = PortSlot::ALL
            .iter()
            .zip(port_ids)
            .map(|(&slot, port_id)| {
                let (px, py) = slot.anchor(x, y, width, height, config.port_radius);
                Port {
                    id: port_id,
                    parent_id: id,
                    slot,
                    x: px,
                    y: py,
                    radius: config.port_radius,
                    color: config.port_color.clone(),
                }
            })
            .collect();

        Self {
            id,
            x,
            y,
            width,
            height,
            color,
            ports,
        }
    }

    /// Axis-aligned bounds of this rectangle.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    /// True if `(x, y)` lies inside the rectangle (inclusive left/top,
    /// exclusive right/bottom).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// The anchor position a port in `slot` should currently have.
    pub fn slot_anchor(&self, slot: PortSlot, radius: i32) -> (i32, i32) {
        slot.anchor(self.x, self.y, self.width, self.height, radius)
    }

    /// Shift the rectangle position; ports are moved separately through
    /// [`MoveableRectangle::update_ports_offset`].
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Shift every port by an offset. Must be called whenever the rectangle
    /// moves to keep port positions synchronized.
    pub fn update_ports_offset(&mut self, dx: i32, dy: i32) {
        for port in &mut self.ports {
            port.offset_by(dx, dy);
        }
    }
}
