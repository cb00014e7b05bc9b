//! Connection ports.
//!
//! Every rectangle owns exactly four ports, one per [`PortSlot`]. A port's
//! position is always its parent's position plus the fixed slot offset; it
//! never moves on its own, only through the parent's `update_ports_offset`,
//! which the model calls whenever the parent moves.

use serde::{Deserialize, Serialize};

use super::RectangleId;

/// Unique id of a [`Port`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PortId(pub u64);

/// Which edge midpoint of the parent rectangle a port sits on.
///
/// The order of [`PortSlot::ALL`] is the order ports appear in
/// `MoveableRectangle::ports`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortSlot {
    Top,
    Right,
    Bottom,
    Left,
}

impl PortSlot {
    /// All slots, in port-list order.
    pub const ALL: [PortSlot; 4] = [PortSlot::Top, PortSlot::Right, PortSlot::Bottom, PortSlot::Left];

    /// Anchor position of this slot for a rectangle at `(x, y)` with the
    /// given size, shifted by half the port radius for centering.
    pub fn anchor(self, x: i32, y: i32, width: i32, height: i32, radius: i32) -> (i32, i32) {
        let half = radius / 2;
        match self {
            PortSlot::Top => (x + width / 2 - half, y - half),
            PortSlot::Right => (x + width - half, y + height / 2 - half),
            PortSlot::Bottom => (x + width / 2 - half, y + height - half),
            PortSlot::Left => (x - half, y + height / 2 - half),
        }
    }
}

/// A connection point on a rectangle's perimeter, linkable at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    /// Unique id of this port.
    pub id: PortId,
    /// Id of the owning rectangle (back-reference, not ownership).
    pub parent_id: RectangleId,
    /// Which edge of the parent this port sits on.
    pub slot: PortSlot,
    /// Position X (circle reference point used by hit tests and rendering).
    pub x: i32,
    /// Position Y.
    pub y: i32,
    /// Circle radius.
    pub radius: i32,
    /// Fill color name.
    pub color: String,
}

impl Port {
    /// Shift the port position by an offset.
    pub fn offset_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }
}
