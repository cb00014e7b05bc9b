//! Directed links between ports.

use serde::{Deserialize, Serialize};

use super::port::{Port, PortId};

/// Unique id of a [`Link`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LinkId(pub u64);

/// A directed connection between two ports of two different rectangles.
///
/// The endpoints are a geometric segment captured from the port positions at
/// creation time, not live references: when an endpoint's owning rectangle
/// moves, the model shifts the segment through
/// [`DiagramModel::update_links_offset`](crate::diagram::DiagramModel::update_links_offset).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Unique id of this link.
    pub id: LinkId,
    /// Source endpoint X.
    pub x1: i32,
    /// Source endpoint Y.
    pub y1: i32,
    /// Destination endpoint X.
    pub x2: i32,
    /// Destination endpoint Y.
    pub y2: i32,
    /// Id of the source port.
    pub src_id: PortId,
    /// Id of the destination port.
    pub dst_id: PortId,
    /// Stroke width.
    pub width: i32,
    /// Stroke color name.
    pub color: String,
}

impl Link {
    /// Build a link between two ports, capturing their current positions.
    /// Endpoints sit at the port circle centers (port position plus half the
    /// port radius on both axes).
    pub fn from_ports(id: LinkId, src: &Port, dst: &Port, width: i32, color: String) -> Self {
        Self {
            id,
            x1: src.x + src.radius / 2,
            y1: src.y + src.radius / 2,
            x2: dst.x + dst.radius / 2,
            y2: dst.y + dst.radius / 2,
            src_id: src.id,
            dst_id: dst.id,
            width,
            color,
        }
    }

    /// Segment midpoint; the delete affordance is centered here.
    pub fn midpoint(&self) -> (i32, i32) {
        ((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// The thin quadrilateral hit zone around the segment, inflated by the
    /// link width on both endpoints' axes.
    pub fn hit_zone(&self) -> [(i32, i32); 4] {
        let w = self.width;
        [
            (self.x1 + w, self.y1 - w),
            (self.x2 + w, self.y2 - w),
            (self.x2 - w, self.y2 + w),
            (self.x1 - w, self.y1 + w),
        ]
    }

    /// Shift the source endpoint.
    pub fn offset_src(&mut self, dx: i32, dy: i32) {
        self.x1 += dx;
        self.y1 += dy;
    }

    /// Shift the destination endpoint.
    pub fn offset_dst(&mut self, dx: i32, dy: i32) {
        self.x2 += dx;
        self.y2 += dy;
    }
}
