//! The diagram data model.
//!
//! Entities reference each other through typed ids (`RectangleId`, `PortId`,
//! `LinkId`) rather than embedded references: a port carries the id of its
//! owning rectangle, a link carries the ids of its two ports, and the
//! [`DiagramModel`] resolves ids through its id-keyed arenas.

mod link;
mod model;
mod port;
mod rectangle;

pub use link::{Link, LinkId};
pub use model::DiagramModel;
pub use port::{Port, PortId, PortSlot};
pub use rectangle::{MoveableRectangle, RectangleId};

use serde::{Deserialize, Serialize};

/// Allocates diagram-unique entity ids from a single counter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct IdGen {
    next: u64,
}

impl IdGen {
    fn next(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub(crate) fn next_rectangle(&mut self) -> RectangleId {
        RectangleId(self.next())
    }

    pub(crate) fn next_port(&mut self) -> PortId {
        PortId(self.next())
    }

    pub(crate) fn next_link(&mut self) -> LinkId {
        LinkId(self.next())
    }
}
