//! The diagram model: all rectangles, links and interaction state.
//!
//! [`DiagramModel`] owns the entity arenas and the bookkeeping around them
//! (which ports are linked, what is selected, the in-progress drag offset)
//! and implements the hit-testing and mutation operations the interaction
//! controller drives. It never fails with errors: operations that cannot
//! proceed return `None`/`false` or are silent no-ops.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::config::EditorConfig;
use crate::geometry::{self, Bounds};

use super::link::{Link, LinkId};
use super::port::{Port, PortId};
use super::rectangle::{MoveableRectangle, RectangleId};
use super::IdGen;

/// All data of one diagram editing session.
#[derive(Debug, Clone)]
pub struct DiagramModel {
    /// Immutable editor configuration.
    pub config: EditorConfig,
    /// Current field width (tracks the window).
    pub field_width: i32,
    /// Current field height.
    pub field_height: i32,
    /// Minimum field width: bounding box of all rectangles, floored by the
    /// configured minimum.
    pub min_field_width: i32,
    /// Minimum field height.
    pub min_field_height: i32,
    /// True while a link is being dragged out of a port.
    pub is_dragging_link: bool,
    /// All rectangles, in insertion (draw) order.
    pub rectangles: IndexMap<RectangleId, MoveableRectangle>,
    /// All links, in insertion (draw) order.
    pub links: IndexMap<LinkId, Link>,
    /// Ports currently used by a link; blocks re-linking.
    pub linked_port_ids: IndexSet<PortId>,
    /// Rectangle targeted by the active gesture, if any.
    pub selected_rectangle: Option<RectangleId>,
    /// Port a link drag started from, if any.
    pub selected_port: Option<PortId>,
    /// Port under the pointer while a link drag is active.
    pub hovered_port: Option<PortId>,
    /// Link selected by the last press, if any.
    pub selected_link: Option<LinkId>,
    /// Press origin of the active gesture.
    pub press: Option<(i32, i32)>,
    /// Accumulated drag offset from the press origin.
    pub drag: (i32, i32),
    ids: IdGen,
}

impl DiagramModel {
    /// Create an empty model sized to the configured maximum field.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            field_width: config.field_max_width,
            field_height: config.field_max_height,
            min_field_width: config.field_min_width,
            min_field_height: config.field_min_height,
            is_dragging_link: false,
            rectangles: IndexMap::new(),
            links: IndexMap::new(),
            linked_port_ids: IndexSet::new(),
            selected_rectangle: None,
            selected_port: None,
            hovered_port: None,
            selected_link: None,
            press: None,
            drag: (0, 0),
            ids: IdGen::default(),
            config,
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Entity lookup
    // ────────────────────────────────────────────────────────────────────

    /// Rectangle by id.
    pub fn rectangle(&self, id: RectangleId) -> Option<&MoveableRectangle> {
        self.rectangles.get(&id)
    }

    /// Link by id.
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(&id)
    }

    /// Port by id, scanning all rectangles.
    pub fn port(&self, id: PortId) -> Option<&Port> {
        self.rectangles
            .values()
            .flat_map(|rect| rect.ports.iter())
            .find(|port| port.id == id)
    }

    /// The currently selected rectangle, if any.
    pub fn selection(&self) -> Option<&MoveableRectangle> {
        self.selected_rectangle.and_then(|id| self.rectangles.get(&id))
    }

    /// True if the port is an endpoint of an existing link.
    pub fn is_port_linked(&self, id: PortId) -> bool {
        self.linked_port_ids.contains(&id)
    }

    // ────────────────────────────────────────────────────────────────────
    // Placement
    // ────────────────────────────────────────────────────────────────────

    /// Try to place a new rectangle of the configured size centered at
    /// `(center_x, center_y)`.
    ///
    /// The very first rectangle is accepted unconditionally; after that the
    /// candidate must stay inside the field and clear of every existing
    /// rectangle. Returns the new id, or `None` if placement was rejected.
    pub fn try_add_rectangle(&mut self, center_x: i32, center_y: i32) -> Option<RectangleId> {
        let width = self.config.rectangle_width;
        let height = self.config.rectangle_height;
        let bounds = Bounds::new(center_x - width / 2, center_y - height / 2, width, height);

        if !self.rectangles.is_empty() {
            let others = self.rectangles.values().map(|r| r.bounds());
            if geometry::has_collision(bounds, others, self.field_width, self.field_height, 0, 0) {
                debug!(center_x, center_y, "rectangle placement rejected");
                return None;
            }
        }

        let id = self.ids.next_rectangle();
        let port_ids = std::array::from_fn(|_| self.ids.next_port());
        let rectangle =
            MoveableRectangle::new(id, port_ids, center_x, center_y, width, height, &self.config);
        debug!(id = id.0, x = rectangle.x, y = rectangle.y, "rectangle placed");
        self.rectangles.insert(id, rectangle);
        Some(id)
    }

    // ────────────────────────────────────────────────────────────────────
    // Hit testing
    // ────────────────────────────────────────────────────────────────────

    /// First rectangle (in insertion order) containing the point.
    pub fn find_rectangle_at(&self, x: i32, y: i32) -> Option<RectangleId> {
        self.rectangles
            .values()
            .find(|rect| rect.contains(x, y))
            .map(|rect| rect.id)
    }

    /// First port whose circle contains the point.
    ///
    /// With `search_all` false only the selected rectangle's ports are
    /// tested; with `search_all` true every rectangle's ports are. Either
    /// way a selected rectangle is required: without one the result is
    /// `None`.
    pub fn find_port_at(&self, x: i32, y: i32, search_all: bool) -> Option<PortId> {
        let selected = self.selected_rectangle?;
        let radius_squared = self.config.port_radius_squared();

        let hit = |port: &Port| geometry::is_point_in_circle(port.x, port.y, x, y, radius_squared);

        if search_all {
            self.rectangles
                .values()
                .flat_map(|rect| rect.ports.iter())
                .find(|port| hit(port))
                .map(|port| port.id)
        } else {
            let rect = self.rectangles.get(&selected)?;
            rect.ports.iter().find(|port| hit(port)).map(|port| port.id)
        }
    }

    /// First link whose hit zone contains the point.
    pub fn find_link_at(&self, x: i32, y: i32) -> Option<LinkId> {
        self.links
            .values()
            .find(|link| geometry::is_point_in_polygon(&link.hit_zone(), x, y))
            .map(|link| link.id)
    }

    // ────────────────────────────────────────────────────────────────────
    // Links
    // ────────────────────────────────────────────────────────────────────

    /// Create a link between two free ports of two different rectangles,
    /// capturing the current port positions as endpoints and registering
    /// both ports as linked. Returns `None` if either port is missing,
    /// already linked, or both belong to the same rectangle.
    pub fn commit_link(&mut self, src_id: PortId, dst_id: PortId) -> Option<LinkId> {
        if src_id == dst_id || self.is_port_linked(src_id) || self.is_port_linked(dst_id) {
            return None;
        }

        let src = self.port(src_id)?.clone();
        let dst = self.port(dst_id)?.clone();
        if src.parent_id == dst.parent_id {
            return None;
        }

        let id = self.ids.next_link();
        let link = Link::from_ports(
            id,
            &src,
            &dst,
            self.config.link_width,
            self.config.link_color.clone(),
        );
        debug!(id = id.0, src = src_id.0, dst = dst_id.0, "link created");
        self.links.insert(id, link);
        self.linked_port_ids.insert(src_id);
        self.linked_port_ids.insert(dst_id);
        Some(id)
    }

    /// Remove a link and free both of its ports.
    pub fn remove_link(&mut self, id: LinkId) -> bool {
        let Some(link) = self.links.shift_remove(&id) else {
            return false;
        };
        self.linked_port_ids.shift_remove(&link.src_id);
        self.linked_port_ids.shift_remove(&link.dst_id);
        debug!(id = id.0, "link removed");
        true
    }

    /// Shift the endpoints of every link touching the selected rectangle.
    ///
    /// Source and destination ends shift independently, so a link whose two
    /// ports both belong to the selected rectangle shifts both ends. No-op
    /// without a selected rectangle.
    pub fn update_links_offset(&mut self, dx: i32, dy: i32) {
        let Some(rect) = self.selection() else {
            return;
        };
        let port_ids: Vec<PortId> = rect.ports.iter().map(|port| port.id).collect();

        for link in self.links.values_mut() {
            if port_ids.contains(&link.src_id) {
                link.offset_src(dx, dy);
            }
            if port_ids.contains(&link.dst_id) {
                link.offset_dst(dx, dy);
            }
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Movement and field size
    // ────────────────────────────────────────────────────────────────────

    /// True if moving the selected rectangle by the offset would leave the
    /// field or overlap another rectangle. False without a selection.
    pub fn selection_collides(&self, dx: i32, dy: i32) -> bool {
        let Some(rect) = self.selection() else {
            return false;
        };
        let others = self
            .rectangles
            .values()
            .filter(|other| other.id != rect.id)
            .map(|other| other.bounds());
        geometry::has_collision(rect.bounds(), others, self.field_width, self.field_height, dx, dy)
    }

    /// Commit a move: shift the rectangle and its ports by the offset.
    /// Link endpoints are shifted separately via [`Self::update_links_offset`].
    pub fn move_rectangle(&mut self, id: RectangleId, dx: i32, dy: i32) {
        if let Some(rect) = self.rectangles.get_mut(&id) {
            rect.move_by(dx, dy);
            rect.update_ports_offset(dx, dy);
        }
    }

    /// Update the stored field size (window resize).
    pub fn resize_field(&mut self, width: i32, height: i32) {
        self.field_width = width;
        self.field_height = height;
    }

    /// Recompute the minimum field size as the bounding box of all rectangle
    /// extents, floored by the configured minimum. Stores and returns it.
    pub fn recalculate_min_field_size(&mut self) -> (i32, i32) {
        let mut width = self.config.field_min_width;
        let mut height = self.config.field_min_height;

        for rect in self.rectangles.values() {
            width = width.max(rect.x + rect.width);
            height = height.max(rect.y + rect.height);
        }

        self.min_field_width = width;
        self.min_field_height = height;
        (width, height)
    }
}
