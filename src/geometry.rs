//! Pure geometry predicates used by the diagram model.
//!
//! Everything here is a deterministic function of its integer arguments:
//! border-collision and overlap tests for collision-checked placement and
//! dragging, the inclusive point-in-circle test for port and button hit
//! zones, and a winding-number polygon test for link hit zones.

/// Axis-aligned bounds of a rectangle, edges in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Bounds {
    /// Bounds from a top-left corner and a size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            left: x,
            right: x + width,
            top: y,
            bottom: y + height,
        }
    }

    /// Bounds shifted by an offset.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            right: self.right + dx,
            top: self.top + dy,
            bottom: self.bottom + dy,
        }
    }
}

/// Returns true if `bounds`, shifted by the offset, exceeds the
/// `[0, screen_width] x [0, screen_height]` field on any side.
pub fn has_border_collision(
    bounds: Bounds,
    screen_width: i32,
    screen_height: i32,
    x_offset: i32,
    y_offset: i32,
) -> bool {
    let b = bounds.offset(x_offset, y_offset);
    b.left < 0 || b.top < 0 || b.right > screen_width || b.bottom > screen_height
}

/// Returns true if `a`, shifted by the offset, overlaps `b`.
///
/// Strict inequalities: rectangles that merely touch do not overlap.
pub fn has_rectangle_overlap(a: Bounds, b: Bounds, x_offset: i32, y_offset: i32) -> bool {
    let a = a.offset(x_offset, y_offset);

    let no_overlap = a.left >= b.right || b.left >= a.right || a.top >= b.bottom || b.top >= a.bottom;

    !no_overlap
}

/// Returns true if `bounds`, shifted by the offset, would leave the field or
/// overlap any of `others`.
///
/// Callers filter the candidate's own bounds out of `others`; this function
/// checks every entry it is given.
pub fn has_collision<I>(
    bounds: Bounds,
    others: I,
    screen_width: i32,
    screen_height: i32,
    x_offset: i32,
    y_offset: i32,
) -> bool
where
    I: IntoIterator<Item = Bounds>,
{
    if has_border_collision(bounds, screen_width, screen_height, x_offset, y_offset) {
        return true;
    }

    others
        .into_iter()
        .any(|other| has_rectangle_overlap(bounds, other, x_offset, y_offset))
}

/// Inclusive distance-squared test: true if `(x, y)` lies inside or on the
/// circle of `radius_squared` around `(x_center, y_center)`.
pub fn is_point_in_circle(x_center: i32, y_center: i32, x: i32, y: i32, radius_squared: i32) -> bool {
    let dx = (x - x_center) as i64;
    let dy = (y - y_center) as i64;
    dx * dx + dy * dy <= radius_squared as i64
}

/// Winding-number point-in-polygon test (nonzero fill rule).
pub fn is_point_in_polygon(points: &[(i32, i32)], x: i32, y: i32) -> bool {
    if points.len() < 3 {
        return false;
    }

    let mut winding = 0i32;
    for i in 0..points.len() {
        let (x1, y1) = points[i];
        let (x2, y2) = points[(i + 1) % points.len()];
        if y1 <= y {
            if y2 > y && cross(x1, y1, x2, y2, x, y) > 0 {
                winding += 1;
            }
        } else if y2 <= y && cross(x1, y1, x2, y2, x, y) < 0 {
            winding -= 1;
        }
    }

    winding != 0
}

/// Sign of the cross product of (p1->p2) and (p1->p); positive when p is left
/// of the directed edge.
fn cross(x1: i32, y1: i32, x2: i32, y2: i32, x: i32, y: i32) -> i64 {
    let ax = (x2 - x1) as i64;
    let ay = (y2 - y1) as i64;
    let bx = (x - x1) as i64;
    let by = (y - y1) as i64;
    ax * by - ay * bx
}
