//! Painting of the diagram from read-only model state.
//!
//! Mirrors the model's draw-order conventions: field first, then rectangles
//! (with their visible ports), then links, the live drag line and the
//! delete button. While a rectangle drag is active, the selected rectangle,
//! its ports and its link endpoints are painted at `position + drag offset`
//! without mutating the model; the offset is only committed on release.

#![cfg(feature = "egui")]

use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, StrokeKind, pos2, vec2};

use crate::color::parse_color;
use crate::diagram::{DiagramModel, Link, MoveableRectangle};

const FIELD_COLOR: Color32 = Color32::BLACK;
const SELECTED_BORDER_COLOR: Color32 = Color32::WHITE;
const SELECTED_ELEMENT_COLOR: Color32 = Color32::BLUE;
const AVAILABLE_COLOR: Color32 = Color32::GREEN;
const UNAVAILABLE_COLOR: Color32 = Color32::RED;
const DELETE_COLOR: Color32 = Color32::RED;

/// Resolve a model color name, falling back to gray for unknown names.
fn color32(name: &str) -> Color32 {
    parse_color(name)
        .map(|(r, g, b)| Color32::from_rgb(r, g, b))
        .unwrap_or(Color32::GRAY)
}

/// Paint the whole diagram.
pub fn draw_diagram(painter: &Painter, origin: Pos2, model: &DiagramModel) {
    draw_field(painter, origin, model);
    draw_rectangles(painter, origin, model);
    draw_links(painter, origin, model);
}

fn draw_field(painter: &Painter, origin: Pos2, model: &DiagramModel) {
    let field = Rect::from_min_size(
        origin,
        vec2(model.field_width as f32, model.field_height as f32),
    );
    painter.rect_filled(field, 0.0, FIELD_COLOR);
}

fn draw_rectangles(painter: &Painter, origin: Pos2, model: &DiagramModel) {
    for rect in model.rectangles.values() {
        let is_selected = model.selected_rectangle == Some(rect.id);

        // The selected rectangle follows the drag offset until release
        let (dx, dy) = if is_selected && !model.is_dragging_link {
            model.drag
        } else {
            (0, 0)
        };

        let bounds = Rect::from_min_size(
            origin + vec2((rect.x + dx) as f32, (rect.y + dy) as f32),
            vec2(rect.width as f32, rect.height as f32),
        );
        let fill = color32(&rect.color);
        painter.rect_filled(bounds, 0.0, fill);
        let border = if is_selected { SELECTED_BORDER_COLOR } else { fill };
        painter.rect_stroke(bounds, 0.0, Stroke::new(1.0, border), StrokeKind::Inside);

        // Ports show on the selected rectangle, and on every rectangle while
        // a link drag is looking for a target
        if is_selected || model.selected_port.is_some() {
            draw_ports(painter, origin, model, rect);
        }
    }
}

fn draw_ports(painter: &Painter, origin: Pos2, model: &DiagramModel, rect: &MoveableRectangle) {
    for port in &rect.ports {
        if model.is_port_linked(port.id) {
            continue;
        }

        let is_selected = model.selected_port == Some(port.id);
        let is_hovered = model.hovered_port == Some(port.id) && !is_selected;
        let is_unavailable = is_hovered && model.selected_rectangle == Some(port.parent_id);

        let (px, py) = if model.is_dragging_link {
            (port.x, port.y)
        } else {
            (port.x + model.drag.0, port.y + model.drag.1)
        };

        let mut fill = color32(&port.color);
        if is_selected {
            fill = SELECTED_ELEMENT_COLOR;
        }
        if is_hovered {
            fill = AVAILABLE_COLOR;
        }
        if is_unavailable {
            fill = UNAVAILABLE_COLOR;
        }

        let half = port.radius as f32 / 2.0;
        let center = origin + vec2(px as f32 + half, py as f32 + half);
        painter.circle(center, half, fill, Stroke::new(1.0, SELECTED_ELEMENT_COLOR));
    }
}

fn draw_links(painter: &Painter, origin: Pos2, model: &DiagramModel) {
    let link_stroke = |link: &Link, selected: bool| {
        let color = if selected {
            SELECTED_ELEMENT_COLOR
        } else {
            color32(&link.color)
        };
        Stroke::new(link.width as f32, color)
    };

    // Live drag line from the press origin to the current pointer position
    if model.is_dragging_link {
        if let Some((x1, y1)) = model.press {
            let (dx, dy) = model.drag;
            painter.line_segment(
                [
                    origin + vec2(x1 as f32, y1 as f32),
                    origin + vec2((x1 + dx) as f32, (y1 + dy) as f32),
                ],
                Stroke::new(model.config.link_width as f32, color32(&model.config.link_color)),
            );
        }
    }

    let dragging_rectangle = model.selection().filter(|_| !model.is_dragging_link);
    for link in model.links.values() {
        // Endpoints touching the dragged rectangle follow the drag offset
        let (mut sdx, mut sdy, mut ddx, mut ddy) = (0, 0, 0, 0);
        if let Some(rect) = dragging_rectangle {
            if rect.ports.iter().any(|p| p.id == link.src_id) {
                (sdx, sdy) = model.drag;
            }
            if rect.ports.iter().any(|p| p.id == link.dst_id) {
                (ddx, ddy) = model.drag;
            }
        }

        painter.line_segment(
            [
                origin + vec2((link.x1 + sdx) as f32, (link.y1 + sdy) as f32),
                origin + vec2((link.x2 + ddx) as f32, (link.y2 + ddy) as f32),
            ],
            link_stroke(link, model.selected_link == Some(link.id)),
        );
    }

    // Delete button on the selected link's midpoint
    if let Some(link) = model.selected_link.and_then(|id| model.link(id)) {
        let (mx, my) = link.midpoint();
        let radius = model.config.port_radius as f32 / 2.0;
        painter.circle_filled(pos2(mx as f32, my as f32) + origin.to_vec2(), radius, DELETE_COLOR);
    }
}
