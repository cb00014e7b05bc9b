//! JSON serialization of diagram entities.
//!
//! Entities reference each other by id, so each one serializes on its own.

use boxlink::config::EditorConfig;
use boxlink::diagram::{DiagramModel, Link, MoveableRectangle, Port};

fn make_linked_model() -> DiagramModel {
    let mut model = DiagramModel::new(EditorConfig::default());
    let a = model.try_add_rectangle(200, 200).unwrap();
    let b = model.try_add_rectangle(500, 500).unwrap();
    let src = model.rectangles[&a].ports[0].id;
    let dst = model.rectangles[&b].ports[0].id;
    model.commit_link(src, dst).unwrap();
    model
}

#[test]
fn rectangle_round_trips_with_ports() {
    let model = make_linked_model();
    let rect = model.rectangles.values().next().unwrap();

    let json = serde_json::to_string(rect).unwrap();
    let back: MoveableRectangle = serde_json::from_str(&json).unwrap();

    assert_eq!(back, *rect);
    assert_eq!(back.ports.len(), 4);
    for (port, original) in back.ports.iter().zip(&rect.ports) {
        assert_eq!(port.id, original.id);
        assert_eq!(port.parent_id, rect.id);
    }
}

#[test]
fn port_round_trips() {
    let model = make_linked_model();
    let port = &model.rectangles.values().next().unwrap().ports[2];

    let json = serde_json::to_string(port).unwrap();
    let back: Port = serde_json::from_str(&json).unwrap();
    assert_eq!(back, *port);
}

#[test]
fn link_round_trips_with_port_ids() {
    let model = make_linked_model();
    let link = model.links.values().next().unwrap();

    let json = serde_json::to_string(link).unwrap();
    let back: Link = serde_json::from_str(&json).unwrap();

    assert_eq!(back, *link);
    assert!(model.is_port_linked(back.src_id));
    assert!(model.is_port_linked(back.dst_id));
}
