#![cfg(feature = "egui")]

use eframe::egui::{self, PointerButton, Pos2, Sense, vec2};

use crate::config::EditorConfig;
use crate::editor::EditorState;

use super::render;

/// The egui editor application: owns the [`EditorState`] and bridges egui
/// pointer input to the core pointer protocol.
pub struct EditorApp {
    state: EditorState,
}

impl EditorApp {
    /// Create an editor app with an empty diagram.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            state: EditorState::new(config),
        }
    }

    /// Feed this frame's pointer input into the interaction controller.
    ///
    /// Double-click takes the place of the second press, matching the event
    /// order the core expects; every other frame with the button held is a
    /// move, and a release always ends the gesture.
    fn dispatch_pointer(&mut self, ctx: &egui::Context, origin: Pos2) {
        let (double, pressed, down, released, pos) = ctx.input(|i| {
            (
                i.pointer.button_double_clicked(PointerButton::Primary),
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });

        if let Some(pos) = pos {
            let x = (pos.x - origin.x) as i32;
            let y = (pos.y - origin.y) as i32;

            if double {
                self.state.double_clicked(x, y);
            } else if pressed {
                self.state.pointer_pressed(x, y);
            } else if down {
                self.state.pointer_moved(x, y);
            }
        }

        if released {
            self.state.pointer_released();
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let size = ui.available_size();
                self.state.resized(size.x as i32, size.y as i32);

                let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
                let origin = response.rect.min;

                self.dispatch_pointer(ctx, origin);
                render::draw_diagram(&painter, origin, &self.state.model);
            });

        // The window must not shrink below the current diagram extents
        let model = &self.state.model;
        ctx.send_viewport_cmd(egui::ViewportCommand::MinInnerSize(vec2(
            model.min_field_width as f32,
            model.min_field_height as f32,
        )));
    }
}
