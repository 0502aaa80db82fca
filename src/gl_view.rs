use std::fmt::Display;
use ggez::event::MouseButton;
use ggez::glam::{Mat4, Vec2};
use crate::camera::Camera;
use crate::display_list::DisplayList;

/// What a [`crate::gl_window::GlWindow`] shows, and how it reacts to input.
///
/// Input handlers return whether the event was consumed.
pub trait GlView: Display {
    fn camera(&self) -> &Camera;

    fn display_list(&self) -> &DisplayList;

    fn rotation(&self) -> Mat4;

    fn tick(&mut self) {
        // Default do nothing
    }

    /// Called right before each frame is drawn.
    fn before_draw(&mut self) {
        // Default do nothing
    }

    fn handle_push(&mut self, _button: MouseButton, _pos: Vec2) -> bool {
        true
    }

    fn handle_drag(&mut self, _pos: Vec2) -> bool {
        true
    }

    fn handle_release(&mut self, _button: MouseButton, _pos: Vec2) -> bool {
        true
    }

    fn handle_focus(&mut self, _gained: bool) -> bool {
        // Accepting focus is what lets keyboard events through.
        true
    }

    fn handle_key(&mut self, _text: &str) -> bool {
        false
    }

    fn title(&self) -> &str;
}
