use std::fmt::{Display, Formatter};
use ggez::event::MouseButton;
use ggez::glam::{Mat4, Vec2};
use crate::camera::Camera;
use crate::config::INTERACTIVE_LORENZ_TITLE;
use crate::display_list::{DisplayList, AXIS_LENGTH, BOX_HALF_SIZE};
use crate::gl_view::GlView;
use crate::lorenz_curve::LorenzSampler;
use crate::rotation::DragRotation;

/// Lorenz trail inside a reference box, turned around with the mouse.
pub struct InteractiveLorenz {
    camera: Camera,
    list: DisplayList,
    rotation: DragRotation,
    last_key: Option<String>,
}

impl InteractiveLorenz {
    pub fn new() -> Self {
        Self::with_sampler(&LorenzSampler::default())
    }

    pub fn with_sampler(sampler: &LorenzSampler) -> Self {
        Self {
            camera: Camera::lorenz_perspective(),
            list: DisplayList::from_curve(sampler)
                .with_axes(AXIS_LENGTH)
                .with_bounding_box(BOX_HALF_SIZE),
            rotation: DragRotation::new(),
            last_key: None,
        }
    }

    pub fn angles(&self) -> (f32, f32) {
        self.rotation.angles()
    }

    pub fn last_key(&self) -> Option<&str> {
        self.last_key.as_deref()
    }
}

impl Default for InteractiveLorenz {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for InteractiveLorenz {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (x, y) = self.rotation.angles();
        write!(f, "LORENZ   rot-x {:<6.1} rot-y {:<6.1}", x, y)
    }
}

impl GlView for InteractiveLorenz {
    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn display_list(&self) -> &DisplayList {
        &self.list
    }

    fn rotation(&self) -> Mat4 {
        self.rotation.rotation()
    }

    fn handle_push(&mut self, _button: MouseButton, pos: Vec2) -> bool {
        self.rotation.press(pos);
        true
    }

    fn handle_drag(&mut self, pos: Vec2) -> bool {
        self.rotation.drag(pos)
    }

    fn handle_key(&mut self, text: &str) -> bool {
        println!("Key: {}", text);
        self.last_key = Some(text.to_string());
        // Echoed, but left for other handlers.
        false
    }

    fn title(&self) -> &str {
        INTERACTIVE_LORENZ_TITLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_holds_curve_axes_and_box() {
        let view = InteractiveLorenz::new();

        assert_eq!(view.display_list().strips().len(), 3);
        assert_eq!(view.display_list().strips()[0].len(), 5000);
    }

    #[test]
    fn starts_unrotated() {
        let view = InteractiveLorenz::new();

        assert_eq!(view.rotation(), Mat4::IDENTITY);
        assert_eq!(view.angles(), (0.0, 0.0));
    }

    #[test]
    fn vertical_drag_tilts_around_x() {
        let mut view = InteractiveLorenz::new();
        view.handle_push(MouseButton::Left, Vec2::new(0.0, 0.0));
        view.handle_drag(Vec2::new(0.0, 30.0));

        assert_eq!(view.angles(), (0.0, 15.0));
        assert_eq!(format!("{}", view), "LORENZ   rot-x 0.0    rot-y 15.0  ");
    }

    #[test]
    fn keys_are_recorded_but_not_consumed() {
        let mut view = InteractiveLorenz::new();

        assert!(!view.handle_key("q"));
        assert_eq!(view.last_key(), Some("q"));
    }

    #[test]
    fn each_window_owns_its_rotation() {
        let mut first = InteractiveLorenz::new();
        let second = InteractiveLorenz::new();
        first.handle_push(MouseButton::Left, Vec2::new(0.0, 0.0));
        first.handle_drag(Vec2::new(40.0, 0.0));

        assert_eq!(first.angles(), (20.0, 0.0));
        assert_eq!(second.angles(), (0.0, 0.0));
    }
}
