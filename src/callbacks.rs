//! Callback primitives shared by the plain windows.
//!
//! Callbacks are boxed closures owned by the widget they are registered on,
//! so any user data travels in the closure's captures.

use ggez::graphics::Rect;

/// What should happen after a window's close callback ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseAction {
    /// Let the event loop shut down normally.
    Quit,
    /// Ignore the close request.
    Keep,
    /// Terminate the process right away with this status.
    Exit(i32),
}

pub type CloseCallback = Box<dyn FnMut() -> CloseAction>;
pub type ClickCallback = Box<dyn FnMut()>;

pub struct Button {
    label: String,
    rect: Rect,
    on_click: Option<ClickCallback>,
}

impl Button {
    pub fn new(x: f32, y: f32, w: f32, h: f32, label: &str) -> Button {
        Button {
            label: label.to_string(),
            rect: Rect::new(x, y, w, h),
            on_click: None,
        }
    }

    /// Replaces any previously registered callback.
    pub fn callback(&mut self, on_click: impl FnMut() + 'static) -> &mut Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Runs the click callback. Returns false when none is registered.
    pub fn do_callback(&mut self) -> bool {
        match self.on_click.as_mut() {
            Some(on_click) => {
                on_click();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn click_runs_the_registered_callback() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let mut button = Button::new(20.0, 20.0, 460.0, 30.0, "Test Button");
        button.callback(move || counter.set(counter.get() + 1));

        assert!(button.do_callback());
        assert!(button.do_callback());
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn button_without_callback_reports_it() {
        let mut button = Button::new(0.0, 0.0, 10.0, 10.0, "idle");

        assert!(!button.do_callback());
    }

    #[test]
    fn later_registration_wins() {
        let hits = Rc::new(Cell::new((0, 0)));
        let first = hits.clone();
        let second = hits.clone();
        let mut button = Button::new(0.0, 0.0, 10.0, 10.0, "b");
        button.callback(move || first.set((first.get().0 + 1, first.get().1)));
        button.callback(move || second.set((second.get().0, second.get().1 + 1)));

        button.do_callback();
        assert_eq!(hits.get(), (0, 1));
    }

    #[test]
    fn button_keeps_its_geometry_and_label() {
        let button = Button::new(20.0, 20.0, 460.0, 30.0, "Test Button");

        assert_eq!(button.rect(), Rect::new(20.0, 20.0, 460.0, 30.0));
        assert_eq!(button.label(), "Test Button");
    }
}
