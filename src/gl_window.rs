use ggez::{Context, GameResult};
use ggez::event::{self, MouseButton};
use ggez::glam::Vec2;
use ggez::graphics::{Canvas, Color};
use ggez::input::keyboard::{KeyCode, KeyInput};
use tracing::{debug, info};
use crate::gl_view::GlView;
use crate::rendering::draw_display_list;

/// Keys that never show up as text input. Everything else is echoed once,
/// through `text_input_event`, so it is not reported twice.
pub fn is_textless(keycode: KeyCode) -> bool {
    matches!(
        keycode,
        KeyCode::Escape | KeyCode::F1 | KeyCode::F2 | KeyCode::F3 | KeyCode::F4 | KeyCode::F5
            | KeyCode::F6 | KeyCode::F7 | KeyCode::F8 | KeyCode::F9 | KeyCode::F10 | KeyCode::F11
            | KeyCode::F12 | KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Home
            | KeyCode::End | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Insert | KeyCode::LShift | KeyCode::RShift
            | KeyCode::LControl | KeyCode::RControl | KeyCode::LAlt | KeyCode::RAlt | KeyCode::LWin | KeyCode::RWin
            | KeyCode::Capital | KeyCode::Numlock | KeyCode::Scroll | KeyCode::Snapshot | KeyCode::Pause
    )
}

/// Window hosting a [`GlView`]: forwards input to it and draws its display list.
pub struct GlWindow<V: GlView> {
    view: V,
    mouse_pos: Vec2,
    mouse_down: bool,
}

impl<V: GlView> GlWindow<V> {
    pub fn new(view: V) -> GlWindow<V> {
        info!(
            title = view.title(),
            vertices = view.display_list().vertex_count(),
            "display list compiled"
        );
        GlWindow {
            view,
            mouse_pos: Vec2::new(0., 0.),
            mouse_down: false,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    pub fn mouse_down(&self) -> bool {
        self.mouse_down
    }

    pub fn press(&mut self, button: MouseButton, pos: Vec2) -> bool {
        self.mouse_down = true;
        self.mouse_pos = pos;
        self.view.handle_push(button, pos)
    }

    /// Motion only counts as a drag while a button is held.
    pub fn motion(&mut self, pos: Vec2) -> bool {
        self.mouse_pos = pos;
        if self.mouse_down {
            self.view.handle_drag(pos)
        } else {
            false
        }
    }

    /// Key presses without text reach the view with an empty string.
    pub fn key_down(&mut self, keycode: Option<KeyCode>) -> bool {
        match keycode {
            Some(keycode) if !is_textless(keycode) => false,
            _ => self.view.handle_key(""),
        }
    }

    pub fn key_text(&mut self, character: char) -> bool {
        let mut buf = [0u8; 4];
        self.view.handle_key(character.encode_utf8(&mut buf))
    }

    pub fn release(&mut self, button: MouseButton, pos: Vec2) -> bool {
        self.mouse_down = false;
        self.mouse_pos = pos;
        debug!(view = %self.view, "mouse released");
        self.view.handle_release(button, pos)
    }
}

impl<V: GlView> event::EventHandler<ggez::GameError> for GlWindow<V> {
    fn update(&mut self, _ctx: &mut Context) -> GameResult {
        self.view.tick();
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        self.view.before_draw();
        let mvp = self.view.camera().mvp(self.view.rotation());

        let mut canvas = Canvas::from_frame(ctx, Color::BLACK);
        draw_display_list(ctx, &mut canvas, self.view.display_list(), &mvp)?;
        canvas.finish(ctx)
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> GameResult {
        self.press(button, Vec2::new(x, y));
        Ok(())
    }

    fn mouse_motion_event(
        &mut self,
        _ctx: &mut Context,
        x: f32,
        y: f32,
        _xrel: f32,
        _yrel: f32,
    ) -> GameResult {
        self.motion(Vec2::new(x, y));
        Ok(())
    }

    fn mouse_button_up_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> GameResult {
        self.release(button, Vec2::new(x, y));
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        if !self.key_down(input.keycode) {
            debug!(keycode = ?input.keycode, "key not handled");
        }
        Ok(())
    }

    fn text_input_event(&mut self, _ctx: &mut Context, character: char) -> GameResult {
        if !self.key_text(character) {
            debug!(?character, "key not handled");
        }
        Ok(())
    }

    fn focus_event(&mut self, _ctx: &mut Context, gained: bool) -> GameResult {
        self.view.handle_focus(gained);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lorenz_demo::InteractiveLorenz;

    #[test]
    fn motion_without_button_does_not_rotate() {
        let mut window = GlWindow::new(InteractiveLorenz::new());

        assert!(!window.motion(Vec2::new(10.0, 10.0)));
        assert_eq!(window.view().angles(), (0.0, 0.0));
        assert_eq!(window.mouse_pos(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn keys_without_text_are_echoed_empty() {
        let mut window = GlWindow::new(InteractiveLorenz::new());

        window.key_down(Some(KeyCode::F1));
        assert_eq!(window.view().last_key(), Some(""));

        window.key_text('a');
        window.key_down(None);
        assert_eq!(window.view().last_key(), Some(""));
    }

    #[test]
    fn text_keys_are_echoed_only_once() {
        let mut window = GlWindow::new(InteractiveLorenz::new());

        window.key_down(Some(KeyCode::A));
        assert_eq!(window.view().last_key(), None);

        window.key_text('a');
        assert_eq!(window.view().last_key(), Some("a"));
    }

    #[test]
    fn navigation_and_modifier_keys_carry_no_text() {
        assert!(is_textless(KeyCode::Escape));
        assert!(is_textless(KeyCode::Left));
        assert!(is_textless(KeyCode::LShift));
        assert!(!is_textless(KeyCode::A));
        assert!(!is_textless(KeyCode::Space));
    }

    #[test]
    fn press_drag_release_rotates_the_view() {
        let mut window = GlWindow::new(InteractiveLorenz::new());

        window.press(MouseButton::Left, Vec2::new(100.0, 100.0));
        assert!(window.mouse_down());
        assert!(window.motion(Vec2::new(120.0, 100.0)));
        window.release(MouseButton::Left, Vec2::new(120.0, 100.0));
        assert!(!window.mouse_down());

        assert_eq!(window.view().angles(), (10.0, 0.0));

        // Released: further motion is ignored.
        assert!(!window.motion(Vec2::new(140.0, 100.0)));
        assert_eq!(window.view().angles(), (10.0, 0.0));
    }
}
