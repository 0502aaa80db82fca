use ggez::{Context, GameResult};
use ggez::event;
use ggez::graphics::{Canvas, Color};
use tracing::info;
use crate::callbacks::{CloseAction, CloseCallback};

/// Empty window whose only behavior is its close callback.
pub struct CallbackWindow {
    on_close: CloseCallback,
}

impl CallbackWindow {
    pub fn new(on_close: impl FnMut() -> CloseAction + 'static) -> CallbackWindow {
        CallbackWindow {
            on_close: Box::new(on_close),
        }
    }

    /// Runs the close callback and reports what it asked for.
    pub fn request_close(&mut self) -> CloseAction {
        (self.on_close)()
    }
}

/// Prints a notice and hard-exits, skipping the rest of the event loop.
pub fn announce_and_exit() -> CloseAction {
    println!("The window callback was called.");
    CloseAction::Exit(0)
}

impl event::EventHandler<ggez::GameError> for CallbackWindow {
    fn update(&mut self, _ctx: &mut Context) -> GameResult {
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let canvas = Canvas::from_frame(ctx, Color::from_rgb(192, 192, 192));
        canvas.finish(ctx)
    }

    // Ok(true) keeps the window open.
    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        let action = self.request_close();
        info!(?action, "close requested");
        match action {
            CloseAction::Quit => Ok(false),
            CloseAction::Keep => Ok(true),
            CloseAction::Exit(code) => std::process::exit(code),
        }
    }
}
