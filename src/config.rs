use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::EventLoop;
use ggez::winit::dpi::PhysicalPosition;
use ggez::{Context, ContextBuilder};
use tracing::info;
use crate::error::Result;

const GAME_ID: &str = "lorenz_demos";
const AUTHOR: &str = "lorenz_demos";

pub const GLUT_SPIN_TITLE: &str = "GLUT Compatibility Mode Demo Program";
pub const INTERACTIVE_LORENZ_TITLE: &str = "Interactive Lorenz Demo Program";
pub const WINDOW_CALLBACK_TITLE: &str = "Main Window Callback Example Program";
pub const BUTTON_TITLE: &str = "Hello (Title)";

/// Hard-coded window geometry of one demo.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub position: Option<(i32, i32)>,
}

impl WindowConfig {
    pub fn new(title: &str, width: f32, height: f32) -> Self {
        Self {
            title: title.to_string(),
            width,
            height,
            position: None,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.position = Some((x, y));
        self
    }

    pub fn glut_spin() -> Self {
        Self::new(GLUT_SPIN_TITLE, 500.0, 500.0).at(10, 10)
    }

    pub fn interactive_lorenz() -> Self {
        Self::new(INTERACTIVE_LORENZ_TITLE, 500.0, 500.0).at(50, 50)
    }

    pub fn window_callback() -> Self {
        Self::new(WINDOW_CALLBACK_TITLE, 500.0, 500.0)
    }

    pub fn button() -> Self {
        Self::new(BUTTON_TITLE, 500.0, 70.0)
    }

    pub fn window_setup(&self) -> WindowSetup {
        WindowSetup::default().title(&self.title)
    }

    pub fn window_mode(&self) -> WindowMode {
        WindowMode::default().dimensions(self.width, self.height)
    }

    pub fn context_builder(&self) -> ContextBuilder {
        ContextBuilder::new(GAME_ID, AUTHOR)
            .window_setup(self.window_setup())
            .window_mode(self.window_mode())
    }

    pub fn build(&self) -> Result<(Context, EventLoop<()>)> {
        let (ctx, event_loop) = self.context_builder().build()?;
        if let Some((x, y)) = self.position {
            ctx.gfx.window().set_outer_position(PhysicalPosition::new(x, y));
        }
        info!(title = %self.title, width = self.width, height = self.height, "window created");
        Ok((ctx, event_loop))
    }
}
