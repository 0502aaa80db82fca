pub mod button_window;
pub mod callback_window;
pub mod callbacks;
pub mod camera;
pub mod config;
pub mod display_list;
pub mod error;
pub mod gl_view;
pub mod gl_window;
pub mod glut_demo;
pub mod logging;
pub mod lorenz_curve;
pub mod lorenz_demo;
pub mod point;
pub mod rendering;
pub mod rotation;
mod utils;

use ggez::event;
use button_window::{announce_press, ButtonPanel, ButtonWindow};
use callback_window::{announce_and_exit, CallbackWindow};
use callbacks::Button;
use config::WindowConfig;
use error::Result;
use gl_window::GlWindow;
use glut_demo::SpinningLorenz;
use lorenz_demo::InteractiveLorenz;

pub fn run_glut_spin() -> Result<()> {
    let (ctx, event_loop) = WindowConfig::glut_spin().build()?;
    let window = GlWindow::new(SpinningLorenz::new());
    event::run(ctx, event_loop, window)
}

pub fn run_interactive_lorenz() -> Result<()> {
    let (ctx, event_loop) = WindowConfig::interactive_lorenz().build()?;
    let window = GlWindow::new(InteractiveLorenz::new());
    event::run(ctx, event_loop, window)
}

pub fn run_window_callback() -> Result<()> {
    let (ctx, event_loop) = WindowConfig::window_callback().build()?;
    let window = CallbackWindow::new(announce_and_exit);
    event::run(ctx, event_loop, window)
}

pub fn run_button() -> Result<()> {
    let (mut ctx, event_loop) = WindowConfig::button().build()?;
    let mut panel = ButtonPanel::new();
    panel
        .add(Button::new(20.0, 20.0, 460.0, 30.0, "Test Button"))
        .callback(announce_press);
    let window = ButtonWindow::new(&mut ctx, panel);
    event::run(ctx, event_loop, window)
}
