use ggegui::{egui, Gui};
use ggez::{Context, GameResult};
use ggez::event;
use ggez::glam::Vec2;
use ggez::graphics::{Canvas, Color, DrawParam};
use tracing::debug;
use crate::callbacks::Button;

/// Buttons of a window and the dispatch of clicks to their callbacks.
/// Kept apart from the egui plumbing so it works without a graphics context.
#[derive(Default)]
pub struct ButtonPanel {
    buttons: Vec<Button>,
}

impl ButtonPanel {
    pub fn new() -> ButtonPanel {
        ButtonPanel::default()
    }

    pub fn add(&mut self, button: Button) -> &mut Button {
        self.buttons.push(button);
        let last = self.buttons.len() - 1;
        &mut self.buttons[last]
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn click(&mut self, index: usize) -> bool {
        self.buttons.get_mut(index).map_or(false, Button::do_callback)
    }
}

/// egui area holding the button at `index`; one per button so they do not merge.
pub fn button_area_id(index: usize) -> egui::Id {
    egui::Id::new(("button", index))
}

pub struct ButtonWindow {
    gui: Gui,
    panel: ButtonPanel,
}

impl ButtonWindow {
    pub fn new(ctx: &mut Context, panel: ButtonPanel) -> ButtonWindow {
        ButtonWindow {
            gui: Gui::new(ctx),
            panel,
        }
    }
}

impl event::EventHandler<ggez::GameError> for ButtonWindow {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let mut clicked = Vec::new();
        {
            let gui_ctx = self.gui.ctx();
            for (i, button) in self.panel.buttons().iter().enumerate() {
                let rect = button.rect();
                egui::Area::new(button_area_id(i))
                    .fixed_pos(egui::pos2(rect.x, rect.y))
                    .show(&gui_ctx, |ui| {
                        let widget = egui::Button::new(button.label());
                        if ui.add_sized([rect.w, rect.h], widget).clicked() {
                            clicked.push(i);
                        }
                    });
            }
        }
        // Callbacks run after the frame is laid out, never while egui holds the buttons.
        for i in clicked {
            debug!(button = i, "clicked");
            self.panel.click(i);
        }

        self.gui.update(ctx);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, Color::from_rgb(192, 192, 192));
        canvas.draw(&self.gui, DrawParam::default().dest(Vec2::ZERO));
        canvas.finish(ctx)
    }

    fn text_input_event(&mut self, _ctx: &mut Context, character: char) -> GameResult {
        self.gui.input.text_input_event(character);
        Ok(())
    }
}

/// The demo callback: one line on stdout per press.
pub fn announce_press() {
    println!("The button was pressed");
}
