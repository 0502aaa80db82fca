use std::fmt::{Display, Formatter};
use ggez::glam::Mat4;
use tracing::debug;
use crate::camera::Camera;
use crate::config::GLUT_SPIN_TITLE;
use crate::display_list::DisplayList;
use crate::gl_view::GlView;
use crate::lorenz_curve::LorenzSampler;
use crate::rotation::{AxisSpin, SpinAxis};

/// The Lorenz trail spinning by itself, GLUT style: the idle callback picks
/// the axis, the display callback turns a little more around it.
pub struct SpinningLorenz {
    camera: Camera,
    list: DisplayList,
    spin: AxisSpin,
}

impl SpinningLorenz {
    pub fn new() -> Self {
        Self::with_sampler(&LorenzSampler::default())
    }

    pub fn with_sampler(sampler: &LorenzSampler) -> Self {
        Self {
            camera: Camera::glut_ortho(),
            list: DisplayList::from_curve(sampler),
            spin: AxisSpin::new(),
        }
    }

    pub fn axis(&self) -> SpinAxis {
        self.spin.axis()
    }
}

impl Default for SpinningLorenz {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SpinningLorenz {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "GLUT spin   axis {}", self.spin.axis())
    }
}

impl GlView for SpinningLorenz {
    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn display_list(&self) -> &DisplayList {
        &self.list
    }

    fn rotation(&self) -> Mat4 {
        self.spin.rotation()
    }

    fn tick(&mut self) {
        if let Some(axis) = self.spin.tick() {
            debug!(%axis, "spin axis switched");
        }
    }

    fn before_draw(&mut self) {
        self.spin.advance();
    }

    fn title(&self) -> &str {
        GLUT_SPIN_TITLE
    }
}
