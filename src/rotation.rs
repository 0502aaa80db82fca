use std::fmt::{Display, Formatter};
use ggez::glam::{Mat4, Vec2, Vec3};

const DRAG_DEGREES_PER_PIXEL: f32 = 0.5;
// Bigger jumps between two motion events are treated as a cursor warp, not a drag.
const MAX_DRAG_STEP_PXL: f32 = 100.0;
const SPIN_DEGREES_PER_FRAME: f32 = 0.5;
const TICKS_PER_AXIS: u32 = 100;

/// Rotation driven by mouse drags, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragRotation {
    last: Vec2,
    angle_x: f32,
    angle_y: f32,
}

impl DragRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, pos: Vec2) {
        self.last = pos;
    }

    /// Returns whether the angles changed and the view needs a redraw.
    pub fn drag(&mut self, pos: Vec2) -> bool {
        let delta = pos - self.last;
        let moved = delta.x.abs() < MAX_DRAG_STEP_PXL && delta.y.abs() < MAX_DRAG_STEP_PXL;
        if moved {
            self.angle_x += delta.x * DRAG_DEGREES_PER_PIXEL;
            self.angle_y += delta.y * DRAG_DEGREES_PER_PIXEL;
        }
        self.last = pos;
        moved
    }

    pub fn angles(&self) -> (f32, f32) {
        (self.angle_x, self.angle_y)
    }

    /// Vertical drags tilt around X first, horizontal drags then turn around Y.
    pub fn rotation(&self) -> Mat4 {
        Mat4::from_rotation_x(self.angle_y.to_radians()) * Mat4::from_rotation_y(self.angle_x.to_radians())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinAxis {
    X,
    Y,
    Z,
}

impl SpinAxis {
    pub fn next(self) -> SpinAxis {
        match self {
            SpinAxis::X => SpinAxis::Y,
            SpinAxis::Y => SpinAxis::Z,
            SpinAxis::Z => SpinAxis::X,
        }
    }

    pub fn vector(self) -> Vec3 {
        match self {
            SpinAxis::X => Vec3::X,
            SpinAxis::Y => Vec3::Y,
            SpinAxis::Z => Vec3::Z,
        }
    }
}

impl Display for SpinAxis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SpinAxis::X => "x",
            SpinAxis::Y => "y",
            SpinAxis::Z => "z",
        };
        write!(f, "{}", name)
    }
}

/// Idle-driven spin: a small rotation about the current axis every frame,
/// moving on to the next axis every hundred ticks or so.
#[derive(Clone, Copy, Debug)]
pub struct AxisSpin {
    axis: SpinAxis,
    ticks: u32,
    orientation: Mat4,
}

impl AxisSpin {
    pub fn new() -> Self {
        Self {
            axis: SpinAxis::X,
            ticks: 0,
            orientation: Mat4::IDENTITY,
        }
    }

    pub fn axis(&self) -> SpinAxis {
        self.axis
    }

    /// Idle callback. Returns the new axis when it switched.
    pub fn tick(&mut self) -> Option<SpinAxis> {
        self.ticks += 1;
        if self.ticks > TICKS_PER_AXIS {
            self.ticks = 0;
            self.axis = self.axis.next();
            return Some(self.axis);
        }
        None
    }

    /// Display callback. Rotations compose, they are never reset.
    pub fn advance(&mut self) {
        let step = Mat4::from_axis_angle(self.axis.vector(), SPIN_DEGREES_PER_FRAME.to_radians());
        self.orientation = self.orientation * step;
    }

    pub fn rotation(&self) -> Mat4 {
        self.orientation
    }
}

impl Default for AxisSpin {
    fn default() -> Self {
        Self::new()
    }
}
