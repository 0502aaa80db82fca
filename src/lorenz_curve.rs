use std::fmt::{Display, Formatter};
use ggez::graphics::Color;
use crate::error::{DemoError, Result};
use crate::point::{ColoredPoint, Curve, Point3};
use crate::utils::{gradient_fraction, interpolate_color};

// Inspiration: https://en.wikipedia.org/wiki/Lorenz_system

pub const DEFAULT_STEPS: usize = 5000;
pub const DEFAULT_DT: f64 = 0.01;
pub const DEFAULT_INITIAL: Point3 = Point3::new(0.11, 0.0, 0.0);
const START_COLOR: Color = Color::new(0.0, 0.2, 1.0, 1.0);
const END_COLOR: Color = Color::new(1.0, 0.2, 0.0, 1.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LorenzParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LorenzParams {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn derivative(&self, p: Point3) -> Point3 {
        Point3::new(
            self.a * (p.y - p.x),
            p.x * (self.b - p.z) - p.y,
            p.x * p.y - self.c * p.z,
        )
    }
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self::new(10.0, 28.0, 8.0 / 3.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LorenzSampler {
    initial: Point3,
    params: LorenzParams,
    steps: usize,
    dt: f64,
}

impl LorenzSampler {
    pub fn new(initial: Point3, params: LorenzParams, steps: usize, dt: f64) -> Result<Self> {
        if steps == 0 {
            return Err(DemoError::InvalidStepCount);
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(DemoError::InvalidStepSize(dt));
        }
        Ok(Self { initial, params, steps, dt })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Explicit Euler: every component is advanced from the same current point.
    pub fn euler_step(&self, p: Point3) -> Point3 {
        p + self.params.derivative(p) * self.dt
    }

    pub fn color(&self, index: usize) -> Color {
        interpolate_color(&START_COLOR, &END_COLOR, gradient_fraction(index, self.steps))
    }

    /// The initial point is not part of the output, the first sample is one step past it.
    pub fn sample(&self) -> Vec<ColoredPoint> {
        let mut current = self.initial;
        let mut res = Vec::with_capacity(self.steps);

        for i in 0..self.steps {
            current = self.euler_step(current);
            res.push(ColoredPoint::new(current, self.color(i)));
        }

        res
    }
}

impl Default for LorenzSampler {
    fn default() -> Self {
        Self {
            initial: DEFAULT_INITIAL,
            params: LorenzParams::default(),
            steps: DEFAULT_STEPS,
            dt: DEFAULT_DT,
        }
    }
}

impl Display for LorenzSampler {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LORENZ a {:<5.2} b {:<5.2} c {:<5.3} steps {} dt {}",
            self.params.a, self.params.b, self.params.c, self.steps, self.dt
        )
    }
}

impl Curve for LorenzSampler {
    fn points(&self) -> Vec<ColoredPoint> {
        self.sample()
    }
}
