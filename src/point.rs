use std::ops::{Add, Mul};
use ggez::glam::Vec3;
use ggez::graphics::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    // Rendering works in single precision, the integration does not.
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, other: Point3) -> Point3 {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, factor: f64) -> Point3 {
        Point3::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColoredPoint {
    pub point: Point3,
    pub color: Color,
}

impl ColoredPoint {
    pub fn new(point: Point3, color: Color) -> Self {
        Self { point, color }
    }
}

pub trait Curve {
    fn points(&self) -> Vec<ColoredPoint>;
}
