//! Precompiled, replayable geometry.
//!
//! A [`DisplayList`] is built once when a window is created and then drawn
//! every frame under whatever rotation the window currently holds. It only
//! stores colored 3D line strips; projecting them is the job of
//! [`crate::rendering`].

use ggez::glam::Vec3;
use ggez::graphics::Color;
use crate::point::Curve;

pub const AXIS_LENGTH: f32 = 40.0;
pub const BOX_HALF_SIZE: f32 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Color,
}

impl Vertex {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// Connected vertices, drawn as a polyline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Strip {
    vertices: Vec<Vertex>,
}

impl Strip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, position: Vec3, color: Color) -> &mut Self {
        self.vertices.push(Vertex::new(position, color));
        self
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    strips: Vec<Strip>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_curve(curve: &dyn Curve) -> Self {
        let mut strip = Strip::new();
        for p in curve.points() {
            strip.push(p.point.to_vec3(), p.color);
        }
        Self { strips: vec![strip] }
    }

    /// X, Y and Z axes in red, green and blue, all leaving the origin.
    pub fn with_axes(mut self, length: f32) -> Self {
        let mut strip = Strip::new();
        let axes = [
            (Vec3::X, Color::RED),
            (Vec3::Y, Color::GREEN),
            (Vec3::Z, Color::BLUE),
        ];
        for (axis, color) in axes {
            strip
                .push(Vec3::ZERO, color)
                .push(axis * length, color)
                .push(Vec3::ZERO, color);
        }
        self.strips.push(strip);
        self
    }

    /// White wireframe cube centered on the origin, traced as a single strip.
    pub fn with_bounding_box(mut self, half: f32) -> Self {
        let corners = [
            ( half, -half, -half),
            ( half,  half, -half),
            (-half,  half, -half),
            (-half, -half, -half),
            ( half, -half, -half),

            ( half, -half,  half),
            ( half,  half,  half),
            (-half,  half,  half),
            (-half, -half,  half),
            ( half, -half,  half),

            ( half,  half,  half),
            ( half,  half, -half),

            (-half,  half, -half),
            (-half,  half,  half),

            (-half, -half,  half),
            (-half, -half, -half),
        ];
        let mut strip = Strip::new();
        for (x, y, z) in corners {
            strip.push(Vec3::new(x, y, z), Color::WHITE);
        }
        self.strips.push(strip);
        self
    }

    pub fn strips(&self) -> &[Strip] {
        &self.strips
    }

    pub fn vertex_count(&self) -> usize {
        self.strips.iter().map(Strip::len).sum()
    }

    /// Consecutive vertex pairs of every strip, colored by the end vertex.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3, Color)> + '_ {
        self.strips.iter().flat_map(|strip| {
            strip.vertices()
                .windows(2)
                .map(|pair| (pair[0].position, pair[1].position, pair[1].color))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lorenz_curve::LorenzSampler;

    #[test]
    fn curve_becomes_a_single_strip() {
        let list = DisplayList::from_curve(&LorenzSampler::default());

        assert_eq!(list.strips().len(), 1);
        assert_eq!(list.vertex_count(), 5000);
        assert_eq!(list.segments().count(), 4999);
    }

    #[test]
    fn axes_are_colored_by_direction() {
        let list = DisplayList::new().with_axes(AXIS_LENGTH);
        let segments: Vec<_> = list.segments().collect();

        assert!(segments.contains(&(Vec3::ZERO, Vec3::new(40.0, 0.0, 0.0), Color::RED)));
        assert!(segments.contains(&(Vec3::ZERO, Vec3::new(0.0, 40.0, 0.0), Color::GREEN)));
        assert!(segments.contains(&(Vec3::ZERO, Vec3::new(0.0, 0.0, 40.0), Color::BLUE)));
    }

    #[test]
    fn bounding_box_covers_every_cube_edge() {
        let list = DisplayList::new().with_bounding_box(BOX_HALF_SIZE);
        let edge = |a: Vec3, b: Vec3| {
            list.segments().any(|(s, e, _)| (s == a && e == b) || (s == b && e == a))
        };
        let h = BOX_HALF_SIZE;
        let corners = [
            Vec3::new(-h, -h, -h), Vec3::new(h, -h, -h), Vec3::new(-h, h, -h), Vec3::new(h, h, -h),
            Vec3::new(-h, -h, h), Vec3::new(h, -h, h), Vec3::new(-h, h, h), Vec3::new(h, h, h),
        ];

        let mut edges = 0;
        for (i, a) in corners.iter().enumerate() {
            for b in corners.iter().skip(i + 1) {
                // Cube edges differ along exactly one axis.
                let diff = (*a - *b).abs();
                let axes = [diff.x, diff.y, diff.z].iter().filter(|d| **d > 0.0).count();
                if axes == 1 {
                    assert!(edge(*a, *b), "missing edge {:?} -> {:?}", a, b);
                    edges += 1;
                }
            }
        }
        assert_eq!(edges, 12);
        assert!(list.segments().all(|(_, _, color)| color == Color::WHITE));
    }

    #[test]
    fn strips_do_not_connect_to_each_other() {
        let list = DisplayList::new().with_axes(1.0).with_bounding_box(1.0);

        // 9 axis vertices + 16 box vertices, minus one per strip.
        assert_eq!(list.vertex_count(), 25);
        assert_eq!(list.segments().count(), 23);
    }
}
