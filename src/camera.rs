use ggez::glam::{Mat4, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    Orthographic { left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32 },
    Perspective { fovy_degrees: f32, aspect: f32, near: f32, far: f32 },
}

impl Projection {
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Projection::Orthographic { left, right, bottom, top, near, far } =>
                Mat4::orthographic_rh_gl(left, right, bottom, top, near, far),
            Projection::Perspective { fovy_degrees, aspect, near, far } =>
                Mat4::perspective_rh_gl(fovy_degrees.to_radians(), aspect, near, far),
        }
    }
}

/// Fixed part of the transform pipeline: projection, eye placement and model scaling.
/// Only the rotation changes between frames.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    projection: Projection,
    view: Mat4,
    scale: f32,
}

impl Camera {
    pub fn new(projection: Projection, view: Mat4, scale: f32) -> Self {
        Self { projection, view, scale }
    }

    /// Orthographic box looking straight down -Z, used by the GLUT style spinner.
    pub fn glut_ortho() -> Self {
        Self::new(
            Projection::Orthographic { left: -2.0, right: 2.0, bottom: -2.0, top: 2.0, near: -2.0, far: 500.0 },
            Mat4::IDENTITY,
            0.03,
        )
    }

    /// 40 degree perspective from 50 units up the Z axis, looking at the origin.
    pub fn lorenz_perspective() -> Self {
        Self::new(
            Projection::Perspective { fovy_degrees: 40.0, aspect: 1.0, near: 10.0, far: 120.0 },
            Mat4::look_at_rh(Vec3::new(0.0, 0.0, 50.0), Vec3::ZERO, Vec3::Y),
            0.3,
        )
    }

    pub fn mvp(&self, rotation: Mat4) -> Mat4 {
        self.projection.matrix() * self.view * Mat4::from_scale(Vec3::splat(self.scale)) * rotation
    }
}

/// Maps a model-space point to screen pixels, origin top left.
/// Returns `None` for points at or behind the eye.
pub fn project(mvp: &Mat4, position: Vec3, viewport: Vec2) -> Option<Vec2> {
    let clip = *mvp * position.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);

    Some(Vec2::new(
        (ndc.x + 1.0) / 2.0 * viewport.x,
        (1.0 - ndc.y) / 2.0 * viewport.y,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(500.0, 500.0);

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn origin_lands_in_the_middle_of_the_window() {
        for camera in [Camera::glut_ortho(), Camera::lorenz_perspective()] {
            let mvp = camera.mvp(Mat4::IDENTITY);
            let p = project(&mvp, Vec3::ZERO, VIEWPORT).expect("visible");
            assert!(close(p, Vec2::new(250.0, 250.0)), "{:?}", p);
        }
    }

    #[test]
    fn ortho_maps_scaled_units_linearly() {
        let mvp = Camera::glut_ortho().mvp(Mat4::IDENTITY);

        // 0.03 * 50 = 1.5 units of a 4 unit wide box, so 3/8 of the width right of center.
        let p = project(&mvp, Vec3::new(50.0, 0.0, 0.0), VIEWPORT).expect("visible");
        assert!(close(p, Vec2::new(250.0 + 187.5, 250.0)), "{:?}", p);

        // Screen y grows downwards.
        let p = project(&mvp, Vec3::new(0.0, 50.0, 0.0), VIEWPORT).expect("visible");
        assert!(close(p, Vec2::new(250.0, 250.0 - 187.5)), "{:?}", p);
    }

    #[test]
    fn perspective_shrinks_far_points() {
        let mvp = Camera::lorenz_perspective().mvp(Mat4::IDENTITY);

        let near = project(&mvp, Vec3::new(10.0, 0.0, 20.0), VIEWPORT).expect("visible");
        let far = project(&mvp, Vec3::new(10.0, 0.0, -20.0), VIEWPORT).expect("visible");
        assert!(near.x - 250.0 > far.x - 250.0);
        assert!(far.x > 250.0);
    }

    #[test]
    fn points_behind_the_eye_are_dropped() {
        let mvp = Camera::lorenz_perspective().mvp(Mat4::IDENTITY);

        // Scaled by 0.3 this sits at z = 60, behind the eye at z = 50.
        assert_eq!(project(&mvp, Vec3::new(0.0, 0.0, 200.0), VIEWPORT), None);
    }

    #[test]
    fn rotation_is_applied_before_scaling() {
        let camera = Camera::glut_ortho();
        let quarter_turn = Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2);

        let rotated = project(&camera.mvp(quarter_turn), Vec3::new(50.0, 0.0, 0.0), VIEWPORT).expect("visible");
        let straight = project(&camera.mvp(Mat4::IDENTITY), Vec3::new(0.0, 50.0, 0.0), VIEWPORT).expect("visible");
        assert!(close(rotated, straight), "{:?} vs {:?}", rotated, straight);
    }
}
