use ggez::graphics::Color;

/// Position of `index` within `0..count`, as a fraction in `[0, 1)`.
pub fn gradient_fraction(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    index as f32 / count as f32
}

pub fn interpolate_color(start_color: &Color, end_color: &Color, interpolation: f32) -> Color {
    let interpolate = |start: f32, end: f32| start + interpolation * (end - start);
    Color::new(
        interpolate(start_color.r, end_color.r),
        interpolate(start_color.g, end_color.g),
        interpolate(start_color.b, end_color.b),
        1.0
    )
}
