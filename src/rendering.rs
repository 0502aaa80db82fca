use ggez::{Context, GameResult};
use ggez::glam::{Mat4, Vec2};
use ggez::graphics::{Canvas, Color, DrawParam, Mesh, MeshBuilder};
use crate::camera::project;
use crate::display_list::DisplayList;

pub const LINE_WIDTH: f32 = 1.0;
const MIN_SEGMENT_PXL: f32 = 1e-3;

/// Screen-space segments of `list` under `mvp`. Segments with an end behind
/// the eye, or collapsing to a single pixel position, are left out.
pub fn projected_segments(list: &DisplayList, mvp: &Mat4, viewport: Vec2) -> Vec<([Vec2; 2], Color)> {
    list.segments()
        .filter_map(|(start, end, color)| {
            let start = project(mvp, start, viewport)?;
            let end = project(mvp, end, viewport)?;
            if start.distance(end) < MIN_SEGMENT_PXL {
                return None;
            }
            Some(([start, end], color))
        })
        .collect()
}

pub fn mesh_builder(list: &DisplayList, mvp: &Mat4, viewport: Vec2, width: f32) -> GameResult<Option<MeshBuilder>> {
    let segments = projected_segments(list, mvp, viewport);
    if segments.is_empty() {
        return Ok(None);
    }

    let mut builder = MeshBuilder::new();
    for (line, color) in segments {
        builder.line(&line, width, color)?;
    }
    Ok(Some(builder))
}

pub fn draw_display_list(ctx: &mut Context, canvas: &mut Canvas, list: &DisplayList, mvp: &Mat4) -> GameResult {
    let viewport = Vec2::new(ctx.gfx.frame().width() as f32, ctx.gfx.frame().height() as f32);
    if let Some(builder) = mesh_builder(list, mvp, viewport, LINE_WIDTH)? {
        canvas.draw(&Mesh::from_data(ctx, builder.build()), DrawParam::default());
    }
    Ok(())
}
