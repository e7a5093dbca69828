use plotters::{
    coord::{types::RangedCoordf64, Shift},
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use super::{
    scene::{arrow_head, Scene, Shape},
    viewport::Viewport,
    RasterImage, RenderError, RenderSettings,
};
use crate::types::point::Point;

const BACKGROUND: RGBColor = WHITE;
const GRID_COLOR: RGBColor = RGBColor(176, 176, 176);
const FRAME_COLOR: RGBColor = BLACK;
const FONT_FAMILY: &str = "sans-serif";
/// Data units between grid lines.
const GRID_STEP: f64 = 2.0;

type Chart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn draw_err<E: std::fmt::Display>(stage: &'static str) -> impl Fn(E) -> RenderError {
    move |e| RenderError::Draw {
        stage,
        message: e.to_string(),
    }
}

/// Draws `scene` on a fresh white canvas.
pub fn rasterize(scene: &Scene, settings: &RenderSettings) -> Result<RasterImage, RenderError> {
    let (width, height) = (settings.width, settings.height);
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyCanvas { width, height });
    }
    let mut buf = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&BACKGROUND).map_err(draw_err("fill"))?;
        let mut chart = build_chart(&root, &scene.viewport, settings)?;
        for shape in &scene.shapes {
            draw_shape(&root, &mut chart, &scene.viewport, shape, settings)?;
        }
        root.present().map_err(draw_err("present"))?;
    }
    Ok(RasterImage {
        width,
        height,
        rgb: buf,
    })
}

/// Values of `step` multiples within `min..=max`.
fn grid_keys(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(move |k| k as f64 * step)
}

fn build_chart<'a, 'b>(
    root: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    viewport: &Viewport,
    settings: &RenderSettings,
) -> Result<Chart<'a, 'b>, RenderError> {
    let mut builder = ChartBuilder::on(root);
    builder.margin(15);
    if settings.draw_text {
        builder.x_label_area_size(30).y_label_area_size(30);
    }
    let mut chart = builder
        .build_cartesian_2d(viewport.range_x(), viewport.range_y())
        .map_err(draw_err("chart"))?;

    let (min, max) = (viewport.min, viewport.max);
    let grid = grid_keys(min.x, max.x, GRID_STEP)
        .map(|x| vec![(x, min.y), (x, max.y)])
        .chain(grid_keys(min.y, max.y, GRID_STEP).map(|y| vec![(min.x, y), (max.x, y)]));
    chart
        .draw_series(grid.map(|line| PathElement::new(line, GRID_COLOR.stroke_width(1))))
        .map_err(draw_err("grid"))?;

    if settings.draw_text {
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(grid_keys(min.x, max.x, GRID_STEP).count())
            .y_labels(grid_keys(min.y, max.y, GRID_STEP).count())
            .axis_style(FRAME_COLOR)
            .x_label_formatter(&|v: &f64| format!("{:.0}", v))
            .y_label_formatter(&|v: &f64| format!("{:.0}", v))
            .label_style((FONT_FAMILY, settings.font_size * 0.8))
            .draw()
            .map_err(draw_err("axes"))?;
    }
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(min.x, min.y), (max.x, max.y)],
            FRAME_COLOR.stroke_width(1),
        )))
        .map_err(draw_err("frame"))?;
    Ok(chart)
}

/// Bottom-left corner for a caption of `size` anchored at `anchor`, moved
/// just enough to keep the whole text on a `canvas`-sized image.
fn caption_origin(anchor: (i32, i32), size: (u32, u32), canvas: (u32, u32)) -> (i32, i32) {
    let max_x = (canvas.0 as i32 - size.0 as i32).max(0);
    let min_y = (size.1 as i32).min(canvas.1 as i32);
    (anchor.0.clamp(0, max_x), anchor.1.clamp(min_y, canvas.1 as i32))
}

fn draw_shape(
    root: &DrawingArea<BitMapBackend, Shift>,
    chart: &mut Chart,
    viewport: &Viewport,
    shape: &Shape,
    settings: &RenderSettings,
) -> Result<(), RenderError> {
    match shape {
        Shape::Marker { at, color } => {
            if viewport.contains(at) {
                chart
                    .draw_series(std::iter::once(Circle::new(
                        (at.x, at.y),
                        settings.marker_radius,
                        color.filled(),
                    )))
                    .map_err(draw_err("marker"))?;
            }
        }
        Shape::Arrow {
            from,
            to,
            head,
            color,
        } => {
            let tip = arrow_head(from, to, head);
            // shaft stops at the head base so its stroke does not blunt the tip
            let shaft_end = tip.map_or(*to, |[_, l, r]| l.midpoint(&r));
            if let Some((a, b)) = viewport.clip_segment(from, &shaft_end) {
                chart
                    .draw_series(std::iter::once(PathElement::new(
                        vec![(a.x, a.y), (b.x, b.y)],
                        color.stroke_width(2),
                    )))
                    .map_err(draw_err("arrow"))?;
            }
            if let Some(triangle) = tip.filter(|_| viewport.contains(to)) {
                chart
                    .draw_series(std::iter::once(Polygon::new(
                        triangle.iter().map(|p: &Point| (p.x, p.y)).collect::<Vec<_>>(),
                        color.filled(),
                    )))
                    .map_err(draw_err("arrow head"))?;
            }
        }
        Shape::Label { at, text, color } => {
            if settings.draw_text && viewport.contains(at) {
                let style = (FONT_FAMILY, settings.font_size)
                    .into_font()
                    .color(color)
                    .pos(Pos::new(HPos::Left, VPos::Bottom));
                // the root area, unlike the chart, does not clip to the plot
                let size = root
                    .estimate_text_size(text, &style)
                    .map_err(draw_err("label"))?;
                let origin = caption_origin(
                    chart.backend_coord(&(at.x, at.y)),
                    size,
                    (settings.width, settings.height),
                );
                root.draw(&Text::new(text.as_str(), origin, style))
                    .map_err(draw_err("label"))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_every_two_units() {
        let keys: Vec<_> = grid_keys(-6.0, 6.0, GRID_STEP).collect();
        assert_eq!(keys, [-6.0, -4.0, -2.0, 0.0, 2.0, 4.0, 6.0]);
        let keys: Vec<_> = grid_keys(-5.0, 5.0, GRID_STEP).collect();
        assert_eq!(keys, [-4.0, -2.0, 0.0, 2.0, 4.0]);
    }

    #[test]
    fn caption_inside_canvas_keeps_its_anchor() {
        assert_eq!(caption_origin((100, 200), (90, 16), (640, 480)), (100, 200));
    }

    #[test]
    fn caption_is_pulled_back_onto_canvas() {
        assert_eq!(caption_origin((600, 240), (90, 16), (640, 480)), (550, 240));
        assert_eq!(caption_origin((100, 5), (90, 16), (640, 480)), (100, 16));
        assert_eq!(caption_origin((-20, 500), (90, 16), (640, 480)), (0, 480));
    }

    #[test]
    fn caption_wider_than_canvas_starts_at_left_edge() {
        assert_eq!(caption_origin((30, 50), (300, 16), (200, 100)), (0, 50));
    }
}
