use super::drawing::{clear, stroke_axes, stroke_line, stroke_marker, Canvas, Viewport};
use super::params::{Mode, SceneParams};
use super::theme::Theme;
use crate::geometry::{GeometryError, Point2};
use serde::Serialize;

pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const MARKER_LINE_WIDTH: f64 = 6.0;
pub const MARKER_RADIUS: f64 = 3.0;

/// Outcome of drawing one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub mode: Mode,
    pub intersections: Vec<Point2>,
    /// Set when the solver rejected the input; no markers were drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degenerate: Option<String>,
}

/// Draws the circle, the line or ray, and their intersections.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub viewport: Viewport,
}

impl Renderer {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    pub fn redraw(&self, canvas: &mut impl Canvas, params: &SceneParams) -> Frame {
        let theme = Theme::by_name(&params.theme);
        let viewport = &self.viewport;

        canvas.set_page_colors(theme.clear_color, theme.text_color);
        clear(canvas, viewport, theme.clear_color);
        canvas.set_line_width(DEFAULT_LINE_WIDTH);

        if params.show_axes {
            canvas.set_stroke_color(theme.axes_color);
            stroke_axes(canvas, viewport);
        }

        let circle = params.circle();
        canvas.set_stroke_color(theme.circle_color);
        canvas.stroke_circle(circle.center, circle.radius);

        canvas.set_stroke_color(theme.line_color);
        let solved = match params.mode {
            Mode::Line => {
                let line = params.line();
                stroke_line(canvas, viewport, &line);
                Ok(circle.intersect_line(&line))
            }
            Mode::Ray => {
                let ray = params.ray();
                canvas.stroke_segment(ray.origin, ray.endpoint());
                circle.intersect_ray(&ray)
            }
        };

        let (intersections, degenerate) = match solved {
            Ok(points) => (points, None),
            Err(GeometryError::DegenerateInput(msg)) => (Vec::new(), Some(msg)),
        };

        if !intersections.is_empty() {
            canvas.set_stroke_color(theme.intersection_color);
            canvas.set_line_width(MARKER_LINE_WIDTH);
            for point in &intersections {
                stroke_marker(canvas, *point, MARKER_RADIUS);
            }
            canvas.set_line_width(DEFAULT_LINE_WIDTH);
        }

        Frame { mode: params.mode, intersections, degenerate }
    }
}
