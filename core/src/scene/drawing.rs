//! Drawing helpers over an abstract 2D canvas.
//!
//! Scene coordinates put the origin at the center of the viewport with +y
//! pointing up. Canvas implementations are responsible for mapping that
//! onto their own pixel space.

use crate::geometry::{Line, Point2};
use serde::Serialize;

/// Minimal stroking surface the renderer draws onto.
pub trait Canvas {
    /// Colors for the surface behind the drawing and for any surrounding text.
    fn set_page_colors(&mut self, background: &str, text: &str);
    fn set_stroke_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn fill_rect(&mut self, min: Point2, width: f64, height: f64, color: &str);
    fn stroke_circle(&mut self, center: Point2, radius: f64);
    fn stroke_segment(&mut self, a: Point2, b: Point2);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Translation from the top-left corner to the scene origin.
    pub fn offset(&self) -> [f64; 2] {
        [self.width / 2.0, self.height / 2.0]
    }
}

/// Fill the whole viewport, with a small bleed so antialiased edges are covered.
pub fn clear(canvas: &mut impl Canvas, viewport: &Viewport, color: &str) {
    let [ox, oy] = viewport.offset();
    canvas.fill_rect(
        Point2::new(-ox - 2.0, -oy - 2.0),
        viewport.width + 4.0,
        viewport.height + 4.0,
        color,
    );
}

/// Endpoints of `line` clipped to the viewport extent.
///
/// Flat lines (`|m| <= 1`) span the full width; steep ones span the full
/// height so the segment never runs off to a huge coordinate.
pub fn line_extent(line: &Line, viewport: &Viewport) -> (Point2, Point2) {
    let [ox, oy] = viewport.offset();
    if line.is_steep() {
        (
            Point2::new(line.x_at(-oy), -oy),
            Point2::new(line.x_at(oy), oy),
        )
    } else {
        (
            Point2::new(-ox, line.y_at(-ox)),
            Point2::new(ox, line.y_at(ox)),
        )
    }
}

/// Draw `y = m·x + b` across the viewport.
pub fn stroke_line(canvas: &mut impl Canvas, viewport: &Viewport, line: &Line) {
    let (a, b) = line_extent(line, viewport);
    canvas.stroke_segment(a, b);
}

pub fn stroke_axes(canvas: &mut impl Canvas, viewport: &Viewport) {
    let [ox, oy] = viewport.offset();
    canvas.stroke_segment(Point2::new(-ox, 0.0), Point2::new(ox, 0.0));
    canvas.stroke_segment(Point2::new(0.0, -oy), Point2::new(0.0, oy));
}

pub fn stroke_marker(canvas: &mut impl Canvas, at: Point2, radius: f64) {
    canvas.stroke_circle(at, radius);
}

/// A single recorded canvas call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    PageColors { background: String, text: String },
    StrokeColor { color: String },
    LineWidth { width: f64 },
    FillRect { min: [f64; 2], width: f64, height: f64, color: String },
    Circle { center: [f64; 2], radius: f64 },
    Segment { a: [f64; 2], b: [f64; 2] },
}

/// Canvas that keeps every call, for inspecting a frame after the fact.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = (&[f64; 2], f64)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { center, radius } => Some((center, *radius)),
            _ => None,
        })
    }

    pub fn segments(&self) -> impl Iterator<Item = (&[f64; 2], &[f64; 2])> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Segment { a, b } => Some((a, b)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn set_page_colors(&mut self, background: &str, text: &str) {
        self.commands.push(DrawCommand::PageColors {
            background: background.to_string(),
            text: text.to_string(),
        });
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeColor { color: color.to_string() });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth { width });
    }

    fn fill_rect(&mut self, min: Point2, width: f64, height: f64, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            min: [min.x, min.y],
            width,
            height,
            color: color.to_string(),
        });
    }

    fn stroke_circle(&mut self, center: Point2, radius: f64) {
        self.commands.push(DrawCommand::Circle { center: [center.x, center.y], radius });
    }

    fn stroke_segment(&mut self, a: Point2, b: Point2) {
        self.commands.push(DrawCommand::Segment { a: [a.x, a.y], b: [b.x, b.y] });
    }
}
