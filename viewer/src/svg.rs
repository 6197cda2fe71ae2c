use circle_intersect_core::geometry::Point2;
use circle_intersect_core::scene::{Canvas, Viewport};
use std::fmt::Write;

/// Canvas that writes SVG elements.
///
/// Everything is drawn inside a group that moves the origin to the middle
/// of the image and flips y, so scene coordinates go in unchanged.
pub struct SvgCanvas {
    viewport: Viewport,
    body: String,
    page_style: String,
    stroke: String,
    line_width: f64,
}

impl SvgCanvas {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            body: String::new(),
            page_style: String::new(),
            stroke: "black".to_string(),
            line_width: 1.0,
        }
    }

    pub fn finish(self) -> String {
        let [ox, oy] = self.viewport.offset();
        format!(
            concat!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\"{style}>\n",
                "<g transform=\"translate({ox} {oy}) scale(1 -1)\" fill=\"none\">\n",
                "{body}",
                "</g>\n",
                "</svg>\n"
            ),
            w = self.viewport.width,
            h = self.viewport.height,
            ox = ox,
            oy = oy,
            style = self.page_style,
            body = self.body,
        )
    }

    fn stroke_attrs(&self) -> String {
        format!("stroke=\"{}\" stroke-width=\"{}\"", escape(&self.stroke), self.line_width)
    }
}

impl Canvas for SvgCanvas {
    fn set_page_colors(&mut self, background: &str, text: &str) {
        self.page_style = format!(
            " style=\"background-color:{};color:{}\"",
            escape(background),
            escape(text)
        );
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.stroke = color.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn fill_rect(&mut self, min: Point2, width: f64, height: f64, color: &str) {
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            min.x,
            min.y,
            width,
            height,
            escape(color)
        );
    }

    fn stroke_circle(&mut self, center: Point2, radius: f64) {
        // Negative radii are invalid SVG
        let attrs = self.stroke_attrs();
        let _ = writeln!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
            center.x,
            center.y,
            radius.abs(),
            attrs
        );
    }

    fn stroke_segment(&mut self, a: Point2, b: Point2) {
        if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
            return;
        }
        let attrs = self.stroke_attrs();
        let _ = writeln!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>",
            a.x, a.y, b.x, b.y, attrs
        );
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
