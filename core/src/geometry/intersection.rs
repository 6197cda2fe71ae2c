//! Closed-form line/circle and ray/circle intersection.
//!
//! Both solvers substitute the linear shape into the circle equation
//! `(x - p)² + (y - q)² = r²` and solve the resulting quadratic.

use super::{Circle, GeometryError, GeometryResult, Line, Point2, Ray};

/// Intersections of the line `y = m·x + b` with the circle of radius `r`
/// centered at `(p, q)`.
///
/// Returns zero, one (tangent) or two points. With two points the root
/// using `+√D` comes first; the order carries no geometric meaning.
pub fn line_circle_intersections(m: f64, b: f64, r: f64, p: f64, q: f64) -> Vec<Point2> {
    // Substitute y = m·x + b into the circle equation: a·x² + b_coef·x + c = 0
    let a = 1.0 + m * m;
    let b_coef = 2.0 * (m * b - m * q - p);
    let c = b * b + q * q - r * r + p * p - 2.0 * b * q;
    let d = b_coef * b_coef - 4.0 * a * c;

    // `a >= 1`, so only the discriminant needs checking. NaN falls through here too.
    let xs = if d == 0.0 {
        vec![-b_coef / (2.0 * a)]
    } else if d > 0.0 && d.is_finite() {
        let s = d.sqrt();
        vec![(-b_coef + s) / (2.0 * a), (-b_coef - s) / (2.0 * a)]
    } else {
        Vec::new()
    };

    // Back onto the line for y
    xs.into_iter().map(|x| Point2::new(x, m * x + b)).collect()
}

/// Intersections of the segment starting at `(x, y)`, heading along
/// `angle` radians for `magnitude` units, with the circle of radius `r`
/// centered at `(p, q)`.
///
/// Only points strictly inside the segment (`0 < t < 1`) are kept, so the
/// origin and the endpoint never count as hits. Points are ordered nearest
/// to the origin first.
///
/// A zero-length or infinitely long segment, or non-finite coordinates,
/// are rejected with [`GeometryError::DegenerateInput`].
pub fn ray_circle_intersections(
    x: f64,
    y: f64,
    angle: f64,
    magnitude: f64,
    r: f64,
    p: f64,
    q: f64,
) -> GeometryResult<Vec<Point2>> {
    // Segment direction, scaled to the full magnitude: P(t) = origin + t * (dx, dy)
    let dx = angle.cos() * magnitude;
    let dy = angle.sin() * magnitude;

    // Quadratic coefficient. Zero means no direction; infinite means no usable segment.
    let a = dx * dx + dy * dy;
    if !(a > 0.0 && a.is_finite()) {
        return Err(GeometryError::DegenerateInput(format!(
            "ray of magnitude {} has no finite direction",
            magnitude
        )));
    }

    // Vector from circle center to ray origin
    let fx = x - p;
    let fy = y - q;
    let b = 2.0 * dx * fx + 2.0 * dy * fy;
    let c = fx * fx + fy * fy - r * r;
    let d = b * b - 4.0 * a * c;

    // Non-finite origin or circle
    if d.is_nan() {
        return Err(GeometryError::DegenerateInput(
            "ray or circle has non-finite coordinates".to_string(),
        ));
    }

    // Ray line misses the circle
    if d < 0.0 {
        return Ok(Vec::new());
    }

    // Parameters t where the ray line crosses the circle
    let s = d.sqrt();
    let near = (-b - s) / (2.0 * a);
    let far = (-b + s) / (2.0 * a);

    let mut ts = vec![near];
    // A tangent ray yields the same root twice
    if far != near {
        ts.push(far);
    }

    // Keep roots strictly inside the segment, nearest to the origin first
    let mut ts: Vec<f64> = ts.into_iter().filter(|t| *t > 0.0 && *t < 1.0).collect();
    ts.sort_by(|a, b| a.total_cmp(b));

    Ok(ts
        .into_iter()
        .map(|t| Point2::new(x + dx * t, y + dy * t))
        .collect())
}

impl Circle {
    pub fn intersect_line(&self, line: &Line) -> Vec<Point2> {
        line_circle_intersections(
            line.slope,
            line.intercept,
            self.radius,
            self.center.x,
            self.center.y,
        )
    }

    pub fn intersect_ray(&self, ray: &Ray) -> GeometryResult<Vec<Point2>> {
        ray_circle_intersections(
            ray.origin.x,
            ray.origin.y,
            ray.angle,
            ray.magnitude,
            self.radius,
            self.center.x,
            self.center.y,
        )
    }
}
