use super::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// A non-vertical line in slope/intercept form, `y = m·x + b`.
///
/// Vertical lines have no finite slope and cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Inverse of [`Line::y_at`]. Infinite for horizontal lines.
    pub fn x_at(&self, y: f64) -> f64 {
        (y - self.intercept) / self.slope
    }

    /// Lines with `|m| > 1` rise faster than they run.
    pub fn is_steep(&self) -> bool {
        !(-1.0..=1.0).contains(&self.slope)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn at_origin(radius: f64) -> Self {
        Self::new(Point2::origin(), radius)
    }

    pub fn contains(&self, p: &Point2) -> bool {
        (p - self.center).norm_squared() <= self.radius * self.radius
    }
}

/// A directed segment starting at `origin`, pointing along `angle`
/// (radians, counter-clockwise from +x) and `magnitude` units long.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point2,
    pub angle: f64,
    pub magnitude: f64,
}

impl Ray {
    pub fn new(origin: Point2, angle: f64, magnitude: f64) -> Self {
        Self { origin, angle, magnitude }
    }

    /// Offset from the origin to the far end of the segment.
    pub fn displacement(&self) -> Vector2 {
        Vector2::new(self.angle.cos() * self.magnitude, self.angle.sin() * self.magnitude)
    }

    pub fn endpoint(&self) -> Point2 {
        self.origin + self.displacement()
    }

    /// Point at parameter `t`, where `t = 0` is the origin and `t = 1` the endpoint.
    pub fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.displacement() * t
    }
}
