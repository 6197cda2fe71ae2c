pub mod geometry;
pub mod scene;
pub mod units;

pub use geometry::{
    line_circle_intersections, ray_circle_intersections, GeometryError, GeometryResult, Point2,
};

pub fn version() -> &'static str {
    "0.1.0"
}
