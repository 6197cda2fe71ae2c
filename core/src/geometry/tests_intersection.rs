use crate::geometry::{
    dist_sq, line_circle_intersections, ray_circle_intersections, ApproxEq, Circle, GeometryError,
    Line, Point2, Ray,
};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const TOL: f64 = 1e-6;

fn on_circle(pt: &Point2, r: f64, p: f64, q: f64) -> bool {
    let lhs = (pt.x - p).powi(2) + (pt.y - q).powi(2);
    // Relative tolerance, since r² grows fast
    (lhs - r * r).abs() <= TOL * (1.0 + r * r)
}

#[test]
fn test_line_points_satisfy_both_equations() {
    let slopes = [-4.0, -1.0, -0.25, 0.0, 0.5, 1.0, 3.0];
    let intercepts = [-12.0, -3.0, 0.0, 2.5, 9.0];
    let centers = [(0.0, 0.0), (3.0, -2.0), (-5.0, 4.0)];

    for &m in &slopes {
        for &b in &intercepts {
            for &(p, q) in &centers {
                let r = 6.0;
                for pt in line_circle_intersections(m, b, r, p, q) {
                    assert!(
                        (pt.y - (m * pt.x + b)).abs() < TOL,
                        "point {:?} off line m={} b={}", pt, m, b
                    );
                    assert!(on_circle(&pt, r, p, q), "point {:?} off circle", pt);
                }
            }
        }
    }
}

#[test]
fn test_line_point_count_follows_discriminant() {
    for &(m, b, r, p, q) in &[
        (0.0, 0.0, 5.0, 0.0, 0.0),
        (1.0, 1.0, 100.0, 0.0, 0.0),
        (0.0, 5.0, 5.0, 0.0, 0.0),
        (0.0, 10.0, 5.0, 0.0, 0.0),
        (2.0, -3.0, 1.0, 4.0, 4.0),
        (-0.5, 2.0, 3.0, -1.0, 1.0),
    ] {
        let a = 1.0 + m * m;
        let bb = 2.0 * (m * b - m * q - p);
        let c = b * b + q * q - r * r + p * p - 2.0 * b * q;
        let d = bb * bb - 4.0 * a * c;
        let expected = if d < 0.0 { 0 } else if d == 0.0 { 1 } else { 2 };
        assert_eq!(line_circle_intersections(m, b, r, p, q).len(), expected);
    }
}

#[test]
fn test_line_offset_circle_tangent() {
    // Horizontal line touching the bottom of a circle centered at (3, 4)
    let hits = line_circle_intersections(0.0, 2.0, 2.0, 3.0, 4.0);
    assert_eq!(hits.len(), 1);
    assert!(hits[0].approx_eq(&Point2::new(3.0, 2.0)));
}

#[test]
fn test_line_order_is_plus_root_first() {
    // Diagonal through an offset center; +√D root has the larger x
    let hits = line_circle_intersections(1.0, 0.0, 2.0_f64.sqrt(), 1.0, 1.0);
    assert_eq!(hits.len(), 2);
    assert!(hits[0].x > hits[1].x);
    assert!(hits[0].approx_eq(&Point2::new(2.0, 2.0)));
    assert!(hits[1].approx_eq(&Point2::new(0.0, 0.0)));
}

#[test]
fn test_line_negative_radius_is_accepted() {
    // Only r² enters the equation
    let hits = line_circle_intersections(0.0, 0.0, -5.0, 0.0, 0.0);
    assert_eq!(hits.len(), 2);
}

#[test]
fn test_line_solver_is_idempotent() {
    let first = line_circle_intersections(0.3, -1.7, 8.0, 2.0, -1.0);
    let second = line_circle_intersections(0.3, -1.7, 8.0, 2.0, -1.0);
    assert_eq!(first, second);
}

#[test]
fn test_circle_intersect_line_matches_free_function() {
    let circle = Circle::new(Point2::new(1.0, -2.0), 4.0);
    let line = Line::new(0.75, 0.5);
    assert_eq!(
        circle.intersect_line(&line),
        line_circle_intersections(0.75, 0.5, 4.0, 1.0, -2.0)
    );
}

#[test]
fn test_ray_through_circle_orders_by_distance() {
    // From the left, straight through a circle at the origin
    let hits = ray_circle_intersections(-10.0, 0.0, 0.0, 20.0, 5.0, 0.0, 0.0).unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits[0].approx_eq(&Point2::new(-5.0, 0.0)));
    assert!(hits[1].approx_eq(&Point2::new(5.0, 0.0)));
}

#[test]
fn test_ray_ordering_holds_for_any_direction() {
    let origin = Point2::new(-3.0, -8.0);
    for step in 0..16 {
        let angle = step as f64 * PI / 8.0;
        let hits = ray_circle_intersections(origin.x, origin.y, angle, 40.0, 6.0, 1.0, 2.0).unwrap();
        assert!(hits.len() <= 2);
        if hits.len() == 2 {
            assert!(dist_sq(&origin, &hits[0]) < dist_sq(&origin, &hits[1]));
        }
        for pt in &hits {
            assert!(on_circle(pt, 6.0, 1.0, 2.0));
        }
    }
}

#[test]
fn test_ray_stops_short_of_circle() {
    let hits = ray_circle_intersections(-20.0, 0.0, 0.0, 10.0, 5.0, 0.0, 0.0).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_ray_pointing_away_from_circle() {
    let hits = ray_circle_intersections(10.0, 0.0, 0.0, 50.0, 5.0, 0.0, 0.0).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_ray_ending_inside_circle_hits_once() {
    let hits = ray_circle_intersections(-10.0, 0.0, 0.0, 10.0, 5.0, 0.0, 0.0).unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].approx_eq(&Point2::new(-5.0, 0.0)));
}

#[test]
fn test_ray_endpoint_on_circle_is_excluded() {
    // t = 1 exactly at (-5, 0)
    let hits = ray_circle_intersections(-10.0, 0.0, 0.0, 5.0, 5.0, 0.0, 0.0).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_ray_origin_on_circle_is_excluded() {
    // Starts on the circle heading outward: t = 0 root only
    let hits = ray_circle_intersections(5.0, 0.0, 0.0, 10.0, 5.0, 0.0, 0.0).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_ray_tangent_reports_single_point() {
    let hits = ray_circle_intersections(-10.0, 5.0, 0.0, 20.0, 5.0, 0.0, 0.0).unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].approx_eq(&Point2::new(0.0, 5.0)));
}

#[test]
fn test_ray_vertical_direction() {
    let hits = ray_circle_intersections(0.0, -10.0, FRAC_PI_2, 20.0, 5.0, 0.0, 0.0).unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits[0].approx_eq(&Point2::new(0.0, -5.0)));
    assert!(hits[1].approx_eq(&Point2::new(0.0, 5.0)));
}

#[test]
fn test_ray_negative_magnitude_points_backwards() {
    // Flipping the magnitude is the same as flipping the angle
    let back = ray_circle_intersections(10.0, 0.0, 0.0, -20.0, 5.0, 0.0, 0.0).unwrap();
    let turned = ray_circle_intersections(10.0, 0.0, PI, 20.0, 5.0, 0.0, 0.0).unwrap();
    assert_eq!(back.len(), 2);
    assert!(back[..].approx_eq(&turned[..]));
}

#[test]
fn test_ray_zero_magnitude_never_yields_nan() {
    for &angle in &[0.0, FRAC_PI_4, PI, -2.0] {
        match ray_circle_intersections(0.0, 0.0, angle, 0.0, 5.0, 0.0, 0.0) {
            Err(GeometryError::DegenerateInput(msg)) => assert!(msg.contains("magnitude")),
            other => panic!("expected degenerate input, got {:?}", other),
        }
    }
}

#[test]
fn test_ray_nan_magnitude_rejected() {
    let result = ray_circle_intersections(0.0, 0.0, 0.0, f64::NAN, 5.0, 0.0, 0.0);
    assert!(result.is_err());
}

#[test]
fn test_circle_intersect_ray() {
    let circle = Circle::new(Point2::new(10.0, 10.0), 2.0);
    let ray = Ray::new(Point2::origin(), FRAC_PI_4, 30.0);
    let hits = circle.intersect_ray(&ray).unwrap();
    assert_eq!(hits.len(), 2);

    let d = 10.0 * 2.0_f64.sqrt();
    let first = ray.point_at((d - 2.0) / 30.0);
    let second = ray.point_at((d + 2.0) / 30.0);
    assert!(hits[0].approx_eq(&first));
    assert!(hits[1].approx_eq(&second));
}
