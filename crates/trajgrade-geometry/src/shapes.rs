use std::f64::consts::{FRAC_PI_2, PI, SQRT_2, TAU};

use crate::{Point, Polygon};

/// Number of segments used per quarter circle by [`disc`] when callers have no preference.
pub const DEFAULT_QUAD_SEGS: usize = 16;

/// Vertices of a square of side `width` centered on `center`, rotated by `angle` full turns.
///
/// `angle` is a fraction of a full turn (`0.25` is 90 degrees, counter-clockwise).
/// The vertices lie on the circumscribed circle of radius `width / 2 * sqrt(2)` at
/// angles `a`, `a + pi/2`, `a + pi`, `a + 3pi/2` where `a = 2 pi angle`, so they are
/// returned in counter-clockwise order starting at `a`.
#[must_use]
pub fn square_vertices(center: Point, width: f64, angle: f64) -> [Point; 4] {
    let r = width / 2.0 * SQRT_2;
    let a = TAU * angle;
    [a, a + FRAC_PI_2, a + PI, a - FRAC_PI_2].map(|theta| center + Point::from_polar(r, theta))
}

/// Rectangle covering the segment `p0 -> p1` widened by `radius` on both sides.
///
/// The ends are flat; the rounded caps of a swept disc are expected to be
/// supplied by per-waypoint [`disc`]s. Returns `None` when `p0` and `p1`
/// coincide, since the segment has no direction.
#[must_use]
pub fn sweep_segment(p0: Point, p1: Point, radius: f64) -> Option<[Point; 4]> {
    let offset = (p1 - p0).perp().normalized(0.0)? * radius;
    Some([p0 + offset, p0 - offset, p1 - offset, p1 + offset])
}

/// Polygonal approximation of the disc of `radius` around `center`.
///
/// The circle is approximated with `4 * quad_segs` vertices starting at angle 0
/// and running counter-clockwise. `quad_segs` is clamped to at least 1.
#[must_use]
pub fn disc(center: Point, radius: f64, quad_segs: usize) -> Polygon {
    let count = 4 * quad_segs.max(1);
    #[expect(clippy::cast_precision_loss)]
    let step = TAU / count as f64;
    #[expect(clippy::cast_precision_loss)]
    let vertices = (0..count).map(|i| center + Point::from_polar(radius, step * i as f64));
    Polygon::new(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn assert_point_near(actual: Point, expected: Point) {
        assert!(
            actual.distance(expected) < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_square_vertices_equidistant_from_center() {
        let vertices = square_vertices(Point::ZERO, 2.0, 0.0);
        for v in vertices {
            assert!((v.norm() - SQRT_2).abs() < EPS);
        }
        assert_point_near(vertices[0], Point::new(SQRT_2, 0.0));
        assert_point_near(vertices[1], Point::new(0.0, SQRT_2));
        assert_point_near(vertices[2], Point::new(-SQRT_2, 0.0));
        assert_point_near(vertices[3], Point::new(0.0, -SQRT_2));
    }

    #[test]
    fn test_square_side_length_matches_width() {
        let vertices = square_vertices(Point::new(0.3, 0.7), 0.1, 0.137);
        for i in 0..4 {
            let side = vertices[i].distance(vertices[(i + 1) % 4]);
            assert!((side - 0.1).abs() < 1e-9);
        }
        let polygon = Polygon::new(vertices);
        assert!((polygon.area() - 0.01).abs() < 1e-9);
        assert_eq!(polygon.exterior(), &vertices);
    }

    #[test]
    fn test_quarter_turn_rotates_vertices_by_90_degrees() {
        let base = square_vertices(Point::ZERO, 2.0, 0.1);
        let turned = square_vertices(Point::ZERO, 2.0, 0.35);
        for (b, t) in std::iter::zip(base, turned) {
            let rotated = Point::new(-b.y, b.x);
            assert_point_near(t, rotated);
        }
    }

    #[test]
    fn test_square_translated_by_center() {
        let center = Point::new(5.0, -2.0);
        let at_origin = square_vertices(Point::ZERO, 1.0, 0.2);
        let shifted = square_vertices(center, 1.0, 0.2);
        for (o, s) in std::iter::zip(at_origin, shifted) {
            assert_point_near(s, o + center);
        }
    }

    #[test]
    fn test_sweep_segment_rectangle() {
        let rect = sweep_segment(Point::new(0.0, 0.0), Point::new(2.0, 0.0), 0.5).unwrap();
        assert_point_near(rect[0], Point::new(0.0, -0.5));
        assert_point_near(rect[1], Point::new(0.0, 0.5));
        assert_point_near(rect[2], Point::new(2.0, 0.5));
        assert_point_near(rect[3], Point::new(2.0, -0.5));
        assert!((Polygon::new(rect).area() - 2.0).abs() < EPS);
    }

    #[test]
    fn test_sweep_segment_diagonal_keeps_half_width() {
        let p0 = Point::new(0.1, 0.1);
        let p1 = Point::new(0.9, 0.9);
        let rect = sweep_segment(p0, p1, 0.01).unwrap();
        assert!((rect[0].distance(p0) - 0.01).abs() < EPS);
        assert!((rect[3].distance(p1) - 0.01).abs() < EPS);
        assert!((rect[0] - p0).dot(p1 - p0).abs() < EPS);
    }

    #[test]
    fn test_sweep_segment_degenerate() {
        let p = Point::new(0.4, 0.4);
        assert!(sweep_segment(p, p, 0.1).is_none());
    }

    #[test]
    fn test_disc_vertices() {
        let center = Point::new(1.0, 1.0);
        let polygon = disc(center, 0.5, DEFAULT_QUAD_SEGS);
        assert_eq!(polygon.exterior().len(), 64);
        for v in polygon.exterior() {
            assert!((v.distance(center) - 0.5).abs() < EPS);
        }
        assert_point_near(polygon.exterior()[0], Point::new(1.5, 1.0));
        assert!(polygon.is_convex());
        // Inscribed 64-gon is slightly smaller than the true circle.
        let circle = PI * 0.25;
        assert!(polygon.area() < circle);
        assert!(polygon.area() > circle * 0.99);
    }
}
