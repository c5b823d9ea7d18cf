//! Areal predicates between polygons.
//!
//! Both predicates follow the DE-9IM conventions for surfaces:
//!
//! | relation between A and B               | [`interiors_intersect`] | [`overlaps`] |
//! |----------------------------------------|-------------------------|--------------|
//! | disjoint, or only boundaries touch     | `false`                 | `false`      |
//! | partial interior intersection          | `true`                  | `true`       |
//! | one contains the other (or equal)      | `true`                  | `false`      |
//!
//! Convex inputs (every shape built by this crate) take an exact
//! separating-axis path. Anything else falls back to measuring boolean-operation
//! areas with `i_overlay`.

use i_overlay::{
    core::{fill_rule::FillRule, overlay_rule::OverlayRule},
    float::single::SingleFloatOverlay as _,
};

use crate::{Point, Polygon, polygon::ring_edges};

/// Distance below which two boundaries are considered touching.
pub const OVERLAP_TOLERANCE: f64 = 1e-12;

/// Area below which a boolean-operation result is treated as empty.
const AREA_TOLERANCE: f64 = 1e-9;

/// Returns `true` iff the interiors of `a` and `b` intersect and neither contains the other.
///
/// The relation is symmetric: `overlaps(a, b) == overlaps(b, a)`.
#[must_use]
pub fn overlaps(a: &Polygon, b: &Polygon) -> bool {
    if a.is_convex() && b.is_convex() {
        let (a, b) = (a.exterior(), b.exterior());
        convex_interiors_intersect(a, b) && !convex_covers(a, b) && !convex_covers(b, a)
    } else {
        let areas = OverlayAreas::compute(a, b);
        areas.shared > AREA_TOLERANCE
            && areas.only_a > AREA_TOLERANCE
            && areas.only_b > AREA_TOLERANCE
    }
}

/// Returns `true` iff the interiors of `a` and `b` share some area, including containment.
#[must_use]
pub fn interiors_intersect(a: &Polygon, b: &Polygon) -> bool {
    if a.is_convex() && b.is_convex() {
        convex_interiors_intersect(a.exterior(), b.exterior())
    } else {
        OverlayAreas::compute(a, b).shared > AREA_TOLERANCE
    }
}

/// Separating axis test on counter-clockwise convex rings.
///
/// An axis whose projections meet in at most a single point separates the
/// interiors, so touching shapes are reported as not intersecting.
fn convex_interiors_intersect(a: &[Point], b: &[Point]) -> bool {
    let axes = ring_edges(a)
        .chain(ring_edges(b))
        .filter_map(|(p, q)| (q - p).perp().normalized(0.0));
    for axis in axes {
        let (a_min, a_max) = project(a, axis);
        let (b_min, b_max) = project(b, axis);
        if a_max <= b_min + OVERLAP_TOLERANCE || b_max <= a_min + OVERLAP_TOLERANCE {
            return false;
        }
    }
    true
}

fn project(ring: &[Point], axis: Point) -> (f64, f64) {
    ring.iter()
        .map(|p| p.dot(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), d| {
            (min.min(d), max.max(d))
        })
}

/// Returns `true` if every vertex of `inner` lies inside or on the convex ring `outer`.
///
/// For a convex `outer` this is exactly "`inner` is covered by `outer`".
fn convex_covers(outer: &[Point], inner: &[Point]) -> bool {
    ring_edges(outer).all(|(p, q)| {
        let edge = q - p;
        let len = edge.norm();
        if len == 0.0 {
            return true;
        }
        inner
            .iter()
            .all(|v| edge.cross(*v - p) / len >= -OVERLAP_TOLERANCE)
    })
}

/// Areas of the three regions two polygons split the plane into.
#[derive(Debug, Clone, Copy)]
struct OverlayAreas {
    shared: f64,
    only_a: f64,
    only_b: f64,
}

impl OverlayAreas {
    fn compute(a: &Polygon, b: &Polygon) -> Self {
        let a_contours = contours(a);
        let b_contours = contours(b);
        let area = |subject: &Vec<Vec<[f64; 2]>>, clip: &Vec<Vec<[f64; 2]>>, rule| {
            subject
                .overlay(clip, rule, FillRule::NonZero)
                .iter()
                .map(|shape| shape_area(shape))
                .sum::<f64>()
        };
        Self {
            shared: area(&a_contours, &b_contours, OverlayRule::Intersect),
            only_a: area(&a_contours, &b_contours, OverlayRule::Difference),
            only_b: area(&b_contours, &a_contours, OverlayRule::Difference),
        }
    }
}

/// Exterior (counter-clockwise) followed by holes (clockwise), as `i_overlay` contours.
pub(crate) fn contours(polygon: &Polygon) -> Vec<Vec<[f64; 2]>> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors().iter().map(Vec::as_slice))
        .map(|ring| ring.iter().map(|&p| p.into()).collect())
        .collect()
}

/// Area of an `i_overlay` shape: first contour is the outer boundary, the rest are holes.
pub(crate) fn shape_area(shape: &[Vec<[f64; 2]>]) -> f64 {
    let ring_area = |contour: &Vec<[f64; 2]>| {
        let ring = contour.iter().map(|&p| Point::from(p)).collect::<Vec<_>>();
        crate::polygon::signed_area(&ring).abs()
    };
    let Some((outer, holes)) = shape.split_first() else {
        return 0.0;
    };
    ring_area(outer) - holes.iter().map(ring_area).sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{disc, square_vertices, sweep_segment};

    fn square(cx: f64, cy: f64, width: f64, angle: f64) -> Polygon {
        Polygon::new(square_vertices(Point::new(cx, cy), width, angle))
    }

    fn axis_box(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        Polygon::new([
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    /// Non-convex "U" shape opening upwards, spanning [0, 3] x [0, 3].
    fn u_shape() -> Polygon {
        Polygon::new([
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 3.0),
            Point::new(2.0, 3.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 3.0),
            Point::new(0.0, 3.0),
        ])
    }

    #[test]
    fn test_relations_on_convex_shapes() {
        // (name, a, b, overlaps, interiors_intersect)
        let test_cases = vec![
            (
                "disjoint",
                axis_box(0.0, 0.0, 1.0, 1.0),
                axis_box(2.0, 2.0, 3.0, 3.0),
                false,
                false,
            ),
            (
                "touching edge",
                axis_box(0.0, 0.0, 1.0, 1.0),
                axis_box(1.0, 0.0, 2.0, 1.0),
                false,
                false,
            ),
            (
                "touching corner",
                axis_box(0.0, 0.0, 1.0, 1.0),
                axis_box(1.0, 1.0, 2.0, 2.0),
                false,
                false,
            ),
            (
                "partial",
                axis_box(0.0, 0.0, 1.0, 1.0),
                axis_box(0.5, 0.5, 1.5, 1.5),
                true,
                true,
            ),
            (
                "contained",
                axis_box(0.0, 0.0, 1.0, 1.0),
                axis_box(0.25, 0.25, 0.75, 0.75),
                false,
                true,
            ),
            (
                "equal",
                axis_box(0.0, 0.0, 1.0, 1.0),
                axis_box(0.0, 0.0, 1.0, 1.0),
                false,
                true,
            ),
            (
                "rotated partial",
                square(0.0, 0.0, 1.0, 0.0),
                axis_box(0.6, -0.1, 1.0, 0.1),
                true,
                true,
            ),
            (
                "rotated diamond near corner",
                square(0.0, 0.0, 1.0, 0.0),
                axis_box(0.5, 0.5, 1.0, 1.0),
                false,
                false,
            ),
        ];

        for (name, a, b, expected_overlaps, expected_intersect) in test_cases {
            assert_eq!(overlaps(&a, &b), expected_overlaps, "{name}: overlaps(a, b)");
            assert_eq!(overlaps(&b, &a), expected_overlaps, "{name}: overlaps(b, a)");
            assert_eq!(
                interiors_intersect(&a, &b),
                expected_intersect,
                "{name}: interiors_intersect(a, b)"
            );
            assert_eq!(
                interiors_intersect(&b, &a),
                expected_intersect,
                "{name}: interiors_intersect(b, a)"
            );
        }
    }

    #[test]
    fn test_disc_inside_square_does_not_overlap() {
        let obstacle = square(0.5, 0.5, 0.2, 0.3);
        let waypoint = disc(Point::new(0.5, 0.5), 0.03, 16);
        assert!(!overlaps(&obstacle, &waypoint));
        assert!(interiors_intersect(&obstacle, &waypoint));
    }

    #[test]
    fn test_disc_larger_than_square_does_not_overlap() {
        let obstacle = square(0.5, 0.5, 0.02, 0.0);
        let waypoint = disc(Point::new(0.5, 0.5), 0.1, 16);
        assert!(!overlaps(&obstacle, &waypoint));
        assert!(interiors_intersect(&waypoint, &obstacle));
    }

    #[test]
    fn test_disc_straddling_square_edge_overlaps() {
        let obstacle = axis_box(0.4, 0.4, 0.6, 0.6);
        let waypoint = disc(Point::new(0.6, 0.5), 0.03, 16);
        assert!(overlaps(&obstacle, &waypoint));
        assert!(overlaps(&waypoint, &obstacle));
    }

    #[test]
    fn test_capsule_crossing_square_overlaps() {
        let obstacle = square(0.5, 0.5, 0.1, 0.05);
        let capsule = Polygon::new(
            sweep_segment(Point::new(0.0, 0.0), Point::new(1.0, 1.0), 0.03).unwrap(),
        );
        assert!(overlaps(&obstacle, &capsule));
        assert!(overlaps(&capsule, &obstacle));
    }

    #[test]
    fn test_non_convex_fallback() {
        let u = u_shape();
        // Inside the notch of the U: touches nothing but the notch boundary.
        let in_notch = axis_box(1.0, 1.0, 2.0, 2.0);
        assert!(!overlaps(&u, &in_notch));
        assert!(!interiors_intersect(&u, &in_notch));

        // Crossing the left arm.
        let crossing = axis_box(0.5, 2.0, 1.5, 2.5);
        assert!(overlaps(&u, &crossing));
        assert!(overlaps(&crossing, &u));

        // Fully inside the base.
        let inside = axis_box(0.5, 0.25, 2.5, 0.75);
        assert!(!overlaps(&u, &inside));
        assert!(interiors_intersect(&u, &inside));
    }

    #[test]
    fn test_shape_area_subtracts_holes() {
        let shape = vec![
            vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]],
            vec![[0.5, 0.5], [0.5, 1.5], [1.5, 1.5], [1.5, 0.5]],
        ];
        assert!((shape_area(&shape) - 3.0).abs() < 1e-12);
    }
}
