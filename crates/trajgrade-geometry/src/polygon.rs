use std::{iter, slice};

use serde::Serialize;

use crate::Point;

/// A simple polygon with an optional set of holes.
///
/// The exterior ring is always stored counter-clockwise and every hole
/// clockwise, regardless of the order the vertices were supplied in. Rings are
/// implicitly closed: the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    exterior: Vec<Point>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    interiors: Vec<Vec<Point>>,
}

impl Polygon {
    /// Creates a polygon without holes.
    #[must_use]
    pub fn new<I>(exterior: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self::with_interiors(exterior, iter::empty::<Vec<Point>>())
    }

    /// Creates a polygon with holes.
    #[must_use]
    pub fn with_interiors<I, H>(exterior: I, interiors: H) -> Self
    where
        I: IntoIterator<Item = Point>,
        H: IntoIterator<Item = Vec<Point>>,
    {
        let mut exterior = exterior.into_iter().collect::<Vec<_>>();
        if signed_area(&exterior) < 0.0 {
            exterior.reverse();
        }
        let interiors = interiors
            .into_iter()
            .map(|mut ring| {
                if signed_area(&ring) > 0.0 {
                    ring.reverse();
                }
                ring
            })
            .collect();
        Self {
            exterior,
            interiors,
        }
    }

    #[must_use]
    pub fn exterior(&self) -> &[Point] {
        &self.exterior
    }

    #[must_use]
    pub fn interiors(&self) -> &[Vec<Point>] {
        &self.interiors
    }

    /// Iterates the exterior edges as `(from, to)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        ring_edges(&self.exterior)
    }

    /// Enclosed area: exterior minus holes.
    #[must_use]
    pub fn area(&self) -> f64 {
        let holes = self
            .interiors
            .iter()
            .map(|ring| signed_area(ring).abs())
            .sum::<f64>();
        signed_area(&self.exterior).abs() - holes
    }

    /// Returns `true` if the polygon has no holes and its exterior turns the same way at every vertex.
    ///
    /// Collinear vertices are tolerated.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        if !self.interiors.is_empty() || self.exterior.len() < 3 {
            return false;
        }
        let n = self.exterior.len();
        (0..n).all(|i| {
            let a = self.exterior[i];
            let b = self.exterior[(i + 1) % n];
            let c = self.exterior[(i + 2) % n];
            (b - a).cross(c - b) >= -1e-12
        })
    }

    /// Even-odd containment test over all rings.
    ///
    /// Points exactly on the boundary may be classified either way.
    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        iter::once(&self.exterior)
            .chain(&self.interiors)
            .filter(|ring| ray_crossings_odd(ring, p))
            .count()
            % 2
            == 1
    }
}

pub(crate) fn ring_edges(ring: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let next = ring.iter().cycle().skip(1);
    iter::zip(ring.iter().copied(), next.copied())
}

/// Shoelace area; positive for counter-clockwise rings.
pub(crate) fn signed_area(ring: &[Point]) -> f64 {
    ring_edges(ring).map(|(a, b)| a.cross(b)).sum::<f64>() * 0.5
}

fn ray_crossings_odd(ring: &[Point], p: Point) -> bool {
    let mut inside = false;
    for (a, b) in ring_edges(ring) {
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

/// A region represented as a list of simple, possibly disjoint polygons.
///
/// This is the only shape union results take: a single merged region is a
/// one-element set, and an empty union is an empty set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PolygonSet(Vec<Polygon>);

impl PolygonSet {
    #[must_use]
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Polygon> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Polygon] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Polygon> {
        self.0
    }

    /// Total covered area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.0.iter().map(Polygon::area).sum()
    }
}

impl FromIterator<Polygon> for PolygonSet {
    fn from_iter<T: IntoIterator<Item = Polygon>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PolygonSet {
    type Item = &'a Polygon;
    type IntoIter = slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for PolygonSet {
    type Item = Polygon;
    type IntoIter = std::vec::IntoIter<Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square_cw() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_exterior_normalized_to_ccw() {
        let polygon = Polygon::new(unit_square_cw());
        assert!(signed_area(polygon.exterior()) > 0.0);
        assert!((polygon.area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_holes_normalized_to_cw_and_subtracted() {
        let hole = vec![
            Point::new(0.25, 0.25),
            Point::new(0.75, 0.25),
            Point::new(0.75, 0.75),
            Point::new(0.25, 0.75),
        ];
        let polygon = Polygon::with_interiors(unit_square_cw(), [hole]);
        assert!(signed_area(&polygon.interiors()[0]) < 0.0);
        assert!((polygon.area() - 0.75).abs() < 1e-12);
        assert!(!polygon.is_convex());
        assert!(!polygon.contains_point(Point::new(0.5, 0.5)));
        assert!(polygon.contains_point(Point::new(0.1, 0.5)));
    }

    #[test]
    fn test_convexity() {
        assert!(Polygon::new(unit_square_cw()).is_convex());
        let notch = Polygon::new([
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 2.0),
        ]);
        assert!(!notch.is_convex());
    }

    #[test]
    fn test_contains_point() {
        let polygon = Polygon::new(unit_square_cw());
        assert!(polygon.contains_point(Point::new(0.5, 0.5)));
        assert!(!polygon.contains_point(Point::new(1.5, 0.5)));
        assert!(!polygon.contains_point(Point::new(0.5, -0.1)));
    }

    #[test]
    fn test_edges_are_closed() {
        let polygon = Polygon::new(unit_square_cw());
        let edges = polygon.edges().collect::<Vec<_>>();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].1, edges[0].0);
    }

    #[test]
    fn test_polygon_set_area() {
        let a = Polygon::new(unit_square_cw());
        let b = Polygon::new(unit_square_cw().into_iter().map(|p| p + Point::new(3.0, 0.0)));
        let set = PolygonSet::from_iter([a, b]);
        assert_eq!(set.len(), 2);
        assert!((set.area() - 2.0).abs() < 1e-12);
    }
}
