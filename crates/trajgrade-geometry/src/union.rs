use i_overlay::{
    core::{fill_rule::FillRule, overlay_rule::OverlayRule},
    float::single::SingleFloatOverlay as _,
};

use crate::{Point, Polygon, PolygonSet, overlap::contours};

/// Merges `polygons` into the minimal set of disjoint polygons covering the same area.
///
/// The result is always a [`PolygonSet`]: empty for no input, one polygon when
/// everything merges into a single region, several when the region is split.
/// Holes enclosed by the inputs are kept as polygon interiors.
#[must_use]
pub fn union_polygons(polygons: &[Polygon]) -> PolygonSet {
    let Some((first, rest)) = polygons.split_first() else {
        return PolygonSet::default();
    };
    if rest.is_empty() {
        return PolygonSet::new(vec![first.clone()]);
    }

    let subject = contours(first);
    let clip = rest.iter().flat_map(contours).collect::<Vec<_>>();
    subject
        .overlay(&clip, OverlayRule::Union, FillRule::NonZero)
        .into_iter()
        .filter_map(|shape| {
            let mut rings = shape
                .into_iter()
                .filter(|contour| contour.len() >= 3)
                .map(|contour| contour.into_iter().map(Point::from).collect::<Vec<_>>());
            let exterior = rings.next()?;
            Some(Polygon::with_interiors(exterior, rings))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{disc, square_vertices, sweep_segment};

    fn axis_box(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        Polygon::new([
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    #[test]
    fn test_empty_input() {
        let set = union_polygons(&[]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_single_input_is_wrapped_in_set() {
        let square = Polygon::new(square_vertices(Point::new(0.5, 0.5), 0.2, 0.1));
        let set = union_polygons(std::slice::from_ref(&square));
        assert_eq!(set.len(), 1);
        assert_eq!(set.as_slice()[0], square);
    }

    #[test]
    fn test_overlapping_inputs_merge() {
        let set = union_polygons(&[axis_box(0.0, 0.0, 1.0, 1.0), axis_box(0.5, 0.0, 1.5, 1.0)]);
        assert_eq!(set.len(), 1);
        assert!((set.area() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_disjoint_inputs_stay_separate() {
        let set = union_polygons(&[
            axis_box(0.0, 0.0, 1.0, 1.0),
            axis_box(2.0, 0.0, 3.0, 1.0),
            axis_box(2.5, 0.5, 3.5, 1.5),
        ]);
        assert_eq!(set.len(), 2);
        assert!((set.area() - (1.0 + 1.75)).abs() < 1e-6);
    }

    #[test]
    fn test_ring_of_boxes_keeps_hole() {
        let set = union_polygons(&[
            axis_box(0.0, 0.0, 3.0, 1.0),
            axis_box(0.0, 2.0, 3.0, 3.0),
            axis_box(0.0, 0.0, 1.0, 3.0),
            axis_box(2.0, 0.0, 3.0, 3.0),
        ]);
        assert_eq!(set.len(), 1);
        let polygon = &set.as_slice()[0];
        assert_eq!(polygon.interiors().len(), 1);
        assert!((polygon.area() - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_capsule_chain_union_is_single_region() {
        let points = [
            Point::new(0.1, 0.1),
            Point::new(0.5, 0.2),
            Point::new(0.8, 0.7),
        ];
        let radius = 0.03;
        let mut shapes = points
            .iter()
            .map(|&p| disc(p, radius, 16))
            .collect::<Vec<_>>();
        for pair in points.windows(2) {
            shapes.push(Polygon::new(sweep_segment(pair[0], pair[1], radius).unwrap()));
        }
        let set = union_polygons(&shapes);
        assert_eq!(set.len(), 1);
        let covered = set.area();
        let total = shapes.iter().map(Polygon::area).sum::<f64>();
        assert!(covered < total);
        assert!(covered > shapes[3].area());
    }
}
