//! Map boundary check.

use trajgrade_engine::{Scene, Trajectory};

/// Flags, per waypoint, whether it lies outside the map.
///
/// Points on the map border count as inside.
#[must_use]
pub fn out_of_map(scene: &Scene, trajectory: &Trajectory) -> Vec<bool> {
    let map_size = scene.map_size();
    trajectory
        .points()
        .iter()
        .map(|&p| !map_size.contains(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use trajgrade_engine::MapSize;
    use trajgrade_geometry::Point;

    use super::*;

    #[test]
    fn test_out_of_map() {
        let scene = Scene::new(
            MapSize::new(1.0, 1.0),
            0.03,
            vec![],
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
        )
        .unwrap();
        let test_cases = [
            ((0.5, 0.5), false),
            ((1.5, 0.5), true),
            ((0.0, 0.0), false),
            ((1.0, 1.0), false),
            ((-0.01, 0.5), true),
            ((0.5, -0.01), true),
            ((0.5, 1.01), true),
        ];
        let trajectory =
            Trajectory::new(test_cases.iter().map(|&(p, _)| Point::from(p))).unwrap();
        let expected = test_cases.iter().map(|&(_, out)| out).collect::<Vec<_>>();
        assert_eq!(out_of_map(&scene, &trajectory), expected);
    }
}
