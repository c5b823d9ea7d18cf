use std::{borrow::Cow, sync::OnceLock};

use serde::{Deserialize, Serialize};
use trajgrade_geometry::{
    DEFAULT_QUAD_SEGS, Point, Polygon, PolygonSet, disc, sweep_segment, union_polygons,
};

use crate::ConfigurationError;

/// Consecutive waypoints closer than this form no segment capsule.
pub const MIN_SEGMENT_LENGTH: f64 = 1e-6;

/// Swept rectangle of one trajectory segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentCapsule {
    /// Index of the waypoint the segment starts at; it ends at `start + 1`.
    pub start: usize,
    pub polygon: Polygon,
}

impl SegmentCapsule {
    /// Waypoint indices `(start, start + 1)` joined by this segment.
    #[must_use]
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.start + 1)
    }
}

/// Derived value together with the agent radius it was built for.
#[derive(Debug, Clone)]
struct RadiusTagged<T> {
    radius: f64,
    value: T,
}

/// Returns the cached value for `radius`, building and caching it on first access.
///
/// The cache holds the value for the first radius requested; other radii are
/// built fresh every time instead of reusing geometry of the wrong size.
fn get_or_build<'a, T, F>(
    cell: &'a OnceLock<RadiusTagged<T>>,
    radius: f64,
    what: &str,
    build: F,
) -> Cow<'a, T>
where
    T: Clone,
    F: Fn(f64) -> T,
{
    let cached = cell.get_or_init(|| {
        log::debug!("building trajectory {what} (radius {radius})");
        RadiusTagged {
            radius,
            value: build(radius),
        }
    });
    if cached.radius.to_bits() == radius.to_bits() {
        Cow::Borrowed(&cached.value)
    } else {
        log::warn!(
            "trajectory {what} cached for radius {}, rebuilding uncached for radius {radius}",
            cached.radius
        );
        Cow::Owned(build(radius))
    }
}

fn into_slice<T: Clone>(values: Cow<'_, Vec<T>>) -> Cow<'_, [T]> {
    match values {
        Cow::Borrowed(values) => Cow::Borrowed(values.as_slice()),
        Cow::Owned(values) => Cow::Owned(values),
    }
}

/// Ordered waypoints proposed as the answer to a scene.
///
/// Serialized as a list of `[x, y]` pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Trajectory {
    points: Vec<Point>,
    waypoint_buffers: OnceLock<RadiusTagged<Vec<Polygon>>>,
    segment_capsules: OnceLock<RadiusTagged<Vec<SegmentCapsule>>>,
    union: OnceLock<RadiusTagged<PolygonSet>>,
}

impl TryFrom<Vec<Point>> for Trajectory {
    type Error = ConfigurationError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Trajectory> for Vec<Point> {
    fn from(trajectory: Trajectory) -> Self {
        trajectory.points
    }
}

impl Trajectory {
    /// Creates a trajectory from at least one finite waypoint.
    pub fn new<I>(points: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = Point>,
    {
        let points = points.into_iter().collect::<Vec<_>>();
        if points.is_empty() {
            return Err(ConfigurationError::EmptyTrajectory);
        }
        if let Some(&point) = points.iter().find(|p| !p.is_finite()) {
            return Err(ConfigurationError::NonFinitePoint {
                what: "waypoint",
                point,
            });
        }
        Ok(Self {
            points,
            waypoint_buffers: OnceLock::new(),
            segment_capsules: OnceLock::new(),
            union: OnceLock::new(),
        })
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a trajectory has at least one waypoint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Point {
        self.points[0]
    }

    #[must_use]
    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Disc of `radius` around every waypoint, in waypoint order.
    #[must_use]
    pub fn waypoint_buffers(&self, radius: f64) -> Cow<'_, [Polygon]> {
        let buffers = get_or_build(&self.waypoint_buffers, radius, "waypoint buffers", |r| {
            self.points
                .iter()
                .map(|&p| disc(p, r, DEFAULT_QUAD_SEGS))
                .collect()
        });
        into_slice(buffers)
    }

    /// Swept rectangle of every segment longer than [`MIN_SEGMENT_LENGTH`].
    ///
    /// Skipped segments leave gaps in the numbering, so each capsule carries
    /// the index of the waypoint it starts from.
    #[must_use]
    pub fn segment_capsules(&self, radius: f64) -> Cow<'_, [SegmentCapsule]> {
        let capsules = get_or_build(&self.segment_capsules, radius, "segment capsules", |r| {
            self.points
                .windows(2)
                .enumerate()
                .filter(|(_, pair)| pair[0].distance(pair[1]) > MIN_SEGMENT_LENGTH)
                .filter_map(|(start, pair)| {
                    let rect = sweep_segment(pair[0], pair[1], r)?;
                    Some(SegmentCapsule {
                        start,
                        polygon: Polygon::new(rect),
                    })
                })
                .collect()
        });
        into_slice(capsules)
    }

    /// Region swept by the agent: union of waypoint discs and segment capsules.
    ///
    /// Only needed for visualization.
    #[must_use]
    pub fn union(&self, radius: f64) -> Cow<'_, PolygonSet> {
        get_or_build(&self.union, radius, "union", |r| {
            let mut shapes = self.waypoint_buffers(r).into_owned();
            shapes.extend(
                self.segment_capsules(r)
                    .iter()
                    .map(|capsule| capsule.polygon.clone()),
            );
            union_polygons(&shapes)
        })
    }
}
