use serde::{Deserialize, Serialize};

/// A point (or displacement vector) in map coordinates.
///
/// The map origin is the lower-left corner. Serialized as a `[x, y]` pair.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Neg,
    derive_more::Mul,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
#[display("({x}, {y})")]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from the origin in direction `angle` (radians, counter-clockwise from +x).
    #[must_use]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos * radius, sin * radius)
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product; positive when `other` is counter-clockwise from `self`.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[must_use]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).norm()
    }

    /// Returns the vector rotated by -90 degrees (`(x, y) -> (y, -x)`).
    #[must_use]
    pub fn perp(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Returns the unit vector in the same direction.
    ///
    /// Returns `None` when the length is not greater than `min_norm`, where the
    /// direction is undefined.
    #[must_use]
    pub fn normalized(self, min_norm: f64) -> Option<Self> {
        let norm = self.norm();
        (norm > min_norm && norm.is_finite()).then(|| self * norm.recip())
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
