use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use trajgrade_geometry::Point;

use crate::{ConfigurationError, MapSize, Obstacle, Scene};

/// Parameters for generating a random scene.
///
/// The defaults describe a unit map with five obstacles between the start in
/// the lower-left corner and the target in the upper-right corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub map_size: MapSize,
    pub self_radius: f64,
    pub obstacle_count: usize,
    /// Range of obstacle centers as fractions of the map width/height.
    pub center_range_fraction: (f64, f64),
    /// Range of obstacle widths as fractions of the shorter map side.
    pub width_range_fraction: (f64, f64),
    pub start: Point,
    pub target: Point,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            map_size: MapSize::new(1.0, 1.0),
            self_radius: 0.03,
            obstacle_count: 5,
            center_range_fraction: (0.2, 0.8),
            width_range_fraction: (0.05, 0.15),
            start: Point::new(0.0, 0.0),
            target: Point::new(1.0, 1.0),
        }
    }
}

/// Seed for deterministic scene generation.
///
/// A 128-bit seed for the scene's random number generator. The same seed and
/// [`ScenarioConfig`] always produce the same scene, which makes evaluations
/// reproducible across runs and machines.
///
/// Formatted and serialized as a 32-character lowercase hex string.
///
/// # Example
///
/// ```
/// use rand::Rng as _;
/// use trajgrade_engine::{ScenarioConfig, ScenarioSeed, create_scene};
///
/// let seed: ScenarioSeed = rand::rng().random();
/// let config = ScenarioConfig::default();
///
/// let a = create_scene(&config, seed).unwrap();
/// let b = create_scene(&config, seed).unwrap();
/// assert_eq!(a.obstacles(), b.obstacles());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScenarioSeed([u8; 16]);

impl ScenarioSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Seed whose big-endian value equals `value`, handy for small fixed seeds.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Self(u128::from(value).to_be_bytes())
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for ScenarioSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

/// Seed text that is not exactly 32 hex digits.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid seed {input:?}: expected 32 hex characters")]
pub struct ParseSeedError {
    input: String,
}

impl FromStr for ScenarioSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| invalid())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for ScenarioSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ScenarioSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `ScenarioSeed` values with `rng.random()`.
impl Distribution<ScenarioSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ScenarioSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        ScenarioSeed(seed)
    }
}

/// Linearly maps `value` from `src_range` onto `dst_range`.
#[must_use]
pub fn interp(value: f64, src_range: (f64, f64), dst_range: (f64, f64)) -> f64 {
    (value - src_range.0) / (src_range.1 - src_range.0) * (dst_range.1 - dst_range.0)
        + dst_range.0
}

fn check_range(
    name: &'static str,
    (min, max): (f64, f64),
    min_bound: f64,
    allow_min_bound: bool,
) -> Result<(), ConfigurationError> {
    let above_bound = if allow_min_bound {
        min >= min_bound
    } else {
        min > min_bound
    };
    if min.is_finite() && max.is_finite() && above_bound && min <= max {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidRange {
            name,
            min_bound,
            min,
            max,
        })
    }
}

/// Builds a scene whose obstacles are drawn uniformly from the ranges in `config`.
///
/// For each obstacle the generator draws, in order, the center x, the center y,
/// the width and the rotation, each from a uniform `[0, 1)` sample mapped onto
/// its configured range. Rotations cover the full `[0, 1)` turn.
pub fn create_scene(
    config: &ScenarioConfig,
    seed: ScenarioSeed,
) -> Result<Scene, ConfigurationError> {
    check_range("center_range_fraction", config.center_range_fraction, 0.0, true)?;
    check_range("width_range_fraction", config.width_range_fraction, 0.0, false)?;

    let mut rng = Pcg32::from_seed(seed.0);
    let MapSize { width, height } = config.map_size;
    let (c0, c1) = config.center_range_fraction;
    let (w0, w1) = config.width_range_fraction;
    let min_side = config.map_size.min_side();
    let unit = (0.0, 1.0);

    let obstacles = (0..config.obstacle_count)
        .map(|_| {
            let cx = interp(rng.random(), unit, (width * c0, width * c1));
            let cy = interp(rng.random(), unit, (height * c0, height * c1));
            let obstacle_width = interp(rng.random(), unit, (min_side * w0, min_side * w1));
            let angle = rng.random();
            Obstacle::new(Point::new(cx, cy), obstacle_width, angle)
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "generated scene with {} obstacles from seed {seed}",
        obstacles.len()
    );
    Scene::new(
        config.map_size,
        config.self_radius,
        obstacles,
        config.start,
        config.target,
    )
}
