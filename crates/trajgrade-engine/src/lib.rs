//! Scene and trajectory model for trajectory grading.
//!
//! - [`core`] - the value types an evaluation consumes: [`Obstacle`], [`Scene`],
//!   [`Trajectory`], together with their memoized derived geometry
//! - [`engine`] - building scenes from a seeded [`ScenarioConfig`] and the
//!   [`Game`] lifecycle that pairs a scene with a submitted answer
//!
//! # Example
//!
//! ```
//! use trajgrade_engine::{Game, ScenarioConfig, ScenarioSeed};
//! use trajgrade_geometry::Point;
//!
//! let config = ScenarioConfig::default();
//! let mut game = Game::from_config(&config, ScenarioSeed::from_u64(7)).unwrap();
//! assert!(game.answer().is_err());
//!
//! game.apply_trajectory([Point::new(0.0, 0.0), Point::new(0.5, 0.5)]).unwrap();
//! let trajectory = game.answer().unwrap();
//! assert_eq!(trajectory.len(), 2);
//! ```

use trajgrade_geometry::Point;

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Construction input that would produce meaningless geometry.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigurationError {
    #[display("map size must be positive and finite, got {width} x {height}")]
    InvalidMapSize { width: f64, height: f64 },
    #[display("self radius must be positive and finite, got {radius}")]
    InvalidSelfRadius { radius: f64 },
    #[display("obstacle width must be positive and finite, got {width}")]
    InvalidObstacleWidth { width: f64 },
    #[display("obstacle angle must be finite, got {angle}")]
    InvalidObstacleAngle { angle: f64 },
    #[display("{what} must have finite coordinates, got {point}")]
    NonFinitePoint { what: &'static str, point: Point },
    #[display("trajectory must contain at least one waypoint")]
    EmptyTrajectory,
    #[display("{name} must satisfy {min_bound} <= min <= max, got ({min}, {max})")]
    InvalidRange {
        name: &'static str,
        min_bound: f64,
        min: f64,
        max: f64,
    },
}

/// Evaluation requested in a state that cannot produce a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EvaluateError {
    #[display("no trajectory has been applied to the scene")]
    InvalidState,
}
