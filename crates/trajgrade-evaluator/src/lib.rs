//! Grading a trajectory against a scene.
//!
//! An evaluation runs three independent passes and combines them in a scorer:
//!
//! 1. **Collision** ([`collision`]) - tests every waypoint disc and every
//!    segment capsule against every obstacle square and reports each hit.
//! 2. **Boundary** ([`boundary`]) - flags waypoints that leave the map.
//! 3. **Scoring** ([`scorer`]) - turns hits and boundary flags into per-waypoint
//!    penalties, and adds the length, goal-distance and heading terms.
//!
//! # Architecture
//!
//! ```text
//! Evaluator::evaluate(scene, trajectory)
//!     ├── CollisionEvaluator::find_hits ─┐
//!     ├── out_of_map ────────────────────┤
//!     └── Scorer::score <────────────────┘
//!             ↓
//!       EvaluationResult
//! ```
//!
//! Every pass only reads the scene and the trajectory. Their derived geometry is
//! memoized inside them, so evaluating the same pair again reuses it and yields a
//! bit-identical [`EvaluationResult`].
//!
//! # Example
//!
//! ```
//! use trajgrade_engine::{MapSize, Scene, Trajectory};
//! use trajgrade_geometry::Point;
//!
//! let scene = Scene::new(
//!     MapSize::new(1.0, 1.0),
//!     0.01,
//!     vec![],
//!     Point::new(0.1, 0.1),
//!     Point::new(0.9, 0.9),
//! )
//! .unwrap();
//! let trajectory = Trajectory::new([Point::new(0.1, 0.1), Point::new(0.9, 0.9)]).unwrap();
//!
//! let result = trajgrade_evaluator::evaluate(&scene, &trajectory);
//! assert!(result.hits.is_empty());
//! assert_eq!(result.global_score, 1.0);
//! assert_eq!(result.point_scores, vec![0.0, 0.2]);
//! ```
//!
//! # Parallelism
//!
//! [`CollisionEvaluator`] can test shape pairs on the `rayon` thread pool. The
//! hits are collected in pair order either way, so the result does not depend on
//! the setting.

pub use self::{boundary::*, collision::*, evaluation::*, scorer::*};

pub mod boundary;
pub mod collision;
pub mod evaluation;
pub mod scorer;
