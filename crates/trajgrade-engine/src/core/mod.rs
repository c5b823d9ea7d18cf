//! Value types consumed by an evaluation.
//!
//! - [`Obstacle`] - immutable rotated-square obstacle descriptor
//! - [`Scene`] - map bounds, agent radius, obstacles, start and target
//! - [`Trajectory`] - ordered waypoints proposed as an answer
//!
//! Derived geometry (obstacle squares, waypoint discs, segment capsules and
//! their unions) is computed on first access and memoized inside the owning
//! value. The caches are [`std::sync::OnceLock`]s, so a shared `&Scene` or
//! `&Trajectory` can be evaluated from several threads and each cache is still
//! built exactly once.

pub use self::{obstacle::*, scene::*, trajectory::*};

mod obstacle;
mod scene;
mod trajectory;
