//! Scene generation and the answer lifecycle.
//!
//! [`create_scene`] turns a [`ScenarioConfig`] and a [`ScenarioSeed`] into a
//! reproducible [`Scene`](crate::Scene). A [`Game`] owns one scene and at most
//! one submitted trajectory; evaluation is only possible once a trajectory has
//! been applied.

pub use self::{game::*, scenario::*};

mod game;
mod scenario;
