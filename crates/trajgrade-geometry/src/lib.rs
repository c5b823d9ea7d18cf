//! Geometry kernel for trajectory grading.
//!
//! This crate holds the pure geometric building blocks the engine and evaluator
//! are built on:
//!
//! - [`Point`] - 2D point/vector with the usual vector arithmetic
//! - [`Polygon`] - simple polygon (counter-clockwise exterior, optional holes)
//! - [`PolygonSet`] - normalized list of disjoint polygons produced by unions
//! - [`square_vertices`] / [`sweep_segment`] / [`disc`] - shape constructors
//! - [`overlaps`] / [`interiors_intersect`] - areal predicates
//! - [`union_polygons`] - polygon union with normalized output
//!
//! Every function here is free of caching and side effects; memoization of derived
//! shapes is the responsibility of the types that own them (see `trajgrade-engine`).
//!
//! # Example
//!
//! ```
//! use trajgrade_geometry::{Point, Polygon, disc, overlaps, square_vertices};
//!
//! let obstacle = Polygon::new(square_vertices(Point::new(0.5, 0.5), 0.2, 0.0));
//! let waypoint = disc(Point::new(0.6, 0.5), 0.05, 16);
//!
//! assert!(overlaps(&obstacle, &waypoint));
//! ```

pub use self::{overlap::*, point::*, polygon::*, shapes::*, union::*};

mod overlap;
mod point;
mod polygon;
mod shapes;
mod union;
