//! Planar geometry: points, orders, convex hulls, polygons.
//!
//! Purpose
//! - Deterministic 2D primitives in plain `f64` (no robust predicates):
//!   a `Copy` point type, a strict right-turn predicate, lexicographic orders,
//!   and the monotone chain hull returning a vertex-ordered `Polygon2`.
//!
//! Assumptions and conventions
//! - Coordinates are finite `f64`. No tolerances anywhere: equality is exact
//!   and collinear triples are never right turns, so collinear boundary
//!   points are excluded from hulls.
//! - NaN is not rejected. Orders stay total (`total_cmp`), the predicate
//!   returns false, and hull output for such inputs is unspecified.
//!
//! Code cross-refs: `Point2`, `PointOrder`, `HullBuilder`, `Polygon2`, `Segment2`

pub mod hull;
pub mod order;
pub mod point;
pub mod polygon;
pub mod rand;
mod segment;

pub use hull::{convex_hull, HullBuilder};
pub use order::{sort_points, PointOrder};
pub use point::{det3, turns_right, Point2};
pub use polygon::Polygon2;
pub use segment::Segment2;
