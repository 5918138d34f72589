//! The two entry points consumed by outer layers (CLI, rendering, reports).
//!
//! Callers that only need "hull of these points" and "area of that polygon"
//! should depend on this module rather than on `geom2` internals.

use crate::geom2::{self, Point2, Polygon2};

/// Convex hull of `points` as a clockwise `Polygon2`; empty below 3 points.
#[inline]
pub fn convex_hull(points: &[Point2]) -> Polygon2 {
    geom2::convex_hull(points)
}

/// Unsigned shoelace area; 0 for fewer than 3 vertices.
#[inline]
pub fn area(polygon: &Polygon2) -> f64 {
    polygon.area()
}
