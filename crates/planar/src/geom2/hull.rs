//! Andrew's monotone chain convex hull.
//!
//! Model
//! - Sort by `PointOrder::ByX`, then build the upper chain left→right and the
//!   lower chain right→left. A chain keeps only right turns, so collinear and
//!   repeated points are dropped from the boundary.
//! - Each chain holds at least two points at all times. When a pop would break
//!   that, the incoming point replaces the popped one instead.
//! - The lower chain's first and last points repeat the extreme-x endpoints of
//!   the upper chain and are trimmed before concatenation.
//!
//! Output is clockwise starting at the smallest `ByX` point. Inputs with fewer
//! than three points give the empty polygon. An all-collinear input gives its
//! two extreme points.
//!
//! Code cross-refs: `point::turns_right`, `order::sort_points`, `polygon::Polygon2`

use super::order::{sort_points, PointOrder};
use super::point::{turns_right, Point2};
use super::polygon::Polygon2;

/// Reusable hull workspace. Buffers survive between `build` calls.
#[derive(Clone, Debug, Default)]
pub struct HullBuilder {
    sorted: Vec<Point2>,
    upper: Vec<Point2>,
    lower: Vec<Point2>,
}

impl HullBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            sorted: Vec::with_capacity(n),
            upper: Vec::with_capacity(n),
            lower: Vec::with_capacity(n),
        }
    }

    /// Hull of `points`; the input slice is left untouched.
    pub fn build(&mut self, points: &[Point2]) -> Polygon2 {
        let n = points.len();
        if n < 3 {
            return Polygon2::default();
        }
        self.sorted.clear();
        self.sorted.extend_from_slice(points);
        sort_points(&mut self.sorted, PointOrder::ByX);
        let s = &self.sorted;

        self.upper.clear();
        self.upper.extend_from_slice(&s[..2]);
        for &p in &s[2..] {
            extend_chain(&mut self.upper, p);
        }

        self.lower.clear();
        self.lower.push(s[n - 1]);
        self.lower.push(s[n - 2]);
        for &p in s[..n - 2].iter().rev() {
            extend_chain(&mut self.lower, p);
        }

        let trimmed = &self.lower[1..self.lower.len() - 1];
        let mut out = Vec::with_capacity(self.upper.len() + trimmed.len());
        out.extend_from_slice(&self.upper);
        out.extend_from_slice(trimmed);
        Polygon2::new(out)
    }
}

/// Append `p`, popping tail points that do not make a right turn into it.
///
/// Pre/Post: `chain.len() >= 2`.
fn extend_chain(chain: &mut Vec<Point2>, p: Point2) {
    loop {
        let keep = match chain.as_slice() {
            [.., a, b] => turns_right(*a, *b, p),
            _ => true,
        };
        if keep {
            chain.push(p);
            return;
        }
        chain.pop();
        if chain.len() < 2 {
            chain.push(p);
            return;
        }
    }
}

/// Convex hull of an arbitrary point set (see module docs for conventions).
pub fn convex_hull(points: &[Point2]) -> Polygon2 {
    HullBuilder::with_capacity(points.len()).build(points)
}
