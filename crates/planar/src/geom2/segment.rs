//! Closed segments with a canonical endpoint order.
//!
//! Model
//! - Endpoints are stored in `PointOrder::ByY` order (smaller `y` first, ties by
//!   smaller `x`), so `Segment2::new(a, b) == Segment2::new(b, a)`.
//! - Value type only; there is no intersection algorithm.
//!
//! Code cross-refs: `order::PointOrder`, `point::Point2`

use super::order::PointOrder;
use super::point::Point2;

/// Closed segment with endpoints stored in `PointOrder::ByY` order.
///
/// Invariant: `lo` precedes or equals `hi` under `ByY`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    lo: Point2,
    hi: Point2,
}

impl Segment2 {
    pub fn new(a: Point2, b: Point2) -> Self {
        if PointOrder::ByY.compare(&a, &b).is_gt() {
            Self { lo: b, hi: a }
        } else {
            Self { lo: a, hi: b }
        }
    }
    /// Endpoint with the smaller `y` (ties: smaller `x`).
    #[inline]
    pub fn lo(&self) -> Point2 {
        self.lo
    }
    #[inline]
    pub fn hi(&self) -> Point2 {
        self.hi
    }
    #[inline]
    pub fn endpoints(&self) -> [Point2; 2] {
        [self.lo, self.hi]
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.lo.distance(self.hi)
    }
}
