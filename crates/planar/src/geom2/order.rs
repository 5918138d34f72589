//! Lexicographic point orders passed explicitly to sorts.
//!
//! Both orders compare with `f64::total_cmp`, so they are total even on NaN
//! (positive NaN sorts after `+inf`) and distinct points never compare equal.
//! One consequence: `-0.0` sorts before `0.0` although the points are `==`.

use std::cmp::Ordering;

use super::point::Point2;

/// Which coordinate is the primary key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointOrder {
    /// `x` ascending, ties by `y` ascending. Used by hull construction.
    ByX,
    /// `y` ascending, ties by `x` ascending. Used for segment endpoints.
    ByY,
}

impl PointOrder {
    #[inline]
    pub fn compare(self, a: &Point2, b: &Point2) -> Ordering {
        match self {
            PointOrder::ByX => a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y)),
            PointOrder::ByY => a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x)),
        }
    }
}

/// Sort in place by `order`.
pub fn sort_points(points: &mut [Point2], order: PointOrder) {
    points.sort_by(|a, b| order.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point2> {
        raw.iter().copied().map(Point2::from).collect()
    }

    #[test]
    fn sort_by_x() {
        let mut p = pts(&[(10.0, 5.0), (2.0, 6.0), (3.0, 4.0), (12.0, 3.0), (7.0, 7.0)]);
        sort_points(&mut p, PointOrder::ByX);
        assert_eq!(
            p,
            pts(&[(2.0, 6.0), (3.0, 4.0), (7.0, 7.0), (10.0, 5.0), (12.0, 3.0)])
        );
    }

    #[test]
    fn ties_break_on_secondary_key() {
        let mut p = pts(&[(1.0, 3.0), (1.0, -1.0), (0.0, 9.0), (1.0, 0.0)]);
        sort_points(&mut p, PointOrder::ByX);
        assert_eq!(p, pts(&[(0.0, 9.0), (1.0, -1.0), (1.0, 0.0), (1.0, 3.0)]));

        let mut q = pts(&[(4.0, 2.0), (-3.0, 2.0), (0.0, 1.0)]);
        sort_points(&mut q, PointOrder::ByY);
        assert_eq!(q, pts(&[(0.0, 1.0), (-3.0, 2.0), (4.0, 2.0)]));
    }

    #[test]
    fn equal_only_for_identical_points() {
        let a = Point2::new(2.0, 5.0);
        let b = Point2::new(2.0, 5.0);
        let c = Point2::new(5.0, 2.0);
        for order in [PointOrder::ByX, PointOrder::ByY] {
            assert_eq!(order.compare(&a, &b), Ordering::Equal);
            assert_ne!(order.compare(&a, &c), Ordering::Equal);
            assert_eq!(order.compare(&a, &c), order.compare(&c, &a).reverse());
        }
    }

    #[test]
    fn nan_sorts_last() {
        let mut p = pts(&[(f64::NAN, 0.0), (f64::INFINITY, 0.0), (-1.0, 0.0)]);
        sort_points(&mut p, PointOrder::ByX);
        assert_eq!(p[0].x, -1.0);
        assert_eq!(p[1].x, f64::INFINITY);
        assert!(p[2].x.is_nan());
    }
}
