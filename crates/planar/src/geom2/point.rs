//! Planar points, vector arithmetic, and the right-turn orientation predicate.
//!
//! - `Point2`: `Copy` coordinate pair with exact (bitwise-value) equality.
//! - `det3`: explicit 3×3 cofactor expansion backing `turns_right`.
//! - `turns_right`: strict clockwise test; collinear triples are *not* right turns.
//!
//! Code cross-refs: `hull::HullBuilder` (sole consumer of `turns_right`), `order::PointOrder`

use std::fmt;

use nalgebra::{Vector2, Vector3};

/// Point (or free vector) in R².
///
/// Equality is exact coordinate equality; there is no tolerance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn subtract(self, other: Point2) -> Point2 {
        Point2::new(self.x - other.x, self.y - other.y)
    }
    #[inline]
    pub fn dot(self, other: Point2) -> f64 {
        (self.x * other.x) + (self.y * other.y)
    }
    /// Euclidean norm `sqrt(p·p)`.
    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }
    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        self.subtract(other).length()
    }
    #[inline]
    pub fn to_vec(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    /// Embed into R³ on the `z = 0` plane.
    #[inline]
    pub fn lift(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, 0.0)
    }
}

impl From<Vector2<f64>> for Point2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point2::new(x, y)
    }
}

impl std::ops::Add for Point2 {
    type Output = Point2;
    #[inline]
    fn add(self, rhs: Point2) -> Self::Output {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl std::ops::Sub for Point2 {
    type Output = Point2;
    #[inline]
    fn sub(self, rhs: Point2) -> Self::Output {
        self.subtract(rhs)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Determinant by cofactor expansion.
///
/// ```text
///     | a  b  c |
/// D = | d  e  f |
///     | g  h  i |
/// ```
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn det3(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, g: f64, h: f64, i: f64) -> f64 {
    (a * e * i) + (b * f * g) + (c * d * h) - (c * e * g) - (b * d * i) - (a * f * h)
}

/// True iff `p3` lies strictly right of the directed line `p1 → p2`.
///
/// Sign of `det [[1, x, y]]` over the three points; zero (collinear) returns false.
/// NaN coordinates also return false.
#[inline]
pub fn turns_right(p1: Point2, p2: Point2, p3: Point2) -> bool {
    det3(
        1.0, p1.x, p1.y, //
        1.0, p2.x, p2.y, //
        1.0, p3.x, p3.y,
    ) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Matrix3;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn turns_right_against_horizontal_segment() {
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(10.0, 0.0);
        assert!(!turns_right(p1, p2, Point2::new(12.0, 3.0)));
        assert!(turns_right(p1, p2, Point2::new(11.0, -1.0)));
        assert!(!turns_right(p1, p2, Point2::new(12.0, 0.0)));
    }

    #[test]
    fn turns_right_is_false_for_repeated_points() {
        let p = Point2::new(3.0, 4.0);
        let q = Point2::new(-1.0, 2.0);
        assert!(!turns_right(p, p, q));
        assert!(!turns_right(p, q, q));
        assert!(!turns_right(p, p, p));
    }

    #[test]
    fn turns_right_nan_is_false() {
        let nan = Point2::new(f64::NAN, 0.0);
        assert!(!turns_right(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), nan));
    }

    #[test]
    fn det3_matches_nalgebra_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let v: [f64; 9] = std::array::from_fn(|_| rng.gen_range(-4.0..4.0));
            let m = Matrix3::new(v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8]);
            let d = det3(v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8]);
            assert!((d - m.determinant()).abs() < 1e-9);
        }
    }

    #[test]
    fn vector_arithmetic() {
        let a = Point2::new(3.0, 4.0);
        let b = Point2::new(1.0, -2.0);
        assert_eq!(a + b, Point2::new(4.0, 2.0));
        assert_eq!(a - b, Point2::new(2.0, 6.0));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!((a - b) + b, a);
        assert_eq!(a.dot(b), -5.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(Point2::new(4.0, 6.0).distance(Point2::new(1.0, 2.0)), 5.0);
    }

    #[test]
    fn conversions_and_display() {
        let p = Point2::from(Vector2::new(1.5, -2.0));
        assert_eq!(p, Point2::from((1.5, -2.0)));
        assert_eq!(p.to_vec(), Vector2::new(1.5, -2.0));
        assert_eq!(p.lift(), Vector3::new(1.5, -2.0, 0.0));
        assert_eq!(p.to_string(), "(1.5,-2)");
    }
}
