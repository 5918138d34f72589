//! Vertex-ordered polygons (V-representation) and the shoelace area.
//!
//! Code cross-refs: `hull::convex_hull` (producer), `api::area`

use std::fmt;

use super::point::Point2;

/// Ordered vertex loop; the closing edge `last → first` is implicit.
///
/// Hulls are emitted upper chain first (clockwise). Read-only once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon2 {
    vertices: Vec<Point2>,
}

impl Polygon2 {
    #[inline]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }
    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }
    #[inline]
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.vertices.iter()
    }

    /// Same vertices, opposite traversal direction.
    pub fn reversed(&self) -> Polygon2 {
        let mut v = self.vertices.clone();
        v.reverse();
        Polygon2 { vertices: v }
    }

    /// Unsigned area by the shoelace sum `Σ x[i+1] (y[i+2] − y[i])` (indices mod n).
    ///
    /// Orientation-agnostic. Fewer than 3 vertices → 0.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let v = &self.vertices;
        let mut twice: f64 = 0.0;
        for i in 0..n {
            twice += v[(i + 1) % n].x * (v[(i + 2) % n].y - v[i].y);
        }
        twice.abs() / 2.0
    }

    /// Boundary length including the closing edge; 0 for fewer than 2 vertices.
    pub fn perimeter(&self) -> f64 {
        let n = self.vertices.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| self.vertices[i].distance(self.vertices[(i + 1) % n]))
            .sum()
    }
}

impl From<Vec<Point2>> for Polygon2 {
    #[inline]
    fn from(vertices: Vec<Point2>) -> Self {
        Polygon2::new(vertices)
    }
}

impl<'a> IntoIterator for &'a Polygon2 {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;
    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

impl fmt::Display for Polygon2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, p) in self.vertices.iter().enumerate() {
            if k > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(raw: &[(f64, f64)]) -> Polygon2 {
        Polygon2::new(raw.iter().copied().map(Point2::from).collect())
    }

    #[test]
    fn area_unit_square_and_triangle() {
        let sq = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(sq.area(), 1.0);
        let tri = poly(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)]);
        assert_eq!(tri.area(), 25.0);
    }

    #[test]
    fn area_is_orientation_agnostic() {
        let p = poly(&[(0.0, 0.0), (1.0, 3.0), (4.0, 5.0), (8.0, 3.0), (3.0, -3.0)]);
        assert_eq!(p.area(), p.reversed().area());
        assert!(p.area() > 0.0);
    }

    #[test]
    fn degenerate_polygons_have_zero_area() {
        assert_eq!(Polygon2::default().area(), 0.0);
        assert_eq!(poly(&[(1.0, 1.0)]).area(), 0.0);
        assert_eq!(poly(&[(1.0, 1.0), (4.0, 5.0)]).area(), 0.0);
    }

    #[test]
    fn perimeter_closes_the_loop() {
        let sq = poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert_eq!(sq.perimeter(), 8.0);
        // Two vertices: there and back.
        assert_eq!(poly(&[(0.0, 0.0), (3.0, 4.0)]).perimeter(), 10.0);
        assert_eq!(poly(&[(0.0, 0.0)]).perimeter(), 0.0);
    }

    #[test]
    fn display_lists_vertices() {
        let p = poly(&[(0.0, 0.0), (1.5, 2.0)]);
        assert_eq!(p.to_string(), "(0,0) (1.5,2)");
        assert_eq!(Polygon2::default().to_string(), "");
    }
}
