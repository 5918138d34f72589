//! Planar computational geometry: orientation, point orders, convex hulls, area.
//!
//! Layout
//! - `geom2`: value types and algorithms (`Point2`, `PointOrder`, `HullBuilder`,
//!   `Polygon2`, `Segment2`) plus seeded point clouds in `geom2::rand`.
//! - `api`: the two outward-facing entry points, `convex_hull` and `area`.
//!
//! Everything here is pure and synchronous; no I/O, no logging.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Point2, Polygon2};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{area, convex_hull};
    pub use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::geom2::{
        det3, sort_points, turns_right, HullBuilder, Point2, PointOrder, Polygon2, Segment2,
    };
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
