//! Spherical geometry primitives for hierarchical triangular mesh indexing.
//!
//! Points live on a sphere of radius [`SCALE`](constants::SCALE). Regions are
//! described as intersections of spherical caps ("halfspaces"), which is all
//! the covering algorithm in `htm-index` needs to classify mesh triangles.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`vector3`] | [`Vector3`] points on the reference sphere, lat/lon conversion |
//! | [`shapes`] | [`Halfspace`], [`Convex`] regions and their aggregate [`Sign`] |
//! | [`angle`] | [`Angle`] values, decimal and sexagesimal parsing, lat/lon validation |
//! | [`constants`] | `SCALE`, `EPSILON` and angle conversion factors |
//! | [`errors`] | [`GeometryError`] and [`GeometryResult`] |
//!
//! # Quick Start
//!
//! ```
//! use htm_core::{Convex, Vector3};
//!
//! // Clockwise as seen from outside the sphere.
//! let convex = Convex::from_vertices(&[
//!     Vector3::from_lat_lon_deg(70.0, 45.0),
//!     Vector3::from_lat_lon_deg(60.0, 70.0),
//!     Vector3::from_lat_lon_deg(60.0, 20.0),
//! ])
//! .unwrap();
//!
//! assert!(convex.contains_strict(&Vector3::from_lat_lon_deg(63.0, 45.0)));
//! assert!(!convex.contains_loose(&Vector3::from_lat_lon_deg(10.0, 45.0)));
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod shapes;
pub mod vector3;

pub use angle::Angle;
pub use errors::{GeometryError, GeometryResult};
pub use shapes::{Convex, Halfspace, Sign, VertexFormat};
pub use vector3::Vector3;
