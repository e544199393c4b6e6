//! Hierarchical triangular mesh (HTM) index over the sphere.
//!
//! The sphere is split into the eight faces of an octahedron, and each face
//! is recursively quadrisected into spherical triangles ("trixels"). Every
//! trixel has a [`MeshId`] whose integer form keeps all descendants of a
//! trixel in one contiguous block, so a catalog sorted by leaf id can answer
//! a region query with a handful of range scans.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`mesh`] | [`MeshId`], [`Trixel`], [`Markup`] and the shared [`Mesh`] with point lookup |
//! | [`query`] | [`Cover`] of a convex region, [`RangeSet`] compaction, [`CoverConfig`], range writers |
//! | [`constants`] | `MAX_LEVEL`, `BASE_TRIXELS` and defaults |
//! | [`error`] | [`IndexError`] and [`IndexResult`] |
//!
//! # Quick Start
//!
//! ```
//! use htm_core::{Convex, VertexFormat};
//! use htm_index::{Cover, Markup, Mesh};
//!
//! let convex = Convex::parse_vertices(&["70,45", "60,70", "60,20"], VertexFormat::LatLon).unwrap();
//! let mut cover = Cover::new(convex, 6).unwrap();
//! cover.run().unwrap();
//!
//! let ranges = cover.ranges(10).unwrap();
//! let leaf = Mesh::global()
//!     .locate(&htm_core::Vector3::from_lat_lon_deg(63.0, 45.0), 10)
//!     .unwrap();
//! assert!(ranges.contains(leaf));
//! assert!(!cover.trixels_with(Markup::Partial).unwrap().is_empty());
//! ```
//!
//! # Features
//!
//! - **`cli`**: Builds the `htm-cover` binary for computing covers and
//!   looking up points from the command line.

pub mod constants;
pub mod error;
pub mod mesh;
pub mod query;

pub use error::{IndexError, IndexResult};
pub use mesh::{Markup, Mesh, MeshId, Trixel};
pub use query::{write_ranges, Cover, CoverConfig, CoverStats, IdRange, RangeFormat, RangeSet};
