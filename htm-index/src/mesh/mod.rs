//! The hierarchical triangular mesh.
//!
//! - [`id`]: [`MeshId`] integer/text identifiers and their hierarchy
//! - [`trixel`]: [`Trixel`] geometry, subdivision and [`Markup`] classification
//! - [`root`]: the shared [`Mesh`]: base octahedron and point location

pub mod id;
pub mod root;
pub mod trixel;

pub use id::MeshId;
pub use root::Mesh;
pub use trixel::{Markup, Trixel};
