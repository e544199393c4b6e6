//! Query regions on the sphere.
//!
//! A [`Halfspace`] is a spherical cap: the points on one side of a plane
//! through (or offset from) the sphere's center. A [`Convex`] is the
//! intersection of any number of halfspaces, which is how every query region
//! reaches the covering algorithm. [`Sign`] summarizes whether the caps are
//! smaller than, larger than, or exactly hemispheres.

mod convex;
mod halfspace;
mod sign;

pub use convex::{parse_vertex, Convex, VertexFormat};
pub use halfspace::Halfspace;
pub use sign::Sign;
