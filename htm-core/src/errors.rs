//! Error types for spherical geometry construction and parsing.
//!
//! Geometry is built once per query and is read-only afterwards, so every
//! failure here is structural: malformed input that the caller has to fix.
//! Nothing is retried.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidGeometry`](GeometryError::InvalidGeometry) | Too few vertices, degenerate edges, non-convex or counter-clockwise polygons |
//! | [`Parse`](GeometryError::Parse) | Malformed coordinate or angle strings |
//! | [`OutOfRange`](GeometryError::OutOfRange) | Latitudes beyond ±90°, longitudes outside the accepted range |
//! | [`NotFinite`](GeometryError::NotFinite) | NaN or infinite coordinates |
//!
//! ```
//! use htm_core::{Convex, GeometryError, Vector3};
//!
//! let err = Convex::from_vertices(&[Vector3::x_axis(), Vector3::y_axis()]).unwrap_err();
//! assert!(matches!(err, GeometryError::InvalidGeometry { .. }));
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The supplied vertices or halfspaces do not describe a usable region.
    #[error("Invalid geometry in {context}: {message}")]
    InvalidGeometry { context: String, message: String },

    /// A coordinate, angle, or vertex string could not be parsed.
    #[error("Cannot parse '{input}': {message}")]
    Parse { input: String, message: String },

    /// A value parsed fine but lies outside its valid domain.
    #[error("{quantity} out of range: {message}")]
    OutOfRange { quantity: String, message: String },

    /// A coordinate is NaN or infinite.
    #[error("{quantity} is not finite")]
    NotFinite { quantity: String },
}

/// Convenience alias for `Result<T, GeometryError>`.
pub type GeometryResult<T> = Result<T, GeometryError>;

impl GeometryError {
    pub fn invalid_geometry(context: &str, reason: &str) -> Self {
        Self::InvalidGeometry {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }

    pub fn parse(input: &str, reason: &str) -> Self {
        Self::Parse {
            input: input.to_string(),
            message: reason.to_string(),
        }
    }

    pub fn out_of_range(quantity: &str, reason: &str) -> Self {
        Self::OutOfRange {
            quantity: quantity.to_string(),
            message: reason.to_string(),
        }
    }

    pub fn not_finite(quantity: &str) -> Self {
        Self::NotFinite {
            quantity: quantity.to_string(),
        }
    }
}
