//! Convex spherical regions as intersections of halfspaces.
//!
//! A [`Convex`] is what the covering algorithm classifies mesh triangles
//! against. It is usually built from a polygon's corners:
//!
//! ```text
//!        v0
//!       /  \          vertices are listed clockwise as seen from
//!      /    \         outside the sphere; each edge v[i-1] -> v[i]
//!     v2 ---- v1      becomes the great-circle halfspace v[i] × v[i-1]
//! ```
//!
//! Vertex input is validated: at least three corners, no repeated or
//! antipodal neighbours, and every corner on the inner side of every edge.
//! The last check rejects both counter-clockwise and non-convex polygons.
//!
//! Regions built directly from halfspaces are taken as given and keep an
//! empty vertex list.

use super::{Halfspace, Sign};
use crate::angle::{validate_latitude, validate_longitude, Angle, ParseAngle};
use crate::constants::{EPSILON, SCALE};
use crate::{GeometryError, GeometryResult, Vector3};
use std::fmt;

/// How [`Convex::parse_vertices`] reads each vertex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VertexFormat {
    /// `"x,y,z"`, projected onto the reference sphere.
    #[default]
    Cartesian,
    /// `"lat,lon"`, decimal degrees or DMS.
    LatLon,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Convex {
    halfspaces: Vec<Halfspace>,
    vertices: Vec<Vector3>,
}

impl Convex {
    /// An empty region. With no constraints it contains every point.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the polygon bounded by great-circle arcs between consecutive
    /// vertices, which must be listed clockwise as seen from outside.
    pub fn from_vertices(vertices: &[Vector3]) -> GeometryResult<Self> {
        const CONTEXT: &str = "Convex::from_vertices";

        if vertices.len() < 3 {
            return Err(GeometryError::invalid_geometry(
                CONTEXT,
                &format!("need at least 3 vertices, got {}", vertices.len()),
            ));
        }
        if let Some(i) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(GeometryError::not_finite(&format!("Vertex {}", i)));
        }

        let vertices: Vec<Vector3> = vertices.iter().map(Vector3::to_scale).collect();
        let n = vertices.len();

        // Edge (v[i-1], v[i]) for i = 1..n, then the closing edge (v[n-1], v[0]).
        let mut halfspaces = Vec::with_capacity(n);
        for i in 1..=n {
            let prev = vertices[i - 1];
            let cur = vertices[i % n];
            let normal = cur.cross(&prev);
            if normal.magnitude() <= EPSILON * SCALE * SCALE {
                return Err(GeometryError::invalid_geometry(
                    CONTEXT,
                    &format!(
                        "vertices {} and {} are identical or antipodal",
                        i - 1,
                        i % n
                    ),
                ));
            }
            halfspaces.push(Halfspace::new(normal, 0.0));
        }

        for (i, v) in vertices.iter().enumerate() {
            if let Some(j) = halfspaces.iter().position(|h| !h.contains_loose(v)) {
                return Err(GeometryError::invalid_geometry(
                    CONTEXT,
                    &format!(
                        "vertex {} lies outside edge {}; vertices must be convex and clockwise",
                        i, j
                    ),
                ));
            }
        }

        let mut convex = Self {
            halfspaces,
            vertices,
        };
        if convex.sign() == Sign::Positive {
            convex.order_most_restrictive_first();
        }
        Ok(convex)
    }

    /// Region bounded by the given halfspaces. No vertices are derived.
    pub fn from_halfspaces<I: IntoIterator<Item = Halfspace>>(halfspaces: I) -> Self {
        Self {
            halfspaces: halfspaces.into_iter().collect(),
            vertices: Vec::new(),
        }
    }

    /// A single cap of angular radius `radius` around `center`.
    pub fn circle(center: Vector3, radius: Angle) -> Self {
        Self::from_halfspaces([Halfspace::cap(center, radius)])
    }

    /// Parses vertex strings and builds the polygon with [`Convex::from_vertices`].
    ///
    /// ```
    /// use htm_core::{Convex, VertexFormat};
    ///
    /// let convex = Convex::parse_vertices(
    ///     &["70,45", "60,70", "60:00:00,20"],
    ///     VertexFormat::LatLon,
    /// )
    /// .unwrap();
    /// assert_eq!(convex.len(), 3);
    /// ```
    pub fn parse_vertices<S: AsRef<str>>(args: &[S], format: VertexFormat) -> GeometryResult<Self> {
        if args.len() < 3 {
            return Err(GeometryError::invalid_geometry(
                "Convex::parse_vertices",
                &format!("need at least 3 vertices, got {}", args.len()),
            ));
        }
        let vertices = args
            .iter()
            .map(|arg| parse_vertex(arg.as_ref(), format))
            .collect::<GeometryResult<Vec<_>>>()?;
        Self::from_vertices(&vertices)
    }

    pub fn add_halfspace(&mut self, halfspace: Halfspace) {
        self.halfspaces.push(halfspace);
    }

    pub fn add_halfspaces<I: IntoIterator<Item = Halfspace>>(&mut self, halfspaces: I) {
        self.halfspaces.extend(halfspaces);
    }

    pub fn clear(&mut self) {
        self.halfspaces.clear();
        self.vertices.clear();
    }

    pub fn halfspaces(&self) -> &[Halfspace] {
        &self.halfspaces
    }

    /// Construction vertices; empty unless built with [`Convex::from_vertices`].
    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.halfspaces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.halfspaces.len()
    }

    pub fn contains_strict(&self, p: &Vector3) -> bool {
        self.halfspaces.iter().all(|h| h.contains_strict(p))
    }

    pub fn contains_loose(&self, p: &Vector3) -> bool {
        self.halfspaces.iter().all(|h| h.contains_loose(p))
    }

    pub fn sign(&self) -> Sign {
        Sign::aggregate(self.halfspaces.iter().map(Halfspace::sign))
    }

    /// Moves the halfspace with the largest distance (smallest cap) to the
    /// front, keeping the relative order of the rest.
    pub fn order_most_restrictive_first(&mut self) {
        if self.halfspaces.is_empty() {
            return;
        }
        let mut best = 0;
        for (i, h) in self.halfspaces.iter().enumerate().skip(1) {
            if h.distance() > self.halfspaces[best].distance() {
                best = i;
            }
        }
        let h = self.halfspaces.remove(best);
        self.halfspaces.insert(0, h);
    }
}

impl fmt::Display for Convex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Convex: {{")?;
        for h in &self.halfspaces {
            write!(f, "\n    {}", h)?;
        }
        write!(f, "\n}}")
    }
}

/// Parses one `"x,y,z"` or `"lat,lon"` vertex onto the reference sphere.
pub fn parse_vertex(arg: &str, format: VertexFormat) -> GeometryResult<Vector3> {
    let fields: Vec<&str> = arg.split(',').map(str::trim).collect();
    match format {
        VertexFormat::Cartesian => {
            let [x, y, z] = fields[..] else {
                return Err(GeometryError::parse(arg, "expected x,y,z"));
            };
            let component = |s: &str| {
                s.parse::<f64>()
                    .map_err(|_| GeometryError::parse(arg, &format!("'{}' is not a number", s)))
            };
            let v = Vector3::new(component(x)?, component(y)?, component(z)?);
            if !v.is_finite() {
                return Err(GeometryError::not_finite("Vertex"));
            }
            if v.is_zero() {
                return Err(GeometryError::invalid_geometry(
                    "parse_vertex",
                    "zero vector has no direction",
                ));
            }
            Ok(v.to_scale())
        }
        VertexFormat::LatLon => {
            let [lat, lon] = fields[..] else {
                return Err(GeometryError::parse(arg, "expected lat,lon"));
            };
            let lat = validate_latitude(lat.to_angle()?)?;
            let lon = validate_longitude(lon.to_angle()?)?;
            Ok(Vector3::from_lat_lon(lat, lon))
        }
    }
}
