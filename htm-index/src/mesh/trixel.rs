use super::MeshId;
use crate::IndexResult;
use htm_core::constants::{EPSILON, SCALE};
use htm_core::{Convex, Halfspace, Sign, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a trixel relates to a query region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Markup {
    /// Entirely inside the region.
    Full,
    /// Straddles the boundary, or could not be ruled in or out.
    Partial,
    /// Provably disjoint from the region.
    Outside,
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Markup::Full => "full",
            Markup::Partial => "partial",
            Markup::Outside => "outside",
        })
    }
}

/// A spherical triangle of the mesh.
///
/// Corners are ordered counter-clockwise as seen from outside, so each edge
/// `vi × vj` points into the triangle. Children from [`Trixel::expand`] keep
/// that orientation:
///
/// ```text
///              v2
///             /  \
///            / c2 \
///          w1 ---- w0           w0 = mid(v1, v2)
///          / \ c3 / \           w1 = mid(v0, v2)
///         / c0 \/ c1 \          w2 = mid(v0, v1)
///       v0 ---- w2 ---- v1
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trixel {
    corners: [Vector3; 3],
    id: MeshId,
}

impl Trixel {
    pub fn new(v0: Vector3, v1: Vector3, v2: Vector3, id: MeshId) -> Self {
        Self {
            corners: [v0, v1, v2],
            id,
        }
    }

    #[inline]
    pub fn corners(&self) -> &[Vector3; 3] {
        &self.corners
    }

    #[inline]
    pub fn id(&self) -> MeshId {
        self.id
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.id.level()
    }

    /// Direction of the corner centroid, on the sphere.
    pub fn center(&self) -> Vector3 {
        let [v0, v1, v2] = self.corners;
        (v0 + v1 + v2).to_scale()
    }

    /// Smallest cap around [`Trixel::center`] that holds all three corners,
    /// widened by `EPSILON`.
    pub fn bounding_cap(&self) -> Halfspace {
        let center = self.center();
        let distance = self
            .corners
            .iter()
            .map(|v| center.dot(v) / SCALE)
            .fold(f64::INFINITY, f64::min);
        Halfspace::new(center, distance - EPSILON)
    }

    /// Quadrisects into children 0..=3; child ids extend this id by one digit.
    pub fn expand(&self) -> IndexResult<[Trixel; 4]> {
        let [v0, v1, v2] = self.corners;
        let w0 = v1.midpoint(&v2);
        let w1 = v0.midpoint(&v2);
        let w2 = v0.midpoint(&v1);
        Ok([
            Trixel::new(v0, w2, w1, self.id.child(0)?),
            Trixel::new(v1, w0, w2, self.id.child(1)?),
            Trixel::new(v2, w1, w0, self.id.child(2)?),
            Trixel::new(w0, w1, w2, self.id.child(3)?),
        ])
    }

    fn edges(&self) -> [Halfspace; 3] {
        let [v0, v1, v2] = self.corners;
        [
            Halfspace::new(v0.cross(&v1), 0.0),
            Halfspace::new(v1.cross(&v2), 0.0),
            Halfspace::new(v2.cross(&v0), 0.0),
        ]
    }

    pub fn contains_strict(&self, p: &Vector3) -> bool {
        self.edges().iter().all(|h| h.contains_strict(p))
    }

    pub fn contains_loose(&self, p: &Vector3) -> bool {
        self.edges().iter().all(|h| h.contains_loose(p))
    }

    /// Point of the edge arc `a → b` closest to `p`.
    fn nearest_on_edge(a: &Vector3, b: &Vector3, p: &Vector3) -> Vector3 {
        let normal = a.cross(b);
        let foot = *p - normal * (p.dot(&normal) / normal.magnitude_squared());
        if !foot.is_zero() {
            let foot = foot.to_scale();
            if a.cross(&foot).dot(&normal) >= 0.0 && foot.cross(b).dot(&normal) >= 0.0 {
                return foot;
            }
        }
        if a.dot(p) >= b.dot(p) {
            *a
        } else {
            *b
        }
    }

    /// Whether `h` reaches any point of this triangle, boundary included.
    ///
    /// A cap misses the triangle iff it holds no corner, its center is not
    /// in the triangle and no edge arc comes within its radius. A child never
    /// meets a halfspace its parent misses.
    pub fn meets(&self, h: &Halfspace) -> bool {
        if self.corners.iter().any(|v| h.contains_loose(v)) {
            return true;
        }
        let center = h.vector();
        if h.contains_loose(&center) && self.contains_loose(&center) {
            return true;
        }
        let [v0, v1, v2] = &self.corners;
        [(v0, v1), (v1, v2), (v2, v0)]
            .into_iter()
            .any(|(a, b)| h.contains_loose(&Self::nearest_on_edge(a, b, &center)))
    }

    /// Classifies this trixel against `convex`.
    ///
    /// `Full` needs every corner strictly inside, and the hole cut by each
    /// negative halfspace must miss the triangle. `Outside` needs one
    /// halfspace that misses the triangle; the bounding cap settles most of
    /// those cheaply. Anything else is `Partial`.
    pub fn markup(&self, convex: &Convex) -> Markup {
        let corners_inside = self.corners.iter().all(|v| convex.contains_strict(v));
        if corners_inside {
            let clear_of_holes = convex
                .halfspaces()
                .iter()
                .filter(|h| h.sign() == Sign::Negative)
                .all(|h| !self.meets(&h.complement()));
            if clear_of_holes {
                return Markup::Full;
            }
        }

        let cap = self.bounding_cap();
        if convex
            .halfspaces()
            .iter()
            .any(|h| h.exclusive(&cap) || !self.meets(h))
        {
            Markup::Outside
        } else {
            Markup::Partial
        }
    }
}

impl fmt::Display for Trixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [v0, v1, v2] = &self.corners;
        write!(f, "{} [{}, {}, {}]", self.id, v0, v1, v2)
    }
}
