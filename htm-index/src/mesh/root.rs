use super::{MeshId, Trixel};
use crate::constants::{BASE_TRIXELS, MAX_LEVEL};
use crate::{IndexError, IndexResult};
use htm_core::Vector3;
use once_cell::sync::Lazy;

static GLOBAL_MESH: Lazy<Mesh> = Lazy::new(Mesh::new);

/// The octahedron the mesh is grown from.
///
/// Base trixels are stored by base index, which is also `id - 8`:
///
/// | Index | Name | Corners |
/// |-------|------|---------|
/// | 0 | S0 | x, −z, y |
/// | 1 | S1 | y, −z, −x |
/// | 2 | S2 | −x, −z, −y |
/// | 3 | S3 | −y, −z, x |
/// | 4 | N0 | x, z, −y |
/// | 5 | N1 | −y, z, −x |
/// | 6 | N2 | −x, z, y |
/// | 7 | N3 | y, z, x |
#[derive(Debug, Clone)]
pub struct Mesh {
    bases: [Trixel; BASE_TRIXELS],
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    pub fn new() -> Self {
        let x = Vector3::x_axis();
        let y = Vector3::y_axis();
        let z = Vector3::z_axis();
        let base = |i: u64, v0, v1, v2| Trixel::new(v0, v1, v2, MeshId::from_raw(8 + i));

        Self {
            bases: [
                base(0, x, -z, y),
                base(1, y, -z, -x),
                base(2, -x, -z, -y),
                base(3, -y, -z, x),
                base(4, x, z, -y),
                base(5, -y, z, -x),
                base(6, -x, z, y),
                base(7, y, z, x),
            ],
        }
    }

    /// Shared instance, built on first use.
    pub fn global() -> &'static Mesh {
        &GLOBAL_MESH
    }

    pub fn base(&self, index: usize) -> Option<&Trixel> {
        self.bases.get(index)
    }

    pub fn bases(&self) -> &[Trixel; BASE_TRIXELS] {
        &self.bases
    }

    /// Base trixel holding `p`, chosen from coordinate signs alone.
    ///
    /// Points on the octant planes go to the quadrant on their
    /// counter-clockwise side; `z == 0` counts as north. Zero and non-finite
    /// vectors give [`MeshId::INVALID`].
    pub fn base_id(&self, p: &Vector3) -> MeshId {
        if !p.is_finite() || p.is_zero() {
            return MeshId::INVALID;
        }
        let (x, y, z) = (p.x, p.y, p.z);
        let (north, south) = if x > 0.0 && y >= 0.0 {
            (7, 0)
        } else if x <= 0.0 && y > 0.0 {
            (6, 1)
        } else if x < 0.0 && y <= 0.0 {
            (5, 2)
        } else if x >= 0.0 && y < 0.0 {
            (4, 3)
        } else {
            (7, 0)
        };
        let index = if z >= 0.0 { north } else { south };
        self.bases[index].id()
    }

    /// Id of the level-`depth` trixel holding `p`.
    ///
    /// Each step takes the first child strictly containing `p`, then the
    /// first loosely containing it. When neither exists the result is
    /// [`MeshId::INVALID`], not an error.
    ///
    /// ```
    /// use htm_core::Vector3;
    /// use htm_index::Mesh;
    ///
    /// let id = Mesh::global().locate(&Vector3::z_axis(), 8).unwrap();
    /// assert_eq!(id.name(), "N310000000");
    /// ```
    pub fn locate(&self, p: &Vector3, depth: u32) -> IndexResult<MeshId> {
        if depth > MAX_LEVEL {
            return Err(IndexError::depth_out_of_range(depth, MAX_LEVEL));
        }
        let Some(index) = self.base_id(p).base_index() else {
            tracing::warn!(point = %p, "Point has no base trixel");
            return Ok(MeshId::INVALID);
        };

        let mut trixel = self.bases[index];
        for _ in 0..depth {
            let children = trixel.expand()?;
            let next = match children.iter().find(|c| c.contains_strict(p)) {
                Some(child) => child,
                None => match children.iter().find(|c| c.contains_loose(p)) {
                    Some(child) => {
                        tracing::trace!(
                            point = %p,
                            parent = %trixel.id(),
                            child = %child.id(),
                            "Point on child boundary, using loose containment"
                        );
                        child
                    }
                    None => {
                        tracing::warn!(
                            point = %p,
                            parent = %trixel.id(),
                            "No child contains point"
                        );
                        return Ok(MeshId::INVALID);
                    }
                },
            };
            trixel = *next;
        }
        Ok(trixel.id())
    }

    /// Rebuilds the geometry of trixel `id` by descending its digits.
    pub fn trixel(&self, id: MeshId) -> IndexResult<Trixel> {
        let index = id
            .base_index()
            .ok_or_else(|| IndexError::invalid_name(id.id().to_string(), "not a trixel id"))?;
        let mut trixel = self.bases[index];
        for digit in id.digits() {
            trixel = trixel.expand()?[digit as usize];
        }
        Ok(trixel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_ids_and_names() {
        let mesh = Mesh::new();
        let names: Vec<String> = mesh.bases().iter().map(|t| t.id().name()).collect();
        assert_eq!(names, ["S0", "S1", "S2", "S3", "N0", "N1", "N2", "N3"]);
        assert!(mesh.base(8).is_none());
    }

    #[test]
    fn test_bases_contain_their_centers() {
        let mesh = Mesh::new();
        for base in mesh.bases() {
            let center = base.center();
            assert!(base.contains_strict(&center), "{}", base.id());
            assert_eq!(mesh.base_id(&center), base.id());
            for other in mesh.bases().iter().filter(|o| o.id() != base.id()) {
                assert!(!other.contains_loose(&center));
            }
        }
    }

    #[test]
    fn test_base_id_ties() {
        let mesh = Mesh::new();
        let name = |x, y, z| mesh.base_id(&Vector3::new(x, y, z)).name();
        assert_eq!(name(1.0, 0.0, 0.0), "N3");
        assert_eq!(name(0.0, 1.0, 0.0), "N2");
        assert_eq!(name(-1.0, 0.0, 0.0), "N1");
        assert_eq!(name(0.0, -1.0, 0.0), "N0");
        assert_eq!(name(0.0, 0.0, 1.0), "N3");
        assert_eq!(name(0.0, 0.0, -1.0), "S0");
        assert_eq!(name(1.0, 0.0, -0.5), "S0");
        assert_eq!(mesh.base_id(&Vector3::zeros()), MeshId::INVALID);
        assert_eq!(mesh.base_id(&Vector3::new(f64::NAN, 1.0, 0.0)), MeshId::INVALID);
    }

    #[test]
    fn test_locate_axes() {
        let mesh = Mesh::new();
        let name = |p: Vector3| mesh.locate(&p, 8).unwrap().name();
        assert_eq!(name(Vector3::x_axis()), "N320000000");
        assert_eq!(name(Vector3::y_axis()), "N220000000");
        assert_eq!(name(Vector3::z_axis()), "N310000000");
        assert_eq!(name(-Vector3::z_axis()), "S010000000");
    }

    #[test]
    fn test_locate_lat_lon() {
        let mesh = Mesh::new();
        let p = Vector3::from_lat_lon_deg(63.0, 45.0);
        let id = mesh.locate(&p, 5).unwrap();
        assert_eq!(id.name(), "N313030");
        assert_eq!(id.level(), 5);
        assert_eq!(mesh.locate(&p, 0).unwrap(), mesh.base_id(&p));
    }

    #[test]
    fn test_locate_prefixes_agree() {
        let mesh = Mesh::new();
        let p = Vector3::from_lat_lon_deg(-12.345, 201.5);
        let deep = mesh.locate(&p, 14).unwrap();
        for depth in 0..14 {
            let shallow = mesh.locate(&p, depth).unwrap();
            assert_eq!(deep.ancestor(depth), Some(shallow));
        }
    }

    #[test]
    fn test_locate_invalid_input() {
        let mesh = Mesh::new();
        let nan = Vector3::new(f64::NAN, 0.0, 0.0);
        assert_eq!(mesh.locate(&nan, 5).unwrap(), MeshId::INVALID);
        assert!(matches!(
            mesh.locate(&Vector3::z_axis(), MAX_LEVEL + 1),
            Err(IndexError::DepthOutOfRange { .. })
        ));
    }

    #[test]
    fn test_trixel_rebuild() {
        let mesh = Mesh::new();
        let p = Vector3::from_lat_lon_deg(33.3, 100.1);
        let id = mesh.locate(&p, 10).unwrap();
        let trixel = mesh.trixel(id).unwrap();
        assert_eq!(trixel.id(), id);
        assert!(trixel.contains_loose(&p));
        assert_eq!(mesh.trixel(MeshId::from_raw(12)).unwrap(), mesh.bases()[4]);
        assert!(mesh.trixel(MeshId::INVALID).is_err());
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(Mesh::global(), Mesh::global()));
        assert_eq!(Mesh::global().bases()[7].id().name(), "N3");
    }
}
