use crate::tessellation::PrismMesh;

/// Computes the signed volume enclosed by a closed triangle mesh.
///
/// Sums the signed tetrahedron volume `(1/6) * v0 . (v1 x v2)` over all
/// triangles. The result is positive when the triangles wind outward and
/// negative when they wind inward. Triangles with an out-of-range index are
/// skipped.
pub struct SignedVolume<'a> {
    mesh: &'a PrismMesh,
}

impl<'a> SignedVolume<'a> {
    /// Creates a new `SignedVolume` query.
    #[must_use]
    pub fn new(mesh: &'a PrismMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the signed volume.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let sum: f64 = (0..self.mesh.triangle_count())
            .filter_map(|i| self.mesh.triangle(i))
            .map(|[v0, v1, v2]| v0.coords.dot(&v1.coords.cross(&v2.coords)))
            .sum();
        sum / 6.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::make_prism;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn empty_mesh_has_zero_volume() {
        assert_relative_eq!(SignedVolume::new(&PrismMesh::default()).execute(), 0.0);
    }

    #[test]
    fn outward_box_volume() {
        // Clockwise from +z.
        let base = vec![
            p(0.0, 0.0, 0.0),
            p(0.0, 3.0, 0.0),
            p(2.0, 3.0, 0.0),
            p(2.0, 0.0, 0.0),
        ];
        let mesh = make_prism(&base, Vector3::new(0.0, 0.0, 4.0)).unwrap();
        assert_relative_eq!(SignedVolume::new(&mesh).execute(), 24.0, epsilon = 1e-12);
    }

    #[test]
    fn volume_is_translation_invariant() {
        let base = vec![
            p(10.0, 10.0, -5.0),
            p(10.0, 13.0, -5.0),
            p(12.0, 13.0, -5.0),
            p(12.0, 10.0, -5.0),
        ];
        let mesh = make_prism(&base, Vector3::new(0.0, 0.0, 4.0)).unwrap();
        assert_relative_eq!(SignedVolume::new(&mesh).execute(), 24.0, epsilon = 1e-9);
    }

    #[test]
    fn oblique_prism_volume_is_base_area_times_height() {
        let base = vec![
            p(0.0, 0.0, 0.0),
            p(0.0, 2.0, 0.0),
            p(3.0, 1.0, 0.0),
        ];
        let offset = Vector3::new(1.5, -0.5, -2.0);
        let mesh = make_prism(&base, offset).unwrap();
        // Base area is 3 and the height 2. The base normal is -z and the
        // offset goes down, so the mesh winds inward.
        assert_relative_eq!(SignedVolume::new(&mesh).execute(), -6.0, epsilon = 1e-12);
    }

    #[test]
    fn out_of_range_triangle_is_skipped() {
        let mut mesh = make_prism(
            &[p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 0.0, 0.0)],
            Vector3::z(),
        )
        .unwrap();
        let closed = SignedVolume::new(&mesh).execute();
        mesh.indices.push([0, 1, 99]);
        assert_relative_eq!(SignedVolume::new(&mesh).execute(), closed);
    }
}
