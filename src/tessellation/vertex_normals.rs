use crate::error::{MeshError, Result};
use crate::math::{Point3, Vector3};

/// Computes smooth per-vertex normals for an indexed triangle mesh.
///
/// Each triangle contributes its un-normalized face normal (twice its area
/// along the face direction) to its three corners, so larger adjacent
/// triangles weigh more. Vertices whose accumulated normal is zero get the
/// zero vector.
pub struct VertexNormals<'a> {
    vertices: &'a [Point3],
    indices: &'a [[u32; 3]],
}

impl<'a> VertexNormals<'a> {
    /// Creates a new `VertexNormals` computation over finished buffers.
    #[must_use]
    pub fn new(vertices: &'a [Point3], indices: &'a [[u32; 3]]) -> Self {
        Self { vertices, indices }
    }

    /// Executes the computation, returning one normal per vertex.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IndexOutOfRange`] if any triangle references a
    /// vertex that does not exist.
    pub fn execute(&self) -> Result<Vec<Vector3>> {
        let vertex_count = self.vertices.len();
        let mut sums = vec![Vector3::zeros(); vertex_count];

        for (triangle, tri) in self.indices.iter().enumerate() {
            let mut corners = [Point3::origin(); 3];
            for (corner, &index) in corners.iter_mut().zip(tri) {
                *corner = *self.vertices.get(index as usize).ok_or(MeshError::IndexOutOfRange {
                    triangle,
                    index,
                    vertex_count,
                })?;
            }
            let [a, b, c] = corners;
            let face = (b - a).cross(&(c - a));
            for &index in tri {
                sums[index as usize] += face;
            }
        }

        Ok(sums
            .into_iter()
            .map(|n| n.try_normalize(0.0).unwrap_or_else(Vector3::zeros))
            .collect())
    }
}
