mod prism_buffers;
mod vertex_normals;

pub use prism_buffers::PrismBuffers;
pub use vertex_normals::VertexNormals;

use crate::error::Result;
use crate::math::{Point3, Vector3, DEGENERACY_TOLERANCE, TOLERANCE};

/// Parameters controlling prism validation and output.
#[derive(Debug, Clone, Copy)]
pub struct PrismParams {
    /// Maximum distance of a base point from the fitted plane, and minimum
    /// length of the offset's projection onto the plane normal.
    pub coplanarity_tolerance: f64,
    /// Minimum cross-product length for a triangle to define the base plane.
    pub degeneracy_tolerance: f64,
    /// Whether to compute smooth vertex normals after building the buffers.
    pub compute_normals: bool,
}

impl Default for PrismParams {
    fn default() -> Self {
        Self {
            coplanarity_tolerance: TOLERANCE,
            degeneracy_tolerance: DEGENERACY_TOLERANCE,
            compute_normals: true,
        }
    }
}

/// An indexed triangle mesh of a closed prism.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrismMesh {
    /// Vertex positions: base ring, top ring, bottom center, top center.
    pub vertices: Vec<Point3>,
    /// Vertex normals. Empty until [`PrismMesh::compute_vertex_normals`] runs.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle). All triangles share
    /// one orientation: outward when the offset opposes the base polygon's
    /// normal, inward when it follows it.
    pub indices: Vec<[u32; 3]>,
}

impl PrismMesh {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Positions flattened to `[x0, y0, z0, x1, ...]`.
    #[must_use]
    pub fn positions_flat(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
    }

    /// Indices flattened to `[a0, b0, c0, a1, ...]`.
    #[must_use]
    pub fn indices_flat(&self) -> Vec<u32> {
        self.indices.iter().flatten().copied().collect()
    }

    /// Normals flattened to `[x0, y0, z0, x1, ...]`.
    #[must_use]
    pub fn normals_flat(&self) -> Vec<f64> {
        self.normals.iter().flat_map(|n| [n.x, n.y, n.z]).collect()
    }

    /// The three corner positions of triangle `i`.
    ///
    /// Returns `None` if `i` or one of its indices is out of range.
    #[must_use]
    pub fn triangle(&self, i: usize) -> Option<[Point3; 3]> {
        let [a, b, c] = *self.indices.get(i)?;
        Some([
            *self.vertices.get(a as usize)?,
            *self.vertices.get(b as usize)?,
            *self.vertices.get(c as usize)?,
        ])
    }

    /// Replaces [`PrismMesh::normals`] with smooth, area-weighted vertex normals.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MeshError::IndexOutOfRange`] if a triangle
    /// references a missing vertex.
    pub fn compute_vertex_normals(&mut self) -> Result<()> {
        self.normals = VertexNormals::new(&self.vertices, &self.indices).execute()?;
        Ok(())
    }
}
