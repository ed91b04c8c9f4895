use crate::math::polygon_3d::{centroid, translated};
use crate::math::{Point3, Vector3};

use super::PrismMesh;

/// Builds the position and index buffers of a prism.
///
/// Input must already be validated: at least 3 coplanar, non-degenerate
/// points, an offset off the base plane, and `2n + 2` vertices addressable
/// by `u32`. Building never fails.
///
/// Buffer layout for `n` base points:
///
/// ```text
/// 0 .. n       base ring
/// n .. 2n      top ring (base + offset)
/// 2n           bottom center
/// 2n + 1       top center
/// ```
///
/// Triangles are emitted as `2n` side triangles, then the `n` bottom fan
/// triangles, then the `n` top fan triangles.
pub struct PrismBuffers<'a> {
    points: &'a [Point3],
    offset: Vector3,
}

impl<'a> PrismBuffers<'a> {
    /// Creates a new `PrismBuffers` builder.
    #[must_use]
    pub fn new(points: &'a [Point3], offset: Vector3) -> Self {
        Self { points, offset }
    }

    /// Builds the mesh. Normals are left empty.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn build(&self) -> PrismMesh {
        let n = self.points.len();
        let top = translated(self.points, &self.offset);

        let mut vertices = Vec::with_capacity(2 * n + 2);
        vertices.extend_from_slice(self.points);
        vertices.extend_from_slice(&top);
        vertices.push(centroid(self.points));
        // Averaged from the translated ring rather than shifting the bottom center.
        vertices.push(centroid(&top));

        let n32 = n as u32;
        let bottom_center = 2 * n32;
        let top_center = bottom_center + 1;

        let mut indices = Vec::with_capacity(4 * n);

        // Side walls: quad {b_i, t_i, t_next, b_next} split along t_i -> b_next.
        for i in 0..n32 {
            let next = (i + 1) % n32;
            let (b_i, b_next) = (i, next);
            let (t_i, t_next) = (i + n32, next + n32);
            indices.push([b_i, t_i, b_next]);
            indices.push([t_i, t_next, b_next]);
        }

        // Bottom cap follows the base winding.
        for i in 0..n32 {
            let next = (i + 1) % n32;
            indices.push([bottom_center, i, next]);
        }

        // Top cap is reversed so it faces the other way.
        for i in 0..n32 {
            let next = (i + 1) % n32;
            indices.push([top_center, next + n32, i + n32]);
        }

        PrismMesh {
            vertices,
            normals: Vec::new(),
            indices,
        }
    }
}
