use std::collections::HashMap;

use tracing::debug;

use crate::tessellation::PrismMesh;

/// Validates the structural consistency of a closed triangle mesh.
///
/// A mesh is valid when every index is in range, no triangle repeats a
/// vertex, and every undirected edge is shared by exactly two triangles.
pub struct IsValid<'a> {
    mesh: &'a PrismMesh,
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(mesh: &'a PrismMesh) -> Self {
        Self { mesh }
    }

    /// Executes the validation, returning `true` if the mesh is valid.
    #[must_use]
    pub fn execute(&self) -> bool {
        let vertex_count = self.mesh.vertex_count();
        let mut edge_uses: HashMap<(u32, u32), usize> = HashMap::new();

        for (triangle, &[a, b, c]) in self.mesh.indices.iter().enumerate() {
            if [a, b, c].iter().any(|&i| i as usize >= vertex_count) {
                debug!(triangle, "index out of range");
                return false;
            }
            if a == b || b == c || c == a {
                debug!(triangle, "triangle repeats a vertex");
                return false;
            }
            for (u, v) in [(a, b), (b, c), (c, a)] {
                *edge_uses.entry((u.min(v), u.max(v))).or_default() += 1;
            }
        }

        match edge_uses.iter().find(|&(_, &uses)| uses != 2) {
            Some((edge, uses)) => {
                debug!(?edge, uses, "edge is not shared by exactly two triangles");
                false
            }
            None => true,
        }
    }
}
