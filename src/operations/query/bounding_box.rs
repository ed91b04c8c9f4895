use crate::math::Point3;
use crate::tessellation::PrismMesh;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Returns `true` if `point` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }
}

/// Computes the axis-aligned bounding box of a mesh's vertices.
pub struct BoundingBox<'a> {
    mesh: &'a PrismMesh,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(mesh: &'a PrismMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the AABB, or `None` for a mesh without
    /// vertices.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        let (first, rest) = self.mesh.vertices.split_first()?;
        Some(rest.iter().fold(
            Aabb {
                min: *first,
                max: *first,
            },
            |aabb, p| Aabb {
                min: aabb.min.inf(p),
                max: aabb.max.sup(p),
            },
        ))
    }
}
