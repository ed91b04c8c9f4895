use tracing::{debug, debug_span};

use crate::error::{InputError, Result};
use crate::math::{Point3, Vector3};
use crate::tessellation::{PrismBuffers, PrismMesh, PrismParams};

use super::ValidatePrism;

/// Creates the triangle mesh of a prism from a planar base polygon and an
/// extrusion offset.
///
/// The base polygon is copied to a top polygon translated by `offset`; the
/// two rings are joined by side walls (two triangles per edge), and each cap
/// is fan-triangulated around the ring's centroid.
///
/// The bottom cap faces along the base polygon's own normal (right-hand rule
/// over the point order), and the top cap faces the opposite way. The mesh
/// is therefore wound outward when the offset points against the base
/// normal, and inward otherwise.
///
/// Polygon simplicity is not checked: a self-intersecting base still
/// produces a mesh, with overlapping faces.
pub struct MakePrism {
    points: Vec<Point3>,
    offset: Vector3,
    params: PrismParams,
}

impl MakePrism {
    /// Creates a new `MakePrism` operation with default parameters.
    #[must_use]
    pub fn new(points: Vec<Point3>, offset: Vector3) -> Self {
        Self {
            points,
            offset,
            params: PrismParams::default(),
        }
    }

    /// Creates a `MakePrism` operation from flat coordinate buffers.
    ///
    /// `coords` is `[x0, y0, z0, x1, y1, z1, ...]` and `offset` is `[x, y, z]`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MalformedPointBuffer`] if `coords` is not a whole
    /// number of points, or [`InputError::InvalidOffset`] if `offset` does
    /// not have exactly three components.
    pub fn from_flat(coords: &[f64], offset: &[f64]) -> Result<Self> {
        if coords.len() % 3 != 0 {
            return Err(InputError::MalformedPointBuffer { len: coords.len() }.into());
        }
        let &[ox, oy, oz] = offset else {
            return Err(InputError::InvalidOffset.into());
        };
        let points = coords
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self::new(points, Vector3::new(ox, oy, oz)))
    }

    /// Sets the validation and output parameters.
    #[must_use]
    pub fn with_params(mut self, params: PrismParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the prism mesh.
    ///
    /// # Errors
    ///
    /// Returns any error from [`ValidatePrism`]; no mesh is produced on
    /// failure.
    pub fn execute(&self) -> Result<PrismMesh> {
        let _span = debug_span!("make_prism", points = self.points.len()).entered();

        ValidatePrism::new(&self.points, self.offset)
            .with_params(self.params)
            .execute()?;

        let mut mesh = PrismBuffers::new(&self.points, self.offset).build();
        if self.params.compute_normals {
            mesh.compute_vertex_normals()?;
        }

        debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "built prism mesh"
        );
        Ok(mesh)
    }
}

/// Builds a prism mesh with default parameters.
///
/// Shorthand for `MakePrism::new(points.to_vec(), offset).execute()`.
///
/// # Errors
///
/// See [`MakePrism::execute`].
pub fn make_prism(points: &[Point3], offset: Vector3) -> Result<PrismMesh> {
    MakePrism::new(points.to_vec(), offset).execute()
}
