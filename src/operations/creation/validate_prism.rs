use tracing::debug;

use crate::error::{InputError, PrismError, Result};
use crate::geometry::Plane;
use crate::math::{is_finite, Point3, Vector3};
use crate::tessellation::PrismParams;

/// Checks that a base polygon and offset describe a buildable prism.
///
/// Checks run in order and stop at the first failure:
///
/// 1. at least 3 points, and few enough that `2n + 2` fits a `u32` index;
/// 2. every point has finite coordinates;
/// 3. the offset has finite components;
/// 4. a plane can be fitted (the points are not all collinear/coincident);
/// 5. every point lies within tolerance of that plane;
/// 6. the offset has a component along the plane normal of at least the
///    same tolerance.
///
/// On success the fitted plane is returned.
pub struct ValidatePrism<'a> {
    points: &'a [Point3],
    offset: Vector3,
    params: PrismParams,
}

impl<'a> ValidatePrism<'a> {
    /// Creates a new `ValidatePrism` check with default parameters.
    #[must_use]
    pub fn new(points: &'a [Point3], offset: Vector3) -> Self {
        Self {
            points,
            offset,
            params: PrismParams::default(),
        }
    }

    /// Sets the tolerances used by the check.
    #[must_use]
    pub fn with_params(mut self, params: PrismParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the check, returning the fitted base plane.
    ///
    /// # Errors
    ///
    /// - [`PrismError::InvalidInput`] for too few or too many points, a
    ///   non-finite point, or a non-finite offset.
    /// - [`PrismError::DegeneratePolygon`] if no plane can be fitted.
    /// - [`PrismError::NonCoplanar`] if a point is off the fitted plane.
    /// - [`PrismError::CoincidentFaces`] if the offset lies in the plane.
    pub fn execute(&self) -> Result<Plane> {
        self.check_input().inspect_err(|err| debug!(%err, "rejected prism input"))?;

        let plane = Plane::fit_with_tolerance(self.points, self.params.degeneracy_tolerance)
            .ok_or(PrismError::DegeneratePolygon)
            .inspect_err(|_| debug!(points = self.points.len(), "base polygon is degenerate"))?;

        let tolerance = self.params.coplanarity_tolerance;
        if let Some((index, distance)) = self
            .points
            .iter()
            .map(|p| plane.signed_distance(p))
            .enumerate()
            .find(|(_, d)| d.is_nan() || d.abs() > tolerance)
        {
            debug!(index, distance, "base point off the fitted plane");
            return Err(PrismError::NonCoplanar { index, distance });
        }

        let projection = self.offset.dot(plane.normal());
        if projection.is_nan() || projection.abs() < tolerance {
            debug!(projection, "offset lies in the base plane");
            return Err(PrismError::CoincidentFaces { projection });
        }

        debug!(
            normal = ?plane.normal(),
            origin = ?plane.origin(),
            projection,
            "prism input validated"
        );
        Ok(plane)
    }

    fn check_input(&self) -> std::result::Result<(), InputError> {
        let count = self.points.len();
        if count < 3 {
            return Err(InputError::TooFewPoints { count });
        }
        // The top center has the largest index, 2n + 1.
        let max_index = count.checked_mul(2).and_then(|c| c.checked_add(1));
        if max_index.and_then(|i| u32::try_from(i).ok()).is_none() {
            return Err(InputError::TooManyPoints { count });
        }
        if let Some(index) = self.points.iter().position(|p| !is_finite(&p.coords)) {
            return Err(InputError::NonFinitePoint { index });
        }
        if !is_finite(&self.offset) {
            return Err(InputError::InvalidOffset);
        }
        Ok(())
    }
}
