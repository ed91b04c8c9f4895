use crate::math::{Point3, Vector3, DEGENERACY_TOLERANCE};

/// An infinite plane in 3D space.
///
/// Defined by a reference point on the plane and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    origin: Point3,
    normal: Vector3,
}

impl Plane {
    /// Fits a plane through a polygon using [`DEGENERACY_TOLERANCE`].
    ///
    /// See [`Plane::fit_with_tolerance`].
    #[must_use]
    pub fn fit(points: &[Point3]) -> Option<Self> {
        Self::fit_with_tolerance(points, DEGENERACY_TOLERANCE)
    }

    /// Fits a plane through a polygon.
    ///
    /// The first point is the reference point. The normal comes from the
    /// first triangle `(points[0], points[i], points[i + 1])` whose cross
    /// product is longer than `tolerance`, so the normal follows the
    /// polygon's winding. Returns `None` when every such triangle is
    /// degenerate, i.e. the points are collinear or coincident.
    ///
    /// The returned normal always has unit length, also for coordinates
    /// large enough to overflow the cross product.
    #[must_use]
    pub fn fit_with_tolerance(points: &[Point3], tolerance: f64) -> Option<Self> {
        let (a, rest) = points.split_first()?;
        rest.windows(2).find_map(|pair| {
            triangle_normal(a, &pair[0], &pair[1], tolerance).map(|normal| Self {
                origin: *a,
                normal,
            })
        })
    }

    /// Returns the reference point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Signed distance from `point` to the plane, positive on the normal side.
    ///
    /// Points whose difference from the origin overflows are measured in
    /// rescaled coordinates; the result is infinite only if the distance
    /// itself is not representable.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        let d = (point - self.origin).dot(&self.normal);
        if d.is_finite() {
            return d;
        }
        let scale = max_abs_coordinate(&[*point, self.origin]);
        ((*point / scale) - (self.origin / scale)).dot(&self.normal) * scale
    }
}

/// Unit normal of triangle `(a, b, c)`, or `None` if its cross product is not
/// longer than `tolerance`.
fn triangle_normal(a: &Point3, b: &Point3, c: &Point3, tolerance: f64) -> Option<Vector3> {
    let normal = (b - a).cross(&(c - a));
    let len = normal.norm();
    if len.is_finite() {
        return (len > tolerance).then(|| normal / len);
    }
    // Overflowed: the triangle is far from degenerate, only its size is
    // unrepresentable. Shrink it into the unit cube and take the direction.
    let scale = max_abs_coordinate(&[*a, *b, *c]);
    let (a, b, c) = (*a / scale, *b / scale, *c / scale);
    (b - a).cross(&(c - a)).try_normalize(0.0)
}

fn max_abs_coordinate(points: &[Point3]) -> f64 {
    points
        .iter()
        .flat_map(|p| p.iter())
        .fold(0.0_f64, |m, x| m.max(x.abs()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn fit_ccw_triangle_gives_plus_z() {
        let plane = Plane::fit(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]).unwrap();
        assert_relative_eq!(*plane.normal(), Vector3::z());
        assert_eq!(*plane.origin(), p(0.0, 0.0, 0.0));
    }

    #[test]
    fn fit_cw_triangle_gives_minus_z() {
        let plane = Plane::fit(&[p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 0.0, 0.0)]).unwrap();
        assert_relative_eq!(*plane.normal(), -Vector3::z());
    }

    #[test]
    fn fit_normal_is_unit_length() {
        let plane = Plane::fit(&[p(0.0, 0.0, 0.0), p(5.0, 0.0, 3.0), p(0.0, 7.0, -2.0)]).unwrap();
        assert_relative_eq!(plane.normal().norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn fit_skips_leading_duplicate() {
        let plane = Plane::fit(&[
            p(0.0, 0.0, 0.0),
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
        ])
        .unwrap();
        assert_relative_eq!(*plane.normal(), Vector3::z());
    }

    #[test]
    fn fit_skips_collinear_prefix() {
        let plane = Plane::fit(&[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 0.0, 1.0),
        ])
        .unwrap();
        assert_relative_eq!(*plane.normal(), -Vector3::y());
    }

    #[test]
    fn fit_collinear_returns_none() {
        assert!(Plane::fit(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]).is_none());
    }

    #[test]
    fn fit_coincident_returns_none() {
        let q = p(1.0, 2.0, 3.0);
        assert!(Plane::fit(&[q, q, q, q]).is_none());
    }

    #[test]
    fn fit_too_few_points_returns_none() {
        assert!(Plane::fit(&[]).is_none());
        assert!(Plane::fit(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]).is_none());
    }

    #[test]
    fn signed_distance_sign_follows_normal() {
        let plane = Plane::fit(&[p(0.0, 0.0, 1.0), p(2.0, 0.0, 1.0), p(0.0, 2.0, 1.0)]).unwrap();
        assert_relative_eq!(plane.signed_distance(&p(3.0, 4.0, 3.0)), 2.0);
        assert_relative_eq!(plane.signed_distance(&p(3.0, 4.0, 0.0)), -1.0);
    }

    // ── Large coordinates ──

    #[test]
    fn fit_huge_triangle_gives_unit_normal() {
        let plane = Plane::fit(&[p(0.0, 0.0, 0.0), p(1e200, 0.0, 0.0), p(0.0, 1e200, 0.0)]).unwrap();
        assert_relative_eq!(*plane.normal(), Vector3::z());
        assert_relative_eq!(plane.normal().norm(), 1.0);
    }

    #[test]
    fn fit_tilted_huge_triangle_gives_unit_normal() {
        let plane = Plane::fit(&[p(1e200, 0.0, 0.0), p(0.0, 1e200, 0.0), p(0.0, 0.0, 1e200)]).unwrap();
        let expected = Vector3::new(1.0, 1.0, 1.0).normalize();
        assert_relative_eq!(*plane.normal(), expected, epsilon = 1e-12);
    }

    #[test]
    fn fit_with_overflowing_edges_gives_unit_normal() {
        // Edge vectors exceed f64::MAX.
        let plane = Plane::fit(&[p(-1e308, 0.0, 0.0), p(1e308, 0.0, 0.0), p(1e308, 1e308, 0.0)]).unwrap();
        assert_relative_eq!(*plane.normal(), Vector3::z());
    }

    #[test]
    fn signed_distance_with_overflowing_difference_is_finite() {
        let plane = Plane::fit(&[p(-1e308, 0.0, 0.0), p(1e308, 0.0, 0.0), p(1e308, 1e308, 0.0)]).unwrap();
        assert_relative_eq!(plane.signed_distance(&p(1e308, -1e308, 0.0)), 0.0);
        assert_relative_eq!(plane.signed_distance(&p(1e308, -1e308, 2.0)), 2.0, epsilon = 1e-9);
    }
}
