pub mod polygon_3d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Absolute distance tolerance for coplanarity and offset checks.
pub const TOLERANCE: f64 = 1e-10;

/// Minimum cross-product length for a triangle to span a plane.
pub const DEGENERACY_TOLERANCE: f64 = 1e-12;

/// Returns `true` if all three components are finite.
#[must_use]
pub fn is_finite(v: &Vector3) -> bool {
    v.iter().all(|c| c.is_finite())
}
