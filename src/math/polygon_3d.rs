use super::{Point3, Vector3};

/// Arithmetic mean of a set of points.
///
/// Returns the origin for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Point3::origin();
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum / points.len() as f64)
}

/// Translates every point by `offset`, preserving order.
#[must_use]
pub fn translated(points: &[Point3], offset: &Vector3) -> Vec<Point3> {
    points.iter().map(|p| p + offset).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]
    }

    // ── centroid ──

    #[test]
    fn centroid_of_square() {
        assert_eq!(centroid(&unit_square()), p(0.5, 0.5, 0.0));
    }

    #[test]
    fn centroid_of_empty_is_origin() {
        assert_eq!(centroid(&[]), Point3::origin());
    }

    #[test]
    fn centroid_of_translated_points_follows_offset() {
        let offset = Vector3::new(0.0, 0.0, 2.0);
        let top = translated(&unit_square(), &offset);
        assert_relative_eq!(centroid(&top), p(0.5, 0.5, 2.0));
    }
}
