//! Builds a few prisms and logs their buffers.
//!
//! Usage:
//! ```text
//! cargo run --example prism_dump
//! RUST_LOG=prismesh=debug cargo run --example prism_dump
//! ```

use prismesh::math::{Point3, Vector3};
use prismesh::operations::query::{BoundingBox, IsValid, SignedVolume};
use prismesh::{make_prism, MakePrism, PrismError};
use tracing::{info, warn};

fn main() -> Result<(), PrismError> {
    // Default: WARN for everything, INFO for this demo and prismesh.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("prism_dump=info".parse().unwrap_or_default())
        .add_directive("prismesh=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let triangle = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    let mesh = make_prism(&triangle, Vector3::new(0.0, 0.0, 1.0))?;
    info!(positions = ?mesh.positions_flat(), "triangle prism");
    info!(indices = ?mesh.indices_flat(), "triangle prism");

    // Clockwise from +z, extruded upward: outward-wound.
    let square = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
        Point3::new(2.0, 2.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    ];
    let mesh = make_prism(&square, Vector3::new(0.5, 0.0, 3.0))?;
    info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        closed = IsValid::new(&mesh).execute(),
        volume = SignedVolume::new(&mesh).execute(),
        aabb = ?BoundingBox::new(&mesh).execute(),
        "oblique square prism"
    );

    let flat = MakePrism::from_flat(
        &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
        &[1.0, 1.0, 0.0],
    )?;
    if let Err(err) = flat.execute() {
        warn!(kind = ?err.kind(), %err, "rejected in-plane offset");
    }

    Ok(())
}
