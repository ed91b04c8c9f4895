pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{ErrorKind, PrismError, Result};
pub use operations::{make_prism, MakePrism};
pub use tessellation::{PrismMesh, PrismParams};
