mod make_prism;
mod validate_prism;

pub use make_prism::{make_prism, MakePrism};
pub use validate_prism::ValidatePrism;
