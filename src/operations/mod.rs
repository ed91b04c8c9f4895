pub mod creation;
pub mod query;

pub use creation::{make_prism, MakePrism, ValidatePrism};
