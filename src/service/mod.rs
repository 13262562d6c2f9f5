//! Request validation for the bookmark routes.

pub mod validation;
pub use validation::*;
