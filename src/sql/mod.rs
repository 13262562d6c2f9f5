//! Safe SQL builder: identifiers are fixed constants, values are bind parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
