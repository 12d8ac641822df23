//! Language-independent contracts: errors, script selection, conversion
//! modes and the converter/fallback capability traits.

mod converter;
mod error;
mod mode;
mod script;

pub use converter::*;
pub use error::*;
pub use mode::*;
pub use script::*;
