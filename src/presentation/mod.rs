/// Boxed table renderings of API models
pub mod table;

pub use table::*;
