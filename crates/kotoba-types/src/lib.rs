pub mod analysis;
pub mod types;

pub use analysis::*;
pub use types::*;
