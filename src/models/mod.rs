pub mod footprint;
pub mod snapshot;

pub use footprint::*;
pub use snapshot::*;
