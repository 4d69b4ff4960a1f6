pub mod serve;
pub mod snapshot;

pub use serve::serve;
pub use snapshot::{OutputFormat, snapshot};
