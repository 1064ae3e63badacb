pub mod dataset;
pub mod errors;
pub mod file;
pub mod ids;
pub mod partition;
pub mod workunit;

pub use dataset::*;
pub use errors::*;
pub use file::*;
pub use ids::*;
pub use partition::*;
pub use workunit::*;
