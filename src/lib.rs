pub mod demo;
pub mod distr;
pub mod error;
pub mod feat;
pub mod ffi;
pub mod ibp;
pub mod prelude;
pub mod testing;

pub use error::IbpError;
pub use feat::{left_order, FeatureAllocation};
pub use ibp::{generate, IbpParameters};
