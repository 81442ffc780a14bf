// Data module: one-shot loads of the station CSV and the state topology.

pub mod error;
pub mod loader;
pub mod topology;

pub use error::DataError;
pub use topology::StateOutline;
