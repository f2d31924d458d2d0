pub mod analysis;
pub mod domain;
pub mod error;
pub mod har;
pub mod report;

pub use error::{Error, Result};
