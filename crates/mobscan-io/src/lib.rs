pub mod companies;
pub mod error;
pub mod report;
pub mod source;

pub use error::{IoError, Result};
