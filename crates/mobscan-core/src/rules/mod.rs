pub mod extract;
pub mod observer;

pub use extract::{digit_runs, extract, extract_with};
pub use observer::ExtractObserver;
