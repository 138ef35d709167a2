//! coursetag-common: Shared types and errors used across all coursetag crates.

pub mod error;
pub mod course;
pub mod classification;

// Re-export commonly used types
pub use classification::ClassificationResult;
pub use course::{CourseKey, CourseRecord, Topic};
pub use error::{CoursetagError, Result};
