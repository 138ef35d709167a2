//! Course catalog I/O: CSV loading, per-course deduplication and the
//! classified output views.

pub mod dedup;
pub mod models;
pub mod reader;
pub mod writer;

pub use dedup::{subset, unique_courses};
pub use models::{TaggedCatalog, TaggedCourse};
pub use reader::{load_courses, read_courses, CourseTable, REQUIRED_COLUMNS};
pub use writer::{write_courses, write_to};
