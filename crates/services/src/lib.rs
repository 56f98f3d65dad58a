#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod preview;
pub mod sample;

pub use course_core::Clock;

pub use catalog::{CourseFile, load_course_from_path, load_course_from_str};
pub use error::CatalogError;
pub use preview::{CourseProgress, LessonNavigator, PreviewSession, PreviewState, ViewMode};
pub use sample::sample_course;
