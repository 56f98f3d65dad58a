mod overview;
mod preview;

pub use overview::CourseOverview;
pub use preview::{CoursePreview, LessonBody};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
