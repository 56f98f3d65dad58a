mod navigator;
mod progress;
mod session;
mod state;

// Public API of the preview subsystem.
pub use navigator::LessonNavigator;
pub use progress::{CourseProgress, percentage};
pub use session::PreviewSession;
pub use state::{PreviewState, ViewMode};
