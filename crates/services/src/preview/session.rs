use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::sync::Arc;

use course_core::Clock;
use course_core::model::Course;
use tracing::info;

use super::navigator::LessonNavigator;

type CloseCallback = Box<dyn FnMut() + Send>;

/// Open/closed lifecycle of a course preview.
///
/// Every `open` builds a fresh `LessonNavigator`, so selection, completions and
/// view mode never outlive a session. `close` drops them and notifies the host.
pub struct PreviewSession {
    course: Arc<Course>,
    clock: Clock,
    navigator: Option<LessonNavigator>,
    opened_at: Option<DateTime<Utc>>,
    on_close: Option<CloseCallback>,
}

impl PreviewSession {
    #[must_use]
    pub fn new(course: Arc<Course>, clock: Clock) -> Self {
        Self {
            course,
            clock,
            navigator: None,
            opened_at: None,
            on_close: None,
        }
    }

    /// Registers the callback invoked when an open session is closed.
    #[must_use]
    pub fn with_on_close(mut self, on_close: impl FnMut() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }

    #[must_use]
    pub fn course(&self) -> &Arc<Course> {
        &self.course
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.navigator.is_some()
    }

    #[must_use]
    pub fn opened_at(&self) -> Option<DateTime<Utc>> {
        self.opened_at
    }

    /// Time spent in the current session, `None` while closed.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.opened_at.map(|at| self.clock.elapsed_since(at))
    }

    /// Opens the preview with fresh state. Reopening resets progress.
    pub fn open(&mut self) -> &mut LessonNavigator {
        let opened_at = self.clock.now();
        info!(
            course_id = %self.course.id(),
            lessons = self.course.total_lessons(),
            "course preview opened"
        );
        self.opened_at = Some(opened_at);
        self.navigator.insert(LessonNavigator::new(Arc::clone(&self.course)))
    }

    /// Closes the preview and discards its state. No-op when already closed.
    pub fn close(&mut self) {
        let Some(navigator) = self.navigator.take() else {
            return;
        };
        info!(
            course_id = %self.course.id(),
            completed = navigator.completed_count(),
            percentage = navigator.progress_percentage(),
            "course preview closed"
        );
        self.opened_at = None;
        if let Some(on_close) = self.on_close.as_mut() {
            on_close();
        }
    }

    #[must_use]
    pub fn navigator(&self) -> Option<&LessonNavigator> {
        self.navigator.as_ref()
    }

    pub fn navigator_mut(&mut self) -> Option<&mut LessonNavigator> {
        self.navigator.as_mut()
    }
}

impl fmt::Debug for PreviewSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewSession")
            .field("course_id", &self.course.id())
            .field("is_open", &self.is_open())
            .field("opened_at", &self.opened_at)
            .finish_non_exhaustive()
    }
}
