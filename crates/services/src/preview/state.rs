use std::collections::BTreeSet;

use course_core::model::{LessonCursor, LessonId};

/// Which pane the preview shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Course table of contents.
    #[default]
    Home,
    /// A single lesson.
    Lesson,
}

/// Mutable state of one preview session.
///
/// Owned by a `LessonNavigator`, which is its only mutator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    pub cursor: Option<LessonCursor>,
    pub completed: BTreeSet<LessonId>,
    pub view: ViewMode,
}

impl PreviewState {
    /// State resumed at a given lesson, as if `start_lesson` had been called.
    #[must_use]
    pub fn at(cursor: LessonCursor) -> Self {
        Self {
            cursor: Some(cursor),
            completed: BTreeSet::new(),
            view: ViewMode::Lesson,
        }
    }

    #[must_use]
    pub fn with_completed<I>(mut self, lessons: I) -> Self
    where
        I: IntoIterator<Item = LessonId>,
    {
        self.completed.extend(lessons);
        self
    }
}
