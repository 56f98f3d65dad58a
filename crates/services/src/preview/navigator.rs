use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use course_core::model::{Course, Lesson, LessonCursor, LessonId, Module, ModuleId};
use tracing::debug;

use super::progress::{CourseProgress, percentage};
use super::state::{PreviewState, ViewMode};

//
// ─── NAVIGATOR ─────────────────────────────────────────────────────────────────
//

/// Lesson traversal and completion tracking over a static course tree.
///
/// Lessons are visited in module-major, lesson-minor order. Empty modules
/// contribute nothing to that order and are skipped by navigation. A cursor
/// that does not resolve in the tree turns every lesson-dependent operation
/// into a no-op.
#[derive(Debug, Clone)]
pub struct LessonNavigator {
    course: Arc<Course>,
    order: Vec<LessonCursor>,
    positions: HashMap<LessonCursor, usize>,
    lesson_ids: HashSet<LessonId>,
    state: PreviewState,
}

impl LessonNavigator {
    #[must_use]
    pub fn new(course: Arc<Course>) -> Self {
        Self::with_state(course, PreviewState::default())
    }

    #[must_use]
    pub fn with_state(course: Arc<Course>, state: PreviewState) -> Self {
        let order: Vec<LessonCursor> = course
            .lessons()
            .map(|(module, lesson)| LessonCursor::new(module.id(), lesson.id()))
            .collect();
        let positions = order
            .iter()
            .enumerate()
            .map(|(index, cursor)| (*cursor, index))
            .collect();
        let lesson_ids = order.iter().map(|cursor| cursor.lesson_id).collect();

        Self {
            course,
            order,
            positions,
            lesson_ids,
            state,
        }
    }

    #[must_use]
    pub fn course(&self) -> &Arc<Course> {
        &self.course
    }

    #[must_use]
    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.state.view
    }

    #[must_use]
    pub fn cursor(&self) -> Option<LessonCursor> {
        self.state.cursor
    }

    // ─── Selection ────────────────────────────────────────────────────────────

    /// Selects a lesson and switches to the lesson pane. The pair is not
    /// checked against the tree.
    pub fn start_lesson(&mut self, module_id: ModuleId, lesson_id: LessonId) {
        debug!(%module_id, %lesson_id, "start lesson");
        self.state.cursor = Some(LessonCursor::new(module_id, lesson_id));
        self.state.view = ViewMode::Lesson;
    }

    /// Starts the first lesson of the course. Returns false for a course
    /// without lessons.
    pub fn start_course(&mut self) -> bool {
        match self.order.first().copied() {
            Some(first) => {
                self.start_lesson(first.module_id, first.lesson_id);
                true
            }
            None => false,
        }
    }

    /// Starts the first lesson not yet marked complete, or the first lesson
    /// when everything is done.
    pub fn continue_course(&mut self) -> bool {
        let target = self
            .order
            .iter()
            .find(|cursor| !self.state.completed.contains(&cursor.lesson_id))
            .or_else(|| self.order.first())
            .copied();
        match target {
            Some(cursor) => {
                self.start_lesson(cursor.module_id, cursor.lesson_id);
                true
            }
            None => false,
        }
    }

    /// Returns to the table of contents. Cursor and completions are kept.
    pub fn return_home(&mut self) {
        self.state.view = ViewMode::Home;
    }

    #[must_use]
    pub fn selected_lesson(&self) -> Option<&Lesson> {
        let cursor = self.state.cursor?;
        self.course.resolve(cursor).map(|(_, lesson)| lesson)
    }

    #[must_use]
    pub fn current_module(&self) -> Option<&Module> {
        let cursor = self.state.cursor?;
        self.course.resolve(cursor).map(|(module, _)| module)
    }

    /// 1-based position of the selected lesson and the total lesson count.
    #[must_use]
    pub fn lesson_position(&self) -> Option<(usize, usize)> {
        self.position().map(|index| (index + 1, self.order.len()))
    }

    fn position(&self) -> Option<usize> {
        let cursor = self.state.cursor?;
        self.positions.get(&cursor).copied()
    }

    // ─── Traversal ────────────────────────────────────────────────────────────

    #[must_use]
    pub fn has_next_lesson(&self) -> bool {
        self.position()
            .is_some_and(|index| index + 1 < self.order.len())
    }

    #[must_use]
    pub fn has_previous_lesson(&self) -> bool {
        self.position().is_some_and(|index| index > 0)
    }

    /// Moves to the following lesson, crossing into the next non-empty module
    /// when needed. Returns whether the cursor moved.
    pub fn go_to_next_lesson(&mut self) -> bool {
        let Some(index) = self.position() else {
            return false;
        };
        let Some(next) = self.order.get(index + 1).copied() else {
            return false;
        };
        debug!(module_id = %next.module_id, lesson_id = %next.lesson_id, "next lesson");
        self.state.cursor = Some(next);
        true
    }

    /// Moves to the preceding lesson, crossing into the last lesson of the
    /// previous non-empty module when needed. Returns whether the cursor moved.
    pub fn go_to_previous_lesson(&mut self) -> bool {
        let Some(index) = self.position().filter(|index| *index > 0) else {
            return false;
        };
        let previous = self.order[index - 1];
        debug!(
            module_id = %previous.module_id,
            lesson_id = %previous.lesson_id,
            "previous lesson"
        );
        self.state.cursor = Some(previous);
        true
    }

    // ─── Completion ───────────────────────────────────────────────────────────

    /// Flips completion of a lesson and returns the new membership.
    pub fn toggle_lesson_complete(&mut self, lesson_id: LessonId) -> bool {
        let completed = if self.state.completed.remove(&lesson_id) {
            false
        } else {
            self.state.completed.insert(lesson_id);
            true
        };
        debug!(%lesson_id, completed, "toggle lesson completion");
        completed
    }

    #[must_use]
    pub fn is_lesson_complete(&self, lesson_id: LessonId) -> bool {
        self.state.completed.contains(&lesson_id)
    }

    /// Completed lessons that exist in the course; foreign ids are ignored.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.state
            .completed
            .iter()
            .filter(|id| self.lesson_ids.contains(id))
            .count()
    }

    #[must_use]
    pub fn module_completed_count(&self, module_id: ModuleId) -> Option<usize> {
        let module = self.course.module(module_id)?;
        Some(
            module
                .lessons()
                .iter()
                .filter(|lesson| self.state.completed.contains(&lesson.id()))
                .count(),
        )
    }

    // ─── Progress ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.course.total_lessons()
    }

    #[must_use]
    pub fn progress_percentage(&self) -> u8 {
        percentage(self.completed_count(), self.total_lessons())
    }

    #[must_use]
    pub fn progress(&self) -> CourseProgress {
        CourseProgress::new(self.completed_count(), self.total_lessons())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
