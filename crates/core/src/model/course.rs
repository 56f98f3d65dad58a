use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::model::content::MediaUri;
use crate::model::ids::{CourseId, LessonId, ModuleId};
use crate::model::lesson::Lesson;
use crate::model::module::Module;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("module id {0} appears more than once")]
    DuplicateModuleId(ModuleId),

    #[error("lesson id {0} appears more than once")]
    DuplicateLessonId(LessonId),
}

//
// ─── METADATA ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        })
    }
}

/// Descriptive course information shown in the preview header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMeta {
    pub id: CourseId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<CourseLevel>,
    /// Free-form label such as "4h 30m".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<MediaUri>,
}

impl CourseMeta {
    pub fn new(id: CourseId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: None,
            description: None,
            category: None,
            level: None,
            duration: None,
            thumbnail: None,
        }
    }
}

//
// ─── CURSOR ────────────────────────────────────────────────────────────────────
//

/// The (module, lesson) pair identifying the lesson being viewed.
///
/// Not validated on construction: resolve it against a `Course` before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessonCursor {
    pub module_id: ModuleId,
    pub lesson_id: LessonId,
}

impl LessonCursor {
    #[must_use]
    pub const fn new(module_id: ModuleId, lesson_id: LessonId) -> Self {
        Self {
            module_id,
            lesson_id,
        }
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// Course tree: metadata plus ordered modules and lessons.
///
/// Ids are unique; everything else is descriptive. Modules may be empty and
/// lessons may still be drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    meta: CourseMeta,
    modules: Vec<Module>,
}

impl Course {
    /// Builds a course after checking the ids navigation relies on.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` for a blank title or duplicate module or lesson ids.
    pub fn new(meta: CourseMeta, modules: Vec<Module>) -> Result<Self, CourseError> {
        if meta.title.trim().is_empty() {
            return Err(CourseError::EmptyTitle);
        }

        let mut module_ids = HashSet::new();
        let mut lesson_ids = HashSet::new();
        for module in &modules {
            if !module_ids.insert(module.id) {
                return Err(CourseError::DuplicateModuleId(module.id));
            }
            for lesson in &module.lessons {
                if !lesson_ids.insert(lesson.id) {
                    return Err(CourseError::DuplicateLessonId(lesson.id));
                }
            }
        }

        Ok(Self { meta, modules })
    }

    #[must_use]
    pub fn id(&self) -> CourseId {
        self.meta.id
    }

    #[must_use]
    pub fn meta(&self) -> &CourseMeta {
        &self.meta
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.meta.title
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Sum of lesson counts across all modules.
    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }

    #[must_use]
    pub fn module(&self, module_id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    /// Resolves a cursor to its module and lesson. `None` when either is
    /// missing or the lesson does not belong to that module.
    #[must_use]
    pub fn resolve(&self, cursor: LessonCursor) -> Option<(&Module, &Lesson)> {
        let module = self.module(cursor.module_id)?;
        let lesson = module.lesson(cursor.lesson_id)?;
        Some((module, lesson))
    }

    /// Iterates lessons in module-major, lesson-minor order.
    pub fn lessons(&self) -> impl Iterator<Item = (&Module, &Lesson)> {
        self.modules
            .iter()
            .flat_map(|m| m.lessons.iter().map(move |l| (m, l)))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
