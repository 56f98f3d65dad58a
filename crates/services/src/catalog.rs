//! Course definitions loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use course_core::model::{Course, CourseMeta, Module};

use crate::error::CatalogError;

/// On-disk shape of a course: metadata plus ordered modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFile {
    pub course: CourseMeta,
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl CourseFile {
    /// # Errors
    ///
    /// Returns `CatalogError::Course` for a blank title or duplicate ids.
    pub fn into_course(self) -> Result<Course, CatalogError> {
        for module in self.modules.iter().filter(|m| m.is_empty()) {
            warn!(module_id = %module.id(), title = module.title(), "module has no lessons");
        }
        for lesson in self.modules.iter().flat_map(|m| m.lessons()) {
            if lesson.content.is_empty() {
                warn!(lesson_id = %lesson.id(), kind = %lesson.kind(), "lesson has no content yet");
            }
        }
        let course = Course::new(self.course, self.modules)?;
        info!(
            course_id = %course.id(),
            modules = course.modules().len(),
            lessons = course.total_lessons(),
            "course loaded"
        );
        Ok(course)
    }
}

impl From<&Course> for CourseFile {
    fn from(course: &Course) -> Self {
        Self {
            course: course.meta().clone(),
            modules: course.modules().to_vec(),
        }
    }
}

/// # Errors
///
/// Returns `CatalogError::Json` for malformed input and
/// `CatalogError::Course` for a blank title or duplicate ids. Draft lessons
/// load as-is.
pub fn load_course_from_str(json: &str) -> Result<Course, CatalogError> {
    let file: CourseFile = serde_json::from_str(json)?;
    file.into_course()
}

/// # Errors
///
/// Returns `CatalogError::Io` when the file cannot be read, otherwise the
/// errors of [`load_course_from_str`].
pub fn load_course_from_path(path: impl AsRef<Path>) -> Result<Course, CatalogError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_course_from_str(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::{CourseError, LessonId, LessonKind};

    const COURSE_JSON: &str = r##"{
        "course": { "id": 10, "title": "Photography 101", "level": "beginner", "duration": "2h" },
        "modules": [
            {
                "id": 1,
                "title": "Light",
                "lessons": [
                    { "id": 1, "title": "Intro", "content": { "type": "text", "body": "# Light" } },
                    { "id": 2, "title": "Demo", "content": { "type": "video", "url": "https://youtu.be/abc123" } }
                ]
            },
            { "id": 2, "title": "Coming soon" }
        ]
    }"##;

    #[test]
    fn loads_course_with_empty_module() {
        let course = load_course_from_str(COURSE_JSON).unwrap();
        assert_eq!(course.title(), "Photography 101");
        assert_eq!(course.modules().len(), 2);
        assert_eq!(course.total_lessons(), 2);
        let (_, lesson) = course.lessons().nth(1).unwrap();
        assert_eq!(lesson.kind(), LessonKind::Video);
    }

    #[test]
    fn draft_lessons_load() {
        let json = r#"{
            "course": { "id": 3, "title": "Work in progress" },
            "modules": [
                { "id": 1, "title": "Drafts", "lessons": [
                    { "id": 1, "title": "Outline", "content": { "type": "text", "body": "  " } },
                    { "id": 2, "title": "Check", "content": { "type": "quiz", "questions": [] } },
                    { "id": 3, "title": "Half done", "content": { "type": "quiz", "questions": [
                        { "prompt": "Pick one", "options": ["a"], "correct": 4 },
                        { "prompt": "No options yet" }
                    ] } },
                    { "id": 4, "title": "Survey", "content": { "type": "form", "fields": [] } },
                    { "id": 5, "title": "Choices", "content": { "type": "form", "fields": [
                        { "label": "Pick", "kind": "radio" }
                    ] } }
                ] }
            ]
        }"#;
        let course = load_course_from_str(json).unwrap();
        assert_eq!(course.total_lessons(), 5);
        let empty: Vec<LessonId> = course
            .lessons()
            .filter(|(_, lesson)| lesson.content.is_empty())
            .map(|(_, lesson)| lesson.id())
            .collect();
        assert_eq!(empty, vec![LessonId::new(1), LessonId::new(2), LessonId::new(4)]);
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = load_course_from_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn invalid_tree_is_course_error() {
        let json = r#"{
            "course": { "id": 1, "title": "Dupes" },
            "modules": [
                { "id": 1, "title": "A", "lessons": [
                    { "id": 5, "title": "x", "content": { "type": "text", "body": "a" } },
                    { "id": 5, "title": "y", "content": { "type": "text", "body": "b" } }
                ] }
            ]
        }"#;
        let err = load_course_from_str(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Course(CourseError::DuplicateLessonId(id)) if id == LessonId::new(5)
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_course_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn course_file_round_trips_through_json() {
        let course = load_course_from_str(COURSE_JSON).unwrap();
        let json = serde_json::to_string(&CourseFile::from(&course)).unwrap();
        assert_eq!(load_course_from_str(&json).unwrap(), course);
    }
}
