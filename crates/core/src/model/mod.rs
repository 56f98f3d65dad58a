pub mod content;
mod course;
mod ids;
mod lesson;
mod module;

pub use content::{
    FieldKind, FormContent, FormField, ImageContent, LessonContent, LessonKind, MediaUri,
    MediaValidationError, QuizContent, QuizQuestion, TextContent, VideoContent, VideoHost,
};
pub use ids::{CourseId, LessonId, ModuleId, ParseIdError};

pub use course::{Course, CourseError, CourseLevel, CourseMeta, LessonCursor};
pub use lesson::Lesson;
pub use module::Module;
