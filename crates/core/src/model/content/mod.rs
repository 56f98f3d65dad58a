#[allow(clippy::module_inception)]
pub mod content;
pub mod form;
pub mod media;
pub mod quiz;
pub mod text;

pub use media::{ImageContent, MediaUri, MediaValidationError, VideoContent, VideoHost};

pub use content::{LessonContent, LessonKind};
pub use form::{FieldKind, FormContent, FormField};
pub use quiz::{QuizContent, QuizQuestion};
pub use text::TextContent;
