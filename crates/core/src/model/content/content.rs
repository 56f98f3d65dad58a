use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::content::{FormContent, ImageContent, QuizContent, TextContent, VideoContent};

//
// ─── LESSON KIND ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Text,
    Image,
    Video,
    Quiz,
    Form,
}

impl LessonKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Quiz => "Quiz",
            Self::Form => "Form",
        }
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── LESSON CONTENT ────────────────────────────────────────────────────────────
//

/// Payload of a lesson, one shape per lesson kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LessonContent {
    Text(TextContent),
    Image(ImageContent),
    Video(VideoContent),
    Quiz(QuizContent),
    Form(FormContent),
}

impl LessonContent {
    #[must_use]
    pub const fn kind(&self) -> LessonKind {
        match self {
            Self::Text(_) => LessonKind::Text,
            Self::Image(_) => LessonKind::Image,
            Self::Video(_) => LessonKind::Video,
            Self::Quiz(_) => LessonKind::Quiz,
            Self::Form(_) => LessonKind::Form,
        }
    }

    /// True for a lesson still being authored: blank text, a quiz without
    /// questions or a form without fields. Media lessons always carry a URI.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_blank(),
            Self::Image(_) | Self::Video(_) => false,
            Self::Quiz(quiz) => quiz.questions.is_empty(),
            Self::Form(form) => form.fields.is_empty(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
