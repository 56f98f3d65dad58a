use serde::{Deserialize, Serialize};

use crate::model::content::{LessonContent, LessonKind};
use crate::model::ids::LessonId;

/// Smallest addressable unit of course content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub content: LessonContent,
    /// Position within the parent module as authored; informational only.
    #[serde(default)]
    pub order: u32,
}

impl Lesson {
    pub fn new(id: LessonId, title: impl Into<String>, content: LessonContent) -> Self {
        Self {
            id,
            title: title.into(),
            content,
            order: 0,
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn id(&self) -> LessonId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn kind(&self) -> LessonKind {
        self.content.kind()
    }

    #[must_use]
    pub fn content(&self) -> &LessonContent {
        &self.content
    }
}
