use serde::{Deserialize, Serialize};

/// Body of a text lesson written in the lightweight lesson markup
/// (`#` headings, `-`/`1.` list lines, `**bold**`, `*italic*`, `` `code` ``).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextContent {
    pub body: String,
}

impl TextContent {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }
}
