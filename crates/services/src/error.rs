//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use course_core::model::CourseError;

/// Errors emitted while loading a course definition.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read course file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("course file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Course(#[from] CourseError),
}
