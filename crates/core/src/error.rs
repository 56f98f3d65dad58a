use thiserror::Error;

use crate::model::{CourseError, MediaValidationError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MediaValidation(#[from] MediaValidationError),
    #[error(transparent)]
    Course(#[from] CourseError),
}
