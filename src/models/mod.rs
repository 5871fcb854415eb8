pub mod advisor;
pub mod course;
pub mod request;
pub mod student;

pub use advisor::{Advisor, AdvisorCatalog};
pub use course::{CourseEntry, CourseField, CourseId, Direction};
pub use request::{Receipt, RequestPayload, SubmissionStatus};
pub use student::{StudentField, StudentInfo};

use thiserror::Error;

/// A command-line keyword that does not name any known field or direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownKeyword {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownKeyword {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
