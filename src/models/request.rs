use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CourseEntry, StudentInfo};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Everything the form sends in one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    pub request_id: Uuid,
    pub student: StudentInfo,
    pub advisor_id: String,
    pub courses_to_add: Vec<CourseEntry>,
    pub courses_to_drop: Vec<CourseEntry>,
    pub reason: String,
    pub submitted_at: String,
}

/// Acknowledgment returned by a transport on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub ticket_id: Option<String>,
}
