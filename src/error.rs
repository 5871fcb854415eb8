use thiserror::Error;
use tracing::error;

use crate::models::{CourseField, Direction, StudentField};

/// Input problems caught before anything is sent. None of them change form state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no academic advisor selected")]
    AdvisorNotSelected,

    #[error("unknown advisor: {0}")]
    UnknownAdvisor(String),

    #[error("missing student field: {0:?}")]
    MissingStudentField(StudentField),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("course {position} in the {} list has an empty {field:?}", .direction.as_str())]
    IncompleteCourse {
        direction: Direction,
        position: usize,
        field: CourseField,
    },

    #[error("a submission is already in flight")]
    SubmissionInFlight,
}

impl FormError {
    pub fn user_message(&self) -> String {
        match self {
            FormError::AdvisorNotSelected => "يرجى اختيار المرشد الأكاديمي".to_string(),
            FormError::UnknownAdvisor(id) => format!("المرشد الأكاديمي غير موجود: {}", id),
            FormError::MissingStudentField(field) => {
                format!("يرجى تعبئة حقل: {}", field.label())
            }
            FormError::InvalidEmail(_) => "يرجى إدخال بريد جامعي صحيح".to_string(),
            FormError::IncompleteCourse {
                direction,
                position,
                field,
            } => format!(
                "يرجى تعبئة «{}» للمادة رقم {} في قائمة {}",
                field.placeholder(),
                position,
                direction.title()
            ),
            FormError::SubmissionInFlight => "جاري الإرسال، يرجى الانتظار...".to_string(),
        }
    }
}

/// Failures reported by a submission transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("server error: {0}")]
    Server(u16),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("submission failed: {0}")]
    Failed(String),

    #[error("submission cancelled")]
    Cancelled,
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Timeout => "انتهت مهلة الاتصال بالخادم. يرجى المحاولة مرة أخرى.".to_string(),
            SubmitError::Transport(_) => {
                "تعذر الاتصال بالخادم. تحقق من الاتصال بالشبكة ثم حاول مرة أخرى.".to_string()
            }
            SubmitError::Rejected { message, .. } => format!("رفض الخادم الطلب: {}", message),
            SubmitError::Server(status) => {
                format!("حدث خطأ في الخادم ({}). يرجى المحاولة مرة أخرى لاحقاً.", status)
            }
            SubmitError::InvalidResponse(_) => {
                "تعذر قراءة رد الخادم. يرجى المحاولة مرة أخرى.".to_string()
            }
            SubmitError::Failed(_) => "لم نتمكن من إرسال طلبك. يرجى المحاولة مرة أخرى.".to_string(),
            SubmitError::Cancelled => "تم إلغاء الإرسال.".to_string(),
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SubmitError::Timeout
        } else if e.is_decode() {
            SubmitError::InvalidResponse(e.to_string())
        } else {
            error!("submission transport error: {}", e);
            SubmitError::Transport(e.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("failed to read advisor catalog {path}: {source}")]
    CatalogIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse advisor catalog: {0}")]
    CatalogJson(#[from] serde_json::Error),

    #[error("invalid advisor catalog: {0}")]
    Catalog(String),

    #[error("failed to build http client: {0}")]
    HttpClient(String),
}
