use std::fmt::Write;

use crate::editor::view::render_course_list;
use crate::models::{Direction, StudentField, SubmissionStatus};
use crate::services::FormController;

pub const FORM_TITLE: &str = "نموذج الحذف والإضافة";
pub const FORM_INTRO: &str = "يرجى تعبئة الحقول التالية لتقديم طلبك إلى مرشدك الأكاديمي.";
pub const SUCCESS_HEADING: &str = "تم إرسال الطلب بنجاح!";
pub const SUCCESS_DETAIL: &str = "سيقوم مرشدك بمراجعة الطلب والتواصل معك قريباً.";
pub const ERROR_HEADING: &str = "حدث خطأ!";
pub const ERROR_DETAIL: &str = "لم نتمكن من إرسال طلبك. يرجى المحاولة مرة أخرى.";
pub const SUBMIT_LABEL: &str = "إرسال الطلب";
pub const SUBMITTING_LABEL: &str = "جاري الإرسال...";

/// Success or failure notice for the current status, if one should be shown.
pub fn render_feedback(controller: &FormController) -> Option<String> {
    match controller.status() {
        SubmissionStatus::Success => {
            let mut out = format!("✔ {}\n  {}", SUCCESS_HEADING, SUCCESS_DETAIL);
            if let Some(ticket) = controller.last_receipt().and_then(|r| r.ticket_id.as_deref()) {
                let _ = write!(out, "\n  رقم الطلب: {}", ticket);
            }
            Some(out)
        }
        SubmissionStatus::Error => {
            let mut out = format!("✖ {}\n  {}", ERROR_HEADING, ERROR_DETAIL);
            let detail = controller.last_error().map(|e| e.user_message());
            if let Some(detail) = detail.filter(|d| d != ERROR_DETAIL) {
                let _ = write!(out, "\n  {}", detail);
            }
            Some(out)
        }
        SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
    }
}

pub fn render_form(controller: &FormController) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n{}\n", FORM_TITLE, FORM_INTRO);

    if let Some(feedback) = render_feedback(controller) {
        let _ = writeln!(out, "{}\n", feedback);
    }

    let _ = writeln!(out, "── معلومات الطالب ──");
    let student = controller.student();
    for field in StudentField::ALL {
        let value = student.field(field);
        let shown = if value.is_empty() {
            format!("<{}>", field.placeholder())
        } else {
            value.to_string()
        };
        let _ = writeln!(out, "  {}: {}", field.label(), shown);
    }

    let _ = writeln!(out, "\n── المرشد الأكاديمي ──");
    for advisor in controller.catalog().iter() {
        let mark = if controller.selected_advisor() == Some(advisor.id.as_str()) {
            "(•)"
        } else {
            "( )"
        };
        let _ = writeln!(out, "  {} {}  [{}]", mark, advisor.name, advisor.id);
    }

    for direction in Direction::ALL {
        let view = render_course_list(direction, controller.courses(direction));
        let _ = writeln!(out, "\n{}", view);
    }

    let _ = writeln!(out, "\n── السبب / ملاحظات ──");
    if controller.reason().is_empty() {
        let _ = writeln!(out, "  <اذكر سبب طلبك للحذف والإضافة...>");
    } else {
        let _ = writeln!(out, "  {}", controller.reason());
    }

    let button = if controller.can_submit() {
        SUBMIT_LABEL
    } else {
        SUBMITTING_LABEL
    };
    let _ = write!(out, "\n[{}]", button);
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::editor::SystemClock;
    use crate::models::{AdvisorCatalog, CourseField};
    use crate::submission::NoopSubmissionClient;

    fn controller() -> FormController {
        FormController::new(
            AdvisorCatalog::builtin().expect("builtin catalog"),
            Arc::new(NoopSubmissionClient),
            Arc::new(SystemClock),
            Duration::from_secs(1),
        )
    }

    #[test]
    fn test_blank_form_shows_placeholders() {
        let form = render_form(&controller());
        assert!(form.starts_with(FORM_TITLE));
        assert!(form.contains("<ادخل اسمك الكامل>"));
        assert!(form.contains("( ) المرشد الأكاديمي الأول"));
        assert!(form.ends_with(&format!("[{}]", SUBMIT_LABEL)));
        assert!(render_feedback(&controller()).is_none());
    }

    #[test]
    fn test_filled_form_shows_values() {
        let mut form = controller();
        form.set_field(StudentField::Email, "sara@kau.edu.sa");
        form.select_advisor("advisor-2").expect("known advisor");
        let id = form.add_course_row(Direction::Drop);
        form.update_course_field(Direction::Drop, id, CourseField::Code, "CPIT 250");

        let rendered = render_form(&form);
        assert!(rendered.contains("البريد الجامعي: sara@kau.edu.sa"));
        assert!(rendered.contains("(•) المرشد الأكاديمي الثاني"));
        assert!(rendered.contains("1. [رمز المادة: CPIT 250]"));
    }

    struct TimingOut;

    #[async_trait::async_trait]
    impl crate::submission::SubmissionClient for TimingOut {
        async fn submit(
            &self,
            _payload: &crate::models::RequestPayload,
        ) -> Result<crate::models::Receipt, crate::error::SubmitError> {
            Err(crate::error::SubmitError::Timeout)
        }
    }

    #[tokio::test]
    async fn test_failure_notice_leads_with_generic_message() {
        let mut form = FormController::new(
            AdvisorCatalog::builtin().expect("builtin catalog"),
            Arc::new(TimingOut),
            Arc::new(SystemClock),
            Duration::from_secs(1),
        );
        form.set_field(StudentField::Name, "سارة أحمد");
        form.set_field(StudentField::Id, "2041234");
        form.set_field(StudentField::Email, "sara@kau.edu.sa");
        form.set_field(StudentField::Phone, "0551234567");
        form.select_advisor("advisor-1").expect("known advisor");
        form.submit().expect("valid form");
        assert_eq!(form.resolve().await, SubmissionStatus::Error);

        let notice = render_feedback(&form).expect("error notice");
        assert_eq!(
            notice,
            format!(
                "✖ {}\n  {}\n  {}",
                ERROR_HEADING,
                ERROR_DETAIL,
                crate::error::SubmitError::Timeout.user_message()
            )
        );
    }
}
