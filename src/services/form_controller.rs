use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::editor::view::ListAction;
use crate::editor::{Clock, CourseList};
use crate::error::{FormError, SubmitError};
use crate::models::{
    AdvisorCatalog, CourseEntry, CourseField, CourseId, Direction, Receipt, RequestPayload,
    StudentField, StudentInfo, SubmissionStatus,
};
use crate::services::validation;
use crate::submission::SubmissionClient;

type SubmissionTask = JoinHandle<Result<Receipt, SubmitError>>;

/// Single source of truth for the add/drop form.
///
/// All edits are synchronous. `submit` validates, snapshots the form into a
/// [`RequestPayload`] and hands it to the transport on a spawned task; the
/// form stays editable while that task runs, but a second submit is refused
/// until [`FormController::resolve`] has applied the outcome. Dropping the
/// controller aborts a request that is still in flight.
pub struct FormController {
    catalog: AdvisorCatalog,
    client: Arc<dyn SubmissionClient>,
    clock: Arc<dyn Clock>,
    timeout: Duration,
    student: StudentInfo,
    selected_advisor: Option<String>,
    courses_to_add: CourseList,
    courses_to_drop: CourseList,
    reason: String,
    status: SubmissionStatus,
    last_error: Option<SubmitError>,
    last_receipt: Option<Receipt>,
    in_flight: Option<SubmissionTask>,
    /// Latest attempt that was not acknowledged; its key is reused for an unchanged retry.
    unacknowledged: Option<RequestPayload>,
}

impl FormController {
    pub fn new(
        catalog: AdvisorCatalog,
        client: Arc<dyn SubmissionClient>,
        clock: Arc<dyn Clock>,
        timeout: Duration,
    ) -> Self {
        Self {
            catalog,
            client,
            clock,
            timeout,
            student: StudentInfo::default(),
            selected_advisor: None,
            courses_to_add: CourseList::new(),
            courses_to_drop: CourseList::new(),
            reason: String::new(),
            status: SubmissionStatus::Idle,
            last_error: None,
            last_receipt: None,
            in_flight: None,
            unacknowledged: None,
        }
    }

    pub fn set_field(&mut self, field: StudentField, value: impl Into<String>) {
        self.student.set_field(field, value.into());
    }

    pub fn set_reason(&mut self, value: impl Into<String>) {
        self.reason = value.into();
    }

    pub fn select_advisor(&mut self, advisor_id: &str) -> Result<(), FormError> {
        if !self.catalog.contains(advisor_id) {
            return Err(FormError::UnknownAdvisor(advisor_id.to_string()));
        }
        self.selected_advisor = Some(advisor_id.to_string());
        Ok(())
    }

    pub fn add_course_row(&mut self, direction: Direction) -> CourseId {
        let now = self.clock.now_millis();
        let id = self.list_mut(direction).push_blank(now);
        debug!("added {} row {}", direction.as_str(), id);
        id
    }

    pub fn remove_course_row(&mut self, direction: Direction, id: CourseId) -> bool {
        let removed = self.list_mut(direction).remove(id);
        debug!("remove {} row {}: {}", direction.as_str(), id, removed);
        removed
    }

    pub fn update_course_field(
        &mut self,
        direction: Direction,
        id: CourseId,
        field: CourseField,
        value: impl Into<String>,
    ) -> bool {
        self.list_mut(direction).update(id, field, value.into())
    }

    /// Applies an interaction coming back from a rendered course list.
    /// Returns the id of the row that was created or touched, if any.
    pub fn apply_list_action(&mut self, direction: Direction, action: ListAction) -> Option<CourseId> {
        match action {
            ListAction::Add => Some(self.add_course_row(direction)),
            ListAction::Remove(id) => self.remove_course_row(direction, id).then_some(id),
            ListAction::Change { id, field, value } => {
                self.update_course_field(direction, id, field, value).then_some(id)
            }
        }
    }

    /// Starts a submission. Rejections leave the form and the status untouched.
    pub fn submit(&mut self) -> Result<RequestPayload, FormError> {
        if self.in_flight.is_some() {
            warn!("submit ignored: a request is already in flight");
            return Err(FormError::SubmissionInFlight);
        }

        if let Err(e) = validation::validate_required(
            &self.student,
            self.courses_to_add.entries(),
            self.courses_to_drop.entries(),
        ) {
            warn!("submit rejected: {}", e);
            return Err(e);
        }

        let Some(advisor_id) = self.selected_advisor.clone() else {
            warn!("submit rejected: no advisor selected");
            return Err(FormError::AdvisorNotSelected);
        };

        let payload = self.build_payload(advisor_id);

        info!(
            "submitting request {} ({} to add, {} to drop)",
            payload.request_id,
            payload.courses_to_add.len(),
            payload.courses_to_drop.len()
        );

        let client = Arc::clone(&self.client);
        let timeout = self.timeout;
        let task_payload = payload.clone();
        self.in_flight = Some(tokio::spawn(async move {
            match tokio::time::timeout(timeout, client.submit(&task_payload)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(SubmitError::Timeout),
            }
        }));

        self.status = SubmissionStatus::Submitting;
        self.last_error = None;
        self.unacknowledged = Some(payload.clone());
        Ok(payload)
    }

    /// Snapshots the form. An unchanged retry keeps the previous attempt's key
    /// and timestamp so the server sees the same request again.
    fn build_payload(&self, advisor_id: String) -> RequestPayload {
        let mut payload = RequestPayload {
            request_id: Uuid::new_v4(),
            student: self.student.clone(),
            advisor_id,
            courses_to_add: self.courses_to_add.entries().to_vec(),
            courses_to_drop: self.courses_to_drop.entries().to_vec(),
            reason: self.reason.clone(),
            submitted_at: chrono::Utc::now().to_rfc3339(),
        };

        if let Some(previous) = &self.unacknowledged {
            let retry = RequestPayload {
                request_id: previous.request_id,
                submitted_at: previous.submitted_at.clone(),
                ..payload.clone()
            };
            if retry == *previous {
                debug!("retrying request {} with unchanged data", previous.request_id);
                payload = retry;
            }
        }
        payload
    }

    /// Waits for the in-flight submission and applies its outcome.
    ///
    /// Cancel-safe: if this future is dropped before completion the request
    /// keeps running and a later call picks it up.
    pub async fn resolve(&mut self) -> SubmissionStatus {
        let Some(task) = self.in_flight.as_mut() else {
            return self.status;
        };

        let joined = task.await;
        self.in_flight = None;

        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => Err(SubmitError::Cancelled),
            Err(e) => Err(SubmitError::Failed(e.to_string())),
        };
        self.finish_submission(outcome);
        self.status
    }

    /// Aborts the in-flight submission. The form keeps everything entered.
    ///
    /// A request whose outcome is already in is not thrown away: the outcome
    /// is applied as [`FormController::resolve`] would and `false` is returned.
    pub async fn cancel_submission(&mut self) -> bool {
        let Some(task) = self.in_flight.as_ref() else {
            return false;
        };

        if task.is_finished() {
            debug!("cancel ignored: the submission already completed");
            self.resolve().await;
            return false;
        }

        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
        self.status = SubmissionStatus::Idle;
        info!("submission cancelled");
        true
    }

    fn finish_submission(&mut self, outcome: Result<Receipt, SubmitError>) {
        match outcome {
            Ok(receipt) => {
                info!(
                    "submission accepted (ticket: {})",
                    receipt.ticket_id.as_deref().unwrap_or("none")
                );
                self.reset();
                self.status = SubmissionStatus::Success;
                self.last_receipt = Some(receipt);
            }
            Err(e) => {
                warn!("submission failed: {}", e);
                self.status = SubmissionStatus::Error;
                self.last_error = Some(e);
            }
        }
    }

    /// Clears every field and both course lists.
    pub fn reset(&mut self) {
        self.student = StudentInfo::default();
        self.selected_advisor = None;
        self.courses_to_add.clear();
        self.courses_to_drop.clear();
        self.reason.clear();
        self.unacknowledged = None;
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.in_flight.is_none()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn student(&self) -> &StudentInfo {
        &self.student
    }

    pub fn selected_advisor(&self) -> Option<&str> {
        self.selected_advisor.as_deref()
    }

    pub fn courses(&self, direction: Direction) -> &[CourseEntry] {
        self.list(direction).entries()
    }

    pub fn course_id_at(&self, direction: Direction, ordinal: usize) -> Option<CourseId> {
        self.list(direction).id_at(ordinal)
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    pub fn last_receipt(&self) -> Option<&Receipt> {
        self.last_receipt.as_ref()
    }

    pub fn catalog(&self) -> &AdvisorCatalog {
        &self.catalog
    }

    fn list(&self, direction: Direction) -> &CourseList {
        match direction {
            Direction::Add => &self.courses_to_add,
            Direction::Drop => &self.courses_to_drop,
        }
    }

    fn list_mut(&mut self, direction: Direction) -> &mut CourseList {
        match direction {
            Direction::Add => &mut self.courses_to_add,
            Direction::Drop => &mut self.courses_to_drop,
        }
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}
