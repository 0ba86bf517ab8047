use std::{
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
};

use inquiry_core_form_contracts::{
    FormChangeError, FormService, FormSnapshot, FormSubmitError, SubmitOutcome, SUCCESS_MESSAGE,
};
use inquiry_core_validation_contracts::ValidationService;
use inquiry_extern_contracts::inquiry::{InquiryApiService, InquiryApiSubmitError};
use inquiry_models::{
    form::{ErrorState, FieldId, FormValues, UnknownFieldId},
    status::SubmissionStatus,
    submission::{Submission, SubmissionId},
};
use inquiry_shared_contracts::id::IdService;
use tracing::{debug, error, info, warn};


/// Owns the state of one contact form.
///
/// Clones share the same state. Once every clone has been dropped, the
/// outcome of a submission that is still in flight is discarded.
#[derive(Debug, Clone)]
pub struct FormServiceImpl<Validation, InquiryApi, Id> {
    validation: Validation,
    inquiry_api: Arc<InquiryApi>,
    id: Id,
    state: Arc<Mutex<FormState>>,
}

#[derive(Debug, Default)]
struct FormState {
    values: FormValues,
    errors: ErrorState,
    status: SubmissionStatus,
}

impl<Validation, InquiryApi, Id> FormServiceImpl<Validation, InquiryApi, Id>
where
    Validation: ValidationService,
{
    pub fn new(validation: Validation, inquiry_api: InquiryApi, id: Id) -> Self {
        let errors = validation.validate(&FormValues::default());
        Self {
            validation,
            inquiry_api: Arc::new(inquiry_api),
            id,
            state: Arc::new(Mutex::new(FormState {
                errors,
                ..Default::default()
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        lock(&self.state)
    }
}

impl<Validation, InquiryApi, Id> FormService for FormServiceImpl<Validation, InquiryApi, Id>
where
    Validation: ValidationService,
    InquiryApi: InquiryApiService,
    Id: IdService,
{
    fn on_field_change(&self, field: &str, value: String) -> Result<(), FormChangeError> {
        let field = field
            .parse::<FieldId>()
            .map_err(|UnknownFieldId(field)| FormChangeError::UnknownField(field))?;

        let mut state = self.state();
        if state.status.has_message() {
            state.status = SubmissionStatus::Idle;
        }
        state.values.set(field, value);
        state.errors = self.validation.validate(&state.values);

        Ok(())
    }

    fn on_submit(
        &self,
    ) -> Result<impl Future<Output = SubmitOutcome> + Send + 'static, FormSubmitError> {
        let mut state = self.state();

        if state.status.is_busy() {
            debug!("ignoring submit while a submission is in flight");
            return Err(FormSubmitError::Busy);
        }

        if state.errors.has_errors() {
            debug!(errors = ?state.errors, "ignoring submit of invalid form");
            return Err(FormSubmitError::Invalid);
        }

        let submission = Submission::new(self.id.generate_submission_id(), state.values.clone());
        state.status = SubmissionStatus::InFlight;
        drop(state);

        let pending = PendingSubmission {
            id: submission.id,
            state: Arc::downgrade(&self.state),
            reset_errors: self.validation.validate(&FormValues::default()),
        };
        let inquiry_api = Arc::clone(&self.inquiry_api);

        info!(id = %submission.id, "submitting inquiry");
        Ok(async move {
            let result = inquiry_api.submit(submission).await;
            pending.complete(result)
        })
    }

    fn snapshot(&self) -> FormSnapshot {
        let state = self.state();
        FormSnapshot {
            values: state.values.clone(),
            errors: state.errors.clone(),
            status: state.status.clone(),
        }
    }
}

/// Applies the outcome of the network call to the form, if it still exists.
///
/// Dropping this without calling [`PendingSubmission::complete`] (i.e. the
/// submission future was cancelled) clears the busy flag.
struct PendingSubmission {
    id: SubmissionId,
    state: Weak<Mutex<FormState>>,
    reset_errors: ErrorState,
}

impl PendingSubmission {
    fn complete(
        mut self,
        result: Result<serde_json::Value, InquiryApiSubmitError>,
    ) -> SubmitOutcome {
        let Some(state) = self.state.upgrade() else {
            warn!(id = %self.id, ?result, "form was dropped before the submission completed");
            return SubmitOutcome::Discarded;
        };
        let mut state = lock(&state);

        match result {
            Ok(response) => {
                info!(id = %self.id, "inquiry has been received");
                debug!(%response);
                state.values = FormValues::default();
                state.errors = std::mem::take(&mut self.reset_errors);
                state.status = SubmissionStatus::Succeeded(SUCCESS_MESSAGE.into());
                SubmitOutcome::Succeeded { response }
            }
            Err(err) => {
                error!(id = %self.id, "failed to submit inquiry: {err:#}");
                let message = err.to_string();
                state.status = SubmissionStatus::Failed(message.clone());
                SubmitOutcome::Failed { message }
            }
        }
    }
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            let mut state = lock(&state);
            if state.status.is_busy() {
                debug!(id = %self.id, "submission was cancelled");
                state.status = SubmissionStatus::Idle;
            }
        }
    }
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
