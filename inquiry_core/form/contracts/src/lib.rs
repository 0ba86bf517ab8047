use std::future::Future;

use inquiry_models::{
    form::{ErrorState, FieldId, FormValues},
    status::SubmissionStatus,
};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Your entry has been received.";

pub trait FormService: Send + Sync + 'static {
    /// Replaces the value of the field `field` and clears a displayed success
    /// or error message. The error state is recomputed before this returns.
    fn on_field_change(&self, field: &str, value: String) -> Result<(), FormChangeError>;

    /// Starts a submission of the current values.
    ///
    /// The form is busy as soon as this returns `Ok`. The returned future
    /// performs the network call and applies its outcome to the form; it
    /// must be awaited or spawned for the submission to make progress.
    fn on_submit(
        &self,
    ) -> Result<impl Future<Output = SubmitOutcome> + Send + 'static, FormSubmitError>;

    /// Returns a copy of the current form state for rendering.
    fn snapshot(&self) -> FormSnapshot;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub values: FormValues,
    pub errors: ErrorState,
    pub status: SubmissionStatus,
}

impl FormSnapshot {
    /// The inline message for `field`.
    pub fn field_error(&self, field: FieldId) -> Option<&'static str> {
        self.errors.first_error(field)
    }

    pub fn is_busy(&self) -> bool {
        self.status.is_busy()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Succeeded { response: serde_json::Value },
    Failed { message: String },
    /// The form was dropped while the request was in flight.
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormChangeError {
    #[error("Unknown field {0:?}.")]
    UnknownField(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormSubmitError {
    #[error("A submission is already in progress.")]
    Busy,
    #[error("The form contains invalid values.")]
    Invalid,
}
