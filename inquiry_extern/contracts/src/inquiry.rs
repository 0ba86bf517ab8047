use std::future::Future;

use inquiry_models::submission::Submission;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait InquiryApiService: Send + Sync + 'static {
    /// Posts the submission to the inquiries endpoint and returns the parsed
    /// response body.
    fn submit(
        &self,
        submission: Submission,
    ) -> impl Future<Output = Result<serde_json::Value, InquiryApiSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum InquiryApiSubmitError {
    /// The endpoint answered with a non-success status code.
    #[error("We're sorry, but your submission was not successful.")]
    Rejected { status: u16 },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockInquiryApiService {
    pub fn with_submit(
        mut self,
        submission: Submission,
        result: Result<serde_json::Value, InquiryApiSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
