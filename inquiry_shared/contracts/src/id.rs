use inquiry_models::submission::SubmissionId;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait IdService: Send + Sync + 'static {
    /// Generates a new unique submission id.
    fn generate_submission_id(&self) -> SubmissionId;
}

#[cfg(feature = "mock")]
impl MockIdService {
    pub fn with_generate_submission_id(mut self, id: SubmissionId) -> Self {
        self.expect_generate_submission_id()
            .once()
            .return_once(move || id);
        self
    }
}
