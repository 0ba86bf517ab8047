use inquiry_models::form::{ErrorState, FormValues};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ValidationService: Send + Sync + 'static {
    /// Evaluates every rule of every field against `values`.
    ///
    /// Each field with declared rules maps to the messages of its failing
    /// rules, in declaration order.
    fn validate(&self, values: &FormValues) -> ErrorState;
}

#[cfg(feature = "mock")]
impl MockValidationService {
    pub fn with_validate(mut self, values: FormValues, result: ErrorState) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(values))
            .return_once(|_| result);
        self
    }
}
