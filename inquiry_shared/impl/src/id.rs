use inquiry_models::submission::SubmissionId;
use inquiry_shared_contracts::id::IdService;
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    #[instrument(skip(self), ret(level = "trace"))]
    fn generate_submission_id(&self) -> SubmissionId {
        Uuid::new_v4().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate() {
        // Arrange
        let sut = IdServiceImpl;

        // Act
        let id1 = sut.generate_submission_id();
        let id2 = sut.generate_submission_id();

        // Assert
        assert_ne!(id1, id2);
        assert_eq!(id1.get_version_num(), 4);
    }
}
