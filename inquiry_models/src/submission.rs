use serde::{Deserialize, Serialize};

use crate::{form::FormValues, macros::id};

id!(SubmissionId);

/// The JSON body that is posted to the inquiries endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Submission {
    pub fn new(id: SubmissionId, values: FormValues) -> Self {
        let FormValues {
            name,
            email,
            subject,
            message,
        } = values;
        Self {
            id,
            name,
            email,
            subject,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn serialize() {
        // Arrange
        let id = SubmissionId::from(Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef));
        let submission = Submission::new(
            id,
            FormValues {
                name: "Max Mustermann".into(),
                email: "max.mustermann@example.de".into(),
                subject: String::new(),
                message: "Hello World!".into(),
            },
        );

        // Act
        let result = serde_json::to_value(&submission).unwrap();

        // Assert
        assert_eq!(
            result,
            serde_json::json!({
                "id": "01234567-89ab-cdef-0123-456789abcdef",
                "name": "Max Mustermann",
                "email": "max.mustermann@example.de",
                "subject": "",
                "message": "Hello World!",
            })
        );
    }
}
