/// Where the form stands with respect to its submission.
///
/// `InFlight` is the busy state: the submit control is disabled and shows the
/// busy indicator. The message variants are what the header displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded(String),
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Returns the success message, or an empty string if there is none.
    pub fn success_message(&self) -> &str {
        match self {
            Self::Succeeded(message) => message,
            _ => "",
        }
    }

    /// Returns the error message, or an empty string if there is none.
    pub fn error_message(&self) -> &str {
        match self {
            Self::Failed(message) => message,
            _ => "",
        }
    }

    pub fn has_message(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_slots_are_exclusive() {
        let succeeded = SubmissionStatus::Succeeded("yay".into());
        assert_eq!(succeeded.success_message(), "yay");
        assert_eq!(succeeded.error_message(), "");
        assert!(!succeeded.is_busy());

        let failed = SubmissionStatus::Failed("nay".into());
        assert_eq!(failed.success_message(), "");
        assert_eq!(failed.error_message(), "nay");

        let busy = SubmissionStatus::InFlight;
        assert!(busy.is_busy());
        assert!(!busy.has_message());
        assert_eq!(busy.success_message(), "");
        assert_eq!(busy.error_message(), "");
    }
}
