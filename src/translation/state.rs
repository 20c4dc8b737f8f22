use std::fmt;

use crate::onshape::TranslationStatus;

/// The states of a server-side translation job as seen by the poller.
///
/// Initial state is ACTIVE; DONE and FAILED are terminal. Any state string
/// the server returns that we do not recognize is treated as UNKNOWN and
/// polled again, consuming one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationState {
    Active,
    Done,
    Failed,
    Unknown,
}

impl TranslationState {
    /// Classify the vendor's `requestState` string.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "ACTIVE" => TranslationState::Active,
            "DONE" => TranslationState::Done,
            "FAILED" => TranslationState::Failed,
            _ => TranslationState::Unknown,
        }
    }
}

impl fmt::Display for TranslationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationState::Active => write!(f, "ACTIVE"),
            TranslationState::Done => write!(f, "DONE"),
            TranslationState::Failed => write!(f, "FAILED"),
            TranslationState::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The decision taken after one poll of the job status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStep {
    /// DONE: stop polling, the result is ready.
    Finished,
    /// FAILED: stop polling and abort with the server's reason.
    Fatal(String),
    /// ACTIVE or unrecognized: keep polling, one attempt consumed.
    Continue(TranslationState),
}

/// Evaluate one status poll. Terminal states never regress: a DONE or FAILED
/// response always ends the loop.
pub fn evaluate(status: &TranslationStatus) -> PollStep {
    match TranslationState::classify(&status.request_state) {
        TranslationState::Done => PollStep::Finished,
        TranslationState::Failed => PollStep::Fatal(
            status
                .failure_reason
                .clone()
                .unwrap_or_else(|| "Unknown error".to_string()),
        ),
        state => PollStep::Continue(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(state: &str) -> TranslationStatus {
        TranslationStatus {
            request_state: state.into(),
            failure_reason: None,
            result_external_data_ids: vec![],
        }
    }

    #[test]
    fn classify_known_states() {
        assert_eq!(TranslationState::classify("ACTIVE"), TranslationState::Active);
        assert_eq!(TranslationState::classify("DONE"), TranslationState::Done);
        assert_eq!(TranslationState::classify("FAILED"), TranslationState::Failed);
    }

    #[test]
    fn classify_unrecognized_state_is_unknown() {
        assert_eq!(
            TranslationState::classify("QUEUED"),
            TranslationState::Unknown
        );
        assert_eq!(TranslationState::classify(""), TranslationState::Unknown);
    }

    #[test]
    fn done_finishes() {
        assert_eq!(evaluate(&status("DONE")), PollStep::Finished);
    }

    #[test]
    fn failed_is_fatal_with_server_reason() {
        let mut s = status("FAILED");
        s.failure_reason = Some("bad geometry".into());
        assert_eq!(evaluate(&s), PollStep::Fatal("bad geometry".into()));
    }

    #[test]
    fn failed_without_reason_uses_placeholder() {
        assert_eq!(
            evaluate(&status("FAILED")),
            PollStep::Fatal("Unknown error".into())
        );
    }

    #[test]
    fn active_and_unknown_continue() {
        assert_eq!(
            evaluate(&status("ACTIVE")),
            PollStep::Continue(TranslationState::Active)
        );
        assert_eq!(
            evaluate(&status("SOMETHING_NEW")),
            PollStep::Continue(TranslationState::Unknown)
        );
    }

    #[test]
    fn state_display() {
        assert_eq!(TranslationState::Active.to_string(), "ACTIVE");
        assert_eq!(TranslationState::Done.to_string(), "DONE");
        assert_eq!(TranslationState::Failed.to_string(), "FAILED");
        assert_eq!(TranslationState::Unknown.to_string(), "UNKNOWN");
    }
}
