use std::time::Duration;

use tokio::time::sleep;

use crate::error::ExportError;
use crate::onshape::{OnshapeClient, TranslationStatus};

use super::state::{evaluate, PollStep};

/// Fixed-interval polling policy. The interval is injectable so tests run
/// with `Duration::ZERO`.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: 60,
        }
    }
}

/// Poll a translation job until it reaches a terminal state or the attempt
/// ceiling is hit.
///
/// Every non-terminal poll (ACTIVE or unrecognized) consumes one attempt, so
/// a job that turns DONE on the final allowed poll still succeeds, while
/// `max_attempts` non-terminal polls end in `TranslationTimeout`.
pub async fn await_translation(
    client: &OnshapeClient,
    translation_id: &str,
    policy: &PollPolicy,
) -> Result<TranslationStatus, ExportError> {
    for attempt in 1..=policy.max_attempts {
        let status = client.translation_status(translation_id).await?;
        match evaluate(&status) {
            PollStep::Finished => return Ok(status),
            PollStep::Fatal(reason) => {
                return Err(ExportError::TranslationFailed { reason });
            }
            PollStep::Continue(_) => {
                if attempt < policy.max_attempts {
                    sleep(policy.interval).await;
                }
            }
        }
    }
    Err(ExportError::TranslationTimeout {
        attempts: policy.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fast_policy(max_attempts: u32) -> PollPolicy {
        PollPolicy {
            interval: Duration::ZERO,
            max_attempts,
        }
    }

    fn client(server: &MockServer) -> OnshapeClient {
        OnshapeClient::with_base_url("ak".into(), "sk".into(), server.uri())
    }

    async fn mount_active(server: &MockServer, times: u64) {
        Mock::given(method("GET"))
            .and(path("/api/v12/translations/tr-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"requestState": "ACTIVE"})),
            )
            .up_to_n_times(times)
            .expect(times)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn done_on_final_attempt_succeeds() {
        let server = MockServer::start().await;
        mount_active(&server, 59).await;
        Mock::given(method("GET"))
            .and(path("/api/v12/translations/tr-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestState": "DONE",
                "resultExternalDataIds": ["ext-1"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let status = await_translation(&client(&server), "tr-1", &fast_policy(60))
            .await
            .unwrap();
        assert_eq!(status.result_external_data_ids, vec!["ext-1"]);
    }

    #[tokio::test]
    async fn all_active_polls_time_out() {
        let server = MockServer::start().await;
        mount_active(&server, 60).await;

        let err = await_translation(&client(&server), "tr-1", &fast_policy(60))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ExportError::TranslationTimeout { attempts: 60 }
        ));
    }

    #[tokio::test]
    async fn failed_aborts_immediately_with_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v12/translations/tr-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestState": "FAILED",
                "failureReason": "Export of this format is not supported"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = await_translation(&client(&server), "tr-1", &fast_policy(60))
            .await
            .unwrap_err();
        match err {
            ExportError::TranslationFailed { reason } => {
                assert_eq!(reason, "Export of this format is not supported");
            }
            other => panic!("expected TranslationFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unrecognized_states_consume_attempts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v12/translations/tr-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"requestState": "QUEUED"})),
            )
            .expect(3)
            .mount(&server)
            .await;

        let err = await_translation(&client(&server), "tr-1", &fast_policy(3))
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::TranslationTimeout { attempts: 3 }));
    }
}
