//! Remote serverless execution path
//!
//! Delegates a submission to an external invocation collaborator over HTTP:
//! the payload carries `{source_code, stdin, timeout}` and the collaborator
//! enforces the deadline. Transport faults and collaborator-reported errors
//! (an `errorMessage` field in the reply) both resolve to Internal Error
//! results; nothing here retries.

use serde::{Deserialize, Serialize};
use tokio::time::Duration;

use crate::config::RemoteConfig;
use crate::models::{ExecStatus, ExecutionResult};

/// Extra transport allowance on top of the collaborator-enforced deadline
const TRANSPORT_MARGIN_SECS: u64 = 10;

#[derive(Debug, Serialize)]
struct RemotePayload<'a> {
    source_code: &'a str,
    stdin: &'a str,
    timeout: u64,
}

#[derive(Debug, Deserialize)]
struct RemoteReply {
    #[serde(rename = "errorMessage")]
    error_message: Option<String>,
    #[serde(default)]
    stdout: Option<String>,
    #[serde(default)]
    stderr: Option<String>,
    #[serde(default)]
    status: Option<ExecStatus>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    memory: Option<i64>,
}

/// Client for the remote execution collaborator
pub(crate) struct RemoteExecutor {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl RemoteExecutor {
    pub(crate) fn new(config: RemoteConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Delegate one execution. Never returns an error.
    pub(crate) async fn execute(
        &self,
        source: &str,
        stdin: &str,
        timeout_secs: u64,
    ) -> ExecutionResult {
        let Some(endpoint) = &self.config.endpoint else {
            return ExecutionResult::internal_error("Remote executor not configured");
        };

        let payload = RemotePayload {
            source_code: source,
            stdin,
            timeout: timeout_secs,
        };

        let mut request = self
            .client
            .post(endpoint)
            .json(&payload)
            .timeout(Duration::from_secs(timeout_secs + TRANSPORT_MARGIN_SECS));
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let reply = match request.send().await {
            Ok(response) => match response.json::<RemoteReply>().await {
                Ok(reply) => reply,
                Err(e) => {
                    tracing::error!("remote executor returned an unreadable reply: {e}");
                    return ExecutionResult::internal_error(format!(
                        "Remote executor error: {e}"
                    ));
                }
            },
            Err(e) => {
                tracing::error!("remote executor transport failure: {e}");
                return ExecutionResult::internal_error(format!("Remote executor error: {e}"));
            }
        };

        if let Some(message) = reply.error_message {
            return ExecutionResult::internal_error(message);
        }

        ExecutionResult {
            stdout: Some(reply.stdout.unwrap_or_default()),
            stderr: reply.stderr.filter(|s| !s.is_empty()),
            status: reply.status.unwrap_or_else(ExecStatus::accepted),
            time: reply.time.or_else(|| Some("0.0".to_string())),
            memory: reply.memory.or(Some(0)),
            compile_output: None,
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::status_ids;

    #[tokio::test]
    async fn test_unconfigured_endpoint_is_internal_error() {
        let executor = RemoteExecutor::new(RemoteConfig::default());
        let result = executor.execute("print(1)", "", 5).await;

        assert_eq!(result.status.id, status_ids::INTERNAL_ERROR);
        assert!(result.message.is_some());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_internal_error() {
        let executor = RemoteExecutor::new(RemoteConfig {
            endpoint: Some("http://127.0.0.1:1/execute".to_string()),
            api_key: None,
        });
        let result = executor.execute("print(1)", "", 1).await;

        assert_eq!(result.status.id, status_ids::INTERNAL_ERROR);
    }

    #[test]
    fn test_reply_parses_collaborator_error_shape() {
        let reply: RemoteReply =
            serde_json::from_str(r#"{"errorMessage": "task timed out"}"#).unwrap();
        assert_eq!(reply.error_message.as_deref(), Some("task timed out"));
    }

    #[test]
    fn test_reply_parses_success_shape() {
        let reply: RemoteReply = serde_json::from_str(
            r#"{"stdout": "hi\n", "stderr": null, "status": {"id": 3, "description": "Accepted"}, "time": "0.021", "memory": 3120}"#,
        )
        .unwrap();
        assert_eq!(reply.stdout.as_deref(), Some("hi\n"));
        assert_eq!(reply.status.unwrap().id, 3);
    }
}
