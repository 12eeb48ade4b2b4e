//! In-memory [`ApiClient`] for tests.
//!
//! Answers are registered per command name: queued answers are consumed in
//! order, then the fallback answer of the command (if any) is returned for
//! every further call. Every request is recorded so tests can assert on
//! what was sent.
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::client::{ApiClient, ClientError, Request};
use crate::config::Timeouts;

/// CloudStack's answer to an unknown command
pub const UNKNOWN_COMMAND: i32 = 432;

#[derive(Debug, Clone)]
enum Reply {
    Payload(Value),
    Error { code: i32, text: String },
}

impl Reply {
    fn into_result(self, command: &str) -> Result<Value, ClientError> {
        match self {
            Reply::Payload(payload) => Ok(payload),
            Reply::Error { code, text } => Err(ClientError::Api {
                command: command.to_string(),
                code,
                text,
            }),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    queued: HashMap<String, VecDeque<Reply>>,
    fallback: HashMap<String, Reply>,
    requests: Vec<Request>,
}

#[derive(Debug)]
pub struct FakeApiClient {
    id: String,
    timeouts: Timeouts,
    state: Mutex<State>,
}

impl Default for FakeApiClient {
    fn default() -> Self {
        FakeApiClient::new()
    }
}

impl FakeApiClient {
    /// A client whose resource waits poll every millisecond, ten times
    pub fn new() -> FakeApiClient {
        FakeApiClient {
            id: "fake-client".to_string(),
            timeouts: Timeouts {
                request: Duration::from_secs(1),
                async_job: Duration::from_secs(1),
                async_poll_interval: Duration::ZERO,
                state_poll_interval: Duration::from_millis(1),
                state: Duration::from_millis(10),
            },
            state: Mutex::new(State::default()),
        }
    }

    pub fn with_id(mut self, id: &str) -> FakeApiClient {
        self.id = id.to_string();
        self
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> FakeApiClient {
        self.timeouts = timeouts;
        self
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue the payload of the next call to `command`
    pub fn respond(&self, command: &str, payload: Value) -> &FakeApiClient {
        self.enqueue(command, Reply::Payload(payload))
    }

    /// Queue an API error for the next call to `command`
    pub fn fail(&self, command: &str, code: i32, text: &str) -> &FakeApiClient {
        self.enqueue(
            command,
            Reply::Error {
                code,
                text: text.to_string(),
            },
        )
    }

    /// Answer every call to `command` not covered by a queued answer
    pub fn respond_always(&self, command: &str, payload: Value) -> &FakeApiClient {
        self.state()
            .fallback
            .insert(command.to_string(), Reply::Payload(payload));
        self
    }

    fn enqueue(&self, command: &str, reply: Reply) -> &FakeApiClient {
        self.state()
            .queued
            .entry(command.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<Request> {
        self.state().requests.clone()
    }

    pub fn requests_for(&self, command: &str) -> Vec<Request> {
        self.state()
            .requests
            .iter()
            .filter(|request| request.command == command)
            .cloned()
            .collect()
    }

    /// Command names received so far, in order
    pub fn commands(&self) -> Vec<String> {
        self.state()
            .requests
            .iter()
            .map(|request| request.command.clone())
            .collect()
    }
}

#[async_trait]
impl ApiClient for FakeApiClient {
    fn id(&self) -> &str {
        &self.id
    }

    fn timeouts(&self) -> Timeouts {
        self.timeouts.clone()
    }

    async fn invoke(&self, request: Request) -> Result<Value, ClientError> {
        let mut guard = self.state();
        let state = &mut *guard;
        debug!("Fake {} {:?}", request.command, request.params);
        let command = request.command.clone();
        state.requests.push(request);

        let reply = state
            .queued
            .get_mut(&command)
            .and_then(VecDeque::pop_front)
            .or_else(|| state.fallback.get(&command).cloned())
            .unwrap_or_else(|| Reply::Error {
                code: UNKNOWN_COMMAND,
                text: format!(
                    "The given command {} does not exist or it is not available for user",
                    command
                ),
            });
        reply.into_result(&command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Params;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn queued_then_fallback() {
        let client = FakeApiClient::new();
        client
            .respond("listZones", json!({"zone": [{"id": "z1"}]}))
            .respond_always("listZones", json!({}));

        let first = client
            .invoke(Request::new("listZones", Params::new()))
            .await
            .unwrap();
        assert_eq!(first, json!({"zone": [{"id": "z1"}]}));

        for _ in 0..2 {
            let next = client
                .invoke(Request::new("listZones", Params::new()))
                .await
                .unwrap();
            assert_eq!(next, json!({}));
        }
        assert_eq!(client.requests_for("listZones").len(), 3);
    }

    #[tokio::test]
    async fn unknown_command() {
        let client = FakeApiClient::new();
        let err = client
            .invoke(Request::new("listPods", Params::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Api { code: UNKNOWN_COMMAND, .. }));
        assert_eq!(client.commands(), vec!["listPods".to_string()]);
    }

    #[tokio::test]
    async fn queued_failure() {
        let client = FakeApiClient::new();
        client.fail("createVolume", 530, "Failed to create volume");
        let err = client
            .invoke(Request::new("createVolume", Params::new()).with_async(true))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "createVolume failed with error 530: Failed to create volume"
        );
        assert!(client.requests()[0].is_async);
    }
}
