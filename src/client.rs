//! # Transport to the management server
//!
//! Everything in this crate talks to CloudStack through the [`ApiClient`]
//! trait, a single `invoke` call taking a command name and its parameters.
//! [`HttpClient`] is the implementation used against a real management
//! server; tests use the in-memory client from [`crate::testing`].
//!
//! ## Async commands
//!
//! Long running commands (deploy, delete, snapshot...) are answered with a
//! `jobid`. When a [`Request`] is flagged as async, the client polls
//! `queryAsyncJobResult` until the job completes and returns its `jobresult`,
//! so callers never see the job itself.
//!
//! ## Signing
//!
//! When the connection has an API key and a secret key, every request carries
//! `apiKey` and a `signature`: the HMAC-SHA1 of the lower-cased, sorted and
//! URL-encoded query string. Without keys, requests go unsigned to the
//! integration port.
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use hyper::{client::HttpConnector, header, Body, Client, Method};
use serde_json::Value;
use sha1::Sha1;
use tokio::time::{sleep, timeout, Instant};
use tracing::{debug, error, info, instrument, trace};
use url::form_urlencoded;
use uuid::Uuid;

use crate::{
    api::Params,
    config::{ConnectionConfig, Timeouts},
};
use marvin_models::models::{ApiErrorResponse, AsyncJob};

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Invalid client configuration: {0}")]
    Configuration(String),
    #[error("Could not send {command}, reason: {reason}")]
    Request { command: String, reason: String },
    #[error("Could not serialize command, reason: {0}")]
    Serialize(String),
    #[error("Could not decode {command} response, reason: {reason}")]
    Deserialize { command: String, reason: String },
    /// CloudStack rejected the command, either synchronously or through a
    /// failed async job
    #[error("{command} failed with error {code}: {text}")]
    Api {
        command: String,
        code: i32,
        text: String,
    },
    #[error("{command} failed with HTTP status {status}: {body}")]
    Http {
        command: String,
        status: u16,
        body: String,
    },
    #[error("Async job {job_id} of {command} did not complete in time")]
    JobTimeout { command: String, job_id: String },
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> ClientError {
        ClientError::Serialize(e.to_string())
    }
}

/// One API call, as handed to an [`ApiClient`]
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub command: String,
    pub params: Params,
    /// The command is answered with a job id that must be polled
    pub is_async: bool,
    /// `GET` unless the payload is too large for a query string (user data)
    pub method: Method,
}

impl Request {
    pub fn new(command: &str, params: Params) -> Request {
        Request {
            command: command.to_string(),
            params,
            is_async: false,
            method: Method::GET,
        }
    }

    pub fn with_async(mut self, is_async: bool) -> Request {
        self.is_async = is_async;
        self
    }

    pub fn with_method(mut self, method: Method) -> Request {
        self.method = method;
        self
    }
}

/// Collaborator performing API calls on behalf of commands and resources
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Identifier of the client, unique per session. It is embedded in the
    /// names of the accounts created through it.
    fn id(&self) -> &str;

    /// Run one command and return its payload: the content of the
    /// `<command>response` object for synchronous commands, the `jobresult`
    /// of the completed job for async ones.
    async fn invoke(&self, request: Request) -> Result<Value, ClientError>;

    /// Timeouts resources use when waiting for a state change
    fn timeouts(&self) -> Timeouts {
        Timeouts::default()
    }
}

/// [`ApiClient`] talking HTTP to a management server
#[derive(Debug)]
pub struct HttpClient {
    config: ConnectionConfig,
    client: Client<HttpConnector>,
    id: String,
}

impl HttpClient {
    /// Create a client for the given management server, only plain HTTP is
    /// supported.
    pub fn new(config: ConnectionConfig) -> Result<HttpClient, ClientError> {
        if config.use_https {
            return Err(ClientError::Configuration(format!(
                "HTTPS is not supported, cannot connect to {}",
                config.base_url()
            )));
        }
        Ok(HttpClient {
            config,
            client: Client::new(),
            id: Uuid::new_v4().to_string(),
        })
    }

    /// Mutate the client to have a new id
    pub fn with_id(self, id: String) -> HttpClient {
        HttpClient { id, ..self }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Encoded query string of a command, signed when the connection has keys
    fn query(&self, command: &str, params: &Params) -> Result<String, ClientError> {
        let mut pairs: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        pairs.push(("command".to_string(), command.to_string()));
        pairs.push(("response".to_string(), "json".to_string()));

        if let Some((api_key, secret_key)) = self.config.credentials() {
            pairs.push(("apiKey".to_string(), api_key.to_string()));
            let signature = sign(&pairs, secret_key)?;
            pairs.push(("signature".to_string(), signature));
        }

        Ok(form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish())
    }

    /// Send a command and return the content of its `<command>response` object
    #[instrument(skip_all, fields(id = %self.id, command = %command))]
    async fn send(
        &self,
        command: &str,
        params: &Params,
        method: &Method,
    ) -> Result<Value, ClientError> {
        let query = self.query(command, params)?;
        let request_error = |reason: String| ClientError::Request {
            command: command.to_string(),
            reason,
        };

        let builder = hyper::Request::builder()
            .method(method.clone())
            .header(header::ACCEPT, "application/json");
        let request = match *method {
            Method::POST => builder
                .uri(self.config.base_url())
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(query)),
            _ => builder
                .uri(format!("{}?{}", self.config.base_url(), query))
                .body(Body::empty()),
        }
        .map_err(|e| request_error(e.to_string()))?;

        debug!("Send {} request", method);
        trace!("Request uri: {}", request.uri());
        let exchange = async {
            let response = self.client.request(request).await?;
            let status = response.status();
            let body = hyper::body::to_bytes(response.into_body()).await?;
            Ok::<_, hyper::Error>((status, body))
        };
        let (status, body) = timeout(self.config.timeouts.request, exchange)
            .await
            .map_err(|_| request_error("request timed out".to_string()))?
            .map_err(|e| request_error(e.to_string()))?;
        trace!("Response [{}]: {}", status, String::from_utf8_lossy(&body));

        let payload = serde_json::from_slice::<Value>(&body)
            .ok()
            .and_then(|body| response_payload(command, body));

        if let Some(err) = payload.as_ref().and_then(api_error) {
            error!("{} failed with error {}: {}", command, err.errorcode, err.errortext);
            return Err(ClientError::Api {
                command: command.to_string(),
                code: err.errorcode,
                text: err.errortext,
            });
        }

        if !status.is_success() {
            error!("Request failed with status {}", status);
            return Err(ClientError::Http {
                command: command.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        payload.ok_or_else(|| ClientError::Deserialize {
            command: command.to_string(),
            reason: format!("no response object in {}", String::from_utf8_lossy(&body)),
        })
    }

    /// Poll `queryAsyncJobResult` until the job completes
    #[instrument(skip(self), fields(id = %self.id))]
    async fn wait_for_job(&self, command: &str, job_id: &str) -> Result<Value, ClientError> {
        let deadline = Instant::now() + self.config.timeouts.async_job;
        let mut params = Params::new();
        params.insert("jobid", job_id);

        loop {
            let payload = self
                .send("queryAsyncJobResult", &params, &Method::GET)
                .await?;
            let job: AsyncJob =
                serde_json::from_value(payload).map_err(|e| ClientError::Deserialize {
                    command: "queryAsyncJobResult".to_string(),
                    reason: e.to_string(),
                })?;

            match job.jobstatus {
                AsyncJob::SUCCEEDED => {
                    debug!("Job {} succeeded", job_id);
                    return Ok(job.jobresult.unwrap_or(Value::Null));
                }
                AsyncJob::FAILED => {
                    let err = job
                        .jobresult
                        .and_then(|result| serde_json::from_value::<ApiErrorResponse>(result).ok())
                        .unwrap_or_default();
                    let code = match err.errorcode {
                        0 => job.jobresultcode.unwrap_or_default(),
                        code => code,
                    };
                    error!("Job {} failed with error {}: {}", job_id, code, err.errortext);
                    return Err(ClientError::Api {
                        command: command.to_string(),
                        code,
                        text: err.errortext,
                    });
                }
                _ => trace!("Job {} is still pending", job_id),
            }

            if Instant::now() >= deadline {
                error!("Job {} did not complete in time", job_id);
                return Err(ClientError::JobTimeout {
                    command: command.to_string(),
                    job_id: job_id.to_string(),
                });
            }
            sleep(self.config.timeouts.async_poll_interval).await;
        }
    }
}

#[async_trait]
impl ApiClient for HttpClient {
    fn id(&self) -> &str {
        &self.id
    }

    fn timeouts(&self) -> Timeouts {
        self.config.timeouts.clone()
    }

    #[instrument(skip_all, fields(id = %self.id, command = %request.command))]
    async fn invoke(&self, request: Request) -> Result<Value, ClientError> {
        info!("Invoke {}", request.command);
        let payload = self
            .send(&request.command, &request.params, &request.method)
            .await?;
        if !request.is_async {
            return Ok(payload);
        }

        let job_id = payload
            .get("jobid")
            .and_then(Value::as_str)
            .ok_or_else(|| ClientError::Deserialize {
                command: request.command.clone(),
                reason: "async command answered without a jobid".to_string(),
            })?
            .to_string();
        debug!("{} answered with job {}", request.command, job_id);
        self.wait_for_job(&request.command, &job_id).await
    }
}

/// Signature of a query: pairs sorted by lower-cased key, values URL-encoded
/// with `%20` for spaces, the whole string lower-cased, then HMAC-SHA1 and
/// base64.
fn sign(pairs: &[(String, String)], secret_key: &str) -> Result<String, ClientError> {
    let mut sorted: Vec<(String, &str)> = pairs
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.as_str()))
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let canonical = sorted
        .iter()
        .map(|(k, v)| {
            let value: String = form_urlencoded::byte_serialize(v.as_bytes()).collect();
            format!("{}={}", k, value.replace('+', "%20"))
        })
        .collect::<Vec<_>>()
        .join("&")
        .to_lowercase();

    let mut mac = Hmac::<Sha1>::new_from_slice(secret_key.as_bytes())
        .map_err(|e| ClientError::Configuration(format!("invalid secret key: {}", e)))?;
    mac.update(canonical.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// CloudStack wraps every answer in a single `<command>response` object
/// (`errorresponse` for some failures).
fn response_payload(command: &str, body: Value) -> Option<Value> {
    let mut body = match body {
        Value::Object(map) => map,
        _ => return None,
    };
    let key = format!("{}response", command.to_lowercase());
    if let Some(payload) = body.remove(&key) {
        return Some(payload);
    }
    let key = body.keys().find(|k| k.ends_with("response"))?.clone();
    body.remove(&key)
}

fn api_error(payload: &Value) -> Option<ApiErrorResponse> {
    payload.get("errorcode")?;
    serde_json::from_value(payload.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn signed_client() -> HttpClient {
        let config = ConnectionConfig::new("localhost".to_string(), 8080).with_keys(
            "miVr6X7u6bN_sdahOBpjNejPgEsT35eXq-jB8CG20YI3yaxXcgpyuaIRmFI_EJTVwZ0nUkkJbPmY3y2bciKwFQ"
                .to_string(),
            "Lxx1DM40AjcXU_Y1lYE8N7pJoVHX1m_SjHHxSR8Kv5QPmdT2vDvq9GOOfGGMu7XnfszljwX5fL_pSkZwl9i2Gw"
                .to_string(),
        );
        HttpClient::new(config).unwrap()
    }

    #[test]
    fn signature_matches_reference() {
        let mut params = Params::new();
        params.insert("serviceofferingid", "1");
        params.insert("templateid", "2");
        params.insert("zoneid", "4");
        params.insert("displayname", "my vm");

        let query = signed_client()
            .query("deployVirtualMachine", &params)
            .unwrap();
        assert!(query.contains("signature=ITino0DMjnyNE6DdwYhYj%2BwMlBk%3D"));
        assert!(query.contains("command=deployVirtualMachine"));
        assert!(query.contains("response=json"));
        assert!(query.contains("displayname=my+vm"));
    }

    #[test]
    fn unsigned_without_keys() {
        let client = HttpClient::new(ConnectionConfig::default()).unwrap();
        let query = client.query("listZones", &Params::new()).unwrap();
        assert_eq!(query, "command=listZones&response=json");
    }

    #[test]
    fn https_is_rejected() {
        let mut config = ConnectionConfig::default();
        config.use_https = true;
        assert!(matches!(
            HttpClient::new(config),
            Err(ClientError::Configuration(_))
        ));
    }

    #[test]
    fn payload_is_unwrapped() {
        let body = json!({"listzonesresponse": {"count": 1, "zone": [{"id": "z1"}]}});
        assert_eq!(
            response_payload("listZones", body),
            Some(json!({"count": 1, "zone": [{"id": "z1"}]}))
        );

        let body = json!({"errorresponse": {"errorcode": 401, "errortext": "unable to verify user credentials"}});
        let payload = response_payload("listZones", body).unwrap();
        let err = api_error(&payload).unwrap();
        assert_eq!(err.errorcode, 401);

        assert_eq!(response_payload("listZones", json!([])), None);
        assert!(api_error(&json!({"count": 0})).is_none());
    }
}
