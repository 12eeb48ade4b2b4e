//! # Command objects
//!
//! Every CloudStack API call is represented by a struct whose fields are the
//! command parameters, named exactly as on the wire. The [`Command`] trait
//! ties the struct to its API name, tells whether it runs as an async job,
//! and how to decode its answer into a model of [`marvin_models`].
//!
//! ## Example
//!
//! ```no_run
//! # async fn run() -> Result<(), marvin::client::ClientError> {
//! use marvin::api::{execute, infra::ListZones};
//! use marvin::client::HttpClient;
//! use marvin::config::ConnectionConfig;
//!
//! let client = HttpClient::new(ConnectionConfig::default())?;
//! let zones = execute(
//!     &client,
//!     &ListZones {
//!         available: Some(true),
//!         ..Default::default()
//!     },
//! )
//! .await?;
//! println!("{} zones", zones.len());
//! # Ok(())
//! # }
//! ```
use std::collections::BTreeMap;

use hyper::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::client::{ApiClient, ClientError, Request};

/// Implements [`Command`] for a struct.
///
/// - `list`: the answer is a collection under `key`, the command follows the
///   list rules
/// - `sync`/`async`: the answer is the object under `key`, or the whole
///   payload when no key is given
/// - `collection`: like `list` without the list rules, for the few commands
///   answering with a list of created objects
macro_rules! command {
    (list $ty:ident, $name:literal, $key:literal => $resp:ty) => {
        impl $crate::api::Command for $ty {
            const NAME: &'static str = $name;
            const LIST: bool = true;
            const COLLECTION: bool = true;
            const RESPONSE_KEY: Option<&'static str> = Some($key);
            type Response = Vec<$resp>;
        }
    };
    (collection $ty:ident, $name:literal, $key:literal => $resp:ty) => {
        impl $crate::api::Command for $ty {
            const NAME: &'static str = $name;
            const COLLECTION: bool = true;
            const RESPONSE_KEY: Option<&'static str> = Some($key);
            type Response = Vec<$resp>;
        }
    };
    (sync $ty:ident, $name:literal, $key:literal => $resp:ty) => {
        impl $crate::api::Command for $ty {
            const NAME: &'static str = $name;
            const RESPONSE_KEY: Option<&'static str> = Some($key);
            type Response = $resp;
        }
    };
    (sync $ty:ident, $name:literal => $resp:ty) => {
        impl $crate::api::Command for $ty {
            const NAME: &'static str = $name;
            type Response = $resp;
        }
    };
    (async $ty:ident, $name:literal, $key:literal => $resp:ty) => {
        impl $crate::api::Command for $ty {
            const NAME: &'static str = $name;
            const ASYNC: bool = true;
            const RESPONSE_KEY: Option<&'static str> = Some($key);
            type Response = $resp;
        }
    };
    (async $ty:ident, $name:literal => $resp:ty) => {
        impl $crate::api::Command for $ty {
            const NAME: &'static str = $name;
            const ASYNC: bool = true;
            type Response = $resp;
        }
    };
}

pub mod account;
pub mod compute;
pub mod infra;
pub mod misc;
pub mod network;
pub mod offering;
pub mod storage;

/// Entry of a `key`/`value` map parameter (`tags[0].key=...`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: &str, value: &str) -> KeyValue {
        KeyValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Outbound parameters of a command, ordered by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Params {
        Params(BTreeMap::new())
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flatten a serializable command into parameters.
    ///
    /// - `null` fields are skipped
    /// - booleans, numbers and strings are written as is
    /// - arrays of scalars are joined with commas
    /// - arrays of objects become `name[i].field`
    /// - an object becomes `name[0].field`, the way CloudStack expects maps
    /// - empty arrays are skipped
    ///
    /// Anything nested deeper cannot be expressed as a query parameter.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Params, ClientError> {
        let fields = match serde_json::to_value(value)? {
            Value::Object(fields) => fields,
            Value::Null => return Ok(Params::new()),
            other => {
                return Err(ClientError::Serialize(format!(
                    "a command must serialize to an object, got {}",
                    other
                )))
            }
        };

        let mut params = Params::new();
        for (name, value) in fields {
            match value {
                Value::Null => {}
                Value::Array(items) if items.is_empty() => {}
                Value::Array(items) if items.iter().all(Value::is_object) => {
                    for (index, item) in items.into_iter().enumerate() {
                        params.insert_map(&name, index, item)?;
                    }
                }
                Value::Array(items) => {
                    let joined = items
                        .iter()
                        .map(|item| scalar(&name, item))
                        .collect::<Result<Vec<_>, _>>()?
                        .join(",");
                    params.insert(name, joined);
                }
                Value::Object(_) => params.insert_map(&name, 0, value)?,
                scalar_value => {
                    let value = scalar(&name, &scalar_value)?;
                    params.insert(name, value);
                }
            }
        }
        Ok(params)
    }

    fn insert_map(&mut self, name: &str, index: usize, map: Value) -> Result<(), ClientError> {
        if let Value::Object(fields) = map {
            for (field, value) in fields {
                if value.is_null() {
                    continue;
                }
                let key = format!("{}[{}].{}", name, index, field);
                let value = scalar(&key, &value)?;
                self.insert(key, value);
            }
        }
        Ok(())
    }
}

fn scalar(name: &str, value: &Value) -> Result<String, ClientError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(ClientError::Serialize(format!(
            "parameter {} is nested too deeply: {}",
            name, value
        ))),
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Params {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// A typed CloudStack API command
pub trait Command: Serialize + Send + Sync {
    /// API name, as sent in the `command` parameter
    const NAME: &'static str;
    /// Answered with a job id to poll
    const ASYNC: bool = false;
    /// List commands get `listall=true` when they filter on both an account
    /// and a domain, otherwise CloudStack only looks at the caller's own
    /// resources.
    const LIST: bool = false;
    /// The answer is a list which CloudStack omits entirely when empty
    const COLLECTION: bool = false;
    /// Key of the answer inside the payload, the whole payload when `None`
    const RESPONSE_KEY: Option<&'static str> = None;

    type Response: DeserializeOwned;

    fn params(&self) -> Result<Params, ClientError> {
        let mut params = Params::from_serialize(self)?;
        if Self::LIST && params.contains_key("account") && params.contains_key("domainid") {
            params.insert("listall", "true");
        }
        Ok(params)
    }

    fn decode(payload: Value) -> Result<Self::Response, ClientError> {
        let value = match (Self::RESPONSE_KEY, payload) {
            (None, payload) => payload,
            (Some(key), Value::Object(mut fields)) if fields.contains_key(key) => {
                fields.remove(key).unwrap_or(Value::Null)
            }
            (Some(_), _) if Self::COLLECTION => Value::Array(Vec::new()),
            (Some(_), _) => Value::Null,
        };
        serde_json::from_value(value).map_err(|e| ClientError::Deserialize {
            command: Self::NAME.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Run a command with a `GET` request and decode its answer
pub async fn execute<C: Command>(
    client: &dyn ApiClient,
    command: &C,
) -> Result<C::Response, ClientError> {
    execute_with(client, command, Method::GET).await
}

pub async fn execute_with<C: Command>(
    client: &dyn ApiClient,
    command: &C,
    method: Method,
) -> Result<C::Response, ClientError> {
    let params = command.params()?;
    trace!("{} params: {:?}", C::NAME, params);
    let request = Request::new(C::NAME, params)
        .with_async(C::ASYNC)
        .with_method(method);
    let payload = client.invoke(request).await?;
    C::decode(payload)
}

/// A command without a typed struct, answered with the raw payload
#[derive(Debug, Clone, PartialEq)]
pub struct RawCommand {
    pub name: String,
    pub params: Params,
    pub is_async: bool,
}

impl RawCommand {
    pub fn new(name: &str) -> RawCommand {
        RawCommand {
            name: name.to_string(),
            params: Params::new(),
            is_async: false,
        }
    }

    pub fn with_param<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> RawCommand {
        self.params.insert(key, value);
        self
    }

    pub fn as_async(mut self) -> RawCommand {
        self.is_async = true;
        self
    }

    pub async fn execute(&self, client: &dyn ApiClient) -> Result<Value, ClientError> {
        let request = Request::new(&self.name, self.params.clone()).with_async(self.is_async);
        client.invoke(request).await
    }
}
