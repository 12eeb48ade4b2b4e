//! # Management server configuration
//!
//! Marvin is configured with the same JSON file the CloudStack integration
//! suite uses. Only the `mgtSvr` section is interpreted, the other sections
//! (`zones`, `dbSvr`, `logger`) are kept as raw JSON for callers that need
//! them.
//!
//! ```json
//! {
//!   "mgtSvr": [{
//!     "mgtSvrIp": "localhost",
//!     "port": 8096,
//!     "user": "root",
//!     "passwd": "password",
//!     "useHttps": "False"
//!   }]
//! }
//! ```
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use serde_with::{serde_as, DurationSeconds};
use tracing::debug;

/// Environment variable pointing to the marvin configuration file
pub const CONFIG_ENV: &str = "MARVIN_CONFIG";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Could not read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),
    #[error("Configuration does not declare any management server")]
    MissingManagementServer,
}

/// How long to wait for the management server and the resources it manages.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timeouts {
    /// Upper bound of a single HTTP exchange
    #[serde_as(as = "DurationSeconds<u64>")]
    pub request: Duration,
    /// Upper bound of an async job, from submission to completion
    #[serde_as(as = "DurationSeconds<u64>")]
    pub async_job: Duration,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub async_poll_interval: Duration,
    /// Delay between two checks of a resource state (VM, template, ...)
    #[serde_as(as = "DurationSeconds<u64>")]
    pub state_poll_interval: Duration,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub state: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Timeouts {
            request: Duration::from_secs(60),
            async_job: Duration::from_secs(3600),
            async_poll_interval: Duration::from_secs(5),
            state_poll_interval: Duration::from_secs(60),
            state: Duration::from_secs(600),
        }
    }
}

/// Connection settings of one management server (an entry of `mgtSvr`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    #[serde(rename = "mgtSvrIp")]
    pub host: String,
    pub port: u16,
    /// When both keys are set, requests are signed. Without them the
    /// unauthenticated integration port is expected.
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
    #[serde(rename = "securityKey")]
    pub secret_key: Option<String>,
    pub user: Option<String>,
    pub passwd: Option<String>,
    #[serde(rename = "useHttps", deserialize_with = "string_or_bool")]
    pub use_https: bool,
    pub path: String,
    pub timeouts: Timeouts,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        ConnectionConfig {
            host: "localhost".to_string(),
            port: 8096,
            api_key: None,
            secret_key: None,
            user: None,
            passwd: None,
            use_https: false,
            path: "/client/api".to_string(),
            timeouts: Timeouts::default(),
        }
    }
}

impl ConnectionConfig {
    pub fn new(host: String, port: u16) -> ConnectionConfig {
        ConnectionConfig {
            host,
            port,
            ..Default::default()
        }
    }

    pub fn with_keys(mut self, api_key: String, secret_key: String) -> ConnectionConfig {
        self.api_key = Some(api_key);
        self.secret_key = Some(secret_key);
        self
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> ConnectionConfig {
        self.timeouts = timeouts;
        self
    }

    /// Both keys are required to sign a request
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.api_key, &self.secret_key) {
            (Some(api_key), Some(secret_key)) => Some((api_key, secret_key)),
            _ => None,
        }
    }

    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", scheme, self.host, self.port, self.path)
    }
}

/// The marvin JSON configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarvinConfig {
    #[serde(rename = "mgtSvr", default)]
    pub management_servers: Vec<ConnectionConfig>,
    pub zones: Option<Value>,
    #[serde(rename = "dbSvr")]
    pub db_server: Option<Value>,
    pub logger: Option<Value>,
}

impl MarvinConfig {
    pub fn from_json(json: &str) -> Result<MarvinConfig, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<MarvinConfig, ConfigError> {
        let path = path.as_ref();
        debug!("Loading marvin configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        MarvinConfig::from_json(&content)
    }

    /// Load the file pointed to by [`CONFIG_ENV`]
    pub fn from_env() -> Result<MarvinConfig, ConfigError> {
        let path = env::var_os(CONFIG_ENV).ok_or(ConfigError::MissingEnv(CONFIG_ENV))?;
        MarvinConfig::from_file(PathBuf::from(path))
    }

    /// First management server of the file
    pub fn management_server(&self) -> Result<&ConnectionConfig, ConfigError> {
        self.management_servers
            .first()
            .ok_or(ConfigError::MissingManagementServer)
    }
}

/// Booleans of marvin configuration files usually show up
/// as `"True"`/`"False"` strings.
fn string_or_bool<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::Bool(b) => Ok(b),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "yes" => Ok(true),
            "false" | "no" | "" => Ok(false),
            _ => Err(de::Error::custom(format!("expected a boolean, got {:?}", s))),
        },
        Value::Null => Ok(false),
        other => Err(de::Error::custom(format!("expected a boolean, got {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "zones": [{"name": "Sandbox-simulator", "networktype": "Advanced"}],
        "dbSvr": {"dbSvr": "localhost", "port": 3306},
        "logger": {"LogFolderPath": "/tmp/"},
        "mgtSvr": [{
            "mgtSvrIp": "10.0.0.5",
            "port": 8080,
            "user": "root",
            "passwd": "password",
            "hypervisor": "simulator",
            "useHttps": "False",
            "certCAPath": "NA",
            "apiKey": "key",
            "securityKey": "secret"
        }]
    }"#;

    #[test]
    fn parse_marvin_file() {
        let config = MarvinConfig::from_json(SAMPLE).unwrap();
        let server = config.management_server().unwrap();
        assert_eq!(server.host, "10.0.0.5");
        assert_eq!(server.port, 8080);
        assert!(!server.use_https);
        assert_eq!(server.credentials(), Some(("key", "secret")));
        assert_eq!(server.path, "/client/api");
        assert_eq!(server.timeouts, Timeouts::default());
        assert_eq!(server.base_url(), "http://10.0.0.5:8080/client/api");
        assert!(config.zones.is_some());
    }

    #[test]
    fn defaults_target_integration_port() {
        let server: ConnectionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(server, ConnectionConfig::default());
        assert_eq!(server.base_url(), "http://localhost:8096/client/api");
        assert_eq!(server.credentials(), None);
    }

    #[test]
    fn https_flag_and_timeouts() {
        let server: ConnectionConfig = serde_json::from_str(
            r#"{"useHttps": true, "timeouts": {"asyncJob": 120, "statePollInterval": 1}}"#,
        )
        .unwrap();
        assert!(server.use_https);
        assert_eq!(server.timeouts.async_job, Duration::from_secs(120));
        assert_eq!(server.timeouts.state_poll_interval, Duration::from_secs(1));
        assert_eq!(server.timeouts.request, Duration::from_secs(60));

        let res: Result<ConnectionConfig, _> = serde_json::from_str(r#"{"useHttps": "perhaps"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn missing_management_server() {
        let config = MarvinConfig::from_json(r#"{"mgtSvr": []}"#).unwrap();
        assert!(matches!(
            config.management_server(),
            Err(ConfigError::MissingManagementServer)
        ));
    }

    #[test]
    #[serial]
    fn load_from_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        env::set_var(CONFIG_ENV, file.path());
        let config = MarvinConfig::from_env().unwrap();
        assert_eq!(config.management_server().unwrap().host, "10.0.0.5");

        env::remove_var(CONFIG_ENV);
        assert!(matches!(
            MarvinConfig::from_env(),
            Err(ConfigError::MissingEnv(CONFIG_ENV))
        ));
    }
}
