use serde_json::Value;

use super::de::{lenient_bool, lenient_string};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub domainid: Option<String>,
    pub domain: Option<String>,
    pub account: Option<String>,
    /// `Active`, `Suspended`, `Disabled`
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: Option<String>,
    pub resourceid: Option<String>,
    pub resourcetype: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
}

/// A global (or scoped) configuration setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    pub cloudstackversion: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub securitygroupsenabled: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub userpublictemplateenabled: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub kvmsnapshotenabled: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub allowusercreateprojects: Option<bool>,
    pub customdiskofferingmaxsize: Option<i64>,
    pub customdiskofferingminsize: Option<i64>,
}

/// A simulator mock forcing a command to fail or return canned data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulatorMock {
    pub id: String,
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub podid: Option<String>,
    pub clusterid: Option<String>,
    pub hostid: Option<String>,
    pub count: Option<i32>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub jsonresponse: Option<bool>,
}

/// Answer of `queryAsyncJobResult`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AsyncJob {
    pub jobid: String,
    /// 0 - pending, 1 - succeeded, 2 - failed
    #[serde(default)]
    pub jobstatus: i32,
    pub jobresultcode: Option<i32>,
    pub jobresulttype: Option<String>,
    pub jobinstancetype: Option<String>,
    pub jobinstanceid: Option<String>,
    pub jobresult: Option<Value>,
    pub cmd: Option<String>,
}

impl AsyncJob {
    pub const PENDING: i32 = 0;
    pub const SUCCEEDED: i32 = 1;
    pub const FAILED: i32 = 2;
}

/// Error payload, found either at the top of a `<command>response` object or
/// inside the `jobresult` of a failed async job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub errorcode: i32,
    #[serde(default)]
    pub errortext: String,
    pub cserrorcode: Option<i32>,
    #[serde(rename = "uuidList")]
    pub uuid_list: Option<Vec<Value>>,
}

/// Plain `{"success": true}` answer of delete/disable style commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Success {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub success: Option<bool>,
    #[serde(default)]
    pub displaytext: Option<String>,
}

impl Success {
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn failed_job_carries_an_error() {
        let job: AsyncJob = serde_json::from_str(
            r#"{
                "jobid": "j1",
                "jobstatus": 2,
                "jobresultcode": 530,
                "jobresult": {"errorcode": 530, "errortext": "Failed to create snapshot"}
            }"#,
        )
        .unwrap();
        assert_eq!(job.jobstatus, AsyncJob::FAILED);
        let err: ApiErrorResponse = serde_json::from_value(job.jobresult.unwrap()).unwrap();
        assert_eq!(err.errorcode, 530);
        assert_eq!(err.errortext, "Failed to create snapshot");
    }

    #[test]
    fn success_as_string() {
        let ok: Success = serde_json::from_str(r#"{"success": "true"}"#).unwrap();
        assert!(ok.is_success());
        let missing: Success = serde_json::from_str("{}").unwrap();
        assert!(!missing.is_success());
    }
}
