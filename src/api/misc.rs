//! Projects, tags, configuration, simulator mocks and async jobs
use marvin_models::models::{
    AsyncJob, Capabilities, Configuration, Project, SimulatorMock, Success, Tag,
};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::{Command, KeyValue};
use crate::client::ClientError;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateProject {
    pub name: String,
    pub displaytext: String,
    pub account: Option<String>,
    pub domainid: Option<String>,
}
command!(async CreateProject, "createProject", "project" => Project);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteProject {
    pub id: String,
}
command!(async DeleteProject, "deleteProject" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProject {
    pub id: String,
    pub displaytext: Option<String>,
    /// New owner of the project
    pub account: Option<String>,
}
command!(async UpdateProject, "updateProject", "project" => Project);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActivateProject {
    pub id: String,
}
command!(async ActivateProject, "activateProject", "project" => Project);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuspendProject {
    pub id: String,
}
command!(async SuspendProject, "suspendProject", "project" => Project);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddAccountToProject {
    pub projectid: String,
    pub account: Option<String>,
    /// Invite by email instead of account name
    pub email: Option<String>,
}
command!(async AddAccountToProject, "addAccountToProject" => Success);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteAccountFromProject {
    pub projectid: String,
    pub account: String,
}
command!(async DeleteAccountFromProject, "deleteAccountFromProject" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListProjects {
    pub id: Option<String>,
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub state: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListProjects, "listProjects", "project" => Project);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListProjectAccounts {
    pub projectid: String,
    pub account: Option<String>,
    /// `Admin` or `Regular`
    pub role: Option<String>,
    pub keyword: Option<String>,
}
// Project memberships have no model of their own
command!(list ListProjectAccounts, "listProjectAccounts", "projectaccount" => Value);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTags {
    pub resourceids: Vec<String>,
    pub resourcetype: String,
    pub tags: Vec<KeyValue>,
}
command!(async CreateTags, "createTags" => Success);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteTags {
    pub resourceids: Vec<String>,
    pub resourcetype: String,
    pub tags: Vec<KeyValue>,
}
command!(async DeleteTags, "deleteTags" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListTags {
    pub key: Option<String>,
    pub value: Option<String>,
    pub resourceid: Option<String>,
    pub resourcetype: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListTags, "listTags", "tag" => Tag);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateConfiguration {
    pub name: String,
    pub value: Option<String>,
    pub zoneid: Option<String>,
    pub clusterid: Option<String>,
    pub storageid: Option<String>,
    pub accountid: Option<String>,
}
command!(sync UpdateConfiguration, "updateConfiguration", "configuration" => Configuration);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListConfigurations {
    pub name: Option<String>,
    pub category: Option<String>,
    pub zoneid: Option<String>,
    pub clusterid: Option<String>,
    pub storageid: Option<String>,
    pub accountid: Option<String>,
    pub keyword: Option<String>,
}
command!(list ListConfigurations, "listConfigurations", "configuration" => Configuration);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListCapabilities {}
command!(sync ListCapabilities, "listCapabilities", "capability" => Capabilities);

/// Installs a simulator mock. `value` is the canned answer, `result:fail`
/// makes the named command fail.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigureSimulator {
    /// Agent command to intercept, e.g. `CreateSnapshotCmd`
    pub name: String,
    pub value: String,
    pub zoneid: Option<String>,
    pub podid: Option<String>,
    pub clusterid: Option<String>,
    pub hostid: Option<String>,
    /// Number of times the mock applies, forever when unset
    pub count: Option<i32>,
    pub jsonresponse: Option<String>,
}

impl Command for ConfigureSimulator {
    const NAME: &'static str = "configureSimulator";
    type Response = SimulatorMock;

    fn decode(payload: Value) -> Result<SimulatorMock, ClientError> {
        decode_mock(Self::NAME, payload)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleanupSimulatorMock {
    pub id: String,
}
command!(sync CleanupSimulatorMock, "cleanupSimulatorMock" => Success);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuerySimulatorMock {
    pub id: String,
}

impl Command for QuerySimulatorMock {
    const NAME: &'static str = "querySimulatorMock";
    type Response = SimulatorMock;

    fn decode(payload: Value) -> Result<SimulatorMock, ClientError> {
        decode_mock(Self::NAME, payload)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryAsyncJobResult {
    pub jobid: String,
}
command!(sync QueryAsyncJobResult, "queryAsyncJobResult" => AsyncJob);

// The simulator answers either with the mock under `simulatormock` or with
// the mock fields at the top of the payload.
fn decode_mock(command: &str, payload: Value) -> Result<SimulatorMock, ClientError> {
    let value = match payload {
        Value::Object(mut fields) => match fields.remove("simulatormock") {
            Some(mock) => mock,
            None => Value::Object(fields),
        },
        other => other,
    };
    serde_json::from_value(value).map_err(|e| ClientError::Deserialize {
        command: command.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn tags_are_indexed() {
        let params = CreateTags {
            resourceids: vec!["vm1".to_string(), "vm2".to_string()],
            resourcetype: "UserVm".to_string(),
            tags: vec![KeyValue::new("env", "test")],
        }
        .params()
        .unwrap();
        assert_eq!(params.get("resourceids"), Some("vm1,vm2"));
        assert_eq!(params.get("tags[0].key"), Some("env"));
        assert_eq!(params.get("tags[0].value"), Some("test"));
    }

    #[test]
    fn mock_with_or_without_key() {
        let keyed =
            ConfigureSimulator::decode(json!({"simulatormock": {"id": "1", "name": "X"}})).unwrap();
        let flat = QuerySimulatorMock::decode(json!({"id": "1", "name": "X"})).unwrap();
        assert_eq!(keyed, flat);
        assert_eq!(keyed.id, "1");
    }

    #[test]
    fn capabilities_need_no_params() {
        assert!(ListCapabilities {}.params().unwrap().is_empty());
    }
}
