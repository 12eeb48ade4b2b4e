//! Volumes, snapshots, templates and ISOs
use std::collections::BTreeMap;

use marvin_models::models::{
    ExtractResponse, Iso, OsType, Snapshot, SnapshotPolicy, Success, Template, Volume,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::Command;
use crate::client::ClientError;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateVolume {
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub diskofferingid: Option<String>,
    /// Create the volume from this snapshot instead of a disk offering
    pub snapshotid: Option<String>,
    /// GB, for custom disk offerings
    pub size: Option<i64>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub virtualmachineid: Option<String>,
    pub miniops: Option<i64>,
    pub maxiops: Option<i64>,
}
command!(async CreateVolume, "createVolume", "volume" => Volume);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteVolume {
    pub id: String,
}
command!(sync DeleteVolume, "deleteVolume" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListVolumes {
    pub id: Option<String>,
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub podid: Option<String>,
    pub hostid: Option<String>,
    pub virtualmachineid: Option<String>,
    /// `ROOT` or `DATADISK`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListVolumes, "listVolumes", "volume" => Volume);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResizeVolume {
    pub id: String,
    pub diskofferingid: Option<String>,
    /// GB
    pub size: Option<i64>,
    pub shrinkok: Option<bool>,
}
command!(async ResizeVolume, "resizeVolume", "volume" => Volume);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UploadVolume {
    pub name: String,
    pub zoneid: String,
    pub format: String,
    pub url: String,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub checksum: Option<String>,
    pub imagestoreuuid: Option<String>,
}
command!(async UploadVolume, "uploadVolume", "volume" => Volume);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractVolume {
    pub id: String,
    pub zoneid: String,
    /// `HTTP_DOWNLOAD` or `FTP_UPLOAD`
    pub mode: String,
    pub url: Option<String>,
}
command!(async ExtractVolume, "extractVolume", "volume" => ExtractResponse);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MigrateVolume {
    pub volumeid: String,
    pub storageid: String,
    pub livemigrate: Option<bool>,
}
command!(async MigrateVolume, "migrateVolume", "volume" => Volume);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSnapshot {
    pub volumeid: String,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub policyid: Option<String>,
}
command!(async CreateSnapshot, "createSnapshot", "snapshot" => Snapshot);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteSnapshot {
    pub id: String,
}
command!(async DeleteSnapshot, "deleteSnapshot" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListSnapshots {
    pub id: Option<String>,
    pub name: Option<String>,
    pub volumeid: Option<String>,
    pub snapshottype: Option<String>,
    pub intervaltype: Option<String>,
    pub zoneid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListSnapshots, "listSnapshots", "snapshot" => Snapshot);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSnapshotPolicy {
    pub volumeid: String,
    /// `HOURLY`, `DAILY`, `WEEKLY` or `MONTHLY`
    pub intervaltype: String,
    pub maxsnaps: i32,
    pub schedule: String,
    pub timezone: String,
}
command!(sync CreateSnapshotPolicy, "createSnapshotPolicy", "snapshotpolicy" => SnapshotPolicy);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteSnapshotPolicies {
    pub id: Option<String>,
    pub ids: Vec<String>,
}
command!(sync DeleteSnapshotPolicies, "deleteSnapshotPolicies" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListSnapshotPolicies {
    pub id: Option<String>,
    pub volumeid: Option<String>,
    pub keyword: Option<String>,
}
command!(list ListSnapshotPolicies, "listSnapshotPolicies", "snapshotpolicy" => SnapshotPolicy);

/// Create a template from a volume or a snapshot
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTemplate {
    pub name: String,
    pub displaytext: String,
    pub ostypeid: String,
    pub volumeid: Option<String>,
    pub snapshotid: Option<String>,
    pub virtualmachineid: Option<String>,
    pub isfeatured: Option<bool>,
    pub ispublic: Option<bool>,
    pub isextractable: Option<bool>,
    pub passwordenabled: Option<bool>,
    pub bits: Option<i32>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}
command!(async CreateTemplate, "createTemplate", "template" => Template);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterTemplate {
    pub name: String,
    pub displaytext: String,
    /// `VHD`, `QCOW2`, `OVA`, `RAW`...
    pub format: String,
    pub hypervisor: String,
    pub ostypeid: String,
    pub url: String,
    pub zoneid: String,
    pub isfeatured: Option<bool>,
    pub ispublic: Option<bool>,
    pub isextractable: Option<bool>,
    pub passwordenabled: Option<bool>,
    pub requireshvm: Option<bool>,
    pub isdynamicallyscalable: Option<bool>,
    pub checksum: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub details: Option<BTreeMap<String, String>>,
}
command!(collection RegisterTemplate, "registerTemplate", "template" => Template);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractTemplate {
    pub id: String,
    pub mode: String,
    pub zoneid: Option<String>,
    pub url: Option<String>,
}
command!(async ExtractTemplate, "extractTemplate", "template" => ExtractResponse);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteTemplate {
    pub id: String,
    pub zoneid: Option<String>,
}
command!(async DeleteTemplate, "deleteTemplate" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTemplatePermissions {
    pub id: String,
    pub ispublic: Option<bool>,
    pub isfeatured: Option<bool>,
    pub isextractable: Option<bool>,
    pub accounts: Vec<String>,
    pub projectids: Vec<String>,
    /// `add`, `remove` or `reset`
    pub op: Option<String>,
}
command!(sync UpdateTemplatePermissions, "updateTemplatePermissions" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTemplate {
    pub id: String,
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub ostypeid: Option<String>,
    pub format: Option<String>,
    pub passwordenabled: Option<bool>,
    pub bootable: Option<bool>,
    pub isdynamicallyscalable: Option<bool>,
    pub sortkey: Option<i32>,
}
command!(sync UpdateTemplate, "updateTemplate", "template" => Template);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CopyTemplate {
    pub id: String,
    pub sourcezoneid: String,
    pub destzoneid: String,
}
command!(async CopyTemplate, "copyTemplate", "template" => Template);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListTemplates {
    /// `featured`, `self`, `selfexecutable`, `sharedexecutable`,
    /// `executable`, `community` or `all`
    pub templatefilter: String,
    pub id: Option<String>,
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub hypervisor: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListTemplates, "listTemplates", "template" => Template);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterIso {
    pub name: String,
    pub displaytext: String,
    pub url: String,
    pub zoneid: String,
    pub ostypeid: Option<String>,
    pub bootable: Option<bool>,
    pub isextractable: Option<bool>,
    pub isfeatured: Option<bool>,
    pub ispublic: Option<bool>,
    pub checksum: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}
command!(collection RegisterIso, "registerIso", "iso" => Iso);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteIso {
    pub id: String,
    pub zoneid: Option<String>,
}
command!(async DeleteIso, "deleteIso" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractIso {
    pub id: String,
    pub mode: String,
    pub zoneid: Option<String>,
    pub url: Option<String>,
}

impl Command for ExtractIso {
    const NAME: &'static str = "extractIso";
    const ASYNC: bool = true;
    type Response = ExtractResponse;

    fn decode(payload: Value) -> Result<ExtractResponse, ClientError> {
        decode_iso_or_template(Self::NAME, payload)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateIso {
    pub id: String,
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub ostypeid: Option<String>,
    pub bootable: Option<bool>,
    pub sortkey: Option<i32>,
}
command!(sync UpdateIso, "updateIso", "iso" => Iso);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CopyIso {
    pub id: String,
    pub sourcezoneid: String,
    pub destzoneid: String,
}

impl Command for CopyIso {
    const NAME: &'static str = "copyIso";
    const ASYNC: bool = true;
    type Response = Iso;

    fn decode(payload: Value) -> Result<Iso, ClientError> {
        decode_iso_or_template(Self::NAME, payload)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListIsos {
    pub id: Option<String>,
    pub name: Option<String>,
    pub zoneid: Option<String>,
    /// Same values as `templatefilter`
    pub isofilter: Option<String>,
    pub ispublic: Option<bool>,
    pub isready: Option<bool>,
    pub bootable: Option<bool>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListIsos, "listIsos", "iso" => Iso);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListOsTypes {
    pub id: Option<String>,
    pub description: Option<String>,
    pub oscategoryid: Option<String>,
    pub keyword: Option<String>,
}
command!(list ListOsTypes, "listOsTypes", "ostype" => OsType);

/// ISO commands share their implementation with templates, and depending on
/// the version the answer is keyed `iso` or `template`.
fn decode_iso_or_template<T: DeserializeOwned>(
    command: &str,
    payload: Value,
) -> Result<T, ClientError> {
    let value = match payload {
        Value::Object(mut fields) => fields
            .remove("iso")
            .or_else(|| fields.remove("template"))
            .unwrap_or(Value::Null),
        _ => Value::Null,
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
    fn copy_iso_accepts_both_keys() {
        let iso = CopyIso::decode(json!({"template": {"id": "i1", "status": "Successfully Installed"}}))
            .unwrap();
        assert_eq!(iso.id, "i1");
        let iso = CopyIso::decode(json!({"iso": {"id": "i2"}})).unwrap();
        assert_eq!(iso.id, "i2");
        assert!(CopyIso::decode(json!({})).is_err());
    }

    #[test]
    fn volume_type_filter() {
        let params = ListVolumes {
            virtualmachineid: Some("vm1".to_string()),
            kind: Some("ROOT".to_string()),
            ..Default::default()
        }
        .params()
        .unwrap();
        assert_eq!(params.get("type"), Some("ROOT"));
        assert_eq!(params.get("virtualmachineid"), Some("vm1"));
    }

    #[test]
    fn registered_template_list() {
        let templates = RegisterTemplate::decode(json!({
            "count": 1,
            "template": [{"id": "t1", "isready": false, "status": "Not Downloaded"}]
        }))
        .unwrap();
        assert_eq!(templates[0].isready, Some(false));
    }
}
