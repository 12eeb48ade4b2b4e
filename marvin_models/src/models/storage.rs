use super::de::{lenient_bool, lenient_string};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub id: String,
    pub name: Option<String>,
    pub zoneid: Option<String>,
    /// `ROOT` or `DATADISK`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// `Allocated`, `Ready`, `Uploaded`, `UploadOp`...
    pub state: Option<String>,
    /// Bytes
    pub size: Option<i64>,
    pub virtualmachineid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub diskofferingid: Option<String>,
    pub storage: Option<String>,
    pub storageid: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: String,
    pub name: Option<String>,
    pub volumeid: Option<String>,
    pub volumetype: Option<String>,
    /// `BackedUp`, `BackingUp`, `Creating`, `Error`...
    pub state: Option<String>,
    pub snapshottype: Option<String>,
    pub intervaltype: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub zoneid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotPolicy {
    pub id: String,
    pub volumeid: Option<String>,
    pub schedule: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub intervaltype: Option<String>,
    pub maxsnaps: Option<i32>,
    pub timezone: Option<String>,
}

/// Templates and ISOs share the same response object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: Option<String>,
    pub displaytext: Option<String>,
    /// Download progress, e.g. `Download Complete`, `35% Downloaded`,
    /// `Installing Template`, `Successfully Installed`
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub isready: Option<bool>,
    pub zoneid: Option<String>,
    pub ostypeid: Option<String>,
    pub templatetype: Option<String>,
    pub hypervisor: Option<String>,
    pub format: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub ispublic: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub isfeatured: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub isextractable: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub passwordenabled: Option<bool>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}

pub type Iso = Template;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsType {
    pub id: String,
    pub description: Option<String>,
    pub oscategoryid: Option<String>,
}

/// Result of `extractVolume`, `extractTemplate` and `extractIso`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub id: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub state: Option<String>,
    pub status: Option<String>,
    pub extractmode: Option<String>,
    pub zoneid: Option<String>,
}
