use super::de::{lenient_bool, lenient_string};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: String,
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub cpunumber: Option<i64>,
    pub cpuspeed: Option<i64>,
    /// MiB
    pub memory: Option<i64>,
    pub storagetype: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub offerha: Option<bool>,
    pub hosttags: Option<String>,
    pub tags: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub issystem: Option<bool>,
    pub domainid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskOffering {
    pub id: String,
    pub name: Option<String>,
    pub displaytext: Option<String>,
    /// GiB
    pub disksize: Option<i64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub iscustomized: Option<bool>,
    pub storagetype: Option<String>,
    pub tags: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkOffering {
    pub id: String,
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub guestiptype: Option<String>,
    pub traffictype: Option<String>,
    pub state: Option<String>,
    pub availability: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub isdefault: Option<bool>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub networkrate: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VpcOffering {
    pub id: String,
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub isdefault: Option<bool>,
}
