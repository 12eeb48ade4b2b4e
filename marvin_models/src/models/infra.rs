use super::de::{lenient_bool, lenient_string, null_to_default};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// `Basic` or `Advanced`
    pub networktype: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub securitygroupsenabled: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub localstorageenabled: Option<bool>,
    pub allocationstate: Option<String>,
    pub dns1: Option<String>,
    pub dns2: Option<String>,
    pub internaldns1: Option<String>,
    pub internaldns2: Option<String>,
    pub domainid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pod {
    pub id: String,
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub gateway: Option<String>,
    pub netmask: Option<String>,
    pub startip: Option<String>,
    pub endip: Option<String>,
    pub allocationstate: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: String,
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub podid: Option<String>,
    pub hypervisortype: Option<String>,
    pub clustertype: Option<String>,
    pub allocationstate: Option<String>,
    pub managedstate: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub id: String,
    pub name: Option<String>,
    /// `Up`, `Down`, `Connecting`, `Alert`...
    pub state: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub zoneid: Option<String>,
    pub podid: Option<String>,
    pub clusterid: Option<String>,
    pub hypervisor: Option<String>,
    pub ipaddress: Option<String>,
    pub resourcestate: Option<String>,
    pub hosttags: Option<String>,
}

/// Primary storage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoragePool {
    pub id: String,
    pub name: Option<String>,
    pub state: Option<String>,
    pub zoneid: Option<String>,
    pub podid: Option<String>,
    pub clusterid: Option<String>,
    pub scope: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub path: Option<String>,
    pub tags: Option<String>,
    pub hypervisor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hypervisor {
    pub name: String,
}

/// Underlying network of a zone carrying guest, public, management or
/// storage traffic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalNetwork {
    pub id: String,
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub domainid: Option<String>,
    /// `Enabled` or `Disabled`
    pub state: Option<String>,
    pub vlan: Option<String>,
    pub broadcastdomainrange: Option<String>,
    pub isolationmethods: Option<String>,
    pub networkspeed: Option<String>,
    pub tags: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficType {
    pub id: String,
    pub traffictype: Option<String>,
    pub physicalnetworkid: Option<String>,
    pub kvmnetworklabel: Option<String>,
    pub xennetworklabel: Option<String>,
    pub vmwarenetworklabel: Option<String>,
}

/// Guest VLAN range set aside for an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestVlanRange {
    pub id: String,
    pub guestvlanrange: Option<String>,
    pub physicalnetworkid: Option<String>,
    pub zoneid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkServiceProvider {
    pub id: String,
    pub name: Option<String>,
    pub physicalnetworkid: Option<String>,
    /// `Enabled`, `Disabled` or `Shutdown`
    pub state: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub servicelist: Vec<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub canenableindividualservice: Option<bool>,
}

/// System VM routing the traffic of guest networks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Router {
    pub id: String,
    pub name: Option<String>,
    /// `Running`, `Stopped`, `Starting`...
    pub state: Option<String>,
    pub zoneid: Option<String>,
    pub podid: Option<String>,
    pub hostid: Option<String>,
    pub networkdomain: Option<String>,
    pub publicip: Option<String>,
    pub guestipaddress: Option<String>,
    pub guestnetworkid: Option<String>,
    pub linklocalip: Option<String>,
    pub serviceofferingid: Option<String>,
    pub vpcid: Option<String>,
    pub role: Option<String>,
    pub redundantstate: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub isredundantrouter: Option<bool>,
    pub account: Option<String>,
    pub domainid: Option<String>,
}

/// Usage of one capacity type in a zone, pod or cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    /// 0 memory, 1 CPU, 2 storage, 3 allocated storage, 4 public IPs...
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    pub zoneid: Option<String>,
    pub podid: Option<String>,
    pub clusterid: Option<String>,
    pub capacityused: Option<i64>,
    pub capacitytotal: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub percentused: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub sent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_flags_from_strings() {
        let zone: Zone = serde_json::from_str(
            r#"{"id": "z1", "name": "Sandbox-simulator", "networktype": "Advanced",
                "securitygroupsenabled": false, "localstorageenabled": "true"}"#,
        )
        .unwrap();
        assert_eq!(zone.securitygroupsenabled, Some(false));
        assert_eq!(zone.localstorageenabled, Some(true));
    }

    #[test]
    fn host_type_is_renamed() {
        let host: Host =
            serde_json::from_str(r#"{"id": "h1", "state": "Up", "type": "Routing"}"#).unwrap();
        assert_eq!(host.kind.as_deref(), Some("Routing"));
    }

    #[test]
    fn capacity_percent_as_number_or_string() {
        let capacity: Capacity = serde_json::from_str(
            r#"{"type": 0, "zoneid": "z1", "capacityused": 512, "capacitytotal": 2048, "percentused": "25"}"#,
        )
        .unwrap();
        assert_eq!(capacity.kind.as_deref(), Some("0"));
        assert_eq!(capacity.percentused.as_deref(), Some("25"));

        let capacity: Capacity = serde_json::from_str(r#"{"type": 1, "percentused": 12.5}"#).unwrap();
        assert_eq!(capacity.percentused.as_deref(), Some("12.5"));
    }

    #[test]
    fn provider_services() {
        let provider: NetworkServiceProvider = serde_json::from_str(
            r#"{"id": "p1", "name": "VirtualRouter", "state": "Enabled", "servicelist": ["Dhcp", "Dns"]}"#,
        )
        .unwrap();
        assert_eq!(provider.servicelist, vec!["Dhcp", "Dns"]);

        let provider: NetworkServiceProvider =
            serde_json::from_str(r#"{"id": "p2", "servicelist": null}"#).unwrap();
        assert!(provider.servicelist.is_empty());
    }
}
