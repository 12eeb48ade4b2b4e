use super::de::{lenient_bool, null_to_default};

/// A guest instance, as returned by `deployVirtualMachine` and
/// `listVirtualMachines`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualMachine {
    pub id: String,
    pub name: Option<String>,
    pub displayname: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub domain: Option<String>,
    pub projectid: Option<String>,
    pub zoneid: Option<String>,
    pub templateid: Option<String>,
    pub serviceofferingid: Option<String>,
    pub hostid: Option<String>,
    /// `Running`, `Stopped`, `Starting`...
    pub state: Option<String>,
    pub hypervisor: Option<String>,
    pub group: Option<String>,
    /// Only set by commands that (re)generate the guest password
    pub password: Option<String>,
    /// Set in EIP/ELB enabled basic zones
    pub publicip: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub passwordenabled: Option<bool>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub nic: Vec<Nic>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nic {
    pub id: String,
    pub networkid: Option<String>,
    pub ipaddress: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub isdefault: Option<bool>,
    pub macaddress: Option<String>,
    pub gateway: Option<String>,
    pub netmask: Option<String>,
    pub traffictype: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VmSnapshot {
    pub id: String,
    pub name: Option<String>,
    pub displayname: Option<String>,
    pub description: Option<String>,
    pub virtualmachineid: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub current: Option<bool>,
}

/// Host affinity or anti-affinity between the instances of a group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AffinityGroup {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// `host affinity` or `host anti-affinity`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    #[serde(default, rename = "virtualmachineIds", deserialize_with = "null_to_default")]
    pub virtualmachineids: Vec<String>,
}

/// SSH key pairs are named, not identified. The private key is only
/// returned by `createSSHKeyPair`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SshKeyPair {
    pub name: String,
    pub fingerprint: Option<String>,
    pub privatekey: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroup {
    pub id: String,
    pub name: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub created: Option<String>,
}
