//! Guest instances and their snapshots
use std::collections::BTreeMap;

use marvin_models::models::{
    AffinityGroup, InstanceGroup, SshKeyPair, Success, VirtualMachine, VmSnapshot, Volume,
};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeployVirtualMachine {
    pub serviceofferingid: String,
    pub templateid: String,
    pub zoneid: String,
    pub name: Option<String>,
    pub displayname: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub networkids: Vec<String>,
    pub securitygroupids: Vec<String>,
    pub affinitygroupids: Vec<String>,
    pub affinitygroupnames: Vec<String>,
    pub diskofferingid: Option<String>,
    pub keypair: Option<String>,
    pub ipaddress: Option<String>,
    pub hostid: Option<String>,
    pub hypervisor: Option<String>,
    pub group: Option<String>,
    pub startvm: Option<bool>,
    /// Base64 encoded, send with `POST` when larger than a query allows
    pub userdata: Option<String>,
    /// Custom offering values (`cpuNumber`, `cpuSpeed`, `memory`,
    /// `rootdisksize`), sent as `details[0].<key>`
    pub details: Option<BTreeMap<String, String>>,
}
command!(async DeployVirtualMachine, "deployVirtualMachine", "virtualmachine" => VirtualMachine);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StartVirtualMachine {
    pub id: String,
    pub hostid: Option<String>,
}
command!(async StartVirtualMachine, "startVirtualMachine", "virtualmachine" => VirtualMachine);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StopVirtualMachine {
    pub id: String,
    pub forced: Option<bool>,
}
command!(async StopVirtualMachine, "stopVirtualMachine", "virtualmachine" => VirtualMachine);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RebootVirtualMachine {
    pub id: String,
}
command!(async RebootVirtualMachine, "rebootVirtualMachine", "virtualmachine" => VirtualMachine);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecoverVirtualMachine {
    pub id: String,
}
command!(sync RecoverVirtualMachine, "recoverVirtualMachine", "virtualmachine" => VirtualMachine);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RestoreVirtualMachine {
    pub virtualmachineid: String,
    pub templateid: Option<String>,
}
command!(async RestoreVirtualMachine, "restoreVirtualMachine", "virtualmachine" => VirtualMachine);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResetSshKeyForVirtualMachine {
    pub id: String,
    pub keypair: String,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}
command!(async ResetSshKeyForVirtualMachine, "resetSSHKeyForVirtualMachine", "virtualmachine" => VirtualMachine);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateVirtualMachine {
    pub id: String,
    pub name: Option<String>,
    pub displayname: Option<String>,
    pub group: Option<String>,
    pub haenable: Option<bool>,
    pub ostypeid: Option<String>,
    pub userdata: Option<String>,
    pub isdynamicallyscalable: Option<bool>,
}
command!(sync UpdateVirtualMachine, "updateVirtualMachine", "virtualmachine" => VirtualMachine);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DestroyVirtualMachine {
    pub id: String,
    pub expunge: Option<bool>,
}
command!(async DestroyVirtualMachine, "destroyVirtualMachine", "virtualmachine" => Option<VirtualMachine>);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpungeVirtualMachine {
    pub id: String,
}
command!(async ExpungeVirtualMachine, "expungeVirtualMachine" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MigrateVirtualMachine {
    pub virtualmachineid: String,
    pub hostid: Option<String>,
    pub storageid: Option<String>,
}
command!(async MigrateVirtualMachine, "migrateVirtualMachine", "virtualmachine" => VirtualMachine);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttachVolume {
    pub id: String,
    pub virtualmachineid: String,
    pub deviceid: Option<i64>,
}
command!(async AttachVolume, "attachVolume", "volume" => Volume);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetachVolume {
    pub id: Option<String>,
    pub virtualmachineid: Option<String>,
    pub deviceid: Option<i64>,
}
command!(async DetachVolume, "detachVolume", "volume" => Volume);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddNicToVirtualMachine {
    pub virtualmachineid: String,
    pub networkid: String,
    pub ipaddress: Option<String>,
}
command!(async AddNicToVirtualMachine, "addNicToVirtualMachine", "virtualmachine" => VirtualMachine);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RemoveNicFromVirtualMachine {
    pub virtualmachineid: String,
    pub nicid: String,
}
command!(async RemoveNicFromVirtualMachine, "removeNicFromVirtualMachine", "virtualmachine" => VirtualMachine);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateDefaultNicForVirtualMachine {
    pub virtualmachineid: String,
    pub nicid: String,
}
command!(async UpdateDefaultNicForVirtualMachine, "updateDefaultNicForVirtualMachine", "virtualmachine" => VirtualMachine);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttachIso {
    /// ISO to attach
    pub id: String,
    pub virtualmachineid: String,
}
command!(async AttachIso, "attachIso", "virtualmachine" => VirtualMachine);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetachIso {
    pub virtualmachineid: String,
}
command!(async DetachIso, "detachIso", "virtualmachine" => VirtualMachine);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScaleVirtualMachine {
    pub id: String,
    pub serviceofferingid: String,
    pub details: Option<BTreeMap<String, String>>,
}
command!(async ScaleVirtualMachine, "scaleVirtualMachine" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChangeServiceForVirtualMachine {
    pub id: String,
    pub serviceofferingid: String,
    pub details: Option<BTreeMap<String, String>>,
}
command!(sync ChangeServiceForVirtualMachine, "changeServiceForVirtualMachine", "virtualmachine" => VirtualMachine);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListVirtualMachines {
    pub id: Option<String>,
    pub name: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub zoneid: Option<String>,
    pub hostid: Option<String>,
    pub templateid: Option<String>,
    pub networkid: Option<String>,
    pub groupid: Option<String>,
    pub state: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListVirtualMachines, "listVirtualMachines", "virtualmachine" => VirtualMachine);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResetPasswordForVirtualMachine {
    pub id: String,
}
command!(async ResetPasswordForVirtualMachine, "resetPasswordForVirtualMachine", "virtualmachine" => VirtualMachine);

/// Move a stopped instance to another account of the same domain
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssignVirtualMachine {
    pub virtualmachineid: String,
    pub account: String,
    pub domainid: String,
    pub networkids: Vec<String>,
    pub securitygroupids: Vec<String>,
}
command!(sync AssignVirtualMachine, "assignVirtualMachine", "virtualmachine" => VirtualMachine);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateVmAffinityGroup {
    pub id: String,
    pub affinitygroupids: Vec<String>,
    pub affinitygroupnames: Vec<String>,
}
command!(async UpdateVmAffinityGroup, "updateVMAffinityGroup", "virtualmachine" => VirtualMachine);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateVmSnapshot {
    pub virtualmachineid: String,
    pub snapshotmemory: Option<bool>,
    pub name: Option<String>,
    pub description: Option<String>,
}
command!(async CreateVmSnapshot, "createVMSnapshot", "vmsnapshot" => VmSnapshot);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListVmSnapshot {
    pub vmsnapshotid: Option<String>,
    pub virtualmachineid: Option<String>,
    pub name: Option<String>,
    pub state: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListVmSnapshot, "listVMSnapshot", "vmSnapshot" => VmSnapshot);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RevertToVmSnapshot {
    pub vmsnapshotid: String,
}
command!(async RevertToVmSnapshot, "revertToVMSnapshot", "virtualmachine" => Option<VirtualMachine>);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteVmSnapshot {
    pub vmsnapshotid: String,
}
command!(async DeleteVmSnapshot, "deleteVMSnapshot" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateAffinityGroup {
    pub name: String,
    /// `host affinity` or `host anti-affinity`
    #[serde(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}
command!(async CreateAffinityGroup, "createAffinityGroup", "affinitygroup" => AffinityGroup);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteAffinityGroup {
    pub id: Option<String>,
    pub name: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}
command!(async DeleteAffinityGroup, "deleteAffinityGroup" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListAffinityGroups {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub virtualmachineid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListAffinityGroups, "listAffinityGroups", "affinitygroup" => AffinityGroup);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSshKeyPair {
    pub name: String,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}
command!(sync CreateSshKeyPair, "createSSHKeyPair", "keypair" => SshKeyPair);

/// Registers an existing public key under a name
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterSshKeyPair {
    pub name: String,
    pub publickey: String,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}
command!(sync RegisterSshKeyPair, "registerSSHKeyPair", "keypair" => SshKeyPair);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteSshKeyPair {
    pub name: String,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}
command!(sync DeleteSshKeyPair, "deleteSSHKeyPair" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListSshKeyPairs {
    pub name: Option<String>,
    pub fingerprint: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListSshKeyPairs, "listSSHKeyPairs", "sshkeypair" => SshKeyPair);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateInstanceGroup {
    pub name: String,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}
command!(sync CreateInstanceGroup, "createInstanceGroup", "instancegroup" => InstanceGroup);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteInstanceGroup {
    pub id: String,
}
command!(sync DeleteInstanceGroup, "deleteInstanceGroup" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateInstanceGroup {
    pub id: String,
    pub name: Option<String>,
}
command!(sync UpdateInstanceGroup, "updateInstanceGroup", "instancegroup" => InstanceGroup);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListInstanceGroups {
    pub id: Option<String>,
    pub name: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListInstanceGroups, "listInstanceGroups", "instancegroup" => InstanceGroup);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Command;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deploy_params() {
        let params = DeployVirtualMachine {
            serviceofferingid: "so".to_string(),
            templateid: "t".to_string(),
            zoneid: "z".to_string(),
            networkids: vec!["n1".to_string(), "n2".to_string()],
            details: Some(
                [("cpuNumber".to_string(), "2".to_string())]
                    .into_iter()
                    .collect(),
            ),
            ..Default::default()
        }
        .params()
        .unwrap();

        assert_eq!(params.get("networkids"), Some("n1,n2"));
        assert_eq!(params.get("details[0].cpuNumber"), Some("2"));
        assert!(!params.contains_key("securitygroupids"));
        assert!(!params.contains_key("startvm"));
    }

    #[test]
    fn destroyed_vm_may_be_absent() {
        assert_eq!(DestroyVirtualMachine::decode(json!({})).unwrap(), None);
        let vm = DestroyVirtualMachine::decode(json!({"virtualmachine": {"id": "vm1", "state": "Destroyed"}}))
            .unwrap()
            .unwrap();
        assert_eq!(vm.state.as_deref(), Some("Destroyed"));
    }

    #[test]
    fn vm_snapshot_list_key() {
        let snapshots =
            ListVmSnapshot::decode(json!({"count": 1, "vmSnapshot": [{"id": "s1", "state": "Ready"}]}))
                .unwrap();
        assert_eq!(snapshots[0].id, "s1");
    }

    #[test]
    fn affinity_group_type_param() {
        let params = CreateAffinityGroup {
            name: "spread".to_string(),
            kind: "host anti-affinity".to_string(),
            ..Default::default()
        }
        .params()
        .unwrap();
        assert_eq!(params.get("type"), Some("host anti-affinity"));
        assert!(!params.contains_key("kind"));
    }
}
