use std::collections::BTreeMap;

use base64::{engine::general_purpose::URL_SAFE, Engine};

use crate::{
    api::compute::DeployVirtualMachine,
    builder::{required, Builder, BuilderError},
};

#[derive(Debug, Default)]
pub struct VirtualMachineBuilder {
    pub zoneid: Option<String>,
    pub serviceofferingid: Option<String>,
    pub templateid: Option<String>,
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
    /// Plain text, encoded when building
    pub userdata: Option<String>,
    pub custom_cpu_number: Option<i64>,
    pub custom_cpu_speed: Option<i64>,
    pub custom_memory: Option<i64>,
    pub root_disk_size: Option<i64>,
}

impl VirtualMachineBuilder {
    pub fn new() -> VirtualMachineBuilder {
        VirtualMachineBuilder::default()
    }

    pub fn with_zone(mut self, zoneid: &str) -> VirtualMachineBuilder {
        self.zoneid = Some(zoneid.to_string());
        self
    }

    pub fn with_service_offering(mut self, serviceofferingid: &str) -> VirtualMachineBuilder {
        self.serviceofferingid = Some(serviceofferingid.to_string());
        self
    }

    pub fn with_template(mut self, templateid: &str) -> VirtualMachineBuilder {
        self.templateid = Some(templateid.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> VirtualMachineBuilder {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_displayname(mut self, displayname: &str) -> VirtualMachineBuilder {
        self.displayname = Some(displayname.to_string());
        self
    }

    /// Deploys on behalf of an account of a domain
    pub fn with_account(mut self, account: &str, domainid: &str) -> VirtualMachineBuilder {
        self.account = Some(account.to_string());
        self.domainid = Some(domainid.to_string());
        self
    }

    pub fn with_project(mut self, projectid: &str) -> VirtualMachineBuilder {
        self.projectid = Some(projectid.to_string());
        self
    }

    pub fn with_network(mut self, networkid: &str) -> VirtualMachineBuilder {
        self.networkids.push(networkid.to_string());
        self
    }

    pub fn with_security_group(mut self, securitygroupid: &str) -> VirtualMachineBuilder {
        self.securitygroupids.push(securitygroupid.to_string());
        self
    }

    pub fn with_affinity_group_id(mut self, id: &str) -> VirtualMachineBuilder {
        self.affinitygroupids.push(id.to_string());
        self
    }

    pub fn with_affinity_group_name(mut self, name: &str) -> VirtualMachineBuilder {
        self.affinitygroupnames.push(name.to_string());
        self
    }

    pub fn with_disk_offering(mut self, diskofferingid: &str) -> VirtualMachineBuilder {
        self.diskofferingid = Some(diskofferingid.to_string());
        self
    }

    pub fn with_keypair(mut self, keypair: &str) -> VirtualMachineBuilder {
        self.keypair = Some(keypair.to_string());
        self
    }

    pub fn with_ip_address(mut self, ipaddress: &str) -> VirtualMachineBuilder {
        self.ipaddress = Some(ipaddress.to_string());
        self
    }

    pub fn with_host(mut self, hostid: &str) -> VirtualMachineBuilder {
        self.hostid = Some(hostid.to_string());
        self
    }

    pub fn with_hypervisor(mut self, hypervisor: &str) -> VirtualMachineBuilder {
        self.hypervisor = Some(hypervisor.to_string());
        self
    }

    pub fn with_group(mut self, group: &str) -> VirtualMachineBuilder {
        self.group = Some(group.to_string());
        self
    }

    pub fn with_startvm(mut self, startvm: bool) -> VirtualMachineBuilder {
        self.startvm = Some(startvm);
        self
    }

    pub fn with_userdata(mut self, userdata: &str) -> VirtualMachineBuilder {
        self.userdata = Some(userdata.to_string());
        self
    }

    /// Values for custom compute offerings
    pub fn with_custom_compute(
        mut self,
        cpu_number: i64,
        cpu_speed: i64,
        memory: i64,
    ) -> VirtualMachineBuilder {
        self.custom_cpu_number = Some(cpu_number);
        self.custom_cpu_speed = Some(cpu_speed);
        self.custom_memory = Some(memory);
        self
    }

    /// GB
    pub fn with_root_disk_size(mut self, size: i64) -> VirtualMachineBuilder {
        self.root_disk_size = Some(size);
        self
    }

    fn details(&self) -> Option<BTreeMap<String, String>> {
        let details: BTreeMap<String, String> = [
            ("cpuNumber", self.custom_cpu_number),
            ("cpuSpeed", self.custom_cpu_speed),
            ("memory", self.custom_memory),
            ("rootdisksize", self.root_disk_size),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v.to_string())))
        .collect();

        if details.is_empty() {
            None
        } else {
            Some(details)
        }
    }
}

impl Builder<DeployVirtualMachine> for VirtualMachineBuilder {
    fn try_build(self) -> Result<DeployVirtualMachine, BuilderError> {
        let details = self.details();
        Ok(DeployVirtualMachine {
            serviceofferingid: required("serviceofferingid", self.serviceofferingid)?,
            templateid: required("templateid", self.templateid)?,
            zoneid: required("zoneid", self.zoneid)?,
            name: self.name,
            displayname: self.displayname,
            account: self.account,
            domainid: self.domainid,
            projectid: self.projectid,
            networkids: self.networkids,
            securitygroupids: self.securitygroupids,
            affinitygroupids: self.affinitygroupids,
            affinitygroupnames: self.affinitygroupnames,
            diskofferingid: self.diskofferingid,
            keypair: self.keypair,
            ipaddress: self.ipaddress,
            hostid: self.hostid,
            hypervisor: self.hypervisor,
            group: self.group,
            startvm: self.startvm,
            userdata: self.userdata.map(|data| URL_SAFE.encode(data)),
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Command;
    use pretty_assertions::assert_eq;

    fn minimal() -> VirtualMachineBuilder {
        VirtualMachineBuilder::new()
            .with_zone("z1")
            .with_service_offering("so1")
            .with_template("t1")
    }

    #[test]
    fn vm_minimal() {
        let cmd = minimal().try_build().unwrap();
        assert_eq!(cmd.details, None);
        assert!(cmd.networkids.is_empty());
        let params = cmd.params().unwrap();
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn vm_custom_compute_in_details() {
        let params = minimal()
            .with_custom_compute(2, 1000, 1024)
            .with_root_disk_size(20)
            .try_build()
            .unwrap()
            .params()
            .unwrap();
        assert_eq!(params.get("details[0].cpuNumber"), Some("2"));
        assert_eq!(params.get("details[0].cpuSpeed"), Some("1000"));
        assert_eq!(params.get("details[0].memory"), Some("1024"));
        assert_eq!(params.get("details[0].rootdisksize"), Some("20"));
    }

    #[test]
    fn vm_userdata_is_encoded() {
        let cmd = minimal().with_userdata("#!/bin/sh\necho ok?").try_build().unwrap();
        assert_eq!(cmd.userdata.as_deref(), Some("IyEvYmluL3NoCmVjaG8gb2s_"));
    }

    #[test]
    fn vm_incomplete_template() {
        let err = VirtualMachineBuilder::new()
            .with_zone("z1")
            .with_service_offering("so1")
            .try_build()
            .unwrap_err();
        assert_eq!(
            err,
            BuilderError::MissingRequiredField("templateid".to_string())
        );
    }
}
