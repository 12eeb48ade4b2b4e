use crate::{
    api::infra::{CreatePod, CreateZone},
    builder::{required, Builder, BuilderError},
};

#[derive(Debug, Default)]
pub struct ZoneBuilder {
    pub name: Option<String>,
    pub dns1: Option<String>,
    pub dns2: Option<String>,
    pub internaldns1: Option<String>,
    pub internaldns2: Option<String>,
    pub networktype: Option<String>,
    pub domainid: Option<String>,
    pub securitygroupenabled: Option<bool>,
    pub localstorageenabled: Option<bool>,
}

impl ZoneBuilder {
    pub fn new() -> ZoneBuilder {
        ZoneBuilder::default()
    }

    pub fn with_name(mut self, name: &str) -> ZoneBuilder {
        self.name = Some(name.to_string());
        self
    }

    /// Public DNS servers, the second one is optional
    pub fn with_dns(mut self, dns1: &str, dns2: Option<&str>) -> ZoneBuilder {
        self.dns1 = Some(dns1.to_string());
        self.dns2 = dns2.map(str::to_string);
        self
    }

    pub fn with_internal_dns(mut self, dns1: &str, dns2: Option<&str>) -> ZoneBuilder {
        self.internaldns1 = Some(dns1.to_string());
        self.internaldns2 = dns2.map(str::to_string);
        self
    }

    /// `Basic` or `Advanced`
    pub fn with_network_type(mut self, networktype: &str) -> ZoneBuilder {
        self.networktype = Some(networktype.to_string());
        self
    }

    pub fn with_domain(mut self, domainid: &str) -> ZoneBuilder {
        self.domainid = Some(domainid.to_string());
        self
    }

    pub fn with_security_groups(mut self, enabled: bool) -> ZoneBuilder {
        self.securitygroupenabled = Some(enabled);
        self
    }

    pub fn with_local_storage(mut self, enabled: bool) -> ZoneBuilder {
        self.localstorageenabled = Some(enabled);
        self
    }
}

impl Builder<CreateZone> for ZoneBuilder {
    fn try_build(self) -> Result<CreateZone, BuilderError> {
        Ok(CreateZone {
            dns1: required("dns1", self.dns1)?,
            internaldns1: required("internaldns1", self.internaldns1)?,
            name: required("name", self.name)?,
            networktype: required("networktype", self.networktype)?,
            dns2: self.dns2,
            internaldns2: self.internaldns2,
            domainid: self.domainid,
            securitygroupenabled: self.securitygroupenabled,
            localstorageenabled: self.localstorageenabled,
            ..Default::default()
        })
    }
}

#[derive(Debug, Default)]
pub struct PodBuilder {
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub gateway: Option<String>,
    pub netmask: Option<String>,
    pub startip: Option<String>,
    pub endip: Option<String>,
}

impl PodBuilder {
    pub fn new() -> PodBuilder {
        PodBuilder::default()
    }

    pub fn with_name(mut self, name: &str) -> PodBuilder {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_zone(mut self, zoneid: &str) -> PodBuilder {
        self.zoneid = Some(zoneid.to_string());
        self
    }

    pub fn with_gateway(mut self, gateway: &str, netmask: &str) -> PodBuilder {
        self.gateway = Some(gateway.to_string());
        self.netmask = Some(netmask.to_string());
        self
    }

    /// Range of management IPs reserved for the pod
    pub fn with_ip_range(mut self, startip: &str, endip: &str) -> PodBuilder {
        self.startip = Some(startip.to_string());
        self.endip = Some(endip.to_string());
        self
    }
}

impl Builder<CreatePod> for PodBuilder {
    fn try_build(self) -> Result<CreatePod, BuilderError> {
        Ok(CreatePod {
            name: required("name", self.name)?,
            zoneid: required("zoneid", self.zoneid)?,
            gateway: required("gateway", self.gateway)?,
            netmask: required("netmask", self.netmask)?,
            startip: required("startip", self.startip)?,
            endip: self.endip,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zone_full() {
        let zone = ZoneBuilder::new()
            .with_name("Sandbox-simulator")
            .with_dns("8.8.8.8", None)
            .with_internal_dns("10.147.28.6", Some("10.147.28.7"))
            .with_network_type("Advanced")
            .try_build()
            .unwrap();
        assert_eq!(zone.name, "Sandbox-simulator");
        assert_eq!(zone.dns2, None);
        assert_eq!(zone.internaldns2.as_deref(), Some("10.147.28.7"));
    }

    #[test]
    fn zone_incomplete_network_type() {
        let err = ZoneBuilder::new()
            .with_name("zone")
            .with_dns("8.8.8.8", None)
            .with_internal_dns("10.147.28.6", None)
            .try_build()
            .unwrap_err();
        assert_eq!(
            err,
            BuilderError::MissingRequiredField("networktype".to_string())
        );
    }

    #[test]
    #[should_panic]
    fn pod_without_range() {
        PodBuilder::new()
            .with_name("pod")
            .with_zone("z1")
            .with_gateway("172.16.15.1", "255.255.255.0")
            .try_build()
            .unwrap();
    }
}
