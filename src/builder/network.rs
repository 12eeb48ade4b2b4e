use crate::{
    api::network::CreateNetwork,
    builder::{required, Builder, BuilderError},
};

#[derive(Debug, Default)]
pub struct NetworkBuilder {
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub networkofferingid: Option<String>,
    pub zoneid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub subdomainaccess: Option<bool>,
    pub gateway: Option<String>,
    pub netmask: Option<String>,
    pub startip: Option<String>,
    pub endip: Option<String>,
    pub vlan: Option<String>,
    pub acltype: Option<String>,
    pub vpcid: Option<String>,
    pub aclid: Option<String>,
}

impl NetworkBuilder {
    pub fn new() -> NetworkBuilder {
        NetworkBuilder::default()
    }

    pub fn with_name(mut self, name: &str) -> NetworkBuilder {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_displaytext(mut self, displaytext: &str) -> NetworkBuilder {
        self.displaytext = Some(displaytext.to_string());
        self
    }

    pub fn with_network_offering(mut self, networkofferingid: &str) -> NetworkBuilder {
        self.networkofferingid = Some(networkofferingid.to_string());
        self
    }

    pub fn with_zone(mut self, zoneid: &str) -> NetworkBuilder {
        self.zoneid = Some(zoneid.to_string());
        self
    }

    pub fn with_account(mut self, account: &str, domainid: &str) -> NetworkBuilder {
        self.account = Some(account.to_string());
        self.domainid = Some(domainid.to_string());
        self
    }

    pub fn with_project(mut self, projectid: &str) -> NetworkBuilder {
        self.projectid = Some(projectid.to_string());
        self
    }

    pub fn with_subdomain_access(mut self, access: bool) -> NetworkBuilder {
        self.subdomainaccess = Some(access);
        self
    }

    pub fn with_gateway(mut self, gateway: &str, netmask: &str) -> NetworkBuilder {
        self.gateway = Some(gateway.to_string());
        self.netmask = Some(netmask.to_string());
        self
    }

    pub fn with_ip_range(mut self, startip: &str, endip: &str) -> NetworkBuilder {
        self.startip = Some(startip.to_string());
        self.endip = Some(endip.to_string());
        self
    }

    pub fn with_vlan(mut self, vlan: &str) -> NetworkBuilder {
        self.vlan = Some(vlan.to_string());
        self
    }

    /// `Account` or `Domain`
    pub fn with_acl_type(mut self, acltype: &str) -> NetworkBuilder {
        self.acltype = Some(acltype.to_string());
        self
    }

    /// Creates the network as a tier of a VPC, guarded by an ACL list
    pub fn in_vpc(mut self, vpcid: &str, aclid: Option<&str>) -> NetworkBuilder {
        self.vpcid = Some(vpcid.to_string());
        self.aclid = aclid.map(str::to_string);
        self
    }
}

impl Builder<CreateNetwork> for NetworkBuilder {
    fn try_build(self) -> Result<CreateNetwork, BuilderError> {
        Ok(CreateNetwork {
            name: required("name", self.name)?,
            displaytext: required("displaytext", self.displaytext)?,
            networkofferingid: required("networkofferingid", self.networkofferingid)?,
            zoneid: required("zoneid", self.zoneid)?,
            account: self.account,
            domainid: self.domainid,
            projectid: self.projectid,
            subdomainaccess: self.subdomainaccess,
            gateway: self.gateway,
            netmask: self.netmask,
            startip: self.startip,
            endip: self.endip,
            vlan: self.vlan,
            acltype: self.acltype,
            vpcid: self.vpcid,
            aclid: self.aclid,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Command;
    use pretty_assertions::assert_eq;

    #[test]
    fn shared_network() {
        let params = NetworkBuilder::new()
            .with_name("shared")
            .with_displaytext("Shared network")
            .with_network_offering("no1")
            .with_zone("z1")
            .with_gateway("10.1.1.1", "255.255.255.0")
            .with_ip_range("10.1.1.10", "10.1.1.100")
            .with_vlan("100")
            .with_acl_type("Domain")
            .try_build()
            .unwrap()
            .params()
            .unwrap();
        assert_eq!(params.get("vlan"), Some("100"));
        assert_eq!(params.get("acltype"), Some("Domain"));
        assert!(!params.contains_key("vpcid"));
    }

    #[test]
    fn network_without_offering() {
        let err = NetworkBuilder::new()
            .with_name("n")
            .with_displaytext("n")
            .with_zone("z1")
            .try_build()
            .unwrap_err();
        assert_eq!(
            err,
            BuilderError::MissingRequiredField("networkofferingid".to_string())
        );
    }
}
