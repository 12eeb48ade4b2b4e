use super::de::{lenient_bool, lenient_string, null_to_default};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub id: String,
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub zoneid: Option<String>,
    pub networkofferingid: Option<String>,
    pub vpcid: Option<String>,
    pub state: Option<String>,
    pub gateway: Option<String>,
    pub netmask: Option<String>,
    pub cidr: Option<String>,
    pub vlan: Option<String>,
    pub traffictype: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vpc {
    pub id: String,
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub cidr: Option<String>,
    pub zoneid: Option<String>,
    pub vpcofferingid: Option<String>,
    pub state: Option<String>,
    pub networkdomain: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub restartrequired: Option<bool>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub network: Vec<Network>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicIpAddress {
    pub id: String,
    pub ipaddress: Option<String>,
    pub zoneid: Option<String>,
    pub associatednetworkid: Option<String>,
    pub networkid: Option<String>,
    pub vpcid: Option<String>,
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub issourcenat: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub isstaticnat: Option<bool>,
    pub virtualmachineid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
}

/// Ingress and egress firewall rules share this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirewallRule {
    pub id: String,
    pub protocol: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub startport: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub endport: Option<String>,
    pub ipaddressid: Option<String>,
    pub ipaddress: Option<String>,
    pub networkid: Option<String>,
    pub cidrlist: Option<String>,
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub icmptype: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub icmpcode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortForwardingRule {
    pub id: String,
    pub protocol: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub privateport: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub privateendport: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub publicport: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub publicendport: Option<String>,
    pub ipaddressid: Option<String>,
    pub ipaddress: Option<String>,
    pub virtualmachineid: Option<String>,
    pub virtualmachinename: Option<String>,
    pub vmguestip: Option<String>,
    pub networkid: Option<String>,
    pub cidrlist: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroup {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub ingressrule: Vec<SecurityGroupRule>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub egressrule: Vec<SecurityGroupRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroupRule {
    pub ruleid: String,
    pub protocol: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub startport: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub endport: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub icmptype: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub icmpcode: Option<String>,
    pub cidr: Option<String>,
    pub account: Option<String>,
    pub securitygroupname: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerRule {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// `roundrobin`, `leastconn` or `source`
    pub algorithm: Option<String>,
    pub publicipid: Option<String>,
    pub publicip: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub publicport: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub privateport: Option<String>,
    pub networkid: Option<String>,
    pub zoneid: Option<String>,
    pub cidrlist: Option<String>,
    pub state: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
}

/// Stickiness policies of a load balancer rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LbStickinessPolicies {
    pub lbruleid: Option<String>,
    pub name: Option<String>,
    pub state: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub stickinesspolicy: Vec<StickinessPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StickinessPolicy {
    pub id: String,
    pub name: Option<String>,
    /// `LbCookie`, `AppCookie` or `SourceBased`
    pub methodname: Option<String>,
    pub description: Option<String>,
    pub state: Option<String>,
}

/// Rule of a VPC network ACL list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkAcl {
    pub id: String,
    pub protocol: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub startport: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub endport: Option<String>,
    /// `Ingress` or `Egress`
    pub traffictype: Option<String>,
    /// `Allow` or `Deny`
    pub action: Option<String>,
    pub number: Option<i32>,
    pub cidrlist: Option<String>,
    pub aclid: Option<String>,
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub icmptype: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub icmpcode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkAclList {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub vpcid: Option<String>,
}
