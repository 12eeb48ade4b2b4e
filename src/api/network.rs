//! Guest networks, VPCs, public IPs, firewall, load balancing, network ACLs
//! and security groups
use marvin_models::models::{
    FirewallRule, LbStickinessPolicies, LoadBalancerRule, Network, NetworkAcl, NetworkAclList,
    PortForwardingRule, PublicIpAddress, SecurityGroup, Success, VirtualMachine, Vpc,
};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateNetwork {
    pub name: String,
    pub displaytext: String,
    pub networkofferingid: String,
    pub zoneid: String,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub subdomainaccess: Option<bool>,
    pub gateway: Option<String>,
    pub netmask: Option<String>,
    pub startip: Option<String>,
    pub endip: Option<String>,
    pub vlan: Option<String>,
    /// `Account` or `Domain`
    pub acltype: Option<String>,
    pub vpcid: Option<String>,
    pub aclid: Option<String>,
    pub networkdomain: Option<String>,
}
command!(sync CreateNetwork, "createNetwork", "network" => Network);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteNetwork {
    pub id: String,
    pub forced: Option<bool>,
}
command!(async DeleteNetwork, "deleteNetwork" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateNetwork {
    pub id: String,
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub networkofferingid: Option<String>,
    pub networkdomain: Option<String>,
    pub guestvmcidr: Option<String>,
    pub changecidr: Option<bool>,
}
command!(async UpdateNetwork, "updateNetwork", "network" => Network);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RestartNetwork {
    pub id: String,
    /// Destroy and recreate the network elements
    pub cleanup: Option<bool>,
}
command!(async RestartNetwork, "restartNetwork" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListNetworks {
    pub id: Option<String>,
    pub zoneid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub vpcid: Option<String>,
    pub traffictype: Option<String>,
    /// `Isolated` or `Shared`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub isdefault: Option<bool>,
    pub issystem: Option<bool>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListNetworks, "listNetworks", "network" => Network);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateVpc {
    pub name: String,
    pub displaytext: String,
    pub cidr: String,
    pub vpcofferingid: String,
    pub zoneid: String,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub networkdomain: Option<String>,
    pub start: Option<bool>,
}
command!(async CreateVpc, "createVPC", "vpc" => Vpc);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateVpc {
    pub id: String,
    pub name: Option<String>,
    pub displaytext: Option<String>,
}
command!(async UpdateVpc, "updateVPC", "vpc" => Vpc);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteVpc {
    pub id: String,
}
command!(async DeleteVpc, "deleteVPC" => Success);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RestartVpc {
    pub id: String,
}
command!(async RestartVpc, "restartVPC" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListVpcs {
    pub id: Option<String>,
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub vpcofferingid: Option<String>,
    pub state: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListVpcs, "listVPCs", "vpc" => Vpc);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssociateIpAddress {
    pub zoneid: Option<String>,
    pub networkid: Option<String>,
    pub vpcid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub isportable: Option<bool>,
}
command!(async AssociateIpAddress, "associateIpAddress", "ipaddress" => PublicIpAddress);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisassociateIpAddress {
    pub id: String,
}
command!(async DisassociateIpAddress, "disassociateIpAddress" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListPublicIpAddresses {
    pub id: Option<String>,
    pub ipaddress: Option<String>,
    pub zoneid: Option<String>,
    pub associatednetworkid: Option<String>,
    pub vpcid: Option<String>,
    pub issourcenat: Option<bool>,
    pub isstaticnat: Option<bool>,
    pub allocatedonly: Option<bool>,
    pub forvirtualnetwork: Option<bool>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListPublicIpAddresses, "listPublicIpAddresses", "publicipaddress" => PublicIpAddress);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateFirewallRule {
    pub ipaddressid: String,
    pub protocol: String,
    pub cidrlist: Vec<String>,
    pub startport: Option<i32>,
    pub endport: Option<i32>,
    pub icmptype: Option<i32>,
    pub icmpcode: Option<i32>,
}
command!(async CreateFirewallRule, "createFirewallRule", "firewallrule" => FirewallRule);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteFirewallRule {
    pub id: String,
}
command!(async DeleteFirewallRule, "deleteFirewallRule" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListFirewallRules {
    pub id: Option<String>,
    pub ipaddressid: Option<String>,
    pub networkid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListFirewallRules, "listFirewallRules", "firewallrule" => FirewallRule);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateEgressFirewallRule {
    pub networkid: String,
    pub protocol: String,
    pub cidrlist: Vec<String>,
    pub startport: Option<i32>,
    pub endport: Option<i32>,
    pub icmptype: Option<i32>,
    pub icmpcode: Option<i32>,
}
command!(async CreateEgressFirewallRule, "createEgressFirewallRule", "firewallrule" => FirewallRule);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteEgressFirewallRule {
    pub id: String,
}
command!(async DeleteEgressFirewallRule, "deleteEgressFirewallRule" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListEgressFirewallRules {
    pub id: Option<String>,
    pub networkid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListEgressFirewallRules, "listEgressFirewallRules", "firewallrule" => FirewallRule);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreatePortForwardingRule {
    pub ipaddressid: String,
    pub protocol: String,
    pub privateport: i32,
    pub publicport: i32,
    pub privateendport: Option<i32>,
    pub publicendport: Option<i32>,
    pub virtualmachineid: String,
    pub openfirewall: Option<bool>,
    pub networkid: Option<String>,
    pub vmguestip: Option<String>,
    pub cidrlist: Vec<String>,
}
command!(async CreatePortForwardingRule, "createPortForwardingRule", "portforwardingrule" => PortForwardingRule);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeletePortForwardingRule {
    pub id: String,
}
command!(async DeletePortForwardingRule, "deletePortForwardingRule" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListPortForwardingRules {
    pub id: Option<String>,
    pub ipaddressid: Option<String>,
    pub networkid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListPortForwardingRules, "listPortForwardingRules", "portforwardingrule" => PortForwardingRule);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnableStaticNat {
    pub ipaddressid: String,
    pub virtualmachineid: String,
    pub networkid: Option<String>,
    pub vmguestip: Option<String>,
}
command!(sync EnableStaticNat, "enableStaticNat" => Success);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisableStaticNat {
    pub ipaddressid: String,
}
command!(async DisableStaticNat, "disableStaticNat" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSecurityGroup {
    pub name: String,
    pub description: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}
command!(sync CreateSecurityGroup, "createSecurityGroup", "securitygroup" => SecurityGroup);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteSecurityGroup {
    pub id: Option<String>,
    pub name: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}
command!(sync DeleteSecurityGroup, "deleteSecurityGroup" => Success);

/// Another account's group allowed by a rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserSecurityGroup {
    pub account: String,
    pub group: String,
}

/// Parameters shared by ingress and egress authorizations. ICMP rules carry
/// a type and a code instead of a port range.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SecurityGroupRuleParams {
    pub securitygroupid: Option<String>,
    pub securitygroupname: Option<String>,
    pub protocol: String,
    pub startport: Option<i32>,
    pub endport: Option<i32>,
    pub icmptype: Option<i32>,
    pub icmpcode: Option<i32>,
    pub cidrlist: Vec<String>,
    pub usersecuritygrouplist: Vec<UserSecurityGroup>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthorizeSecurityGroupIngress(pub SecurityGroupRuleParams);
command!(async AuthorizeSecurityGroupIngress, "authorizeSecurityGroupIngress", "securitygroup" => SecurityGroup);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthorizeSecurityGroupEgress(pub SecurityGroupRuleParams);
command!(async AuthorizeSecurityGroupEgress, "authorizeSecurityGroupEgress", "securitygroup" => SecurityGroup);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RevokeSecurityGroupIngress {
    pub id: String,
}
command!(async RevokeSecurityGroupIngress, "revokeSecurityGroupIngress" => Success);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RevokeSecurityGroupEgress {
    pub id: String,
}
command!(async RevokeSecurityGroupEgress, "revokeSecurityGroupEgress" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListSecurityGroups {
    pub id: Option<String>,
    pub securitygroupname: Option<String>,
    pub virtualmachineid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListSecurityGroups, "listSecurityGroups", "securitygroup" => SecurityGroup);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateLoadBalancerRule {
    pub name: String,
    /// `roundrobin`, `leastconn` or `source`
    pub algorithm: String,
    pub privateport: i32,
    pub publicport: i32,
    pub publicipid: Option<String>,
    pub networkid: Option<String>,
    pub zoneid: Option<String>,
    pub description: Option<String>,
    pub openfirewall: Option<bool>,
    pub cidrlist: Vec<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}
command!(async CreateLoadBalancerRule, "createLoadBalancerRule", "loadbalancer" => LoadBalancerRule);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteLoadBalancerRule {
    pub id: String,
}
command!(async DeleteLoadBalancerRule, "deleteLoadBalancerRule" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateLoadBalancerRule {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub algorithm: Option<String>,
}
command!(async UpdateLoadBalancerRule, "updateLoadBalancerRule", "loadbalancer" => LoadBalancerRule);

/// Secondary guest address of an instance behind a load balancer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VmIdIp {
    pub vmid: String,
    pub vmip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadBalancerMembers {
    pub id: String,
    pub virtualmachineids: Vec<String>,
    pub vmidipmap: Vec<VmIdIp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssignToLoadBalancerRule(pub LoadBalancerMembers);
command!(async AssignToLoadBalancerRule, "assignToLoadBalancerRule" => Success);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RemoveFromLoadBalancerRule(pub LoadBalancerMembers);
command!(async RemoveFromLoadBalancerRule, "removeFromLoadBalancerRule" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListLoadBalancerRules {
    pub id: Option<String>,
    pub name: Option<String>,
    pub publicipid: Option<String>,
    pub networkid: Option<String>,
    pub virtualmachineid: Option<String>,
    pub zoneid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListLoadBalancerRules, "listLoadBalancerRules", "loadbalancerrule" => LoadBalancerRule);

/// Instances assigned to a rule, or the ones that could be when `applied`
/// is `false`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListLoadBalancerRuleInstances {
    pub id: String,
    pub applied: Option<bool>,
    pub lbvmips: Option<bool>,
    pub keyword: Option<String>,
}
command!(list ListLoadBalancerRuleInstances, "listLoadBalancerRuleInstances", "loadbalancerruleinstance" => VirtualMachine);

/// Entry of a `name`/`value` map parameter (`param[0].name=...`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameValue {
    pub name: String,
    pub value: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateLbStickinessPolicy {
    pub lbruleid: String,
    /// `LbCookie`, `AppCookie` or `SourceBased`
    pub methodname: String,
    pub name: String,
    pub description: Option<String>,
    pub param: Vec<NameValue>,
}
command!(async CreateLbStickinessPolicy, "createLBStickinessPolicy", "stickinesspolicies" => LbStickinessPolicies);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteLbStickinessPolicy {
    pub id: String,
}
command!(async DeleteLbStickinessPolicy, "deleteLBStickinessPolicy" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListLbStickinessPolicies {
    pub lbruleid: Option<String>,
    pub id: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListLbStickinessPolicies, "listLBStickinessPolicies", "stickinesspolicies" => LbStickinessPolicies);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateNetworkAcl {
    pub protocol: String,
    pub networkid: Option<String>,
    pub aclid: Option<String>,
    pub startport: Option<i32>,
    pub endport: Option<i32>,
    pub icmptype: Option<i32>,
    pub icmpcode: Option<i32>,
    pub cidrlist: Vec<String>,
    /// `Ingress` (the default) or `Egress`
    pub traffictype: Option<String>,
    /// `Allow` or `Deny`
    pub action: Option<String>,
    pub number: Option<i32>,
}
command!(async CreateNetworkAcl, "createNetworkACL", "networkacl" => NetworkAcl);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteNetworkAcl {
    pub id: String,
}
command!(async DeleteNetworkAcl, "deleteNetworkACL" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListNetworkAcls {
    pub id: Option<String>,
    pub aclid: Option<String>,
    pub networkid: Option<String>,
    pub traffictype: Option<String>,
    pub protocol: Option<String>,
    pub action: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListNetworkAcls, "listNetworkACLs", "networkacl" => NetworkAcl);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateNetworkAclList {
    pub name: String,
    pub vpcid: String,
    pub description: Option<String>,
}
command!(async CreateNetworkAclList, "createNetworkACLList", "networkacllist" => NetworkAclList);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteNetworkAclList {
    pub id: String,
}
command!(async DeleteNetworkAclList, "deleteNetworkACLList" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListNetworkAclLists {
    pub id: Option<String>,
    pub name: Option<String>,
    pub vpcid: Option<String>,
    pub networkid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListNetworkAclLists, "listNetworkACLLists", "networkacllist" => NetworkAclList);
