use marvin_models::models as m;
use tracing::{debug, info, instrument};

use super::wrap_all;
use crate::api::execute;
use super::compute::VirtualMachine;
use crate::api::network::{
    AssignToLoadBalancerRule, AssociateIpAddress, AuthorizeSecurityGroupEgress,
    AuthorizeSecurityGroupIngress, CreateEgressFirewallRule, CreateFirewallRule,
    CreateLbStickinessPolicy, CreateLoadBalancerRule, CreateNetworkAcl, CreateNetworkAclList,
    CreatePortForwardingRule, CreateSecurityGroup, CreateVpc, DeleteEgressFirewallRule,
    DeleteFirewallRule, DeleteLbStickinessPolicy, DeleteLoadBalancerRule, DeleteNetwork,
    DeleteNetworkAcl, DeleteNetworkAclList, DeletePortForwardingRule, DeleteSecurityGroup,
    DeleteVpc, DisableStaticNat, DisassociateIpAddress, EnableStaticNat, ListEgressFirewallRules,
    ListFirewallRules, ListLbStickinessPolicies, ListLoadBalancerRuleInstances,
    ListLoadBalancerRules, ListNetworkAclLists, ListNetworkAcls, ListNetworks,
    ListPortForwardingRules, ListPublicIpAddresses, ListSecurityGroups, ListVpcs,
    LoadBalancerMembers, NameValue, RemoveFromLoadBalancerRule, RestartNetwork, RestartVpc,
    RevokeSecurityGroupEgress, RevokeSecurityGroupIngress, SecurityGroupRuleParams,
    UpdateLoadBalancerRule, UpdateNetwork, UpdateVpc, VmIdIp,
};
use crate::builder::{network::NetworkBuilder, Builder};
use crate::client::ApiClient;
use crate::naming::with_random_suffix;
use crate::Result;

resource!(Network(m::Network));

impl Network {
    #[instrument(skip_all)]
    pub async fn create(client: &dyn ApiClient, builder: NetworkBuilder) -> Result<Network> {
        let cmd = builder.try_build()?;
        let network = execute(client, &cmd).await?;
        info!("Created network {} ({})", cmd.name, network.id);
        Ok(Network(network))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteNetwork {
                id: self.id.clone(),
                forced: None,
            },
        )
        .await?;
        Ok(())
    }

    /// `cmd.id` is replaced with the id of this network
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn update(&self, client: &dyn ApiClient, cmd: UpdateNetwork) -> Result<Network> {
        let cmd = UpdateNetwork {
            id: self.id.clone(),
            ..cmd
        };
        Ok(Network(execute(client, &cmd).await?))
    }

    /// With `cleanup`, the network elements are destroyed and recreated
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn restart(&self, client: &dyn ApiClient, cleanup: bool) -> Result<()> {
        execute(
            client,
            &RestartNetwork {
                id: self.id.clone(),
                cleanup: Some(cleanup),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListNetworks) -> Result<Vec<Network>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(Vpc(m::Vpc));

impl Vpc {
    /// Name and display text get a random suffix
    #[instrument(skip_all, fields(name = %cmd.name))]
    pub async fn create(client: &dyn ApiClient, cmd: CreateVpc) -> Result<Vpc> {
        let cmd = CreateVpc {
            name: with_random_suffix(&cmd.name),
            displaytext: with_random_suffix(&cmd.displaytext),
            ..cmd
        };
        let vpc = execute(client, &cmd).await?;
        info!("Created VPC {} ({})", cmd.name, vpc.id);
        Ok(Vpc(vpc))
    }

    /// `cmd.id` is replaced with the id of this VPC
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn update(&self, client: &dyn ApiClient, cmd: UpdateVpc) -> Result<Vpc> {
        let cmd = UpdateVpc {
            id: self.id.clone(),
            ..cmd
        };
        Ok(Vpc(execute(client, &cmd).await?))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteVpc {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn restart(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &RestartVpc {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListVpcs) -> Result<Vec<Vpc>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(PublicIpAddress(m::PublicIpAddress));

impl PublicIpAddress {
    /// Acquires a public address
    #[instrument(skip_all)]
    pub async fn create(
        client: &dyn ApiClient,
        cmd: &AssociateIpAddress,
    ) -> Result<PublicIpAddress> {
        let ip = execute(client, cmd).await?;
        info!("Associated {:?} ({})", ip.ipaddress, ip.id);
        Ok(PublicIpAddress(ip))
    }

    /// Releases the address
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DisassociateIpAddress {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(
        client: &dyn ApiClient,
        cmd: &ListPublicIpAddresses,
    ) -> Result<Vec<PublicIpAddress>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(
    /// Ingress rule on a public address
    FirewallRule(m::FirewallRule)
);

impl FirewallRule {
    #[instrument(skip_all, fields(ip = %cmd.ipaddressid))]
    pub async fn create(client: &dyn ApiClient, cmd: &CreateFirewallRule) -> Result<FirewallRule> {
        Ok(FirewallRule(execute(client, cmd).await?))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteFirewallRule {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListFirewallRules) -> Result<Vec<FirewallRule>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(
    /// Rule on the traffic leaving a guest network
    EgressFirewallRule(m::FirewallRule)
);

impl EgressFirewallRule {
    #[instrument(skip_all, fields(network = %cmd.networkid))]
    pub async fn create(
        client: &dyn ApiClient,
        cmd: &CreateEgressFirewallRule,
    ) -> Result<EgressFirewallRule> {
        Ok(EgressFirewallRule(execute(client, cmd).await?))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteEgressFirewallRule {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(
        client: &dyn ApiClient,
        cmd: &ListEgressFirewallRules,
    ) -> Result<Vec<EgressFirewallRule>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(
    /// Port forwarding rule
    NatRule(m::PortForwardingRule)
);

impl NatRule {
    #[instrument(skip_all, fields(vm = %cmd.virtualmachineid))]
    pub async fn create(client: &dyn ApiClient, cmd: &CreatePortForwardingRule) -> Result<NatRule> {
        let rule = execute(client, cmd).await?;
        debug!(
            "Forwarding {:?}:{} to port {}",
            rule.ipaddress, cmd.publicport, cmd.privateport
        );
        Ok(NatRule(rule))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeletePortForwardingRule {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListPortForwardingRules) -> Result<Vec<NatRule>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

/// One to one NAT between a public address and an instance
#[derive(Debug, Clone, Copy)]
pub struct StaticNat;

impl StaticNat {
    #[instrument(skip_all, fields(ip = %cmd.ipaddressid))]
    pub async fn enable(client: &dyn ApiClient, cmd: &EnableStaticNat) -> Result<()> {
        execute(client, cmd).await?;
        Ok(())
    }

    #[instrument(skip(client))]
    pub async fn disable(client: &dyn ApiClient, ipaddressid: &str) -> Result<()> {
        execute(
            client,
            &DisableStaticNat {
                ipaddressid: ipaddressid.to_string(),
            },
        )
        .await?;
        Ok(())
    }
}

resource!(SecurityGroup(m::SecurityGroup));

/// ICMP type and code meaning "any"
const ANY_ICMP: i32 = -1;

impl SecurityGroup {
    /// The name gets a random suffix
    pub async fn create(client: &dyn ApiClient, cmd: CreateSecurityGroup) -> Result<SecurityGroup> {
        let cmd = CreateSecurityGroup {
            name: with_random_suffix(&cmd.name),
            ..cmd
        };
        SecurityGroup::create_exact(client, &cmd).await
    }

    /// Creates the group with the name as given
    #[instrument(skip_all, fields(name = %cmd.name))]
    pub async fn create_exact(
        client: &dyn ApiClient,
        cmd: &CreateSecurityGroup,
    ) -> Result<SecurityGroup> {
        let group = execute(client, cmd).await?;
        info!("Created security group {}", group.id);
        Ok(SecurityGroup(group))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteSecurityGroup {
                id: Some(self.id.clone()),
                ..Default::default()
            },
        )
        .await?;
        Ok(())
    }

    /// Rule parameters targeting this group. ICMP rules default to any type
    /// and code, and never carry ports.
    fn rule(&self, rule: SecurityGroupRuleParams) -> SecurityGroupRuleParams {
        let mut rule = SecurityGroupRuleParams {
            securitygroupid: Some(self.id.clone()),
            securitygroupname: None,
            ..rule
        };
        if rule.protocol.eq_ignore_ascii_case("icmp") {
            rule.icmptype = rule.icmptype.or(Some(ANY_ICMP));
            rule.icmpcode = rule.icmpcode.or(Some(ANY_ICMP));
            rule.startport = None;
            rule.endport = None;
        }
        rule
    }

    #[instrument(skip_all, fields(id = %self.id, protocol = %rule.protocol))]
    pub async fn authorize_ingress(
        &self,
        client: &dyn ApiClient,
        rule: SecurityGroupRuleParams,
    ) -> Result<SecurityGroup> {
        let cmd = AuthorizeSecurityGroupIngress(self.rule(rule));
        Ok(SecurityGroup(execute(client, &cmd).await?))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn revoke_ingress(&self, client: &dyn ApiClient, ruleid: &str) -> Result<()> {
        execute(
            client,
            &RevokeSecurityGroupIngress {
                id: ruleid.to_string(),
            },
        )
        .await?;
        Ok(())
    }

    #[instrument(skip_all, fields(id = %self.id, protocol = %rule.protocol))]
    pub async fn authorize_egress(
        &self,
        client: &dyn ApiClient,
        rule: SecurityGroupRuleParams,
    ) -> Result<SecurityGroup> {
        let cmd = AuthorizeSecurityGroupEgress(self.rule(rule));
        Ok(SecurityGroup(execute(client, &cmd).await?))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn revoke_egress(&self, client: &dyn ApiClient, ruleid: &str) -> Result<()> {
        execute(
            client,
            &RevokeSecurityGroupEgress {
                id: ruleid.to_string(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListSecurityGroups) -> Result<Vec<SecurityGroup>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(LoadBalancerRule(m::LoadBalancerRule));

impl LoadBalancerRule {
    #[instrument(skip_all, fields(name = %cmd.name))]
    pub async fn create(
        client: &dyn ApiClient,
        cmd: &CreateLoadBalancerRule,
    ) -> Result<LoadBalancerRule> {
        let rule = execute(client, cmd).await?;
        info!(
            "Created load balancer rule {} ({}:{} to {})",
            rule.id, cmd.algorithm, cmd.publicport, cmd.privateport
        );
        Ok(LoadBalancerRule(rule))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteLoadBalancerRule {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    fn members(&self, vms: &[&VirtualMachine], vmidipmap: Vec<VmIdIp>) -> LoadBalancerMembers {
        LoadBalancerMembers {
            id: self.id.clone(),
            virtualmachineids: vms.iter().map(|vm| vm.id.clone()).collect(),
            vmidipmap,
        }
    }

    /// Puts instances behind the rule, by id or by one of their guest
    /// addresses
    #[instrument(skip_all, fields(id = %self.id, count = vms.len() + vmidipmap.len()))]
    pub async fn assign(
        &self,
        client: &dyn ApiClient,
        vms: &[&VirtualMachine],
        vmidipmap: Vec<VmIdIp>,
    ) -> Result<()> {
        let cmd = AssignToLoadBalancerRule(self.members(vms, vmidipmap));
        execute(client, &cmd).await?;
        Ok(())
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn remove(
        &self,
        client: &dyn ApiClient,
        vms: &[&VirtualMachine],
        vmidipmap: Vec<VmIdIp>,
    ) -> Result<()> {
        let cmd = RemoveFromLoadBalancerRule(self.members(vms, vmidipmap));
        execute(client, &cmd).await?;
        Ok(())
    }

    /// `cmd.id` is replaced with the id of this rule
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn update(
        &self,
        client: &dyn ApiClient,
        cmd: UpdateLoadBalancerRule,
    ) -> Result<LoadBalancerRule> {
        let cmd = UpdateLoadBalancerRule {
            id: self.id.clone(),
            ..cmd
        };
        Ok(LoadBalancerRule(execute(client, &cmd).await?))
    }

    /// Sticks clients to an instance, `params` depend on the method
    #[instrument(skip_all, fields(id = %self.id, method = %methodname))]
    pub async fn create_sticky(
        &self,
        client: &dyn ApiClient,
        methodname: &str,
        name: &str,
        description: Option<&str>,
        params: &[(&str, &str)],
    ) -> Result<m::LbStickinessPolicies> {
        let cmd = CreateLbStickinessPolicy {
            lbruleid: self.id.clone(),
            methodname: methodname.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            param: params
                .iter()
                .map(|(name, value)| NameValue {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        };
        Ok(execute(client, &cmd).await?)
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete_sticky(&self, client: &dyn ApiClient, policyid: &str) -> Result<()> {
        execute(
            client,
            &DeleteLbStickinessPolicy {
                id: policyid.to_string(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list_sticky_policies(
        client: &dyn ApiClient,
        cmd: &ListLbStickinessPolicies,
    ) -> Result<Vec<m::LbStickinessPolicies>> {
        Ok(execute(client, cmd).await?)
    }

    /// Instances behind the rule, or the ones that can be added when
    /// `applied` is `false`
    pub async fn instances(
        &self,
        client: &dyn ApiClient,
        applied: Option<bool>,
    ) -> Result<Vec<VirtualMachine>> {
        let cmd = ListLoadBalancerRuleInstances {
            id: self.id.clone(),
            applied,
            lbvmips: Some(false),
            keyword: None,
        };
        Ok(wrap_all(execute(client, &cmd).await?))
    }

    pub async fn list(
        client: &dyn ApiClient,
        cmd: &ListLoadBalancerRules,
    ) -> Result<Vec<LoadBalancerRule>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(
    /// Rule of a VPC network ACL list
    NetworkAcl(m::NetworkAcl)
);

impl NetworkAcl {
    /// Rules allow traffic unless told otherwise. ICMP rules match any type
    /// and code unless given.
    #[instrument(skip_all, fields(protocol = %cmd.protocol))]
    pub async fn create(client: &dyn ApiClient, cmd: CreateNetworkAcl) -> Result<NetworkAcl> {
        let mut cmd = CreateNetworkAcl {
            action: cmd.action.or_else(|| Some("Allow".to_string())),
            ..cmd
        };
        if cmd.protocol.eq_ignore_ascii_case("icmp") {
            cmd.icmptype = cmd.icmptype.or(Some(ANY_ICMP));
            cmd.icmpcode = cmd.icmpcode.or(Some(ANY_ICMP));
        }
        let acl = execute(client, &cmd).await?;
        debug!("Created ACL rule {} ({:?})", acl.id, acl.traffictype);
        Ok(NetworkAcl(acl))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteNetworkAcl {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListNetworkAcls) -> Result<Vec<NetworkAcl>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(NetworkAclList(m::NetworkAclList));

impl NetworkAclList {
    #[instrument(skip_all, fields(name = %cmd.name, vpc = %cmd.vpcid))]
    pub async fn create(client: &dyn ApiClient, cmd: &CreateNetworkAclList) -> Result<NetworkAclList> {
        let list = execute(client, cmd).await?;
        info!("Created ACL list {}", list.id);
        Ok(NetworkAclList(list))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteNetworkAclList {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    /// Rules of this list
    pub async fn rules(&self, client: &dyn ApiClient) -> Result<Vec<NetworkAcl>> {
        NetworkAcl::list(
            client,
            &ListNetworkAcls {
                aclid: Some(self.id.clone()),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListNetworkAclLists) -> Result<Vec<NetworkAclList>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}
