use std::time::Duration;

use marvin_models::models as m;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

use super::{first, wrap_all};
use crate::api::execute;
use crate::api::infra::{
    AddCluster, AddHost, AddNetworkServiceProvider, AddTrafficType, CancelHostMaintenance,
    CancelStorageMaintenance, ChangeServiceForRouter, CreatePhysicalNetwork, CreateStoragePool,
    DedicateGuestVlanRange, DeleteCluster, DeleteHost, DeleteNetworkServiceProvider,
    DeletePhysicalNetwork, DeletePod, DeleteStoragePool, DeleteZone, DestroyRouter,
    EnableStorageMaintenance, FindHostsForMigration, ListAlerts, ListCapacity, ListClusters,
    ListDedicatedGuestVlanRanges, ListHosts, ListHypervisors, ListNetworkServiceProviders,
    ListPhysicalNetworks, ListPods, ListRouters, ListStoragePools, ListZones,
    PrepareHostForMaintenance, RebootRouter, ReleaseDedicatedGuestVlanRange, StartRouter,
    StopRouter, UpdateHost, UpdateNetworkServiceProvider, UpdatePhysicalNetwork, UpdateZone,
};
use crate::builder::{
    infra::{PodBuilder, ZoneBuilder},
    Builder,
};
use crate::client::ApiClient;
use crate::wait::{poll_until, Poll, PollPolicy};
use crate::{MarvinError, Result};

/// Time given to a host or a storage pool to settle in maintenance before
/// it is deleted
pub const MAINTENANCE_SETTLE_DELAY: Duration = Duration::from_secs(30);

/// `listHosts` checks made while a new host is not yet up
const HOST_UP_ATTEMPTS: u32 = 3;

resource!(Zone(m::Zone));

impl Zone {
    #[instrument(skip_all)]
    pub async fn create(client: &dyn ApiClient, builder: ZoneBuilder) -> Result<Zone> {
        let zone = execute(client, &builder.try_build()?).await?;
        info!("Created zone {}", zone.id);
        Ok(Zone(zone))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteZone {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    /// `cmd.id` is replaced with the id of this zone
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn update(&self, client: &dyn ApiClient, cmd: UpdateZone) -> Result<Zone> {
        let cmd = UpdateZone {
            id: self.id.clone(),
            ..cmd
        };
        Ok(Zone(execute(client, &cmd).await?))
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListZones) -> Result<Vec<Zone>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }

    pub fn is_basic(&self) -> bool {
        self.networktype
            .as_deref()
            .map_or(false, |kind| kind.eq_ignore_ascii_case("basic"))
    }

    pub fn has_security_groups(&self) -> bool {
        self.securitygroupsenabled.unwrap_or(false)
    }

    pub fn has_local_storage(&self) -> bool {
        self.localstorageenabled.unwrap_or(false)
    }
}

resource!(Pod(m::Pod));

impl Pod {
    #[instrument(skip_all)]
    pub async fn create(client: &dyn ApiClient, builder: PodBuilder) -> Result<Pod> {
        let pod = execute(client, &builder.try_build()?).await?;
        info!("Created pod {}", pod.id);
        Ok(Pod(pod))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeletePod {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListPods) -> Result<Vec<Pod>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(Cluster(m::Cluster));

impl Cluster {
    #[instrument(skip_all, fields(name = %cmd.clustername))]
    pub async fn create(client: &dyn ApiClient, cmd: &AddCluster) -> Result<Cluster> {
        let cluster = first(execute(client, cmd).await?, "cluster")?;
        info!("Added cluster {}", cluster.id);
        Ok(Cluster(cluster))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteCluster {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListClusters) -> Result<Vec<Cluster>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(Host(m::Host));

impl Host {
    pub fn is_up(&self) -> bool {
        self.state
            .as_deref()
            .map_or(false, |state| state.eq_ignore_ascii_case("up"))
    }

    /// Adds a host and waits for it to be up, checking `listHosts` a few
    /// times when `addHost` answers with a host still connecting.
    #[instrument(skip_all, fields(url = %cmd.url))]
    pub async fn create(client: &dyn ApiClient, cmd: &AddHost) -> Result<Host> {
        let host = Host(first(execute(client, cmd).await?, "host")?);
        if host.is_up() {
            info!("Added host {}", host.id);
            return Ok(host);
        }

        debug!("Host {} is {:?}, waiting for it", host.id, host.state);
        let policy = PollPolicy::new(HOST_UP_ATTEMPTS, client.timeouts().async_poll_interval);
        let resource = format!("host {}", host.id);
        poll_until(policy, &resource, "Up", || async {
            let hosts = execute(
                client,
                &ListHosts {
                    id: Some(host.id.clone()),
                    ..Default::default()
                },
            )
            .await?;
            Ok(match hosts.into_iter().next().map(Host) {
                Some(listed) if listed.is_up() => Poll::Ready(listed),
                _ => Poll::Pending,
            })
        })
        .await
    }

    /// Puts the host in maintenance then deletes it
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        self.delete_after(client, MAINTENANCE_SETTLE_DELAY).await
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete_after(&self, client: &dyn ApiClient, settle: Duration) -> Result<()> {
        self.enable_maintenance(client).await?;
        sleep(settle).await;
        execute(
            client,
            &DeleteHost {
                id: self.id.clone(),
                ..Default::default()
            },
        )
        .await?;
        info!("Deleted host");
        Ok(())
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn enable_maintenance(&self, client: &dyn ApiClient) -> Result<Host> {
        let host = execute(
            client,
            &PrepareHostForMaintenance {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(Host(host))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn cancel_maintenance(&self, client: &dyn ApiClient) -> Result<Host> {
        let host = execute(
            client,
            &CancelHostMaintenance {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(Host(host))
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListHosts) -> Result<Vec<Host>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }

    /// Hosts a virtual machine can be migrated to
    pub async fn list_for_migration(
        client: &dyn ApiClient,
        virtualmachineid: &str,
    ) -> Result<Vec<Host>> {
        let cmd = FindHostsForMigration {
            virtualmachineid: virtualmachineid.to_string(),
            ..Default::default()
        };
        Ok(wrap_all(execute(client, &cmd).await?))
    }

    /// `cmd.id` is replaced with the id of this host
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn update(&self, client: &dyn ApiClient, cmd: UpdateHost) -> Result<Host> {
        let cmd = UpdateHost {
            id: self.id.clone(),
            ..cmd
        };
        Ok(Host(execute(client, &cmd).await?))
    }
}

resource!(StoragePool(m::StoragePool));

impl StoragePool {
    #[instrument(skip_all, fields(name = %cmd.name))]
    pub async fn create(client: &dyn ApiClient, cmd: &CreateStoragePool) -> Result<StoragePool> {
        let pool = execute(client, cmd).await?;
        info!("Created storage pool {}", pool.id);
        Ok(StoragePool(pool))
    }

    /// Puts the pool in maintenance then deletes it
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        self.delete_after(client, MAINTENANCE_SETTLE_DELAY).await
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete_after(&self, client: &dyn ApiClient, settle: Duration) -> Result<()> {
        self.enable_maintenance(client).await?;
        sleep(settle).await;
        let deleted = execute(
            client,
            &DeleteStoragePool {
                id: self.id.clone(),
                ..Default::default()
            },
        )
        .await?;
        if !deleted.is_success() {
            warn!("deleteStoragePool did not report success");
            return Err(MarvinError::UnexpectedState {
                resource: format!("storage pool {}", self.id),
                state: "not deleted".to_string(),
            });
        }
        info!("Deleted storage pool");
        Ok(())
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn enable_maintenance(&self, client: &dyn ApiClient) -> Result<StoragePool> {
        let pool = execute(
            client,
            &EnableStorageMaintenance {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(StoragePool(pool))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn cancel_maintenance(&self, client: &dyn ApiClient) -> Result<StoragePool> {
        let pool = execute(
            client,
            &CancelStorageMaintenance {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(StoragePool(pool))
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListStoragePools) -> Result<Vec<StoragePool>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(Hypervisor(m::Hypervisor));

impl Hypervisor {
    pub async fn list(client: &dyn ApiClient, zoneid: Option<&str>) -> Result<Vec<Hypervisor>> {
        let cmd = ListHypervisors {
            zoneid: zoneid.map(str::to_string),
        };
        Ok(wrap_all(execute(client, &cmd).await?))
    }
}

resource!(PhysicalNetwork(m::PhysicalNetwork));

impl PhysicalNetwork {
    #[instrument(skip_all, fields(name = %cmd.name, zone = %cmd.zoneid))]
    pub async fn create(
        client: &dyn ApiClient,
        cmd: &CreatePhysicalNetwork,
    ) -> Result<PhysicalNetwork> {
        let network = execute(client, cmd).await?;
        info!("Created physical network {}", network.id);
        Ok(PhysicalNetwork(network))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeletePhysicalNetwork {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    /// `cmd.id` is replaced with the id of this network
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn update(
        &self,
        client: &dyn ApiClient,
        cmd: UpdatePhysicalNetwork,
    ) -> Result<PhysicalNetwork> {
        let cmd = UpdatePhysicalNetwork {
            id: self.id.clone(),
            ..cmd
        };
        Ok(PhysicalNetwork(execute(client, &cmd).await?))
    }

    /// Carries `traffictype` (`Guest`, `Public`, `Management`, `Storage`)
    #[instrument(skip_all, fields(id = %self.id, traffic = %traffictype))]
    pub async fn add_traffic_type(
        &self,
        client: &dyn ApiClient,
        traffictype: &str,
    ) -> Result<m::TrafficType> {
        let cmd = AddTrafficType {
            physicalnetworkid: self.id.clone(),
            traffictype: traffictype.to_string(),
            ..Default::default()
        };
        Ok(execute(client, &cmd).await?)
    }

    /// Sets a range of guest VLANs of this network aside for an account
    #[instrument(skip_all, fields(id = %self.id, range = %vlanrange))]
    pub async fn dedicate(
        &self,
        client: &dyn ApiClient,
        vlanrange: &str,
        account: Option<&str>,
        domainid: Option<&str>,
    ) -> Result<GuestVlanRange> {
        let cmd = DedicateGuestVlanRange {
            vlanrange: vlanrange.to_string(),
            physicalnetworkid: self.id.clone(),
            account: account.map(str::to_string),
            domainid: domainid.map(str::to_string),
            projectid: None,
        };
        Ok(GuestVlanRange(execute(client, &cmd).await?))
    }

    pub async fn list(
        client: &dyn ApiClient,
        cmd: &ListPhysicalNetworks,
    ) -> Result<Vec<PhysicalNetwork>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(GuestVlanRange(m::GuestVlanRange));

impl GuestVlanRange {
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn release(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &ReleaseDedicatedGuestVlanRange {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(
        client: &dyn ApiClient,
        cmd: &ListDedicatedGuestVlanRanges,
    ) -> Result<Vec<GuestVlanRange>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(NetworkServiceProvider(m::NetworkServiceProvider));

impl NetworkServiceProvider {
    pub const ENABLED: &'static str = "Enabled";
    pub const DISABLED: &'static str = "Disabled";

    #[instrument(skip_all, fields(name = %cmd.name))]
    pub async fn add(
        client: &dyn ApiClient,
        cmd: &AddNetworkServiceProvider,
    ) -> Result<NetworkServiceProvider> {
        let provider = execute(client, cmd).await?;
        info!("Added network service provider {}", provider.id);
        Ok(NetworkServiceProvider(provider))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteNetworkServiceProvider {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    /// `cmd.id` is replaced with the id of this provider
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn update(
        &self,
        client: &dyn ApiClient,
        cmd: UpdateNetworkServiceProvider,
    ) -> Result<NetworkServiceProvider> {
        let cmd = UpdateNetworkServiceProvider {
            id: self.id.clone(),
            ..cmd
        };
        Ok(NetworkServiceProvider(execute(client, &cmd).await?))
    }

    pub async fn enable(&self, client: &dyn ApiClient) -> Result<NetworkServiceProvider> {
        let cmd = UpdateNetworkServiceProvider {
            state: Some(NetworkServiceProvider::ENABLED.to_string()),
            ..Default::default()
        };
        self.update(client, cmd).await
    }

    pub async fn list(
        client: &dyn ApiClient,
        cmd: &ListNetworkServiceProviders,
    ) -> Result<Vec<NetworkServiceProvider>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(
    /// Virtual router of a guest network or a VPC
    Router(m::Router)
);

impl Router {
    pub const RUNNING: &'static str = "Running";
    pub const STOPPED: &'static str = "Stopped";

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn start(&self, client: &dyn ApiClient) -> Result<Router> {
        let cmd = StartRouter {
            id: self.id.clone(),
        };
        Ok(Router(execute(client, &cmd).await?))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn stop(&self, client: &dyn ApiClient, forced: bool) -> Result<Router> {
        let cmd = StopRouter {
            id: self.id.clone(),
            forced: forced.then_some(true),
        };
        Ok(Router(execute(client, &cmd).await?))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn reboot(&self, client: &dyn ApiClient) -> Result<Router> {
        let cmd = RebootRouter {
            id: self.id.clone(),
        };
        Ok(Router(execute(client, &cmd).await?))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn destroy(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DestroyRouter {
                id: self.id.clone(),
            },
        )
        .await?;
        info!("Destroyed router");
        Ok(())
    }

    /// The router has to be stopped
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn change_service_offering(
        &self,
        client: &dyn ApiClient,
        serviceofferingid: &str,
    ) -> Result<Router> {
        let cmd = ChangeServiceForRouter {
            id: self.id.clone(),
            serviceofferingid: serviceofferingid.to_string(),
        };
        Ok(Router(execute(client, &cmd).await?))
    }

    pub fn is_running(&self) -> bool {
        self.state.as_deref() == Some(Router::RUNNING)
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListRouters) -> Result<Vec<Router>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

/// Capacity usage reports
#[derive(Debug)]
pub struct Capacities;

impl Capacities {
    pub async fn list(client: &dyn ApiClient, cmd: &ListCapacity) -> Result<Vec<m::Capacity>> {
        Ok(execute(client, cmd).await?)
    }
}

/// Alerts raised by the management server
#[derive(Debug)]
pub struct Alerts;

impl Alerts {
    pub async fn list(client: &dyn ApiClient, cmd: &ListAlerts) -> Result<Vec<m::Alert>> {
        Ok(execute(client, cmd).await?)
    }
}

/// The zone tests run in: the first one listed
pub async fn current_zone(client: &dyn ApiClient) -> Result<Zone> {
    let zones = Zone::list(client, &ListZones::default()).await?;
    zones
        .into_iter()
        .next()
        .ok_or_else(|| MarvinError::NotFound("zone".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApiClient;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn add_host() -> AddHost {
        AddHost {
            url: "http://sim/c0/h0".to_string(),
            hypervisor: "Simulator".to_string(),
            zoneid: "z1".to_string(),
            podid: Some("p1".to_string()),
            clusterid: Some("c1".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn host_up_right_away() {
        let client = FakeApiClient::new();
        client.respond("addHost", json!({"host": [{"id": "h1", "state": "Up"}]}));

        let host = Host::create(&client, &add_host()).await.unwrap();
        assert_eq!(host.id, "h1");
        assert_eq!(client.commands(), vec!["addHost"]);
    }

    #[tokio::test]
    async fn host_comes_up_on_second_check() {
        let client = FakeApiClient::new();
        client
            .respond("addHost", json!({"host": [{"id": "h1", "state": "Connecting"}]}))
            .respond("listHosts", json!({"host": [{"id": "h1", "state": "Connecting"}]}))
            .respond("listHosts", json!({"host": [{"id": "h1", "state": "Up"}]}));

        let host = Host::create(&client, &add_host()).await.unwrap();
        assert!(host.is_up());
        assert_eq!(client.requests_for("listHosts")[0].params.get("id"), Some("h1"));
    }

    #[tokio::test]
    async fn host_never_up() {
        let client = FakeApiClient::new();
        client
            .respond("addHost", json!({"host": [{"id": "h1", "state": "Alert"}]}))
            .respond_always("listHosts", json!({"host": [{"id": "h1", "state": "Alert"}]}));

        let err = Host::create(&client, &add_host()).await.unwrap_err();
        assert!(matches!(err, MarvinError::StateTimeout { .. }));
        assert_eq!(client.requests_for("listHosts").len(), 3);
    }

    #[tokio::test]
    async fn host_delete_goes_through_maintenance() {
        let client = FakeApiClient::new();
        client
            .respond(
                "prepareHostForMaintenance",
                json!({"host": {"id": "h1", "resourcestate": "PrepareForMaintenance"}}),
            )
            .respond("deleteHost", json!({"success": true}));
        let host = Host(m::Host {
            id: "h1".to_string(),
            ..Default::default()
        });

        host.delete_after(&client, Duration::ZERO).await.unwrap();
        assert_eq!(
            client.commands(),
            vec!["prepareHostForMaintenance", "deleteHost"]
        );
    }

    #[tokio::test]
    async fn pool_delete_goes_through_maintenance() {
        let client = FakeApiClient::new();
        client
            .respond("enableStorageMaintenance", json!({"storagepool": {"id": "sp1"}}))
            .respond("deleteStoragePool", json!({"success": "true"}));
        let pool = StoragePool(m::StoragePool {
            id: "sp1".to_string(),
            ..Default::default()
        });

        pool.delete_after(&client, Duration::ZERO).await.unwrap();
        assert_eq!(
            client.commands(),
            vec!["enableStorageMaintenance", "deleteStoragePool"]
        );
        assert!(client.requests()[0].is_async);
    }

    #[tokio::test]
    async fn pool_delete_reports_refusal() {
        let client = FakeApiClient::new();
        client
            .respond("enableStorageMaintenance", json!({"storagepool": {"id": "sp1"}}))
            .respond(
                "deleteStoragePool",
                json!({"success": false, "displaytext": "pool still in use"}),
            );
        let pool = StoragePool(m::StoragePool {
            id: "sp1".to_string(),
            ..Default::default()
        });

        let err = pool.delete_after(&client, Duration::ZERO).await.unwrap_err();
        assert!(matches!(
            err,
            MarvinError::UnexpectedState { ref resource, .. } if resource == "storage pool sp1"
        ));
    }

    #[tokio::test]
    async fn no_zone() {
        let client = FakeApiClient::new();
        client.respond("listZones", json!({}));
        let err = current_zone(&client).await.unwrap_err();
        assert_eq!(err.to_string(), "No zone found");
    }

    fn physical_network() -> PhysicalNetwork {
        PhysicalNetwork(m::PhysicalNetwork {
            id: "pn1".to_string(),
            zoneid: Some("z1".to_string()),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn physical_network_setup() {
        let client = FakeApiClient::new();
        client
            .respond(
                "createPhysicalNetwork",
                json!({"physicalnetwork": {"id": "pn1", "name": "guest", "state": "Disabled"}}),
            )
            .respond(
                "addTrafficType",
                json!({"traffictype": {"id": "tt1", "traffictype": "Guest", "physicalnetworkid": "pn1"}}),
            )
            .respond(
                "updatePhysicalNetwork",
                json!({"physicalnetwork": {"id": "pn1", "state": "Enabled"}}),
            );

        let network = PhysicalNetwork::create(
            &client,
            &CreatePhysicalNetwork {
                name: "guest".to_string(),
                zoneid: "z1".to_string(),
                isolationmethods: vec!["VLAN".to_string()],
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let traffic = network.add_traffic_type(&client, "Guest").await.unwrap();
        assert_eq!(traffic.traffictype.as_deref(), Some("Guest"));
        let enabled = network
            .update(
                &client,
                UpdatePhysicalNetwork {
                    state: Some("Enabled".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(enabled.state.as_deref(), Some("Enabled"));

        assert_eq!(
            client.commands(),
            vec!["createPhysicalNetwork", "addTrafficType", "updatePhysicalNetwork"]
        );
        assert!(client.requests().iter().all(|r| r.is_async));
        let create = &client.requests()[0].params;
        assert_eq!(create.get("isolationmethods"), Some("VLAN"));
        assert_eq!(client.requests()[2].params.get("id"), Some("pn1"));
    }

    #[tokio::test]
    async fn dedicated_vlan_range_release() {
        let client = FakeApiClient::new();
        client
            .respond(
                "dedicateGuestVlanRange",
                json!({"dedicatedguestvlanrange": {"id": "gv1", "guestvlanrange": "100-110", "account": "admin"}}),
            )
            .respond("releaseDedicatedGuestVlanRange", json!({"success": true}));

        let range = physical_network()
            .dedicate(&client, "100-110", Some("admin"), Some("d1"))
            .await
            .unwrap();
        range.release(&client).await.unwrap();

        let dedicate = &client.requests()[0];
        assert!(!dedicate.is_async);
        assert_eq!(dedicate.params.get("physicalnetworkid"), Some("pn1"));
        assert_eq!(dedicate.params.get("vlanrange"), Some("100-110"));
        assert_eq!(client.requests()[1].params.get("id"), Some("gv1"));
    }

    #[tokio::test]
    async fn enable_service_provider() {
        let client = FakeApiClient::new();
        client.respond(
            "updateNetworkServiceProvider",
            json!({"networkserviceprovider": {"id": "nsp1", "state": "Enabled"}}),
        );
        let provider = NetworkServiceProvider(m::NetworkServiceProvider {
            id: "nsp1".to_string(),
            state: Some("Disabled".to_string()),
            ..Default::default()
        });

        let enabled = provider.enable(&client).await.unwrap();
        assert_eq!(enabled.state.as_deref(), Some(NetworkServiceProvider::ENABLED));
        let params = &client.requests()[0].params;
        assert_eq!(params.get("id"), Some("nsp1"));
        assert_eq!(params.get("state"), Some("Enabled"));
        assert_eq!(params.get("servicelist"), None);
    }

    #[tokio::test]
    async fn router_stop_and_resize() {
        let client = FakeApiClient::new();
        client
            .respond("stopRouter", json!({"router": {"id": "r1", "state": "Stopped"}}))
            .respond("changeServiceForRouter", json!({"router": {"id": "r1", "serviceofferingid": "so2"}}))
            .respond("startRouter", json!({"router": {"id": "r1", "state": "Running"}}))
            .respond("destroyRouter", json!({}));
        let router = Router(m::Router {
            id: "r1".to_string(),
            state: Some(Router::RUNNING.to_string()),
            ..Default::default()
        });

        let stopped = router.stop(&client, true).await.unwrap();
        assert!(!stopped.is_running());
        stopped.change_service_offering(&client, "so2").await.unwrap();
        let started = stopped.start(&client).await.unwrap();
        assert!(started.is_running());
        started.destroy(&client).await.unwrap();

        assert_eq!(client.requests()[0].params.get("forced"), Some("true"));
        assert!(!client.requests()[1].is_async);
        assert_eq!(
            client.requests()[1].params.get("serviceofferingid"),
            Some("so2")
        );
    }

    #[tokio::test]
    async fn capacity_and_alerts() {
        let client = FakeApiClient::new();
        client
            .respond(
                "listCapacity",
                json!({"count": 1, "capacity": [{"type": 0, "zoneid": "z1", "capacityused": 1, "capacitytotal": 4}]}),
            )
            .respond("listAlerts", json!({}));

        let capacity = Capacities::list(
            &client,
            &ListCapacity {
                zoneid: Some("z1".to_string()),
                kind: Some(0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(capacity[0].capacitytotal, Some(4));
        assert!(Alerts::list(&client, &ListAlerts::default())
            .await
            .unwrap()
            .is_empty());
        assert_eq!(client.requests()[0].params.get("type"), Some("0"));
    }

    #[test]
    fn zone_flags() {
        let zone = Zone(m::Zone {
            id: "z1".to_string(),
            networktype: Some("Basic".to_string()),
            securitygroupsenabled: Some(true),
            ..Default::default()
        });
        assert!(zone.is_basic());
        assert!(zone.has_security_groups());
        assert!(!zone.has_local_storage());
    }
}
