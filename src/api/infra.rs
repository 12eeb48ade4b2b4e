//! Zones, pods, clusters, hosts, primary storage, physical networks and
//! their system VMs
use marvin_models::models::{
    Alert, Capacity, Cluster, GuestVlanRange, Host, Hypervisor, NetworkServiceProvider,
    PhysicalNetwork, Pod, Router, StoragePool, Success, TrafficType, Zone,
};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateZone {
    pub dns1: String,
    pub internaldns1: String,
    pub name: String,
    /// `Basic` or `Advanced`
    pub networktype: String,
    pub dns2: Option<String>,
    pub internaldns2: Option<String>,
    pub domainid: Option<String>,
    pub securitygroupenabled: Option<bool>,
    pub localstorageenabled: Option<bool>,
    pub guestcidraddress: Option<String>,
}
command!(sync CreateZone, "createZone", "zone" => Zone);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteZone {
    pub id: String,
}
command!(sync DeleteZone, "deleteZone" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateZone {
    pub id: String,
    pub name: Option<String>,
    pub dns1: Option<String>,
    pub dns2: Option<String>,
    pub internaldns1: Option<String>,
    pub internaldns2: Option<String>,
    /// `Enabled` or `Disabled`
    pub allocationstate: Option<String>,
    pub domain: Option<String>,
    pub localstorageenabled: Option<bool>,
}
command!(sync UpdateZone, "updateZone", "zone" => Zone);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListZones {
    pub id: Option<String>,
    pub name: Option<String>,
    pub available: Option<bool>,
    pub domainid: Option<String>,
    pub account: Option<String>,
    pub networktype: Option<String>,
    pub showcapacities: Option<bool>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListZones, "listZones", "zone" => Zone);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreatePod {
    pub name: String,
    pub zoneid: String,
    pub gateway: String,
    pub netmask: String,
    pub startip: String,
    pub endip: Option<String>,
    pub allocationstate: Option<String>,
}
command!(sync CreatePod, "createPod", "pod" => Pod);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeletePod {
    pub id: String,
}
command!(sync DeletePod, "deletePod" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListPods {
    pub id: Option<String>,
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub allocationstate: Option<String>,
    pub keyword: Option<String>,
}
command!(list ListPods, "listPods", "pod" => Pod);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddCluster {
    pub clustername: String,
    /// `CloudManaged` or `ExternalManaged`
    pub clustertype: String,
    pub hypervisor: String,
    pub zoneid: String,
    pub podid: String,
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub allocationstate: Option<String>,
}
command!(collection AddCluster, "addCluster", "cluster" => Cluster);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteCluster {
    pub id: String,
}
command!(sync DeleteCluster, "deleteCluster" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListClusters {
    pub id: Option<String>,
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub podid: Option<String>,
    pub hypervisor: Option<String>,
    pub clustertype: Option<String>,
    pub allocationstate: Option<String>,
    pub managedstate: Option<String>,
    pub keyword: Option<String>,
}
command!(list ListClusters, "listClusters", "cluster" => Cluster);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddHost {
    pub url: String,
    pub hypervisor: String,
    pub zoneid: String,
    pub podid: Option<String>,
    pub clusterid: Option<String>,
    pub clustername: Option<String>,
    pub clustertype: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub hosttags: Option<Vec<String>>,
    pub allocationstate: Option<String>,
}
command!(collection AddHost, "addHost", "host" => Host);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PrepareHostForMaintenance {
    pub id: String,
}
command!(async PrepareHostForMaintenance, "prepareHostForMaintenance", "host" => Host);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CancelHostMaintenance {
    pub id: String,
}
command!(async CancelHostMaintenance, "cancelHostMaintenance", "host" => Host);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteHost {
    pub id: String,
    pub forced: Option<bool>,
    pub forcedestroylocalstorage: Option<bool>,
}
command!(sync DeleteHost, "deleteHost" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListHosts {
    pub id: Option<String>,
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub podid: Option<String>,
    pub clusterid: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub state: Option<String>,
    pub resourcestate: Option<String>,
    pub hypervisor: Option<String>,
    pub virtualmachineid: Option<String>,
    pub keyword: Option<String>,
}
command!(list ListHosts, "listHosts", "host" => Host);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FindHostsForMigration {
    pub virtualmachineid: String,
    pub keyword: Option<String>,
}
command!(list FindHostsForMigration, "findHostsForMigration", "host" => Host);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateHost {
    pub id: String,
    pub allocationstate: Option<String>,
    pub hosttags: Option<Vec<String>>,
    pub oscategoryid: Option<String>,
    pub url: Option<String>,
}
command!(sync UpdateHost, "updateHost", "host" => Host);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateStoragePool {
    pub name: String,
    pub url: String,
    pub zoneid: String,
    pub podid: Option<String>,
    pub clusterid: Option<String>,
    /// `cluster` or `zone`
    pub scope: Option<String>,
    pub provider: Option<String>,
    pub tags: Option<String>,
    pub capacityiops: Option<i64>,
    pub capacitybytes: Option<i64>,
    pub hypervisor: Option<String>,
    pub managed: Option<bool>,
}
command!(sync CreateStoragePool, "createStoragePool", "storagepool" => StoragePool);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnableStorageMaintenance {
    pub id: String,
}
command!(async EnableStorageMaintenance, "enableStorageMaintenance", "storagepool" => StoragePool);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CancelStorageMaintenance {
    pub id: String,
}
command!(async CancelStorageMaintenance, "cancelStorageMaintenance", "storagepool" => StoragePool);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteStoragePool {
    pub id: String,
    pub forced: Option<bool>,
}
command!(sync DeleteStoragePool, "deleteStoragePool" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListStoragePools {
    pub id: Option<String>,
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub podid: Option<String>,
    pub clusterid: Option<String>,
    pub scope: Option<String>,
    pub path: Option<String>,
    pub ipaddress: Option<String>,
    pub keyword: Option<String>,
}
command!(list ListStoragePools, "listStoragePools", "storagepool" => StoragePool);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FindStoragePoolsForMigration {
    /// Volume to migrate
    pub id: String,
    pub keyword: Option<String>,
}
command!(list FindStoragePoolsForMigration, "findStoragePoolsForMigration", "storagepool" => StoragePool);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListHypervisors {
    pub zoneid: Option<String>,
}
command!(list ListHypervisors, "listHypervisors", "hypervisor" => Hypervisor);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreatePhysicalNetwork {
    pub name: String,
    pub zoneid: String,
    pub domainid: Option<String>,
    pub vlan: Option<String>,
    /// `VLAN`, `GRE`, `STT`...
    pub isolationmethods: Vec<String>,
    pub broadcastdomainrange: Option<String>,
    pub networkspeed: Option<String>,
    pub tags: Vec<String>,
}
command!(async CreatePhysicalNetwork, "createPhysicalNetwork", "physicalnetwork" => PhysicalNetwork);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeletePhysicalNetwork {
    pub id: String,
}
command!(async DeletePhysicalNetwork, "deletePhysicalNetwork" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePhysicalNetwork {
    pub id: String,
    /// `Enabled` or `Disabled`
    pub state: Option<String>,
    pub vlan: Option<String>,
    pub networkspeed: Option<String>,
    pub tags: Vec<String>,
}
command!(async UpdatePhysicalNetwork, "updatePhysicalNetwork", "physicalnetwork" => PhysicalNetwork);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListPhysicalNetworks {
    pub id: Option<String>,
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub keyword: Option<String>,
}
command!(list ListPhysicalNetworks, "listPhysicalNetworks", "physicalnetwork" => PhysicalNetwork);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddTrafficType {
    pub physicalnetworkid: String,
    /// `Guest`, `Public`, `Management` or `Storage`
    pub traffictype: String,
    pub kvmnetworklabel: Option<String>,
    pub xennetworklabel: Option<String>,
    pub vmwarenetworklabel: Option<String>,
    pub vlan: Option<String>,
}
command!(async AddTrafficType, "addTrafficType", "traffictype" => TrafficType);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DedicateGuestVlanRange {
    pub vlanrange: String,
    pub physicalnetworkid: String,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}
command!(sync DedicateGuestVlanRange, "dedicateGuestVlanRange", "dedicatedguestvlanrange" => GuestVlanRange);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReleaseDedicatedGuestVlanRange {
    pub id: String,
}
command!(async ReleaseDedicatedGuestVlanRange, "releaseDedicatedGuestVlanRange" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListDedicatedGuestVlanRanges {
    pub id: Option<String>,
    pub guestvlanrange: Option<String>,
    pub physicalnetworkid: Option<String>,
    pub zoneid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListDedicatedGuestVlanRanges, "listDedicatedGuestVlanRanges", "dedicatedguestvlanrange" => GuestVlanRange);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddNetworkServiceProvider {
    pub name: String,
    pub physicalnetworkid: String,
    pub destinationphysicalnetworkid: Option<String>,
    pub servicelist: Vec<String>,
}
command!(async AddNetworkServiceProvider, "addNetworkServiceProvider", "networkserviceprovider" => NetworkServiceProvider);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteNetworkServiceProvider {
    pub id: String,
}
command!(async DeleteNetworkServiceProvider, "deleteNetworkServiceProvider" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateNetworkServiceProvider {
    pub id: String,
    /// `Enabled`, `Disabled` or `Shutdown`
    pub state: Option<String>,
    pub servicelist: Vec<String>,
}
command!(async UpdateNetworkServiceProvider, "updateNetworkServiceProvider", "networkserviceprovider" => NetworkServiceProvider);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListNetworkServiceProviders {
    pub name: Option<String>,
    pub physicalnetworkid: Option<String>,
    pub state: Option<String>,
    pub keyword: Option<String>,
}
command!(list ListNetworkServiceProviders, "listNetworkServiceProviders", "networkserviceprovider" => NetworkServiceProvider);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StartRouter {
    pub id: String,
}
command!(async StartRouter, "startRouter", "router" => Router);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StopRouter {
    pub id: String,
    pub forced: Option<bool>,
}
command!(async StopRouter, "stopRouter", "router" => Router);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RebootRouter {
    pub id: String,
}
command!(async RebootRouter, "rebootRouter", "router" => Router);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DestroyRouter {
    pub id: String,
}
command!(async DestroyRouter, "destroyRouter", "router" => Option<Router>);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChangeServiceForRouter {
    pub id: String,
    pub serviceofferingid: String,
}
command!(sync ChangeServiceForRouter, "changeServiceForRouter", "router" => Router);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListRouters {
    pub id: Option<String>,
    pub name: Option<String>,
    pub state: Option<String>,
    pub zoneid: Option<String>,
    pub podid: Option<String>,
    pub hostid: Option<String>,
    pub networkid: Option<String>,
    pub vpcid: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListRouters, "listRouters", "router" => Router);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListCapacity {
    pub zoneid: Option<String>,
    pub podid: Option<String>,
    pub clusterid: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<i32>,
    pub fetchlatest: Option<bool>,
    pub sortby: Option<String>,
}
command!(list ListCapacity, "listCapacity", "capacity" => Capacity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListAlerts {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub keyword: Option<String>,
}
command!(list ListAlerts, "listAlerts", "alert" => Alert);
