//! Service, disk, network and VPC offerings
use marvin_models::models::{DiskOffering, NetworkOffering, ServiceOffering, Success, VpcOffering};
use serde_with::skip_serializing_none;

use super::KeyValue;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateServiceOffering {
    pub name: String,
    pub displaytext: String,
    pub cpunumber: Option<i64>,
    /// MHz
    pub cpuspeed: Option<i64>,
    /// MB
    pub memory: Option<i64>,
    /// `local` or `shared`
    pub storagetype: Option<String>,
    pub systemvmtype: Option<String>,
    pub issystem: Option<bool>,
    pub tags: Option<String>,
    pub hosttags: Option<String>,
    pub deploymentplanner: Option<String>,
    pub serviceofferingdetails: Vec<KeyValue>,
    pub isvolatile: Option<bool>,
    pub miniops: Option<i64>,
    pub maxiops: Option<i64>,
    pub customizediops: Option<bool>,
    pub offerha: Option<bool>,
    pub limitcpuuse: Option<bool>,
    pub domainid: Option<String>,
}
command!(sync CreateServiceOffering, "createServiceOffering", "serviceoffering" => ServiceOffering);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteServiceOffering {
    pub id: String,
}
command!(sync DeleteServiceOffering, "deleteServiceOffering" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListServiceOfferings {
    pub id: Option<String>,
    pub name: Option<String>,
    pub domainid: Option<String>,
    pub account: Option<String>,
    pub issystem: Option<bool>,
    pub systemvmtype: Option<String>,
    pub virtualmachineid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListServiceOfferings, "listServiceOfferings", "serviceoffering" => ServiceOffering);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateDiskOffering {
    pub name: String,
    pub displaytext: String,
    /// GB, unset for custom sized offerings
    pub disksize: Option<i64>,
    pub customized: Option<bool>,
    pub storagetype: Option<String>,
    pub tags: Option<String>,
    pub miniops: Option<i64>,
    pub maxiops: Option<i64>,
    pub customizediops: Option<bool>,
    pub domainid: Option<String>,
}
command!(sync CreateDiskOffering, "createDiskOffering", "diskoffering" => DiskOffering);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteDiskOffering {
    pub id: String,
}
command!(sync DeleteDiskOffering, "deleteDiskOffering" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListDiskOfferings {
    pub id: Option<String>,
    pub name: Option<String>,
    pub domainid: Option<String>,
    pub account: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListDiskOfferings, "listDiskOfferings", "diskoffering" => DiskOffering);

/// Provider of a network service, e.g. `SourceNat` by `VirtualRouter`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceProvider {
    pub service: String,
    pub provider: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceCapability {
    pub service: String,
    pub capabilitytype: String,
    pub capabilityvalue: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateNetworkOffering {
    pub name: String,
    pub displaytext: String,
    /// `Isolated` or `Shared`
    pub guestiptype: String,
    pub traffictype: String,
    /// Comma separated services, may be empty
    pub supportedservices: String,
    pub serviceproviderlist: Vec<ServiceProvider>,
    pub servicecapabilitylist: Vec<ServiceCapability>,
    pub availability: Option<String>,
    pub forvpc: Option<bool>,
    pub specifyvlan: Option<bool>,
    pub specifyipranges: Option<bool>,
    pub ispersistent: Option<bool>,
    pub egressdefaultpolicy: Option<bool>,
    pub conservemode: Option<bool>,
    pub tags: Option<String>,
}
command!(sync CreateNetworkOffering, "createNetworkOffering", "networkoffering" => NetworkOffering);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateNetworkOffering {
    pub id: String,
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub availability: Option<String>,
    /// `Enabled` or `Disabled`
    pub state: Option<String>,
    pub sortkey: Option<i32>,
}
command!(sync UpdateNetworkOffering, "updateNetworkOffering", "networkoffering" => NetworkOffering);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteNetworkOffering {
    pub id: String,
}
command!(sync DeleteNetworkOffering, "deleteNetworkOffering" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListNetworkOfferings {
    pub id: Option<String>,
    pub name: Option<String>,
    pub guestiptype: Option<String>,
    pub traffictype: Option<String>,
    pub state: Option<String>,
    pub zoneid: Option<String>,
    pub forvpc: Option<bool>,
    pub isdefault: Option<bool>,
    pub keyword: Option<String>,
}
command!(list ListNetworkOfferings, "listNetworkOfferings", "networkoffering" => NetworkOffering);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateVpcOffering {
    pub name: String,
    pub displaytext: String,
    pub supportedservices: Vec<String>,
    pub serviceproviderlist: Vec<ServiceProvider>,
    pub servicecapabilitylist: Vec<ServiceCapability>,
    pub serviceofferingid: Option<String>,
}
command!(async CreateVpcOffering, "createVPCOffering", "vpcoffering" => VpcOffering);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateVpcOffering {
    pub id: String,
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub state: Option<String>,
}
command!(async UpdateVpcOffering, "updateVPCOffering", "vpcoffering" => VpcOffering);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteVpcOffering {
    pub id: String,
}
command!(async DeleteVpcOffering, "deleteVPCOffering" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListVpcOfferings {
    pub id: Option<String>,
    pub name: Option<String>,
    pub state: Option<String>,
    pub isdefault: Option<bool>,
    pub supportedservices: Option<Vec<String>>,
    pub keyword: Option<String>,
}
command!(list ListVpcOfferings, "listVPCOfferings", "vpcoffering" => VpcOffering);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Command;
    use pretty_assertions::assert_eq;

    #[test]
    fn providers_are_indexed() {
        let params = CreateNetworkOffering {
            name: "net".to_string(),
            displaytext: "net".to_string(),
            guestiptype: "Isolated".to_string(),
            traffictype: "GUEST".to_string(),
            supportedservices: "Dhcp,SourceNat".to_string(),
            serviceproviderlist: vec![
                ServiceProvider {
                    service: "Dhcp".to_string(),
                    provider: "VirtualRouter".to_string(),
                },
                ServiceProvider {
                    service: "SourceNat".to_string(),
                    provider: "VirtualRouter".to_string(),
                },
            ],
            ..Default::default()
        }
        .params()
        .unwrap();

        assert_eq!(params.get("serviceproviderlist[1].service"), Some("SourceNat"));
        assert_eq!(
            params.get("serviceproviderlist[0].provider"),
            Some("VirtualRouter")
        );
        assert!(!params.contains_key("servicecapabilitylist"));
        assert_eq!(params.get("supportedservices"), Some("Dhcp,SourceNat"));
    }

    #[test]
    fn offering_details_as_key_value() {
        let params = CreateServiceOffering {
            name: "tiny".to_string(),
            displaytext: "tiny".to_string(),
            serviceofferingdetails: vec![KeyValue::new("dynamicScalingEnabled", "true")],
            ..Default::default()
        }
        .params()
        .unwrap();
        assert_eq!(
            params.get("serviceofferingdetails[0].key"),
            Some("dynamicScalingEnabled")
        );
        assert_eq!(params.get("serviceofferingdetails[0].value"), Some("true"));
    }
}
