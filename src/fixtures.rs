//! # Smoke test fixtures
//!
//! Building blocks that stand up the resources a smoke test runs against:
//! the first zone, the ROOT domain, a test account, a tiny service offering
//! and a featured template, composed into a [`VmFixture`].
//!
//! ```no_run
//! # async fn run(client: &dyn marvin::client::ApiClient) -> marvin::Result<()> {
//! use marvin::fixtures::VmFixture;
//!
//! let fixture = VmFixture::create(client).await?;
//! let root = fixture.root_volume(client).await?;
//! let snapshot = root.take_snapshot(client).await?;
//! let volume = snapshot.create_volume(client).await?;
//! volume.delete(client).await?;
//! fixture.teardown(client).await?;
//! # Ok(())
//! # }
//! ```
use tracing::{info, instrument, warn};

use crate::api::account::ListDomains;
use crate::api::storage::{CreateSnapshot, ListTemplates, ListVolumes};
use crate::builder::{
    account::AccountBuilder,
    compute::VirtualMachineBuilder,
    offering::{OfferingPreset, ServiceOfferingBuilder},
    storage::VolumeBuilder,
};
use crate::client::ApiClient;
use crate::resources::account::{Account, Domain};
use crate::resources::compute::{DeployMode, DeployOptions, VirtualMachine};
use crate::resources::first;
use crate::resources::offering::ServiceOffering;
use crate::resources::storage::{Snapshot, Template, Volume};
use crate::Result;

pub use crate::resources::infra::current_zone;
use crate::resources::infra::Zone;

/// Display name of the fixture instance
pub const VM_DISPLAY_NAME: &str = "testserver";

pub async fn current_domain(client: &dyn ApiClient) -> Result<Domain> {
    let domains = Domain::list(
        client,
        &ListDomains {
            name: Some("ROOT".to_string()),
            ..Default::default()
        },
    )
    .await?;
    first(domains, "ROOT domain")
}

pub async fn create_account(client: &dyn ApiClient, domain: &Domain) -> Result<Account> {
    Account::create(client, AccountBuilder::test_account().with_domain(&domain.id)).await
}

async fn service_offering(
    client: &dyn ApiClient,
    zone: &Zone,
    preset: OfferingPreset,
) -> Result<ServiceOffering> {
    let mut builder = ServiceOfferingBuilder::preset(preset);
    if zone.has_local_storage() {
        builder = builder.with_storage_type("local");
    }
    ServiceOffering::create(client, builder).await
}

/// Tiny offering, on local storage when `zone` allows it
pub async fn tiny_service_offering(client: &dyn ApiClient, zone: &Zone) -> Result<ServiceOffering> {
    service_offering(client, zone, OfferingPreset::Tiny).await
}

/// Small offering, on local storage when `zone` allows it
pub async fn small_service_offering(
    client: &dyn ApiClient,
    zone: &Zone,
) -> Result<ServiceOffering> {
    service_offering(client, zone, OfferingPreset::Small).await
}

/// First featured template of `zone` that is ready to deploy
pub async fn default_template(client: &dyn ApiClient, zone: &Zone) -> Result<Template> {
    let templates = Template::list(
        client,
        &ListTemplates {
            templatefilter: "featured".to_string(),
            zoneid: Some(zone.id.clone()),
            ..Default::default()
        },
    )
    .await?;
    templates
        .into_iter()
        .find(|template| template.isready == Some(true))
        .ok_or_else(|| crate::MarvinError::NotFound("ready featured template".to_string()))
}

/// Deletes what exists, in reverse order of creation. Every deletion is
/// attempted, the first error is returned.
async fn delete_all(
    client: &dyn ApiClient,
    vm: Option<&VirtualMachine>,
    service_offering: Option<&ServiceOffering>,
    account: Option<&Account>,
) -> Result<()> {
    let mut result = Ok(());
    if let Some(vm) = vm {
        result = result.and(vm.delete(client).await);
    }
    if let Some(offering) = service_offering {
        result = result.and(offering.delete(client).await);
    }
    if let Some(account) = account {
        result = result.and(account.delete(client).await);
    }
    result
}

#[derive(Default)]
struct Partial {
    account: Option<Account>,
    service_offering: Option<ServiceOffering>,
    vm: Option<VirtualMachine>,
}

/// An instance of the test account, with everything it was deployed from
#[derive(Debug, Clone)]
pub struct VmFixture {
    pub zone: Zone,
    pub domain: Domain,
    pub account: Account,
    pub service_offering: ServiceOffering,
    pub template: Template,
    pub vm: VirtualMachine,
}

impl VmFixture {
    /// Stands the fixture up. When a step fails, what was already created
    /// is deleted and the error of that step is returned.
    #[instrument(skip_all)]
    pub async fn create(client: &dyn ApiClient) -> Result<VmFixture> {
        let mut partial = Partial::default();
        match VmFixture::build(client, &mut partial).await {
            Ok(fixture) => Ok(fixture),
            Err(err) => {
                warn!("VM fixture failed: {}", err);
                let cleanup = delete_all(
                    client,
                    partial.vm.as_ref(),
                    partial.service_offering.as_ref(),
                    partial.account.as_ref(),
                )
                .await;
                if let Err(cleanup) = cleanup {
                    warn!("Cleanup of the VM fixture failed: {}", cleanup);
                }
                Err(err)
            }
        }
    }

    async fn build(client: &dyn ApiClient, partial: &mut Partial) -> Result<VmFixture> {
        let zone = current_zone(client).await?;
        let domain = current_domain(client).await?;
        let account = create_account(client, &domain).await?;
        partial.account = Some(account.clone());
        let service_offering = tiny_service_offering(client, &zone).await?;
        partial.service_offering = Some(service_offering.clone());
        let template = default_template(client, &zone).await?;

        let builder = VirtualMachineBuilder::new()
            .with_displayname(VM_DISPLAY_NAME)
            .with_zone(&zone.id)
            .with_template(&template.id)
            .with_service_offering(&service_offering.id)
            .with_account(
                account.name.as_deref().unwrap_or_default(),
                account.domainid.as_deref().unwrap_or(&domain.id),
            );
        let vm = VirtualMachine::create(
            client,
            builder,
            DeployOptions::new(DeployMode::for_zone(&zone)),
        )
        .await?;
        partial.vm = Some(vm.clone());
        info!("VM fixture {} ready in zone {}", vm.id, zone.id);

        Ok(VmFixture {
            zone,
            domain,
            account,
            service_offering,
            template,
            vm,
        })
    }

    /// Deletes the instance, the service offering and the account
    #[instrument(skip_all, fields(vm = %self.vm.id))]
    pub async fn teardown(&self, client: &dyn ApiClient) -> Result<()> {
        delete_all(
            client,
            Some(&self.vm),
            Some(&self.service_offering),
            Some(&self.account),
        )
        .await
    }

    pub async fn root_volume(&self, client: &dyn ApiClient) -> Result<RootVolume> {
        let volumes = Volume::list(
            client,
            &ListVolumes {
                virtualmachineid: Some(self.vm.id.clone()),
                kind: Some("ROOT".to_string()),
                listall: Some(true),
                ..Default::default()
            },
        )
        .await?;
        Ok(RootVolume {
            volume: first(volumes, "ROOT volume")?,
        })
    }
}

/// ROOT volume of a fixture instance
#[derive(Debug, Clone)]
pub struct RootVolume {
    pub volume: Volume,
}

impl RootVolume {
    #[instrument(skip_all, fields(volume = %self.volume.id))]
    pub async fn take_snapshot(&self, client: &dyn ApiClient) -> Result<VolumeSnapshot> {
        let snapshot = Snapshot::create(
            client,
            &CreateSnapshot {
                volumeid: self.volume.id.clone(),
                account: self.volume.account.clone(),
                domainid: self.volume.domainid.clone(),
                ..Default::default()
            },
        )
        .await?;
        Ok(VolumeSnapshot {
            snapshot,
            volume: self.volume.clone(),
        })
    }
}

/// Snapshot of a volume, remembering the volume it was taken from
#[derive(Debug, Clone)]
pub struct VolumeSnapshot {
    pub snapshot: Snapshot,
    pub volume: Volume,
}

impl VolumeSnapshot {
    /// New volume from the snapshot, in the zone and account of the
    /// snapshotted volume
    #[instrument(skip_all, fields(snapshot = %self.snapshot.id))]
    pub async fn create_volume(&self, client: &dyn ApiClient) -> Result<Volume> {
        let builder = VolumeBuilder {
            name: Some("snapshot-volume".to_string()),
            zoneid: self.volume.zoneid.clone(),
            account: self.volume.account.clone(),
            domainid: self.volume.domainid.clone(),
            ..Default::default()
        };
        Volume::create_from_snapshot(client, &self.snapshot.id, builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApiClient;
    use crate::MarvinError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn zone(local: bool) -> Zone {
        Zone(marvin_models::models::Zone {
            id: "z1".to_string(),
            localstorageenabled: Some(local),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn local_storage_offering() {
        let client = FakeApiClient::new();
        client.respond_always("createServiceOffering", json!({"serviceoffering": {"id": "so1"}}));

        tiny_service_offering(&client, &zone(true)).await.unwrap();
        small_service_offering(&client, &zone(false)).await.unwrap();

        let requests = client.requests();
        assert_eq!(requests[0].params.get("storagetype"), Some("local"));
        assert_eq!(requests[0].params.get("memory"), Some("128"));
        assert_eq!(requests[1].params.get("storagetype"), None);
        assert_eq!(requests[1].params.get("memory"), Some("256"));
    }

    #[tokio::test]
    async fn skips_templates_not_ready() {
        let client = FakeApiClient::new();
        client.respond(
            "listTemplates",
            json!({"template": [
                {"id": "t1", "isready": false},
                {"id": "t2", "isready": true}
            ]}),
        );

        let template = default_template(&client, &zone(false)).await.unwrap();
        assert_eq!(template.id, "t2");
        assert_eq!(
            client.requests()[0].params.get("templatefilter"),
            Some("featured")
        );
    }

    #[tokio::test]
    async fn failed_fixture_is_cleaned_up() {
        let client = FakeApiClient::new();
        client
            .respond("listZones", json!({"zone": [{"id": "z1", "networktype": "Basic"}]}))
            .respond("listDomains", json!({"domain": [{"id": "d1", "name": "ROOT"}]}))
            .respond(
                "createAccount",
                json!({"account": {"id": "a1", "name": "test", "domainid": "d1"}}),
            )
            .respond("createServiceOffering", json!({"serviceoffering": {"id": "so1"}}))
            .respond("listTemplates", json!({}))
            .respond("deleteServiceOffering", json!({"success": true}))
            .respond("deleteAccount", json!({"success": true}));

        let err = VmFixture::create(&client).await.unwrap_err();
        assert!(matches!(err, MarvinError::NotFound(_)));
        assert_eq!(
            client.commands(),
            vec![
                "listZones",
                "listDomains",
                "createAccount",
                "createServiceOffering",
                "listTemplates",
                "deleteServiceOffering",
                "deleteAccount",
            ]
        );
        assert_eq!(
            client.requests_for("deleteAccount")[0].params.get("id"),
            Some("a1")
        );
    }

    #[tokio::test]
    async fn cleanup_error_keeps_original_error() {
        let client = FakeApiClient::new();
        client
            .respond("listZones", json!({"zone": [{"id": "z1"}]}))
            .respond("listDomains", json!({"domain": [{"id": "d1"}]}))
            .respond("createAccount", json!({"account": {"id": "a1", "name": "test"}}))
            .fail("createServiceOffering", 431, "invalid memory")
            .fail("deleteAccount", 530, "account busy");

        let err = VmFixture::create(&client).await.unwrap_err();
        assert_eq!(err.api_error_text(), Some("invalid memory"));
    }

    #[tokio::test]
    async fn snapshot_volume_in_same_zone() {
        let client = FakeApiClient::new();
        client
            .respond("createSnapshot", json!({"snapshot": {"id": "s1", "state": "BackedUp"}}))
            .respond("createVolume", json!({"volume": {"id": "v2"}}));
        let root = RootVolume {
            volume: Volume(marvin_models::models::Volume {
                id: "v1".to_string(),
                zoneid: Some("z1".to_string()),
                account: Some("test".to_string()),
                domainid: Some("d1".to_string()),
                ..Default::default()
            }),
        };

        let snapshot = root.take_snapshot(&client).await.unwrap();
        let volume = snapshot.create_volume(&client).await.unwrap();
        assert_eq!(volume.id, "v2");

        let params = &client.requests_for("createVolume")[0].params;
        assert_eq!(params.get("snapshotid"), Some("s1"));
        assert_eq!(params.get("zoneid"), Some("z1"));
        assert_eq!(params.get("account"), Some("test"));
    }
}
