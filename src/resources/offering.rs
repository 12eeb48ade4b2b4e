use marvin_models::models as m;
use tracing::{info, instrument};

use super::wrap_all;
use crate::api::execute;
use crate::api::offering::{
    CreateDiskOffering, CreateNetworkOffering, CreateVpcOffering, DeleteDiskOffering,
    DeleteNetworkOffering, DeleteServiceOffering, DeleteVpcOffering, ListDiskOfferings,
    ListNetworkOfferings, ListServiceOfferings, ListVpcOfferings, UpdateNetworkOffering,
    UpdateVpcOffering,
};
use crate::builder::{offering::ServiceOfferingBuilder, Builder};
use crate::client::ApiClient;
use crate::naming::with_random_suffix;
use crate::Result;

resource!(ServiceOffering(m::ServiceOffering));

impl ServiceOffering {
    #[instrument(skip_all)]
    pub async fn create(
        client: &dyn ApiClient,
        builder: ServiceOfferingBuilder,
    ) -> Result<ServiceOffering> {
        let offering = execute(client, &builder.try_build()?).await?;
        info!("Created service offering {}", offering.id);
        Ok(ServiceOffering(offering))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteServiceOffering {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(
        client: &dyn ApiClient,
        cmd: &ListServiceOfferings,
    ) -> Result<Vec<ServiceOffering>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(DiskOffering(m::DiskOffering));

impl DiskOffering {
    #[instrument(skip_all, fields(name = %cmd.name))]
    pub async fn create(client: &dyn ApiClient, cmd: &CreateDiskOffering) -> Result<DiskOffering> {
        let offering = execute(client, cmd).await?;
        info!("Created disk offering {}", offering.id);
        Ok(DiskOffering(offering))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteDiskOffering {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListDiskOfferings) -> Result<Vec<DiskOffering>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(NetworkOffering(m::NetworkOffering));

impl NetworkOffering {
    /// Name and display text get a random suffix
    #[instrument(skip_all, fields(name = %cmd.name))]
    pub async fn create(
        client: &dyn ApiClient,
        cmd: CreateNetworkOffering,
    ) -> Result<NetworkOffering> {
        let cmd = CreateNetworkOffering {
            name: with_random_suffix(&cmd.name),
            displaytext: with_random_suffix(&cmd.displaytext),
            ..cmd
        };
        let offering = execute(client, &cmd).await?;
        info!("Created network offering {} ({})", cmd.name, offering.id);
        Ok(NetworkOffering(offering))
    }

    /// `cmd.id` is replaced with the id of this offering
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn update(
        &self,
        client: &dyn ApiClient,
        cmd: UpdateNetworkOffering,
    ) -> Result<NetworkOffering> {
        let cmd = UpdateNetworkOffering {
            id: self.id.clone(),
            ..cmd
        };
        Ok(NetworkOffering(execute(client, &cmd).await?))
    }

    /// Offerings are created disabled
    pub async fn enable(&self, client: &dyn ApiClient) -> Result<NetworkOffering> {
        self.update(
            client,
            UpdateNetworkOffering {
                state: Some("Enabled".to_string()),
                ..Default::default()
            },
        )
        .await
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteNetworkOffering {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(
        client: &dyn ApiClient,
        cmd: &ListNetworkOfferings,
    ) -> Result<Vec<NetworkOffering>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(VpcOffering(m::VpcOffering));

impl VpcOffering {
    /// The name gets a random suffix
    #[instrument(skip_all, fields(name = %cmd.name))]
    pub async fn create(client: &dyn ApiClient, cmd: CreateVpcOffering) -> Result<VpcOffering> {
        let cmd = CreateVpcOffering {
            name: with_random_suffix(&cmd.name),
            ..cmd
        };
        let offering = execute(client, &cmd).await?;
        info!("Created VPC offering {} ({})", cmd.name, offering.id);
        Ok(VpcOffering(offering))
    }

    /// `cmd.id` is replaced with the id of this offering
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn update(
        &self,
        client: &dyn ApiClient,
        cmd: UpdateVpcOffering,
    ) -> Result<VpcOffering> {
        let cmd = UpdateVpcOffering {
            id: self.id.clone(),
            ..cmd
        };
        Ok(VpcOffering(execute(client, &cmd).await?))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteVpcOffering {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListVpcOfferings) -> Result<Vec<VpcOffering>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::offering::ServiceProvider;
    use crate::builder::offering::OfferingPreset;
    use crate::testing::FakeApiClient;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn network_offering_names_are_suffixed() {
        let client = FakeApiClient::new();
        client.respond(
            "createNetworkOffering",
            json!({"networkoffering": {"id": "no1", "state": "Disabled"}}),
        );

        let cmd = CreateNetworkOffering {
            name: "isolated".to_string(),
            displaytext: "Isolated offering".to_string(),
            guestiptype: "Isolated".to_string(),
            traffictype: "GUEST".to_string(),
            supportedservices: "Dhcp,SourceNat".to_string(),
            serviceproviderlist: vec![ServiceProvider {
                service: "Dhcp".to_string(),
                provider: "VirtualRouter".to_string(),
            }],
            ..Default::default()
        };
        let offering = NetworkOffering::create(&client, cmd).await.unwrap();
        assert_eq!(offering.id, "no1");

        let params = &client.requests()[0].params;
        assert!(params.get("name").unwrap().starts_with("isolated-"));
        assert!(params
            .get("displaytext")
            .unwrap()
            .starts_with("Isolated offering-"));
        assert_eq!(
            params.get("serviceproviderlist[0].provider"),
            Some("VirtualRouter")
        );
    }

    #[tokio::test]
    async fn enable_network_offering() {
        let client = FakeApiClient::new();
        client.respond(
            "updateNetworkOffering",
            json!({"networkoffering": {"id": "no1", "state": "Enabled"}}),
        );
        let offering = NetworkOffering(m::NetworkOffering {
            id: "no1".to_string(),
            ..Default::default()
        });

        let enabled = offering.enable(&client).await.unwrap();
        assert_eq!(enabled.state.as_deref(), Some("Enabled"));
        let params = &client.requests()[0].params;
        assert_eq!(params.get("id"), Some("no1"));
        assert_eq!(params.get("state"), Some("Enabled"));
    }

    #[tokio::test]
    async fn service_offering_from_preset() {
        let client = FakeApiClient::new();
        client.respond(
            "createServiceOffering",
            json!({"serviceoffering": {"id": "so1", "name": "Tiny Instance", "memory": 128}}),
        );

        let offering =
            ServiceOffering::create(&client, ServiceOfferingBuilder::preset(OfferingPreset::Tiny))
                .await
                .unwrap();
        assert_eq!(offering.memory, Some(128));
        assert_eq!(client.requests()[0].params.get("memory"), Some("128"));
    }

    #[tokio::test]
    async fn vpc_offering_create_is_async() {
        let client = FakeApiClient::new();
        client.respond("createVPCOffering", json!({"vpcoffering": {"id": "vo1"}}));

        let cmd = CreateVpcOffering {
            name: "vpc-off".to_string(),
            displaytext: "VPC offering".to_string(),
            supportedservices: vec!["Dhcp".to_string(), "Dns".to_string()],
            ..Default::default()
        };
        VpcOffering::create(&client, cmd).await.unwrap();

        let request = &client.requests()[0];
        assert!(request.is_async);
        assert!(request.params.get("name").unwrap().starts_with("vpc-off-"));
        assert_eq!(request.params.get("displaytext"), Some("VPC offering"));
        assert_eq!(request.params.get("supportedservices"), Some("Dhcp,Dns"));
    }
}
