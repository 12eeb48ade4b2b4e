use hyper::Method;
use marvin_models::models as m;
use serde_json::Value;
use tracing::{info, instrument};

use super::wrap_all;
use crate::api::misc::{
    ActivateProject, AddAccountToProject, CleanupSimulatorMock, ConfigureSimulator,
    CreateProject, CreateTags, DeleteAccountFromProject, DeleteProject, DeleteTags,
    ListCapabilities, ListConfigurations, ListProjectAccounts, ListProjects, ListTags,
    QuerySimulatorMock, SuspendProject, UpdateConfiguration, UpdateProject,
};
use crate::api::{execute, execute_with, KeyValue};
use crate::client::ApiClient;
use crate::naming::with_random_suffix;
use crate::Result;

resource!(Project(m::Project));

impl Project {
    /// The project name gets a random suffix
    #[instrument(skip_all, fields(name = %cmd.name))]
    pub async fn create(client: &dyn ApiClient, cmd: CreateProject) -> Result<Project> {
        let cmd = CreateProject {
            name: with_random_suffix(&cmd.name),
            ..cmd
        };
        let project = execute(client, &cmd).await?;
        info!("Created project {} ({})", cmd.name, project.id);
        Ok(Project(project))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteProject {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    /// `cmd.id` is replaced with the id of this project
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn update(&self, client: &dyn ApiClient, cmd: UpdateProject) -> Result<Project> {
        let cmd = UpdateProject {
            id: self.id.clone(),
            ..cmd
        };
        Ok(Project(execute(client, &cmd).await?))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn activate(&self, client: &dyn ApiClient) -> Result<Project> {
        let project = execute(
            client,
            &ActivateProject {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(Project(project))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn suspend(&self, client: &dyn ApiClient) -> Result<Project> {
        let project = execute(
            client,
            &SuspendProject {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(Project(project))
    }

    /// Adds an account by name, or invites it by email
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn add_account(
        &self,
        client: &dyn ApiClient,
        account: Option<&str>,
        email: Option<&str>,
    ) -> Result<()> {
        execute(
            client,
            &AddAccountToProject {
                projectid: self.id.clone(),
                account: account.map(str::to_string),
                email: email.map(str::to_string),
            },
        )
        .await?;
        Ok(())
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete_account(&self, client: &dyn ApiClient, account: &str) -> Result<()> {
        execute(
            client,
            &DeleteAccountFromProject {
                projectid: self.id.clone(),
                account: account.to_string(),
            },
        )
        .await?;
        Ok(())
    }

    /// Raw `projectaccount` entries, `cmd.projectid` is replaced
    pub async fn list_accounts(
        &self,
        client: &dyn ApiClient,
        cmd: ListProjectAccounts,
    ) -> Result<Vec<Value>> {
        let cmd = ListProjectAccounts {
            projectid: self.id.clone(),
            ..cmd
        };
        Ok(execute(client, &cmd).await?)
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListProjects) -> Result<Vec<Project>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(Tag(m::Tag));

fn key_values(tags: &[(&str, &str)]) -> Vec<KeyValue> {
    tags.iter().map(|(k, v)| KeyValue::new(k, v)).collect()
}

impl Tag {
    /// Tags every resource of `resourceids` with each key/value pair
    #[instrument(skip(client, tags))]
    pub async fn create(
        client: &dyn ApiClient,
        resourceids: &[&str],
        resourcetype: &str,
        tags: &[(&str, &str)],
    ) -> Result<()> {
        execute(
            client,
            &CreateTags {
                resourceids: resourceids.iter().map(|id| id.to_string()).collect(),
                resourcetype: resourcetype.to_string(),
                tags: key_values(tags),
            },
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(client, tags))]
    pub async fn delete(
        client: &dyn ApiClient,
        resourceids: &[&str],
        resourcetype: &str,
        tags: &[(&str, &str)],
    ) -> Result<()> {
        execute(
            client,
            &DeleteTags {
                resourceids: resourceids.iter().map(|id| id.to_string()).collect(),
                resourcetype: resourcetype.to_string(),
                tags: key_values(tags),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListTags) -> Result<Vec<Tag>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

/// Global settings and capabilities of the management server
#[derive(Debug)]
pub struct Configurations;

impl Configurations {
    #[instrument(skip(client))]
    pub async fn update(
        client: &dyn ApiClient,
        name: &str,
        value: &str,
    ) -> Result<m::Configuration> {
        let configuration = execute(
            client,
            &UpdateConfiguration {
                name: name.to_string(),
                value: Some(value.to_string()),
                ..Default::default()
            },
        )
        .await?;
        info!("Set {} to {:?}", name, configuration.value);
        Ok(configuration)
    }

    pub async fn list(
        client: &dyn ApiClient,
        cmd: &ListConfigurations,
    ) -> Result<Vec<m::Configuration>> {
        Ok(execute(client, cmd).await?)
    }

    pub async fn list_capabilities(client: &dyn ApiClient) -> Result<m::Capabilities> {
        Ok(execute(client, &ListCapabilities {}).await?)
    }
}

resource!(
    /// A simulator mock installed with `configureSimulator`
    SimulatorMock(m::SimulatorMock)
);

impl SimulatorMock {
    /// Value used when `cmd.value` is empty, the mocked command fails
    pub const FAIL: &'static str = "result:fail";

    #[instrument(skip_all, fields(name = %cmd.name))]
    pub async fn create(
        client: &dyn ApiClient,
        cmd: ConfigureSimulator,
        method: Method,
    ) -> Result<SimulatorMock> {
        let cmd = if cmd.value.is_empty() {
            ConfigureSimulator {
                value: SimulatorMock::FAIL.to_string(),
                ..cmd
            }
        } else {
            cmd
        };
        let mock = execute_with(client, &cmd, method).await?;
        info!("Mocked {} with {} ({})", cmd.name, cmd.value, mock.id);
        Ok(SimulatorMock(mock))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &CleanupSimulatorMock {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    /// Current state of the mock, `count` drops each time it applies
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn query(&self, client: &dyn ApiClient) -> Result<SimulatorMock> {
        let mock = execute(
            client,
            &QuerySimulatorMock {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(SimulatorMock(mock))
    }
}
