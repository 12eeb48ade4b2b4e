use marvin_models::models as m;
use tracing::{debug, info, instrument};

use super::{first, wrap_all};
use crate::api::execute;
use crate::api::storage::{
    CopyIso, CopyTemplate, CreateSnapshot, CreateSnapshotPolicy, CreateTemplate, CreateVolume,
    DeleteIso, DeleteSnapshot, DeleteSnapshotPolicies, DeleteTemplate, DeleteVolume, ExtractIso,
    ExtractTemplate, ExtractVolume, ListIsos, ListOsTypes, ListSnapshotPolicies, ListSnapshots,
    ListTemplates, ListVolumes, MigrateVolume, RegisterIso, ResizeVolume, UpdateIso,
    UpdateTemplate, UpdateTemplatePermissions, UploadVolume,
};
use crate::builder::{
    storage::{TemplateBuilder, VolumeBuilder},
    Builder, BuilderError,
};
use crate::client::ApiClient;
use crate::naming::with_random_suffix;
use crate::wait::{self, poll_until, Poll, PollPolicy, Progress};
use crate::{MarvinError, Result};

/// Guest OS of a template or an ISO, given by id or by description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestOs {
    Id(String),
    /// Looked up with `listOsTypes`, the first match is used
    Description(String),
}

impl GuestOs {
    pub async fn resolve(&self, client: &dyn ApiClient) -> Result<String> {
        match self {
            GuestOs::Id(id) => Ok(id.clone()),
            GuestOs::Description(description) => {
                let types = execute(
                    client,
                    &ListOsTypes {
                        description: Some(description.clone()),
                        ..Default::default()
                    },
                )
                .await?;
                let os = first(types, &format!("OS type `{}`", description))?;
                debug!("OS type `{}` is {}", description, os.id);
                Ok(os.id)
            }
        }
    }
}

/// `current` when set, else the resolved `os`, else an error
async fn os_type_id(
    client: &dyn ApiClient,
    current: Option<String>,
    os: Option<&GuestOs>,
) -> Result<String> {
    match (current, os) {
        (Some(id), _) if !id.is_empty() => Ok(id),
        (_, Some(os)) => os.resolve(client).await,
        _ => Err(BuilderError::MissingRequiredField("ostypeid".to_string()).into()),
    }
}

/// Status answer of a download or an upload
fn progress<T>(
    resource: &str,
    status: Option<&str>,
    classify: fn(&str) -> Progress,
    item: T,
) -> Result<Poll<T>> {
    match status.map(classify) {
        Some(Progress::Ready) => Ok(Poll::Ready(item)),
        Some(Progress::InProgress) | None => Ok(Poll::Pending),
        Some(Progress::Failed) => Err(MarvinError::UnexpectedState {
            resource: resource.to_string(),
            state: status.unwrap_or_default().to_string(),
        }),
    }
}

resource!(Volume(m::Volume));

impl Volume {
    #[instrument(skip_all)]
    pub async fn create(client: &dyn ApiClient, builder: VolumeBuilder) -> Result<Volume> {
        let volume = execute(client, &builder.try_build()?).await?;
        info!("Created volume {}", volume.id);
        Ok(Volume(volume))
    }

    /// Volume of a custom sized disk offering, `size` in GB
    pub async fn create_custom_disk(
        client: &dyn ApiClient,
        builder: VolumeBuilder,
        size: i64,
    ) -> Result<Volume> {
        Volume::create(client, builder.with_size(size)).await
    }

    /// The volume name gets a random suffix, any disk offering is ignored
    #[instrument(skip(client, builder))]
    pub async fn create_from_snapshot(
        client: &dyn ApiClient,
        snapshotid: &str,
        builder: VolumeBuilder,
    ) -> Result<Volume> {
        let cmd = builder.try_build()?;
        let cmd = CreateVolume {
            name: cmd.name.as_deref().map(with_random_suffix),
            snapshotid: Some(snapshotid.to_string()),
            diskofferingid: None,
            ..cmd
        };
        let volume = execute(client, &cmd).await?;
        info!("Created volume {} from snapshot", volume.id);
        Ok(Volume(volume))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteVolume {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListVolumes) -> Result<Vec<Volume>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }

    /// `cmd.id` is replaced with the id of this volume
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn resize(&self, client: &dyn ApiClient, cmd: ResizeVolume) -> Result<Volume> {
        let cmd = ResizeVolume {
            id: self.id.clone(),
            ..cmd
        };
        Ok(Volume(execute(client, &cmd).await?))
    }

    #[instrument(skip_all, fields(name = %cmd.name))]
    pub async fn upload(client: &dyn ApiClient, cmd: &UploadVolume) -> Result<Volume> {
        let volume = execute(client, cmd).await?;
        info!("Uploading volume {}", volume.id);
        Ok(Volume(volume))
    }

    /// Lists the volume until its state is `Uploaded`
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn wait_for_upload(&self, client: &dyn ApiClient) -> Result<Volume> {
        let resource = format!("volume {}", self.id);
        let cmd = ListVolumes {
            id: Some(self.id.clone()),
            zoneid: self.0.zoneid.clone(),
            ..Default::default()
        };
        poll_until(
            PollPolicy::from_timeouts(&client.timeouts()),
            &resource,
            "Uploaded",
            || async {
                match execute(client, &cmd).await?.into_iter().next() {
                    Some(volume) => {
                        let state = volume.state.clone();
                        progress(&resource, state.as_deref(), wait::volume_upload, Volume(volume))
                    }
                    None => Ok(Poll::Pending),
                }
            },
        )
        .await
    }

    /// `mode` is `HTTP_DOWNLOAD` or `FTP_UPLOAD`
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn extract(
        &self,
        client: &dyn ApiClient,
        zoneid: &str,
        mode: &str,
    ) -> Result<m::ExtractResponse> {
        Ok(execute(
            client,
            &ExtractVolume {
                id: self.id.clone(),
                zoneid: zoneid.to_string(),
                mode: mode.to_string(),
                url: None,
            },
        )
        .await?)
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn migrate(
        &self,
        client: &dyn ApiClient,
        storageid: &str,
        livemigrate: bool,
    ) -> Result<Volume> {
        let volume = execute(
            client,
            &MigrateVolume {
                volumeid: self.id.clone(),
                storageid: storageid.to_string(),
                livemigrate: livemigrate.then_some(true),
            },
        )
        .await?;
        Ok(Volume(volume))
    }
}

resource!(Snapshot(m::Snapshot));

impl Snapshot {
    pub const BACKED_UP: &'static str = "BackedUp";
    pub const BACKING_UP: &'static str = "BackingUp";

    #[instrument(skip_all, fields(volume = %cmd.volumeid))]
    pub async fn create(client: &dyn ApiClient, cmd: &CreateSnapshot) -> Result<Snapshot> {
        let snapshot = execute(client, cmd).await?;
        info!("Created snapshot {}", snapshot.id);
        Ok(Snapshot(snapshot))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteSnapshot {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListSnapshots) -> Result<Vec<Snapshot>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }

    /// Lists the snapshot until its state is `state`, ignoring case
    #[instrument(skip_all, fields(id = %self.id, state = %state))]
    pub async fn validate_state(&self, client: &dyn ApiClient, state: &str) -> Result<Snapshot> {
        let resource = format!("snapshot {}", self.id);
        let cmd = ListSnapshots {
            id: Some(self.id.clone()),
            ..Default::default()
        };
        let expected = state.to_lowercase();
        poll_until(
            PollPolicy::from_timeouts(&client.timeouts()),
            &resource,
            state,
            || async {
                let listed = first(execute(client, &cmd).await?, "snapshot")?;
                let current = listed.state.as_deref().unwrap_or_default().to_lowercase();
                Ok(if current == expected {
                    Poll::Ready(Snapshot(listed))
                } else {
                    Poll::Pending
                })
            },
        )
        .await
    }
}

resource!(SnapshotPolicy(m::SnapshotPolicy));

impl SnapshotPolicy {
    #[instrument(skip_all, fields(volume = %cmd.volumeid))]
    pub async fn create(
        client: &dyn ApiClient,
        cmd: &CreateSnapshotPolicy,
    ) -> Result<SnapshotPolicy> {
        Ok(SnapshotPolicy(execute(client, cmd).await?))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteSnapshotPolicies {
                id: Some(self.id.clone()),
                ids: Vec::new(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(
        client: &dyn ApiClient,
        cmd: &ListSnapshotPolicies,
    ) -> Result<Vec<SnapshotPolicy>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(Template(m::Template));

impl Template {
    /// Template of a volume. The name gets a random suffix and the flags
    /// left unset are sent as `false`.
    #[instrument(skip_all, fields(volume = ?cmd.volumeid))]
    pub async fn create(
        client: &dyn ApiClient,
        cmd: CreateTemplate,
        os: Option<&GuestOs>,
    ) -> Result<Template> {
        let cmd = CreateTemplate {
            name: with_random_suffix(&cmd.name),
            isfeatured: cmd.isfeatured.or(Some(false)),
            ispublic: cmd.ispublic.or(Some(false)),
            isextractable: cmd.isextractable.or(Some(false)),
            passwordenabled: cmd.passwordenabled.or(Some(false)),
            ..cmd
        };
        Template::create_template(client, cmd, os).await
    }

    /// Template of a snapshot, the name is suffixed when `random_name` is
    /// set. Flags are only sent when set on `cmd`.
    #[instrument(skip_all, fields(snapshot = %snapshot.id))]
    pub async fn create_from_snapshot(
        client: &dyn ApiClient,
        snapshot: &Snapshot,
        cmd: CreateTemplate,
        os: Option<&GuestOs>,
        random_name: bool,
    ) -> Result<Template> {
        let name = if random_name {
            with_random_suffix(&cmd.name)
        } else {
            cmd.name.clone()
        };
        let cmd = CreateTemplate {
            name,
            snapshotid: Some(snapshot.id.clone()),
            volumeid: None,
            ..cmd
        };
        Template::create_template(client, cmd, os).await
    }

    async fn create_template(
        client: &dyn ApiClient,
        cmd: CreateTemplate,
        os: Option<&GuestOs>,
    ) -> Result<Template> {
        let current = Some(cmd.ostypeid.clone());
        let cmd = CreateTemplate {
            ostypeid: os_type_id(client, current, os).await?,
            ..cmd
        };
        let template = execute(client, &cmd).await?;
        info!("Created template {} ({})", cmd.name, template.id);
        Ok(Template(template))
    }

    /// Registers a template from a URL, the OS type of the builder wins
    /// over `os`.
    #[instrument(skip_all)]
    pub async fn register(
        client: &dyn ApiClient,
        builder: TemplateBuilder,
        os: Option<&GuestOs>,
    ) -> Result<Template> {
        let builder = match os {
            Some(os) if builder.ostypeid.is_none() => {
                let id = os.resolve(client).await?;
                builder.with_os_type(&id)
            }
            _ => builder,
        };
        let cmd = builder.try_build()?;
        let template = first(execute(client, &cmd).await?, "registered template")?;
        info!("Registered template {} ({})", cmd.name, template.id);
        Ok(Template(template))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn extract(
        &self,
        client: &dyn ApiClient,
        mode: &str,
        zoneid: Option<&str>,
    ) -> Result<m::ExtractResponse> {
        Ok(execute(
            client,
            &ExtractTemplate {
                id: self.id.clone(),
                mode: mode.to_string(),
                zoneid: zoneid.map(str::to_string),
                url: None,
            },
        )
        .await?)
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteTemplate {
                id: self.id.clone(),
                zoneid: None,
            },
        )
        .await?;
        Ok(())
    }

    /// Lists the template until it reports `Download Complete`. A download
    /// reporting an error status fails right away.
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn download(&self, client: &dyn ApiClient) -> Result<Template> {
        let resource = format!("template {}", self.id);
        let cmd = ListTemplates {
            templatefilter: "self".to_string(),
            id: Some(self.id.clone()),
            zoneid: self.0.zoneid.clone(),
            ..Default::default()
        };
        poll_until(
            PollPolicy::from_timeouts(&client.timeouts()),
            &resource,
            "Download Complete",
            || async {
                match execute(client, &cmd).await?.into_iter().next() {
                    Some(template) => {
                        let status = template.status.clone();
                        progress(
                            &resource,
                            status.as_deref(),
                            wait::template_download,
                            Template(template),
                        )
                    }
                    None => Ok(Poll::Pending),
                }
            },
        )
        .await
    }

    /// `cmd.id` is replaced with the id of this template
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn update(&self, client: &dyn ApiClient, cmd: UpdateTemplate) -> Result<Template> {
        let cmd = UpdateTemplate {
            id: self.id.clone(),
            ..cmd
        };
        Ok(Template(execute(client, &cmd).await?))
    }

    /// `cmd.id` is replaced with the id of this template
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn update_permissions(
        &self,
        client: &dyn ApiClient,
        cmd: UpdateTemplatePermissions,
    ) -> Result<()> {
        let cmd = UpdateTemplatePermissions {
            id: self.id.clone(),
            ..cmd
        };
        execute(client, &cmd).await?;
        Ok(())
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn copy(
        &self,
        client: &dyn ApiClient,
        sourcezoneid: &str,
        destzoneid: &str,
    ) -> Result<Template> {
        let template = execute(
            client,
            &CopyTemplate {
                id: self.id.clone(),
                sourcezoneid: sourcezoneid.to_string(),
                destzoneid: destzoneid.to_string(),
            },
        )
        .await?;
        Ok(Template(template))
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListTemplates) -> Result<Vec<Template>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

resource!(Iso(m::Iso));

impl Iso {
    /// Registers an ISO from a URL, `cmd.ostypeid` wins over `os`
    #[instrument(skip_all, fields(name = %cmd.name))]
    pub async fn register(
        client: &dyn ApiClient,
        cmd: RegisterIso,
        os: Option<&GuestOs>,
    ) -> Result<Iso> {
        let ostypeid = os_type_id(client, cmd.ostypeid.clone(), os).await?;
        let cmd = RegisterIso {
            ostypeid: Some(ostypeid),
            ..cmd
        };
        let iso = first(execute(client, &cmd).await?, "registered ISO")?;
        info!("Registered ISO {}", iso.id);
        Ok(Iso(iso))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteIso {
                id: self.id.clone(),
                zoneid: None,
            },
        )
        .await?;
        Ok(())
    }

    /// Lists the ISO until it reports `Successfully Installed`
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn download(&self, client: &dyn ApiClient) -> Result<Iso> {
        let resource = format!("ISO {}", self.id);
        let cmd = ListIsos {
            id: Some(self.id.clone()),
            ..Default::default()
        };
        poll_until(
            PollPolicy::from_timeouts(&client.timeouts()),
            &resource,
            "Successfully Installed",
            || async {
                match execute(client, &cmd).await?.into_iter().next() {
                    Some(iso) => {
                        let status = iso.status.clone();
                        progress(&resource, status.as_deref(), wait::iso_download, Iso(iso))
                    }
                    None => Ok(Poll::Pending),
                }
            },
        )
        .await
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn extract(
        &self,
        client: &dyn ApiClient,
        mode: &str,
        zoneid: Option<&str>,
    ) -> Result<m::ExtractResponse> {
        Ok(execute(
            client,
            &ExtractIso {
                id: self.id.clone(),
                mode: mode.to_string(),
                zoneid: zoneid.map(str::to_string),
                url: None,
            },
        )
        .await?)
    }

    /// `cmd.id` is replaced with the id of this ISO
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn update(&self, client: &dyn ApiClient, cmd: UpdateIso) -> Result<Iso> {
        let cmd = UpdateIso {
            id: self.id.clone(),
            ..cmd
        };
        Ok(Iso(execute(client, &cmd).await?))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn copy(
        &self,
        client: &dyn ApiClient,
        sourcezoneid: &str,
        destzoneid: &str,
    ) -> Result<Iso> {
        let iso = execute(
            client,
            &CopyIso {
                id: self.id.clone(),
                sourcezoneid: sourcezoneid.to_string(),
                destzoneid: destzoneid.to_string(),
            },
        )
        .await?;
        Ok(Iso(iso))
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListIsos) -> Result<Vec<Iso>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}
