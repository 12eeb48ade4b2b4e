use crate::{
    api::storage::{CreateVolume, RegisterTemplate},
    builder::{required, Builder, BuilderError},
    naming::with_random_suffix,
};

#[derive(Debug, Default)]
pub struct VolumeBuilder {
    pub name: Option<String>,
    pub zoneid: Option<String>,
    pub diskofferingid: Option<String>,
    /// GB, for custom disk offerings
    pub size: Option<i64>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}

impl VolumeBuilder {
    pub fn new() -> VolumeBuilder {
        VolumeBuilder::default()
    }

    pub fn with_name(mut self, name: &str) -> VolumeBuilder {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_zone(mut self, zoneid: &str) -> VolumeBuilder {
        self.zoneid = Some(zoneid.to_string());
        self
    }

    pub fn with_disk_offering(mut self, diskofferingid: &str) -> VolumeBuilder {
        self.diskofferingid = Some(diskofferingid.to_string());
        self
    }

    pub fn with_size(mut self, size: i64) -> VolumeBuilder {
        self.size = Some(size);
        self
    }

    pub fn with_account(mut self, account: &str, domainid: &str) -> VolumeBuilder {
        self.account = Some(account.to_string());
        self.domainid = Some(domainid.to_string());
        self
    }

    pub fn with_project(mut self, projectid: &str) -> VolumeBuilder {
        self.projectid = Some(projectid.to_string());
        self
    }
}

impl Builder<CreateVolume> for VolumeBuilder {
    fn try_build(self) -> Result<CreateVolume, BuilderError> {
        Ok(CreateVolume {
            name: Some(required("name", self.name)?),
            zoneid: Some(required("zoneid", self.zoneid)?),
            diskofferingid: self.diskofferingid,
            size: self.size,
            account: self.account,
            domainid: self.domainid,
            projectid: self.projectid,
            ..Default::default()
        })
    }
}

/// Registers a template from a URL. The name gets a random suffix.
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub format: Option<String>,
    pub hypervisor: Option<String>,
    pub ostypeid: Option<String>,
    pub url: Option<String>,
    pub zoneid: Option<String>,
    pub isfeatured: bool,
    pub ispublic: bool,
    pub isextractable: bool,
    pub passwordenabled: bool,
    pub checksum: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}

impl TemplateBuilder {
    pub fn new() -> TemplateBuilder {
        TemplateBuilder::default()
    }

    pub fn with_name(mut self, name: &str) -> TemplateBuilder {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_displaytext(mut self, displaytext: &str) -> TemplateBuilder {
        self.displaytext = Some(displaytext.to_string());
        self
    }

    /// `VHD`, `QCOW2`, `OVA`, `RAW`...
    pub fn with_format(mut self, format: &str) -> TemplateBuilder {
        self.format = Some(format.to_string());
        self
    }

    pub fn with_hypervisor(mut self, hypervisor: &str) -> TemplateBuilder {
        self.hypervisor = Some(hypervisor.to_string());
        self
    }

    pub fn with_os_type(mut self, ostypeid: &str) -> TemplateBuilder {
        self.ostypeid = Some(ostypeid.to_string());
        self
    }

    pub fn with_url(mut self, url: &str) -> TemplateBuilder {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_zone(mut self, zoneid: &str) -> TemplateBuilder {
        self.zoneid = Some(zoneid.to_string());
        self
    }

    pub fn as_featured(mut self) -> TemplateBuilder {
        self.isfeatured = true;
        self
    }

    pub fn as_public(mut self) -> TemplateBuilder {
        self.ispublic = true;
        self
    }

    pub fn as_extractable(mut self) -> TemplateBuilder {
        self.isextractable = true;
        self
    }

    pub fn with_password_enabled(mut self) -> TemplateBuilder {
        self.passwordenabled = true;
        self
    }

    pub fn with_checksum(mut self, checksum: &str) -> TemplateBuilder {
        self.checksum = Some(checksum.to_string());
        self
    }

    pub fn with_account(mut self, account: &str, domainid: &str) -> TemplateBuilder {
        self.account = Some(account.to_string());
        self.domainid = Some(domainid.to_string());
        self
    }

    pub fn with_project(mut self, projectid: &str) -> TemplateBuilder {
        self.projectid = Some(projectid.to_string());
        self
    }
}

impl Builder<RegisterTemplate> for TemplateBuilder {
    fn try_build(self) -> Result<RegisterTemplate, BuilderError> {
        let name = required("name", self.name)?;
        Ok(RegisterTemplate {
            name: with_random_suffix(&name),
            displaytext: required("displaytext", self.displaytext)?,
            format: required("format", self.format)?,
            hypervisor: required("hypervisor", self.hypervisor)?,
            ostypeid: required("ostypeid", self.ostypeid)?,
            url: required("url", self.url)?,
            zoneid: required("zoneid", self.zoneid)?,
            isfeatured: Some(self.isfeatured),
            ispublic: Some(self.ispublic),
            isextractable: Some(self.isextractable),
            passwordenabled: Some(self.passwordenabled),
            checksum: self.checksum,
            account: self.account,
            domainid: self.domainid,
            projectid: self.projectid,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn volume_requires_zone() {
        let err = VolumeBuilder::new().with_name("data").try_build().unwrap_err();
        assert_eq!(err, BuilderError::MissingRequiredField("zoneid".to_string()));
    }

    #[test]
    fn template_defaults_to_private() {
        let template = TemplateBuilder::new()
            .with_name("tiny-linux")
            .with_displaytext("Tiny Linux")
            .with_format("QCOW2")
            .with_hypervisor("KVM")
            .with_os_type("os-1")
            .with_url("http://dl.example.org/tiny.qcow2")
            .with_zone("z1")
            .as_featured()
            .try_build()
            .unwrap();
        assert!(template.name.starts_with("tiny-linux-"));
        assert_eq!(template.isfeatured, Some(true));
        assert_eq!(template.ispublic, Some(false));
        assert_eq!(template.passwordenabled, Some(false));
    }

    #[test]
    fn template_requires_os_type() {
        let err = TemplateBuilder::new()
            .with_name("t")
            .with_displaytext("t")
            .with_format("QCOW2")
            .with_hypervisor("KVM")
            .try_build()
            .unwrap_err();
        assert_eq!(err, BuilderError::MissingRequiredField("ostypeid".to_string()));
    }

    #[test]
    fn template_requires_hypervisor() {
        let err = TemplateBuilder::new()
            .with_name("t")
            .with_displaytext("t")
            .with_format("QCOW2")
            .with_os_type("os-1")
            .with_url("http://dl.example.org/tiny.qcow2")
            .with_zone("z1")
            .try_build()
            .unwrap_err();
        assert_eq!(err, BuilderError::MissingRequiredField("hypervisor".to_string()));
    }
}
