use crate::{
    api::{offering::CreateServiceOffering, KeyValue},
    builder::{required, Builder, BuilderError},
};

/// Service offerings commonly used by tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferingPreset {
    Tiny,
    Small,
    Medium,
    Big,
    /// Small offering with HA, on hosts tagged `ha`
    HaSmall,
    /// Small offering on hosts tagged `vmsync`
    TaggedSmall,
}

#[derive(Debug, Default)]
pub struct ServiceOfferingBuilder {
    pub name: Option<String>,
    pub displaytext: Option<String>,
    pub cpunumber: Option<i64>,
    pub cpuspeed: Option<i64>,
    pub memory: Option<i64>,
    pub storagetype: Option<String>,
    pub systemvmtype: Option<String>,
    pub issystem: Option<bool>,
    pub tags: Option<String>,
    pub hosttags: Option<String>,
    pub deploymentplanner: Option<String>,
    pub details: Vec<KeyValue>,
    pub isvolatile: Option<bool>,
    pub miniops: Option<i64>,
    pub maxiops: Option<i64>,
    pub customizediops: Option<bool>,
    pub offerha: Option<bool>,
    pub domainid: Option<String>,
}

impl ServiceOfferingBuilder {
    pub fn new() -> ServiceOfferingBuilder {
        ServiceOfferingBuilder::default()
    }

    pub fn preset(preset: OfferingPreset) -> ServiceOfferingBuilder {
        let (name, memory) = match preset {
            OfferingPreset::Tiny => ("Tiny Instance", 128),
            OfferingPreset::Small => ("Small Instance", 256),
            OfferingPreset::Medium => ("Medium Instance", 256),
            OfferingPreset::Big => ("BigInstance", 512),
            OfferingPreset::HaSmall => ("HA Small Instance", 256),
            OfferingPreset::TaggedSmall => ("Tagged Small Instance", 256),
        };
        let builder = ServiceOfferingBuilder::new()
            .with_name(name)
            .with_displaytext(name)
            .with_cpu(1, 100)
            .with_memory(memory);

        match preset {
            OfferingPreset::HaSmall => builder.with_host_tags("ha").with_ha(true),
            OfferingPreset::TaggedSmall => builder.with_host_tags("vmsync"),
            _ => builder,
        }
    }

    pub fn with_name(mut self, name: &str) -> ServiceOfferingBuilder {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_displaytext(mut self, displaytext: &str) -> ServiceOfferingBuilder {
        self.displaytext = Some(displaytext.to_string());
        self
    }

    /// Number of cores and speed in MHz
    pub fn with_cpu(mut self, cpunumber: i64, cpuspeed: i64) -> ServiceOfferingBuilder {
        self.cpunumber = Some(cpunumber);
        self.cpuspeed = Some(cpuspeed);
        self
    }

    /// MB
    pub fn with_memory(mut self, memory: i64) -> ServiceOfferingBuilder {
        self.memory = Some(memory);
        self
    }

    /// `local` or `shared`
    pub fn with_storage_type(mut self, storagetype: &str) -> ServiceOfferingBuilder {
        self.storagetype = Some(storagetype.to_string());
        self
    }

    pub fn with_system_vm_type(mut self, systemvmtype: &str) -> ServiceOfferingBuilder {
        self.systemvmtype = Some(systemvmtype.to_string());
        self.issystem = Some(true);
        self
    }

    pub fn with_tags(mut self, tags: &str) -> ServiceOfferingBuilder {
        self.tags = Some(tags.to_string());
        self
    }

    pub fn with_host_tags(mut self, hosttags: &str) -> ServiceOfferingBuilder {
        self.hosttags = Some(hosttags.to_string());
        self
    }

    pub fn with_deployment_planner(mut self, planner: &str) -> ServiceOfferingBuilder {
        self.deploymentplanner = Some(planner.to_string());
        self
    }

    pub fn with_detail(mut self, key: &str, value: &str) -> ServiceOfferingBuilder {
        self.details.push(KeyValue::new(key, value));
        self
    }

    pub fn as_volatile(mut self) -> ServiceOfferingBuilder {
        self.isvolatile = Some(true);
        self
    }

    pub fn with_iops(mut self, miniops: i64, maxiops: i64) -> ServiceOfferingBuilder {
        self.miniops = Some(miniops);
        self.maxiops = Some(maxiops);
        self
    }

    pub fn with_customized_iops(mut self, customized: bool) -> ServiceOfferingBuilder {
        self.customizediops = Some(customized);
        self
    }

    pub fn with_ha(mut self, offerha: bool) -> ServiceOfferingBuilder {
        self.offerha = Some(offerha);
        self
    }

    /// Makes the offering private to a domain
    pub fn with_domain(mut self, domainid: &str) -> ServiceOfferingBuilder {
        self.domainid = Some(domainid.to_string());
        self
    }
}

impl Builder<CreateServiceOffering> for ServiceOfferingBuilder {
    fn try_build(self) -> Result<CreateServiceOffering, BuilderError> {
        Ok(CreateServiceOffering {
            cpunumber: Some(required("cpunumber", self.cpunumber)?),
            cpuspeed: Some(required("cpuspeed", self.cpuspeed)?),
            displaytext: required("displaytext", self.displaytext)?,
            memory: Some(required("memory", self.memory)?),
            name: required("name", self.name)?,
            storagetype: self.storagetype,
            systemvmtype: self.systemvmtype,
            issystem: self.issystem,
            tags: self.tags,
            hosttags: self.hosttags,
            deploymentplanner: self.deploymentplanner,
            serviceofferingdetails: self.details,
            isvolatile: self.isvolatile,
            miniops: self.miniops,
            maxiops: self.maxiops,
            customizediops: self.customizediops,
            offerha: self.offerha,
            domainid: self.domainid,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tiny_preset() {
        let offering = ServiceOfferingBuilder::preset(OfferingPreset::Tiny)
            .with_storage_type("local")
            .try_build()
            .unwrap();
        assert_eq!(offering.name, "Tiny Instance");
        assert_eq!(offering.cpunumber, Some(1));
        assert_eq!(offering.cpuspeed, Some(100));
        assert_eq!(offering.memory, Some(128));
        assert_eq!(offering.storagetype.as_deref(), Some("local"));
        assert_eq!(offering.offerha, None);
    }

    #[test]
    fn ha_preset() {
        let offering = ServiceOfferingBuilder::preset(OfferingPreset::HaSmall)
            .try_build()
            .unwrap();
        assert_eq!(offering.hosttags.as_deref(), Some("ha"));
        assert_eq!(offering.offerha, Some(true));
    }

    #[test]
    fn offering_without_memory() {
        let err = ServiceOfferingBuilder::new()
            .with_name("custom")
            .with_displaytext("custom")
            .with_cpu(2, 1000)
            .try_build()
            .unwrap_err();
        assert_eq!(err, BuilderError::MissingRequiredField("memory".to_string()));
    }
}
