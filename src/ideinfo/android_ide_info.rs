use serde::{Deserialize, Serialize};

use crate::model::{ArtifactLocation, Label};

/// Resource and manifest metadata of an Android target.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AndroidIdeInfo {
    pub resources: Vec<ArtifactLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<ArtifactLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_java_package: Option<String>,
    pub generate_resource_class: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_jar: Option<ArtifactLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_jar: Option<ArtifactLocation>,
    /// The app under test, for instrumentation test targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruments: Option<Label>,
}

impl AndroidIdeInfo {
    pub fn builder() -> AndroidIdeInfoBuilder {
        AndroidIdeInfoBuilder::default()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AndroidIdeInfoBuilder {
    resources: Vec<ArtifactLocation>,
    manifest: Option<ArtifactLocation>,
    resource_java_package: Option<String>,
    generate_resource_class: bool,
    resource_jar: Option<ArtifactLocation>,
    id_jar: Option<ArtifactLocation>,
    instruments: Option<Label>,
}

impl AndroidIdeInfoBuilder {
    pub fn add_resources(mut self, resources: impl IntoIterator<Item = ArtifactLocation>) -> Self {
        self.resources.extend(resources);
        self
    }

    pub fn set_manifest(mut self, manifest: ArtifactLocation) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn set_resource_java_package(mut self, java_package: impl Into<String>) -> Self {
        self.resource_java_package = Some(java_package.into());
        self
    }

    pub fn set_generate_resource_class(mut self, generate_resource_class: bool) -> Self {
        self.generate_resource_class = generate_resource_class;
        self
    }

    pub fn set_resource_jar(mut self, resource_jar: ArtifactLocation) -> Self {
        self.resource_jar = Some(resource_jar);
        self
    }

    pub fn set_id_jar(mut self, id_jar: ArtifactLocation) -> Self {
        self.id_jar = Some(id_jar);
        self
    }

    pub fn set_instruments(mut self, instruments: Label) -> Self {
        self.instruments = Some(instruments);
        self
    }

    pub fn build(self) -> AndroidIdeInfo {
        AndroidIdeInfo {
            resources: self.resources,
            manifest: self.manifest,
            resource_java_package: self.resource_java_package,
            generate_resource_class: self.generate_resource_class,
            resource_jar: self.resource_jar,
            id_jar: self.id_jar,
            instruments: self.instruments,
        }
    }
}
