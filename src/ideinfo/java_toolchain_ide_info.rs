use serde::{Deserialize, Serialize};

use crate::model::ArtifactLocation;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JavaToolchainIdeInfo {
    pub source_version: String,
    pub target_version: String,
    pub javac_jars: Vec<ArtifactLocation>,
}

impl JavaToolchainIdeInfo {
    pub fn builder() -> JavaToolchainIdeInfoBuilder {
        JavaToolchainIdeInfoBuilder::default()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JavaToolchainIdeInfoBuilder {
    source_version: String,
    target_version: String,
    javac_jars: Vec<ArtifactLocation>,
}

impl JavaToolchainIdeInfoBuilder {
    pub fn set_source_version(mut self, source_version: impl Into<String>) -> Self {
        self.source_version = source_version.into();
        self
    }

    pub fn set_target_version(mut self, target_version: impl Into<String>) -> Self {
        self.target_version = target_version.into();
        self
    }

    pub fn add_javac_jars(mut self, jars: impl IntoIterator<Item = ArtifactLocation>) -> Self {
        self.javac_jars.extend(jars);
        self
    }

    pub fn build(self) -> JavaToolchainIdeInfo {
        JavaToolchainIdeInfo {
            source_version: self.source_version,
            target_version: self.target_version,
            javac_jars: self.javac_jars,
        }
    }
}
