use serde::{Deserialize, Serialize};

use crate::model::ArtifactLocation;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DartIdeInfo {
    pub sources: Vec<ArtifactLocation>,
}

impl DartIdeInfo {
    pub fn builder() -> DartIdeInfoBuilder {
        DartIdeInfoBuilder::default()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DartIdeInfoBuilder {
    sources: Vec<ArtifactLocation>,
}

impl DartIdeInfoBuilder {
    pub fn add_sources(mut self, sources: impl IntoIterator<Item = ArtifactLocation>) -> Self {
        self.sources.extend(sources);
        self
    }

    pub fn build(self) -> DartIdeInfo {
        DartIdeInfo {
            sources: self.sources,
        }
    }
}
