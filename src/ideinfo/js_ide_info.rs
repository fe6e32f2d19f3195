use serde::{Deserialize, Serialize};

use crate::model::ArtifactLocation;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsIdeInfo {
    pub sources: Vec<ArtifactLocation>,
}

impl JsIdeInfo {
    pub fn builder() -> JsIdeInfoBuilder {
        JsIdeInfoBuilder::default()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsIdeInfoBuilder {
    sources: Vec<ArtifactLocation>,
}

impl JsIdeInfoBuilder {
    pub fn add_sources(mut self, sources: impl IntoIterator<Item = ArtifactLocation>) -> Self {
        self.sources.extend(sources);
        self
    }

    pub fn build(self) -> JsIdeInfo {
        JsIdeInfo {
            sources: self.sources,
        }
    }
}
