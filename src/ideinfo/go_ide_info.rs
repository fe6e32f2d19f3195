use serde::{Deserialize, Serialize};

use crate::model::ArtifactLocation;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoIdeInfo {
    pub sources: Vec<ArtifactLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_path: Option<String>,
}

impl GoIdeInfo {
    pub fn builder() -> GoIdeInfoBuilder {
        GoIdeInfoBuilder::default()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoIdeInfoBuilder {
    sources: Vec<ArtifactLocation>,
    import_path: Option<String>,
}

impl GoIdeInfoBuilder {
    pub fn add_sources(mut self, sources: impl IntoIterator<Item = ArtifactLocation>) -> Self {
        self.sources.extend(sources);
        self
    }

    pub fn set_import_path(mut self, import_path: impl Into<String>) -> Self {
        self.import_path = Some(import_path.into());
        self
    }

    pub fn build(self) -> GoIdeInfo {
        GoIdeInfo {
            sources: self.sources,
            import_path: self.import_path,
        }
    }
}
