use serde::{Deserialize, Serialize};

use crate::model::ArtifactLocation;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TsIdeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsconfig: Option<ArtifactLocation>,
}

impl TsIdeInfo {
    pub fn builder() -> TsIdeInfoBuilder {
        TsIdeInfoBuilder::default()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TsIdeInfoBuilder {
    tsconfig: Option<ArtifactLocation>,
}

impl TsIdeInfoBuilder {
    pub fn set_tsconfig(mut self, tsconfig: ArtifactLocation) -> Self {
        self.tsconfig = Some(tsconfig);
        self
    }

    pub fn build(self) -> TsIdeInfo {
        TsIdeInfo {
            tsconfig: self.tsconfig,
        }
    }
}
