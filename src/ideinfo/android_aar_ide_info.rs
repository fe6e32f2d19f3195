use serde::{Deserialize, Serialize};

use crate::model::ArtifactLocation;

/// An imported Android archive.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidAarIdeInfo {
    pub aar: ArtifactLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_java_package: Option<String>,
}

impl AndroidAarIdeInfo {
    pub fn new(aar: ArtifactLocation, custom_java_package: Option<String>) -> Self {
        Self {
            aar,
            custom_java_package,
        }
    }
}
