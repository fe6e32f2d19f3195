use serde::{Deserialize, Serialize};

use crate::model::ArtifactLocation;

/// The platform jar of an `android_sdk` target. Never set through
/// [`TargetIdeInfoBuilder`](crate::ideinfo::TargetIdeInfoBuilder).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidSdkIdeInfo {
    pub android_jar: ArtifactLocation,
}

impl AndroidSdkIdeInfo {
    pub fn new(android_jar: ArtifactLocation) -> Self {
        Self { android_jar }
    }
}
