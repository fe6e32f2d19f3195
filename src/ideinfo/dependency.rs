use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::model::TargetKey;

#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize_repr, Deserialize_repr,
)]
#[repr(u8)]
pub enum DependencyType {
    #[default]
    /// Needed to compile the dependent target.
    CompileTime = 0,
    /// Only needed when the dependent target runs.
    Runtime = 1,
}

/// A typed edge of the build graph.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub target_key: TargetKey,
    pub dependency_type: DependencyType,
}

impl Dependency {
    pub fn new(target_key: TargetKey, dependency_type: DependencyType) -> Self {
        Self {
            target_key,
            dependency_type,
        }
    }
}
