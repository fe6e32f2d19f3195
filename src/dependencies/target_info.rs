use serde::{Deserialize, Serialize};

use crate::ideinfo::TestSize;
use crate::model::{ArtifactLocation, Kind, Label, RuleType};

/// Toolchain-agnostic summary of a target, as seen by dependency resolution.
///
/// Built fresh from a [`TargetIdeInfo`](crate::ideinfo::TargetIdeInfo) on request and
/// holds no reference back to it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetInfo {
    label: Label,
    /// Rule name of the target's kind, empty when the kind is unknown.
    kind_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    test_size: Option<TestSize>,
    #[serde(default)]
    sources: Vec<ArtifactLocation>,
}

impl TargetInfo {
    pub fn builder(label: Label, kind_string: impl Into<String>) -> TargetInfoBuilder {
        TargetInfoBuilder {
            label,
            kind_string: kind_string.into(),
            test_size: None,
            sources: vec![],
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn kind_string(&self) -> &str {
        &self.kind_string
    }

    pub fn kind(&self) -> Option<Kind> {
        Kind::from_string(&self.kind_string)
    }

    /// `None` unless the target carried test metadata.
    pub fn test_size(&self) -> Option<TestSize> {
        self.test_size
    }

    pub fn sources(&self) -> &[ArtifactLocation] {
        &self.sources
    }

    pub fn is_test(&self) -> bool {
        self.kind()
            .map_or(false, |kind| kind.rule_type() == RuleType::Test)
    }
}

#[derive(Clone, Debug)]
pub struct TargetInfoBuilder {
    label: Label,
    kind_string: String,
    test_size: Option<TestSize>,
    sources: Vec<ArtifactLocation>,
}

impl TargetInfoBuilder {
    pub fn set_test_size(mut self, test_size: Option<TestSize>) -> Self {
        self.test_size = test_size;
        self
    }

    pub fn set_sources(mut self, sources: Vec<ArtifactLocation>) -> Self {
        self.sources = sources;
        self
    }

    pub fn build(self) -> TargetInfo {
        TargetInfo {
            label: self.label,
            kind_string: self.kind_string,
            test_size: self.test_size,
            sources: self.sources,
        }
    }
}
