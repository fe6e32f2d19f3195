use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Label;

/// Identity of a target within the build graph.
///
/// A plain target is identified by its label alone. Targets produced by aspects carry the
/// ordered list of aspect ids that generated them.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetKey {
    label: Label,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    aspect_ids: Vec<String>,
}

impl TargetKey {
    pub fn for_plain_target(label: Label) -> Self {
        Self {
            label,
            aspect_ids: vec![],
        }
    }

    pub fn for_general_target(label: Label, aspect_ids: Vec<String>) -> Self {
        Self { label, aspect_ids }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn aspect_ids(&self) -> &[String] {
        &self.aspect_ids
    }

    pub fn is_plain_target(&self) -> bool {
        self.aspect_ids.is_empty()
    }
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        for aspect_id in &self.aspect_ids {
            write!(f, "#{}", aspect_id)?;
        }
        Ok(())
    }
}
