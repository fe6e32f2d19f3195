use serde::{Deserialize, Serialize};

use crate::model::Label;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KotlinToolchainIdeInfo {
    pub language_version: String,
    /// Targets providing the Kotlin standard library.
    pub sdk_library_targets: Vec<Label>,
    pub kotlin_compiler_common_flags: Vec<String>,
}

impl KotlinToolchainIdeInfo {
    pub fn builder() -> KotlinToolchainIdeInfoBuilder {
        KotlinToolchainIdeInfoBuilder::default()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KotlinToolchainIdeInfoBuilder {
    language_version: String,
    sdk_library_targets: Vec<Label>,
    kotlin_compiler_common_flags: Vec<String>,
}

impl KotlinToolchainIdeInfoBuilder {
    pub fn set_language_version(mut self, language_version: impl Into<String>) -> Self {
        self.language_version = language_version.into();
        self
    }

    pub fn add_sdk_library_targets(mut self, targets: impl IntoIterator<Item = Label>) -> Self {
        self.sdk_library_targets.extend(targets);
        self
    }

    pub fn add_kotlin_compiler_common_flags(
        mut self,
        flags: impl IntoIterator<Item = String>,
    ) -> Self {
        self.kotlin_compiler_common_flags.extend(flags);
        self
    }

    pub fn build(self) -> KotlinToolchainIdeInfo {
        KotlinToolchainIdeInfo {
            language_version: self.language_version,
            sdk_library_targets: self.sdk_library_targets,
            kotlin_compiler_common_flags: self.kotlin_compiler_common_flags,
        }
    }
}
