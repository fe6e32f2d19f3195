use serde::{Deserialize, Serialize};

use crate::model::ArtifactLocation;

/// C/C++ compilation unit metadata of a target.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CIdeInfo {
    pub sources: Vec<ArtifactLocation>,
    pub headers: Vec<ArtifactLocation>,
    /// Headers that are included textually and never compiled on their own.
    pub textual_headers: Vec<ArtifactLocation>,
    pub local_copts: Vec<String>,
    pub transitive_include_directories: Vec<String>,
    pub transitive_quote_include_directories: Vec<String>,
    pub transitive_defines: Vec<String>,
    pub transitive_system_include_directories: Vec<String>,
}

impl CIdeInfo {
    pub fn builder() -> CIdeInfoBuilder {
        CIdeInfoBuilder::default()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CIdeInfoBuilder {
    sources: Vec<ArtifactLocation>,
    headers: Vec<ArtifactLocation>,
    textual_headers: Vec<ArtifactLocation>,
    local_copts: Vec<String>,
    transitive_include_directories: Vec<String>,
    transitive_quote_include_directories: Vec<String>,
    transitive_defines: Vec<String>,
    transitive_system_include_directories: Vec<String>,
}

impl CIdeInfoBuilder {
    pub fn add_sources(mut self, sources: impl IntoIterator<Item = ArtifactLocation>) -> Self {
        self.sources.extend(sources);
        self
    }

    pub fn add_headers(mut self, headers: impl IntoIterator<Item = ArtifactLocation>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn add_textual_headers(
        mut self,
        textual_headers: impl IntoIterator<Item = ArtifactLocation>,
    ) -> Self {
        self.textual_headers.extend(textual_headers);
        self
    }

    pub fn add_local_copts(mut self, copts: impl IntoIterator<Item = String>) -> Self {
        self.local_copts.extend(copts);
        self
    }

    pub fn add_transitive_include_directories(
        mut self,
        directories: impl IntoIterator<Item = String>,
    ) -> Self {
        self.transitive_include_directories.extend(directories);
        self
    }

    pub fn add_transitive_quote_include_directories(
        mut self,
        directories: impl IntoIterator<Item = String>,
    ) -> Self {
        self.transitive_quote_include_directories.extend(directories);
        self
    }

    pub fn add_transitive_defines(mut self, defines: impl IntoIterator<Item = String>) -> Self {
        self.transitive_defines.extend(defines);
        self
    }

    pub fn add_transitive_system_include_directories(
        mut self,
        directories: impl IntoIterator<Item = String>,
    ) -> Self {
        self.transitive_system_include_directories.extend(directories);
        self
    }

    pub fn build(self) -> CIdeInfo {
        CIdeInfo {
            sources: self.sources,
            headers: self.headers,
            textual_headers: self.textual_headers,
            local_copts: self.local_copts,
            transitive_include_directories: self.transitive_include_directories,
            transitive_quote_include_directories: self.transitive_quote_include_directories,
            transitive_defines: self.transitive_defines,
            transitive_system_include_directories: self.transitive_system_include_directories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates() {
        let info = CIdeInfo::builder()
            .add_sources([ArtifactLocation::source("a.cc")])
            .add_sources([ArtifactLocation::source("b.cc")])
            .add_headers([ArtifactLocation::source("a.h")])
            .add_transitive_defines(["NDEBUG".to_string()])
            .build();

        assert_eq!(
            info.sources,
            vec![ArtifactLocation::source("a.cc"), ArtifactLocation::source("b.cc")]
        );
        assert_eq!(info.headers, vec![ArtifactLocation::source("a.h")]);
        assert!(info.textual_headers.is_empty());
        assert_eq!(info.transitive_defines, vec!["NDEBUG".to_string()]);
    }

    #[test]
    fn builder_from_wire_payload() {
        let builder: CIdeInfoBuilder = serde_json::from_str(
            r#"{
                "sources": [{"relativePath": "a.cc", "isSource": true}],
                "textualHeaders": [{"relativePath": "a.inc", "isSource": true}],
                "localCopts": ["-Wall"]
            }"#,
        )
        .unwrap();
        let info = builder.build();

        assert_eq!(info.sources, vec![ArtifactLocation::source("a.cc")]);
        assert_eq!(info.textual_headers, vec![ArtifactLocation::source("a.inc")]);
        assert_eq!(info.local_copts, vec!["-Wall".to_string()]);
        assert!(info.headers.is_empty());
    }
}
