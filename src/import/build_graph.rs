//! Wire format of a build-graph dump, one [`RawTarget`] per build target.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::IdeInfoError;
use crate::ideinfo::*;
use crate::model::ArtifactLocation;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildGraph {
    #[serde(default)]
    pub targets: Vec<RawTarget>,
}

impl BuildGraph {
    pub fn from_reader(reader: impl Read) -> Result<BuildGraph> {
        serde_json::from_reader(reader).context("Failed to parse build graph")
    }

    pub fn from_path(path: &Path) -> Result<BuildGraph> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open build graph {}", path.display()))?;
        BuildGraph::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid build graph {}", path.display()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDependency {
    pub label: String,
    #[serde(default)]
    pub dependency_type: DependencyType,
}

/// One target as reported by the build tool. Labels and kinds are kept as strings until
/// [`RawTarget::into_builder`] validates them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTarget {
    pub label: String,
    pub kind: String,
    pub build_file: Option<ArtifactLocation>,
    pub deps: Vec<RawDependency>,
    pub tags: Vec<String>,
    pub sources: Vec<ArtifactLocation>,
    pub c_info: Option<CIdeInfoBuilder>,
    pub c_toolchain_info: Option<CToolchainIdeInfoBuilder>,
    pub java_info: Option<JavaIdeInfoBuilder>,
    pub android_info: Option<AndroidIdeInfoBuilder>,
    pub android_aar_info: Option<AndroidAarIdeInfo>,
    pub py_info: Option<PyIdeInfoBuilder>,
    pub go_info: Option<GoIdeInfoBuilder>,
    pub js_info: Option<JsIdeInfoBuilder>,
    pub ts_info: Option<TsIdeInfoBuilder>,
    pub dart_info: Option<DartIdeInfoBuilder>,
    pub test_info: Option<TestIdeInfoBuilder>,
    pub java_toolchain_info: Option<JavaToolchainIdeInfoBuilder>,
    pub kotlin_toolchain_info: Option<KotlinToolchainIdeInfoBuilder>,
}

impl RawTarget {
    pub fn into_builder(self) -> Result<TargetIdeInfoBuilder, IdeInfoError> {
        let mut builder = TargetIdeInfo::builder()
            .set_label_str(&self.label)?
            .set_kind_str(&self.kind)?;

        if let Some(build_file) = self.build_file {
            builder = builder.set_build_file(build_file);
        }
        for dep in self.deps {
            builder = match dep.dependency_type {
                DependencyType::CompileTime => builder.add_dependency_str(&dep.label)?,
                DependencyType::Runtime => builder.add_runtime_dep_str(&dep.label)?,
            };
        }
        for tag in self.tags {
            builder = builder.add_tag(tag);
        }
        builder = builder.add_sources(self.sources);

        if let Some(info) = self.c_info {
            builder = builder.set_c_info(info);
        }
        if let Some(info) = self.c_toolchain_info {
            builder = builder.set_c_toolchain_info(info);
        }
        if let Some(info) = self.java_info {
            builder = builder.set_java_info(info);
        }
        if let Some(info) = self.android_info {
            builder = builder.set_android_info(info);
        }
        if let Some(info) = self.android_aar_info {
            builder = builder.set_android_aar_info(info);
        }
        if let Some(info) = self.py_info {
            builder = builder.set_py_info(info);
        }
        if let Some(info) = self.go_info {
            builder = builder.set_go_info(info);
        }
        if let Some(info) = self.js_info {
            builder = builder.set_js_info(info);
        }
        if let Some(info) = self.ts_info {
            builder = builder.set_ts_info(info);
        }
        if let Some(info) = self.dart_info {
            builder = builder.set_dart_info(info);
        }
        if let Some(info) = self.test_info {
            builder = builder.set_test_info(info);
        }
        if let Some(info) = self.java_toolchain_info {
            builder = builder.set_java_toolchain_info(info);
        }
        if let Some(info) = self.kotlin_toolchain_info {
            builder = builder.set_kotlin_toolchain_info(info);
        }

        Ok(builder)
    }

    pub fn into_target(self) -> Result<TargetIdeInfo, IdeInfoError> {
        self.into_builder()?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Kind, Label, TargetKey};

    const CC_TARGET: &str = r#"{
        "label": "//cpp:lib",
        "kind": "cc_library",
        "buildFile": {"relativePath": "cpp/BUILD", "isSource": true},
        "deps": [
            {"label": "//base:base"},
            {"label": "//base:runtime_data", "dependencyType": 1}
        ],
        "tags": ["manual"],
        "sources": [{"relativePath": "cpp/lib.cc", "isSource": true}],
        "cInfo": {
            "sources": [{"relativePath": "cpp/lib.cc", "isSource": true}],
            "headers": [{"relativePath": "cpp/lib.h", "isSource": true}]
        },
        "testInfo": {"testSize": "large"}
    }"#;

    #[test]
    fn raw_target_into_target() {
        let raw: RawTarget = serde_json::from_str(CC_TARGET).unwrap();
        let target = raw.into_target().unwrap();

        assert_eq!(target.to_string(), "//cpp:lib");
        assert_eq!(target.kind(), Some(Kind::CC_LIBRARY));
        assert_eq!(
            target.build_file(),
            Some(&ArtifactLocation::source("cpp/BUILD"))
        );
        assert_eq!(
            target.dependencies(),
            &[
                Dependency::new(
                    TargetKey::for_plain_target(Label::parse("//base:base").unwrap()),
                    DependencyType::CompileTime
                ),
                Dependency::new(
                    TargetKey::for_plain_target(Label::parse("//base:runtime_data").unwrap()),
                    DependencyType::Runtime
                ),
            ]
        );
        assert_eq!(target.tags(), &["manual"]);
        assert_eq!(
            target.sources(),
            &[
                ArtifactLocation::source("cpp/lib.cc"),
                ArtifactLocation::source("cpp/lib.h")
            ]
        );
        assert_eq!(target.test_ide_info().unwrap().test_size, TestSize::Large);
        assert!(target.java_ide_info().is_none());
    }

    #[test]
    fn invalid_dependency_label() {
        let raw = RawTarget {
            label: "//a:b".to_string(),
            kind: "java_library".to_string(),
            deps: vec![RawDependency {
                label: "a:c".to_string(),
                dependency_type: DependencyType::CompileTime,
            }],
            ..RawTarget::default()
        };
        assert!(matches!(
            raw.into_target(),
            Err(IdeInfoError::InvalidLabel { label, .. }) if label == "a:c"
        ));
    }

    #[test]
    fn unknown_kind() {
        let raw = RawTarget {
            label: "//a:b".to_string(),
            kind: "my_macro".to_string(),
            ..RawTarget::default()
        };
        assert_eq!(
            raw.into_target(),
            Err(IdeInfoError::UnknownKind("my_macro".to_string()))
        );
    }

    #[test]
    fn build_graph_from_reader() {
        let graph =
            BuildGraph::from_reader(format!(r#"{{"targets": [{}]}}"#, CC_TARGET).as_bytes())
                .unwrap();
        assert_eq!(graph.targets.len(), 1);
        assert_eq!(graph.targets[0].label, "//cpp:lib");

        assert!(BuildGraph::from_reader("[1, 2]".as_bytes()).is_err());
        assert!(BuildGraph::from_reader("{}".as_bytes()).unwrap().targets.is_empty());
    }
}
