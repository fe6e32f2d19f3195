//! [`TargetIdeInfo`] is the frozen description of one build target; [`TargetIdeInfoBuilder`]
//! accumulates it while a target is being imported.

use std::fmt;

use itertools::Itertools;
use log::warn;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize};

use crate::dependencies::TargetInfo;
use crate::error::{IdeInfoError, Result};
use crate::ideinfo::*;
use crate::model::{ArtifactLocation, Kind, Label, TargetKey};

/// Toolchain-specific metadata of a target. Every slot is independent, a target may carry
/// several of them (e.g. Java and Android).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TargetFacets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c_ide_info: Option<CIdeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c_toolchain_ide_info: Option<CToolchainIdeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_ide_info: Option<JavaIdeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_ide_info: Option<AndroidIdeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_sdk_ide_info: Option<AndroidSdkIdeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_aar_ide_info: Option<AndroidAarIdeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub py_ide_info: Option<PyIdeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_ide_info: Option<GoIdeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_ide_info: Option<JsIdeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_ide_info: Option<TsIdeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dart_ide_info: Option<DartIdeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_ide_info: Option<TestIdeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_toolchain_ide_info: Option<JavaToolchainIdeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kotlin_toolchain_ide_info: Option<KotlinToolchainIdeInfo>,
}

/// Immutable metadata of a single build target.
///
/// Besides the key, every field is optional or may be empty so that snapshots written
/// before a field existed still load.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetIdeInfo {
    key: TargetKey,
    /// Rule names that are no longer registered read back as `None`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_known_kind"
    )]
    kind: Option<Kind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    build_file: Option<ArtifactLocation>,
    #[serde(default)]
    dependencies: Vec<Dependency>,
    #[serde(default)]
    tags: Vec<String>,
    /// Never contains two equal locations.
    #[serde(default, deserialize_with = "deserialize_unique_sources")]
    sources: Vec<ArtifactLocation>,
    #[serde(flatten)]
    facets: TargetFacets,
}

impl TargetIdeInfo {
    /// Duplicate sources are dropped, keeping the first occurrence.
    pub fn new(
        key: TargetKey,
        kind: Option<Kind>,
        build_file: Option<ArtifactLocation>,
        dependencies: Vec<Dependency>,
        tags: Vec<String>,
        sources: impl IntoIterator<Item = ArtifactLocation>,
        facets: TargetFacets,
    ) -> Self {
        Self {
            key,
            kind,
            build_file,
            dependencies,
            tags,
            sources: sources.into_iter().unique().collect(),
            facets,
        }
    }

    pub fn builder() -> TargetIdeInfoBuilder {
        TargetIdeInfoBuilder::default()
    }

    pub fn key(&self) -> &TargetKey {
        &self.key
    }

    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    pub fn build_file(&self) -> Option<&ArtifactLocation> {
        self.build_file.as_ref()
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn sources(&self) -> &[ArtifactLocation] {
        &self.sources
    }

    pub fn facets(&self) -> &TargetFacets {
        &self.facets
    }

    pub fn c_ide_info(&self) -> Option<&CIdeInfo> {
        self.facets.c_ide_info.as_ref()
    }

    pub fn c_toolchain_ide_info(&self) -> Option<&CToolchainIdeInfo> {
        self.facets.c_toolchain_ide_info.as_ref()
    }

    pub fn java_ide_info(&self) -> Option<&JavaIdeInfo> {
        self.facets.java_ide_info.as_ref()
    }

    pub fn android_ide_info(&self) -> Option<&AndroidIdeInfo> {
        self.facets.android_ide_info.as_ref()
    }

    pub fn android_sdk_ide_info(&self) -> Option<&AndroidSdkIdeInfo> {
        self.facets.android_sdk_ide_info.as_ref()
    }

    pub fn android_aar_ide_info(&self) -> Option<&AndroidAarIdeInfo> {
        self.facets.android_aar_ide_info.as_ref()
    }

    pub fn py_ide_info(&self) -> Option<&PyIdeInfo> {
        self.facets.py_ide_info.as_ref()
    }

    pub fn go_ide_info(&self) -> Option<&GoIdeInfo> {
        self.facets.go_ide_info.as_ref()
    }

    pub fn js_ide_info(&self) -> Option<&JsIdeInfo> {
        self.facets.js_ide_info.as_ref()
    }

    pub fn ts_ide_info(&self) -> Option<&TsIdeInfo> {
        self.facets.ts_ide_info.as_ref()
    }

    pub fn dart_ide_info(&self) -> Option<&DartIdeInfo> {
        self.facets.dart_ide_info.as_ref()
    }

    pub fn test_ide_info(&self) -> Option<&TestIdeInfo> {
        self.facets.test_ide_info.as_ref()
    }

    pub fn java_toolchain_ide_info(&self) -> Option<&JavaToolchainIdeInfo> {
        self.facets.java_toolchain_ide_info.as_ref()
    }

    pub fn kotlin_toolchain_ide_info(&self) -> Option<&KotlinToolchainIdeInfo> {
        self.facets.kotlin_toolchain_ide_info.as_ref()
    }

    /// Returns whether this target is one of the kinds. Always false when the kind is unknown.
    pub fn kind_is_one_of<'a>(&self, kinds: impl IntoIterator<Item = &'a Kind>) -> bool {
        match self.kind {
            Some(kind) => kind.is_one_of(kinds),
            None => false,
        }
    }

    pub fn is_plain_target(&self) -> bool {
        self.key.is_plain_target()
    }

    pub fn to_target_info(&self) -> TargetInfo {
        TargetInfo::builder(
            self.key.label().clone(),
            self.kind.map(|kind| kind.to_string()).unwrap_or_default(),
        )
        .set_test_size(self.test_ide_info().map(|info| info.test_size))
        .set_sources(self.sources.clone())
        .build()
    }
}

impl fmt::Display for TargetIdeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

fn deserialize_known_kind<'de, D>(deserializer: D) -> Result<Option<Kind>, D::Error>
where
    D: Deserializer<'de>,
{
    let rule_name = Option::<String>::deserialize(deserializer)?;
    Ok(rule_name.and_then(|rule_name| {
        let kind = Kind::from_string(&rule_name);
        if kind.is_none() {
            warn!("Dropping unknown rule kind '{}'", rule_name);
        }
        kind
    }))
}

fn deserialize_unique_sources<'de, D>(deserializer: D) -> Result<Vec<ArtifactLocation>, D::Error>
where
    D: Deserializer<'de>,
{
    let sources = Vec::<ArtifactLocation>::deserialize(deserializer)?;
    Ok(sources.into_iter().unique().collect())
}

/// Accumulates one target's metadata. Not meant to be shared between threads; freeze it
/// with [`TargetIdeInfoBuilder::build`] once every facet of the target has been parsed.
#[derive(Clone, Debug, Default)]
pub struct TargetIdeInfoBuilder {
    key: Option<TargetKey>,
    kind: Option<Kind>,
    build_file: Option<ArtifactLocation>,
    dependencies: Vec<Dependency>,
    tags: Vec<String>,
    sources: Vec<ArtifactLocation>,
    seen_sources: FxHashSet<ArtifactLocation>,
    facets: TargetFacets,
}

impl TargetIdeInfoBuilder {
    fn push_source(&mut self, source: ArtifactLocation) {
        if self.seen_sources.insert(source.clone()) {
            self.sources.push(source);
        }
    }

    pub fn set_label(mut self, label: Label) -> Self {
        self.key = Some(TargetKey::for_plain_target(label));
        self
    }

    pub fn set_label_str(self, label: &str) -> Result<Self> {
        Ok(self.set_label(Label::parse(label)?))
    }

    pub fn set_kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn set_kind_str(self, kind: &str) -> Result<Self> {
        Ok(self.set_kind(Kind::parse(kind)?))
    }

    pub fn set_build_file(mut self, build_file: ArtifactLocation) -> Self {
        self.build_file = Some(build_file);
        self
    }

    /// Adding a location that is already a source of the target is a no-op.
    pub fn add_source(mut self, source: impl Into<ArtifactLocation>) -> Self {
        self.push_source(source.into());
        self
    }

    pub fn add_sources(mut self, sources: impl IntoIterator<Item = ArtifactLocation>) -> Self {
        for source in sources {
            self.push_source(source);
        }
        self
    }

    /// Also adds the facet's sources, headers and textual headers to the target's sources.
    pub fn set_c_info(mut self, c_info: CIdeInfoBuilder) -> Self {
        let c_info = c_info.build();
        c_info
            .sources
            .iter()
            .chain(&c_info.headers)
            .chain(&c_info.textual_headers)
            .for_each(|source| self.push_source(source.clone()));
        self.facets.c_ide_info = Some(c_info);
        self
    }

    pub fn set_c_toolchain_info(mut self, info: CToolchainIdeInfoBuilder) -> Self {
        self.facets.c_toolchain_ide_info = Some(info.build());
        self
    }

    pub fn set_java_info(mut self, java_info: JavaIdeInfoBuilder) -> Self {
        self.facets.java_ide_info = Some(java_info.build());
        self
    }

    pub fn set_android_info(mut self, android_info: AndroidIdeInfoBuilder) -> Self {
        self.facets.android_ide_info = Some(android_info.build());
        self
    }

    pub fn set_android_aar_info(mut self, aar_info: AndroidAarIdeInfo) -> Self {
        self.facets.android_aar_ide_info = Some(aar_info);
        self
    }

    pub fn set_py_info(mut self, py_info: PyIdeInfoBuilder) -> Self {
        self.facets.py_ide_info = Some(py_info.build());
        self
    }

    pub fn set_go_info(mut self, go_info: GoIdeInfoBuilder) -> Self {
        self.facets.go_ide_info = Some(go_info.build());
        self
    }

    pub fn set_js_info(mut self, js_info: JsIdeInfoBuilder) -> Self {
        self.facets.js_ide_info = Some(js_info.build());
        self
    }

    pub fn set_ts_info(mut self, ts_info: TsIdeInfoBuilder) -> Self {
        self.facets.ts_ide_info = Some(ts_info.build());
        self
    }

    pub fn set_dart_info(mut self, dart_info: DartIdeInfoBuilder) -> Self {
        self.facets.dart_ide_info = Some(dart_info.build());
        self
    }

    pub fn set_test_info(mut self, test_info: TestIdeInfoBuilder) -> Self {
        self.facets.test_ide_info = Some(test_info.build());
        self
    }

    pub fn set_java_toolchain_info(mut self, toolchain: JavaToolchainIdeInfoBuilder) -> Self {
        self.facets.java_toolchain_ide_info = Some(toolchain.build());
        self
    }

    pub fn set_kotlin_toolchain_info(mut self, toolchain: KotlinToolchainIdeInfoBuilder) -> Self {
        self.facets.kotlin_toolchain_ide_info = Some(toolchain.build());
        self
    }

    pub fn add_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn add_dependency(mut self, label: Label) -> Self {
        self.dependencies.push(Dependency::new(
            TargetKey::for_plain_target(label),
            DependencyType::CompileTime,
        ));
        self
    }

    pub fn add_dependency_str(self, label: &str) -> Result<Self> {
        Ok(self.add_dependency(Label::parse(label)?))
    }

    pub fn add_runtime_dep(mut self, label: Label) -> Self {
        self.dependencies.push(Dependency::new(
            TargetKey::for_plain_target(label),
            DependencyType::Runtime,
        ));
        self
    }

    pub fn add_runtime_dep_str(self, label: &str) -> Result<Self> {
        Ok(self.add_runtime_dep(Label::parse(label)?))
    }

    /// Freezes the target. Sources keep the order in which they were first added.
    pub fn build(self) -> Result<TargetIdeInfo> {
        let key = self.key.ok_or(IdeInfoError::MissingLabel)?;
        let mut facets = self.facets;
        // Populated outside of this builder.
        facets.android_sdk_ide_info = None;

        Ok(TargetIdeInfo::new(
            key,
            self.kind,
            self.build_file,
            self.dependencies,
            self.tags,
            self.sources,
            facets,
        ))
    }
}
