use serde::{Deserialize, Serialize};

use crate::model::ArtifactLocation;

/// A jar produced or imported by a Java target.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LibraryArtifact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_jar: Option<ArtifactLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_jar: Option<ArtifactLocation>,
    pub source_jars: Vec<ArtifactLocation>,
}

impl LibraryArtifact {
    /// The jar the IDE should index: the class jar if present, otherwise the interface jar.
    pub fn jar_for_indexing(&self) -> Option<&ArtifactLocation> {
        self.class_jar.as_ref().or(self.interface_jar.as_ref())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JavaIdeInfo {
    pub jars: Vec<LibraryArtifact>,
    /// Jars produced by annotation processors.
    pub generated_jars: Vec<LibraryArtifact>,
    pub sources: Vec<ArtifactLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manifest: Option<ArtifactLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jdeps: Option<ArtifactLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_class: Option<String>,
}

impl JavaIdeInfo {
    pub fn builder() -> JavaIdeInfoBuilder {
        JavaIdeInfoBuilder::default()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JavaIdeInfoBuilder {
    jars: Vec<LibraryArtifact>,
    generated_jars: Vec<LibraryArtifact>,
    sources: Vec<ArtifactLocation>,
    package_manifest: Option<ArtifactLocation>,
    jdeps: Option<ArtifactLocation>,
    main_class: Option<String>,
    test_class: Option<String>,
}

impl JavaIdeInfoBuilder {
    pub fn add_jar(mut self, jar: LibraryArtifact) -> Self {
        self.jars.push(jar);
        self
    }

    pub fn add_generated_jar(mut self, jar: LibraryArtifact) -> Self {
        self.generated_jars.push(jar);
        self
    }

    pub fn add_sources(mut self, sources: impl IntoIterator<Item = ArtifactLocation>) -> Self {
        self.sources.extend(sources);
        self
    }

    pub fn set_package_manifest(mut self, package_manifest: ArtifactLocation) -> Self {
        self.package_manifest = Some(package_manifest);
        self
    }

    pub fn set_jdeps(mut self, jdeps: ArtifactLocation) -> Self {
        self.jdeps = Some(jdeps);
        self
    }

    pub fn set_main_class(mut self, main_class: impl Into<String>) -> Self {
        self.main_class = Some(main_class.into());
        self
    }

    pub fn set_test_class(mut self, test_class: impl Into<String>) -> Self {
        self.test_class = Some(test_class.into());
        self
    }

    pub fn build(self) -> JavaIdeInfo {
        JavaIdeInfo {
            jars: self.jars,
            generated_jars: self.generated_jars,
            sources: self.sources,
            package_manifest: self.package_manifest,
            jdeps: self.jdeps,
            main_class: self.main_class,
            test_class: self.test_class,
        }
    }
}
