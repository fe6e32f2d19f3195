use std::fmt;

use serde::{Deserialize, Serialize};

/// Locates a source, header or build file relative to the execution root.
///
/// Two locations are the same artifact iff all fields are equal; target sources are
/// deduplicated with this equality.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtifactLocation {
    /// Output root the artifact lives under, e.g. `bazel-out/k8-fastbuild/bin`.
    /// Empty for source files.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub root_execution_path_fragment: String,
    pub relative_path: String,
    pub is_source: bool,
    pub is_external: bool,
}

impl ArtifactLocation {
    pub fn builder() -> ArtifactLocationBuilder {
        ArtifactLocationBuilder::default()
    }

    /// Shorthand for a non-external source file.
    pub fn source(relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            is_source: true,
            ..ArtifactLocation::default()
        }
    }

    pub fn is_generated(&self) -> bool {
        !self.is_source
    }

    pub fn execution_root_relative_path(&self) -> String {
        if self.root_execution_path_fragment.is_empty() {
            self.relative_path.clone()
        } else {
            format!(
                "{}/{}",
                self.root_execution_path_fragment, self.relative_path
            )
        }
    }
}

impl fmt::Display for ArtifactLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.execution_root_relative_path())
    }
}

#[derive(Clone, Debug, Default)]
pub struct ArtifactLocationBuilder {
    root_execution_path_fragment: String,
    relative_path: String,
    is_source: bool,
    is_external: bool,
}

impl ArtifactLocationBuilder {
    pub fn set_root_execution_path_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.root_execution_path_fragment = fragment.into();
        self
    }

    pub fn set_relative_path(mut self, relative_path: impl Into<String>) -> Self {
        self.relative_path = relative_path.into();
        self
    }

    pub fn set_is_source(mut self, is_source: bool) -> Self {
        self.is_source = is_source;
        self
    }

    pub fn set_is_external(mut self, is_external: bool) -> Self {
        self.is_external = is_external;
        self
    }

    pub fn build(self) -> ArtifactLocation {
        ArtifactLocation {
            root_execution_path_fragment: self.root_execution_path_fragment,
            relative_path: self.relative_path,
            is_source: self.is_source,
            is_external: self.is_external,
        }
    }
}

impl From<ArtifactLocationBuilder> for ArtifactLocation {
    fn from(builder: ArtifactLocationBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_deserialization;
    use insta::assert_json_snapshot;

    #[test]
    fn execution_root_relative_path() {
        assert_eq!(
            ArtifactLocation::source("java/com/Foo.java").execution_root_relative_path(),
            "java/com/Foo.java"
        );
        let generated = ArtifactLocation::builder()
            .set_root_execution_path_fragment("bazel-out/k8-fastbuild/bin")
            .set_relative_path("java/com/Foo.srcjar")
            .build();
        assert!(generated.is_generated());
        assert_eq!(
            generated.to_string(),
            "bazel-out/k8-fastbuild/bin/java/com/Foo.srcjar"
        );
    }

    #[test]
    fn value_equality() {
        let a = ArtifactLocation::builder()
            .set_relative_path("foo.cc")
            .set_is_source(true)
            .build();
        assert_eq!(a, ArtifactLocation::source("foo.cc"));
        assert_ne!(
            a,
            ArtifactLocation::builder()
                .set_relative_path("foo.cc")
                .set_is_source(true)
                .set_is_external(true)
                .build()
        );
    }

    #[test]
    fn artifact_location() {
        assert_json_snapshot!(ArtifactLocation::source("foo/bar.py"),
            @r#"
        {
          "relativePath": "foo/bar.py",
          "isSource": true,
          "isExternal": false
        }
        "#
        );
        assert_json_snapshot!(
            ArtifactLocation::builder()
                .set_root_execution_path_fragment("bazel-out/bin")
                .set_relative_path("gen.h")
                .build(),
            @r#"
        {
          "rootExecutionPathFragment": "bazel-out/bin",
          "relativePath": "gen.h",
          "isSource": false,
          "isExternal": false
        }
        "#
        );
        test_deserialization(
            r#"{"relativePath": "foo/bar.py", "isSource": true}"#,
            &ArtifactLocation::source("foo/bar.py"),
        );
    }
}
