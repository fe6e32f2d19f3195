use serde::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use crate::model::ArtifactLocation;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Deserialize_enum_str, Serialize_enum_str)]
pub enum PythonVersion {
    #[serde(rename = "PY2")]
    Py2,
    #[default]
    #[serde(rename = "PY3")]
    Py3,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PyIdeInfo {
    pub sources: Vec<ArtifactLocation>,
    pub python_version: PythonVersion,
}

impl PyIdeInfo {
    pub fn builder() -> PyIdeInfoBuilder {
        PyIdeInfoBuilder::default()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PyIdeInfoBuilder {
    sources: Vec<ArtifactLocation>,
    python_version: PythonVersion,
}

impl PyIdeInfoBuilder {
    pub fn add_sources(mut self, sources: impl IntoIterator<Item = ArtifactLocation>) -> Self {
        self.sources.extend(sources);
        self
    }

    pub fn set_python_version(mut self, python_version: PythonVersion) -> Self {
        self.python_version = python_version;
        self
    }

    pub fn build(self) -> PyIdeInfo {
        PyIdeInfo {
            sources: self.sources,
            python_version: self.python_version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_deserialization;
    use insta::assert_json_snapshot;

    #[test]
    fn python_version() {
        assert_json_snapshot!(PythonVersion::Py2, @r#""PY2""#);
        assert_json_snapshot!(PythonVersion::Py3, @r#""PY3""#);
        test_deserialization(r#""PY2""#, &PythonVersion::Py2);
        assert_eq!(PyIdeInfo::builder().build().python_version, PythonVersion::Py3);
    }
}
