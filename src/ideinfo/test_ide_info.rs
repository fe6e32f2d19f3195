use serde::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

/// Size classification of a test target, as declared by its `size` attribute.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize_enum_str, Serialize_enum_str,
)]
#[serde(rename_all = "camelCase")]
pub enum TestSize {
    Small,
    /// The build tool's default for test rules.
    #[default]
    Medium,
    Large,
    Enormous,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestIdeInfo {
    pub test_size: TestSize,
}

impl TestIdeInfo {
    pub fn builder() -> TestIdeInfoBuilder {
        TestIdeInfoBuilder::default()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestIdeInfoBuilder {
    test_size: TestSize,
}

impl TestIdeInfoBuilder {
    pub fn set_test_size(mut self, test_size: TestSize) -> Self {
        self.test_size = test_size;
        self
    }

    pub fn build(self) -> TestIdeInfo {
        TestIdeInfo {
            test_size: self.test_size,
        }
    }
}
