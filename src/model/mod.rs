//! Primitive value types: identifiers and locators shared by the whole target model.

pub use artifact_location::{ArtifactLocation, ArtifactLocationBuilder};
pub use kind::{Kind, LanguageClass, RuleType};
pub use label::Label;
pub use target_key::TargetKey;

mod artifact_location;
mod kind;
mod label;
mod target_key;
