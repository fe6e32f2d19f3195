//! Cross-toolchain views of imported targets, consumed by dependency resolution.

pub use target_info::{TargetInfo, TargetInfoBuilder};

mod target_info;
