//! Target metadata model of a Blaze/Bazel IDE integration.
//!
//! Every build target reported by the build tool is turned into an immutable
//! [`TargetIdeInfo`](ideinfo::TargetIdeInfo) and published through a
//! [`TargetMap`](target_map::TargetMap).

pub mod config;
pub mod dependencies;
pub mod error;
pub mod ideinfo;
pub mod import;
pub mod model;
pub mod target_map;
