//! Turning a build-graph dump into a published [`TargetMap`](crate::target_map::TargetMap),
//! and caching it on disk between sessions.

pub use build_graph::{BuildGraph, RawDependency, RawTarget};
pub use importer::{import_build_graph, ImportOutcome};
pub use snapshot::{load_snapshot, read_snapshot, save_snapshot, write_snapshot, SNAPSHOT_VERSION};

mod build_graph;
mod importer;
mod snapshot;
