//! Builds a [`TargetMap`] from a [`BuildGraph`], one builder per target, spread over a
//! pool of worker threads.

use std::sync::Arc;

use anyhow::{bail, format_err, Result};
use crossbeam_channel::unbounded;
use log::{debug, error, info, warn};
use rustc_hash::FxHashMap;

use crate::config::ImportConfig;
use crate::error::IdeInfoError;
use crate::ideinfo::TargetIdeInfo;
use crate::import::{BuildGraph, RawTarget};
use crate::model::TargetKey;
use crate::target_map::TargetMap;

/// Result of one import cycle.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    /// Published only once every target has been built.
    pub target_map: Arc<TargetMap>,
    /// Labels of the targets that were discarded, sorted.
    pub failed_targets: Vec<String>,
    /// Keys defined more than once in the graph, sorted. The first definition wins.
    pub duplicate_keys: Vec<TargetKey>,
}

struct BuiltTarget {
    /// Position of the target in the build graph.
    index: usize,
    result: Result<TargetIdeInfo, (String, IdeInfoError)>,
}

pub fn import_build_graph(graph: BuildGraph, config: &ImportConfig) -> Result<ImportOutcome> {
    let target_count = graph.targets.len();
    let worker_count = config.workers.clamp(1, target_count.max(1));
    debug!(
        "Importing {} targets with {} workers",
        target_count, worker_count
    );

    let (raw_sender, raw_receiver) = unbounded::<(usize, RawTarget)>();
    let (built_sender, built_receiver) = unbounded::<BuiltTarget>();

    let workers = (0..worker_count)
        .map(|id| {
            let raw_receiver = raw_receiver.clone();
            let built_sender = built_sender.clone();
            jod_thread::Builder::new()
                .name(format!("ideinfo-import-{}", id))
                .spawn(move || {
                    for (index, raw) in raw_receiver {
                        let label = raw.label.clone();
                        let result = raw.into_target().map_err(|e| (label, e));
                        if built_sender.send(BuiltTarget { index, result }).is_err() {
                            break;
                        }
                    }
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    drop(raw_receiver);
    drop(built_sender);

    for entry in graph.targets.into_iter().enumerate() {
        raw_sender
            .send(entry)
            .map_err(|_| format_err!("All import workers stopped unexpectedly"))?;
    }
    drop(raw_sender);

    let mut targets: FxHashMap<TargetKey, (usize, TargetIdeInfo)> = FxHashMap::default();
    let mut failed_targets = vec![];
    let mut duplicate_keys = vec![];

    for built in built_receiver {
        let target = match built.result {
            Ok(target) => target,
            Err((label, e)) => {
                error!("Discarding target {}: {}", label, e);
                failed_targets.push(label);
                continue;
            }
        };
        debug!("Imported target {}", target);

        let key = target.key().clone();
        match targets.get(&key) {
            Some((existing_index, _)) => {
                warn!("Target {} is defined more than once, keeping the first definition", key);
                duplicate_keys.push(key.clone());
                if built.index < *existing_index {
                    targets.insert(key, (built.index, target));
                }
            }
            None => {
                targets.insert(key, (built.index, target));
            }
        }
    }

    for worker in workers {
        worker.join();
    }

    failed_targets.sort();
    duplicate_keys.sort();
    duplicate_keys.dedup();

    if config.fail_on_invalid_target && !failed_targets.is_empty() {
        bail!(
            "{} targets could not be imported: {}",
            failed_targets.len(),
            failed_targets.join(", ")
        );
    }

    info!(
        "Imported {} targets, discarded {}",
        targets.len(),
        failed_targets.len()
    );

    let target_map = TargetMap::new(
        targets
            .into_iter()
            .map(|(key, (_, target))| (key, target))
            .collect(),
    );

    Ok(ImportOutcome {
        target_map: Arc::new(target_map),
        failed_targets,
        duplicate_keys,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ideinfo::TestSize;
    use crate::model::{ArtifactLocation, Kind, Label};

    fn raw(label: &str, kind: &str) -> RawTarget {
        RawTarget {
            label: label.to_string(),
            kind: kind.to_string(),
            ..RawTarget::default()
        }
    }

    fn key(label: &str) -> TargetKey {
        TargetKey::for_plain_target(Label::parse(label).unwrap())
    }

    fn config(workers: usize) -> ImportConfig {
        ImportConfig::new(Some(workers), false)
    }

    #[test]
    fn imports_every_target() {
        let graph = BuildGraph {
            targets: (0..200)
                .map(|i| raw(&format!("//pkg{}:lib", i), "java_library"))
                .collect(),
        };

        let outcome = import_build_graph(graph, &config(4)).unwrap();

        assert_eq!(outcome.target_map.len(), 200);
        assert!(outcome.failed_targets.is_empty());
        assert!(outcome.duplicate_keys.is_empty());
        assert!(outcome.target_map.contains(&key("//pkg199:lib")));
    }

    #[test]
    fn discards_invalid_targets() {
        let graph = BuildGraph {
            targets: vec![
                raw("//a:ok", "py_library"),
                raw("a:bad_label", "py_library"),
                raw("//a:bad_kind", "my_macro"),
            ],
        };

        let outcome = import_build_graph(graph, &config(2)).unwrap();

        assert_eq!(outcome.target_map.len(), 1);
        assert_eq!(
            outcome.failed_targets,
            vec!["//a:bad_kind".to_string(), "a:bad_label".to_string()]
        );
    }

    #[test]
    fn fail_on_invalid_target() {
        let graph = BuildGraph {
            targets: vec![raw("//a:ok", "py_library"), raw("//a:bad", "my_macro")],
        };

        let err = import_build_graph(graph, &ImportConfig::new(Some(2), true)).unwrap_err();
        assert_eq!(err.to_string(), "1 targets could not be imported: //a:bad");
    }

    #[test]
    fn first_definition_wins() {
        let mut first = raw("//a:dup", "py_test");
        first.test_info = Some(crate::ideinfo::TestIdeInfo::builder().set_test_size(TestSize::Small));
        let mut second = raw("//a:dup", "py_test");
        second.sources = vec![ArtifactLocation::source("a/second.py")];

        let graph = BuildGraph {
            targets: vec![first, raw("//a:other", "py_library"), second],
        };

        let outcome = import_build_graph(graph, &config(3)).unwrap();

        let target = outcome.target_map.get(&key("//a:dup")).unwrap();
        assert_eq!(target.test_ide_info().unwrap().test_size, TestSize::Small);
        assert!(target.sources().is_empty());
        assert_eq!(outcome.duplicate_keys, vec![key("//a:dup")]);
        assert_eq!(outcome.target_map.len(), 2);
    }

    #[test]
    fn empty_graph() {
        let outcome = import_build_graph(BuildGraph::default(), &config(8)).unwrap();
        assert!(outcome.target_map.is_empty());
    }

    #[test]
    fn independent_of_worker_count() {
        let graph = || BuildGraph {
            targets: vec![
                raw("//a:lib", "go_library"),
                raw("//a:test", "go_test"),
                raw("//a:lib", "go_binary"),
            ],
        };

        let single = import_build_graph(graph(), &config(1)).unwrap();
        let many = import_build_graph(graph(), &config(8)).unwrap();

        assert_eq!(single.target_map, many.target_map);
        assert_eq!(
            many.target_map.get(&key("//a:lib")).unwrap().kind(),
            Some(Kind::GO_LIBRARY)
        );
    }
}
