//! Persists a [`TargetMap`] between sessions so the IDE can start without re-importing.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::ideinfo::TargetIdeInfo;
use crate::target_map::TargetMap;

/// Bumped whenever the serialized shape of [`TargetIdeInfo`] changes.
pub const SNAPSHOT_VERSION: u32 = 19;

#[derive(Deserialize)]
struct SnapshotHeader {
    version: u32,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    targets: Vec<&'a TargetIdeInfo>,
}

#[derive(Deserialize)]
struct Snapshot {
    targets: Vec<TargetIdeInfo>,
}

/// Targets are written sorted by key, so equal maps produce equal snapshots.
pub fn write_snapshot(target_map: &TargetMap, writer: impl Write) -> Result<()> {
    let mut targets: Vec<_> = target_map.targets().collect();
    targets.sort_by(|a, b| a.key().cmp(b.key()));

    serde_json::to_writer(
        writer,
        &SnapshotRef {
            version: SNAPSHOT_VERSION,
            targets,
        },
    )
    .context("Failed to write target map snapshot")
}

pub fn read_snapshot(mut reader: impl Read) -> Result<TargetMap> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .context("Failed to read target map snapshot")?;

    let header: SnapshotHeader =
        serde_json::from_str(&contents).context("Malformed target map snapshot")?;
    if header.version != SNAPSHOT_VERSION {
        bail!(
            "Unsupported snapshot version {}, expected {}",
            header.version,
            SNAPSHOT_VERSION
        );
    }

    let snapshot: Snapshot =
        serde_json::from_str(&contents).context("Malformed target map snapshot")?;
    Ok(snapshot.targets.into_iter().collect())
}

pub fn save_snapshot(target_map: &TargetMap, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create snapshot {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_snapshot(target_map, &mut writer)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write snapshot {}", path.display()))
}

pub fn load_snapshot(path: &Path) -> Result<TargetMap> {
    let file =
        File::open(path).with_context(|| format!("Failed to open snapshot {}", path.display()))?;
    read_snapshot(file).with_context(|| format!("Invalid snapshot {}", path.display()))
}
