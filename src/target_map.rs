//! [`TargetMap`] is the read-only build graph produced by one import cycle.

use rustc_hash::FxHashMap;

use crate::dependencies::TargetInfo;
use crate::ideinfo::TargetIdeInfo;
use crate::model::TargetKey;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TargetMap {
    targets: FxHashMap<TargetKey, TargetIdeInfo>,
}

impl TargetMap {
    pub fn new(targets: FxHashMap<TargetKey, TargetIdeInfo>) -> Self {
        Self { targets }
    }

    pub fn get(&self, key: &TargetKey) -> Option<&TargetIdeInfo> {
        self.targets.get(key)
    }

    pub fn contains(&self, key: &TargetKey) -> bool {
        self.targets.contains_key(key)
    }

    /// Iterates the targets in no particular order.
    pub fn targets(&self) -> impl Iterator<Item = &TargetIdeInfo> {
        self.targets.values()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn target_infos(&self) -> FxHashMap<TargetKey, TargetInfo> {
        self.targets
            .iter()
            .map(|(key, target)| (key.clone(), target.to_target_info()))
            .collect()
    }
}

impl FromIterator<TargetIdeInfo> for TargetMap {
    /// Later targets replace earlier ones with the same key.
    fn from_iter<T: IntoIterator<Item = TargetIdeInfo>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|target| (target.key().clone(), target))
                .collect(),
        )
    }
}
