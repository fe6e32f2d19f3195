//! Import configuration.

use std::num::NonZeroUsize;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    /// Number of threads building targets. Never zero.
    pub workers: usize,
    /// Abort the import instead of skipping targets with malformed labels or kinds.
    pub fail_on_invalid_target: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            fail_on_invalid_target: false,
        }
    }
}

impl ImportConfig {
    pub fn new(workers: Option<usize>, fail_on_invalid_target: bool) -> Self {
        let default = ImportConfig::default();
        Self {
            workers: workers.filter(|&n| n > 0).unwrap_or(default.workers),
            fail_on_invalid_target,
        }
    }
}
