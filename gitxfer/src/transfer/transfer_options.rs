// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use strum_macros::Display;

use crate::{FsOpError, FsOpResult};

pub const DEFAULT_MAX_CONCURRENCY: usize = 16;

/// What the per-item fan-out does after one item fails.
#[derive(Debug, Display, Default, Copy, Clone, PartialEq, Eq)]
pub enum FanOutPolicy {
    /// Stop starting new items. Items already in flight are abandoned.
    #[default]
    FailFast,
    /// Run every item, then report all of the failures.
    AttemptAll,
}

/// How [`crate::RepoTransferService::copy_subset`] handles an item that is a directory.
#[derive(Debug, Display, Default, Copy, Clone, PartialEq, Eq)]
pub enum CopyDepth {
    /// Create an empty directory with the same name. Its contents are not copied.
    #[default]
    Shallow,
    /// Copy the directory and everything beneath it.
    Recursive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOptions {
    /// Parent of the temporary clone directories. [`None`] means the current working
    /// directory, at the time a workflow starts.
    pub work_dir: Option<PathBuf>,
    /// Upper bound on items being moved or copied at the same time. `0` is treated as
    /// `1`.
    pub max_concurrency: usize,
    pub fan_out_policy: FanOutPolicy,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            work_dir: None,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            fan_out_policy: FanOutPolicy::default(),
        }
    }
}

impl TransferOptions {
    #[must_use]
    pub fn with_work_dir(mut self, work_dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(work_dir.into());
        self
    }

    #[must_use]
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    #[must_use]
    pub fn with_fan_out_policy(mut self, fan_out_policy: FanOutPolicy) -> Self {
        self.fan_out_policy = fan_out_policy;
        self
    }

    #[must_use]
    pub fn effective_max_concurrency(&self) -> usize { self.max_concurrency.max(1) }

    /// # Errors
    ///
    /// Returns [`FsOpError::Stat`] if no work dir is set and the current working
    /// directory can't be determined.
    pub fn try_resolve_work_dir(&self) -> FsOpResult<PathBuf> {
        match &self.work_dir {
            Some(work_dir) => Ok(work_dir.clone()),
            None => try_current_dir(),
        }
    }
}

/// # Errors
///
/// Returns [`FsOpError::Stat`] if the current working directory can't be determined,
/// eg: it was deleted.
pub fn try_current_dir() -> FsOpResult<PathBuf> {
    std::env::current_dir().map_err(|err| FsOpError::stat_failed(Path::new("."), err))
}

#[cfg(test)]
mod tests_transfer_options {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = TransferOptions::default();
        assert_eq!(options.work_dir, None);
        assert_eq!(options.max_concurrency, 16);
        assert_eq!(options.fan_out_policy, FanOutPolicy::FailFast);
        assert_eq!(CopyDepth::default(), CopyDepth::Shallow);
    }

    #[test]
    fn test_builder_and_min_concurrency() {
        let options = TransferOptions::default()
            .with_work_dir("/work")
            .with_max_concurrency(0)
            .with_fan_out_policy(FanOutPolicy::AttemptAll);
        assert_eq!(options.effective_max_concurrency(), 1);
        assert_eq!(options.try_resolve_work_dir().unwrap(), PathBuf::from("/work"));
        assert_eq!(options.fan_out_policy.to_string(), "AttemptAll");
    }
}
