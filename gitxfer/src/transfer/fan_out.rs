// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use futures_util::{StreamExt as _, future, stream};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{FanOutPolicy, FsOpError, FsOpResult, TransferStepError};

/// Outcome of [`try_for_each_item`].
#[derive(Debug)]
pub struct FanOutReport {
    pub policy: FanOutPolicy,
    /// Number of items that were handed in.
    pub total: usize,
    /// Number of items whose operation ran to completion (successfully or not).
    pub completed: usize,
    /// In completion order.
    pub failures: Vec<FsOpError>,
}

impl FanOutReport {
    #[must_use]
    pub fn is_success(&self) -> bool { self.failures.is_empty() }

    /// # Errors
    ///
    /// - With [`FanOutPolicy::FailFast`], the first failure as
    ///   [`TransferStepError::Fs`].
    /// - With [`FanOutPolicy::AttemptAll`], all failures as
    ///   [`TransferStepError::ItemsFailed`].
    pub fn into_result(self) -> Result<(), TransferStepError> {
        if self.failures.is_empty() {
            return Ok(());
        }
        match self.policy {
            FanOutPolicy::FailFast => match self.failures.into_iter().next() {
                Some(first) => Err(TransferStepError::Fs(first)),
                None => Ok(()),
            },
            FanOutPolicy::AttemptAll => Err(TransferStepError::ItemsFailed {
                failed: self.failures.len(),
                total: self.total,
                failures: self.failures,
            }),
        }
    }
}

/// Run `op` for each of `items`, with at most `max_concurrency` (minimum 1) of them in
/// flight at once. There is no ordering between items. With
/// [`FanOutPolicy::FailFast`], no new item is started after the first failure, but
/// the ones already in flight are still awaited. Either way this only returns once
/// every started item has settled.
pub async fn try_for_each_item(
    items: Vec<String>,
    max_concurrency: usize,
    policy: FanOutPolicy,
    op: impl AsyncFn(String) -> FsOpResult<()>,
) -> FanOutReport {
    let total = items.len();
    let mut completed = 0;
    let mut failures = vec![];
    let stop_starting = AtomicBool::new(false);

    let mut results = stream::iter(items)
        .take_while(|_| future::ready(!stop_starting.load(Ordering::Acquire)))
        .map(|item| op(item))
        .buffer_unordered(max_concurrency.max(1));

    while let Some(result) = results.next().await {
        completed += 1;
        if let Err(err) = result {
            failures.push(err);
            if policy == FanOutPolicy::FailFast {
                stop_starting.store(true, Ordering::Release);
            }
        }
    }

    FanOutReport {
        policy,
        total,
        completed,
        failures,
    }
}
