// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CloneError, FsOpError};

/// The step of a workflow that failed. Wrapped in a [`TransferError`] that names the
/// workflow and the remote URL.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TransferStepError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Clone(#[from] CloneError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Fs(#[from] FsOpError),

    /// An item name for [`crate::RepoTransferService::copy_subset`] that is not a
    /// plain relative path (absolute, empty, or containing `.` / `..`).
    #[error("Invalid item name: {name:?}")]
    #[diagnostic(
        code(gitxfer::transfer::invalid_item_name),
        help("Item names are relative to the top level of the repository")
    )]
    InvalidItemName { name: String },

    /// Only produced with [`crate::FanOutPolicy::AttemptAll`]. `failures` is in
    /// completion order.
    #[error("{failed} of {total} items failed: {}", fmt_first_cause(.failures))]
    #[diagnostic(code(gitxfer::transfer::items_failed))]
    ItemsFailed {
        failed: usize,
        total: usize,
        #[related]
        failures: Vec<FsOpError>,
    },
}

fn fmt_first_cause(failures: &[FsOpError]) -> String {
    failures
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// A failed [`crate::RepoTransferService`] workflow. Use [`TransferError::step`] to
/// find out which step failed.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TransferError {
    #[error("Repo transfer failed: {remote_url}: {source}")]
    #[diagnostic(code(gitxfer::transfer::transfer_all_failed))]
    Transfer {
        remote_url: String,
        #[source]
        #[diagnostic_source]
        source: TransferStepError,
    },

    #[error("Repo items copy failed: {remote_url}: {source}")]
    #[diagnostic(code(gitxfer::transfer::copy_subset_failed))]
    CopySubset {
        remote_url: String,
        #[source]
        #[diagnostic_source]
        source: TransferStepError,
    },

    #[error("Repo contents list failed: {remote_url}: {source}")]
    #[diagnostic(code(gitxfer::transfer::list_contents_failed))]
    List {
        remote_url: String,
        #[source]
        #[diagnostic_source]
        source: TransferStepError,
    },
}

impl TransferError {
    #[must_use]
    pub fn remote_url(&self) -> &str {
        match self {
            TransferError::Transfer { remote_url, .. }
            | TransferError::CopySubset { remote_url, .. }
            | TransferError::List { remote_url, .. } => remote_url,
        }
    }

    #[must_use]
    pub fn step(&self) -> &TransferStepError {
        match self {
            TransferError::Transfer { source, .. }
            | TransferError::CopySubset { source, .. }
            | TransferError::List { source, .. } => source,
        }
    }
}
