// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Component, Path, PathBuf};

use crate::{CloneRepo, CopyDepth, DirCheck, GitClient, TRANSFER_MOD_DEBUG, TempCloneDir,
            TempDirId, TransferError, TransferOptions, TransferStepError, check_is_dir,
            check_is_symlink,
            try_copy_dir_recursive, try_copy_file, try_current_dir,
            try_ensure_dir_exists, try_for_each_item, try_list_dir, try_move};

/// Runs the clone -> act -> cleanup workflows. Each call clones into its own
/// [`TempCloneDir`] under [`TransferOptions::work_dir`], so concurrent calls on one
/// service (or many services) don't share any state.
///
/// The clone step goes through the [`CloneRepo`] seam. The default is [`GitClient`].
#[derive(Debug, Clone, Default)]
pub struct RepoTransferService<C: CloneRepo = GitClient> {
    client: C,
    options: TransferOptions,
}

impl RepoTransferService<GitClient> {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_options(options: TransferOptions) -> Self {
        Self {
            client: GitClient::default(),
            options,
        }
    }
}

impl<C: CloneRepo> RepoTransferService<C> {
    #[must_use]
    pub fn with_client(client: C, options: TransferOptions) -> Self {
        Self { client, options }
    }

    #[must_use]
    pub fn options(&self) -> &TransferOptions { &self.options }

    #[must_use]
    pub fn client(&self) -> &C { &self.client }

    /// Clone `remote_url`, then move every top-level entry of the clone (including
    /// `.git`) into `destination_dir`, keeping its name. `destination_dir` defaults to
    /// the current working directory and must already exist. Returns
    /// `destination_dir`.
    ///
    /// Entries are moved concurrently with no ordering between them. If one fails,
    /// entries that were already moved stay where they are.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Transfer`] if the clone, listing, any move, or
    /// removing the temporary clone fails.
    pub async fn transfer_all(
        &self,
        remote_url: &str,
        destination_dir: Option<&Path>,
    ) -> Result<PathBuf, TransferError> {
        self.try_transfer_all(remote_url, destination_dir)
            .await
            .map_err(|source| TransferError::Transfer {
                remote_url: remote_url.to_string(),
                source,
            })
    }

    /// Clone `remote_url`, create `destination_dir` if it is missing, then copy each
    /// of `item_names` from the top level of the clone into it. A file is copied byte
    /// for byte. A directory is handled according to `depth` (see [`CopyDepth`]). An
    /// item that is not in the clone is a copy error. Returns `destination_dir`.
    ///
    /// Every item name must be a relative path made of plain names only. This is
    /// checked before anything is cloned. An item that is a symlink in the clone is
    /// skipped with a warning, and so are symlinks inside directories copied with
    /// [`CopyDepth::Recursive`].
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::CopySubset`] if an item name is invalid, or if the
    /// clone, creating the destination, any item, or removing the temporary clone
    /// fails.
    pub async fn copy_subset<S: AsRef<str>>(
        &self,
        remote_url: &str,
        item_names: &[S],
        destination_dir: Option<&Path>,
        depth: CopyDepth,
    ) -> Result<PathBuf, TransferError> {
        let item_names = item_names
            .iter()
            .map(|it| it.as_ref().to_string())
            .collect::<Vec<_>>();

        self.try_copy_subset(remote_url, item_names, destination_dir, depth)
            .await
            .map_err(|source| TransferError::CopySubset {
                remote_url: remote_url.to_string(),
                source,
            })
    }

    /// Clone `remote_url` and return the names of its top-level entries (including
    /// `.git`), in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::List`] if the clone, listing, or removing the
    /// temporary clone fails.
    pub async fn list_contents(&self, remote_url: &str) -> Result<Vec<String>, TransferError> {
        self.with_temp_clone(remote_url, async |clone_root| {
            Ok(try_list_dir(&clone_root).await?)
        })
        .await
        .map_err(|source| TransferError::List {
            remote_url: remote_url.to_string(),
            source,
        })
    }

    async fn try_transfer_all(
        &self,
        remote_url: &str,
        destination_dir: Option<&Path>,
    ) -> Result<PathBuf, TransferStepError> {
        let destination_dir = resolve_destination(destination_dir)?;

        self.with_temp_clone(remote_url, async move |clone_root| {
            let names = try_list_dir(&clone_root).await?;

            TRANSFER_MOD_DEBUG.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "transfer_all moving entries",
                    destination = %destination_dir.display(),
                    names = ?names
                );
            });

            let clone_root = clone_root.as_path();
            let destination = destination_dir.as_path();
            try_for_each_item(
                names,
                self.options.effective_max_concurrency(),
                self.options.fan_out_policy,
                async |name| try_move(clone_root.join(&name), destination.join(&name)).await,
            )
            .await
            .into_result()?;

            Ok(destination_dir)
        })
        .await
    }

    async fn try_copy_subset(
        &self,
        remote_url: &str,
        item_names: Vec<String>,
        destination_dir: Option<&Path>,
        depth: CopyDepth,
    ) -> Result<PathBuf, TransferStepError> {
        for name in &item_names {
            check_item_name(name)?;
        }
        let destination_dir = resolve_destination(destination_dir)?;

        self.with_temp_clone(remote_url, async move |clone_root| {
            try_ensure_dir_exists(&destination_dir).await?;

            TRANSFER_MOD_DEBUG.then(|| {
                tracing::debug!(
                    message = "copy_subset copying items",
                    destination = %destination_dir.display(),
                    depth = %depth,
                    items = ?item_names
                );
            });

            let clone_root = clone_root.as_path();
            let destination = destination_dir.as_path();
            try_for_each_item(
                item_names,
                self.options.effective_max_concurrency(),
                self.options.fan_out_policy,
                async |name| {
                    let source_entry = clone_root.join(&name);
                    let destination_entry = destination.join(&name);
                    if check_is_symlink(&source_entry).await {
                        tracing::warn!(
                            message = "Skipping symlinked item",
                            item = %name
                        );
                        return Ok(());
                    }
                    match (check_is_dir(&source_entry).await, depth) {
                        (DirCheck::Directory, CopyDepth::Shallow) => {
                            try_ensure_dir_exists(&destination_entry).await
                        }
                        (DirCheck::Directory, CopyDepth::Recursive) => {
                            try_copy_dir_recursive(&source_entry, &destination_entry).await
                        }
                        (DirCheck::NotDirectoryOrMissing, _) => {
                            try_copy_file(&source_entry, &destination_entry).await
                        }
                    }
                },
            )
            .await
            .into_result()?;

            Ok(destination_dir)
        })
        .await
    }

    /// Clone into a fresh [`TempCloneDir`], run `act` on the clone root, then remove
    /// the clone. The clone is removed even if `clone` or `act` fail. If both `act`
    /// and the removal fail, the error from `act` is returned.
    async fn with_temp_clone<T>(
        &self,
        remote_url: &str,
        act: impl AsyncFnOnce(PathBuf) -> Result<T, TransferStepError>,
    ) -> Result<T, TransferStepError> {
        let work_dir = self.options.try_resolve_work_dir()?;
        let temp_clone_dir = TempCloneDir::new(&work_dir, remote_url, &TempDirId::generate());

        TRANSFER_MOD_DEBUG.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "clone start",
                remote_url = %remote_url,
                temp_clone_dir = %temp_clone_dir.path().display()
            );
        });

        let act_result = match self
            .client
            .try_clone(remote_url, temp_clone_dir.path())
            .await
        {
            Ok(clone_root) => {
                TRANSFER_MOD_DEBUG.then(|| {
                    tracing::debug!(
                        message = "clone finish",
                        clone_root = %clone_root.display()
                    );
                });
                act(clone_root).await
            }
            Err(err) => Err(TransferStepError::Clone(err)),
        };

        let temp_path = temp_clone_dir.path().to_path_buf();
        let cleanup_result = temp_clone_dir.try_remove().await;

        TRANSFER_MOD_DEBUG.then(|| {
            tracing::debug!(
                message = "cleanup finish",
                temp_clone_dir = %temp_path.display(),
                success = cleanup_result.is_ok()
            );
        });

        match (act_result, cleanup_result) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(cleanup_err)) => Err(cleanup_err.into()),
            (Err(act_err), Ok(())) => Err(act_err),
            (Err(act_err), Err(cleanup_err)) => {
                tracing::warn!(
                    message = "Could not remove temporary clone after a failed step",
                    error = %cleanup_err
                );
                Err(act_err)
            }
        }
    }
}

/// `name` is joined onto both the clone root and the destination, so an absolute
/// path or a `..` would escape them.
fn check_item_name(name: &str) -> Result<(), TransferStepError> {
    let path = Path::new(name);
    let is_plain = path.components().next().is_some()
        && path
            .components()
            .all(|it| matches!(it, Component::Normal(_)));
    if is_plain {
        Ok(())
    } else {
        Err(TransferStepError::InvalidItemName {
            name: name.to_string(),
        })
    }
}

fn resolve_destination(destination_dir: Option<&Path>) -> Result<PathBuf, TransferStepError> {
    match destination_dir {
        Some(it) => Ok(it.to_path_buf()),
        None => Ok(try_current_dir()?),
    }
}
