// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Operations on directories: remove, list, create, and recursive copy.

use std::{io::ErrorKind, path::Path};

use futures_util::{FutureExt as _, future::BoxFuture};

use crate::{FsOpError, FsOpResult, SCRIPT_MOD_DEBUG, ok, try_copy_file};

/// Delete `path` and everything beneath it. Nothing existing at `path` is a success,
/// which makes this idempotent.
///
/// # Errors
///
/// Returns [`FsOpError::Remove`] on any I/O failure other than "not found".
pub async fn try_remove_dir_all(path: impl AsRef<Path>) -> FsOpResult<()> {
    let path = path.as_ref();

    SCRIPT_MOD_DEBUG.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "try_remove_dir_all", path = %path.display());
    });

    match tokio::fs::remove_dir_all(path).await {
        Ok(()) => ok!(),
        Err(err) if err.kind() == ErrorKind::NotFound => ok!(),
        Err(err) => Err(FsOpError::remove_failed(path, err)),
    }
}

/// Returns the names of the immediate children of `path` (files and directories), in
/// whatever order the OS enumerates them. The result is **not** sorted.
///
/// # Errors
///
/// Returns [`FsOpError::Read`] if `path` does not exist, is not a directory, or can't
/// be read.
pub async fn try_list_dir(path: impl AsRef<Path>) -> FsOpResult<Vec<String>> {
    let path = path.as_ref();

    let mut read_dir = tokio::fs::read_dir(path)
        .await
        .map_err(|err| FsOpError::read_failed(path, err))?;

    let mut acc = vec![];
    while let Some(entry) = read_dir
        .next_entry()
        .await
        .map_err(|err| FsOpError::read_failed(path, err))?
    {
        acc.push(entry.file_name().to_string_lossy().to_string());
    }

    SCRIPT_MOD_DEBUG.then(|| {
        tracing::debug!(
            message = "try_list_dir",
            path = %path.display(),
            count = acc.len()
        );
    });

    ok!(acc)
}

/// Create `path` and any missing parents. An existing entry at `path` is a success,
/// which makes this idempotent.
///
/// # Errors
///
/// Returns [`FsOpError::Create`] for any other failure, eg: permission denied.
pub async fn try_ensure_dir_exists(path: impl AsRef<Path>) -> FsOpResult<()> {
    let path = path.as_ref();

    SCRIPT_MOD_DEBUG.then(|| {
        tracing::debug!(message = "try_ensure_dir_exists", path = %path.display());
    });

    match tokio::fs::create_dir_all(path).await {
        Ok(()) => ok!(),
        Err(err) if err.kind() == ErrorKind::AlreadyExists => ok!(),
        Err(err) => Err(FsOpError::create_failed(path, err)),
    }
}

/// Copy the directory `source` and all of its contents into `destination` (which is
/// created if needed). Existing files in `destination` are overwritten. Symlinks
/// (to files or directories) are skipped with a warning, so nothing outside `source`
/// is ever read.
///
/// # Errors
///
/// Returns the first [`FsOpError::Read`], [`FsOpError::Create`], or
/// [`FsOpError::Copy`] that is encountered. Whatever was copied before that stays.
pub fn try_copy_dir_recursive<'a>(
    source: &'a Path,
    destination: &'a Path,
) -> BoxFuture<'a, FsOpResult<()>> {
    copy_dir_entries(source, destination).boxed()
}

async fn copy_dir_entries(source: &Path, destination: &Path) -> FsOpResult<()> {
    try_ensure_dir_exists(destination).await?;

    for name in try_list_dir(source).await? {
        let source_entry = source.join(&name);
        let destination_entry = destination.join(&name);

        let metadata = tokio::fs::symlink_metadata(&source_entry)
            .await
            .map_err(|err| FsOpError::read_failed(&source_entry, err))?;

        if metadata.file_type().is_symlink() {
            tracing::warn!(
                message = "Skipping symlink in recursive copy",
                path = %source_entry.display()
            );
        } else if metadata.is_dir() {
            try_copy_dir_recursive(&source_entry, &destination_entry).await?;
        } else {
            try_copy_file(&source_entry, &destination_entry).await?;
        }
    }

    ok!()
}
