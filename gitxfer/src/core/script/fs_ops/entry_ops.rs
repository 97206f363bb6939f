// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Operations on a single entry: move, copy, and the infallible probes.

use std::path::Path;

use strum_macros::Display;

use crate::{FsOpError, FsOpResult, SCRIPT_MOD_DEBUG, ok};

/// Result of [`check_is_dir`]. A failed stat (including a missing path) is reported as
/// [`DirCheck::NotDirectoryOrMissing`]. Use [`try_exists`] if you need to tell them
/// apart.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq)]
pub enum DirCheck {
    Directory,
    NotDirectoryOrMissing,
}

impl DirCheck {
    #[must_use]
    pub fn is_dir(self) -> bool { matches!(self, DirCheck::Directory) }
}

/// Rename `source` to `destination`. This does not fall back to copy + delete, so it
/// fails across devices.
///
/// # Errors
///
/// Returns [`FsOpError::Move`] if the rename fails, eg: the source is missing, the
/// destination is a non-empty directory, or the paths are on different devices.
pub async fn try_move(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> FsOpResult<()> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    SCRIPT_MOD_DEBUG.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "try_move",
            source = %source.display(),
            destination = %destination.display()
        );
    });

    tokio::fs::rename(source, destination)
        .await
        .map_err(|err| FsOpError::move_failed(source, destination, err))
}

/// Copy the contents of the file at `source` to `destination`, overwriting it if it
/// exists.
///
/// # Errors
///
/// Returns [`FsOpError::Copy`] on any I/O failure, eg: the source is a directory or
/// the destination's parent does not exist.
pub async fn try_copy_file(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> FsOpResult<()> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    SCRIPT_MOD_DEBUG.then(|| {
        tracing::debug!(
            message = "try_copy_file",
            source = %source.display(),
            destination = %destination.display()
        );
    });

    match tokio::fs::copy(source, destination).await {
        Ok(_bytes_copied) => ok!(),
        Err(err) => Err(FsOpError::copy_failed(source, destination, err)),
    }
}

/// This never fails. Any stat failure is folded into
/// [`DirCheck::NotDirectoryOrMissing`].
pub async fn check_is_dir(path: impl AsRef<Path>) -> DirCheck {
    match tokio::fs::metadata(path.as_ref()).await {
        Ok(metadata) if metadata.is_dir() => DirCheck::Directory,
        _ => DirCheck::NotDirectoryOrMissing,
    }
}

/// Whether `path` itself is a symlink (the link is not followed). This never fails.
/// Any stat failure, including a missing path, is `false`.
pub async fn check_is_symlink(path: impl AsRef<Path>) -> bool {
    tokio::fs::symlink_metadata(path.as_ref())
        .await
        .is_ok_and(|metadata| metadata.file_type().is_symlink())
}

/// Checks whether anything exists at `path` (following symlinks).
///
/// # Errors
///
/// Returns [`FsOpError::Stat`] if existence can't be determined, eg: permission denied
/// on a parent folder.
pub async fn try_exists(path: impl AsRef<Path>) -> FsOpResult<bool> {
    let path = path.as_ref();
    tokio::fs::try_exists(path)
        .await
        .map_err(|err| FsOpError::stat_failed(path, err))
}
