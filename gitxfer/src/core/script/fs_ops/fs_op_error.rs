// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io, path::Path};

use crate::message_or;

pub type FsOpResult<T> = Result<T, FsOpError>;

/// One variant per filesystem operation. The `message` field is the underlying
/// [`io::Error`]'s text (or a fixed fallback if that is empty), and `source` keeps
/// the original error so that callers can inspect [`io::Error::kind`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum FsOpError {
    #[error("Move failed: {file_name} -> {destination}: {message}")]
    #[diagnostic(code(gitxfer::fs::move_failed))]
    Move {
        file_name: String,
        destination: String,
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("Dir remove failed: {path}: {message}")]
    #[diagnostic(code(gitxfer::fs::remove_failed))]
    Remove {
        path: String,
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("Dir read failed: {path}: {message}")]
    #[diagnostic(code(gitxfer::fs::read_failed))]
    Read {
        path: String,
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("Dir create failed: {path}: {message}")]
    #[diagnostic(
        code(gitxfer::fs::create_failed),
        help("Check that you have write permission on the parent folder")
    )]
    Create {
        path: String,
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("File copy failed: {file_name} -> {destination}: {message}")]
    #[diagnostic(code(gitxfer::fs::copy_failed))]
    Copy {
        file_name: String,
        destination: String,
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("Dir change failed: {path}: {message}")]
    #[diagnostic(code(gitxfer::fs::change_dir_failed))]
    ChangeDir {
        path: String,
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("Path check failed: {path}: {message}")]
    #[diagnostic(code(gitxfer::fs::stat_failed))]
    Stat {
        path: String,
        message: String,
        #[source]
        source: io::Error,
    },
}

impl FsOpError {
    /// The kind of the underlying [`io::Error`].
    #[must_use]
    pub fn io_error_kind(&self) -> io::ErrorKind {
        match self {
            FsOpError::Move { source, .. }
            | FsOpError::Remove { source, .. }
            | FsOpError::Read { source, .. }
            | FsOpError::Create { source, .. }
            | FsOpError::Copy { source, .. }
            | FsOpError::ChangeDir { source, .. }
            | FsOpError::Stat { source, .. } => source.kind(),
        }
    }

    pub(crate) fn move_failed(source_path: &Path, destination: &Path, err: io::Error) -> Self {
        FsOpError::Move {
            file_name: base_name(source_path),
            destination: path_as_string(destination),
            message: message_or(&err, "Move error"),
            source: err,
        }
    }

    pub(crate) fn remove_failed(path: &Path, err: io::Error) -> Self {
        FsOpError::Remove {
            path: path_as_string(path),
            message: message_or(&err, "Remove error"),
            source: err,
        }
    }

    pub(crate) fn read_failed(path: &Path, err: io::Error) -> Self {
        FsOpError::Read {
            path: path_as_string(path),
            message: message_or(&err, "Read error"),
            source: err,
        }
    }

    pub(crate) fn create_failed(path: &Path, err: io::Error) -> Self {
        FsOpError::Create {
            path: path_as_string(path),
            message: message_or(&err, "Create error"),
            source: err,
        }
    }

    pub(crate) fn copy_failed(source_path: &Path, destination: &Path, err: io::Error) -> Self {
        FsOpError::Copy {
            file_name: base_name(source_path),
            destination: path_as_string(destination),
            message: message_or(&err, "Copy error"),
            source: err,
        }
    }

    pub(crate) fn change_dir_failed(path: &Path, err: io::Error) -> Self {
        FsOpError::ChangeDir {
            path: path_as_string(path),
            message: message_or(&err, "Change dir error"),
            source: err,
        }
    }

    pub(crate) fn stat_failed(path: &Path, err: io::Error) -> Self {
        FsOpError::Stat {
            path: path_as_string(path),
            message: message_or(&err, "Stat error"),
            source: err,
        }
    }
}

#[must_use]
pub fn path_as_string(path: &Path) -> String { path.display().to_string() }

/// The last component of `path`, or the whole path if it has none (eg: `/` or `..`).
#[must_use]
pub fn base_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path_as_string(path),
        |it| it.to_string_lossy().to_string(),
    )
}
