// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          io::ErrorKind,
          path::{Path, PathBuf},
          sync::atomic::{AtomicU64, Ordering}};

use crate::{FsOpResult, derive_repo_name, try_remove_dir_all};

static TEMP_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique token that is part of a [`TempCloneDir`] name. A generated one looks like
/// `<unix-millis>-<pid>-<counter>`, where the counter is process-wide, so two
/// workflows in the same process never get the same id, even within the same
/// millisecond.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TempDirId(String);

impl TempDirId {
    #[must_use]
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let pid = std::process::id();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("{millis}-{pid}-{counter}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

/// Use the given value verbatim.
impl From<String> for TempDirId {
    fn from(value: String) -> Self { Self(value) }
}

impl From<&str> for TempDirId {
    fn from(value: &str) -> Self { Self(value.to_string()) }
}

impl Display for TempDirId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

/// The folder `<work_dir>/temp_<repo name>_<id>` that a workflow clones into. It is
/// not created here, the clone creates it.
///
/// 1. On the normal path, call [`TempCloneDir::try_remove`], which reports failures.
/// 2. On any other path (an early return, a panic, or the workflow future being
///    dropped), [`Drop`] removes it best-effort and logs a warning if that fails.
#[derive(Debug)]
pub struct TempCloneDir {
    path: PathBuf,
    removed: bool,
}

impl TempCloneDir {
    #[must_use]
    pub fn new(work_dir: impl AsRef<Path>, remote_url: &str, id: &TempDirId) -> Self {
        let dir_name = format!("temp_{}_{}", derive_repo_name(remote_url), id);
        Self {
            path: work_dir.as_ref().join(dir_name),
            removed: false,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path { &self.path }

    /// Delete the folder and everything in it. A folder that was never created counts
    /// as removed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FsOpError::Remove`] if the folder can't be deleted. In that
    /// case [`Drop`] tries once more.
    pub async fn try_remove(mut self) -> FsOpResult<()> {
        let result = try_remove_dir_all(&self.path).await;
        self.removed = result.is_ok();
        result
    }
}

impl Drop for TempCloneDir {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        match std::fs::remove_dir_all(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "Could not remove temporary clone directory",
                    path = %self.path.display(),
                    error = %err
                );
            }
        }
    }
}

impl AsRef<Path> for TempCloneDir {
    fn as_ref(&self) -> &Path { &self.path }
}
