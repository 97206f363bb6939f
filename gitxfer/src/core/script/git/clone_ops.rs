// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use miette::IntoDiagnostic;

use super::types::{git_command_names::{GIT_ARG_END_OF_OPTIONS, GIT_CMD_CLONE,
                                       GIT_PROGRAM},
                   git_env_vars::{GIT_ENV_TERMINAL_PROMPT,
                                  GIT_ENV_TERMINAL_PROMPT_DISABLED}};
use crate::{CommandRunError, CommonResult, Run, SCRIPT_MOD_DEBUG, command, message_or,
            ok, path_as_string};

/// A failed clone. The `message` is git's trimmed `stderr` (or `Clone error` if git
/// printed nothing), and `source` has the exit code.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("Failed to clone {remote_url} to {target_path}: {message}")]
#[diagnostic(
    code(gitxfer::git::clone_failed),
    help("Check that the URL is reachable and that you have access to it")
)]
pub struct CloneError {
    pub remote_url: String,
    pub target_path: String,
    pub message: String,
    #[source]
    pub source: CommandRunError,
}

impl CloneError {
    #[must_use]
    pub fn new(remote_url: &str, target_path: &Path, source: CommandRunError) -> Self {
        Self {
            remote_url: remote_url.to_string(),
            target_path: path_as_string(target_path),
            message: message_or(source.message(), "Clone error"),
            source,
        }
    }
}

/// Seam over "make a full copy of the remote repository at this local path". The
/// transfer workflows are generic over it, so tests (or other version control tools)
/// can provide their own.
pub trait CloneRepo: Send + Sync {
    /// Clone `remote_url` into `target_path`, which must not exist or be empty. Returns
    /// `target_path` unchanged on success.
    ///
    /// # Errors
    ///
    /// Returns [`CloneError`] if the clone can't be started or does not succeed.
    fn try_clone(
        &self,
        remote_url: &str,
        target_path: &Path,
    ) -> impl Future<Output = Result<PathBuf, CloneError>> + Send;
}

/// Clones by running `<program> clone -- <remote_url> <target_path>`. Credential
/// prompts are disabled, so a URL that needs authentication fails instead of waiting
/// on the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitClient {
    pub program: String,
}

impl Default for GitClient {
    fn default() -> Self {
        Self {
            program: GIT_PROGRAM.to_string(),
        }
    }
}

impl GitClient {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl CloneRepo for GitClient {
    async fn try_clone(
        &self,
        remote_url: &str,
        target_path: &Path,
    ) -> Result<PathBuf, CloneError> {
        SCRIPT_MOD_DEBUG.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "git clone start",
                remote_url = %remote_url,
                target_path = %target_path.display()
            );
        });

        let mut cmd = command!(
            program => &self.program,
            args => GIT_CMD_CLONE, GIT_ARG_END_OF_OPTIONS, remote_url, target_path
        );
        cmd.env(GIT_ENV_TERMINAL_PROMPT, GIT_ENV_TERMINAL_PROMPT_DISABLED);

        match cmd.run().await {
            Ok(_) => {
                SCRIPT_MOD_DEBUG.then(|| {
                    tracing::debug!(
                        message = "git clone finish",
                        target_path = %target_path.display()
                    );
                });
                ok!(target_path.to_path_buf())
            }
            Err(err) => Err(CloneError::new(remote_url, target_path, err)),
        }
    }
}

/// Plain `git clone` into `target` (or the current working directory if [`None`]),
/// for callers that want to keep the checkout. Returns a message with the absolute path
/// of the checkout.
///
/// # Errors
///
/// Returns an error with the text `Git clone failed: <stderr>` if git fails, or if the
/// target path can't be made absolute.
pub async fn try_git_clone(url: &str, target: Option<&Path>) -> CommonResult<String> {
    let target = target.unwrap_or_else(|| Path::new("."));
    let target_abs = std::path::absolute(target).into_diagnostic()?;

    match GitClient::default().try_clone(url, &target_abs).await {
        Ok(path) => ok!(format!(
            "Git repository cloned successfully to: {}",
            path.display()
        )),
        Err(err) => miette::bail!("Git clone failed: {}", err.source.message()),
    }
}

#[cfg(test)]
mod tests_clone_ops {
    use super::*;
    use crate::{test_fixtures::helper_setup_source_repo, try_create_temp_dir,
                try_create_temp_dir_and_cd, with_saved_pwd};
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    #[tokio::test]
    async fn test_git_client_clones_local_repo() {
        let (_source_root, source_repo) = helper_setup_source_repo().await.unwrap();
        let dest_root = try_create_temp_dir().unwrap();
        let target = dest_root.join("clone");

        let result = GitClient::default()
            .try_clone(&path_as_string(&source_repo), &target)
            .await
            .unwrap();

        assert_eq!(result, target);
        assert!(target.join("a.txt").is_file());
        assert!(target.join("subdir").join("nested.txt").is_file());
        assert!(target.join(".git").is_dir());
    }

    #[tokio::test]
    async fn test_git_client_unreachable_url() {
        let dest_root = try_create_temp_dir().unwrap();
        let target = dest_root.join("clone");
        let missing = dest_root.join("no_such_repo");
        let remote_url = path_as_string(&missing);

        let Err(err) = GitClient::default().try_clone(&remote_url, &target).await else {
            panic!("Expected an error, but got success");
        };

        let message = err.to_string();
        assert!(message.starts_with(&format!(
            "Failed to clone {remote_url} to {}: ",
            target.display()
        )));
        assert!(!err.message.is_empty());
        assert!(matches!(err.source, CommandRunError::RanUnsuccessfully { .. }));
    }

    #[tokio::test]
    async fn test_git_client_program_missing() {
        let dest_root = try_create_temp_dir().unwrap();
        let client = GitClient::new("this_git_does_not_exist_anywhere");

        let Err(err) = client
            .try_clone("https://example.com/x/sample.git", &dest_root.join("clone"))
            .await
        else {
            panic!("Expected an error, but got success");
        };

        assert!(matches!(err.source, CommandRunError::FailedToRun { .. }));
    }

    #[tokio::test]
    async fn test_try_git_clone_into_target() {
        let (_source_root, source_repo) = helper_setup_source_repo().await.unwrap();
        let dest_root = try_create_temp_dir().unwrap();
        let target = dest_root.join("checkout");

        let message = try_git_clone(&path_as_string(&source_repo), Some(target.as_path()))
            .await
            .unwrap();

        assert_eq!(
            message,
            format!("Git repository cloned successfully to: {}", target.display())
        );
        assert!(target.join("a.txt").is_file());
    }

    async fn clone_into_new_cwd(source_repo: &Path) -> miette::Result<()> {
        let (_root, sub_dir) = try_create_temp_dir_and_cd!("empty_checkout");
        let message = try_git_clone(&path_as_string(source_repo), None).await?;
        assert!(message.starts_with("Git repository cloned successfully to: "));
        assert!(sub_dir.join("a.txt").is_file());
        ok!()
    }

    #[tokio::test]
    #[serial]
    async fn test_try_git_clone_defaults_to_cwd() {
        let (_source_root, source_repo) = helper_setup_source_repo().await.unwrap();
        let result = with_saved_pwd!({ clone_into_new_cwd(&source_repo).await });
        result.unwrap();
    }

    #[tokio::test]
    async fn test_try_git_clone_failure_message() {
        let dest_root = try_create_temp_dir().unwrap();
        let missing = path_as_string(&dest_root.join("no_such_repo"));

        let Err(err) = try_git_clone(&missing, Some(dest_root.join("checkout").as_path())).await
        else {
            panic!("Expected an error, but got success");
        };

        assert!(err.to_string().starts_with("Git clone failed: "));
    }
}
