// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shared test infrastructure for tests that need a repository to clone.

use std::path::PathBuf;

use miette::IntoDiagnostic;

use crate::{Run, TempDir, command, ok,
            script::git::types::{git_command_names::{GIT_CMD_ADD, GIT_CMD_COMMIT,
                                                     GIT_CMD_CONFIG, GIT_CMD_INIT,
                                                     GIT_PROGRAM},
                                 git_config_keys::{GIT_CONFIG_COMMIT_GPGSIGN,
                                                   GIT_CONFIG_USER_EMAIL,
                                                   GIT_CONFIG_USER_NAME},
                                 test_config::{TEST_EMAIL, TEST_GPG_SIGN_DISABLED,
                                               TEST_INITIAL_COMMIT_MSG,
                                               TEST_USER_NAME}},
            try_create_temp_dir};

/// Helper function to setup a local git repository with one commit containing
/// `a.txt` and `subdir/nested.txt`. Returns a tuple of (`temp_dir_root`,
/// `source_repo_path`). When the `temp_dir_root` is dropped it will remove that folder.
///
/// This does not change the current working directory, so tests using it can run in
/// parallel.
pub async fn helper_setup_source_repo() -> miette::Result<(
    /* temp_dir_root: don't drop this immediately using `_` */ TempDir,
    /* source_repo_path */ PathBuf,
)> {
    let tmp_dir_root = try_create_temp_dir()?;
    let repo = tmp_dir_root.join("source_repo");
    std::fs::create_dir_all(repo.join("subdir")).into_diagnostic()?;

    command!(program => GIT_PROGRAM, args => GIT_CMD_INIT)
        .current_dir(&repo)
        .run()
        .await?;

    // Configure git user for commit. This test assumes an environment where no prior
    // local or global git config has been created.
    command!(program => GIT_PROGRAM, args => GIT_CMD_CONFIG, GIT_CONFIG_USER_EMAIL, TEST_EMAIL)
        .current_dir(&repo)
        .run()
        .await?;
    command!(program => GIT_PROGRAM, args => GIT_CMD_CONFIG, GIT_CONFIG_USER_NAME, TEST_USER_NAME)
        .current_dir(&repo)
        .run()
        .await?;

    // Disable commit signing to avoid issues with missing keys in the test
    // environment.
    command!(program => GIT_PROGRAM, args => GIT_CMD_CONFIG, GIT_CONFIG_COMMIT_GPGSIGN, TEST_GPG_SIGN_DISABLED)
        .current_dir(&repo)
        .run()
        .await?;

    std::fs::write(repo.join("a.txt"), "alpha").into_diagnostic()?;
    std::fs::write(repo.join("subdir").join("nested.txt"), "nested").into_diagnostic()?;

    command!(program => GIT_PROGRAM, args => GIT_CMD_ADD, ".")
        .current_dir(&repo)
        .run()
        .await?;
    command!(program => GIT_PROGRAM, args => GIT_CMD_COMMIT, "-m", TEST_INITIAL_COMMIT_MSG)
        .current_dir(&repo)
        .run()
        .await?;

    ok!((tmp_dir_root, repo))
}
