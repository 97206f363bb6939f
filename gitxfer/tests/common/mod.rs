// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use gitxfer::{Run, TempDir, TokioCommand,
              git_command_names::{GIT_CMD_ADD, GIT_CMD_COMMIT, GIT_CMD_CONFIG,
                                  GIT_CMD_INIT, GIT_PROGRAM},
              git_config_keys::{GIT_CONFIG_COMMIT_GPGSIGN, GIT_CONFIG_USER_EMAIL,
                                GIT_CONFIG_USER_NAME},
              ok, try_create_temp_dir};
use miette::IntoDiagnostic;

/// A local repository with one commit, containing `a.txt` and `subdir/nested.txt`.
/// Keep the returned [`TempDir`] alive for as long as the repository is needed.
pub async fn setup_source_repo() -> miette::Result<(TempDir, PathBuf)> {
    let root = try_create_temp_dir()?;
    let repo = root.join("sample");
    std::fs::create_dir_all(repo.join("subdir")).into_diagnostic()?;

    let setup: [&[&str]; 4] = [
        &[GIT_CMD_INIT],
        &[GIT_CMD_CONFIG, GIT_CONFIG_USER_EMAIL, "test@example.com"],
        &[GIT_CMD_CONFIG, GIT_CONFIG_USER_NAME, "Test User"],
        &[GIT_CMD_CONFIG, GIT_CONFIG_COMMIT_GPGSIGN, "false"],
    ];
    for args in setup {
        TokioCommand::new(GIT_PROGRAM)
            .args(args)
            .current_dir(&repo)
            .run()
            .await?;
    }

    std::fs::write(repo.join("a.txt"), "alpha").into_diagnostic()?;
    std::fs::write(repo.join("subdir").join("nested.txt"), "nested").into_diagnostic()?;

    let commit: [&[&str]; 2] = [&[GIT_CMD_ADD, "."], &[GIT_CMD_COMMIT, "-m", "Initial commit"]];
    for args in commit {
        TokioCommand::new(GIT_PROGRAM)
            .args(args)
            .current_dir(&repo)
            .run()
            .await?;
    }

    ok!((root, repo))
}

/// Names of the entries in `dir`, sorted.
pub fn sorted_names(dir: &std::path::Path) -> Vec<String> {
    let mut names = std::fs::read_dir(dir)
        .unwrap()
        .map(|it| it.unwrap().file_name().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    names.sort();
    names
}
