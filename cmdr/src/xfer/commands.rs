// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use gitxfer::{CommonResult, CopyDepth, HostingCli, RepoTransferService, ok,
              try_git_clone};

use crate::{CLIArg, CLICommand, ui_str};

/// What a command wants printed on success. One line per entry.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SuccessReport {
    pub lines: Vec<String>,
}

impl SuccessReport {
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }
}

/// # Errors
///
/// Returns the library error of whichever command ran, as a [`miette::Report`].
pub async fn try_run_command(cli_arg: &CLIArg) -> CommonResult<SuccessReport> {
    let service =
        RepoTransferService::with_options(cli_arg.global_options.to_transfer_options());

    let lines = match &cli_arg.command {
        CLICommand::Transfer { remote_url, dest } => {
            let destination = service.transfer_all(remote_url, dest.as_deref()).await?;
            vec![ui_str::transferred_message(&destination)]
        }
        CLICommand::Copy {
            remote_url,
            items,
            dest,
            recursive,
        } => {
            let depth = if *recursive {
                CopyDepth::Recursive
            } else {
                CopyDepth::Shallow
            };
            let destination = service
                .copy_subset(remote_url, items.as_slice(), dest.as_deref(), depth)
                .await?;
            vec![ui_str::copied_message(items.len(), &destination)]
        }
        CLICommand::List { remote_url } => {
            let mut names = service.list_contents(remote_url).await?;
            names.sort();
            names
        }
        CLICommand::Clone { remote_url, target } => {
            vec![try_git_clone(remote_url, target.as_deref()).await?]
        }
        CLICommand::Login => {
            // The login process's own output was already relayed to the terminal.
            HostingCli::default().try_login().await?;
            vec![ui_str::login_finished_message().to_string()]
        }
    };

    ok!(SuccessReport { lines })
}

#[cfg(test)]
mod tests_commands {
    use super::*;
    use clap::Parser as _;
    use gitxfer::{Run, TempDir, TokioCommand,
                  git_command_names::{GIT_CMD_ADD, GIT_CMD_COMMIT, GIT_CMD_CONFIG,
                                      GIT_CMD_INIT, GIT_PROGRAM},
                  git_config_keys::{GIT_CONFIG_COMMIT_GPGSIGN, GIT_CONFIG_USER_EMAIL,
                                    GIT_CONFIG_USER_NAME},
                  try_create_temp_dir};
    use pretty_assertions::assert_eq;
    use std::{fs, path::PathBuf};

    /// A committed repository holding `zeta.txt`, `alpha.txt`, and `mid/inner.txt`.
    async fn helper_setup_repo() -> (TempDir, PathBuf) {
        let root = try_create_temp_dir().unwrap();
        let repo = root.join("fixture");
        fs::create_dir_all(repo.join("mid")).unwrap();
        fs::write(repo.join("zeta.txt"), "zeta").unwrap();
        fs::write(repo.join("alpha.txt"), "alpha").unwrap();
        fs::write(repo.join("mid").join("inner.txt"), "inner").unwrap();

        let steps: [&[&str]; 6] = [
            &[GIT_CMD_INIT],
            &[GIT_CMD_CONFIG, GIT_CONFIG_USER_EMAIL, "test@example.com"],
            &[GIT_CMD_CONFIG, GIT_CONFIG_USER_NAME, "Test User"],
            &[GIT_CMD_CONFIG, GIT_CONFIG_COMMIT_GPGSIGN, "false"],
            &[GIT_CMD_ADD, "."],
            &[GIT_CMD_COMMIT, "-m", "Initial commit"],
        ];
        for args in steps {
            TokioCommand::new(GIT_PROGRAM)
                .args(args)
                .current_dir(&repo)
                .run()
                .await
                .unwrap();
        }

        (root, repo)
    }

    fn parse(args: &[&str]) -> CLIArg {
        CLIArg::try_parse_from(args.iter().copied()).unwrap()
    }

    #[tokio::test]
    async fn test_list_prints_sorted_names() {
        let (_root, repo) = helper_setup_repo().await;
        let repo = repo.display().to_string();

        let report = try_run_command(&parse(&["gitxfer", "list", &repo]))
            .await
            .unwrap();

        assert_eq!(
            report,
            SuccessReport {
                lines: vec![
                    ".git".to_string(),
                    "alpha.txt".to_string(),
                    "mid".to_string(),
                    "zeta.txt".to_string(),
                ]
            }
        );
    }

    #[tokio::test]
    async fn test_copy_reports_item_count() {
        let (root, repo) = helper_setup_repo().await;
        let repo = repo.display().to_string();
        let dest = root.join("out");
        let dest_arg = dest.display().to_string();

        let report = try_run_command(&parse(&[
            "gitxfer", "copy", &repo, "alpha.txt", "mid", "--dest", &dest_arg, "-r",
        ]))
        .await
        .unwrap();

        assert_eq!(report.lines, vec![ui_str::copied_message(2, &dest)]);
        assert_eq!(fs::read_to_string(dest.join("alpha.txt")).unwrap(), "alpha");
        assert_eq!(
            fs::read_to_string(dest.join("mid").join("inner.txt")).unwrap(),
            "inner"
        );
    }

    #[tokio::test]
    async fn test_list_missing_repo_is_an_error() {
        let root = try_create_temp_dir().unwrap();
        let missing = root.join("no_such_repo").display().to_string();

        let Err(err) = try_run_command(&parse(&["gitxfer", "list", &missing])).await else {
            panic!("Expected an error, but got success");
        };

        assert!(
            err.to_string()
                .starts_with(&format!("Repo contents list failed: {missing}: "))
        );
    }
}
