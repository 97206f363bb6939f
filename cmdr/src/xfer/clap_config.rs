// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gitxfer::{DEFAULT_MAX_CONCURRENCY, FanOutPolicy, TransferOptions};

#[derive(Debug, Parser)]
#[command(bin_name = "gitxfer")]
#[command(about = "Move, copy, or list the top-level contents of a git repository")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nUSAGE:\n  gitxfer [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value_t = DEFAULT_MAX_CONCURRENCY,
        help = "Most top-level entries moved or copied at the same time"
    )]
    pub max_concurrency: usize,

    #[arg(
        global = true,
        long,
        help = "Keep going after an entry fails, and report every failure at the end"
    )]
    pub attempt_all: bool,
}

impl GlobalOption {
    #[must_use]
    pub fn to_transfer_options(&self) -> TransferOptions {
        let fan_out_policy = if self.attempt_all {
            FanOutPolicy::AttemptAll
        } else {
            FanOutPolicy::FailFast
        };
        TransferOptions::default()
            .with_max_concurrency(self.max_concurrency)
            .with_fan_out_policy(fan_out_policy)
    }
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "Move every top-level entry of the repository (including `.git`) into a folder that already exists\nEg: `gitxfer transfer https://github.com/org/repo.git --dest out`"
    )]
    Transfer {
        remote_url: String,
        #[arg(long, help = "Destination folder, defaults to the current folder")]
        dest: Option<PathBuf>,
    },

    #[clap(
        about = "Copy the named top-level entries of the repository into a folder, which is created if missing\nEg: `gitxfer copy https://github.com/org/repo.git README.md docs --dest out`"
    )]
    Copy {
        remote_url: String,
        #[arg(required = true, help = "Names of top-level entries to copy")]
        items: Vec<String>,
        #[arg(long, help = "Destination folder, defaults to the current folder")]
        dest: Option<PathBuf>,
        #[arg(
            long,
            short = 'r',
            help = "Copy folders with their contents, instead of creating empty folders"
        )]
        recursive: bool,
    },

    #[clap(about = "Print the names of the top-level entries of the repository")]
    List { remote_url: String },

    #[clap(about = "Clone the repository and keep the checkout")]
    Clone {
        remote_url: String,
        #[arg(help = "Folder to clone into, defaults to the current folder")]
        target: Option<PathBuf>,
    },

    #[clap(about = "Log in to GitHub using the GitHub CLI (`gh auth login`)")]
    Login,
}

#[cfg(test)]
mod tests_clap_config {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_copy_with_global_options() {
        let cli_arg = CLIArg::try_parse_from([
            "gitxfer",
            "copy",
            "https://example.com/x/sample.git",
            "README.md",
            "docs",
            "--dest",
            "out",
            "-r",
            "--attempt-all",
            "--max-concurrency",
            "4",
        ])
        .unwrap();

        let CLICommand::Copy {
            remote_url,
            items,
            dest,
            recursive,
        } = cli_arg.command
        else {
            panic!("Expected the copy command");
        };
        assert_eq!(remote_url, "https://example.com/x/sample.git");
        assert_eq!(items, vec!["README.md", "docs"]);
        assert_eq!(dest, Some(PathBuf::from("out")));
        assert!(recursive);

        let options = cli_arg.global_options.to_transfer_options();
        assert_eq!(options.max_concurrency, 4);
        assert_eq!(options.fan_out_policy, FanOutPolicy::AttemptAll);
    }

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["gitxfer", "list", "sample.git"]).unwrap();
        assert!(!cli_arg.global_options.enable_logging);
        assert_eq!(
            cli_arg.global_options.to_transfer_options(),
            TransferOptions::default()
        );
    }

    #[test_case(&["gitxfer", "transfer", "sample.git"] ; "transfer")]
    #[test_case(&["gitxfer", "list", "sample.git"] ; "list")]
    #[test_case(&["gitxfer", "login"] ; "login")]
    fn test_subcommands_parse(args: &[&str]) {
        assert!(CLIArg::try_parse_from(args.iter().copied()).is_ok());
    }

    #[test]
    fn test_copy_needs_items() {
        assert!(CLIArg::try_parse_from(["gitxfer", "copy", "sample.git"]).is_err());
    }

    #[test]
    fn test_clone_target_is_optional() {
        let cli_arg = CLIArg::try_parse_from(["gitxfer", "clone", "sample.git"]).unwrap();
        assert!(matches!(
            cli_arg.command,
            CLICommand::Clone { target: None, .. }
        ));
    }
}
