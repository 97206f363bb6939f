// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommandRunError, fmt_exit_code};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum HostingCliError {
    /// The `--version` probe could not run, or exited with a non-zero status.
    #[error("{display_name} not found or not executable. Please download and install it.")]
    #[diagnostic(code(gitxfer::hosting_cli::not_found))]
    NotFound {
        display_name: String,
        #[source]
        source: CommandRunError,
    },

    #[error(
        "{display_name} login failed with exit code {}. Error (stderr): {stderr}",
        fmt_exit_code(.exit_code)
    )]
    #[diagnostic(code(gitxfer::hosting_cli::login_failed))]
    LoginFailed {
        display_name: String,
        /// [`None`] when the process was terminated by a signal.
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to start {display_name} login process: {message}")]
    #[diagnostic(code(gitxfer::hosting_cli::spawn_failed))]
    Spawn {
        display_name: String,
        message: String,
        #[source]
        source: CommandRunError,
    },
}
