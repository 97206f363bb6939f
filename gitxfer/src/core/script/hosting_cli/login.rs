// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::io::AsyncWrite;

use crate::{HostingCliError, Run, SCRIPT_MOD_DEBUG, command, message_or, ok,
            run_and_relay};

pub mod hosting_cli_constants {
    pub const GH_PROGRAM: &str = "gh";
    pub const GH_DISPLAY_NAME: &str = "GitHub CLI";
    pub const ARG_VERSION: &str = "--version";
    pub const ARG_AUTH: &str = "auth";
    pub const ARG_LOGIN: &str = "login";
}

use hosting_cli_constants::{ARG_AUTH, ARG_LOGIN, ARG_VERSION, GH_DISPLAY_NAME,
                            GH_PROGRAM};

/// An external code hosting CLI that has an interactive `auth login` flow. The
/// [`Default`] is the GitHub CLI (`gh`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostingCli {
    pub program: String,
    /// Used in error messages.
    pub display_name: String,
}

impl Default for HostingCli {
    fn default() -> Self { Self::new(GH_PROGRAM, GH_DISPLAY_NAME) }
}

impl HostingCli {
    #[must_use]
    pub fn new(program: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            display_name: display_name.into(),
        }
    }

    /// Run `<program> auth login` with the user's terminal attached to its `stdin`,
    /// while relaying its output to this process's `stdout` and `stderr`. Returns
    /// everything the login process wrote to `stdout`.
    ///
    /// # Errors
    ///
    /// See [`Self::try_login_with_sinks`].
    pub async fn try_login(&self) -> Result<String, HostingCliError> {
        self.try_login_with_sinks(tokio::io::stdout(), tokio::io::stderr())
            .await
    }

    /// Same as [`Self::try_login`], but the login process's output is relayed to the
    /// given sinks.
    ///
    /// # Errors
    ///
    /// - [`HostingCliError::NotFound`] if `<program> --version` does not succeed.
    /// - [`HostingCliError::Spawn`] if the login process can't be started, or its
    ///   output can't be relayed.
    /// - [`HostingCliError::LoginFailed`] if the login process exits with a non-zero
    ///   status.
    pub async fn try_login_with_sinks<O, E>(
        &self,
        stdout_sink: O,
        stderr_sink: E,
    ) -> Result<String, HostingCliError>
    where
        O: AsyncWrite + Unpin + Send,
        E: AsyncWrite + Unpin + Send,
    {
        let display_name = self.display_name.clone();

        // Probe.
        if let Err(source) = command!(program => &self.program, args => ARG_VERSION)
            .run()
            .await
        {
            return Err(HostingCliError::NotFound {
                display_name,
                source,
            });
        }

        SCRIPT_MOD_DEBUG.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "hosting cli login start", program = %self.program);
        });

        let mut cmd = command!(program => &self.program, args => ARG_AUTH, ARG_LOGIN);
        let output = match run_and_relay(&mut cmd, stdout_sink, stderr_sink).await {
            Ok(output) => output,
            Err(source) => {
                return Err(HostingCliError::Spawn {
                    display_name,
                    message: message_or(source.message(), "Spawn error"),
                    source,
                });
            }
        };

        SCRIPT_MOD_DEBUG.then(|| {
            tracing::debug!(
                message = "hosting cli login finish",
                program = %self.program,
                status = ?output.status
            );
        });

        if output.status.success() {
            ok!(output.stdout)
        } else {
            Err(HostingCliError::LoginFailed {
                display_name,
                exit_code: output.status.code(),
                stderr: output.stderr.trim().to_string(),
            })
        }
    }
}
