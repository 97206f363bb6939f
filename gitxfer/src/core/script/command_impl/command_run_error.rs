// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::process::ExitStatus;

/// Failure modes of running a [`crate::TokioCommand`]:
///
/// | Variant               | Cause                                              |
/// | :-------------------- | :------------------------------------------------- |
/// | [`FailedToRun`]       | The program could not be spawned (eg: not on PATH) |
/// | [`RanUnsuccessfully`] | The program ran and exited with a non-zero status  |
/// | [`OutputRelayFailed`] | Its output could not be read or relayed            |
///
/// [`OutputRelayFailed`]: Self::OutputRelayFailed
/// [`FailedToRun`]: Self::FailedToRun
/// [`RanUnsuccessfully`]: Self::RanUnsuccessfully
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CommandRunError {
    #[error("Unable to run command '{program}': {source}")]
    #[diagnostic(
        code(gitxfer::command::failed_to_run),
        help("Make sure the program is installed and on your PATH")
    )]
    FailedToRun {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{program}' failed with exit code {}: {stderr}", fmt_exit_code(.exit_code))]
    #[diagnostic(code(gitxfer::command::ran_unsuccessfully))]
    RanUnsuccessfully {
        program: String,
        /// [`None`] when the process was terminated by a signal.
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Could not relay output of command '{program}': {source}")]
    #[diagnostic(code(gitxfer::command::output_relay_failed))]
    OutputRelayFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl CommandRunError {
    /// The text that the command wrote to `stderr`, when it got to run at all. For a
    /// command that could not be spawned, this is the spawn error's message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            CommandRunError::FailedToRun { source, .. }
            | CommandRunError::OutputRelayFailed { source, .. } => source.to_string(),
            CommandRunError::RanUnsuccessfully { stderr, .. } => stderr.clone(),
        }
    }

    pub(crate) fn ran_unsuccessfully(
        program: String,
        status: ExitStatus,
        stderr: &[u8],
    ) -> Self {
        CommandRunError::RanUnsuccessfully {
            program,
            exit_code: status.code(),
            stderr: String::from_utf8_lossy(stderr).trim().to_string(),
        }
    }
}

/// Render an exit code the way a shell user would expect to read it.
#[must_use]
#[allow(clippy::ref_option)]
pub fn fmt_exit_code(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}
