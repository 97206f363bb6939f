// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::process::{ExitStatus, Stdio};

use tokio::{io::{AsyncRead, AsyncReadExt as _, AsyncWrite, AsyncWriteExt as _},
            process::Command};

use crate::{CommandRunError, ok};

/// Disambiguate the [`tokio::process::Command`] type from the [`std::process::Command`]
/// type. tokio's `Command` is asynchronous and doesn't block the thread, while std's
/// `Command` blocks until completion.
pub type TokioCommand = tokio::process::Command;

/// This macro to create a [`TokioCommand`] that receives a set of arguments and
/// returns it.
///
/// # Example of command and args
///
/// ```
/// # use gitxfer::command;
///
/// async fn run_command() {
///     let arg_2 = "world!";
///     let mut command = command!(
///         program => "echo",
///         args => "Hello,", arg_2,
///     );
///     let output = command.output().await.expect("Failed to execute command");
///     assert!(output.status.success());
///     assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello, world!\n");
/// }
/// ```
///
/// # Example of command, args, and items
///
/// ```
/// # use gitxfer::{command, Run};
///
/// async fn run_command() {
///     let items = vec!["item1", "item2"];
///     let run_bytes = command!(
///         program => "echo",
///         args => "Hello, world!",
///         + items => items
///     )
///     .run()
///     .await
///     .unwrap();
///     assert_eq!(String::from_utf8_lossy(&run_bytes), "Hello, world! item1 item2\n");
/// }
/// ```
#[macro_export]
macro_rules! command {
    // Variant that receives a command and args & items.
    (program=> $cmd:expr, args => $($args:expr,)* + items => $items:expr)
    => {{
        let mut it = $crate::TokioCommand::new($cmd);
        $(
            it.arg($args);
        )*
        for item in $items {
            it.arg(item.to_string());
        }
        it
    }};

    // Variant that receives a command and args.
    (program=> $cmd:expr, args=> $($args:expr),* $(,)?) => {{
        let mut it = $crate::TokioCommand::new($cmd);
        $(
            it.arg($args);
        )*
        it
    }};
}

pub trait Run {
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command program does not exist or cannot be executed
    /// - The command fails with a non-zero exit status
    fn run(
        &mut self,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, CommandRunError>> + Send;
}

impl Run for TokioCommand {
    #[allow(clippy::missing_errors_doc)]
    async fn run(&mut self) -> Result<Vec<u8>, CommandRunError> { run(self).await }
}

/// The name of the program this command will run, for error messages and logs.
#[must_use]
pub fn program_name(command: &Command) -> String {
    command.as_std().get_program().to_string_lossy().to_string()
}

/// This command is not allowed to have user interaction. It does not inherit the
/// `stdin`, `stdout`, `stderr` from the parent (aka current) process.
///
/// # Errors
///
/// Returns an error if:
/// - The command program does not exist or cannot be executed
/// - The command fails with a non-zero exit status
pub async fn run(command: &mut Command) -> Result<Vec<u8>, CommandRunError> {
    let program = program_name(command);

    // Try to run command (might be unable to run it if the program is invalid).
    let output = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| CommandRunError::FailedToRun {
            program: program.clone(),
            source,
        })?;

    // At this point, the command has run, but it might result in a success or failure.
    if output.status.success() {
        ok!(output.stdout)
    } else {
        Err(CommandRunError::ran_unsuccessfully(
            program,
            output.status,
            &output.stderr,
        ))
    }
}

/// What a relayed command produced. See [`run_and_relay`].
#[derive(Debug)]
pub struct RelayedOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run a command that may need the user (it inherits `stdin`), while both relaying its
/// `stdout` and `stderr` to the given sinks as the bytes arrive, and accumulating them.
///
/// Unlike [`run`], a non-zero exit status is **not** an error
/// here. The caller gets the [`RelayedOutput::status`] and decides.
///
/// # Errors
///
/// Returns an error if:
/// - The command program does not exist or cannot be executed
/// - Reading from the child or writing to a sink fails
pub async fn run_and_relay<O, E>(
    command: &mut Command,
    stdout_sink: O,
    stderr_sink: E,
) -> Result<RelayedOutput, CommandRunError>
where
    O: AsyncWrite + Unpin + Send,
    E: AsyncWrite + Unpin + Send,
{
    let program = program_name(command);

    let mut child = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| CommandRunError::FailedToRun {
            program: program.clone(),
            source,
        })?;

    let child_stdout = child.stdout.take();
    let child_stderr = child.stderr.take();

    // Drain both pipes concurrently, so that the child never blocks on a full pipe.
    let (res_stdout, res_stderr) = tokio::join!(
        relay(child_stdout, stdout_sink),
        relay(child_stderr, stderr_sink)
    );

    let status = child.wait().await;

    let map_relay_err = |source| CommandRunError::OutputRelayFailed {
        program: program.clone(),
        source,
    };
    let stdout = res_stdout.map_err(map_relay_err)?;
    let stderr = res_stderr.map_err(map_relay_err)?;
    let status = status.map_err(map_relay_err)?;

    ok!(RelayedOutput {
        status,
        stdout: String::from_utf8_lossy(&stdout).to_string(),
        stderr: String::from_utf8_lossy(&stderr).to_string(),
    })
}

/// Copy `source` into `sink` chunk by chunk, and return everything that was copied.
async fn relay<R, W>(source: Option<R>, mut sink: W) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut acc = Vec::new();
    let Some(mut source) = source else {
        return ok!(acc);
    };

    let mut buf = vec![0_u8; 4096];
    loop {
        let count = source.read(&mut buf).await?;
        if count == 0 {
            break;
        }
        acc.extend_from_slice(&buf[..count]);
        sink.write_all(&buf[..count]).await?;
        sink.flush().await?;
    }

    ok!(acc)
}
