// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use gitxfer::{CommonResult, throws, try_initialize_logging_global};
use gitxfer_cmdr::{CLIArg, try_run_command, ui_str};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// Note: The `tokio::main` macro internally calls `.expect("Failed building the Runtime")`
// when initializing the Tokio runtime. This is unavoidable and safe, as runtime creation
// failure is a fatal error that should panic. The lint must be suppressed here.
#[tokio::main]
#[allow(clippy::unwrap_in_result)]
async fn main() -> CommonResult<()> {
    throws!({
        // If no args are passed, the following line will fail, and help will be printed
        // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
        let cli_arg = CLIArg::parse();

        let enable_logging = cli_arg.global_options.enable_logging;
        enable_logging.then(|| {
            // Logs to `log.txt` in the current folder.
            try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        });

        match try_run_command(&cli_arg).await {
            Ok(report) => report.print(),
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::error!(
                    message = ui_str::unrecoverable_error_message(),
                    error = ?error
                );
                return Err(error);
            }
        }

        enable_logging.then(|| {
            tracing::debug!(message = "Stop logging...");
        });
    })
}
