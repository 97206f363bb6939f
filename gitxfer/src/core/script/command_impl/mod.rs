// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod command_run_error;
pub mod command_runner;

// Re-export.
pub use command_run_error::*;
pub use command_runner::*;
