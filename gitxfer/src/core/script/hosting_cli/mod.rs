// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file to preserve manual organization
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod hosting_cli_error;
mod login;

// Public re-exports (expose stable flat API).
pub use hosting_cli_error::*;
pub use login::*;
