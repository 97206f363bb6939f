// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Async filesystem primitives used by the transfer workflows. Each operation maps its
//! [`std::io::Error`] into one [`FsOpError`] variant, whose message names the operation
//! and the path(s) involved.

// Skip rustfmt for rest of file to preserve manual organization
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod fs_op_error;
mod entry_ops;
mod directory_ops;

// Public re-exports (expose stable flat API).
pub use fs_op_error::*;
pub use entry_ops::*;
pub use directory_ops::*;
