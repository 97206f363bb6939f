// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Git operations. The only one the transfer workflows need is `git clone`, which is
//! reached through the [`CloneRepo`] seam so that it can be swapped out.

// Skip rustfmt for rest of file to preserve manual organization
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod types;
mod clone_ops;

// Public re-exports (expose stable flat API).
pub use types::*;
pub use clone_ops::*;

// Test fixtures module used by inner test modules in this crate.
#[cfg(test)]
pub mod test_fixtures;
