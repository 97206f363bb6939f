// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Thin async wrappers around subprocesses (`git`, the hosting CLI) and filesystem
//! primitives. The [`crate::transfer`] workflows are composed from these.

// Private modules (hide internal structure)
mod command_impl;
mod directory_change;
mod fs_ops;
mod git;
mod hosting_cli;
mod temp_dir;

// Re-export.
pub use command_impl::*;
pub use directory_change::*;
pub use fs_ops::*;
pub use git::*;
pub use hosting_cli::*;
pub use temp_dir::*;

pub const SCRIPT_MOD_DEBUG: bool = true;
