// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The clone -> act -> cleanup workflows: [`RepoTransferService::transfer_all`],
//! [`RepoTransferService::copy_subset`], and [`RepoTransferService::list_contents`].

// Skip rustfmt for rest of file to preserve manual organization
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod repo_name;
mod temp_clone_dir;
mod transfer_options;
mod transfer_error;
mod fan_out;
mod repo_transfer_service;

// Public re-exports (expose stable flat API).
pub use repo_name::*;
pub use temp_clone_dir::*;
pub use transfer_options::*;
pub use transfer_error::*;
pub use fan_out::*;
pub use repo_transfer_service::*;

pub const TRANSFER_MOD_DEBUG: bool = true;
