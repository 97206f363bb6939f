// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # gitxfer
//!
//! Clone a git repository into a scoped temporary directory, then redistribute its
//! top-level contents into a destination directory:
//!
//! 1. [`RepoTransferService::transfer_all`] moves every top-level entry.
//! 2. [`RepoTransferService::copy_subset`] copies a caller-chosen set of entries.
//! 3. [`RepoTransferService::list_contents`] only reports the entry names.
//!
//! The temporary clone is always deleted, whether the workflow succeeds or fails. See
//! [`TempCloneDir`] for how that is guaranteed.
//!
//! There is also a helper to drive a code hosting CLI's interactive login (see
//! [`HostingCli::try_login`]), and a plain [`try_git_clone`] helper.
//!
//! # Example
//!
//! ```no_run
//! use gitxfer::{RepoTransferService, CopyDepth};
//!
//! # async fn example() -> miette::Result<()> {
//! let service = RepoTransferService::new();
//!
//! let names = service
//!     .list_contents("https://github.com/r3bl-org/r3bl-open-core.git")
//!     .await?;
//! println!("{names:?}");
//!
//! let dest = service
//!     .copy_subset(
//!         "https://github.com/r3bl-org/r3bl-open-core.git",
//!         &["README.md", "docs"],
//!         Some(std::path::Path::new("out")),
//!         CopyDepth::Shallow,
//!     )
//!     .await?;
//! println!("copied into {}", dest.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Every phase emits [`tracing`] events. Nothing is printed unless a subscriber is
//! installed, eg via [`try_initialize_logging_global`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod transfer;

// Re-export.
pub use core::*;
pub use transfer::*;
