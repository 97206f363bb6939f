// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command line front end for [`gitxfer`]. The binary is `gitxfer`:
//!
//! ```text
//! gitxfer [-l] [--max-concurrency N] [--attempt-all] <COMMAND>
//!
//!   transfer <url> [--dest DIR]                 Move every top-level entry
//!   copy <url> <item>... [--dest DIR] [-r]      Copy some top-level entries
//!   list <url>                                  Print the top-level entry names
//!   clone <url> [target]                        Plain git clone
//!   login                                       Run the GitHub CLI login flow
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::redundant_closure)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::items_after_statements)]
#![warn(clippy::needless_return)]
#![warn(clippy::redundant_else)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::manual_let_else)]

// Attach.
pub mod xfer;

// Re-export.
pub use xfer::*;
