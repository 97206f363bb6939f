// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Low level building blocks: error aliases, macros, logging setup, and the `script`
//! module that wraps subprocesses and filesystem primitives.

// Connect to source file.
pub mod common;
pub mod decl_macros;
pub mod log;
pub mod misc;
pub mod script;

// Re-export.
pub use common::*;
pub use decl_macros::*;
pub use log::*;
pub use misc::*;
pub use script::*;
