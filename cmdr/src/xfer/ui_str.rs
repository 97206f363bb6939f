// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

#[must_use]
pub fn transferred_message(destination: &Path) -> String {
    format!("Moved repository contents into: {}", destination.display())
}

#[must_use]
pub fn copied_message(count: usize, destination: &Path) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("Copied {count} {noun} into: {}", destination.display())
}

#[must_use]
pub fn login_finished_message() -> &'static str { "Login finished." }

#[must_use]
pub fn unrecoverable_error_message() -> &'static str {
    "Could not run gitxfer due to the following problem"
}
