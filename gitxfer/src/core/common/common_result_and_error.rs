// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Each module in this crate defines its own [`thiserror::Error`] +
//! [`miette::Diagnostic`] enum so that callers can match on the kind of failure. Code
//! that just wants to bubble errors up (eg: the binary) uses [`CommonResult`].

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// Any of the error enums in this crate convert into a [`miette::Report`] with `?`,
/// since they all implement [`miette::Diagnostic`].
///
/// # Example
///
/// ```
/// use gitxfer::{CommonResult, derive_repo_name};
///
/// fn name_of(url: &str) -> CommonResult<String> {
///     let name = derive_repo_name(url);
///     if name.is_empty() {
///         miette::bail!("empty name for {url}");
///     }
///     Ok(name)
/// }
///
/// assert_eq!(name_of("https://example.com/x/sample.git").unwrap(), "sample");
/// ```
pub type CommonResult<T> = miette::Result<T>;

/// Prefer the error's own message, and fall back to `fallback` when it is empty.
#[must_use]
pub fn message_or(message: impl ToString, fallback: &str) -> String {
    let message = message.to_string();
    let trimmed = message.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
