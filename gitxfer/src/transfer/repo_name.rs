// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const FALLBACK_REPO_NAME: &str = "temp_repo";
const GIT_SUFFIX: &str = ".git";

/// Short name of a repository, used to name its temporary clone directory. This is the
/// last `/` separated segment of `remote_url`, with one trailing `.git` removed. If that
/// leaves nothing, [`FALLBACK_REPO_NAME`] is used.
///
/// ```
/// use gitxfer::derive_repo_name;
/// assert_eq!(derive_repo_name("https://example.com/x/sample.git"), "sample");
/// assert_eq!(derive_repo_name("https://example.com/x/"), "temp_repo");
/// ```
#[must_use]
pub fn derive_repo_name(remote_url: &str) -> String {
    let last_segment = remote_url.rsplit('/').next().unwrap_or_default();
    let name = last_segment.strip_suffix(GIT_SUFFIX).unwrap_or(last_segment);
    if name.is_empty() {
        FALLBACK_REPO_NAME.to_string()
    } else {
        name.to_string()
    }
}
