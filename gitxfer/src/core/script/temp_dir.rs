// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::Deref,
          path::{Path, PathBuf}};

use miette::IntoDiagnostic;

use crate::generate_friendly_random_id;

/// A scratch folder under [`std::env::temp_dir`] that is deleted when dropped. This is
/// meant for tests and fixtures. Clones made by [`crate::RepoTransferService`] use
/// [`crate::TempCloneDir`] instead, which lives in the caller's working directory.
#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    /// Join a path to the temporary directory.
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

/// Create a temporary directory. The directory is automatically deleted when the
/// [`TempDir`] struct is dropped.
///
/// You might want to use the [`crate::try_create_temp_dir_and_cd`!] macro instead,
/// which creates a subdirectory inside the temp dir and changes to that subdirectory.
///
/// # Errors
///
/// Returns an error if the temp directory cannot be created, eg: insufficient
/// permissions or a full file system.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let new_temp_dir = root.join(generate_friendly_random_id().as_str());
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

/// Macro to create a temp dir, a sub dir inside it, and change to that sub dir. It
/// returns a tuple containing:
///
/// 1. [`TempDir`] struct that contains the path to the newly created temp dir (the root).
///    Hold on to this and only drop it when you are done with the temp dir (since it will
///    be deleted when dropped).
/// 2. The [`std::path::PathBuf`] to the newly sub dir (inside the newly created temp dir
///    root).
///
/// # Example
///
/// ```no_run
/// # use gitxfer::{try_create_temp_dir_and_cd, ok};
/// # fn variant_1() -> miette::Result<()> {
///     let (temp_dir_root, sub_dir_path_buf) = try_create_temp_dir_and_cd!("sub_dir_name");
///     ok!()
/// } // temp_dir_root is dropped here and the temp dir is deleted.
///
/// # fn variant_2() -> miette::Result<()> {
///     let temp_dir_root = try_create_temp_dir_and_cd!();
///     ok!()
/// } // temp_dir_root is dropped here and the temp dir is deleted.
/// ```
///
/// # Warning, this changes the current working directory of the process
///
/// `cargo test` runs all the tests in a single process, so when one test changes the
/// current working directory, it affects all other tests. Wrap such tests in
/// [`crate::serial_preserve_pwd_test`!].
#[macro_export]
macro_rules! try_create_temp_dir_and_cd {
    ($sub_dir:expr) => {{
        let temp_dir_root = $crate::try_create_temp_dir()?;
        let sub_dir_path = temp_dir_root.join($sub_dir);
        std::fs::create_dir_all(&sub_dir_path)
            .map_err(|err| miette::miette!("{}: {}", sub_dir_path.display(), err))?;
        $crate::try_cd(&sub_dir_path)?;
        (temp_dir_root, sub_dir_path)
    }};
    () => {{
        let temp_dir_root = $crate::try_create_temp_dir()?;
        $crate::try_cd(&temp_dir_root)?;
        temp_dir_root
    }};
}

/// Automatically delete the temporary directory when the [`TempDir`] struct is dropped.
impl Drop for TempDir {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

/// Allow access to the inner [`std::path::Path`] easily when using other APIs.
///
/// # Example
///
/// ```no_run
/// use gitxfer::try_create_temp_dir;
/// let root = try_create_temp_dir().unwrap();
/// let new_dir = root.join("some_sub_dir");
/// ```
impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl Display for TempDir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path { &self.inner }
}

#[cfg(test)]
mod tests_temp_dir {
    use super::*;
    use crate::{ok, serial_preserve_pwd_test};

    fn create_and_cd_into_sub_dir() -> miette::Result<()> {
        let (temp_dir_root, sub_dir) = try_create_temp_dir_and_cd!("test_sub_dir");

        assert!(temp_dir_root.inner.exists());
        assert!(sub_dir.exists());
        assert_eq!(
            std::env::current_dir().unwrap().canonicalize().unwrap(),
            sub_dir.canonicalize().unwrap()
        );

        let copy_of_path = temp_dir_root.inner.clone();
        drop(temp_dir_root);
        assert!(!copy_of_path.exists());

        ok!()
    }

    serial_preserve_pwd_test!(test_macro_try_create_temp_dir_and_cd, {
        create_and_cd_into_sub_dir().unwrap();
    });

    #[test]
    fn test_temp_dir_join() {
        let temp_dir = try_create_temp_dir().unwrap();
        let new_sub_dir = temp_dir.join("some_sub_dir");

        assert!(temp_dir.exists());
        assert!(!new_sub_dir.exists());
        assert!(new_sub_dir.starts_with(&*temp_dir));
        assert_eq!(temp_dir.to_string(), temp_dir.inner.display().to_string());
    }

    #[test]
    fn test_temp_dir_drop() {
        let temp_dir = try_create_temp_dir().unwrap();
        std::fs::write(temp_dir.join("file.txt"), "x").unwrap();

        let copy_of_path = temp_dir.inner.clone();
        drop(temp_dir);

        assert!(!copy_of_path.exists());
    }
}
