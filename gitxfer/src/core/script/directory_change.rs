// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env, path::Path};

use crate::{FsOpError, FsOpResult};

/// This macro is used to wrap a block with code that saves the current working directory,
/// runs the block of code for the test, and then restores the original working directory.
/// It also ensures that the test is run serially.
///
/// Be careful when manipulating the current working directory in tests using
/// [`env::set_current_dir`] as it can affect other tests that run in parallel.
#[macro_export]
macro_rules! serial_preserve_pwd_test {
    ($name:ident, $block:block) => {
        #[serial_test::serial]
        #[test]
        fn $name() {
            $crate::with_saved_pwd!($block);
        }
    };
}

/// Saves the current working directory, runs the block, and restores it. Use this in
/// conjunction with [serial_test::serial](https://docs.rs/serial_test/latest/serial_test/),
/// or just use [`serial_preserve_pwd_test`!] for tests.
#[macro_export]
macro_rules! with_saved_pwd {
    ($block:block) => {{
        let og_pwd = std::env::current_dir().unwrap();
        let result = { $block };
        std::env::set_current_dir(og_pwd).unwrap();
        result
    }};
}

/// Change cwd for current process.
///
/// # Errors
///
/// Returns [`FsOpError::ChangeDir`] if the folder does not exist, is not a folder, or
/// can't be entered.
pub fn try_cd(new_dir: impl AsRef<Path>) -> FsOpResult<()> {
    let new_dir = new_dir.as_ref();
    env::set_current_dir(new_dir).map_err(|err| FsOpError::change_dir_failed(new_dir, err))
}
