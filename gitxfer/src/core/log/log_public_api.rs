// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing::dispatcher;

use crate::{DisplayPreference, TracingConfig, WriterConfig, ok};

/// Instead of having lots of arguments to the [`try_initialize_logging_global`] and
/// [`try_initialize_logging_thread_local`] functions, they both receive a type that
/// implements the [`Into<TracingConfig>`] trait.
///
/// ```no_run
/// use gitxfer::{
///     TracingConfig, DisplayPreference, WriterConfig,
///     try_initialize_logging_global, try_initialize_logging_thread_local
/// };
///
/// let level_filter = tracing_core::LevelFilter::DEBUG;
/// let config_1: TracingConfig = level_filter.into();
///
/// let preferred_display = DisplayPreference::Stderr;
/// let config_2: TracingConfig = preferred_display.into();
///
/// let config_compose: TracingConfig = config_1 + config_2;
///
/// try_initialize_logging_global(config_compose);
/// ```
pub mod tracing_config_options {
    use super::{Add, DisplayPreference, TracingConfig, WriterConfig};

    pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<tracing_core::LevelFilter> for TracingConfig {
        fn from(level_filter: tracing_core::LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// Merge two [`TracingConfig`] instances together. The more verbose level wins.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two [`WriterConfig`] instances together. The `rhs` will clobber the `self`
    /// if it has a "some" value. That is, the value in `rhs` has higher specificity.
    ///
    /// - `{a: "foo"} + {a: "bar"} = {a: "bar"}`.
    /// - `{a: None } + {a: "bar"} = {a: "bar"}`.
    /// - `{a: "foo"} + {a: None } = {a: "foo"}`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                // No collision merge.
                (None, wc_rhs) => wc_rhs,
                (wc_lhs, None) => wc_lhs,
                (Display(dp_lhs), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
                (File(f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),

                // Collision (rhs has higher specificity).
                (Display(_), Display(dp_rhs)) => Display(dp_rhs),
                (File(_), File(f_rhs)) => File(f_rhs),
                (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp_rhs, f_rhs)) => {
                    DisplayAndFile(dp_rhs, f_rhs)
                }
                (DisplayAndFile(_, f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),
                (DisplayAndFile(dp_lhs, _), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
            }
        }
    }

    #[cfg(test)]
    mod tests_add_writer_configs {
        use super::*;

        #[test]
        fn test_add_writer_configs() {
            let fname = "log.txt".to_string();
            let none = WriterConfig::None;
            let display_stdout = WriterConfig::Display(DisplayPreference::Stdout);
            let display_stderr = WriterConfig::Display(DisplayPreference::Stderr);
            let file = WriterConfig::File(fname.clone());
            let display_stdout_and_file =
                WriterConfig::DisplayAndFile(DisplayPreference::Stdout, fname.clone());
            let display_stderr_and_file =
                WriterConfig::DisplayAndFile(DisplayPreference::Stderr, fname.clone());

            // No collision merge.
            assert_eq!(none.clone() + none.clone(), none);
            assert_eq!(display_stdout.clone() + none.clone(), display_stdout);
            assert_eq!(none.clone() + file.clone(), file);
            assert_eq!(
                display_stdout.clone() + file.clone(),
                display_stdout_and_file
            );
            assert_eq!(
                file.clone() + display_stderr.clone(),
                display_stderr_and_file
            );

            // Collision (rhs has higher specificity).
            assert_eq!(
                display_stdout.clone() + display_stderr.clone(),
                display_stderr
            );
            assert_eq!(
                display_stdout_and_file.clone() + display_stderr.clone(),
                display_stderr_and_file
            );
            assert_eq!(
                display_stdout.clone() + display_stderr_and_file.clone(),
                display_stderr_and_file
            );
            assert_eq!(
                display_stderr_and_file.clone() + file.clone(),
                display_stderr_and_file
            );
        }

        #[test]
        fn test_add_tracing_configs_picks_more_verbose_level() {
            let lhs: TracingConfig = tracing_core::LevelFilter::WARN.into();
            let rhs: TracingConfig = DisplayPreference::Stderr.into();
            let merged = lhs + rhs;
            assert_eq!(merged.level_filter, tracing_core::LevelFilter::DEBUG);
            assert_eq!(
                merged.writer_config,
                WriterConfig::DisplayAndFile(
                    DisplayPreference::Stderr,
                    DEFAULT_LOG_FILE_NAME.to_string()
                )
            );
        }
    }
}

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
///
/// Logging is **DISABLED** by **default**. If you don't call this function w/ a value
/// other than [`tracing_core::LevelFilter::OFF`], then the [`tracing::debug!`] etc.
/// events emitted by this crate go nowhere.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests_log_public_api {
    use super::*;
    use crate::try_create_temp_dir;

    #[test]
    fn test_off_installs_nothing() {
        let config: TracingConfig = tracing_core::LevelFilter::OFF.into();
        let guard = try_initialize_logging_thread_local(config).unwrap();
        assert!(guard.is_none());
    }

    #[test]
    fn test_thread_local_writes_to_file() {
        let dir = try_create_temp_dir().unwrap();
        let log_file = dir.join("thread_local.log");
        let log_file_str = log_file.to_string_lossy().to_string();

        let guard =
            try_initialize_logging_thread_local(WriterConfig::File(log_file_str))
                .unwrap();
        assert!(guard.is_some());

        tracing::debug!(message = "hello from test", answer = 42);
        drop(guard);

        let contents = std::fs::read_to_string(&log_file).unwrap();
        assert!(contents.contains("hello from test"));
    }
}
