// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Git program and subcommand names used when building [`crate::TokioCommand`]s.
pub mod git_command_names {
    pub const GIT_PROGRAM: &str = "git";
    pub const GIT_CMD_CLONE: &str = "clone";
    pub const GIT_CMD_INIT: &str = "init";
    pub const GIT_CMD_CONFIG: &str = "config";
    pub const GIT_CMD_ADD: &str = "add";
    pub const GIT_CMD_COMMIT: &str = "commit";
    /// Marks the end of options, so a URL that starts with `-` is not parsed as a flag.
    pub const GIT_ARG_END_OF_OPTIONS: &str = "--";
}

pub mod git_config_keys {
    pub const GIT_CONFIG_USER_EMAIL: &str = "user.email";
    pub const GIT_CONFIG_USER_NAME: &str = "user.name";
    pub const GIT_CONFIG_COMMIT_GPGSIGN: &str = "commit.gpgsign";
}

pub mod git_env_vars {
    /// Setting this to `0` makes git fail instead of prompting for credentials.
    pub const GIT_ENV_TERMINAL_PROMPT: &str = "GIT_TERMINAL_PROMPT";
    pub const GIT_ENV_TERMINAL_PROMPT_DISABLED: &str = "0";
}

#[cfg(test)]
pub mod test_config {
    pub const TEST_EMAIL: &str = "test@example.com";
    pub const TEST_USER_NAME: &str = "Test User";
    pub const TEST_GPG_SIGN_DISABLED: &str = "false";
    pub const TEST_INITIAL_COMMIT_MSG: &str = "Initial commit";
}
