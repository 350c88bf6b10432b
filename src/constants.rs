//! Constants used throughout the kiln application

/// License recorded when `--license` is not given
pub const DEFAULT_LICENSE: &str = "MIT";

/// Environment variables consulted, in order, for the default author
pub const AUTHOR_ENV_VARS: &[&str] = &["USERNAME", "USER"];

/// Author used when no environment variable provides one
pub const FALLBACK_AUTHOR: &str = "unknown";

/// Shortest accepted project name, counted after whitespace removal
pub const MIN_PROJECT_NAME_LEN: usize = 2;

/// Extension of the generated source and test stubs
pub const SOURCE_EXTENSION: &str = "go";

/// Suffix appended to the project name for the test stub
pub const TEST_FILE_SUFFIX: &str = "_test";

/// Fixed names of the generated files
pub mod files {
    pub const LICENSE: &str = "LICENSE";
    pub const README: &str = "README.md";
    pub const GITIGNORE: &str = ".gitignore";
    pub const CI_CONFIG: &str = ".travis.yml";
}

/// Permission bits applied on Unix when creating entries
pub mod modes {
    pub const DIRECTORY: u32 = 0o755;
    pub const FILE: u32 = 0o644;
}

/// Version-control command used to initialize the repository
pub mod vcs {
    pub const PROGRAM: &str = "git";
    pub const INIT_ARGS: &[&str] = &["init", "-q"];
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels; progress lines are shown at the default level
pub mod verbosity {
    pub const DEFAULT: u8 = 0;
    pub const DEBUG: u8 = 1;
    pub const TRACE: u8 = 2;
}
