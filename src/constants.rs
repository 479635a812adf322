// Constants module for shared string constants

pub const CONFIG_FILE: &str = "loadorder.toml";
pub const LOAD_ORDER_PREFIX: &str = "loadorder";
pub const LOAD_ORDER_SUFFIX: &str = ".txt";

pub const DEFAULT_GITHUB_USER: &str = "dannyluck";
pub const DEFAULT_GITHUB_REPO: &str = "loadorder-db";
pub const DEFAULT_LOAD_ORDERS_PATH: &str = "loadorders";
pub const DEFAULT_BRANCH: &str = "main";

/// Schema version for the --json output format.
/// Increment only on breaking changes to ensure future integrations can safely evolve.
pub const SCHEMA_VERSION: u32 = 1;
