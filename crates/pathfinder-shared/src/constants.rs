//! Application-wide constants

pub const DEFAULT_CONFIG_FILE: &str = "config";
pub const CONFIG_FILE_ENV: &str = "PATHFINDER_CONFIG";
pub const ENV_PREFIX: &str = "PATHFINDER";
pub const DEFAULT_TITLE: &str = "Pathfinder";
pub const DEFAULT_SUBTITLE: &str = "Your navigation hub";
pub const SESSION_COOKIE: &str = "token";
pub const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 5;
