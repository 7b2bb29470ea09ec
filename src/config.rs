pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "rhm";
#[cfg(windows)]
pub const EXEC_NAME: &str = "rhm.exe";

/// Session data file, relative to the home directory.
pub const USER_STORE_PATH: &str = ".rhm/user.json";

/// Cookie the management API reads the session token from.
pub const SESSION_COOKIE: &str = "feedhenry";

pub const PROJECTS_API_PATH: &str = "/box/api/projects";

pub const HOST_ENV: &str = "RHM_HOST";
pub const TOKEN_ENV: &str = "RHM_TOKEN";
