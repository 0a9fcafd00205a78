use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const LOG_LEVEL: &str = "info";
pub const LOG_TARGET: &str = "opensprinkler";
