pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const REQUEST_TIMEOUT: &str = "OS_REQUEST_TIMEOUT";
/// Directory holding an additional `.env` file for the binary
pub const CONFIG_DIR: &str = "OS_CONFIG_DIR";
