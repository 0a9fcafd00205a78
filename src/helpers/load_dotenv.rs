use std::env;
use std::path::PathBuf;

use crate::constants::envvars;

/// Load `./.env`, then `$OS_CONFIG_DIR/.env`, returning the files that were read.
///
/// Runs before the logger exists (it may set `LOG_LEVEL`), so the caller logs
/// the result once logging is initialised.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    if let Ok(path) = dotenv::dotenv() {
        loaded.push(path);
    }
    if let Ok(config_dir) = env::var(envvars::CONFIG_DIR) {
        let path = PathBuf::from(config_dir).join(".env");
        if dotenv::from_path(&path).is_ok() {
            loaded.push(path);
        }
    }
    loaded
}
