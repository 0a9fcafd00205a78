use std::env;
use std::time::Duration;

use crate::constants::{defaults, envvars};
use crate::helpers::hash_password;

/// Connection settings for one controller.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Hostname or `host:port` of the controller
    pub host: String,
    /// MD5 hex digest of the device password, sent as the `pw` query parameter
    pub password_hash: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a configuration from a plain-text password, hashing it once up front.
    pub fn new(host: impl Into<String>, password: &str) -> Self {
        Self::with_password_hash(host, hash_password(password))
    }

    pub fn with_password_hash(host: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            password_hash: password_hash.into(),
            timeout: defaults::REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Apply overrides from the environment. Currently only the request timeout
    /// (whole seconds); unparseable values are logged and ignored.
    pub fn with_env_overrides(self) -> Self {
        match env::var(envvars::REQUEST_TIMEOUT) {
            Ok(secs) => match secs.trim().parse::<u64>() {
                Ok(secs) => self.with_timeout(Duration::from_secs(secs)),
                Err(e) => {
                    log::warn!(
                        "Ignoring {}='{}': {}",
                        envvars::REQUEST_TIMEOUT,
                        secs,
                        e
                    );
                    self
                }
            },
            Err(_) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hashes_password() {
        let config = ClientConfig::new("192.168.1.20", "opendoor");
        assert_eq!(config.host, "192.168.1.20");
        assert_eq!(config.password_hash, "a6d82bced638de3def1e9bbb4983225c");
        assert_eq!(config.timeout, defaults::REQUEST_TIMEOUT);
    }

    #[test]
    fn test_with_timeout() {
        let config = ClientConfig::new("os.local", "pw").with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_timeout_env_override() {
        temp_env::with_var(envvars::REQUEST_TIMEOUT, Some("25"), || {
            let config = ClientConfig::new("os.local", "pw").with_env_overrides();
            assert_eq!(config.timeout, Duration::from_secs(25));
        });
    }

    #[test]
    fn test_invalid_timeout_env_ignored() {
        temp_env::with_var(envvars::REQUEST_TIMEOUT, Some("soon"), || {
            let config = ClientConfig::new("os.local", "pw").with_env_overrides();
            assert_eq!(config.timeout, defaults::REQUEST_TIMEOUT);
        });
    }

    #[test]
    fn test_no_env_override() {
        temp_env::with_var_unset(envvars::REQUEST_TIMEOUT, || {
            let config = ClientConfig::new("os.local", "pw").with_env_overrides();
            assert_eq!(config.timeout, defaults::REQUEST_TIMEOUT);
        });
    }
}
