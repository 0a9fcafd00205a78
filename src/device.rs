use crate::config::ClientConfig;
use crate::constants::defaults;
use crate::controller::Controller;
use crate::interfaces::HttpTransport;

/// Handle on one networked controller.
pub struct OpenSprinkler {
    controller: Controller<HttpTransport>,
}

impl OpenSprinkler {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_log_target(config, defaults::LOG_TARGET)
    }

    /// Create a handle whose log records are emitted under `target`.
    pub fn with_log_target(config: &ClientConfig, target: &str) -> Self {
        log::debug!(target: target, "Creating OpenSprinkler client for {}", config.host);
        let transport = HttpTransport::new(config).with_log_target(target);
        OpenSprinkler {
            controller: Controller::new(transport).with_log_target(target),
        }
    }

    pub fn host(&self) -> &str {
        self.controller.transport().host()
    }

    pub fn controller(&self) -> &Controller<HttpTransport> {
        &self.controller
    }
}
