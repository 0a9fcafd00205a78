use std::collections::BTreeMap;

use ureq::Agent;

use crate::config::ClientConfig;
use crate::constants::{defaults, endpoints};
use crate::error::{Error, Result};

use super::result_code::check_envelope;

/// JSON object returned by the controller, keyed by wire key.
pub type RawDocument = serde_json::Map<String, serde_json::Value>;

/// Query parameters for a command request, keyed by wire key.
pub type CommandPayload = BTreeMap<String, String>;

/// Request/response channel to a controller.
///
/// Implementations authenticate every request, map non-success HTTP responses
/// to [`Error::Transport`], and surface a failing `result` envelope as
/// [`Error::Device`].
pub trait Transport {
    fn fetch(&self, endpoint: &str) -> Result<RawDocument>;

    fn submit(&self, endpoint: &str, payload: &CommandPayload) -> Result<RawDocument>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch(&self, endpoint: &str) -> Result<RawDocument> {
        (**self).fetch(endpoint)
    }

    fn submit(&self, endpoint: &str, payload: &CommandPayload) -> Result<RawDocument> {
        (**self).submit(endpoint, payload)
    }
}

/// Plain-HTTP transport issuing one GET per call. No retries.
pub struct HttpTransport {
    agent: Agent,
    host: String,
    password_hash: String,
    log_target: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let agent_config = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build();

        HttpTransport {
            agent: Agent::new_with_config(agent_config),
            host: config.host.clone(),
            password_hash: config.password_hash.clone(),
            log_target: defaults::LOG_TARGET.to_string(),
        }
    }

    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("http://{}/{}/", self.host, endpoint)
    }

    fn get(&self, endpoint: &str, params: Option<&CommandPayload>) -> Result<RawDocument> {
        let mut request = self
            .agent
            .get(self.endpoint_url(endpoint).as_str())
            .query(endpoints::PASSWORD_PARAM, &self.password_hash);
        if let Some(params) = params {
            for (key, value) in params {
                request = request.query(key, value);
            }
        }

        let mut response = request.call()?;
        let status = response.status().as_u16();
        log::debug!(
            target: self.log_target.as_str(),
            "GET /{}/ {:?} status: {}",
            endpoint,
            params.unwrap_or(&CommandPayload::new()),
            status
        );
        if status != 200 {
            return Err(Error::Transport { status });
        }

        let document: RawDocument = response.body_mut().read_json()?;
        check_envelope(&document)?;
        Ok(document)
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, endpoint: &str) -> Result<RawDocument> {
        self.get(endpoint, None)
    }

    fn submit(&self, endpoint: &str, payload: &CommandPayload) -> Result<RawDocument> {
        self.get(endpoint, Some(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockito::Matcher;
    use once_cell::sync::Lazy;
    use serde_json::json;

    const SAMPLE_PASSWORD: &str = "opendoor";
    static SAMPLE_PASSWORD_HASH: Lazy<String> =
        Lazy::new(|| crate::helpers::hash_password(SAMPLE_PASSWORD));

    fn transport_for(server: &mockito::Server) -> HttpTransport {
        HttpTransport::new(&ClientConfig::new(server.host_with_port(), SAMPLE_PASSWORD))
    }

    fn password_matcher() -> Matcher {
        Matcher::UrlEncoded("pw".into(), SAMPLE_PASSWORD_HASH.clone())
    }

    #[test]
    fn test_endpoint_url() {
        let transport = HttpTransport::new(&ClientConfig::new("10.0.0.5:8080", "x"));
        assert_eq!(transport.endpoint_url("jc"), "http://10.0.0.5:8080/jc/");
        assert_eq!(transport.host(), "10.0.0.5:8080");
    }

    #[test]
    fn test_fetch_sends_password_hash() {
        let mut server = mockito::Server::new();
        let m = server
            .mock("GET", "/jc/")
            .match_query(password_matcher())
            .with_body(json!({"devt": 1700000000, "nbrd": 1}).to_string())
            .expect(1)
            .create();

        let document = transport_for(&server).fetch("jc").unwrap();
        assert_eq!(document["nbrd"], json!(1));
        m.assert();
    }

    #[test]
    fn test_submit_appends_payload() {
        let mut server = mockito::Server::new();
        let m = server
            .mock("GET", "/cv/")
            .match_query(Matcher::AllOf(vec![
                password_matcher(),
                Matcher::UrlEncoded("rd".into(), "3".into()),
            ]))
            .with_body(json!({"result": 1}).to_string())
            .expect(1)
            .create();

        let payload = CommandPayload::from([("rd".to_string(), "3".to_string())]);
        let response = transport_for(&server).submit("cv", &payload).unwrap();
        assert_eq!(response["result"], json!(1));
        m.assert();
    }

    #[test]
    fn test_http_error_status() {
        let mut server = mockito::Server::new();
        let m = server
            .mock("GET", "/jc/")
            .match_query(Matcher::Any)
            .with_status(500)
            .expect(1)
            .create();

        match transport_for(&server).fetch("jc") {
            Err(Error::Transport { status }) => assert_eq!(status, 500),
            other => panic!("unexpected result: {other:?}"),
        }
        m.assert();
    }

    #[test]
    fn test_device_error_envelope() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/cv/")
            .match_query(Matcher::Any)
            .with_body(json!({"result": 48}).to_string())
            .create();

        match transport_for(&server).submit("cv", &CommandPayload::new()) {
            Err(Error::Device { code, message }) => {
                assert_eq!(code, 48);
                assert!(message.starts_with("Not Permitted"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_body() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/jc/")
            .match_query(Matcher::Any)
            .with_body("<html>not json</html>")
            .create();

        assert!(matches!(
            transport_for(&server).fetch("jc"),
            Err(Error::Http(_))
        ));
    }
}
