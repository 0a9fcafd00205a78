use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

pub const PASSWORD: &str = "opendoor";
pub const PASSWORD_HASH: &str = "a6d82bced638de3def1e9bbb4983225c";

pub fn full_status() -> Value {
    json!({
        "devt": 1700000000,
        "nbrd": 2,
        "en": 1,
        "rd": 0,
        "rs": 1,
        "rdst": 0,
        "loc": "Boston,MA",
        "wtkey": "",
        "sunrise": 330,
        "sunset": 1140,
        "eip": 168496141,
        "lwc": 1699990000,
        "lswc": 1699980000,
        "sbits": 5,
        "ps": [[0, 0, 0], [99, 600, 1700000000]],
        "lrun": [1, 99, 600, 1699999000]
    })
}

pub fn password_matcher() -> Matcher {
    Matcher::UrlEncoded("pw".into(), PASSWORD_HASH.into())
}

pub fn mock_status(server: &mut ServerGuard, body: &Value) -> Mock {
    server
        .mock("GET", "/jc/")
        .match_query(password_matcher())
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
}
