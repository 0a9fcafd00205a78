mod http_api;
pub mod result_code;

pub use http_api::{CommandPayload, HttpTransport, RawDocument, Transport};
pub use result_code::ResultCode;
