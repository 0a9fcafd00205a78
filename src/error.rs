use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Logical field name is not present in the status or command registry.
    #[error("unknown field '{0}'")]
    NotFound(String),
    /// Wire key absent from an otherwise successful status document.
    #[error("key '{key}' missing from device response")]
    MissingKey { key: String },
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("request failed with HTTP status {status}")]
    Transport { status: u16 },
    /// The device answered with a `result` code other than success.
    #[error("device error {code}: {message}")]
    Device { code: i64, message: String },
    #[error(transparent)]
    Http(#[from] ureq::Error),
}

impl Error {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
