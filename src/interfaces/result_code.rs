use crate::error::{Error, Result};
use crate::interfaces::RawDocument;

const RESULT_KEY: &str = "result";

/// `result` codes the controller places in its JSON response envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    Unauthorized,
    Mismatch,
    DataMissing,
    OutOfRange,
    DataFormatError,
    RfCodeError,
    NotFound,
    NotPermitted,
    Unknown(i64),
}

impl ResultCode {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Success,
            2 => Self::Unauthorized,
            3 => Self::Mismatch,
            16 => Self::DataMissing,
            17 => Self::OutOfRange,
            18 => Self::DataFormatError,
            19 => Self::RfCodeError,
            32 => Self::NotFound,
            48 => Self::NotPermitted,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::Success => 1,
            Self::Unauthorized => 2,
            Self::Mismatch => 3,
            Self::DataMissing => 16,
            Self::OutOfRange => 17,
            Self::DataFormatError => 18,
            Self::RfCodeError => 19,
            Self::NotFound => 32,
            Self::NotPermitted => 48,
            Self::Unknown(code) => *code,
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::Success => "Success".into(),
            Self::Unauthorized => {
                "Unauthorized (e.g. missing password or password is incorrect)".into()
            }
            Self::Mismatch => {
                "Mismatch (e.g. new password and confirmation password do not match)".into()
            }
            Self::DataMissing => "Data Missing (e.g. missing required parameters)".into(),
            Self::OutOfRange => "Out of Range (e.g. value exceeds the acceptable range)".into(),
            Self::DataFormatError => {
                "Data Format Error (e.g. provided data does not match required format)".into()
            }
            Self::RfCodeError => {
                "RF code error (e.g. RF code does not match required format)".into()
            }
            Self::NotFound => {
                "Page Not Found (e.g. page not found or requested file missing)".into()
            }
            Self::NotPermitted => {
                "Not Permitted (e.g. cannot operate on the requested station)".into()
            }
            Self::Unknown(code) => format!("unknown error code {code}"),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Fail with [`Error::Device`] if the document carries a non-success `result`.
///
/// Documents without a `result` key (such as `/jc` status output) are accepted.
pub fn check_envelope(document: &RawDocument) -> Result<()> {
    let Some(value) = document.get(RESULT_KEY) else {
        return Ok(());
    };
    let code = value.as_i64().ok_or_else(|| {
        Error::invalid_value(RESULT_KEY, format!("expected an integer, got {value}"))
    })?;

    let result = ResultCode::from_code(code);
    if result.is_success() {
        Ok(())
    } else {
        Err(Error::Device {
            code,
            message: result.description(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: serde_json::Value) -> RawDocument {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_known_codes_round_trip() {
        for code in [1, 2, 3, 16, 17, 18, 19, 32, 48] {
            let result = ResultCode::from_code(code);
            assert!(!matches!(result, ResultCode::Unknown(_)));
            assert_eq!(result.code(), code);
        }
    }

    #[test]
    fn test_unknown_code_description() {
        let result = ResultCode::from_code(99);
        assert_eq!(result, ResultCode::Unknown(99));
        assert_eq!(result.description(), "unknown error code 99");
    }

    #[test]
    fn test_success_envelope() {
        assert!(check_envelope(&document(json!({"result": 1}))).is_ok());
    }

    #[test]
    fn test_envelope_without_result() {
        assert!(check_envelope(&document(json!({"devt": 1700000000}))).is_ok());
    }

    #[test]
    fn test_unauthorized_envelope() {
        match check_envelope(&document(json!({"result": 2}))) {
            Err(Error::Device { code, message }) => {
                assert_eq!(code, 2);
                assert_eq!(
                    message,
                    "Unauthorized (e.g. missing password or password is incorrect)"
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_code_envelope() {
        match check_envelope(&document(json!({"result": 7}))) {
            Err(Error::Device { code, message }) => {
                assert_eq!(code, 7);
                assert_eq!(message, "unknown error code 7");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_non_integer_result() {
        assert!(matches!(
            check_envelope(&document(json!({"result": "ok"}))),
            Err(Error::InvalidValue { .. })
        ));
    }
}
