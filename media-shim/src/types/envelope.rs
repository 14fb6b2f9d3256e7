use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The `{result, code, msg}` record handed back to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub result: Option<T>,
    pub code: i32,
    pub msg: String
}

impl<T> Envelope<T> {
    pub const OK: i32 = 0;
    pub const FAILED: i32 = 1;
    pub const INVALID_JSON: i32 = 2;

    pub fn ok(result: Option<T>) -> Self {
        Self {
            result,
            code: Self::OK,
            msg: "ok".to_string()
        }
    }

    pub fn failed(msg: impl Into<String>) -> Self {
        Self {
            result: None,
            code: Self::FAILED,
            msg: msg.into()
        }
    }

    /// Captured output was expected to be JSON and wasn't. The raw text is kept in `msg`.
    pub fn invalid_json(err: &serde_json::Error, raw: &str) -> Self {
        Self {
            result: None,
            code: Self::INVALID_JSON,
            msg: format!("{err}resp: {raw}")
        }
    }

    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::JsonParseFailed { source, raw } => Self::invalid_json(source, raw),
            other => Self::failed(other.to_string())
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == Self::OK
    }
}

impl<T: Serialize> Envelope<T> {
    pub fn to_json(&self) -> String {
        // Only fails for maps with non-string keys, which no result type here has.
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(r#"{{"result":null,"code":{},"msg":{:?}}}"#, Self::FAILED, e.to_string())
        })
    }
}
