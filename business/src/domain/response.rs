use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Uniform outcome returned by every application service call.
///
/// `result` is only meaningful when `is_successful` is true; on failure
/// `error_message` carries a human-readable reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    pub is_successful: bool,
    pub result: Option<T>,
    pub error_message: Option<String>,
}

impl<T> ServiceResponse<T> {
    pub fn success(result: T) -> Self {
        Self {
            is_successful: true,
            result: Some(result),
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_successful: false,
            result: None,
            error_message: Some(message.into()),
        }
    }

    /// Converts back into a `Result`, yielding the error message on failure.
    pub fn into_result(self) -> Result<T, String> {
        match (self.is_successful, self.result) {
            (true, Some(result)) => Ok(result),
            (_, _) => Err(self
                .error_message
                .unwrap_or_else(|| "Unknown error.".to_string())),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for ServiceResponse<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => ServiceResponse::success(value),
            Err(err) => ServiceResponse::failure(err.to_string()),
        }
    }
}
