//! Structured API error bodies

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// `status` value of a failed operation
pub const STATUS_FAILURE: &str = "Failure";

/// Standard API error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
	/// Always `Status`
	pub kind: String,
	/// Always `v1`
	pub api_version: String,
	/// Outcome of the operation
	pub status: String,
	/// Human readable description
	pub message: String,
	/// Machine readable reason, such as `NotAcceptable`
	pub reason: String,
	/// HTTP status code
	pub code: u16,
}

impl Status {
	/// Builds a failure status
	pub fn failure(code: StatusCode, reason: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			kind: "Status".to_string(),
			api_version: "v1".to_string(),
			status: STATUS_FAILURE.to_string(),
			message: message.into(),
			reason: reason.into(),
			code: code.as_u16(),
		}
	}

	/// The HTTP status code, falling back to 500 for out-of-range values
	pub fn status_code(&self) -> StatusCode {
		StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
	}
}
