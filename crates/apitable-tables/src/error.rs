//! Error types for table conversion

use apitable_meta::GroupResource;
use http::StatusCode;
use thiserror::Error;

use crate::status::Status;

/// Errors that can occur while converting objects to a table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
	/// The resource cannot be rendered as a table
	#[error("the resource {resource} does not support being converted to a Table")]
	NotAcceptable {
		/// Resource whose objects lack table support
		resource: GroupResource,
	},
}

impl TableError {
	/// HTTP status code to answer with
	pub fn status_code(&self) -> StatusCode {
		match self {
			TableError::NotAcceptable { .. } => StatusCode::NOT_ACCEPTABLE,
		}
	}

	/// Machine readable reason
	pub fn reason(&self) -> &'static str {
		match self {
			TableError::NotAcceptable { .. } => "NotAcceptable",
		}
	}

	/// Structured error body for this error
	pub fn status(&self) -> Status {
		Status::failure(self.status_code(), self.reason(), self.to_string())
	}
}

impl From<TableError> for Status {
	fn from(err: TableError) -> Self {
		err.status()
	}
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
