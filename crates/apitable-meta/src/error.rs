//! Error types for metadata access

use thiserror::Error;

/// Errors that can occur while accessing object metadata
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
	/// The object does not expose object metadata
	#[error("object does not implement the object metadata accessor")]
	NotAnObject,

	/// The object does not expose collection metadata
	#[error("object does not implement the list metadata accessor")]
	NotAList,

	/// A group/resource string could not be parsed
	#[error("invalid group resource '{0}': expected <resource>[.<group>]")]
	InvalidGroupResource(String),
}

/// Result type for metadata operations
pub type Result<T> = std::result::Result<T, MetaError>;
