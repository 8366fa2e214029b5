//! Table wire types
//!
//! A [`Table`] is the generic tabular rendering of one object or a
//! collection. Field names on the wire are camelCase.

use std::sync::Arc;

use apitable_meta::{Object, ObjectEncode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Tabular representation of an object or a collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
	/// Version of the collection snapshot
	#[serde(default)]
	pub resource_version: String,

	/// Deprecated legacy URI of the collection
	#[serde(default)]
	pub self_link: String,

	/// Pagination cursor for the next chunk
	#[serde(rename = "continue", default)]
	pub continue_token: String,

	/// Number of items left after this chunk, if known
	#[serde(default)]
	pub remaining_item_count: Option<i64>,

	/// Column headers, omitted when headers were suppressed
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub column_definitions: Vec<TableColumnDefinition>,

	/// One row per source object, in source order
	#[serde(default)]
	pub rows: Vec<TableRow>,
}

/// Describes one column of a [`Table`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumnDefinition {
	/// Human readable header
	pub name: String,

	/// OpenAPI type of the cells (`string`, `integer`, `date`, ...)
	#[serde(rename = "type")]
	pub type_name: String,

	/// Optional OpenAPI format modifier; `name` marks the primary identifier
	#[serde(default)]
	pub format: String,

	/// Human readable description of the column
	#[serde(default)]
	pub description: String,

	/// Importance relative to other columns, lower is more important
	///
	/// Renderers may drop high numbers when space is limited.
	#[serde(default)]
	pub priority: i32,
}

impl TableColumnDefinition {
	/// Creates a column with the given header and OpenAPI type
	pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			type_name: type_name.into(),
			..Self::default()
		}
	}

	/// Sets the format modifier
	pub fn with_format(mut self, format: impl Into<String>) -> Self {
		self.format = format.into();
		self
	}

	/// Sets the description
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	/// Sets the priority
	pub fn with_priority(mut self, priority: i32) -> Self {
		self.priority = priority;
		self
	}
}

/// A single row of a [`Table`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRow {
	/// One value per column, in column order
	pub cells: Vec<Value>,

	/// Additional row status for human readers
	#[serde(default)]
	pub conditions: Vec<TableRowCondition>,

	/// The source object this row was built from
	#[serde(default, skip_serializing_if = "EmbeddedObject::is_empty")]
	pub object: EmbeddedObject,
}

/// Row-level condition, such as `Completed`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRowCondition {
	/// Condition type
	#[serde(rename = "type")]
	pub condition_type: String,

	/// `True`, `False` or `Unknown`
	pub status: String,

	/// Machine readable reason for the last transition
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub reason: String,

	/// Human readable details
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub message: String,
}

/// An object embedded in a [`TableRow`]
///
/// Rows built by a converter hold a shared reference to the live source
/// object and encode it on serialization. Decoded rows hold the raw JSON.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedObject {
	object: Option<Arc<dyn Object>>,
	raw: Option<Value>,
}

impl EmbeddedObject {
	/// Embeds a live object
	pub fn from_object(object: Arc<dyn Object>) -> Self {
		Self {
			object: Some(object),
			raw: None,
		}
	}

	/// Embeds already encoded JSON
	pub fn from_raw(raw: Value) -> Self {
		Self {
			object: None,
			raw: Some(raw),
		}
	}

	/// The live object, if this row was built from one
	pub fn object(&self) -> Option<&Arc<dyn Object>> {
		self.object.as_ref()
	}

	/// The raw JSON, if this row was decoded
	pub fn raw(&self) -> Option<&Value> {
		self.raw.as_ref()
	}

	/// Whether nothing is embedded
	pub fn is_empty(&self) -> bool {
		self.object.is_none() && self.raw.is_none()
	}

	/// JSON form of the embedded object
	pub fn to_json(&self) -> serde_json::Result<Option<Value>> {
		match &self.object {
			Some(object) => ObjectEncode::encode_json(object.as_ref()).map(Some),
			None => Ok(self.raw.clone()),
		}
	}
}

impl Serialize for EmbeddedObject {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.to_json()
			.map_err(serde::ser::Error::custom)?
			.serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for EmbeddedObject {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = Option::<Value>::deserialize(deserializer)?;
		Ok(Self { object: None, raw })
	}
}

/// Options recognised when converting to a [`Table`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
	/// Omit column definitions from the result
	#[serde(default)]
	pub no_headers: bool,
}

impl TableOptions {
	/// Options with headers suppressed
	pub fn no_headers() -> Self {
		Self { no_headers: true }
	}
}
