//! JSON-backed objects with dynamically read metadata

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::object::{
	CommonAccessor, ListMetaAccessor, ListObject, Object, ObjectItems, ObjectMetaAccessor,
};

fn metadata_field<'a>(metadata: Option<&'a Value>, key: &str) -> Option<&'a Value> {
	metadata.and_then(|m| m.get(key))
}

fn metadata_str<'a>(metadata: Option<&'a Value>, key: &str) -> &'a str {
	metadata_field(metadata, key)
		.and_then(Value::as_str)
		.unwrap_or_default()
}

/// An object of unknown kind held as raw JSON
///
/// Metadata is read from the `metadata` field on every access. Only JSON
/// objects expose metadata; any other JSON value is opaque. A JSON object
/// whose `items` field is an array is a collection: its elements are yielded
/// as [`Unstructured`] values and its `metadata` is read as list metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unstructured(Value);

impl Unstructured {
	/// Wraps a JSON value
	pub fn new(value: Value) -> Self {
		Self(value)
	}

	/// The wrapped JSON value
	pub fn value(&self) -> &Value {
		&self.0
	}

	/// Unwraps the JSON value
	pub fn into_value(self) -> Value {
		self.0
	}

	/// The `kind` field, empty if absent
	pub fn kind(&self) -> &str {
		self.0.get("kind").and_then(Value::as_str).unwrap_or_default()
	}

	/// Reports whether the value is a collection document
	pub fn is_list(&self) -> bool {
		self.list_items().is_some()
	}

	fn metadata(&self) -> Option<&Value> {
		self.0.get("metadata")
	}

	fn list_items(&self) -> Option<&Vec<Value>> {
		self.0.get("items").and_then(Value::as_array)
	}
}

impl From<Value> for Unstructured {
	fn from(value: Value) -> Self {
		Self::new(value)
	}
}

impl CommonAccessor for Unstructured {
	fn resource_version(&self) -> &str {
		metadata_str(self.metadata(), "resourceVersion")
	}

	fn self_link(&self) -> &str {
		metadata_str(self.metadata(), "selfLink")
	}
}

impl ObjectMetaAccessor for Unstructured {
	fn name(&self) -> &str {
		metadata_str(self.metadata(), "name")
	}

	fn namespace(&self) -> &str {
		metadata_str(self.metadata(), "namespace")
	}

	fn creation_timestamp(&self) -> Option<DateTime<Utc>> {
		let raw = metadata_field(self.metadata(), "creationTimestamp")?.as_str()?;
		DateTime::parse_from_rfc3339(raw)
			.ok()
			.map(|ts| ts.with_timezone(&Utc))
	}
}

impl ListMetaAccessor for Unstructured {
	fn continue_token(&self) -> &str {
		metadata_str(self.metadata(), "continue")
	}

	fn remaining_item_count(&self) -> Option<i64> {
		metadata_field(self.metadata(), "remainingItemCount").and_then(Value::as_i64)
	}
}

impl ListObject for Unstructured {
	fn items(&self) -> ObjectItems<'_> {
		let items = self.list_items().map(Vec::as_slice).unwrap_or_default();
		Box::new(
			items
				.iter()
				.map(|item| Arc::new(Unstructured(item.clone())) as Arc<dyn Object>),
		)
	}
}

impl Object for Unstructured {
	fn object_meta(&self) -> Option<&dyn ObjectMetaAccessor> {
		if self.0.is_object() && !self.is_list() {
			Some(self)
		} else {
			None
		}
	}

	fn list_meta(&self) -> Option<&dyn ListMetaAccessor> {
		if self.is_list() { Some(self) } else { None }
	}

	fn as_list(&self) -> Option<&dyn ListObject> {
		if self.is_list() { Some(self) } else { None }
	}
}

/// A collection of [`Unstructured`] items
///
/// Top-level fields other than `items` (such as `kind`, `apiVersion` and
/// `metadata`) are kept verbatim in `fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnstructuredList {
	/// Every top-level field except `items`
	#[serde(flatten)]
	pub fields: Map<String, Value>,

	/// Elements in server order
	#[serde(default)]
	pub items: Vec<Arc<Unstructured>>,
}

impl UnstructuredList {
	/// Creates a collection from the given items
	pub fn new(items: impl IntoIterator<Item = Unstructured>) -> Self {
		Self {
			fields: Map::new(),
			items: items.into_iter().map(Arc::new).collect(),
		}
	}

	/// Sets a top-level field such as `metadata`
	pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
		self.fields.insert(key.into(), value);
		self
	}

	fn metadata(&self) -> Option<&Value> {
		self.fields.get("metadata")
	}
}

impl CommonAccessor for UnstructuredList {
	fn resource_version(&self) -> &str {
		metadata_str(self.metadata(), "resourceVersion")
	}

	fn self_link(&self) -> &str {
		metadata_str(self.metadata(), "selfLink")
	}
}

impl ListMetaAccessor for UnstructuredList {
	fn continue_token(&self) -> &str {
		metadata_str(self.metadata(), "continue")
	}

	fn remaining_item_count(&self) -> Option<i64> {
		metadata_field(self.metadata(), "remainingItemCount").and_then(Value::as_i64)
	}
}

impl ListObject for UnstructuredList {
	fn items(&self) -> ObjectItems<'_> {
		Box::new(
			self.items
				.iter()
				.map(|item| Arc::clone(item) as Arc<dyn Object>),
		)
	}
}

impl Object for UnstructuredList {
	fn list_meta(&self) -> Option<&dyn ListMetaAccessor> {
		Some(self)
	}

	fn as_list(&self) -> Option<&dyn ListObject> {
		Some(self)
	}
}
