//! Concrete metadata types and the generic object collection

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::object::{
	CommonAccessor, ListMetaAccessor, ListObject, Object, ObjectItems, ObjectMetaAccessor,
};

/// Metadata carried by every persisted object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
	/// Object name, unique within a namespace
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub name: String,

	/// Namespace, empty for cluster-scoped objects
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub namespace: String,

	/// Server-assigned unique identifier
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub uid: String,

	/// Opaque internal version of the object
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub resource_version: String,

	/// Deprecated legacy URI of the object
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub self_link: String,

	/// Server time at which the object was created
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub creation_timestamp: Option<DateTime<Utc>>,

	/// Identifying labels
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub labels: BTreeMap<String, String>,

	/// Non-identifying annotations
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub annotations: BTreeMap<String, String>,
}

impl ObjectMeta {
	/// Creates metadata for an object with the given name
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	/// Sets the namespace
	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = namespace.into();
		self
	}

	/// Sets the resource version
	pub fn with_resource_version(mut self, resource_version: impl Into<String>) -> Self {
		self.resource_version = resource_version.into();
		self
	}

	/// Sets the self link
	pub fn with_self_link(mut self, self_link: impl Into<String>) -> Self {
		self.self_link = self_link.into();
		self
	}

	/// Sets the creation timestamp
	pub fn with_creation_timestamp(mut self, creation_timestamp: DateTime<Utc>) -> Self {
		self.creation_timestamp = Some(creation_timestamp);
		self
	}

	/// Adds a label
	pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.labels.insert(key.into(), value.into());
		self
	}
}

impl CommonAccessor for ObjectMeta {
	fn resource_version(&self) -> &str {
		&self.resource_version
	}

	fn self_link(&self) -> &str {
		&self.self_link
	}
}

impl ObjectMetaAccessor for ObjectMeta {
	fn name(&self) -> &str {
		&self.name
	}

	fn namespace(&self) -> &str {
		&self.namespace
	}

	fn creation_timestamp(&self) -> Option<DateTime<Utc>> {
		self.creation_timestamp
	}
}

/// Metadata carried by collections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
	/// Deprecated legacy URI of the collection
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub self_link: String,

	/// Version of the collection snapshot
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub resource_version: String,

	/// Pagination cursor for the next chunk
	#[serde(rename = "continue", default, skip_serializing_if = "String::is_empty")]
	pub continue_token: String,

	/// Number of items left after this chunk
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub remaining_item_count: Option<i64>,
}

impl CommonAccessor for ListMeta {
	fn resource_version(&self) -> &str {
		&self.resource_version
	}

	fn self_link(&self) -> &str {
		&self.self_link
	}
}

impl ListMetaAccessor for ListMeta {
	fn continue_token(&self) -> &str {
		&self.continue_token
	}

	fn remaining_item_count(&self) -> Option<i64> {
		self.remaining_item_count
	}
}

/// A homogeneous collection of objects
///
/// Items are held behind `Arc` so that consumers can keep references to
/// individual elements without copying them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectList<T> {
	/// Collection metadata
	#[serde(default)]
	pub metadata: ListMeta,

	/// Elements in server order
	#[serde(default = "Vec::new")]
	pub items: Vec<Arc<T>>,
}

impl<T> ObjectList<T> {
	/// Creates a collection from the given items
	pub fn new(items: impl IntoIterator<Item = T>) -> Self {
		Self {
			metadata: ListMeta::default(),
			items: items.into_iter().map(Arc::new).collect(),
		}
	}

	/// Sets the collection metadata
	pub fn with_metadata(mut self, metadata: ListMeta) -> Self {
		self.metadata = metadata;
		self
	}

	/// Appends an item
	pub fn push(&mut self, item: T) {
		self.items.push(Arc::new(item));
	}

	/// Number of items
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the collection has no items
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl<T: Object + Serialize> Object for ObjectList<T> {
	fn list_meta(&self) -> Option<&dyn ListMetaAccessor> {
		Some(&self.metadata)
	}

	fn as_list(&self) -> Option<&dyn ListObject> {
		Some(self)
	}
}

impl<T: Object> ListObject for ObjectList<T> {
	fn items(&self) -> ObjectItems<'_> {
		Box::new(
			self.items
				.iter()
				.map(|item| Arc::clone(item) as Arc<dyn Object>),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_object_meta_wire_names() {
		let meta = ObjectMeta::new("web-0")
			.with_namespace("default")
			.with_resource_version("41")
			.with_creation_timestamp(Utc.with_ymd_and_hms(2024, 3, 2, 15, 4, 5).unwrap())
			.with_label("app", "web");

		let value = serde_json::to_value(&meta).unwrap();
		assert_eq!(
			value,
			json!({
				"name": "web-0",
				"namespace": "default",
				"resourceVersion": "41",
				"creationTimestamp": "2024-03-02T15:04:05Z",
				"labels": {"app": "web"}
			})
		);
	}

	#[rstest]
	fn test_list_meta_continue_field() {
		let meta: ListMeta = serde_json::from_value(json!({
			"resourceVersion": "100",
			"continue": "token-1",
			"remainingItemCount": 25
		}))
		.unwrap();

		assert_eq!(meta.continue_token(), "token-1");
		assert_eq!(meta.remaining_item_count(), Some(25));
		assert_eq!(meta.self_link(), "");
	}

	#[rstest]
	fn test_object_list_push() {
		let mut list = ObjectList::new(vec![ObjectMeta::new("a")]);
		list.push(ObjectMeta::new("b"));
		assert_eq!(list.len(), 2);
		assert!(!list.is_empty());
		assert_eq!(list.items[1].name, "b");
	}
}
