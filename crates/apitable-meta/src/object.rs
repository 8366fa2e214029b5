//! Capability traits for API resource objects

use std::fmt::Debug;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Fields shared by object metadata and collection metadata
pub trait CommonAccessor {
	/// Opaque version token of the object or collection snapshot
	fn resource_version(&self) -> &str;

	/// Legacy URI of the object or collection
	fn self_link(&self) -> &str;
}

/// Read access to the metadata of a single object
pub trait ObjectMetaAccessor: CommonAccessor {
	/// Name of the object, unique within its namespace
	fn name(&self) -> &str;

	/// Namespace of the object, empty for cluster-scoped objects
	fn namespace(&self) -> &str;

	/// Server time at which the object was created, `None` if unset
	fn creation_timestamp(&self) -> Option<DateTime<Utc>>;
}

/// Read access to the metadata of a collection
pub trait ListMetaAccessor: CommonAccessor {
	/// Pagination cursor for the next chunk, empty when the list is complete
	fn continue_token(&self) -> &str;

	/// Number of items left after this chunk, if the server computed it
	fn remaining_item_count(&self) -> Option<i64>;
}

/// Lazy, finite, single-pass sequence of list elements
pub type ObjectItems<'a> = Box<dyn Iterator<Item = Arc<dyn Object>> + 'a>;

/// A collection of objects
pub trait ListObject {
	/// Yields every element of the collection in order
	fn items(&self) -> ObjectItems<'_>;
}

/// JSON encoding of an object, implemented for every serializable type
pub trait ObjectEncode {
	/// Encodes `self` as a JSON value
	fn encode_json(&self) -> serde_json::Result<Value>;
}

impl<T: Serialize> ObjectEncode for T {
	fn encode_json(&self) -> serde_json::Result<Value> {
		serde_json::to_value(self)
	}
}

/// An API resource object
///
/// Every capability is optional. The defaults report that the object has no
/// metadata and is not a collection, so an opaque payload only needs an
/// empty `impl Object for T {}`.
///
/// # Example
///
/// ```rust
/// use apitable_meta::{Object, ObjectMeta, ObjectMetaAccessor};
/// use serde::Serialize;
///
/// #[derive(Debug, Serialize)]
/// struct ConfigMap {
///     metadata: ObjectMeta,
/// }
///
/// impl Object for ConfigMap {
///     fn object_meta(&self) -> Option<&dyn ObjectMetaAccessor> {
///         Some(&self.metadata)
///     }
/// }
///
/// let cm = ConfigMap { metadata: ObjectMeta::new("settings") };
/// assert_eq!(cm.object_meta().unwrap().name(), "settings");
/// assert!(cm.as_list().is_none());
/// ```
pub trait Object: ObjectEncode + Debug + Send + Sync + 'static {
	/// Metadata of a single object
	fn object_meta(&self) -> Option<&dyn ObjectMetaAccessor> {
		None
	}

	/// Metadata of a collection
	fn list_meta(&self) -> Option<&dyn ListMetaAccessor> {
		None
	}

	/// Element iteration, for collections only
	fn as_list(&self) -> Option<&dyn ListObject> {
		None
	}
}
