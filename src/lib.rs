//! # apitable
//!
//! Generic table rendering of API resources.
//!
//! API servers answer `Accept: ...;as=Table` requests with a [`tables::Table`]
//! so that command line clients can print any resource without knowing its
//! schema. Resources that do not define their own columns fall back to the
//! [`tables::DefaultTableConvertor`], which renders a `Name` and a
//! `Created At` column from the object metadata.
//!
//! ## Crates
//!
//! - [`meta`] - object model: metadata accessors, list iteration, unstructured
//!   objects and the request context
//! - [`tables`] - table wire types, the default convertor and its errors
//!   (feature `tables`, enabled by default)
//!
//! ## Quick Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use apitable::meta::{GroupResource, Object, RequestContext, RequestInfo, UnstructuredList};
//! use apitable::tables::{DefaultTableConvertor, TableConvertor, TableOptions};
//! use serde_json::json;
//!
//! let list: UnstructuredList = serde_json::from_value(json!({
//!     "metadata": { "resourceVersion": "42" },
//!     "items": [
//!         { "metadata": { "name": "a", "creationTimestamp": "2024-01-01T00:00:00Z" } },
//!         { "metadata": { "name": "b", "creationTimestamp": "2024-01-02T00:00:00Z" } }
//!     ]
//! }))
//! .unwrap();
//! let object: Arc<dyn Object> = Arc::new(list);
//!
//! let ctx = RequestContext::new().with(RequestInfo::new("example.com", "widgets"));
//! let convertor = DefaultTableConvertor::new(GroupResource::new("example.com", "widgets"));
//! let table = convertor
//!     .convert_to_table(&ctx, &object, Some(&TableOptions::default()))
//!     .unwrap();
//!
//! assert_eq!(table.resource_version, "42");
//! assert_eq!(table.rows.len(), 2);
//! assert_eq!(table.rows[1].cells[0], json!("b"));
//! ```

pub mod meta;
#[cfg(feature = "tables")]
pub mod tables;

/// Commonly used types
pub mod prelude {
	pub use crate::meta::{
		GroupResource, ListMetaAccessor, Object, ObjectList, ObjectMeta, ObjectMetaAccessor,
		RequestContext, RequestInfo,
	};
	#[cfg(feature = "tables")]
	pub use crate::tables::{
		DefaultTableConvertor, Table, TableConvertor, TableError, TableOptions,
	};
}
