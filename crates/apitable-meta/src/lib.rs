//! Object metadata access for apitable
//!
//! This crate describes API resource objects through capabilities instead of
//! concrete types. An [`Object`] may expose object metadata (name, creation
//! timestamp, ...), collection metadata (continuation token, remaining item
//! count, ...) and list iteration. Callers go through the constructor
//! functions in [`access`] and branch on the returned `Result`.
//!
//! # Features
//!
//! - **Accessors**: [`ObjectMetaAccessor`], [`ListMetaAccessor`] and the
//!   shared [`CommonAccessor`]
//! - **Typed objects**: [`ObjectMeta`], [`ListMeta`] and the generic
//!   [`ObjectList`] collection
//! - **Dynamic objects**: [`Unstructured`] and [`UnstructuredList`] backed by
//!   JSON
//! - **Request context**: [`RequestContext`] carrying a [`RequestInfo`] that
//!   identifies the resource a request targets
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use apitable_meta::{access, Object, ObjectList, Unstructured};
//! use serde_json::json;
//!
//! let pod = Unstructured::new(json!({
//!     "kind": "Pod",
//!     "metadata": { "name": "web-0", "resourceVersion": "12" }
//! }));
//!
//! let meta = access::accessor(&pod).unwrap();
//! assert_eq!(meta.name(), "web-0");
//! assert_eq!(meta.resource_version(), "12");
//!
//! let list: Arc<dyn Object> = Arc::new(ObjectList::new(vec![pod]));
//! assert_eq!(access::list_items(list.as_ref()).unwrap().count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod access;
pub mod error;
pub mod group_resource;
pub mod object;
pub mod request;
pub mod types;
pub mod unstructured;

// Re-exports for convenience
pub use error::{MetaError, Result};
pub use group_resource::GroupResource;
pub use object::{
	CommonAccessor, ListMetaAccessor, ListObject, Object, ObjectEncode, ObjectItems,
	ObjectMetaAccessor,
};
pub use request::{RequestContext, RequestInfo, request_info_from};
pub use types::{ListMeta, ObjectList, ObjectMeta};
pub use unstructured::{Unstructured, UnstructuredList};
