//! Request-scoped context and resource identity
//!
//! A [`RequestContext`] is an immutable, type-keyed value store attached to a
//! request. The routing layer typically stores a [`RequestInfo`] in it so that
//! handlers further down can tell which resource the request targets.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::group_resource::GroupResource;

/// Attributes of a resource request, as resolved from its URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
	/// Lowercase action verb (`get`, `list`, `watch`, ...)
	#[serde(default)]
	pub verb: String,
	/// API group, empty for the core group
	#[serde(default)]
	pub api_group: String,
	/// API version within the group
	#[serde(default)]
	pub api_version: String,
	/// Namespace, empty for cluster-scoped requests
	#[serde(default)]
	pub namespace: String,
	/// Plural resource name
	#[serde(default)]
	pub resource: String,
	/// Subresource such as `status` or `scale`
	#[serde(default)]
	pub subresource: String,
	/// Object name for single-object requests
	#[serde(default)]
	pub name: String,
}

impl RequestInfo {
	/// Creates request info for the given group and resource
	pub fn new(api_group: impl Into<String>, resource: impl Into<String>) -> Self {
		Self {
			api_group: api_group.into(),
			resource: resource.into(),
			..Self::default()
		}
	}

	/// Sets the verb
	pub fn with_verb(mut self, verb: impl Into<String>) -> Self {
		self.verb = verb.into();
		self
	}

	/// Sets the namespace
	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = namespace.into();
		self
	}

	/// The qualified resource this request targets
	pub fn group_resource(&self) -> GroupResource {
		GroupResource::new(self.api_group.clone(), self.resource.clone())
	}
}

/// Type-keyed, immutable value store scoped to a single request
///
/// Cloning is cheap; clones share the stored values.
///
/// # Examples
///
/// ```
/// use apitable_meta::{RequestContext, RequestInfo, request_info_from};
///
/// let ctx = RequestContext::new().with(RequestInfo::new("apps", "deployments"));
/// let info = request_info_from(&ctx).unwrap();
/// assert_eq!(info.resource, "deployments");
///
/// assert!(request_info_from(&RequestContext::new()).is_none());
/// ```
#[derive(Clone, Default)]
pub struct RequestContext {
	values: Arc<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl RequestContext {
	/// Creates an empty context
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a context that additionally holds `value`
	///
	/// A value of the same type already present is replaced.
	pub fn with<T: Send + Sync + 'static>(mut self, value: T) -> Self {
		Arc::make_mut(&mut self.values).insert(TypeId::of::<T>(), Arc::new(value));
		self
	}

	/// Borrows the value of type `T`, if present
	pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
		self.values
			.get(&TypeId::of::<T>())
			.and_then(|value| value.downcast_ref::<T>())
	}

	/// Checks whether a value of type `T` is present
	pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
		self.values.contains_key(&TypeId::of::<T>())
	}

	/// Number of stored values
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Whether the context holds no values
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl fmt::Debug for RequestContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RequestContext")
			.field("values", &self.values.len())
			.finish_non_exhaustive()
	}
}

/// Returns the [`RequestInfo`] stored in `ctx`, if any
pub fn request_info_from(ctx: &RequestContext) -> Option<&RequestInfo> {
	ctx.get::<RequestInfo>()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[derive(Clone, Debug, PartialEq)]
	struct TraceId(String);

	#[rstest]
	fn test_with_and_get() {
		let ctx = RequestContext::new().with(TraceId("abc".to_string()));

		assert_eq!(ctx.get::<TraceId>(), Some(&TraceId("abc".to_string())));
		assert_eq!(ctx.get::<RequestInfo>(), None);
		assert!(ctx.contains::<TraceId>());
		assert_eq!(ctx.len(), 1);
	}

	#[rstest]
	fn test_with_replaces_same_type() {
		let ctx = RequestContext::new()
			.with(RequestInfo::new("apps", "deployments"))
			.with(RequestInfo::new("batch", "jobs"));

		assert_eq!(ctx.len(), 1);
		assert_eq!(request_info_from(&ctx).unwrap().api_group, "batch");
	}

	#[rstest]
	fn test_clones_do_not_observe_later_values() {
		let base = RequestContext::new().with(TraceId("base".to_string()));
		let extended = base.clone().with(RequestInfo::new("", "pods"));

		assert!(!base.contains::<RequestInfo>());
		assert!(extended.contains::<RequestInfo>());
		assert!(extended.contains::<TraceId>());
	}

	#[rstest]
	fn test_request_info_group_resource() {
		let info = RequestInfo::new("apps", "widgets")
			.with_verb("list")
			.with_namespace("prod");

		assert_eq!(info.group_resource(), GroupResource::new("apps", "widgets"));
		assert_eq!(info.verb, "list");
		assert_eq!(info.namespace, "prod");
	}

	#[rstest]
	fn test_empty_context_debug() {
		let ctx = RequestContext::new();
		assert!(ctx.is_empty());
		assert!(format!("{ctx:?}").starts_with("RequestContext"));
	}
}
