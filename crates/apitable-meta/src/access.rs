//! Constructor functions for object capabilities
//!
//! Each function inspects an [`Object`] and either returns the requested
//! accessor or a [`MetaError`] describing the missing capability.

use crate::error::{MetaError, Result};
use crate::object::{CommonAccessor, ListMetaAccessor, Object, ObjectItems, ObjectMetaAccessor};

/// Returns the object metadata accessor of `obj`
pub fn accessor(obj: &dyn Object) -> Result<&dyn ObjectMetaAccessor> {
	obj.object_meta().ok_or(MetaError::NotAnObject)
}

/// Returns the collection metadata accessor of `obj`
pub fn list_accessor(obj: &dyn Object) -> Result<&dyn ListMetaAccessor> {
	obj.list_meta().ok_or(MetaError::NotAList)
}

/// Returns the fields shared by object and collection metadata
///
/// Collection metadata wins when an object exposes both.
pub fn common_accessor(obj: &dyn Object) -> Result<&dyn CommonAccessor> {
	if let Some(list) = obj.list_meta() {
		return Ok(list);
	}
	match obj.object_meta() {
		Some(meta) => Ok(meta),
		None => Err(MetaError::NotAnObject),
	}
}

/// Reports whether `obj` is a collection
pub fn is_list_type(obj: &dyn Object) -> bool {
	obj.as_list().is_some()
}

/// Iterates the elements of `obj`, or returns `None` if it is not a collection
pub fn list_items(obj: &dyn Object) -> Option<ObjectItems<'_>> {
	obj.as_list().map(|list| list.items())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::{ListMeta, ObjectList, ObjectMeta};
	use crate::unstructured::Unstructured;
	use rstest::rstest;
	use serde::Serialize;
	use serde_json::json;

	#[derive(Debug, Serialize)]
	struct Blob(Vec<u8>);

	impl Object for Blob {}

	#[derive(Debug, Serialize)]
	struct Secret {
		metadata: ObjectMeta,
	}

	impl Object for Secret {
		fn object_meta(&self) -> Option<&dyn ObjectMetaAccessor> {
			Some(&self.metadata)
		}
	}

	#[rstest]
	fn test_accessor_on_opaque_object() {
		let blob = Blob(vec![1, 2, 3]);
		assert_eq!(accessor(&blob).err(), Some(MetaError::NotAnObject));
		assert_eq!(list_accessor(&blob).err(), Some(MetaError::NotAList));
		assert!(common_accessor(&blob).is_err());
		assert!(!is_list_type(&blob));
		assert!(list_items(&blob).is_none());
	}

	#[rstest]
	fn test_common_accessor_falls_back_to_object_meta() {
		let secret = Secret {
			metadata: ObjectMeta::new("token")
				.with_resource_version("7")
				.with_self_link("/api/v1/secrets/token"),
		};

		assert!(list_accessor(&secret).is_err());
		let common = common_accessor(&secret).unwrap();
		assert_eq!(common.resource_version(), "7");
		assert_eq!(common.self_link(), "/api/v1/secrets/token");
	}

	#[rstest]
	fn test_common_accessor_prefers_list_meta() {
		let list = ObjectList::new(Vec::<Secret>::new()).with_metadata(ListMeta {
			resource_version: "99".to_string(),
			..ListMeta::default()
		});

		assert!(is_list_type(&list));
		assert_eq!(common_accessor(&list).unwrap().resource_version(), "99");
	}

	#[rstest]
	fn test_list_items_preserves_order() {
		let list = ObjectList::new(vec![
			Unstructured::new(json!({"metadata": {"name": "first"}})),
			Unstructured::new(json!({"metadata": {"name": "second"}})),
		]);

		let names: Vec<String> = list_items(&list)
			.unwrap()
			.map(|item| accessor(item.as_ref()).unwrap().name().to_string())
			.collect();
		assert_eq!(names, vec!["first", "second"]);
	}
}
