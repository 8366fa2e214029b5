use std::sync::Arc;

use apitable_meta::{Object, ObjectList, ObjectMeta, ObjectMetaAccessor, access};
use rstest::*;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Service {
	metadata: ObjectMeta,
	#[serde(default)]
	ports: Vec<u16>,
}

impl Object for Service {
	fn object_meta(&self) -> Option<&dyn ObjectMetaAccessor> {
		Some(&self.metadata)
	}
}

#[fixture]
fn services() -> ObjectList<Service> {
	serde_json::from_value(json!({
		"metadata": {"resourceVersion": "300", "continue": "more", "remainingItemCount": 12},
		"items": [
			{"metadata": {"name": "frontend", "creationTimestamp": "2024-05-01T12:00:00Z"}, "ports": [80, 443]},
			{"metadata": {"name": "backend"}}
		]
	}))
	.unwrap()
}

#[rstest]
fn test_decoded_list_exposes_list_metadata(services: ObjectList<Service>) {
	let meta = access::list_accessor(&services).unwrap();

	assert_eq!(meta.resource_version(), "300");
	assert_eq!(meta.continue_token(), "more");
	assert_eq!(meta.remaining_item_count(), Some(12));
	assert!(access::accessor(&services).is_err());
}

#[rstest]
fn test_list_items_share_elements(services: ObjectList<Service>) {
	let first = Arc::clone(&services.items[0]);
	let items: Vec<Arc<dyn Object>> = access::list_items(&services).unwrap().collect();

	assert_eq!(items.len(), 2);
	assert_eq!(
		access::accessor(items[0].as_ref()).unwrap().name(),
		"frontend"
	);
	assert!(std::ptr::eq(
		Arc::as_ptr(&first) as *const u8,
		Arc::as_ptr(&items[0]) as *const u8
	));
}

#[rstest]
fn test_list_encodes_items_in_order(services: ObjectList<Service>) {
	let value = serde_json::to_value(&services).unwrap();

	assert_eq!(value["items"][0]["metadata"]["name"], json!("frontend"));
	assert_eq!(value["items"][0]["ports"], json!([80, 443]));
	assert_eq!(value["items"][1]["metadata"]["name"], json!("backend"));
	assert_eq!(value["metadata"]["continue"], json!("more"));
}
