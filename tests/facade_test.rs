use std::sync::Arc;

use apitable::prelude::*;
use apitable::tables::Status;
use chrono::{TimeZone, Utc};
use rstest::*;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
struct Deployment {
	metadata: ObjectMeta,
	replicas: u32,
}

impl Object for Deployment {
	fn object_meta(&self) -> Option<&dyn ObjectMetaAccessor> {
		Some(&self.metadata)
	}
}

#[derive(Debug, Serialize)]
struct Scale {
	replicas: u32,
}

impl Object for Scale {}

#[fixture]
fn convertor() -> DefaultTableConvertor {
	DefaultTableConvertor::new(GroupResource::new("apps", "deployments"))
}

#[rstest]
fn test_typed_list_through_prelude(convertor: DefaultTableConvertor) {
	let created = Utc.with_ymd_and_hms(2024, 3, 2, 15, 4, 5).unwrap();
	let list = ObjectList::new(vec![
		Deployment {
			metadata: ObjectMeta::new("api").with_creation_timestamp(created),
			replicas: 3,
		},
		Deployment {
			metadata: ObjectMeta::new("worker").with_creation_timestamp(created),
			replicas: 1,
		},
	]);
	let object: Arc<dyn Object> = Arc::new(list);

	let table: Table = convertor
		.convert_to_table(&RequestContext::new(), &object, None)
		.unwrap();

	assert_eq!(table.rows[0].cells, vec![json!("api"), json!("2024-03-02T15:04:05Z")]);
	assert_eq!(table.rows[1].cells[0], json!("worker"));
	assert_eq!(
		table.rows[1].object.to_json().unwrap().unwrap()["replicas"],
		json!(1)
	);
}

#[rstest]
fn test_subresource_error_body(convertor: DefaultTableConvertor) {
	let ctx = RequestContext::new().with(RequestInfo::new("apps", "deployments").with_verb("get"));
	let object: Arc<dyn Object> = Arc::new(Scale { replicas: 2 });

	let err: TableError = convertor
		.convert_to_table(&ctx, &object, Some(&TableOptions::no_headers()))
		.unwrap_err();
	let body = serde_json::to_value(Status::from(err)).unwrap();

	assert_eq!(body["code"], json!(406));
	assert_eq!(body["reason"], json!("NotAcceptable"));
	assert_eq!(
		body["message"],
		json!("the resource deployments.apps does not support being converted to a Table")
	);
}
