//! Conversion of objects into tables

use std::sync::Arc;

use apitable_meta::{GroupResource, Object, RequestContext, access, request_info_from};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::docs::object_meta_field_doc;
use crate::error::{Result, TableError};
use crate::table::{EmbeddedObject, Table, TableColumnDefinition, TableOptions, TableRow};

/// Rendering of an unset creation timestamp
const ZERO_TIMESTAMP: &str = "0001-01-01T00:00:00Z";

/// Converts objects into their [`Table`] representation
pub trait TableConvertor: Send + Sync {
	/// Converts a single object or a collection into a table
	///
	/// `options` of `None` behaves like [`TableOptions::default`].
	fn convert_to_table(
		&self,
		ctx: &RequestContext,
		object: &Arc<dyn Object>,
		options: Option<&TableOptions>,
	) -> Result<Table>;
}

/// Generic convertor producing a `Name` and a `Created At` column
///
/// Every object must expose object metadata. Conversion fails as a whole
/// on the first object that does not; partial tables are never returned.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use apitable_meta::{GroupResource, Object, RequestContext, Unstructured};
/// use apitable_tables::{DefaultTableConvertor, TableConvertor};
/// use serde_json::json;
///
/// let convertor = DefaultTableConvertor::new(GroupResource::new("apps", "widgets"));
/// let widget: Arc<dyn Object> = Arc::new(Unstructured::new(json!({
///     "metadata": { "name": "w1", "creationTimestamp": "2024-03-02T15:04:05Z" }
/// })));
///
/// let table = convertor
///     .convert_to_table(&RequestContext::new(), &widget, None)
///     .unwrap();
/// assert_eq!(table.column_definitions.len(), 2);
/// assert_eq!(table.rows[0].cells, vec![json!("w1"), json!("2024-03-02T15:04:05Z")]);
/// ```
#[derive(Debug, Clone)]
pub struct DefaultTableConvertor {
	default_qualified_resource: GroupResource,
}

impl DefaultTableConvertor {
	/// Creates a convertor
	///
	/// `default_qualified_resource` labels errors when the request context
	/// does not identify the resource.
	pub fn new(default_qualified_resource: GroupResource) -> Self {
		Self {
			default_qualified_resource,
		}
	}

	/// The resource used to label errors by default
	pub fn default_qualified_resource(&self) -> &GroupResource {
		&self.default_qualified_resource
	}

	fn qualified_resource(&self, ctx: &RequestContext) -> GroupResource {
		request_info_from(ctx)
			.map(|info| info.group_resource())
			.unwrap_or_else(|| self.default_qualified_resource.clone())
	}

	fn row_for(&self, ctx: &RequestContext, object: Arc<dyn Object>) -> Result<TableRow> {
		let cells = match access::accessor(object.as_ref()) {
			Ok(meta) => vec![
				Value::String(meta.name().to_string()),
				Value::String(format_timestamp(meta.creation_timestamp())),
			],
			Err(err) => {
				let resource = self.qualified_resource(ctx);
				tracing::debug!(%resource, error = %err, "object cannot be converted to a table");
				return Err(TableError::NotAcceptable { resource });
			}
		};

		Ok(TableRow {
			cells,
			conditions: Vec::new(),
			object: EmbeddedObject::from_object(object),
		})
	}
}

impl TableConvertor for DefaultTableConvertor {
	fn convert_to_table(
		&self,
		ctx: &RequestContext,
		object: &Arc<dyn Object>,
		options: Option<&TableOptions>,
	) -> Result<Table> {
		let rows = match access::list_items(object.as_ref()) {
			Some(items) => items
				.map(|item| self.row_for(ctx, item))
				.collect::<Result<Vec<_>>>()?,
			None => vec![self.row_for(ctx, Arc::clone(object))?],
		};

		let mut table = Table {
			rows,
			..Table::default()
		};

		if let Ok(list) = access::list_accessor(object.as_ref()) {
			table.resource_version = list.resource_version().to_string();
			table.self_link = list.self_link().to_string();
			table.continue_token = list.continue_token().to_string();
			table.remaining_item_count = list.remaining_item_count();
		} else if let Ok(common) = access::common_accessor(object.as_ref()) {
			tracing::debug!(
				resource_version = common.resource_version(),
				"no collection metadata, using object metadata"
			);
			table.resource_version = common.resource_version().to_string();
			table.self_link = common.self_link().to_string();
		}

		let no_headers = options.is_some_and(|opts| opts.no_headers);
		if !no_headers {
			table.column_definitions = default_column_definitions();
		}

		tracing::debug!(
			rows = table.rows.len(),
			headers = !no_headers,
			"converted object to table"
		);
		Ok(table)
	}
}

/// The `Name` and `Created At` columns of the generic table
pub fn default_column_definitions() -> Vec<TableColumnDefinition> {
	vec![
		TableColumnDefinition::new("Name", "string")
			.with_format("name")
			.with_description(object_meta_field_doc("name")),
		TableColumnDefinition::new("Created At", "date")
			.with_description(object_meta_field_doc("creationTimestamp")),
	]
}

/// Formats a creation timestamp as UTC RFC 3339 with whole seconds
fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
	match timestamp {
		Some(ts) => ts.to_rfc3339_opts(SecondsFormat::Secs, true),
		None => ZERO_TIMESTAMP.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use rstest::rstest;

	#[rstest]
	fn test_format_timestamp_truncates_subseconds() {
		let ts = Utc.with_ymd_and_hms(2024, 3, 2, 15, 4, 5).unwrap()
			+ chrono::Duration::milliseconds(750);
		assert_eq!(format_timestamp(Some(ts)), "2024-03-02T15:04:05Z");
	}

	#[rstest]
	fn test_format_timestamp_unset() {
		assert_eq!(format_timestamp(None), "0001-01-01T00:00:00Z");
	}

	#[rstest]
	fn test_default_column_definitions() {
		let columns = default_column_definitions();

		assert_eq!(columns.len(), 2);
		assert_eq!(columns[0].name, "Name");
		assert_eq!(columns[0].type_name, "string");
		assert_eq!(columns[0].format, "name");
		assert_eq!(columns[0].description, object_meta_field_doc("name"));
		assert_eq!(columns[1].name, "Created At");
		assert_eq!(columns[1].type_name, "date");
		assert_eq!(columns[1].format, "");
		assert_eq!(columns[1].priority, 0);
	}

	#[rstest]
	fn test_qualified_resource_prefers_request_info() {
		let convertor = DefaultTableConvertor::new(GroupResource::new("", "things"));
		let ctx = RequestContext::new().with(apitable_meta::RequestInfo::new("apps", "widgets"));

		assert_eq!(
			convertor.qualified_resource(&ctx),
			GroupResource::new("apps", "widgets")
		);
		assert_eq!(
			convertor.qualified_resource(&RequestContext::new()),
			GroupResource::new("", "things")
		);
	}
}
