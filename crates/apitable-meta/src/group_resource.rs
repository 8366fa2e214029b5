//! Qualified resource names

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MetaError;

/// A resource qualified by its API group
///
/// The core group is represented by an empty `group`. The text form is
/// `<resource>.<group>`, or just `<resource>` for the core group.
///
/// # Example
///
/// ```rust
/// use apitable_meta::GroupResource;
///
/// let widgets: GroupResource = "widgets.apps".parse().unwrap();
/// assert_eq!(widgets, GroupResource::new("apps", "widgets"));
/// assert_eq!(widgets.to_string(), "widgets.apps");
/// assert_eq!(GroupResource::new("", "pods").to_string(), "pods");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupResource {
	/// API group, empty for the core group
	#[serde(default)]
	pub group: String,
	/// Plural resource name
	pub resource: String,
}

impl GroupResource {
	/// Creates a new group resource
	pub fn new(group: impl Into<String>, resource: impl Into<String>) -> Self {
		Self {
			group: group.into(),
			resource: resource.into(),
		}
	}
}

impl fmt::Display for GroupResource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.group.is_empty() {
			f.write_str(&self.resource)
		} else {
			write!(f, "{}.{}", self.resource, self.group)
		}
	}
}

impl FromStr for GroupResource {
	type Err = MetaError;

	/// Parses `<resource>.<group>`; everything after the first `.` is the group.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (resource, group) = s.split_once('.').unwrap_or((s, ""));
		if resource.is_empty() {
			return Err(MetaError::InvalidGroupResource(s.to_string()));
		}
		Ok(Self::new(group, resource))
	}
}
