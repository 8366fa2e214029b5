//! Generic table rendering of API resources
//!
//! API servers use tables to let clients display any resource without
//! knowing its schema. This crate provides the table wire types and the
//! default conversion that every resource falls back to when it does not
//! define its own columns.
//!
//! # Features
//!
//! - **Table types**: [`Table`], [`TableColumnDefinition`], [`TableRow`]
//!   with camelCase JSON encoding
//! - **Default conversion**: [`DefaultTableConvertor`] renders `Name` and
//!   `Created At` for single objects and collections alike
//! - **Collection metadata**: resource version, continuation token and
//!   remaining item count are carried over from the source collection
//! - **Errors**: objects without metadata yield [`TableError::NotAcceptable`],
//!   which maps to a 406 [`Status`] body
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Object] --> B{list?}
//!     B -->|yes| C[each item]
//!     B -->|no| D[object itself]
//!     C --> E[metadata accessor]
//!     D --> E
//!     E -->|ok| F[TableRow]
//!     E -->|missing| G[TableError::NotAcceptable]
//!     F --> H[Table]
//!     A --> I[collection metadata] --> H
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod convertor;
pub mod docs;
pub mod error;
pub mod status;
pub mod table;

// Re-exports for convenience
pub use convertor::{DefaultTableConvertor, TableConvertor, default_column_definitions};
pub use docs::{object_meta_docs, object_meta_field_doc};
pub use error::{Result, TableError};
pub use status::{STATUS_FAILURE, Status};
pub use table::{
	EmbeddedObject, Table, TableColumnDefinition, TableOptions, TableRow, TableRowCondition,
};
