//! Table rendering module.
//!
//! This module provides the table wire types and the default table convertor.
//!
//! # Examples
//!
//! ```rust,no_run
//! use apitable::tables::{DefaultTableConvertor, Table, TableConvertor, TableOptions};
//! ```

pub use apitable_tables::*;
