//! Object model module.
//!
//! This module provides metadata accessors, list iteration, unstructured
//! objects and the request context.
//!
//! # Examples
//!
//! ```rust,no_run
//! use apitable::meta::{access, GroupResource, RequestContext, Unstructured};
//! ```

pub use apitable_meta::*;
