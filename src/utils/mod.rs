//! Browser utility functions.
//!
//! - [`dom`] - window/document access, selector queries, event listeners

pub mod dom;
