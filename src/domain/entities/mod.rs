//! Core domain entities.
//!
//! - [`Link`] - A stored short link
//! - [`NewLink`] - Input for inserting a link

pub mod link;

pub use link::{Link, MAX_CODE_LENGTH, MAX_TARGET_LENGTH, NewLink};
